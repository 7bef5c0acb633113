use clap::Parser;
use wasm_bindgen::prelude::*;

mod audio;
mod config;
mod decorations;
mod invitation;
mod timers;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    overrides: config::Overrides,
}

const ROOT_ID: &str = "invite";

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, parse_error) = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => (Some(args), None),
        Err(err) => (None, Some(err)),
    };

    let log_level = args
        .as_ref()
        .map_or(Some(log::Level::Warn), |args| args.verbose.log_level());
    if let Some(log_level) = log_level {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }

    let mut invite = config::embedded_config();
    if let Some(args) = &args {
        args.overrides.apply(&mut invite);
    }
    log::debug!("config: {:?}", invite);

    let Some(root) = document().get_element_by_id(ROOT_ID) else {
        log::error!("Could not find id=\"{}\" element", ROOT_ID);
        return;
    };

    log::info!("Invitation started");
    yew::Renderer::<invitation::InvitationReveal>::with_root_and_props(
        root,
        invitation::InvitationProps { config: invite },
    )
    .render();
}
