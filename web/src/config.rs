use clap::Args;
use envelope_core::{InviteConfig, Millis};
use thiserror::Error;

const EMBEDDED: &str = include_str!("../invite.toml");

#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    #[error("invalid invite.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

pub(crate) fn parse_config(text: &str) -> Result<InviteConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Configuration shipped with the page, or the built-in defaults when it
/// does not parse.
pub(crate) fn embedded_config() -> InviteConfig {
    parse_config(EMBEDDED).unwrap_or_else(|err| {
        log::error!("{}, using defaults", err);
        InviteConfig::default()
    })
}

/// Per-visit tweaks read from the URL fragment, e.g.
/// `#-vv&--no-auto-open&--reveal-delay-ms=300`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub(crate) struct Overrides {
    /// Open the envelope automatically after this many milliseconds
    #[arg(long, value_name = "MS")]
    auto_open_ms: Option<Millis>,

    /// Wait for a click instead of opening automatically
    #[arg(long, conflicts_with = "auto_open_ms")]
    no_auto_open: bool,

    /// Delay between the envelope opening and the card appearing
    #[arg(long, value_name = "MS")]
    reveal_delay_ms: Option<Millis>,

    /// Music volume, clamped to 0.0..=1.0
    #[arg(long)]
    volume: Option<f32>,

    /// Never start the music
    #[arg(long)]
    muted: bool,
}

impl Overrides {
    pub(crate) fn apply(&self, config: &mut InviteConfig) {
        let timing = &mut config.timing;
        if let Some(auto_open_ms) = self.auto_open_ms {
            timing.auto_open = true;
            timing.auto_open_ms = auto_open_ms;
        }
        if self.no_auto_open {
            timing.auto_open = false;
        }
        if let Some(reveal_delay_ms) = self.reveal_delay_ms {
            timing.reveal_delay_ms = reveal_delay_ms;
        }

        let audio = &mut config.audio;
        if let Some(volume) = self.volume {
            *audio = audio.clone().with_volume(volume);
        }
        if self.muted {
            audio.muted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        overrides: Overrides,
    }

    fn overrides_from_hash(hash: &str) -> Overrides {
        TestArgs::try_parse_from(hash.split(['#', '&']))
            .unwrap()
            .overrides
    }

    #[test]
    fn embedded_config_parses() {
        let config = parse_config(EMBEDDED).unwrap();
        assert_eq!(config.timing.auto_open_after(), Some(2000));
        assert_eq!(config.timing.reveal_delay_ms, 800);
        assert_eq!(config.audio.src, "/birthday-music.mp3");
        assert_eq!(config.artwork.src, "/invitation.png");
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), InviteConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse_config(
            r#"
            hint = "Click!"

            [audio]
            volume = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.hint, "Click!");
        assert_eq!(config.audio.volume(), 1.0);
        assert!(config.audio.looped);
        assert_eq!(config.timing, InviteConfig::default().timing);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            parse_config("timing = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_hash_changes_nothing() {
        let mut config = InviteConfig::default();
        overrides_from_hash("").apply(&mut config);
        assert_eq!(config, InviteConfig::default());
    }

    #[test]
    fn hash_overrides_timing_and_audio() {
        let mut config = InviteConfig::default();

        overrides_from_hash("#--no-auto-open&--reveal-delay-ms=300&--volume=0.9&--muted")
            .apply(&mut config);

        assert_eq!(config.timing.auto_open_after(), None);
        assert_eq!(config.timing.reveal_delay_ms, 300);
        assert_eq!(config.audio.volume(), 0.9);
        assert!(config.audio.muted);
    }

    #[test]
    fn hash_can_re_enable_auto_open() {
        let mut config = InviteConfig::default();
        config.timing.auto_open = false;

        overrides_from_hash("#--auto-open-ms=50").apply(&mut config);

        assert_eq!(config.timing.auto_open_after(), Some(50));
    }

    #[test]
    fn conflicting_auto_open_flags_are_rejected() {
        assert!(TestArgs::try_parse_from("#--auto-open-ms=5&--no-auto-open".split(['#', '&'])).is_err());
    }
}
