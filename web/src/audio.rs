use envelope_core::AudioSettings;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum AudioError {
    #[error("audio element unavailable: {0}")]
    Unavailable(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Owner of the one background track. The element is created on the first
/// [`MusicPlayer::start`] and kept until [`MusicPlayer::stop`].
#[derive(Debug, Default)]
pub(crate) struct MusicPlayer {
    element: Option<HtmlAudioElement>,
}

impl MusicPlayer {
    pub(crate) fn is_loaded(&self) -> bool {
        self.element.is_some()
    }

    /// Starts looping playback. Failures are logged and dropped; the page
    /// works the same without music.
    pub(crate) fn start(&mut self, settings: &AudioSettings) {
        if self.element.is_some() {
            log::debug!("music already started");
            return;
        }
        if settings.muted {
            log::info!("music muted");
            return;
        }

        match Self::create_element(settings) {
            Ok(element) => {
                Self::play(&element);
                self.element = Some(element);
            }
            Err(err) => log::warn!("{}", err),
        }
    }

    pub(crate) fn stop(&mut self) {
        if let Some(element) = self.element.take() {
            if let Err(err) = element.pause() {
                log::debug!("failed to pause music: {}", js_error_message(&err));
            }
        }
    }

    fn create_element(settings: &AudioSettings) -> Result<HtmlAudioElement, AudioError> {
        let element = HtmlAudioElement::new_with_src(&settings.src)
            .map_err(|err| AudioError::Unavailable(js_error_message(&err)))?;
        element.set_volume(settings.volume().into());
        element.set_loop(settings.looped);
        log::debug!(
            "music loaded: {} (volume {}, loop {})",
            settings.src,
            settings.volume(),
            settings.looped
        );
        Ok(element)
    }

    fn play(element: &HtmlAudioElement) {
        let promise = match element.play() {
            Ok(promise) => promise,
            Err(err) => {
                log::warn!("{}", AudioError::Rejected(js_error_message(&err)));
                return;
            }
        };

        // Autoplay policies reject the promise, not the call.
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::debug!("music playing"),
                Err(err) => log::warn!("{}", AudioError::Rejected(js_error_message(&err))),
            }
        });
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
