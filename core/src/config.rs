use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub auto_open: bool,
    pub auto_open_ms: Millis,
    pub reveal_delay_ms: Millis,
}

impl RevealTiming {
    pub const DEFAULT_AUTO_OPEN_MS: Millis = 2000;
    pub const DEFAULT_REVEAL_DELAY_MS: Millis = 800;

    pub const fn new(auto_open_ms: Option<Millis>, reveal_delay_ms: Millis) -> Self {
        match auto_open_ms {
            Some(auto_open_ms) => Self {
                auto_open: true,
                auto_open_ms,
                reveal_delay_ms,
            },
            None => Self {
                auto_open: false,
                auto_open_ms: Self::DEFAULT_AUTO_OPEN_MS,
                reveal_delay_ms,
            },
        }
    }

    pub const fn auto_open_after(&self) -> Option<Millis> {
        if self.auto_open {
            Some(self.auto_open_ms)
        } else {
            None
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::new(
            Some(Self::DEFAULT_AUTO_OPEN_MS),
            Self::DEFAULT_REVEAL_DELAY_MS,
        )
    }
}

/// The invitation image shown once the card slides out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artwork {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl Default for Artwork {
    fn default() -> Self {
        Self {
            src: String::from("/invitation.png"),
            alt: String::from("Invitación de cumpleaños de Elias"),
            width: 400,
            height: 600,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    pub timing: RevealTiming,
    pub audio: AudioSettings,
    pub artwork: Artwork,
    pub hint: String,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            timing: Default::default(),
            audio: Default::default(),
            artwork: Default::default(),
            hint: String::from("Toca para abrir / Click to open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_page_behavior() {
        let timing = RevealTiming::default();
        assert_eq!(timing.auto_open_after(), Some(2000));
        assert_eq!(timing.reveal_delay_ms, 800);
    }

    #[test]
    fn disabled_auto_open_has_no_delay() {
        let timing = RevealTiming::new(None, 100);
        assert_eq!(timing.auto_open_after(), None);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: InviteConfig =
            serde_json::from_str(r#"{"timing": {"reveal_delay_ms": 250}, "hint": "Open me"}"#)
                .unwrap();

        assert_eq!(config.timing.reveal_delay_ms, 250);
        assert_eq!(config.timing.auto_open_after(), Some(2000));
        assert_eq!(config.hint, "Open me");
        assert_eq!(config.artwork, Artwork::default());
        assert_eq!(config.audio, AudioSettings::default());
    }
}
