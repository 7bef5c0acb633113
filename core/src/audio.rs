use alloc::string::String;
use serde::{Deserialize, Serialize};

/// One-shot latch in front of the background music.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioGate {
    #[default]
    Idle,
    Started,
}

impl AudioGate {
    /// Returns `true` exactly once per gate.
    pub fn try_start(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Started;
                true
            }
            Self::Started => false,
        }
    }

    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub src: String,
    volume: f32,
    pub looped: bool,
    pub muted: bool,
}

impl AudioSettings {
    pub const DEFAULT_SRC: &'static str = "/birthday-music.mp3";
    pub const DEFAULT_VOLUME: f32 = 0.3;

    pub fn new(src: impl Into<String>, volume: f32) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
        .with_volume(volume)
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = Self::clamp_volume(volume);
        self
    }

    /// Playback volume in `0.0..=1.0`, whatever the configuration said.
    pub fn volume(&self) -> f32 {
        Self::clamp_volume(self.volume)
    }

    fn clamp_volume(volume: f32) -> f32 {
        if volume.is_nan() {
            Self::DEFAULT_VOLUME
        } else {
            volume.clamp(0.0, 1.0)
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            src: String::from(Self::DEFAULT_SRC),
            volume: Self::DEFAULT_VOLUME,
            looped: true,
            muted: false,
        }
    }
}
