//! Declarative description of everything on the page that moves.
//!
//! Nothing here renders. Each part knows its poses per [`RevealPhase`] and
//! its timing, and can spell itself out as an inline CSS declaration list for
//! the stylesheet's transitions and keyframes to pick up.

use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier(pub f32, pub f32, pub f32, pub f32);

impl CubicBezier {
    pub fn to_css(self) -> String {
        let Self(x1, y1, x2, y2) = self;
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Ease,
    EaseInOut,
    Curve(CubicBezier),
}

impl Easing {
    /// Slow-settling curve shared by the flap and the card.
    pub const ENVELOPE: Easing = Easing::Curve(CubicBezier(0.25, 0.46, 0.45, 0.94));

    pub fn to_css(self) -> String {
        match self {
            Self::Ease => String::from("ease"),
            Self::EaseInOut => String::from("ease-in-out"),
            Self::Curve(curve) => curve.to_css(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub duration_ms: Millis,
    pub delay_ms: Millis,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration_ms: Millis, delay_ms: Millis, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing,
        }
    }

    /// Total time from trigger until the motion settles.
    pub const fn settled_after(&self) -> Millis {
        self.duration_ms.saturating_add(self.delay_ms)
    }

    fn transition_css(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            self.duration_ms,
            self.easing.to_css(),
            self.delay_ms
        )
    }
}

/// A still frame of one animated element.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub translate_y_px: f32,
    pub scale: f32,
    pub rotate_x_deg: f32,
    pub opacity: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        translate_y_px: 0.0,
        scale: 1.0,
        rotate_x_deg: 0.0,
        opacity: 1.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotateX({}deg)",
            self.translate_y_px, self.scale, self.rotate_x_deg
        )
    }
}

/// Envelope part that switches between two poses as the envelope opens.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhasedPart {
    pub closed: Pose,
    pub opened: Pose,
    pub timing: Timing,
}

impl PhasedPart {
    pub const fn pose(&self, phase: RevealPhase) -> Pose {
        if phase.is_opened() {
            self.opened
        } else {
            self.closed
        }
    }

    /// Inline style for `phase`. The transition is part of the style so the
    /// browser animates between the two poses when the phase flips.
    pub fn style(&self, phase: RevealPhase) -> String {
        let pose = self.pose(phase);
        format!(
            "transform: {}; opacity: {}; transition: {}, {};",
            pose.transform(),
            pose.opacity,
            self.timing.transition_css("transform"),
            self.timing.transition_css("opacity"),
        )
    }
}

pub const FLAP: PhasedPart = PhasedPart {
    closed: Pose::REST,
    opened: Pose {
        rotate_x_deg: -180.0,
        ..Pose::REST
    },
    timing: Timing::new(1200, 200, Easing::ENVELOPE),
};

pub const SEAL: PhasedPart = PhasedPart {
    closed: Pose::REST,
    opened: Pose {
        scale: 0.0,
        opacity: 0.0,
        ..Pose::REST
    },
    timing: Timing::new(500, 300, Easing::Ease),
};

/// One-time motion played when an element is mounted.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub from: Pose,
    pub to: Pose,
    pub timing: Timing,
}

impl Entrance {
    pub fn style(&self) -> String {
        format!(
            "--from-transform: {}; --from-opacity: {}; --to-transform: {}; --to-opacity: {}; \
             animation-duration: {}ms; animation-delay: {}ms; animation-timing-function: {};",
            self.from.transform(),
            self.from.opacity,
            self.to.transform(),
            self.to.opacity,
            self.timing.duration_ms,
            self.timing.delay_ms,
            self.timing.easing.to_css(),
        )
    }
}

pub const CARD_ENTRANCE: Entrance = Entrance {
    from: Pose {
        translate_y_px: 100.0,
        scale: 0.8,
        rotate_x_deg: 0.0,
        opacity: 0.0,
    },
    to: Pose {
        translate_y_px: -120.0,
        ..Pose::REST
    },
    timing: Timing::new(1500, 200, Easing::ENVELOPE),
};

pub const HINT_ENTRANCE: Entrance = Entrance {
    from: Pose {
        translate_y_px: 10.0,
        opacity: 0.0,
        ..Pose::REST
    },
    to: Pose::REST,
    timing: Timing::new(300, 1000, Easing::Ease),
};

/// Never-ending back-and-forth between a rest and a peak value. Purely
/// cosmetic; it has no end state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    pub scale: (f32, f32),
    pub opacity: (f32, f32),
    pub rise_px: (f32, f32),
    pub period_ms: Millis,
    pub delay_ms: Millis,
}

impl Oscillation {
    pub fn style(&self) -> String {
        format!(
            "--scale-rest: {}; --scale-peak: {}; --opacity-rest: {}; --opacity-peak: {}; \
             --rise-rest: {}px; --rise-peak: {}px; animation-duration: {}ms; animation-delay: {}ms;",
            self.scale.0,
            self.scale.1,
            self.opacity.0,
            self.opacity.1,
            self.rise_px.0,
            self.rise_px.1,
            self.period_ms,
            self.delay_ms,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopRight,
    BottomLeft,
}

impl Corner {
    pub const fn class(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Gold,
    Leaf,
}

impl Tint {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Leaf => "leaf",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    pub corner: Corner,
    pub tint: Tint,
    pub size_px: u8,
    pub motion: Oscillation,
}

pub const SPARKLES: [Sparkle; 2] = [
    Sparkle {
        corner: Corner::TopRight,
        tint: Tint::Gold,
        size_px: 16,
        motion: Oscillation {
            scale: (1.0, 1.5),
            opacity: (0.7, 1.0),
            rise_px: (0.0, 0.0),
            period_ms: 2000,
            delay_ms: 500,
        },
    },
    Sparkle {
        corner: Corner::BottomLeft,
        tint: Tint::Leaf,
        size_px: 12,
        motion: Oscillation {
            scale: (1.0, 1.3),
            opacity: (0.6, 1.0),
            rise_px: (0.0, 0.0),
            period_ms: 2500,
            delay_ms: 1000,
        },
    },
];

pub const PARTICLE_COUNT: u8 = 6;

/// Floating dot in the background layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub index: u8,
    pub left_pct: u8,
    pub top_pct: u8,
    pub motion: Oscillation,
}

impl Particle {
    pub const fn new(index: u8) -> Self {
        let step = index as Millis;
        Self {
            index,
            left_pct: 20 + 15 * index,
            top_pct: 30 + (index % 2) * 40,
            motion: Oscillation {
                scale: (0.8, 1.2),
                opacity: (0.3, 0.8),
                rise_px: (-10.0, -30.0),
                period_ms: 3000 + 500 * step,
                delay_ms: 800 * step,
            },
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; {}",
            self.left_pct,
            self.top_pct,
            self.motion.style()
        )
    }
}

pub fn particles() -> impl Iterator<Item = Particle> {
    (0..PARTICLE_COUNT).map(Particle::new)
}
