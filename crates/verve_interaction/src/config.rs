//! Configuration surface
//!
//! Every tunable the interaction engine uses lives here, with defaults
//! matching the production portfolio page. Hosts can deserialize a whole
//! [`StageConfig`] or construct sub-configs directly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cursor follower tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowerConfig {
    /// Fraction of the remaining distance the follower closes per tick
    pub damping: f32,
    /// Scale applied to the cursor node while hovering an interactive element
    pub cursor_hover_scale: f32,
    /// Scale applied to the follower node while hovering an interactive element
    pub follower_hover_scale: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            damping: 0.1,
            cursor_hover_scale: 2.0,
            follower_hover_scale: 1.5,
        }
    }
}

/// Magnetic button tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagneticConfig {
    /// Scale applied to pointer-to-center displacement
    pub attraction: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self { attraction: 0.2 }
    }
}

/// Reveal engine tuning
///
/// `margin` shrinks the effective viewport the host's visibility observer
/// reports against: a positive bottom margin delays reveals until elements
/// are well inside the visible area. The engine itself only compares
/// ratios; the margin is read by the host when it sets up observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Minimum visible fraction required to fire the reveal
    pub threshold: f32,
    /// Bottom viewport margin in pixels
    pub margin: f32,
}

impl RevealConfig {
    /// Section reveal: fires early, with a bottom margin
    pub fn sections() -> Self {
        Self {
            threshold: 0.1,
            margin: 100.0,
        }
    }

    /// Text fade: fires once half the element is visible
    pub fn text() -> Self {
        Self {
            threshold: 0.5,
            margin: 0.0,
        }
    }

    /// Lazy image fade: fires as soon as any pixel is visible
    pub fn images() -> Self {
        Self {
            threshold: 0.0,
            margin: 0.0,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::sections()
    }
}

/// Rotating headline tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Time between word advances
    pub period: Duration,
    /// Duration of the fade-in the host plays on each advance
    pub fade: Duration,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(2500),
            fade: Duration::from_millis(500),
        }
    }
}

/// Hero parallax tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    /// Fraction of the scroll offset applied as vertical translation
    pub factor: f32,
    /// Scroll distance over which the hero fades to fully transparent
    pub fade_distance: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            factor: 0.5,
            fade_distance: 800.0,
        }
    }
}

/// Header scroll-state tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Scroll offset past which the header gets its `scrolled` class
    pub threshold: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { threshold: 100.0 }
    }
}

/// Reveal stagger step and fade durations used across engines
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FadeConfig {
    /// Fade-up duration for revealed text
    pub text_fade: Duration,
    /// Fade duration for lazily revealed images
    pub image_fade: Duration,
    /// Per-item delay step for staggered group reveals
    pub stagger_step: Duration,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            text_fade: Duration::from_millis(800),
            image_fade: Duration::from_millis(600),
            stagger_step: Duration::from_millis(100),
        }
    }
}

/// Everything in one place
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub follower: FollowerConfig,
    pub magnetic: MagneticConfig,
    pub reveal: RevealConfig,
    pub rotation: RotationConfig,
    pub parallax: ParallaxConfig,
    pub header: HeaderConfig,
    pub fades: FadeConfig,
}
