//! Verve Interaction Components
//!
//! The behavior layer of a single-page portfolio: every continuously-running
//! or event-triggered visual effect that needs timing, damping, or state,
//! wired to one event stream and one frame clock.
//!
//! - **CursorRig**: raw cursor written per move event, damped follower
//!   written per frame, hover scaling over interactive elements
//! - **RevealEngine**: fire-once scroll-visibility reveals, multiple
//!   independent instances, optional stagger
//! - **ModalController**: the video preview state machine owning the page's
//!   single media playback surface
//! - **MagneticButtons**: pointer-attraction offsets with exact reset
//! - **RotatingText**: the fixed-period rotating headline
//! - **ScrollEffects**: header scroll state and hero parallax
//! - **Stage**: owns all of the above plus the scene, scheduler, and event
//!   queue; hosts call [`Stage::push_event`] and [`Stage::tick`]
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use verve_core::{Event, Point};
//! use verve_interaction::{Stage, StageConfig};
//!
//! let mut stage = Stage::new(StageConfig::default());
//! let cursor = stage.scene_mut().create_node("cursor");
//! let follower = stage.scene_mut().create_node("cursor-follower");
//! stage.install_cursor(cursor, follower).unwrap();
//!
//! stage.push_event(Event::PointerMoved { position: Point::new(300.0, 120.0) });
//! stage.tick(Duration::from_millis(16));
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod hover;
pub mod magnetic;
pub mod modal;
pub mod reveal;
pub mod rotator;
pub mod scroll;
pub mod stage;

pub use config::{
    FadeConfig, FollowerConfig, HeaderConfig, MagneticConfig, ParallaxConfig, RevealConfig,
    RotationConfig, StageConfig,
};
pub use cursor::{CursorRig, PointerTracker};
pub use error::InteractionError;
pub use hover::HoverFocus;
pub use magnetic::MagneticButtons;
pub use modal::{
    CloseTrigger, MediaSource, MediaSurface, ModalController, ModalStatus, Playback, PlaybackError,
};
pub use reveal::{RevealEngine, RevealStyle};
pub use rotator::RotatingText;
pub use scroll::ScrollEffects;
pub use stage::Stage;
