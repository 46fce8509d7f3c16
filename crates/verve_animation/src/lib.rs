//! Verve Animation System
//!
//! Per-tick exponential damping, frame scheduling, and interval timers.
//!
//! # Features
//!
//! - **Damper**: closes a fixed fraction of the remaining distance per tick,
//!   never overshoots - the trailing-cursor primitive
//! - **FrameScheduler**: owns all registered dampers and steps them once per
//!   animation frame; components hold a weak [`SchedulerHandle`]
//! - **DampedPoint**: an x/y damper pair that follows a moving target point
//! - **Interval**: fixed-period timer with catch-up semantics, driving the
//!   rotating-headline cycle
//!
//! The scheduler is an owned object, not a global: whoever runs the frame
//! loop constructs it, hands out handles, and calls [`FrameScheduler::tick`]
//! once per frame for the lifetime of the page session.

pub mod damper;
pub mod interval;
pub mod scheduler;

pub use damper::{Damper, DamperConfig};
pub use interval::Interval;
pub use scheduler::{DampedPoint, DamperId, FrameScheduler, SchedulerHandle};
