//! Frame scheduler
//!
//! Owns every registered damper and steps them once per animation frame.
//! Components never tick themselves: they register with the scheduler
//! through a [`SchedulerHandle`] and read their current value back each
//! frame. The handle is weak, so a dropped scheduler turns all component
//! operations into no-ops instead of keeping the registry alive.
//!
//! The scheduler has no stop condition of its own - it runs for as long as
//! the host keeps calling [`FrameScheduler::tick`], which for a portfolio
//! page means the whole page session. Registration ids and the `Drop` impl
//! on [`DampedPoint`] are the teardown extension point.

use crate::damper::{Damper, DamperConfig};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use verve_core::Point;

new_key_type! {
    /// Handle to a registered damper
    pub struct DamperId;
}

/// Internal state of the frame scheduler
#[derive(Default)]
struct SchedulerInner {
    dampers: SlotMap<DamperId, Damper>,
}

/// The frame scheduler that ticks all registered dampers
///
/// Held by whoever owns the frame loop (the `Stage` in a full engine);
/// components get a [`SchedulerHandle`] via [`FrameScheduler::handle`].
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner::default())),
        }
    }

    /// Get a weak handle for component registration
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance every damper by one tick
    ///
    /// Returns true if any damper is still moving toward its target, so the
    /// host can skip redraws on fully settled frames.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        for (_, damper) in inner.dampers.iter_mut() {
            damper.step();
        }
        inner.dampers.iter().any(|(_, d)| !d.is_settled())
    }

    pub fn damper_count(&self) -> usize {
        self.inner.lock().unwrap().dampers.len()
    }

    pub fn add_damper(&self, damper: Damper) -> DamperId {
        self.inner.lock().unwrap().dampers.insert(damper)
    }

    pub fn damper_value(&self, id: DamperId) -> Option<f32> {
        self.inner.lock().unwrap().dampers.get(id).map(|d| d.value())
    }

    pub fn set_damper_target(&self, id: DamperId, target: f32) {
        if let Some(damper) = self.inner.lock().unwrap().dampers.get_mut(id) {
            damper.set_target(target);
        }
    }

    pub fn remove_damper(&self, id: DamperId) -> Option<Damper> {
        self.inner.lock().unwrap().dampers.remove(id)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the frame scheduler
///
/// Passed to components that need to register dampers. It does not keep the
/// scheduler alive; every operation on a dead scheduler is a safe no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a damper and return its id
    pub fn register_damper(&self, damper: Damper) -> Option<DamperId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().dampers.insert(damper))
    }

    /// Update a damper's target
    pub fn set_damper_target(&self, id: DamperId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(damper) = inner.lock().unwrap().dampers.get_mut(id) {
                damper.set_target(target);
            }
        }
    }

    /// Get the current damper value
    pub fn damper_value(&self, id: DamperId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().dampers.get(id).map(|d| d.value()))
    }

    /// Check if a damper has settled (missing dampers count as settled)
    pub fn is_damper_settled(&self, id: DamperId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().dampers.get(id).map(|d| d.is_settled()))
            .unwrap_or(true)
    }

    /// Remove a damper
    pub fn remove_damper(&self, id: DamperId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().dampers.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Damped Point
// ============================================================================

/// A point that trails a moving target through a pair of dampers
///
/// Registers one damper per axis with the scheduler on construction and
/// deregisters them on drop. This is the follower half of the cursor rig:
/// the raw pointer position is the target, the damped point is what gets
/// written to the scene each frame.
///
/// # Example
///
/// ```ignore
/// let scheduler = FrameScheduler::new();
/// let mut follower = DampedPoint::new(scheduler.handle(), Point::ZERO, DamperConfig::trailing());
///
/// follower.set_target(Point::new(300.0, 200.0));
/// scheduler.tick();
/// let pos = follower.get(); // 10% of the way there
/// ```
pub struct DampedPoint {
    handle: SchedulerHandle,
    x: Option<DamperId>,
    y: Option<DamperId>,
    initial: Point,
}

impl DampedPoint {
    /// Create a damped point at the given initial position
    pub fn new(handle: SchedulerHandle, initial: Point, config: DamperConfig) -> Self {
        let x = handle.register_damper(Damper::new(config, initial.x));
        let y = handle.register_damper(Damper::new(config, initial.y));
        if x.is_none() {
            tracing::warn!("damped point created against a dead scheduler");
        }
        Self {
            handle,
            x,
            y,
            initial,
        }
    }

    /// Retarget both axes
    pub fn set_target(&self, target: Point) {
        if let (Some(x), Some(y)) = (self.x, self.y) {
            self.handle.set_damper_target(x, target.x);
            self.handle.set_damper_target(y, target.y);
        }
    }

    /// Current damped position
    pub fn get(&self) -> Point {
        match (self.x, self.y) {
            (Some(x), Some(y)) => {
                let px = self.handle.damper_value(x).unwrap_or(self.initial.x);
                let py = self.handle.damper_value(y).unwrap_or(self.initial.y);
                Point::new(px, py)
            }
            _ => self.initial,
        }
    }

    /// Check if either axis is still moving
    pub fn is_animating(&self) -> bool {
        match (self.x, self.y) {
            (Some(x), Some(y)) => {
                !self.handle.is_damper_settled(x) || !self.handle.is_damper_settled(y)
            }
            _ => false,
        }
    }
}

impl Drop for DampedPoint {
    fn drop(&mut self) {
        if let Some(x) = self.x.take() {
            self.handle.remove_damper(x);
        }
        if let Some(y) = self.y.take() {
            self.handle.remove_damper(y);
        }
    }
}
