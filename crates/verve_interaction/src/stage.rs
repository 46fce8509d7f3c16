//! The stage runtime
//!
//! One object owns the scene, the frame scheduler, the event queue, and
//! every interaction component, and gives them the two entry points the
//! host drives: [`Stage::push_event`] for input and [`Stage::tick`] once
//! per animation frame.
//!
//! Event routing is a single explicit match, not a listener registry: each
//! event type fans out to the components that care about it in a fixed
//! order, and the three modal close triggers all land in the controller's
//! one close transition. Queued events are always drained before the
//! scheduler advances, so pointer-state writes from this frame's events are
//! visible to this frame's tick.

use crate::config::StageConfig;
use crate::cursor::{CursorRig, PointerTracker};
use crate::error::InteractionError;
use crate::hover::HoverFocus;
use crate::magnetic::MagneticButtons;
use crate::modal::{MediaSource, MediaSurface, ModalController, ModalStatus};
use crate::reveal::RevealEngine;
use crate::rotator::RotatingText;
use crate::scroll::ScrollEffects;
use std::time::Duration;
use verve_animation::{FrameScheduler, SchedulerHandle};
use verve_core::{Event, EventQueue, NodeId, SceneGraph};

/// The page-lifetime interaction runtime
pub struct Stage {
    scene: SceneGraph,
    scheduler: FrameScheduler,
    queue: EventQueue,
    tracker: PointerTracker,
    config: StageConfig,
    cursor: Option<CursorRig>,
    hover: HoverFocus,
    reveals: Vec<RevealEngine>,
    modal: Option<ModalController>,
    magnetics: MagneticButtons,
    rotator: Option<RotatingText>,
    scroll: ScrollEffects,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            scene: SceneGraph::new(),
            scheduler: FrameScheduler::new(),
            queue: EventQueue::new(),
            tracker: PointerTracker::new(),
            magnetics: MagneticButtons::new(config.magnetic),
            config,
            cursor: None,
            hover: HoverFocus::new(),
            reveals: Vec::new(),
            modal: None,
            rotator: None,
            scroll: ScrollEffects::new(),
        }
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene
    }

    /// Handle for registering external dampers with the stage's scheduler
    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Wiring
    // ─────────────────────────────────────────────────────────────────────

    /// Install the cursor + follower rig
    pub fn install_cursor(
        &mut self,
        cursor: NodeId,
        follower: NodeId,
    ) -> Result<(), InteractionError> {
        let rig = CursorRig::new(
            &self.scene,
            self.scheduler.handle(),
            cursor,
            follower,
            self.config.follower,
        )?;
        self.cursor = Some(rig);
        Ok(())
    }

    /// Mark a node as interactive for cursor hover scaling
    pub fn add_hover_target(&mut self, node: NodeId) -> Result<(), InteractionError> {
        self.scene.require(node)?;
        let rig = self
            .cursor
            .as_mut()
            .ok_or(InteractionError::NotInstalled("cursor rig"))?;
        rig.add_hover_target(node);
        Ok(())
    }

    /// Register a hover-focus pair (item node, thumbnail node)
    pub fn attach_hover_focus(
        &mut self,
        item: NodeId,
        thumb: NodeId,
    ) -> Result<(), InteractionError> {
        self.hover.attach(&mut self.scene, item, thumb)
    }

    /// Add a reveal engine; returns its index for later inspection
    pub fn add_reveal(&mut self, engine: RevealEngine) -> usize {
        self.reveals.push(engine);
        self.reveals.len() - 1
    }

    pub fn reveal(&self, index: usize) -> Option<&RevealEngine> {
        self.reveals.get(index)
    }

    pub fn reveal_mut(&mut self, index: usize) -> Option<&mut RevealEngine> {
        self.reveals.get_mut(index)
    }

    /// Observe a node with one of the installed reveal engines
    pub fn observe_reveal(
        &mut self,
        index: usize,
        node: NodeId,
    ) -> Result<(), InteractionError> {
        let engine = self
            .reveals
            .get_mut(index)
            .ok_or(InteractionError::NotInstalled("reveal engine"))?;
        engine.observe(&self.scene, node)
    }

    /// Install the modal controller with its injected playback surface
    pub fn install_modal(
        &mut self,
        backdrop: NodeId,
        close_control: NodeId,
        surface: Box<dyn MediaSurface>,
    ) -> Result<(), InteractionError> {
        let controller = ModalController::new(&self.scene, backdrop, close_control, surface)?;
        self.modal = Some(controller);
        Ok(())
    }

    /// Register a per-item modal open trigger
    pub fn register_modal_trigger(
        &mut self,
        node: NodeId,
        source: MediaSource,
    ) -> Result<(), InteractionError> {
        let modal = self
            .modal
            .as_mut()
            .ok_or(InteractionError::NotInstalled("modal controller"))?;
        modal.register_trigger(&self.scene, node, source)
    }

    pub fn modal_status(&self) -> Option<&ModalStatus> {
        self.modal.as_ref().map(|m| m.status())
    }

    /// Register a magnetic button
    pub fn attach_magnetic(&mut self, node: NodeId) -> Result<(), InteractionError> {
        self.magnetics.attach(&self.scene, node)
    }

    pub fn magnetics(&self) -> &MagneticButtons {
        &self.magnetics
    }

    /// Install the rotating headline
    pub fn install_rotator(
        &mut self,
        node: NodeId,
        words: Vec<String>,
    ) -> Result<(), InteractionError> {
        let rotator = RotatingText::new(&mut self.scene, node, words, self.config.rotation)?;
        self.rotator = Some(rotator);
        Ok(())
    }

    pub fn rotator(&self) -> Option<&RotatingText> {
        self.rotator.as_ref()
    }

    /// Install header and/or hero scroll effects
    pub fn install_scroll_effects(
        &mut self,
        header: Option<NodeId>,
        hero: Option<NodeId>,
    ) -> Result<(), InteractionError> {
        let mut effects = ScrollEffects::new();
        if let Some(node) = header {
            effects = effects.with_header(&self.scene, node, self.config.header)?;
        }
        if let Some(node) = hero {
            effects = effects.with_hero(&self.scene, node, self.config.parallax)?;
        }
        self.scroll = effects;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Runtime
    // ─────────────────────────────────────────────────────────────────────

    /// Queue an input event from the host
    pub fn push_event(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Drain and route all queued events
    pub fn pump(&mut self) {
        let events: Vec<Event> = self.queue.drain().collect();
        for event in events {
            self.route(event);
        }
    }

    fn route(&mut self, event: Event) {
        match event {
            Event::PointerMoved { position } => {
                self.tracker.on_move(position);
                if let Some(rig) = self.cursor.as_mut() {
                    rig.on_pointer_move(&mut self.scene, position);
                }
                self.magnetics.on_pointer_move(&mut self.scene, position);
            }
            Event::PointerEntered { node } => {
                if let Some(rig) = self.cursor.as_mut() {
                    rig.on_hover_enter(&mut self.scene, node);
                }
                self.hover.on_enter(&mut self.scene, node);
            }
            Event::PointerLeft { node } => {
                if let Some(rig) = self.cursor.as_mut() {
                    rig.on_hover_leave(&mut self.scene, node);
                }
                self.hover.on_leave(&mut self.scene, node);
                self.magnetics.on_pointer_leave(&mut self.scene, node);
            }
            Event::Clicked { node, .. } => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.on_click(&mut self.scene, node);
                }
            }
            Event::KeyDown { key, .. } => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.on_key(&mut self.scene, key);
                }
            }
            Event::Scrolled { offset } => {
                // Background scroll is suppressed while the modal is open
                if !self.scene.scroll_locked() {
                    self.scene.set_scroll_offset(offset);
                    self.scroll.on_scroll(&mut self.scene, offset);
                }
            }
            Event::Intersections(entries) => {
                for engine in self.reveals.iter_mut() {
                    engine.on_intersections(&mut self.scene, &entries);
                }
            }
        }
    }

    /// Advance one animation frame
    ///
    /// Drains pending events first, then steps the scheduler, writes the
    /// follower position, and advances the rotator and any staggered
    /// reveals. Returns true while any damper is still in motion, so hosts
    /// can skip redraws on settled frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.pump();

        let animating = self.scheduler.tick();
        if let Some(rig) = self.cursor.as_ref() {
            rig.write_follower(&mut self.scene);
        }
        if let Some(rotator) = self.rotator.as_mut() {
            rotator.tick(&mut self.scene, dt);
        }
        for engine in self.reveals.iter_mut() {
            engine.tick(&mut self.scene, dt);
        }
        animating
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_core::Point;

    #[test]
    fn test_events_drain_before_tick_advances() {
        let mut stage = Stage::default();
        let cursor = stage.scene_mut().create_node("cursor");
        let follower = stage.scene_mut().create_node("cursor-follower");
        stage.install_cursor(cursor, follower).unwrap();

        stage.push_event(Event::PointerMoved {
            position: Point::new(100.0, 0.0),
        });
        stage.tick(Duration::from_millis(16));

        // The move queued before the tick must already be reflected in the
        // follower's first step (10% of the way there).
        let pos = stage.scene().node(follower).unwrap().bounds.origin;
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert_eq!(stage.pointer().raw(), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_wiring_against_missing_components_errors() {
        let mut stage = Stage::default();
        let node = stage.scene_mut().create_node("btn");

        assert!(matches!(
            stage.add_hover_target(node),
            Err(InteractionError::NotInstalled(_))
        ));
        assert!(matches!(
            stage.register_modal_trigger(node, MediaSource::new("a.mp4")),
            Err(InteractionError::NotInstalled(_))
        ));
        assert!(matches!(
            stage.observe_reveal(0, node),
            Err(InteractionError::NotInstalled(_))
        ));
    }

    #[test]
    fn test_tick_reports_settled_when_idle() {
        let mut stage = Stage::default();
        assert!(!stage.tick(Duration::from_millis(16)));
    }
}
