//! Custom cursor rig
//!
//! Two scene nodes track the pointer: the cursor node is written
//! synchronously on every pointer-move event, and the follower node trails
//! it through a [`DampedPoint`] advanced once per frame. Until the first
//! move event arrives there is no raw position, so the follower simply
//! holds its initial position.
//!
//! Hovering an interactive element scales both nodes up; leaving restores
//! them. The set of interactive elements is registered explicitly.

use crate::config::FollowerConfig;
use crate::error::InteractionError;
use rustc_hash::FxHashSet;
use verve_animation::{DampedPoint, DamperConfig, SchedulerHandle};
use verve_core::{NodeId, Point, SceneGraph};

/// Raw pointer state
///
/// `raw` stays `None` until the host delivers the first move event.
#[derive(Debug, Default)]
pub struct PointerTracker {
    raw: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move event
    pub fn on_move(&mut self, position: Point) {
        self.raw = Some(position);
    }

    /// Last known raw position, if any move event has arrived
    pub fn raw(&self) -> Option<Point> {
        self.raw
    }
}

/// The cursor + follower pair
pub struct CursorRig {
    cursor: NodeId,
    follower_node: NodeId,
    follower: DampedPoint,
    hover_targets: FxHashSet<NodeId>,
    config: FollowerConfig,
}

impl CursorRig {
    /// Wire the rig to two existing scene nodes
    ///
    /// Fails fast if either node is missing from the scene. The follower
    /// starts wherever its node currently sits.
    pub fn new(
        scene: &SceneGraph,
        handle: SchedulerHandle,
        cursor: NodeId,
        follower_node: NodeId,
        config: FollowerConfig,
    ) -> Result<Self, InteractionError> {
        scene.require(cursor)?;
        let initial = scene.require(follower_node)?.bounds.origin;

        let follower = DampedPoint::new(handle, initial, DamperConfig::new(config.damping));
        Ok(Self {
            cursor,
            follower_node,
            follower,
            hover_targets: FxHashSet::default(),
            config,
        })
    }

    /// Mark a node as interactive for hover scaling
    pub fn add_hover_target(&mut self, node: NodeId) {
        self.hover_targets.insert(node);
    }

    pub fn is_hover_target(&self, node: NodeId) -> bool {
        self.hover_targets.contains(&node)
    }

    /// Handle a pointer move: write the raw position, retarget the follower
    pub fn on_pointer_move(&mut self, scene: &mut SceneGraph, position: Point) {
        scene.set_position(self.cursor, position);
        self.follower.set_target(position);
    }

    /// Pointer entered a node; scale up if it is interactive
    pub fn on_hover_enter(&mut self, scene: &mut SceneGraph, node: NodeId) {
        if self.hover_targets.contains(&node) {
            scene.set_scale(self.cursor, self.config.cursor_hover_scale);
            scene.set_scale(self.follower_node, self.config.follower_hover_scale);
        }
    }

    /// Pointer left a node; restore natural scale if it was interactive
    pub fn on_hover_leave(&mut self, scene: &mut SceneGraph, node: NodeId) {
        if self.hover_targets.contains(&node) {
            scene.set_scale(self.cursor, 1.0);
            scene.set_scale(self.follower_node, 1.0);
        }
    }

    /// Per-frame write of the damped follower position to the scene
    pub fn write_follower(&self, scene: &mut SceneGraph) {
        scene.set_position(self.follower_node, self.follower.get());
    }

    /// Current damped follower position
    pub fn follower_position(&self) -> Point {
        self.follower.get()
    }
}
