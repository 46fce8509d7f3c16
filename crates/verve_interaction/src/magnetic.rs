//! Magnetic button effect
//!
//! While the pointer is inside a button's bounds, the button translates
//! toward it by a fraction of the pointer's displacement from the button's
//! center. The moment the pointer leaves the bounds (or an explicit
//! pointer-leave arrives) the offset snaps back to zero - no decay.
//!
//! The attraction math reads the button's base bounds; the magnetic offset
//! is applied as a translation on top, so the hit area never chases its own
//! transform.

use crate::config::MagneticConfig;
use crate::error::InteractionError;
use rustc_hash::FxHashMap;
use verve_core::{NodeId, Point, SceneGraph, Vec2};

/// Registry of magnetic buttons
///
/// Buttons are fully independent; the registry exists only so one global
/// pointer-move can drive all of them.
pub struct MagneticButtons {
    config: MagneticConfig,
    offsets: FxHashMap<NodeId, Vec2>,
}

impl MagneticButtons {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            offsets: FxHashMap::default(),
        }
    }

    /// Register a button; fails fast if the node is missing
    pub fn attach(&mut self, scene: &SceneGraph, node: NodeId) -> Result<(), InteractionError> {
        scene.require(node)?;
        self.offsets.insert(node, Vec2::ZERO);
        Ok(())
    }

    /// Deregister a button, zeroing its transform
    pub fn detach(&mut self, scene: &mut SceneGraph, node: NodeId) {
        if self.offsets.remove(&node).is_some() {
            scene.set_translation(node, Vec2::ZERO);
        }
    }

    /// Current offset of a registered button
    pub fn offset(&self, node: NodeId) -> Option<Vec2> {
        self.offsets.get(&node).copied()
    }

    pub fn button_count(&self) -> usize {
        self.offsets.len()
    }

    /// Drive all buttons from a global pointer position
    pub fn on_pointer_move(&mut self, scene: &mut SceneGraph, position: Point) {
        for (&node, offset) in self.offsets.iter_mut() {
            let Some(bounds) = scene.node(node).map(|n| n.bounds) else {
                continue;
            };

            if bounds.contains(position) {
                let displacement = position.delta_from(bounds.center());
                *offset = displacement.scale(self.config.attraction);
                scene.set_translation(node, *offset);
            } else if *offset != Vec2::ZERO {
                *offset = Vec2::ZERO;
                scene.set_translation(node, Vec2::ZERO);
            }
        }
    }

    /// Immediate reset on pointer-leave
    pub fn on_pointer_leave(&mut self, scene: &mut SceneGraph, node: NodeId) {
        if let Some(offset) = self.offsets.get_mut(&node) {
            *offset = Vec2::ZERO;
            scene.set_translation(node, Vec2::ZERO);
        }
    }
}
