//! Hover focus effect
//!
//! Project thumbnails rest at partial grayscale and snap to full color while
//! their item is hovered. Pairs are registered explicitly: the hover events
//! arrive on the item node, the filter is applied to the thumbnail node.

use crate::error::InteractionError;
use rustc_hash::FxHashMap;
use verve_core::{NodeId, SceneGraph};

/// Resting grayscale for unhovered thumbnails
const REST_GRAYSCALE: f32 = 0.3;

/// Item-to-thumbnail grayscale focus map
#[derive(Debug, Default)]
pub struct HoverFocus {
    pairs: FxHashMap<NodeId, NodeId>,
}

impl HoverFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item and its thumbnail, applying the resting filter
    ///
    /// Fails fast if either node is missing from the scene.
    pub fn attach(
        &mut self,
        scene: &mut SceneGraph,
        item: NodeId,
        thumb: NodeId,
    ) -> Result<(), InteractionError> {
        scene.require(item)?;
        scene.require(thumb)?;
        scene.set_grayscale(thumb, REST_GRAYSCALE);
        self.pairs.insert(item, thumb);
        Ok(())
    }

    pub fn on_enter(&self, scene: &mut SceneGraph, item: NodeId) {
        if let Some(&thumb) = self.pairs.get(&item) {
            scene.set_grayscale(thumb, 0.0);
        }
    }

    pub fn on_leave(&self, scene: &mut SceneGraph, item: NodeId) {
        if let Some(&thumb) = self.pairs.get(&item) {
            scene.set_grayscale(thumb, REST_GRAYSCALE);
        }
    }
}
