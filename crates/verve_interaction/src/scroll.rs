//! Scroll-driven effects
//!
//! Two small scroll listeners: the header picks up a `scrolled` class past a
//! threshold (and loses it again - this one is a toggle, unlike reveals),
//! and the hero section gets a parallax translation plus a fade-out over a
//! fixed scroll distance.

use crate::config::{HeaderConfig, ParallaxConfig};
use crate::error::InteractionError;
use verve_core::{NodeId, SceneGraph, Vec2};

const SCROLLED_CLASS: &str = "scrolled";

/// Header + hero scroll effects
#[derive(Debug, Default)]
pub struct ScrollEffects {
    header: Option<(NodeId, HeaderConfig)>,
    hero: Option<(NodeId, ParallaxConfig)>,
}

impl ScrollEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a header node; fails fast if it is missing
    pub fn with_header(
        mut self,
        scene: &SceneGraph,
        node: NodeId,
        config: HeaderConfig,
    ) -> Result<Self, InteractionError> {
        scene.require(node)?;
        self.header = Some((node, config));
        Ok(self)
    }

    /// Track a hero node; fails fast if it is missing
    pub fn with_hero(
        mut self,
        scene: &SceneGraph,
        node: NodeId,
        config: ParallaxConfig,
    ) -> Result<Self, InteractionError> {
        scene.require(node)?;
        self.hero = Some((node, config));
        Ok(self)
    }

    /// Apply effects for the given scroll offset
    pub fn on_scroll(&self, scene: &mut SceneGraph, offset: f32) {
        if let Some((header, config)) = self.header {
            if offset > config.threshold {
                scene.add_class(header, SCROLLED_CLASS);
            } else {
                scene.remove_class(header, SCROLLED_CLASS);
            }
        }

        if let Some((hero, config)) = self.hero {
            scene.set_translation(hero, Vec2::new(0.0, offset * config.factor));
            // set_opacity clamps, so deep scrolls pin the hero at zero
            scene.set_opacity(hero, 1.0 - offset / config.fade_distance);
        }
    }
}
