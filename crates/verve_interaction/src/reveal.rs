//! Scroll-visibility reveal engine
//!
//! Targets register with an engine; the host's visibility observer delivers
//! intersection batches; each target whose visible fraction reaches the
//! engine's threshold is revealed exactly once and unsubscribed. Reveals are
//! never undone - scrolling an element back out of view does not re-hide it.
//!
//! Several engines can run side by side with different thresholds and
//! disjoint or overlapping target sets (the page uses one for section
//! slides, one for text fades, one for lazy images); they share nothing.
//!
//! An optional stagger delays each target's visual application by its
//! registration index times a fixed step, so grouped items cascade. The
//! fire-once bookkeeping still happens at notification time - a staggered
//! target cannot be re-triggered while its delay is pending.

use crate::config::RevealConfig;
use crate::error::InteractionError;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::time::Duration;
use verve_core::{IntersectionEntry, NodeId, SceneGraph, Vec2};

/// How a reveal manifests on the scene
#[derive(Clone, Debug, PartialEq)]
pub enum RevealStyle {
    /// Write the revealed values directly (opacity 1, translation zero);
    /// the host's style transition animates the change
    Immediate,
    /// Replay a named animation class so a keyframed fade runs from the top
    ClassReplay { class: String },
}

#[derive(Clone, Copy, Debug)]
struct RevealTarget {
    /// Registration index, used for stagger delays
    order: usize,
}

#[derive(Clone, Copy, Debug)]
struct PendingReveal {
    node: NodeId,
    remaining: Duration,
}

/// A fire-once visibility reveal engine
pub struct RevealEngine {
    label: String,
    config: RevealConfig,
    style: RevealStyle,
    stagger: Option<Duration>,
    targets: IndexMap<NodeId, RevealTarget>,
    revealed: FxHashSet<NodeId>,
    pending: Vec<PendingReveal>,
    next_order: usize,
}

impl RevealEngine {
    pub fn new(label: impl Into<String>, config: RevealConfig, style: RevealStyle) -> Self {
        Self {
            label: label.into(),
            config,
            style,
            stagger: None,
            targets: IndexMap::new(),
            revealed: FxHashSet::default(),
            pending: Vec::new(),
            next_order: 0,
        }
    }

    /// Delay each target's application by `registration index * step`
    pub fn with_stagger(mut self, step: Duration) -> Self {
        self.stagger = Some(step);
        self
    }

    /// The observation parameters the host should configure its observer with
    pub fn config(&self) -> RevealConfig {
        self.config
    }

    /// Register a target for observation
    ///
    /// Fails fast if the node is not in the scene. Observing a target that
    /// has already revealed is accepted and ignored - the fire-once contract
    /// outlives the subscription.
    pub fn observe(&mut self, scene: &SceneGraph, node: NodeId) -> Result<(), InteractionError> {
        scene.require(node)?;
        if self.revealed.contains(&node) || self.targets.contains_key(&node) {
            return Ok(());
        }
        let order = self.next_order;
        self.next_order += 1;
        self.targets.insert(node, RevealTarget { order });
        Ok(())
    }

    /// Drop a target before it reveals; returns whether it was observed
    pub fn unobserve(&mut self, node: NodeId) -> bool {
        self.targets.shift_remove(&node).is_some()
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.targets.contains_key(&node)
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.revealed.contains(&node)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Process one batch of visibility observations
    pub fn on_intersections(&mut self, scene: &mut SceneGraph, entries: &[IntersectionEntry]) {
        for entry in entries {
            if !self.qualifies(entry.ratio) {
                continue;
            }
            let Some(target) = self.targets.shift_remove(&entry.node) else {
                // Unobserved or already revealed: re-delivery is a no-op
                continue;
            };
            self.revealed.insert(entry.node);
            tracing::debug!(engine = %self.label, node = ?entry.node, ratio = entry.ratio, "reveal");

            match self.stagger {
                Some(step) if !step.is_zero() => {
                    self.pending.push(PendingReveal {
                        node: entry.node,
                        remaining: step * target.order as u32,
                    });
                }
                _ => Self::apply(&self.style, scene, entry.node),
            }
        }
    }

    /// Advance stagger delays and apply reveals that came due
    pub fn tick(&mut self, scene: &mut SceneGraph, dt: Duration) {
        if self.pending.is_empty() {
            return;
        }
        let mut still_waiting = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            if entry.remaining <= dt {
                Self::apply(&self.style, scene, entry.node);
            } else {
                entry.remaining -= dt;
                still_waiting.push(entry);
            }
        }
        self.pending = still_waiting;
    }

    fn qualifies(&self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.config.threshold
    }

    fn apply(style: &RevealStyle, scene: &mut SceneGraph, node: NodeId) {
        match style {
            RevealStyle::Immediate => {
                scene.set_opacity(node, 1.0);
                scene.set_translation(node, Vec2::ZERO);
            }
            RevealStyle::ClassReplay { class } => {
                scene.replay_class(node, class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealConfig;

    fn hidden_node(scene: &mut SceneGraph, label: &str) -> NodeId {
        let node = scene.create_node(label);
        scene.set_opacity(node, 0.0);
        scene.set_translation(node, Vec2::new(0.0, 30.0));
        node
    }

    fn entry(node: NodeId, ratio: f32) -> IntersectionEntry {
        IntersectionEntry { node, ratio }
    }

    #[test]
    fn test_reveal_applies_final_state() {
        let mut scene = SceneGraph::new();
        let node = hidden_node(&mut scene, "about-text");

        let mut engine = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        engine.observe(&scene, node).unwrap();

        engine.on_intersections(&mut scene, &[entry(node, 0.2)]);

        let style = &scene.node(node).unwrap().style;
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translation, Vec2::ZERO);
        assert!(engine.is_revealed(node));
        assert!(!engine.is_observed(node));
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut scene = SceneGraph::new();
        let node = hidden_node(&mut scene, "about-text");

        let mut engine = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        engine.observe(&scene, node).unwrap();

        engine.on_intersections(&mut scene, &[entry(node, 0.05)]);
        assert_eq!(scene.node(node).unwrap().style.opacity, 0.0);
        assert!(engine.is_observed(node));
    }

    #[test]
    fn test_reveal_fires_exactly_once() {
        let mut scene = SceneGraph::new();
        let node = hidden_node(&mut scene, "section-label");

        let mut engine = RevealEngine::new(
            "text",
            RevealConfig::text(),
            RevealStyle::ClassReplay {
                class: "fade-in-up".to_string(),
            },
        );
        engine.observe(&scene, node).unwrap();

        engine.on_intersections(&mut scene, &[entry(node, 0.6)]);
        let epoch_after_first = scene.transition_epoch(node);
        assert_eq!(epoch_after_first, 1);

        // Re-delivery after reveal must not replay the transition
        engine.on_intersections(&mut scene, &[entry(node, 0.9)]);
        engine.on_intersections(&mut scene, &[entry(node, 1.0)]);
        assert_eq!(scene.transition_epoch(node), epoch_after_first);
    }

    #[test]
    fn test_revealed_state_survives_scene_mutation() {
        let mut scene = SceneGraph::new();
        let node = hidden_node(&mut scene, "about-image");

        let mut engine = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        engine.observe(&scene, node).unwrap();
        engine.on_intersections(&mut scene, &[entry(node, 0.5)]);

        // Something else dims the node; a stale intersection must not undo that
        scene.set_opacity(node, 0.4);
        engine.on_intersections(&mut scene, &[entry(node, 0.5)]);
        assert_eq!(scene.node(node).unwrap().style.opacity, 0.4);
    }

    #[test]
    fn test_independent_engines_do_not_interfere() {
        let mut scene = SceneGraph::new();
        let section = hidden_node(&mut scene, "about-text");
        let paragraph = hidden_node(&mut scene, "paragraph");

        let mut sections = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        let mut text = RevealEngine::new(
            "text",
            RevealConfig::text(),
            RevealStyle::ClassReplay {
                class: "fade-in-up".to_string(),
            },
        );
        sections.observe(&scene, section).unwrap();
        text.observe(&scene, paragraph).unwrap();

        // A ratio that satisfies the section engine but not the text engine
        let batch = [entry(section, 0.3), entry(paragraph, 0.3)];
        sections.on_intersections(&mut scene, &batch);
        text.on_intersections(&mut scene, &batch);

        assert!(sections.is_revealed(section));
        assert!(!text.is_revealed(paragraph));
        assert_eq!(scene.transition_epoch(paragraph), 0);
    }

    #[test]
    fn test_stagger_delays_application_by_order() {
        let mut scene = SceneGraph::new();
        let first = hidden_node(&mut scene, "project-0");
        let second = hidden_node(&mut scene, "project-1");

        let mut engine = RevealEngine::new(
            "projects",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        )
        .with_stagger(Duration::from_millis(100));
        engine.observe(&scene, first).unwrap();
        engine.observe(&scene, second).unwrap();

        engine.on_intersections(&mut scene, &[entry(first, 0.5), entry(second, 0.5)]);

        // Both are committed (fire-once) but nothing is visible yet
        assert!(engine.is_revealed(first) && engine.is_revealed(second));
        assert_eq!(scene.node(second).unwrap().style.opacity, 0.0);

        // Order 0 fires on the first tick, order 1 only after its 100ms delay
        engine.tick(&mut scene, Duration::from_millis(16));
        assert_eq!(scene.node(first).unwrap().style.opacity, 1.0);
        assert_eq!(scene.node(second).unwrap().style.opacity, 0.0);

        engine.tick(&mut scene, Duration::from_millis(100));
        assert_eq!(scene.node(second).unwrap().style.opacity, 1.0);
    }

    #[test]
    fn test_unobserve_before_reveal() {
        let mut scene = SceneGraph::new();
        let node = hidden_node(&mut scene, "removed");

        let mut engine = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        engine.observe(&scene, node).unwrap();
        assert!(engine.unobserve(node));

        engine.on_intersections(&mut scene, &[entry(node, 1.0)]);
        assert_eq!(scene.node(node).unwrap().style.opacity, 0.0);
        assert!(!engine.is_revealed(node));
    }

    #[test]
    fn test_observe_missing_node_fails() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node("ghost");
        scene.remove_node(node);

        let mut engine = RevealEngine::new(
            "sections",
            RevealConfig::sections(),
            RevealStyle::Immediate,
        );
        assert!(engine.observe(&scene, node).is_err());
    }

    #[test]
    fn test_image_config_fires_on_any_visibility() {
        let mut scene = SceneGraph::new();
        let img = hidden_node(&mut scene, "img");

        let mut engine =
            RevealEngine::new("images", RevealConfig::images(), RevealStyle::Immediate);
        engine.observe(&scene, img).unwrap();

        // Zero ratio means not visible at all - must not fire
        engine.on_intersections(&mut scene, &[entry(img, 0.0)]);
        assert!(!engine.is_revealed(img));

        engine.on_intersections(&mut scene, &[entry(img, 0.01)]);
        assert!(engine.is_revealed(img));
    }
}
