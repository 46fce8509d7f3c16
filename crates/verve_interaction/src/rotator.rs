//! Rotating headline
//!
//! A fixed-period cycle through an immutable word list. Each advance writes
//! the next word into the text node and replays the fade class so the host
//! runs the same fade-in transition every time, even though the node
//! persists across cycles. The first word is applied at construction; the
//! index never resets.

use crate::config::RotationConfig;
use crate::error::InteractionError;
use std::time::Duration;
use verve_animation::Interval;
use verve_core::{NodeId, SceneGraph};

/// Class replayed on every advance
const FADE_CLASS: &str = "fade-word";

/// The rotating-word cycler
pub struct RotatingText {
    node: NodeId,
    words: Vec<String>,
    index: usize,
    interval: Interval,
}

impl RotatingText {
    /// Create the cycler and display the first word immediately
    ///
    /// Fails fast on an empty word list or a missing node - a silent cycler
    /// would otherwise tick forever doing nothing.
    pub fn new(
        scene: &mut SceneGraph,
        node: NodeId,
        words: Vec<String>,
        config: RotationConfig,
    ) -> Result<Self, InteractionError> {
        if words.is_empty() {
            return Err(InteractionError::EmptyWordList);
        }
        scene.require(node)?;

        let rotator = Self {
            node,
            words,
            index: 0,
            interval: Interval::new(config.period),
        };
        rotator.apply(scene);
        Ok(rotator)
    }

    /// Index of the word currently displayed
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The word currently displayed
    pub fn current_word(&self) -> &str {
        &self.words[self.index]
    }

    /// Advance the cycle clock; fires zero or more word changes
    pub fn tick(&mut self, scene: &mut SceneGraph, dt: Duration) {
        for _ in 0..self.interval.tick(dt) {
            self.advance(scene);
        }
    }

    fn advance(&mut self, scene: &mut SceneGraph) {
        self.index = (self.index + 1) % self.words.len();
        self.apply(scene);
        tracing::trace!(index = self.index, word = self.current_word(), "headline advance");
    }

    fn apply(&self, scene: &mut SceneGraph) {
        scene.set_text(self.node, self.current_word());
        scene.replay_class(self.node, FADE_CLASS);
    }
}
