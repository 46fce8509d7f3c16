//! Scene graph of addressable visual elements
//!
//! The scene graph is the mutation boundary between the interaction engine
//! and the host renderer. Nodes carry the style state the engine is allowed
//! to touch: opacity, translation, scale, grayscale, text content, and a
//! class list. Everything else (layout, painting, compositing) is the host's
//! responsibility.
//!
//! Transition replays are modeled with a per-node `transition_epoch`: where a
//! DOM implementation would remove a class, force a reflow, and re-add the
//! class to restart a CSS animation, callers here use
//! [`SceneGraph::replay_class`], which bumps the epoch. Hosts re-trigger the
//! animation whenever the epoch changes.

use crate::error::SceneError;
use crate::geometry::{Point, Rect, Vec2};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a node in the scene graph
    pub struct NodeId;
}

/// Mutable style state of a scene node
#[derive(Clone, Debug)]
pub struct NodeStyle {
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Translation applied on top of the node's layout position
    pub translation: Vec2,
    /// Uniform scale (1.0 = natural size)
    pub scale: f32,
    /// Grayscale filter amount in `[0, 1]`
    pub grayscale: f32,
    /// Text content, for text-bearing nodes
    pub text: Option<String>,
    /// Style classes currently applied
    pub classes: SmallVec<[String; 2]>,
    /// Bumped whenever a class-driven transition must replay
    pub transition_epoch: u64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translation: Vec2::ZERO,
            scale: 1.0,
            grayscale: 0.0,
            text: None,
            classes: SmallVec::new(),
            transition_epoch: 0,
        }
    }
}

/// A single addressable element
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Diagnostic label, used in traces
    pub label: String,
    /// Position and size in viewport coordinates
    pub bounds: Rect,
    /// Current style state
    pub style: NodeStyle,
}

/// The scene graph
///
/// Owns all nodes plus two page-level pieces of state the modal and scroll
/// effects need: the current scroll offset and the scroll lock flag.
///
/// Style mutators follow the same convention as the rest of the engine's
/// registries: mutating a removed node is a silent no-op. Components that
/// require a node to exist validate it once at construction with
/// [`SceneGraph::require`].
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, SceneNode>,
    scroll_offset: f32,
    scroll_locked: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with default style and zero bounds
    pub fn create_node(&mut self, label: impl Into<String>) -> NodeId {
        self.create_node_at(label, Rect::ZERO)
    }

    /// Create a node with explicit bounds
    pub fn create_node_at(&mut self, label: impl Into<String>, bounds: Rect) -> NodeId {
        self.nodes.insert(SceneNode {
            label: label.into(),
            bounds,
            style: NodeStyle::default(),
        })
    }

    /// Remove a node, returning it if it existed
    pub fn remove_node(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Validate that a node exists, for fail-fast construction paths
    pub fn require(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeMissing(id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Style mutation primitives
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.bounds.origin = position;
        }
    }

    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.bounds = bounds;
        }
    }

    pub fn set_opacity(&mut self, id: NodeId, opacity: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn set_translation(&mut self, id: NodeId, translation: Vec2) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.translation = translation;
        }
    }

    pub fn set_scale(&mut self, id: NodeId, scale: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.scale = scale;
        }
    }

    pub fn set_grayscale(&mut self, id: NodeId, amount: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.grayscale = amount.clamp(0.0, 1.0);
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.text = Some(text.into());
        }
    }

    /// Add a class if not already present
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if !node.style.classes.iter().any(|c| c == class) {
                node.style.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class if present
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.classes.retain(|c| c.as_str() != class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(id)
            .map(|node| node.style.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Re-apply a class so its transition replays from the start
    ///
    /// The class ends up present either way; the bumped epoch is what tells
    /// the host to restart the animation.
    pub fn replay_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.classes.retain(|c| c.as_str() != class);
            node.style.classes.push(class.to_string());
            node.style.transition_epoch += 1;
            tracing::trace!(node = %node.label, class, epoch = node.style.transition_epoch, "transition replay");
        }
    }

    pub fn transition_epoch(&self, id: NodeId) -> u64 {
        self.nodes
            .get(id)
            .map(|node| node.style.transition_epoch)
            .unwrap_or(0)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Page-level state
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Suppress background scrolling (modal open)
    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    /// Restore background scrolling (modal closed)
    pub fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}
