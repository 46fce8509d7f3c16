//! Input event types
//!
//! The host environment translates its native input stream (pointer, keys,
//! scroll, visibility observation) into [`Event`] values and pushes them into
//! an [`EventQueue`]. The engine drains the queue to completion before each
//! animation tick, which is what gives components the ordering guarantee
//! that pointer-state writes are visible to the next tick.
//!
//! Intersection batches mirror the host's visibility observer: one event may
//! carry entries for several observed nodes at once.

use crate::geometry::Point;
use crate::scene::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Keyboard keys the engine reacts to
///
/// Only a handful of keys carry meaning here; everything else arrives as
/// `Unidentified` so hosts can forward their whole key stream unfiltered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    Escape,
    Enter,
    Space,
    Unidentified,
}

/// Modifier state accompanying a key event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// One visibility observation for one observed node
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub node: NodeId,
    /// Fraction of the node currently inside the (margin-adjusted) viewport
    pub ratio: f32,
}

/// An input event delivered by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Global pointer movement in viewport coordinates
    PointerMoved { position: Point },
    /// Pointer entered a specific node
    PointerEntered { node: NodeId },
    /// Pointer left a specific node
    PointerLeft { node: NodeId },
    /// Click; `node` is the event target (None for clicks on empty space)
    Clicked { node: Option<NodeId>, position: Point },
    /// Key press
    KeyDown { key: KeyCode, modifiers: Modifiers },
    /// Vertical scroll offset of the page
    Scrolled { offset: f32 },
    /// A batch of visibility observations
    Intersections(Vec<IntersectionEntry>),
}

/// Coarse event classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    PointerMove,
    PointerEnter,
    PointerLeave,
    Click,
    KeyDown,
    Scroll,
    Intersection,
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::PointerMoved { .. } => EventType::PointerMove,
            Event::PointerEntered { .. } => EventType::PointerEnter,
            Event::PointerLeft { .. } => EventType::PointerLeave,
            Event::Clicked { .. } => EventType::Click,
            Event::KeyDown { .. } => EventType::KeyDown,
            Event::Scrolled { .. } => EventType::Scroll,
            Event::Intersections(_) => EventType::Intersection,
        }
    }
}

/// FIFO queue between the host's event callbacks and the engine
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Drain all queued events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
