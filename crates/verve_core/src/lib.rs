//! Verve Core Primitives
//!
//! This crate provides the foundational primitives for the Verve interaction
//! engine:
//!
//! - **Geometry**: viewport-coordinate points, sizes, rects, and vectors
//! - **Scene Graph**: addressable visual elements with style-mutation primitives
//! - **Input Events**: the host-supplied event stream the engine consumes
//!
//! Verve deliberately stops at the style boundary: layout and rendering belong
//! to the host environment. Components mutate node styles (opacity, translation,
//! scale, classes, text) and the host is responsible for turning those styles
//! into pixels.
//!
//! # Example
//!
//! ```rust
//! use verve_core::{Point, SceneGraph};
//!
//! let mut scene = SceneGraph::new();
//! let cursor = scene.create_node("cursor");
//!
//! scene.set_position(cursor, Point::new(120.0, 80.0));
//! scene.set_opacity(cursor, 1.0);
//!
//! assert_eq!(scene.node(cursor).unwrap().bounds.origin, Point::new(120.0, 80.0));
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod scene;

pub use error::SceneError;
pub use events::{Event, EventQueue, EventType, IntersectionEntry, KeyCode, Modifiers};
pub use geometry::{Point, Rect, Size, Vec2};
pub use scene::{NodeId, NodeStyle, SceneGraph, SceneNode};
