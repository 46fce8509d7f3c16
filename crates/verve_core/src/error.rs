//! Core error types

use crate::scene::NodeId;
use thiserror::Error;

/// Errors raised by scene-graph preconditions
///
/// Every interaction component assumes its target nodes exist; constructors
/// check once with [`crate::SceneGraph::require`] and fail fast instead of
/// proceeding with no-op behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene node {0:?} is not part of the graph")]
    NodeMissing(NodeId),
}
