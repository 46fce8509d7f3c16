//! Interaction error types

use thiserror::Error;
use verve_core::SceneError;

/// Errors raised while wiring interaction components
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    /// The rotating headline was given nothing to rotate through
    #[error("rotating text requires a non-empty word list")]
    EmptyWordList,

    /// A stage operation needs a component that was never installed
    #[error("{0} is not installed on the stage")]
    NotInstalled(&'static str),

    /// A component was pointed at a node the scene does not contain
    #[error(transparent)]
    Scene(#[from] SceneError),
}
