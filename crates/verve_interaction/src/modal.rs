//! Video preview modal
//!
//! A two-state machine (`Closed` / `Open`) owning the page's single media
//! playback surface. Per-item open triggers carry their media source; three
//! independent close triggers - the explicit close control, a click landing
//! on the backdrop itself, and the escape key - all funnel into the one
//! close transition so cleanup can never diverge.
//!
//! Opening while already open applies open semantics directly: the source is
//! replaced and playback restarts, with no intermediate close. Playback
//! start failure is not fatal; the modal stays open with
//! [`Playback::Failed`] so the host can show a placeholder.

use crate::error::InteractionError;
use rustc_hash::FxHashMap;
use thiserror::Error;
use verve_core::{KeyCode, NodeId, SceneGraph};

/// Class the backdrop node carries while the modal is open
const ACTIVE_CLASS: &str = "active";

/// A playable media URI
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors a media surface may raise when starting playback
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no media source assigned")]
    NoSource,
    #[error("media source cannot be played: {0}")]
    Unsupported(String),
}

/// The page's single media playback resource
///
/// Injected into the controller at construction so tests (and headless
/// hosts) can substitute a fake. The controller is the only component that
/// ever touches it.
pub trait MediaSurface {
    /// Assign or clear the media source
    fn set_source(&mut self, source: Option<&MediaSource>);

    /// Begin playback of the current source
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback
    fn pause(&mut self);

    /// Reset the playback position to the start
    fn seek_to_start(&mut self);
}

/// Playback health of an open session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Media is rendering
    Active,
    /// Playback failed to start; the session is open with no media render
    Failed,
}

/// Modal session state
#[derive(Clone, Debug, PartialEq)]
pub enum ModalStatus {
    Closed,
    Open {
        source: MediaSource,
        playback: Playback,
    },
}

/// Which path requested the close
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The explicit close control
    CloseControl,
    /// A click whose target was the backdrop itself
    Backdrop,
    /// Escape key
    EscapeKey,
}

/// The modal state machine
pub struct ModalController {
    status: ModalStatus,
    backdrop: NodeId,
    close_control: NodeId,
    triggers: FxHashMap<NodeId, MediaSource>,
    surface: Box<dyn MediaSurface>,
}

impl ModalController {
    /// Wire the controller to its backdrop and close-control nodes
    ///
    /// Fails fast if either node is missing. The surface is taken by value:
    /// exactly one playback resource exists per controller, and the
    /// controller is its sole owner.
    pub fn new(
        scene: &SceneGraph,
        backdrop: NodeId,
        close_control: NodeId,
        surface: Box<dyn MediaSurface>,
    ) -> Result<Self, InteractionError> {
        scene.require(backdrop)?;
        scene.require(close_control)?;
        Ok(Self {
            status: ModalStatus::Closed,
            backdrop,
            close_control,
            triggers: FxHashMap::default(),
            surface,
        })
    }

    /// Register a per-item open trigger with its media source
    pub fn register_trigger(
        &mut self,
        scene: &SceneGraph,
        node: NodeId,
        source: MediaSource,
    ) -> Result<(), InteractionError> {
        scene.require(node)?;
        self.triggers.insert(node, source);
        Ok(())
    }

    pub fn status(&self) -> &ModalStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        matches!(self.status, ModalStatus::Open { .. })
    }

    /// Open (or re-open) the modal with the given source
    ///
    /// Re-entrant: opening while open replaces the source and restarts
    /// playback without passing through `Closed`.
    pub fn open(&mut self, scene: &mut SceneGraph, source: MediaSource) {
        self.surface.set_source(Some(&source));
        let playback = match self.surface.play() {
            Ok(()) => Playback::Active,
            Err(err) => {
                tracing::warn!(%source, %err, "modal playback failed to start");
                Playback::Failed
            }
        };

        scene.add_class(self.backdrop, ACTIVE_CLASS);
        scene.lock_scroll();
        tracing::debug!(%source, ?playback, "modal open");
        self.status = ModalStatus::Open { source, playback };
    }

    /// Close the modal
    ///
    /// Idempotent: closing while closed is a no-op. All three triggers end
    /// up here so there is exactly one cleanup path.
    pub fn close(&mut self, scene: &mut SceneGraph, trigger: CloseTrigger) {
        if !self.is_open() {
            return;
        }

        self.surface.pause();
        self.surface.seek_to_start();
        self.surface.set_source(None);

        scene.remove_class(self.backdrop, ACTIVE_CLASS);
        scene.unlock_scroll();
        tracing::debug!(?trigger, "modal close");
        self.status = ModalStatus::Closed;
    }

    /// Route a click event
    ///
    /// Clicks on a registered trigger open; clicks on the close control or
    /// on the backdrop itself close. Clicks on modal content (children of
    /// the backdrop) arrive with the child as target and fall through.
    pub fn on_click(&mut self, scene: &mut SceneGraph, target: Option<NodeId>) {
        let Some(target) = target else {
            return;
        };

        if target == self.close_control {
            self.close(scene, CloseTrigger::CloseControl);
        } else if target == self.backdrop {
            self.close(scene, CloseTrigger::Backdrop);
        } else if let Some(source) = self.triggers.get(&target).cloned() {
            self.open(scene, source);
        }
    }

    /// Route a key event (escape closes)
    pub fn on_key(&mut self, scene: &mut SceneGraph, key: KeyCode) {
        if key == KeyCode::Escape {
            self.close(scene, CloseTrigger::EscapeKey);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Call log + session bookkeeping for the fake playback surface
    #[derive(Debug, Default)]
    struct FakeSurfaceState {
        source: Option<MediaSource>,
        playing: bool,
        position_reset: bool,
        play_calls: usize,
        fail_next_play: bool,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Arc<Mutex<FakeSurfaceState>>);

    impl FakeSurface {
        fn state(&self) -> std::sync::MutexGuard<'_, FakeSurfaceState> {
            self.0.lock().unwrap()
        }
    }

    impl MediaSurface for FakeSurface {
        fn set_source(&mut self, source: Option<&MediaSource>) {
            let mut state = self.state();
            state.source = source.cloned();
            state.playing = false;
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            let mut state = self.state();
            state.play_calls += 1;
            if state.fail_next_play {
                state.fail_next_play = false;
                return Err(PlaybackError::Unsupported("no decoder".into()));
            }
            if state.source.is_none() {
                return Err(PlaybackError::NoSource);
            }
            state.playing = true;
            state.position_reset = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.state().playing = false;
        }

        fn seek_to_start(&mut self) {
            self.state().position_reset = true;
        }
    }

    struct Fixture {
        scene: SceneGraph,
        controller: ModalController,
        surface: FakeSurface,
        trigger_a: NodeId,
        trigger_b: NodeId,
        backdrop: NodeId,
        close_control: NodeId,
    }

    fn fixture() -> Fixture {
        let mut scene = SceneGraph::new();
        let backdrop = scene.create_node("video-modal");
        let close_control = scene.create_node("close-video");
        let trigger_a = scene.create_node("project-view-a");
        let trigger_b = scene.create_node("project-view-b");

        let surface = FakeSurface::default();
        let mut controller = ModalController::new(
            &scene,
            backdrop,
            close_control,
            Box::new(surface.clone()),
        )
        .unwrap();
        controller
            .register_trigger(&scene, trigger_a, MediaSource::new("clips/a.mp4"))
            .unwrap();
        controller
            .register_trigger(&scene, trigger_b, MediaSource::new("clips/b.mp4"))
            .unwrap();

        Fixture {
            scene,
            controller,
            surface,
            trigger_a,
            trigger_b,
            backdrop,
            close_control,
        }
    }

    #[test]
    fn test_open_starts_playback_and_locks_scroll() {
        let mut f = fixture();

        f.controller.on_click(&mut f.scene, Some(f.trigger_a));

        assert!(f.controller.is_open());
        assert!(f.scene.has_class(f.backdrop, ACTIVE_CLASS));
        assert!(f.scene.scroll_locked());

        let state = f.surface.state();
        assert!(state.playing);
        assert_eq!(state.source, Some(MediaSource::new("clips/a.mp4")));
    }

    #[test]
    fn test_all_three_close_triggers_share_cleanup() {
        for trigger in [
            CloseTrigger::CloseControl,
            CloseTrigger::Backdrop,
            CloseTrigger::EscapeKey,
        ] {
            let mut f = fixture();
            f.controller.on_click(&mut f.scene, Some(f.trigger_a));

            match trigger {
                CloseTrigger::CloseControl => {
                    f.controller.on_click(&mut f.scene, Some(f.close_control))
                }
                CloseTrigger::Backdrop => f.controller.on_click(&mut f.scene, Some(f.backdrop)),
                CloseTrigger::EscapeKey => f.controller.on_key(&mut f.scene, KeyCode::Escape),
            }

            assert_eq!(*f.controller.status(), ModalStatus::Closed);
            assert!(!f.scene.has_class(f.backdrop, ACTIVE_CLASS));
            assert!(!f.scene.scroll_locked());

            let state = f.surface.state();
            assert!(!state.playing, "{trigger:?} must pause playback");
            assert!(state.position_reset, "{trigger:?} must reset position");
            assert_eq!(state.source, None, "{trigger:?} must release the source");
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut f = fixture();

        // Closing while closed, repeatedly: no-op, no surface calls
        f.controller.close(&mut f.scene, CloseTrigger::EscapeKey);
        f.controller.on_key(&mut f.scene, KeyCode::Escape);
        f.controller.on_key(&mut f.scene, KeyCode::Escape);
        assert_eq!(*f.controller.status(), ModalStatus::Closed);
        assert_eq!(f.surface.state().play_calls, 0);
        assert!(!f.surface.state().position_reset);

        f.controller.on_click(&mut f.scene, Some(f.trigger_a));
        f.controller.close(&mut f.scene, CloseTrigger::CloseControl);
        assert_eq!(*f.controller.status(), ModalStatus::Closed);

        f.controller.close(&mut f.scene, CloseTrigger::CloseControl);
        assert_eq!(*f.controller.status(), ModalStatus::Closed);
    }

    #[test]
    fn test_reopen_replaces_source_without_stacking() {
        let mut f = fixture();

        f.controller.on_click(&mut f.scene, Some(f.trigger_a));
        f.controller.on_click(&mut f.scene, Some(f.trigger_b));

        match f.controller.status() {
            ModalStatus::Open { source, playback } => {
                assert_eq!(source.as_str(), "clips/b.mp4");
                assert_eq!(*playback, Playback::Active);
            }
            other => panic!("expected open, got {other:?}"),
        }

        // Exactly one live session: surface holds only B, still one lock
        let state = f.surface.state();
        assert_eq!(state.source, Some(MediaSource::new("clips/b.mp4")));
        assert!(state.playing);
        assert_eq!(state.play_calls, 2);
        drop(state);
        assert!(f.scene.scroll_locked());
    }

    #[test]
    fn test_playback_failure_keeps_modal_open() {
        let mut f = fixture();
        f.surface.state().fail_next_play = true;

        f.controller.on_click(&mut f.scene, Some(f.trigger_a));

        match f.controller.status() {
            ModalStatus::Open { playback, .. } => assert_eq!(*playback, Playback::Failed),
            other => panic!("expected open-with-failure, got {other:?}"),
        }
        assert!(f.scene.has_class(f.backdrop, ACTIVE_CLASS));
        assert!(!f.surface.state().playing);

        // Close still works normally from the failed state
        f.controller.on_key(&mut f.scene, KeyCode::Escape);
        assert_eq!(*f.controller.status(), ModalStatus::Closed);
    }

    #[test]
    fn test_clicks_on_content_fall_through() {
        let mut f = fixture();
        let content = f.scene.create_node("modal-content");

        f.controller.on_click(&mut f.scene, Some(f.trigger_a));
        f.controller.on_click(&mut f.scene, Some(content));
        f.controller.on_click(&mut f.scene, None);

        assert!(f.controller.is_open());
    }

    #[test]
    fn test_non_escape_keys_ignored() {
        let mut f = fixture();
        f.controller.on_click(&mut f.scene, Some(f.trigger_a));

        f.controller.on_key(&mut f.scene, KeyCode::Enter);
        f.controller.on_key(&mut f.scene, KeyCode::Unidentified);
        assert!(f.controller.is_open());
    }

    #[test]
    fn test_missing_backdrop_fails_fast() {
        let mut scene = SceneGraph::new();
        let close_control = scene.create_node("close");
        let gone = scene.create_node("backdrop");
        scene.remove_node(gone);

        let result = ModalController::new(
            &scene,
            gone,
            close_control,
            Box::new(FakeSurface::default()),
        );
        assert!(matches!(result, Err(InteractionError::Scene(_))));
    }
}
