//! Game lifecycle phases and their guarded transitions.

use serde::{Deserialize, Serialize};

/// Where a puzzle session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the board image to become available.
    LoadingAsset,
    /// Image is ready; the board is animating in.
    WillTransitionIn,
    /// Player is solving; moves count and the clock runs.
    Active,
    /// Puzzle solved or quit; the board is animating out.
    RequestTransitionOut,
    /// Exit finished. Terminal: the session is discarded.
    WillTransitionOut,
}

impl Phase {
    /// Starting phase for a session.
    pub fn initial(asset_ready: bool) -> Self {
        if asset_ready {
            Phase::WillTransitionIn
        } else {
            Phase::LoadingAsset
        }
    }

    /// True while moves are accepted and the clock runs.
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Active)
    }

    /// True once the session has nothing left to do.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::WillTransitionOut)
    }

    /// Pure transition function for the lifecycle state machine.
    ///
    /// Side-effects (starting or cancelling the clock, handing control back)
    /// are reported via [`PhaseEffect`] so callers stay deterministic.
    pub fn handle(self, event: PhaseEvent) -> (Phase, PhaseEffect) {
        match (self, event) {
            (Phase::LoadingAsset, PhaseEvent::ImageReady) => {
                (Phase::WillTransitionIn, PhaseEffect::None)
            }
            (Phase::WillTransitionIn, PhaseEvent::EntryTransitionComplete) => {
                (Phase::Active, PhaseEffect::StartClock)
            }
            (Phase::Active, PhaseEvent::Solved | PhaseEvent::QuitRequested) => {
                (Phase::RequestTransitionOut, PhaseEffect::StopClock)
            }
            (Phase::RequestTransitionOut, PhaseEvent::ExitTransitionComplete) => {
                (Phase::WillTransitionOut, PhaseEffect::Finish)
            }

            // Ignore irrelevant events in the current state.
            (phase, _) => (phase, PhaseEffect::None),
        }
    }
}

/// Lifecycle signals a rendering collaborator sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Signal {
    /// The board image finished loading.
    ImageReady,
    /// The board's entry animation finished.
    EntryTransitionComplete,
    /// The player asked to abandon the puzzle.
    QuitRequested,
    /// The board's exit animation finished.
    ExitTransitionComplete,
}

/// Everything that can drive a phase change.
///
/// `Solved` is raised by the session itself after a solving move; it is not
/// a [`Signal`] so collaborators cannot end a game that isn't won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseEvent {
    /// See [`Signal::ImageReady`].
    ImageReady,
    /// See [`Signal::EntryTransitionComplete`].
    EntryTransitionComplete,
    /// See [`Signal::QuitRequested`].
    QuitRequested,
    /// The last move produced the goal arrangement.
    Solved,
    /// See [`Signal::ExitTransitionComplete`].
    ExitTransitionComplete,
}

impl From<Signal> for PhaseEvent {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::ImageReady => PhaseEvent::ImageReady,
            Signal::EntryTransitionComplete => PhaseEvent::EntryTransitionComplete,
            Signal::QuitRequested => PhaseEvent::QuitRequested,
            Signal::ExitTransitionComplete => PhaseEvent::ExitTransitionComplete,
        }
    }
}

/// Side-effect a transition asks the owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseEffect {
    /// Nothing to do.
    None,
    /// Begin counting elapsed time.
    StartClock,
    /// Cancel the elapsed-time tick.
    StopClock,
    /// Session is over; discard it and return control to the caller.
    Finish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_depends_on_asset() {
        assert_eq!(Phase::initial(false), Phase::LoadingAsset);
        assert_eq!(Phase::initial(true), Phase::WillTransitionIn);
    }

    #[test]
    fn test_happy_path_walks_every_phase() {
        let (phase, effect) = Phase::LoadingAsset.handle(PhaseEvent::ImageReady);
        assert_eq!((phase, effect), (Phase::WillTransitionIn, PhaseEffect::None));

        let (phase, effect) = phase.handle(PhaseEvent::EntryTransitionComplete);
        assert_eq!((phase, effect), (Phase::Active, PhaseEffect::StartClock));

        let (phase, effect) = phase.handle(PhaseEvent::Solved);
        assert_eq!(
            (phase, effect),
            (Phase::RequestTransitionOut, PhaseEffect::StopClock)
        );

        let (phase, effect) = phase.handle(PhaseEvent::ExitTransitionComplete);
        assert_eq!((phase, effect), (Phase::WillTransitionOut, PhaseEffect::Finish));
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_quit_stops_the_clock() {
        assert_eq!(
            Phase::Active.handle(PhaseEvent::QuitRequested),
            (Phase::RequestTransitionOut, PhaseEffect::StopClock)
        );
    }

    #[test]
    fn test_exit_complete_while_loading_is_ignored() {
        assert_eq!(
            Phase::LoadingAsset.handle(PhaseEvent::ExitTransitionComplete),
            (Phase::LoadingAsset, PhaseEffect::None)
        );
    }

    #[test]
    fn test_quit_before_active_is_ignored() {
        assert_eq!(
            Phase::WillTransitionIn.handle(PhaseEvent::QuitRequested),
            (Phase::WillTransitionIn, PhaseEffect::None)
        );
    }

    #[test]
    fn test_terminal_phase_ignores_everything() {
        for event in [
            PhaseEvent::ImageReady,
            PhaseEvent::EntryTransitionComplete,
            PhaseEvent::QuitRequested,
            PhaseEvent::Solved,
            PhaseEvent::ExitTransitionComplete,
        ] {
            assert_eq!(
                Phase::WillTransitionOut.handle(event),
                (Phase::WillTransitionOut, PhaseEffect::None)
            );
        }
    }

    #[test]
    fn test_duplicate_image_ready_is_ignored() {
        assert_eq!(
            Phase::Active.handle(PhaseEvent::ImageReady),
            (Phase::Active, PhaseEffect::None)
        );
    }
}
