//! A single puzzle session: the board plus everything the game screen tracks.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::clock::{DEFAULT_TICK_INTERVAL, ElapsedClock};
use super::phases::{Phase, PhaseEffect, PhaseEvent, Signal};
use crate::geometry::GridLayout;
use crate::gesture::{self, DragOffset};
use crate::puzzle::Puzzle;

/// What happened to a slide request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideOutcome {
    /// Not applied: the session is not active or the tile cannot move.
    Ignored,
    /// Applied; the puzzle is still unsolved.
    Moved,
    /// Applied, and the board is now solved.
    Solved,
}

impl SlideOutcome {
    /// True when the board changed.
    pub fn is_accepted(self) -> bool {
        !matches!(self, SlideOutcome::Ignored)
    }
}

/// Game session state, owned by a single logical thread of control.
///
/// The puzzle is replaced wholesale on every accepted slide. Moves only
/// count, and the clock only runs, while the phase is [`Phase::Active`].
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    moves: u32,
    clock: ElapsedClock,
    previous_move: Option<usize>,
    phase: Phase,
}

impl GameSession {
    /// Creates a session with the default one-second tick.
    #[instrument(skip(puzzle), fields(size = puzzle.size()))]
    pub fn new(puzzle: Puzzle, asset_ready: bool) -> Self {
        Self::with_tick_interval(puzzle, asset_ready, DEFAULT_TICK_INTERVAL)
    }

    /// Creates a session with a custom tick interval.
    #[instrument(skip(puzzle), fields(size = puzzle.size()))]
    pub fn with_tick_interval(puzzle: Puzzle, asset_ready: bool, tick: Duration) -> Self {
        let phase = Phase::initial(asset_ready);
        info!(%phase, "Creating game session");
        Self {
            puzzle,
            moves: 0,
            clock: ElapsedClock::new(tick),
            previous_move: None,
            phase,
        }
    }

    /// Current board.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Accepted slides so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Elapsed play time.
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Elapsed play time in ticks (seconds with the default interval).
    pub fn elapsed_ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// The elapsed-time clock.
    pub fn clock(&self) -> &ElapsedClock {
        &self.clock
    }

    /// Tile moved by the last accepted slide, for animation hints.
    pub fn previous_move(&self) -> Option<usize> {
        self.previous_move
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the exit transition has completed.
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Feeds a collaborator signal into the lifecycle.
    ///
    /// Signals that don't apply to the current phase are ignored.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn signal(&mut self, signal: Signal) -> PhaseEffect {
        self.transition(PhaseEvent::from(signal))
    }

    fn transition(&mut self, event: PhaseEvent) -> PhaseEffect {
        let (next, effect) = self.phase.handle(event);
        if next == self.phase {
            debug!(?event, phase = %self.phase, "Ignoring event in current phase");
            return effect;
        }

        info!(from = %self.phase, to = %next, ?event, "Phase transition");
        self.phase = next;

        match effect {
            PhaseEffect::StartClock => {
                if !self.clock.start() {
                    warn!("Clock was already started");
                }
            }
            PhaseEffect::StopClock => {
                if !self.clock.stop() {
                    warn!("Clock was not running");
                }
                info!(ticks = self.clock.ticks(), "Clock stopped");
            }
            PhaseEffect::Finish | PhaseEffect::None => {}
        }
        effect
    }

    /// Slides `tile` if the session is active and the tile is movable.
    ///
    /// Every accepted slide counts as one move. A slide that solves the
    /// board moves the session to [`Phase::RequestTransitionOut`] and
    /// freezes the clock.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.moves))]
    pub fn slide(&mut self, tile: usize) -> SlideOutcome {
        if !self.phase.is_active() {
            debug!("Slide outside active phase");
            return SlideOutcome::Ignored;
        }

        let next = match self.puzzle.try_slide(tile) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Slide rejected");
                return SlideOutcome::Ignored;
            }
        };

        self.puzzle = next;
        self.moves = self.moves.saturating_add(1);
        self.previous_move = Some(tile);

        if self.puzzle.is_solved() {
            info!(moves = self.moves, ticks = self.clock.ticks(), "Puzzle solved");
            self.transition(PhaseEvent::Solved);
            SlideOutcome::Solved
        } else {
            SlideOutcome::Moved
        }
    }

    /// Advances the clock by one tick while active.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.clock.tick()
    }

    /// Clamps a drag of the tile at `index`; tiles are pinned outside the
    /// active phase.
    pub fn clamp_drag(&self, layout: &GridLayout, index: usize, raw: DragOffset) -> DragOffset {
        if !self.phase.is_active() {
            return DragOffset::ZERO;
        }
        gesture::clamp_drag(&self.puzzle, layout, index, raw)
    }

    /// Observable copy of the session for UI layers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            moves: self.moves,
            elapsed_ticks: self.clock.ticks(),
            elapsed: self.clock.elapsed(),
            previous_move: self.previous_move,
            solved: self.puzzle.is_solved(),
            puzzle: self.puzzle.clone(),
        }
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Accepted slides.
    pub moves: u32,
    /// Elapsed ticks.
    pub elapsed_ticks: u64,
    /// Elapsed ticks as wall time, saturating.
    pub elapsed: Duration,
    /// Last moved tile.
    pub previous_move: Option<usize>,
    /// Whether the board is in the goal arrangement.
    pub solved: bool,
    /// The board.
    pub puzzle: Puzzle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_from_goal() -> Puzzle {
        Puzzle::from_board(3, vec![0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap()
    }

    fn active(puzzle: Puzzle) -> GameSession {
        let mut session = GameSession::new(puzzle, true);
        session.signal(Signal::EntryTransitionComplete);
        session
    }

    #[test]
    fn test_slides_ignored_before_active() {
        let mut session = GameSession::new(one_from_goal(), false);
        assert_eq!(session.slide(7), SlideOutcome::Ignored);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.puzzle(), &one_from_goal());
    }

    #[test]
    fn test_each_accepted_slide_counts_once() {
        let mut session = active(one_from_goal());
        assert_eq!(session.slide(4), SlideOutcome::Moved);
        assert_eq!(session.slide(0), SlideOutcome::Ignored);
        assert_eq!(session.slide(4), SlideOutcome::Moved);
        assert_eq!(session.moves(), 2);
        assert_eq!(session.previous_move(), Some(4));
    }

    #[test]
    fn test_solving_slide_requests_transition_out() {
        let mut session = active(one_from_goal());
        session.tick();
        session.tick();
        assert_eq!(session.slide(7), SlideOutcome::Solved);
        assert_eq!(session.phase(), Phase::RequestTransitionOut);
        assert_eq!(session.moves(), 1);

        assert!(!session.tick());
        assert_eq!(session.elapsed_ticks(), 2);
    }

    #[test]
    fn test_drag_pinned_outside_active() {
        let session = GameSession::new(one_from_goal(), true);
        let layout = GridLayout::default();
        assert_eq!(
            session.clamp_drag(&layout, 8, DragOffset::new(-30.0, 0.0)),
            DragOffset::ZERO
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = active(one_from_goal());
        session.slide(7);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::RequestTransitionOut);
        assert!(snapshot.solved);
        assert_eq!(snapshot.previous_move, Some(7));
    }

    #[test]
    fn test_snapshot_elapsed_saturates() {
        let mut session = GameSession::with_tick_interval(one_from_goal(), true, Duration::MAX);
        session.signal(Signal::EntryTransitionComplete);
        session.tick();
        session.tick();
        assert_eq!(session.snapshot().elapsed_ticks, 2);
        assert_eq!(session.snapshot().elapsed, Duration::MAX);
    }

    #[test]
    fn test_snapshot_elapsed_in_wall_time() {
        let mut session =
            GameSession::with_tick_interval(one_from_goal(), true, Duration::from_millis(250));
        session.signal(Signal::EntryTransitionComplete);
        session.tick();
        session.tick();
        assert_eq!(session.snapshot().elapsed, Duration::from_millis(500));
    }
}
