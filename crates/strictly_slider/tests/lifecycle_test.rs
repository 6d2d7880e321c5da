//! Tests for the session lifecycle without the async driver.

use strictly_slider::lifecycle::ClockState;
use strictly_slider::{
    DragOffset, GameSession, GridLayout, Phase, PhaseEffect, Puzzle, Signal, SlideOutcome,
};

fn nearly_solved() -> Puzzle {
    Puzzle::from_board(3, vec![0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap()
}

fn active_session() -> GameSession {
    let mut session = GameSession::new(nearly_solved(), true);
    assert_eq!(session.signal(Signal::EntryTransitionComplete), PhaseEffect::StartClock);
    session
}

#[test]
fn test_full_lifecycle_from_loading() {
    let mut session = GameSession::new(nearly_solved(), false);
    assert_eq!(session.phase(), Phase::LoadingAsset);

    assert_eq!(session.signal(Signal::ImageReady), PhaseEffect::None);
    assert_eq!(session.phase(), Phase::WillTransitionIn);

    assert_eq!(session.signal(Signal::EntryTransitionComplete), PhaseEffect::StartClock);
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.clock().state(), ClockState::Running);

    assert_eq!(session.slide(7), SlideOutcome::Solved);
    assert_eq!(session.phase(), Phase::RequestTransitionOut);
    assert_eq!(session.clock().state(), ClockState::Stopped);

    assert_eq!(session.signal(Signal::ExitTransitionComplete), PhaseEffect::Finish);
    assert_eq!(session.phase(), Phase::WillTransitionOut);
    assert!(session.is_finished());
}

#[test]
fn test_ready_asset_skips_loading() {
    let session = GameSession::new(nearly_solved(), true);
    assert_eq!(session.phase(), Phase::WillTransitionIn);
}

#[test]
fn test_out_of_order_signals_are_ignored() {
    let mut session = GameSession::new(nearly_solved(), false);
    for signal in [
        Signal::ExitTransitionComplete,
        Signal::EntryTransitionComplete,
        Signal::QuitRequested,
    ] {
        assert_eq!(session.signal(signal), PhaseEffect::None);
        assert_eq!(session.phase(), Phase::LoadingAsset);
    }
}

#[test]
fn test_moves_only_count_while_active() {
    let mut session = GameSession::new(nearly_solved(), true);
    assert_eq!(session.slide(7), SlideOutcome::Ignored);
    assert_eq!(session.moves(), 0);
    assert!(!session.tick());
    assert_eq!(session.elapsed_ticks(), 0);

    session.signal(Signal::EntryTransitionComplete);
    assert_eq!(session.slide(0), SlideOutcome::Ignored);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.slide(6), SlideOutcome::Moved);
    assert_eq!(session.moves(), 1);
    assert_eq!(session.previous_move(), Some(6));
}

#[test]
fn test_quit_freezes_the_clock() {
    let mut session = active_session();
    assert!(session.tick());
    assert!(session.tick());

    assert_eq!(session.signal(Signal::QuitRequested), PhaseEffect::StopClock);
    assert!(!session.tick());
    assert_eq!(session.elapsed_ticks(), 2);
    assert_eq!(session.slide(7), SlideOutcome::Ignored);
    assert!(!session.puzzle().is_solved());
}

#[test]
fn test_solve_freezes_the_clock() {
    let mut session = active_session();
    session.tick();
    assert_eq!(session.slide(7), SlideOutcome::Solved);
    assert!(!session.tick());
    assert_eq!(session.elapsed_ticks(), 1);

    // A repeated quit after solving changes nothing.
    assert_eq!(session.signal(Signal::QuitRequested), PhaseEffect::None);
    assert_eq!(session.clock().state(), ClockState::Stopped);
}

#[test]
fn test_drag_pinned_outside_active() {
    let layout = GridLayout::default();
    let drag = DragOffset::new(-500.0, 40.0);

    let mut session = GameSession::new(nearly_solved(), true);
    assert_eq!(session.clamp_drag(&layout, 8, drag), DragOffset::ZERO);

    session.signal(Signal::EntryTransitionComplete);
    let clamped = session.clamp_drag(&layout, 8, drag);
    assert_eq!(clamped.dy, 0.0);
    assert_eq!(clamped.dx, -layout.item_stride(3));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = active_session();
    session.slide(7);
    let snapshot = session.snapshot();
    assert!(snapshot.solved);
    assert_eq!(snapshot.moves, 1);
    assert_eq!(snapshot.previous_move, Some(7));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["phase"], "RequestTransitionOut");
    assert_eq!(json["puzzle"]["board"][8], 8);
}
