//! Interactive play loop on top of the session driver.

use std::time::Duration;

use anyhow::Result;
use strictly_slider::{
    GameSession, Phase, Puzzle, PuzzleConfig, SessionHandle, SessionSnapshot, Signal,
    SlideOutcome, movable_squares, spawn_session,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// What the player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Slide(usize),
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    line.parse().map(Input::Slide).unwrap_or(Input::Unknown)
}

/// Plays `puzzle` on stdin/stdout until it is solved or abandoned.
#[instrument(skip_all, fields(size = puzzle.size()))]
pub async fn run(puzzle: Puzzle, config: &PuzzleConfig) -> Result<()> {
    // The terminal has no image to load, so the session starts at the entry transition.
    let session = GameSession::with_tick_interval(puzzle, true, config.tick_interval());
    let (handle, task) = spawn_session(session);
    handle.signal(Signal::EntryTransitionComplete).await?;

    println!("Slide tiles by number. Enter q to give up.");
    print_snapshot(&handle.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while handle.snapshot().phase == Phase::Active {
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            handle.signal(Signal::QuitRequested).await?;
            break;
        };

        match parse_input(&line) {
            Input::Quit => {
                handle.signal(Signal::QuitRequested).await?;
            }
            Input::Slide(tile) => report_slide(&handle, tile).await?,
            Input::Unknown => println!("Enter a tile number or q."),
        }
    }

    finish(handle).await?;
    let session = task.await?;
    info!(moves = session.moves(), solved = session.puzzle().is_solved(), "Game over");
    Ok(())
}

async fn report_slide(handle: &SessionHandle, tile: usize) -> Result<()> {
    match handle.slide(tile).await? {
        SlideOutcome::Ignored => {
            let snapshot = handle.snapshot();
            println!(
                "Tile {tile} can't move. Try one of {:?}.",
                movable_squares(&snapshot.puzzle)
            );
        }
        SlideOutcome::Moved => print_snapshot(&handle.snapshot()),
        SlideOutcome::Solved => {
            print_snapshot(&handle.snapshot());
            println!("Solved!");
        }
    }
    Ok(())
}

/// Completes the exit transition the driver is waiting for.
async fn finish(handle: SessionHandle) -> Result<()> {
    let snapshot = handle.snapshot();
    if snapshot.phase != Phase::RequestTransitionOut {
        warn!(phase = %snapshot.phase, "Leaving play loop outside the exit phase");
    }
    handle.signal(Signal::ExitTransitionComplete).await?;
    println!(
        "{} moves in {}.",
        snapshot.moves,
        format_elapsed(snapshot.elapsed)
    );
    Ok(())
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    println!();
    println!("{}", snapshot.puzzle);
    println!(
        "moves: {}  time: {}",
        snapshot.moves,
        format_elapsed(snapshot.elapsed)
    );
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
