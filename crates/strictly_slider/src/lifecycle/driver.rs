//! Session driver: one tokio task owns the session.
//!
//! Slides, lifecycle signals and clock ticks all land on the same task, one
//! at a time, so they cannot race. The tick is a [`tokio::time::Interval`]
//! that exists only while the session is active and is dropped the moment it
//! leaves [`Phase::Active`](super::Phase::Active).

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, instrument};

use super::clock::MIN_TICK_INTERVAL;
use super::phases::{PhaseEffect, Signal};
use super::session::{GameSession, SessionSnapshot, SlideOutcome};
use crate::geometry::GridLayout;
use crate::gesture::DragOffset;

const COMMAND_BUFFER: usize = 32;

/// Error talking to a driver task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DriverError {
    /// The driver task has finished or was dropped.
    #[display("Session driver is no longer running")]
    SessionClosed,
}

impl std::error::Error for DriverError {}

#[derive(Debug)]
enum Command {
    Signal {
        signal: Signal,
        reply: oneshot::Sender<PhaseEffect>,
    },
    Slide {
        tile: usize,
        reply: oneshot::Sender<SlideOutcome>,
    },
    ClampDrag {
        layout: GridLayout,
        index: usize,
        raw: DragOffset,
        reply: oneshot::Sender<DragOffset>,
    },
}

/// Cloneable handle to a running session driver.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, DriverError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| DriverError::SessionClosed)?;
        response.await.map_err(|_| DriverError::SessionClosed)
    }

    /// Sends a lifecycle signal.
    #[instrument(skip(self))]
    pub async fn signal(&self, signal: Signal) -> Result<PhaseEffect, DriverError> {
        self.request(|reply| Command::Signal { signal, reply }).await
    }

    /// Requests a slide.
    #[instrument(skip(self))]
    pub async fn slide(&self, tile: usize) -> Result<SlideOutcome, DriverError> {
        self.request(|reply| Command::Slide { tile, reply }).await
    }

    /// Clamps a drag sample against the session's current board.
    #[instrument(level = "trace", skip(self, layout))]
    pub async fn clamp_drag(
        &self,
        layout: GridLayout,
        index: usize,
        raw: DragOffset,
    ) -> Result<DragOffset, DriverError> {
        self.request(|reply| Command::ClampDrag {
            layout,
            index,
            raw,
            reply,
        })
        .await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawns a driver task that owns `session`.
///
/// The task ends when the session reaches its terminal phase or every
/// handle is dropped; its join handle yields the final session.
#[instrument(skip(session), fields(phase = %session.phase()))]
pub fn spawn(session: GameSession) -> (SessionHandle, JoinHandle<GameSession>) {
    let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshots_tx, snapshots_rx) = watch::channel(session.snapshot());
    let task = tokio::spawn(run(session, commands_rx, snapshots_tx));
    (
        SessionHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        },
        task,
    )
}

async fn run(
    mut session: GameSession,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
) -> GameSession {
    let mut ticker: Option<Interval> = None;
    sync_ticker(&session, &mut ticker);

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("All session handles dropped");
                    break;
                };
                handle_command(&mut session, command);
            }
            _ = next_tick(&mut ticker) => {
                session.tick();
            }
        }

        sync_ticker(&session, &mut ticker);
        snapshots.send_replace(session.snapshot());

        if session.is_finished() {
            info!(moves = session.moves(), ticks = session.elapsed_ticks(), "Session finished");
            break;
        }
    }

    session
}

fn handle_command(session: &mut GameSession, command: Command) {
    // Replies are best effort: a caller that stopped waiting is not an error.
    match command {
        Command::Signal { signal, reply } => {
            let _ = reply.send(session.signal(signal));
        }
        Command::Slide { tile, reply } => {
            let _ = reply.send(session.slide(tile));
        }
        Command::ClampDrag {
            layout,
            index,
            raw,
            reply,
        } => {
            let _ = reply.send(session.clamp_drag(&layout, index, raw));
        }
    }
}

/// Creates the tick when the clock starts and drops it when the clock stops.
fn sync_ticker(session: &GameSession, ticker: &mut Option<Interval>) {
    let running = session.clock().is_running();
    match (running, ticker.is_some()) {
        (true, false) => {
            let period = session.clock().interval().max(MIN_TICK_INTERVAL);
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(?period, "Tick scheduled");
            *ticker = Some(interval);
        }
        (false, true) => {
            *ticker = None;
            debug!("Tick cancelled");
        }
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker.as_mut() {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
