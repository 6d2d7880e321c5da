//! Game lifecycle: phases, the per-session state they guard, and the task
//! that drives a session from a single thread of control.

mod clock;
pub mod driver;
mod phases;
mod session;

pub use clock::{ClockState, DEFAULT_TICK_INTERVAL, ElapsedClock, MIN_TICK_INTERVAL};
pub use driver::{DriverError, SessionHandle};
pub use phases::{Phase, PhaseEffect, PhaseEvent, Signal};
pub use session::{GameSession, SessionSnapshot, SlideOutcome};
