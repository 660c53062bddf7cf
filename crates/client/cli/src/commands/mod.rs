//! Command implementations for stake-planner
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod preview;
mod schedule;
mod session;

pub use preview::Preview;
pub use schedule::Schedule;
pub use session::Session;
