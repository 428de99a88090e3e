//! Scheduling domain models.
//!
//! Core data types for the batch scheduling problem and its solution:
//! a [`Process`] describes one unit of CPU demand, a [`ScheduleEntry`]
//! its computed times, and a [`ScheduleResult`] the whole run.

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ScheduleEntry, ScheduleResult};
