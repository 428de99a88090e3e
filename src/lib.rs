//! Non-preemptive SJF-style batch scheduling metrics.
//!
//! Computes per-process start, completion, turnaround, and waiting times
//! for a statically-known list of processes, plus aggregate averages.
//! Input is a pair of parallel sequences (arrival times, burst times);
//! output is an ordered table of per-process results. The crate performs
//! no I/O; form handling and chart rendering belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ScheduleEntry`, `ScheduleResult`
//! - **`scheduler`**: The `SjfScheduler` and `ScheduleKpi` quality metrics
//! - **`validation`**: Input integrity checks (length mismatch, empty input)
//!
//! # Algorithm
//!
//! Processes are sorted once, ascending by `(arrival_time, burst_time)`,
//! and served in that order by a single uninterrupted pass. Despite the
//! SJF name this is FCFS with a burst-time tie-break: there is no
//! re-selection of the shortest remaining job at each completion, and no
//! preemption. See [`scheduler::SjfScheduler`] for the exact rules.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod models;
pub mod scheduler;
pub mod validation;
