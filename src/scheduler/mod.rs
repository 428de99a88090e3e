//! Batch scheduler and KPI evaluation.
//!
//! Provides the static-sort SJF-style scheduler and schedule quality
//! metrics.
//!
//! # Algorithm
//!
//! `SjfScheduler` sorts processes once by `(arrival_time, burst_time)`
//! and serves them in that order in a single uninterrupted pass. It
//! does not re-select the shortest remaining job at each completion.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, CPU utilization, throughput, and
//! waiting-time aggregates from a finished schedule.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1-2
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod kpi;
mod sjf;

pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;
