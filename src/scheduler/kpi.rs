//! Schedule quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total Busy Time | Sum of burst times |
//! | CPU Utilization | busy_time / (makespan - first start) |
//! | Throughput | Processes completed per tick of the same window |
//! | Max Waiting | Largest single wait |
//! | Averages | Mean turnaround / waiting, carried from the result |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::ScheduleResult;

/// Schedule performance indicators.
///
/// All time values are in the same ticks as the scheduled input.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time (ticks).
    pub makespan: i64,
    /// Sum of burst times across all processes (ticks).
    pub total_busy_time: i64,
    /// Fraction of the schedule window spent executing bursts (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick of the schedule window.
    pub throughput: f64,
    /// Largest single waiting time (ticks).
    pub max_waiting_time: i64,
    /// Mean turnaround time (ticks).
    pub average_turnaround_time: f64,
    /// Mean waiting time (ticks).
    pub average_waiting_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    ///
    /// The schedule window runs from the first entry's start to the
    /// makespan. A zero-length window (all bursts zero) yields zero
    /// utilization and throughput.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let first_start = result.entries.first().map_or(0, |e| e.start_time);
        let window = makespan - first_start;

        let total_busy_time: i64 = result.entries.iter().map(|e| e.burst_time()).sum();
        let max_waiting_time = result
            .entries
            .iter()
            .map(|e| e.waiting_time)
            .max()
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if window > 0 {
            (
                total_busy_time as f64 / window as f64,
                result.process_count() as f64 / window as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            total_busy_time,
            cpu_utilization,
            throughput,
            max_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            average_waiting_time: result.average_waiting_time,
        }
    }
}
