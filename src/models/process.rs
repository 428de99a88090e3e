//! Process model.
//!
//! A process is the unit of scheduling: a single uninterruptible CPU
//! demand described by when it becomes available and how long it runs.
//!
//! # Time Representation
//! All times are integer clock ticks relative to a scheduling epoch (t=0).
//! The consumer defines what a tick means (ms, time quanta, ...).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The `id` is the process's 1-based position in the caller-supplied
/// input order. It is assigned before any sorting and never changes, so
/// results can always be mapped back to the original input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in the original input order.
    pub id: usize,
    /// Instant the process becomes available for scheduling (ticks).
    pub arrival_time: i64,
    /// Uninterrupted CPU time the process requires (ticks).
    pub burst_time: i64,
}

impl Process {
    /// Creates a process with an explicit id.
    pub fn new(id: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Builds processes from parallel arrival/burst sequences.
    ///
    /// Ids are assigned as 1-based input positions. The sequences must be
    /// the same length; this function zips up to the shorter one, so
    /// callers validate lengths first (see [`crate::validation`]).
    pub fn from_times(arrival_times: &[i64], burst_times: &[i64]) -> Vec<Self> {
        arrival_times
            .iter()
            .zip(burst_times)
            .enumerate()
            .map(|(i, (&arrival, &burst))| Self::new(i + 1, arrival, burst))
            .collect()
    }

    /// Sort key for the processing order: arrival first, burst on ties.
    pub(crate) fn dispatch_key(&self) -> (i64, i64) {
        (self.arrival_time, self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_times_assigns_one_based_ids() {
        let procs = Process::from_times(&[0, 1, 2], &[3, 4, 2]);
        assert_eq!(procs.len(), 3);
        assert_eq!(procs[0], Process::new(1, 0, 3));
        assert_eq!(procs[1], Process::new(2, 1, 4));
        assert_eq!(procs[2], Process::new(3, 2, 2));
    }

    #[test]
    fn test_dispatch_key_orders_by_arrival_then_burst() {
        let early_long = Process::new(1, 0, 5);
        let early_short = Process::new(2, 0, 2);
        let late = Process::new(3, 4, 1);
        assert!(early_short.dispatch_key() < early_long.dispatch_key());
        assert!(early_long.dispatch_key() < late.dispatch_key());
    }

    #[test]
    fn test_process_serde_roundtrip() {
        let p = Process::new(2, 7, 3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
