//! Schedule result (solution) model.
//!
//! The result of one scheduler run: per-process computed times in
//! processing order, plus the two aggregate averages.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed times for one process.
///
/// Produced exactly once per scheduler run and never mutated afterwards.
/// Two identities hold for every entry:
/// `complete_time == start_time + turnaround_time` and
/// `turnaround_time == waiting_time + burst_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Process id (1-based position in the original input order).
    pub id: usize,
    /// Instant service begins (ticks).
    pub start_time: i64,
    /// Instant service finishes (ticks).
    pub complete_time: i64,
    /// Time from arrival to completion (ticks).
    pub turnaround_time: i64,
    /// Time spent ready but not running (ticks), never negative.
    pub waiting_time: i64,
}

impl ScheduleEntry {
    /// Burst time recovered from the turnaround identity.
    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.turnaround_time - self.waiting_time
    }
}

/// A complete schedule: one entry per input process, in processing order.
///
/// Processing order is the scheduler's internal sorted order, not the
/// original input order; use [`ScheduleResult::entries_by_id`] to restore
/// the latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Per-process results in processing order.
    pub entries: Vec<ScheduleEntry>,
    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
}

impl ScheduleResult {
    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a given process id.
    pub fn entry_for_process(&self, id: usize) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries re-sorted into original input order (ascending id).
    pub fn entries_by_id(&self) -> Vec<ScheduleEntry> {
        let mut by_id = self.entries.clone();
        by_id.sort_by_key(|e| e.id);
        by_id
    }

    /// Makespan: latest completion time across all entries (ticks).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.complete_time).max().unwrap_or(0)
    }
}

impl fmt::Display for ScheduleResult {
    /// Renders the five-column result table plus the two averages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>10} {:>10} {:>13} {:>16} {:>12}",
            "Process_no", "Start_time", "Complete_time", "Turn_Around_Time", "Waiting_Time"
        )?;
        for e in &self.entries {
            writeln!(
                f,
                "{:>10} {:>10} {:>13} {:>16} {:>12}",
                e.id, e.start_time, e.complete_time, e.turnaround_time, e.waiting_time
            )?;
        }
        writeln!(f, "Average Turnaround Time: {}", self.average_turnaround_time)?;
        write!(f, "Average Waiting Time: {}", self.average_waiting_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        ScheduleResult {
            entries: vec![
                ScheduleEntry {
                    id: 2,
                    start_time: 0,
                    complete_time: 2,
                    turnaround_time: 2,
                    waiting_time: 0,
                },
                ScheduleEntry {
                    id: 1,
                    start_time: 2,
                    complete_time: 12,
                    turnaround_time: 10,
                    waiting_time: 5,
                },
            ],
            average_turnaround_time: 6.0,
            average_waiting_time: 2.5,
        }
    }

    #[test]
    fn test_entry_for_process() {
        let r = sample_result();
        assert_eq!(r.entry_for_process(1).unwrap().waiting_time, 5);
        assert_eq!(r.entry_for_process(2).unwrap().waiting_time, 0);
        assert!(r.entry_for_process(99).is_none());
    }

    #[test]
    fn test_entries_by_id_restores_input_order() {
        let r = sample_result();
        let by_id: Vec<usize> = r.entries_by_id().iter().map(|e| e.id).collect();
        assert_eq!(by_id, vec![1, 2]);
        // Processing order is untouched
        assert_eq!(r.entries[0].id, 2);
    }

    #[test]
    fn test_makespan() {
        let r = sample_result();
        assert_eq!(r.makespan(), 12);
    }

    #[test]
    fn test_burst_time_identity() {
        let r = sample_result();
        assert_eq!(r.entries[0].burst_time(), 2);
        assert_eq!(r.entries[1].burst_time(), 5);
    }

    #[test]
    fn test_display_table() {
        let rendered = sample_result().to_string();
        assert!(rendered.contains("Process_no"));
        assert!(rendered.contains("Turn_Around_Time"));
        assert!(rendered.contains("Average Turnaround Time: 6"));
        assert!(rendered.contains("Average Waiting Time: 2.5"));
        // One header line, two entry rows, two average lines
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_result_serde_roundtrip() {
        let r = sample_result();
        let json = serde_json::to_string(&r).unwrap();
        let back: ScheduleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
