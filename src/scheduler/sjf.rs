//! Static-sort SJF-style batch scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes ascending by `(arrival_time, burst_time)`.
//! 2. Chain nominal service slots: each slot begins when the previous
//!    burst completes; the first begins at its process's arrival.
//! 3. Waiting time is slot start minus arrival, clamped at zero.
//! 4. Turnaround is burst plus waiting; start/complete times chain from
//!    the first process's arrival.
//!
//! The sort happens once, up front. The CPU never re-selects the
//! shortest remaining job when it becomes free, so this is FCFS with a
//! burst-time tie-break rather than textbook SJF, and no idle gaps are
//! inserted for processes that arrive after their nominal slot opens.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use crate::models::{Process, ScheduleEntry, ScheduleResult};
use crate::validation::{validate_times, InvalidInput};

/// Non-preemptive batch scheduler over a fixed process list.
///
/// Owns a private sorted copy of the processes; `schedule` is a pure
/// function of that copy, so one instance can be reused or shared
/// across threads freely.
///
/// # Example
///
/// ```
/// use sjf_sched::scheduler::SjfScheduler;
///
/// # fn main() -> Result<(), sjf_sched::validation::InvalidInput> {
/// let scheduler = SjfScheduler::from_times(&[0, 1, 2, 3], &[3, 4, 2, 5])?;
/// let result = scheduler.schedule();
///
/// assert_eq!(result.process_count(), 4);
/// assert_eq!(result.makespan(), 27);
/// assert_eq!(result.average_waiting_time, 3.25);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    processes: Vec<Process>,
}

impl SjfScheduler {
    /// Creates a scheduler from parallel arrival/burst sequences.
    ///
    /// Ids are assigned as 1-based input positions before sorting, so
    /// output entries can always be traced back to the input order.
    ///
    /// # Errors
    /// [`InvalidInput`] if the sequences differ in length or are empty.
    pub fn from_times(arrival_times: &[i64], burst_times: &[i64]) -> Result<Self, InvalidInput> {
        validate_times(arrival_times, burst_times)?;
        let mut processes = Process::from_times(arrival_times, burst_times);
        processes.sort_by_key(Process::dispatch_key);
        Ok(Self { processes })
    }

    /// The processes in processing (sorted) order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Computes the schedule in a single pass over the sorted processes.
    ///
    /// # Algorithm
    /// 1. First process: service begins at its own arrival, waiting 0.
    /// 2. `service_start[i] = service_start[i-1] + burst[i-1]` for i ≥ 1.
    /// 3. `waiting[i] = max(0, service_start[i] - arrival[i])`.
    /// 4. `turnaround[i] = burst[i] + waiting[i]`.
    /// 5. `start[0] = arrival[0]`; `start[i] = complete[i-1]`;
    ///    `complete[i] = start[i] + turnaround[i]`.
    pub fn schedule(&self) -> ScheduleResult {
        let n = self.processes.len();
        let mut entries = Vec::with_capacity(n);
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut service_start: i64 = 0;
        let mut prev_complete: i64 = 0;

        for (i, process) in self.processes.iter().enumerate() {
            service_start = if i == 0 {
                process.arrival_time
            } else {
                service_start + self.processes[i - 1].burst_time
            };
            let waiting_time = (service_start - process.arrival_time).max(0);
            let turnaround_time = process.burst_time + waiting_time;
            let start_time = if i == 0 {
                process.arrival_time
            } else {
                prev_complete
            };
            let complete_time = start_time + turnaround_time;
            prev_complete = complete_time;

            total_waiting += waiting_time;
            total_turnaround += turnaround_time;
            entries.push(ScheduleEntry {
                id: process.id,
                start_time,
                complete_time,
                turnaround_time,
                waiting_time,
            });
        }

        ScheduleResult {
            entries,
            average_turnaround_time: total_turnaround as f64 / n as f64,
            average_waiting_time: total_waiting as f64 / n as f64,
        }
    }

    /// Validates, constructs, and schedules in one call.
    pub fn schedule_times(
        arrival_times: &[i64],
        burst_times: &[i64],
    ) -> Result<ScheduleResult, InvalidInput> {
        Ok(Self::from_times(arrival_times, burst_times)?.schedule())
    }
}
