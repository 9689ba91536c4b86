//! One-shot delayed jobs with cancellation.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// A pending job returned by [`Scheduler::schedule`].
pub trait ScheduledTask: Clone + 'static {
    /// Cancel the job and release what it captured. Cancelling a job that
    /// already ran, or was already cancelled, is a no-op.
    fn cancel(&self);
}

pub trait Scheduler: Clone + 'static {
    type Task: ScheduledTask;

    /// Run `job` once after `delay_ms`. The job runs even if the returned
    /// task is dropped.
    fn schedule(&self, delay_ms: u32, job: Box<dyn FnOnce()>) -> Self::Task;
}

/// Longest delay `setTimeout` honours; larger values fire immediately.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

pub fn timeout_delay(delay_ms: u32) -> u32 {
    delay_ms.min(MAX_TIMEOUT_MS)
}

/// `setTimeout`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Handle of a browser timeout. The slot is emptied when the job runs or
/// is cancelled, which drops the callback and everything it owns.
#[derive(Clone, Default)]
pub struct BrowserTask {
    timeout: Rc<RefCell<Option<Timeout>>>,
}

impl ScheduledTask for BrowserTask {
    fn cancel(&self) {
        let timeout = self.timeout.borrow_mut().take();
        if let Some(timeout) = timeout {
            drop(timeout.cancel());
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn schedule(&self, delay_ms: u32, job: Box<dyn FnOnce()>) -> BrowserTask {
        let task = BrowserTask::default();
        // The callback keeps the slot alive until it fires or is cancelled,
        // so dropping the task does not stop the job.
        let slot = task.timeout.clone();
        let timeout = Timeout::new(timeout_delay(delay_ms), move || {
            let fired = slot.borrow_mut().take();
            job();
            drop(fired);
        });
        *task.timeout.borrow_mut() = Some(timeout);
        task
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::{ScheduledTask, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    type JobSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    struct Job {
        due_ms: u64,
        seq: u64,
        run: JobSlot,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        next_seq: u64,
        jobs: Vec<Job>,
    }

    /// Scheduler driven by an explicit clock; nothing runs until
    /// [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    #[derive(Clone)]
    pub struct ManualTask {
        run: JobSlot,
    }

    impl ScheduledTask for ManualTask {
        fn cancel(&self) {
            let job = self.run.borrow_mut().take();
            drop(job);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Jobs neither run nor cancelled.
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .jobs
                .iter()
                .filter(|job| job.run.borrow().is_some())
                .count()
        }

        /// Move the clock forward, running due jobs in order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .jobs
                        .iter()
                        .enumerate()
                        .filter(|(_, job)| job.due_ms <= target)
                        .min_by_key(|(_, job)| (job.due_ms, job.seq))
                        .map(|(idx, _)| idx);
                    due.map(|idx| {
                        let job = clock.jobs.remove(idx);
                        clock.now_ms = job.due_ms;
                        job
                    })
                };
                // The clock is released before running so jobs can schedule more.
                let Some(job) = next else {
                    break;
                };
                let run = job.run.borrow_mut().take();
                if let Some(run) = run {
                    run();
                }
            }
            self.clock.borrow_mut().now_ms = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule(&self, delay_ms: u32, job: Box<dyn FnOnce()>) -> ManualTask {
            let run: JobSlot = Rc::new(RefCell::new(Some(job)));
            let mut clock = self.clock.borrow_mut();
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let due_ms = clock.now_ms + u64::from(delay_ms);
            clock.jobs.push(Job {
                due_ms,
                seq,
                run: run.clone(),
            });
            ManualTask { run }
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn test_jobs_run_when_due() {
            let scheduler = ManualScheduler::new();
            let hits = Rc::new(Cell::new(0));
            let h = hits.clone();
            scheduler.schedule(100, Box::new(move || h.set(h.get() + 1)));

            scheduler.advance(99);
            assert_eq!(hits.get(), 0);
            scheduler.advance(1);
            assert_eq!(hits.get(), 1);
            scheduler.advance(1_000);
            assert_eq!(hits.get(), 1);
        }

        #[test]
        fn test_cancel_before_and_after_run() {
            let scheduler = ManualScheduler::new();
            let hits = Rc::new(Cell::new(0));
            let h = hits.clone();
            let task = scheduler.schedule(10, Box::new(move || h.set(h.get() + 1)));
            task.cancel();
            scheduler.advance(10);
            assert_eq!(hits.get(), 0);

            let h = hits.clone();
            let task = scheduler.schedule(10, Box::new(move || h.set(h.get() + 1)));
            scheduler.advance(10);
            task.cancel();
            assert_eq!(hits.get(), 1);
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn test_cancel_releases_captures() {
            let scheduler = ManualScheduler::new();
            let captured = Rc::new(());
            let c = captured.clone();
            let task = scheduler.schedule(10, Box::new(move || drop(c)));
            assert_eq!(Rc::strong_count(&captured), 2);

            task.cancel();
            assert_eq!(Rc::strong_count(&captured), 1);
        }
    }
}
