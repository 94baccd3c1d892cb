use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::animator::{Animator, RunId, SortEvent};
use crate::lot::CarSizes;
use crate::sort::Algorithm;
use crate::ui::Status;

/// Owns the displayed lot and applies snapshots coming back from sort runs.
pub struct Controller {
    sizes: CarSizes,
    status: Status,
    animator: Animator,
    events: UnboundedReceiver<SortEvent>,
}

impl Controller {
    pub fn new(runtime: Handle) -> Self {
        Self::with_sizes(runtime, CarSizes::random())
    }

    pub fn with_sizes(runtime: Handle, sizes: CarSizes) -> Self {
        let (sender, events) = unbounded_channel();
        Self {
            sizes,
            status: Status::Idle,
            animator: Animator::new(runtime, sender),
            events,
        }
    }

    pub fn sizes(&self) -> &CarSizes {
        &self.sizes
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Start an animated run on the current lot. Refused while one is active.
    pub fn sort(&mut self, algorithm: Algorithm, delay: Duration) -> Option<RunId> {
        if self.animator.is_running() {
            return None;
        }
        let id = self.animator.start(algorithm, &self.sizes, delay);
        self.status = Status::Running {
            algorithm,
            progress: None,
        };
        Some(id)
    }

    /// Park a fresh random set of cars, abandoning any run in progress.
    pub fn reset(&mut self) {
        self.animator.abort();
        self.sizes = CarSizes::random();
        self.status = Status::Idle;
        log::info!("Lot reset: {:?}", self.sizes.as_slice());
    }

    /// Apply every queued event; returns whether anything arrived.
    pub fn pump(&mut self) -> bool {
        let mut received = false;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            received = true;
        }
        received
    }

    fn apply(&mut self, event: SortEvent) {
        if !self.animator.accepts(&event) {
            log::debug!("Dropping stale event from run {}", event.run_id());
            return;
        }

        match event {
            SortEvent::Step {
                step, total, sizes, ..
            } => match CarSizes::from_slice(&sizes) {
                Ok(next) => {
                    self.sizes = next;
                    if let Some(algorithm) = self.animator.active_algorithm() {
                        self.status = Status::Running {
                            algorithm,
                            progress: Some((step, total)),
                        };
                    }
                }
                Err(e) => log::warn!("Ignoring malformed snapshot: {}", e),
            },
            SortEvent::Completed {
                run_id,
                algorithm,
                steps,
            } => {
                log::info!("{} done in {} steps", algorithm.name(), steps);
                if !self.sizes.is_sorted() {
                    log::warn!("Run {} finished on an unsorted lot", run_id);
                }
                self.animator.finish(run_id);
                self.status = Status::Completed;
            }
        }
    }
}
