use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::animator::event::{RunId, SortEvent};
use crate::lot::CarSizes;
use crate::sort::Algorithm;

struct ActiveRun {
    id: RunId,
    algorithm: Algorithm,
    handle: JoinHandle<()>,
}

/// Starts sort runs and tracks the single run allowed at a time.
///
/// The run stays active until the UI hands its completion event back through
/// [`Animator::finish`] or aborts it with [`Animator::abort`].
pub struct Animator {
    runtime: Handle,
    sender: UnboundedSender<SortEvent>,
    next_run_id: u64,
    active: Option<ActiveRun>,
}

impl Animator {
    pub fn new(runtime: Handle, sender: UnboundedSender<SortEvent>) -> Self {
        Self {
            runtime,
            sender,
            next_run_id: 1,
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_algorithm(&self) -> Option<Algorithm> {
        self.active.as_ref().map(|run| run.algorithm)
    }

    /// Spawn a paced run of `algorithm` over a copy of `sizes`.
    ///
    /// While another run is active nothing is spawned and its id is returned.
    pub fn start(&mut self, algorithm: Algorithm, sizes: &CarSizes, delay: Duration) -> RunId {
        if let Some(run) = &self.active {
            log::warn!(
                "Ignoring {} request: run {} ({}) still in progress",
                algorithm.name(),
                run.id,
                run.algorithm.name()
            );
            return run.id;
        }

        let id = RunId(self.next_run_id);
        self.next_run_id += 1;

        let input = sizes.to_vec();
        let sender = self.sender.clone();

        log::info!("Starting run {}: {} on {:?}", id, algorithm.name(), input);

        let handle = self
            .runtime
            .spawn(run_sort(id, algorithm, input, delay, sender));

        self.active = Some(ActiveRun {
            id,
            algorithm,
            handle,
        });
        id
    }

    /// Stop the active run; its queued events become stale.
    pub fn abort(&mut self) {
        if let Some(run) = self.active.take() {
            log::info!("Aborting run {} ({})", run.id, run.algorithm.name());
            run.handle.abort();
        }
    }

    /// Whether `event` belongs to the active run.
    pub fn accepts(&self, event: &SortEvent) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| run.id == event.run_id())
    }

    /// Mark the active run as done once its completion event arrived.
    pub fn finish(&mut self, run_id: RunId) {
        if self.active.as_ref().is_some_and(|run| run.id == run_id) {
            self.active = None;
        }
    }
}

async fn run_sort(
    run_id: RunId,
    algorithm: Algorithm,
    input: Vec<u8>,
    delay: Duration,
    sender: UnboundedSender<SortEvent>,
) {
    let steps = algorithm.steps(&input);
    let total = steps.len();

    for (step, sizes) in steps.into_iter().enumerate() {
        log::debug!("Run {} step {}/{}: {:?}", run_id, step + 1, total, sizes);
        let event = SortEvent::Step {
            run_id,
            step,
            total,
            sizes,
        };
        if sender.send(event).is_err() {
            log::debug!("Run {} dropped: display is gone", run_id);
            return;
        }
        tokio::time::sleep(delay).await;
    }

    log::info!("Run {} finished after {} steps", run_id, total);
    let done = SortEvent::Completed {
        run_id,
        algorithm,
        steps: total,
    };
    if sender.send(done).is_err() {
        log::debug!("Run {} completion dropped: display is gone", run_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError, unbounded_channel};

    fn animator() -> (Animator, UnboundedReceiver<SortEvent>) {
        let (tx, rx) = unbounded_channel();
        (Animator::new(Handle::current(), tx), rx)
    }

    fn lot(values: [u8; 10]) -> CarSizes {
        CarSizes::from_slice(&values).unwrap()
    }

    async fn drain_run(rx: &mut UnboundedReceiver<SortEvent>) -> (Vec<Vec<u8>>, SortEvent) {
        let mut steps = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                SortEvent::Step { sizes, step, .. } => {
                    assert_eq!(step, steps.len());
                    steps.push(sizes);
                }
                done @ SortEvent::Completed { .. } => return (steps, done),
            }
        }
        panic!("channel closed before completion");
    }

    #[tokio::test]
    async fn run_delivers_steps_in_order_then_completion() {
        let sizes = lot([5, 4, 3, 2, 1, 1, 2, 3, 4, 5]);
        for algorithm in Algorithm::ALL {
            let (mut animator, mut rx) = animator();
            let id = animator.start(algorithm, &sizes, Duration::from_millis(1));
            assert!(animator.is_running());
            assert_eq!(animator.active_algorithm(), Some(algorithm));

            let (steps, done) = drain_run(&mut rx).await;
            assert_eq!(steps, algorithm.steps(sizes.as_slice()));
            assert_eq!(steps.last(), Some(&vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]));
            assert_eq!(
                done,
                SortEvent::Completed {
                    run_id: id,
                    algorithm,
                    steps: steps.len()
                }
            );

            assert!(animator.accepts(&done));
            animator.finish(id);
            assert!(!animator.is_running());
        }
    }

    #[tokio::test]
    async fn second_start_is_refused_while_running() {
        let (mut animator, _rx) = animator();
        let sizes = lot([2, 1, 2, 1, 2, 1, 2, 1, 2, 1]);
        let first = animator.start(Algorithm::Bubble, &sizes, Duration::from_secs(60));
        let second = animator.start(Algorithm::Merge, &sizes, Duration::from_secs(60));
        assert_eq!(first, second);
        assert_eq!(animator.active_algorithm(), Some(Algorithm::Bubble));
        animator.abort();
    }

    #[tokio::test]
    async fn aborted_run_goes_quiet_and_is_stale() {
        let (mut animator, mut rx) = animator();
        let sizes = lot([5, 4, 3, 2, 1, 5, 4, 3, 2, 1]);
        let id = animator.start(Algorithm::Selection, &sizes, Duration::from_secs(60));

        let first = rx.recv().await.unwrap();
        assert_eq!(first.run_id(), id);
        assert!(animator.accepts(&first));

        animator.abort();
        assert!(!animator.is_running());
        assert!(!animator.accepts(&first));

        tokio::task::yield_now().await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        let next = animator.start(Algorithm::Selection, &sizes, Duration::from_millis(1));
        assert_ne!(next, id);
        let (_, done) = drain_run(&mut rx).await;
        assert_eq!(done.run_id(), next);
    }

    #[tokio::test]
    async fn sorted_lot_completes_without_steps() {
        let (mut animator, mut rx) = animator();
        let sizes = lot([1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
        let id = animator.start(Algorithm::Bubble, &sizes, Duration::from_millis(1));
        let (steps, done) = drain_run(&mut rx).await;
        assert!(steps.is_empty());
        assert_eq!(
            done,
            SortEvent::Completed {
                run_id: id,
                algorithm: Algorithm::Bubble,
                steps: 0
            }
        );
    }

    #[tokio::test]
    async fn finish_ignores_other_runs() {
        let (mut animator, _rx) = animator();
        let sizes = lot([2, 1, 2, 1, 2, 1, 2, 1, 2, 1]);
        animator.start(Algorithm::Insertion, &sizes, Duration::from_secs(60));
        animator.finish(RunId(999));
        assert!(animator.is_running());
        animator.abort();
    }
}
