//! Runs submissions on a background task for event-loop front-ends.
//!
//! The driver owns the wizard state and at most one evaluation task. A new
//! submit aborts the previous task, and dropping the driver aborts whatever
//! is still running.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::error::{Result, WizardError};
use super::state::WizardState;
use crate::remote::{Evaluator, RemoteError};

type Outcome<R> = std::result::Result<R, RemoteError>;

struct InFlight<R> {
    submission: u64,
    task: JoinHandle<()>,
    rx: oneshot::Receiver<Outcome<R>>,
}

pub struct SubmissionDriver<E: Evaluator> {
    state: WizardState<E::Output>,
    evaluator: Arc<E>,
    runtime: Handle,
    in_flight: Option<InFlight<E::Output>>,
    submissions: u64,
}

impl<E> SubmissionDriver<E>
where
    E: Evaluator + 'static,
    E::Output: Clone + 'static,
{
    pub fn new(state: WizardState<E::Output>, evaluator: Arc<E>, runtime: Handle) -> Self {
        Self {
            state,
            evaluator,
            runtime,
            in_flight: None,
            submissions: 0,
        }
    }

    pub fn state(&self) -> &WizardState<E::Output> {
        &self.state
    }

    /// Apply a synchronous transition; on error the state is unchanged
    pub fn apply<F>(&mut self, transition: F) -> Result<()>
    where
        F: FnOnce(&WizardState<E::Output>) -> Result<WizardState<E::Output>>,
    {
        self.state = transition(&self.state)?;
        Ok(())
    }

    /// Validate the form and start evaluating it in the background.
    ///
    /// Any evaluation already running is aborted first.
    pub fn start_submit(&mut self) -> Result<()> {
        let (submitting, submission) = self.state.begin_submit()?;
        self.abort_in_flight();

        self.submissions += 1;
        let (tx, rx) = oneshot::channel();
        let evaluator = Arc::clone(&self.evaluator);
        let task = self.runtime.spawn(async move {
            let outcome = evaluator.evaluate(&submission).await;
            let _ = tx.send(outcome);
        });

        debug!(submission = self.submissions, "evaluation started");
        self.in_flight = Some(InFlight {
            submission: self.submissions,
            task,
            rx,
        });
        self.state = submitting;
        Ok(())
    }

    /// Collect a finished evaluation without blocking.
    ///
    /// Returns `None` while nothing has finished. A failure, or a task that
    /// ended without a result, rolls the state back to the last question and
    /// is returned for reporting.
    pub fn poll(&mut self) -> Option<Result<()>> {
        let in_flight = self.in_flight.as_mut()?;
        let outcome = match in_flight.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => {
                warn!(
                    submission = in_flight.submission,
                    "evaluation task ended without a result"
                );
                self.in_flight = None;
                self.state = self.state.abandon_submit();
                return Some(Err(WizardError::Interrupted));
            }
        };

        self.in_flight = None;
        match outcome {
            Ok(payload) => {
                self.state = self.state.complete_submit(payload);
                Some(Ok(()))
            }
            Err(err) => {
                warn!(error = %err, "evaluation failed");
                self.state = self.state.abandon_submit();
                Some(Err(err.into()))
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Abort the running evaluation, if any
    pub fn cancel(&mut self) {
        if self.in_flight.is_some() {
            self.abort_in_flight();
            self.state = self.state.abandon_submit();
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            debug!(submission = previous.submission, "aborting evaluation");
            previous.task.abort();
        }
    }
}

impl<E: Evaluator> Drop for SubmissionDriver<E> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}
