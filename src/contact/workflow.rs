use std::cell::RefCell;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};

use super::error::SubmitError;
use super::feedback::{Feedback, SUCCESS_MESSAGE};
use super::transport::{FormTransport, RemoteReply};
use super::validation::ContactSubmission;

pub const PAGE: &str = "home";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(SubmitError),
    /// A previous submission was still in flight.
    Ignored,
}

/// What the workflow needs from the rendered form.
pub trait FormView {
    /// Disables the submit button and shows the sending label, or restores it.
    fn set_in_flight(&self, in_flight: bool);
    fn show_feedback(&self, feedback: Feedback);
    fn clear_fields(&self);
}

pub struct ContactWorkflow<T, A> {
    transport: T,
    analytics: A,
    phase: RefCell<SubmitPhase>,
}

impl<T: FormTransport, A: AnalyticsSink> ContactWorkflow<T, A> {
    pub fn new(transport: T, analytics: A) -> Self {
        Self {
            transport,
            analytics,
            phase: RefCell::new(SubmitPhase::Idle),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.borrow().clone()
    }

    fn enter(&self, phase: SubmitPhase) {
        log::debug!("Contact form: {:?}", phase);
        *self.phase.borrow_mut() = phase;
    }

    /// Runs one validate-send-report cycle and leaves the form idle again.
    pub async fn submit<V: FormView>(&self, view: &V, submission: ContactSubmission) -> SubmitOutcome {
        if *self.phase.borrow() == SubmitPhase::Submitting {
            log::warn!("Ignoring contact form submit while another one is in flight");
            return SubmitOutcome::Ignored;
        }

        self.analytics.track(AnalyticsEvent::form_submit(PAGE));
        self.enter(SubmitPhase::Validating);

        if let Err(e) = submission.validate() {
            log::info!("Contact form rejected locally: {}", e);
            view.show_feedback(Feedback::error(e.user_message()));
            return self.finish(SubmitError::Validation(e).into());
        }

        self.enter(SubmitPhase::Submitting);
        view.set_in_flight(true);

        let result = match self.transport.send(submission.to_form_body()).await {
            Ok(RemoteReply::Accepted) => Ok(()),
            Ok(RemoteReply::Rejected(body)) => Err(SubmitError::RemoteRejection {
                messages: body.messages(),
            }),
            Err(e) => Err(SubmitError::Transport(e)),
        };

        let outcome = match result {
            Ok(()) => {
                view.show_feedback(Feedback::success(SUCCESS_MESSAGE));
                view.clear_fields();
                self.analytics.track(AnalyticsEvent::form_success());
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                if let SubmitError::Transport(_) = e {
                    log::error!("Form submission error: {}", e);
                } else {
                    log::warn!("Form submission refused: {}", e);
                }
                view.show_feedback(Feedback::error(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        };

        view.set_in_flight(false);
        self.finish(outcome)
    }

    fn finish(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        match &outcome {
            SubmitOutcome::Succeeded => self.enter(SubmitPhase::Succeeded),
            SubmitOutcome::Failed(e) => self.enter(SubmitPhase::Failed(e.clone())),
            SubmitOutcome::Ignored => {}
        }
        self.enter(SubmitPhase::Idle);
        outcome
    }
}

impl From<SubmitError> for SubmitOutcome {
    fn from(e: SubmitError) -> Self {
        SubmitOutcome::Failed(e)
    }
}
