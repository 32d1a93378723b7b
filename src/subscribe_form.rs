use crate::domain::{FormField, FormState, SubscriptionRequest, SubscriptionResult};
use crate::mailing_list_client::{ListSubscriber, SubscribeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Displaying,
}

/// A submission that has been sent but not yet resolved.
#[derive(Debug)]
pub struct Submission {
    pub sequence: u64,
    pub request: SubscriptionRequest,
}

/// Drives the subscription form: collects input, submits it, keeps the outcome.
///
/// Overlapping submissions are allowed. Whichever resolves last decides what
/// is shown, regardless of the order they were started in.
#[derive(Debug)]
pub struct SubscribeForm {
    state: FormState,
    status: FormStatus,
    error: Option<String>,
    source_path: Option<String>,
    in_flight: usize,
    next_sequence: u64,
}

impl Default for SubscribeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            status: FormStatus::Idle,
            error: None,
            source_path: None,
            in_flight: 0,
            next_sequence: 0,
        }
    }

    /// Tag every submission with the page the form is embedded in.
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn on_input_change(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set(field, value.into());
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn result(&self) -> Option<&SubscriptionResult> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_submit(&mut self) -> Submission {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.in_flight += 1;
        self.status = FormStatus::Submitting;
        Submission {
            sequence,
            request: SubscriptionRequest::from_form(&self.state, self.source_path.as_deref()),
        }
    }

    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<SubscriptionResult, SubscribeError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(result) => {
                tracing::info!(sequence = submission.sequence, "Subscription accepted");
                self.state.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(
                    sequence = submission.sequence,
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Subscription failed"
                );
                self.error = Some(e.user_message());
            }
        }
        self.status = if self.in_flight > 0 {
            FormStatus::Submitting
        } else if self.error.is_none() && self.state.result.is_some() {
            FormStatus::Displaying
        } else {
            FormStatus::Idle
        };
    }

    pub async fn submit<C>(&mut self, client: &C) -> FormStatus
    where
        C: ListSubscriber,
    {
        let submission = self.begin_submit();
        let outcome = client.subscribe(&submission.request).await;
        self.complete(submission, outcome);
        self.status
    }
}
