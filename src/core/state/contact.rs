use std::time::Duration;

use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

/// How long the simulated relay takes to "send" a message, in milliseconds
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    None,
    Success,
    /// The relay reported an error. Field values are kept for a retry.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("the {} field is required", .0.name())]
    MissingField(ContactField),
    #[error("a submission is already in progress")]
    InProgress,
}

/// A snapshot of the form taken when the visitor presses submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form state owned by a single view instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    is_submitting: bool,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.data.get_mut(field) = value;
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Start a submission: every field must be filled in. Disables the submit
    /// control until [`ContactForm::finish_submit`] runs.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::InProgress);
        }
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.data.get(*field).is_empty())
        {
            return Err(SubmitError::MissingField(field));
        }

        self.is_submitting = true;
        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            submitted_at: OffsetDateTime::now_utc(),
            name: self.data.name.clone(),
            email: self.data.email.clone(),
            message: self.data.message.clone(),
        })
    }

    /// Record the relay outcome and re-enable the submit control.
    pub fn finish_submit(&mut self, outcome: anyhow::Result<()>) {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.data = FormData::default();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "contact relay failed");
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }
}

/// Delivers a contact submission somewhere. Real delivery (a form service or
/// an email relay) plugs in here.
pub trait ContactRelay {
    fn deliver(&self, submission: ContactSubmission) -> impl Future<Output = anyhow::Result<()>>;
}

/// Pretends to send the message: waits for a fixed delay, logs, succeeds.
/// The wait cannot be cancelled once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedRelay {
    delay: Duration,
}

impl Default for SimulatedRelay {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SimulatedRelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl ContactRelay for SimulatedRelay {
    fn deliver(&self, submission: ContactSubmission) -> impl Future<Output = anyhow::Result<()>> {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            info!(
                submission = %submission.id,
                name = %submission.name,
                email = %submission.email,
                message_len = submission.message.len(),
                "contact form submitted"
            );
            Ok(())
        }
    }
}
