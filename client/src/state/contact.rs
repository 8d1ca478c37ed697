//! Contact form state machine.
//!
//! `Editing -> Submitting -> Sent` on success, `Submitting -> Editing` with
//! an error message on failure. The form fields survive a failed attempt so
//! the visitor can retry without retyping.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactMessage;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Sent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Validate and enter `Submitting`, returning the payload to send.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or a submission is
    /// already in flight. State is left unchanged in that case, except that a
    /// blank field sets `error`.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, &'static str> {
        if self.phase != SubmitPhase::Editing {
            return Err("Already sending.");
        }
        let payload = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
        .trimmed();
        if payload.first_missing_field().is_some() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_owned());
            return Err(MISSING_FIELDS_MESSAGE);
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        Ok(payload)
    }

    /// Settle an in-flight submission.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if self.phase != SubmitPhase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.error = None;
                self.phase = SubmitPhase::Sent;
            }
            Err(_) => {
                self.error = Some(SEND_FAILED_MESSAGE.to_owned());
                self.phase = SubmitPhase::Editing;
            }
        }
    }

    /// "Send Another Message": back to an empty editable form.
    pub fn reset(&mut self) {
        if self.phase == SubmitPhase::Sent {
            self.phase = SubmitPhase::Editing;
            self.error = None;
        }
    }
}
