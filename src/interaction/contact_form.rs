use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `id`/`name` attribute used by the form control.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a message was already sent, waiting for the form to reset")]
    AlreadySubmitted,
}

/// Snapshot of what the visitor typed at the moment of a simulated send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field values and the "submitted" flag of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    submitted: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// First field (in form order) that is still empty. Same rule as the
    /// browser's `required`: whitespace counts as filled in.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Simulated send. Nothing leaves the page; on success the form flips to
    /// its "sent" state and the caller gets a copy of the message.
    pub fn submit(&mut self) -> Result<ContactMessage, ContactFormError> {
        if self.submitted {
            return Err(ContactFormError::AlreadySubmitted);
        }
        if let Some(field) = self.missing_field() {
            return Err(ContactFormError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }

        self.submitted = true;
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.clone(),
        })
    }

    /// Clears every field and returns to the unsubmitted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// Same coarse check a browser applies to `type="email"` inputs.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Wanjiku Kamau".to_string());
        form.set(Field::Email, "wanjiku@example.co.ke".to_string());
        form.set(Field::Subject, "Land transfer".to_string());
        form.set(Field::Message, "I would like advice on a title deed.".to_string());
        form
    }

    #[test]
    fn complete_form_submits_immediately() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        assert!(form.is_submitted());
        assert_eq!(sent.subject, "Land transfer");
        assert_eq!(sent.email, "wanjiku@example.co.ke");
    }

    #[test]
    fn reset_clears_fields_and_flag() {
        let mut form = filled();
        form.submit().unwrap();
        form.reset();
        assert!(!form.is_submitted());
        for field in Field::ALL {
            assert_eq!(form.value(field), "", "{field} not cleared");
        }
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.submit(), Err(ContactFormError::MissingField(field)));
            assert!(!form.is_submitted());
        }
    }

    #[test]
    fn whitespace_only_text_counts_as_filled() {
        for field in [Field::Name, Field::Subject, Field::Message] {
            let mut form = filled();
            form.set(field, "  ".to_string());
            assert!(form.submit().is_ok(), "{field} with spaces was rejected");
            assert!(form.is_submitted());
        }
    }

    #[test]
    fn timer_reset_after_send_restores_initial_form() {
        let mut form = filled();
        form.submit().unwrap();
        let mut next = form.clone();
        next.reset();
        assert_eq!(next, ContactForm::default());
        assert!(!next.is_submitted());
    }

    #[test]
    fn malformed_email_blocks_submission() {
        for email in ["no-at-sign", "@example.com", "someone@", "a b@example.com", "a@b@c"] {
            let mut form = filled();
            form.set(Field::Email, email.to_string());
            assert_eq!(form.submit(), Err(ContactFormError::InvalidEmail), "{email}");
            assert!(!form.is_submitted());
        }
    }

    #[test]
    fn second_submit_while_sent_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(ContactFormError::AlreadySubmitted));
        assert!(form.is_submitted());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ContactFormError::MissingField(Field::Email);
        assert_eq!(err.to_string(), "Email Address is required");
    }

    #[test]
    fn message_serializes_for_the_debug_log() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(json["name"], "Wanjiku Kamau");
        assert_eq!(json["message"], "I would like advice on a title deed.");
    }
}
