//! Contact form state.
//!
//! The form is client-only: a valid submission produces exactly one
//! acknowledgment and clears the draft. Nothing leaves the process and
//! nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// In-memory draft of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Receipt for a submitted draft. Carries the acknowledgment copy and
/// nothing else - the submitted data is already gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub headline: &'static str,
    pub detail: &'static str,
}

impl ContactDraft {
    /// True when the draft would pass validation as-is.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> SiteResult<()> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::EmptyField(label));
            }
        }
        // Same bar as the browser's built-in email input: a user part and a
        // host part around a single '@' is enough.
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, host)) if !user.is_empty() && !host.is_empty() => Ok(()),
            _ => Err(SiteError::InvalidEmail(email.to_string())),
        }
    }

    /// Validate, acknowledge, and clear the draft.
    ///
    /// On error the draft is left untouched so the user can fix the field.
    pub fn submit(&mut self) -> SiteResult<Acknowledgment> {
        self.validate()?;
        tracing::info!(subject = %self.subject.trim(), "contact form submitted");
        *self = Self::default();
        Ok(Acknowledgment {
            headline: "Transmission received",
            detail: "Thank you for contacting us! We will get back to you soon.",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Cloud migration".into(),
            message: "We need help moving a legacy stack.".into(),
        }
    }

    #[test]
    fn test_submit_resets_every_field() {
        let mut draft = filled();
        let ack = draft.submit().unwrap();
        assert_eq!(draft, ContactDraft::default());
        assert_eq!(ack.headline, "Transmission received");
    }

    #[test]
    fn test_second_submit_fails_on_cleared_draft() {
        let mut draft = filled();
        draft.submit().unwrap();
        assert!(matches!(draft.submit(), Err(SiteError::EmptyField("name"))));
    }

    #[test]
    fn test_missing_field_names_first_gap() {
        let mut draft = filled();
        draft.subject = "   ".into();
        let before = draft.clone();
        match draft.submit() {
            Err(SiteError::EmptyField(field)) => assert_eq!(field, "subject"),
            other => panic!("expected EmptyField, got {:?}", other),
        }
        // Failed submissions leave the draft untouched.
        assert_eq!(draft, before);
    }

    #[test]
    fn test_email_needs_user_and_host() {
        for bad in ["plainaddress", "@nohost.com", "nouser@"] {
            let mut draft = filled();
            draft.email = bad.into();
            assert!(matches!(draft.submit(), Err(SiteError::InvalidEmail(_))));
        }
    }

    #[test]
    fn test_is_complete_matches_submit() {
        let mut draft = filled();
        assert!(draft.is_complete());
        draft.message.clear();
        assert!(!draft.is_complete());
    }
}
