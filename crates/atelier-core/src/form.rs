//! Contact form validation.
//!
//! Client-side gate in front of a simulated submission: required checks
//! on all three fields, a simple shape check on the email, inline
//! per-field messages, and blur-time clearing that only looks at
//! presence, never format.

use std::time::Duration;

/// How long the success banner stays visible after a valid submission
pub const SUCCESS_VISIBLE: Duration = Duration::from_secs(5);

/// The three contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Current text of the contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field error messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Email => self.email = None,
            FormField::Message => self.message = None,
        }
    }
}

impl ContactForm {
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Validate all fields.
    ///
    /// Requiredness wins over format: a blank email reports "enter your
    /// email", not "valid email". On failure every failing field carries
    /// a message; the form content itself is left untouched.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Please enter your name".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Please enter your email".to_string());
        } else if !email_is_valid(&self.email) {
            errors.email = Some("Please enter a valid email".to_string());
        }

        if self.message.trim().is_empty() {
            errors.message = Some("Please enter a message".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(failing = errors.count(), "contact form rejected");
            Err(errors)
        }
    }

    /// Reset all fields to empty, as after a successful submission
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Submission generations for the success banner's hide timer.
///
/// Every accepted submission schedules a hide after [`SUCCESS_VISIBLE`].
/// With two quick submissions the first timer would hide the second
/// banner early; each timer therefore remembers the generation it was
/// scheduled for and only the current generation's timer may hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionCounter {
    current: u64,
}

impl SubmissionCounter {
    /// Record an accepted submission; returns its generation
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a hide timer scheduled at `generation` may still fire
    pub fn should_hide(&self, generation: u64) -> bool {
        self.current == generation
    }
}

/// Shape check: one-plus chars, `@`, one-plus chars, `.`, one-plus chars,
/// where no char is whitespace or a second `@`.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| !c.is_whitespace() && c != '@')
    };
    if !clean(local) || !clean(domain) {
        return false;
    }
    // The dot must have at least one char on each side
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Blur behavior: a field whose trimmed value is non-blank drops its
/// error highlight and message. Presence only; format is not re-checked.
pub fn clear_on_blur(errors: &mut FieldErrors, field: FormField, value: &str) {
    if !value.trim().is_empty() {
        errors.clear(field);
    }
}
