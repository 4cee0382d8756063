//! Sign-in form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `pages::sign_in::SignInPage` for as long as the page is mounted.
//! Every input event replaces exactly one field; submission reads the whole
//! state once as a [`Submission`] snapshot.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use serde::Serialize;

/// Current values of the three sign-in controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub checked: bool,
}

/// A single control update coming from the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldChange {
    Email(String),
    Password(String),
    Checked(bool),
}

/// Snapshot handed to a submission sink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub password: String,
    pub checked: bool,
}

impl FormState {
    /// Replace the field named by `change`, leaving the others untouched.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Email(value) => self.email = value,
            FieldChange::Password(value) => self.password = value,
            FieldChange::Checked(value) => self.checked = value,
        }
    }

    /// Copy the current values into a submission payload.
    #[must_use]
    pub fn snapshot(&self) -> Submission {
        Submission {
            email: self.email.clone(),
            password: self.password.clone(),
            checked: self.checked,
        }
    }
}
