//! Sign-in page: email, password and a "check me out" box.
//!
//! Field ids, labels and Bootstrap classes are kept stable so existing
//! stylesheets and browser tests keep matching.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::state::sign_in::{FieldChange, FormState};
use crate::util::submission::{SinkHandle, submit};

pub const EMAIL_INPUT_ID: &str = "exampleInputEmail1";
pub const EMAIL_HELP_ID: &str = "emailHelp";
pub const PASSWORD_INPUT_ID: &str = "exampleInputPassword1";
pub const CHECKBOX_ID: &str = "exampleCheck1";

pub const EMAIL_LABEL: &str = "Email address";
pub const EMAIL_HELP_TEXT: &str = "We'll never share your email with anyone else.";
pub const PASSWORD_LABEL: &str = "Password";
pub const CHECKBOX_LABEL: &str = "Check me out";
pub const SUBMIT_LABEL: &str = "Submit";

/// Sign-in form. State lives only while the page is mounted.
#[component]
pub fn SignInPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let sink = use_context::<SinkHandle>().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|state| {
            submit(state, sink.sink());
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="form-group">
                <label for=EMAIL_INPUT_ID>{EMAIL_LABEL}</label>
                <input
                    type="email"
                    class="form-control"
                    id=EMAIL_INPUT_ID
                    aria-describedby=EMAIL_HELP_ID
                    prop:value=move || form.with(|state| state.email.clone())
                    on:input=move |ev| form.update(|state| state.apply(FieldChange::Email(event_target_value(&ev))))
                />
                <small id=EMAIL_HELP_ID class="form-text text-muted">
                    {EMAIL_HELP_TEXT}
                </small>
            </div>

            <div class="form-group">
                <label for=PASSWORD_INPUT_ID>{PASSWORD_LABEL}</label>
                <input
                    type="password"
                    class="form-control"
                    id=PASSWORD_INPUT_ID
                    prop:value=move || form.with(|state| state.password.clone())
                    on:input=move |ev| form.update(|state| state.apply(FieldChange::Password(event_target_value(&ev))))
                />
            </div>

            <div class="form-group form-check">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id=CHECKBOX_ID
                    prop:checked=move || form.with(|state| state.checked)
                    on:change=move |ev| form.update(|state| state.apply(FieldChange::Checked(event_target_checked(&ev))))
                />
                <label class="form-check-label" for=CHECKBOX_ID>
                    {CHECKBOX_LABEL}
                </label>
            </div>

            <button type="submit" class="btn btn-primary">
                {SUBMIT_LABEL}
            </button>
        </form>
    }
}
