//! Contact form endpoint.
//!
//! One route, GET renders the form and POST accepts a submission with four
//! fields (name, email, content, number).  All four validations run and
//! their messages accumulate; any failure blocks the write, and only a fully
//! valid submission is persisted.

use crate::error::ApiError;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Contact record persistence
pub mod store;

pub use store::{Contact, ContactStore, PgContactStore};

const SUCCESS_MESSAGE: &str = "Thank you for contacting me, your message has been sent";

const CONTACT_TEMPLATE: &str = r#"<!doctype html>
<html>
  <body>
    <form method="post">
      <input name="name" placeholder="Name">
      <input name="email" placeholder="Email">
      <textarea name="content" placeholder="Message"></textarea>
      <input name="number" placeholder="Phone number">
      <button type="submit">Send</button>
    </form>
  </body>
</html>
"#;

/// An incoming contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name, 2 to 30 characters
    pub name: String,
    /// Sender email address, 2 to 30 characters
    pub email: String,
    /// Message body, 3 to 400 characters
    pub content: String,
    /// Sender phone number, 2 to 13 characters
    pub number: String,
}

/// Runs all four field validations and returns every failure message.
///
/// Bounds are inclusive character counts.
pub fn validate(form: &ContactForm) -> Vec<String> {
    let mut errors = Vec::new();
    if !(2..=30).contains(&form.name.chars().count()) {
        errors.push("Name should be between 2 and 30 characters".to_string());
    }
    if !(2..=30).contains(&form.email.chars().count()) {
        errors.push("Invalid email try again".to_string());
    }
    if !(3..=400).contains(&form.content.chars().count()) {
        errors.push("Content should be between 3 and 400 characters".to_string());
    }
    if !(2..=13).contains(&form.number.chars().count()) {
        errors.push("Invalid number".to_string());
    }
    errors
}

/// Shared state for the contact routes
#[derive(Clone)]
pub struct ContactState {
    /// Store used to persist valid submissions
    pub store: Arc<dyn ContactStore>,
}

/// Builds the contact router over the given store
pub fn router(store: Arc<dyn ContactStore>) -> Router {
    Router::new()
        .route("/contact", get(show_form).post(submit))
        .with_state(ContactState { store })
}

async fn show_form() -> Html<&'static str> {
    Html(CONTACT_TEMPLATE)
}

/// Accepts a submission.  Invalid fields produce a 422 carrying every
/// validation message and nothing is written; a valid submission is
/// persisted and answered with the success message.
async fn submit(
    State(state): State<ContactState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, ApiError> {
    let errors = validate(&form);
    if !errors.is_empty() {
        warn!("rejected contact submission: {}", errors.join("; "));
        return Err(ApiError::Validation(errors));
    }
    let id = state.store.insert(&form).await?;
    info!("stored contact message {}", id);
    Ok(Html(format!("<p>{SUCCESS_MESSAGE}</p>")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            content: "Hi there".to_string(),
            number: "12345".to_string(),
        }
    }

    #[test]
    fn valid_submission_passes_all_checks() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let form = ContactForm {
            name: String::new(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors, vec!["Name should be between 2 and 30 characters"]);
    }

    #[test]
    fn all_failures_accumulate() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "x".to_string(),
            content: "hi".to_string(),
            number: "1".to_string(),
        };
        assert_eq!(validate(&form).len(), 4);
    }

    #[test]
    fn bounds_are_inclusive() {
        let form = ContactForm {
            name: "a".repeat(30),
            email: format!("{}@b.io", "a".repeat(25)),
            content: "a".repeat(400),
            number: "1".repeat(13),
        };
        assert!(validate(&form).is_empty());

        let too_long = ContactForm {
            name: "a".repeat(31),
            ..form
        };
        assert_eq!(validate(&too_long).len(), 1);
    }
}
