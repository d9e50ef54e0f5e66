//! Form state, validation and submission.
//!
//! A [`FormModel`] owns the field values and knows how to validate them.
//! [`FormController`] wraps a model with the `submitting` flag and drives a
//! submission through an [`Endpoint`], reporting outcomes to a [`Notifier`].
//!
//! Submission is split in two halves so a UI can observe the in-flight
//! state between them:
//!
//! ```text
//! begin_submit ──► (submitting = true) ──► endpoint.submit(..).await ──► finish_submit
//!      │                                                                   │
//!      └─ invalid: notify_error, fields kept          ok: clear + notify_success
//!                                                     err: notify_error, fields kept
//! ```
//!
//! [`FormController::submit`] runs both halves for callers that just await.

mod booking;
mod contact;

pub use booking::{BookingField, BookingForm, BookingFormState, BookingMode, BookingRequest};
pub use contact::{ContactField, ContactForm, ContactFormState, ContactRequest};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::notify::Notifier;
use crate::submit::{Endpoint, SubmitError};

/// Shown when the endpoint fails; the entered values stay in place.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A user-input problem. `Display` is the message shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    NameRequired,
    #[error("Please provide at least an email or phone number.")]
    ContactMethodRequired,
    #[error("Please select a preferred date.")]
    DateRequired,
    #[error("Please select a preferred time slot.")]
    TimeRequired,
    #[error("Please choose a consultation type.")]
    ServiceRequired,
    #[error("Please fill in your name, email, and message.")]
    ContactDetailsRequired,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Field values plus the rules for validating and clearing them.
pub trait FormModel {
    /// Owned snapshot handed to the endpoint.
    type Request;

    /// First failing rule, or `Ok` when the form can be submitted.
    fn validate(&self) -> Result<(), ValidationError>;

    fn request(&self) -> Self::Request;

    /// Notification text after a successful submission.
    fn success_message(&self) -> &'static str;

    /// Back to the empty state. Non-field settings (like a mode) survive.
    fn clear(&mut self);
}

/// A form model plus its submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController<M> {
    model: M,
    /// Success text of the request in flight, fixed when it was sent.
    in_flight: Option<&'static str>,
}

impl<M: FormModel> FormController<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            in_flight: None,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.model.validate()
    }

    /// Validate and enter the submitting state.
    ///
    /// Returns the request to send. A second call while a submission is in
    /// flight is refused silently with [`FormError::InFlight`].
    pub fn begin_submit(&mut self, notifier: &impl Notifier) -> Result<M::Request, FormError> {
        if self.is_submitting() {
            debug!("submit ignored, already in flight");
            return Err(FormError::InFlight);
        }
        if let Err(e) = self.model.validate() {
            warn!(reason = %e, "form rejected");
            notifier.notify_error(&e.to_string());
            return Err(e.into());
        }
        self.in_flight = Some(self.model.success_message());
        info!("form submitting");
        Ok(self.model.request())
    }

    /// Leave the submitting state with the endpoint's outcome.
    ///
    /// The success message is the one for the request that was sent, even
    /// if the model changed (e.g. its mode) while it was in flight. Without
    /// a submission in flight this does nothing.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), SubmitError>,
        notifier: &impl Notifier,
    ) -> Result<(), FormError> {
        let Some(message) = self.in_flight.take() else {
            debug!("finish ignored, nothing in flight");
            return Ok(());
        };
        match outcome {
            Ok(()) => {
                self.model.clear();
                info!("form submitted");
                notifier.notify_success(message);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "form submission failed");
                notifier.notify_error(FAILURE_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Validate, send and settle in one call.
    pub async fn submit<E>(&mut self, endpoint: &E, notifier: &impl Notifier) -> Result<(), FormError>
    where
        E: Endpoint<M::Request>,
    {
        let request = self.begin_submit(notifier)?;
        let outcome = endpoint.submit(&request).await;
        self.finish_submit(outcome, notifier)
    }
}
