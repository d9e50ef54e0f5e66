//! Consultation booking form.
//!
//! Two flows share one set of fields: scheduling a specific slot, or asking
//! for a call back. Name and a contact method are always required; date,
//! time and consultation type only when scheduling.

use std::fmt;

use serde::Serialize;

use super::{FormModel, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    #[default]
    Schedule,
    Callback,
}

impl BookingMode {
    pub const ALL: [BookingMode; 2] = [BookingMode::Schedule, BookingMode::Callback];

    pub fn key(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Callback => "callback",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Schedule => "Schedule",
            Self::Callback => "Request call",
        }
    }

    pub fn submit_label(self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (Self::Schedule, false) => "Request free consultation",
            (Self::Schedule, true) => "Submitting...",
            (Self::Callback, false) => "Request a call back",
            (Self::Callback, true) => "Requesting...",
        }
    }
}

impl fmt::Display for BookingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    AgentLicense,
    Date,
    Time,
    Service,
    Notes,
}

/// Raw field values; blank means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub agent_license: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub notes: String,
}

impl BookingFormState {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::AgentLicense => &self.agent_license,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Service => &self.service,
            BookingField::Notes => &self.notes,
        }
    }

    fn slot(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::AgentLicense => &mut self.agent_license,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Service => &mut self.service,
            BookingField::Notes => &mut self.notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// What the endpoint receives for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub mode: BookingMode,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn provided(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    mode: BookingMode,
    state: BookingFormState,
}

impl BookingForm {
    pub fn new(mode: BookingMode) -> Self {
        Self {
            mode,
            state: BookingFormState::default(),
        }
    }

    pub fn mode(&self) -> BookingMode {
        self.mode
    }

    /// Switch flows. Field values are shared between modes and kept.
    pub fn set_mode(&mut self, mode: BookingMode) {
        self.mode = mode;
    }

    pub fn state(&self) -> &BookingFormState {
        &self.state
    }

    pub fn field(&self, field: BookingField) -> &str {
        self.state.get(field)
    }

    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        *self.state.slot(field) = value.into();
    }
}

impl FormModel for BookingForm {
    type Request = BookingRequest;

    fn validate(&self) -> Result<(), ValidationError> {
        let s = &self.state;
        if blank(&s.name) {
            return Err(ValidationError::NameRequired);
        }
        if blank(&s.email) && blank(&s.phone) {
            return Err(ValidationError::ContactMethodRequired);
        }
        if self.mode == BookingMode::Schedule {
            if blank(&s.date) {
                return Err(ValidationError::DateRequired);
            }
            if blank(&s.time) {
                return Err(ValidationError::TimeRequired);
            }
            if blank(&s.service) {
                return Err(ValidationError::ServiceRequired);
            }
        }
        Ok(())
    }

    fn request(&self) -> BookingRequest {
        let s = &self.state;
        // Callback requests only collect name, phone and notes on screen,
        // but anything typed before switching tabs still goes along.
        BookingRequest {
            mode: self.mode,
            name: s.name.trim().to_string(),
            email: provided(&s.email),
            phone: provided(&s.phone),
            agent_license: provided(&s.agent_license),
            date: provided(&s.date),
            time: provided(&s.time),
            service: provided(&s.service),
            notes: provided(&s.notes),
        }
    }

    fn success_message(&self) -> &'static str {
        match self.mode {
            BookingMode::Schedule => {
                "Thanks! Your consultation request has been received. We'll confirm shortly."
            }
            BookingMode::Callback => {
                "Thanks! We'll call you back to coordinate your free consultation."
            }
        }
    }

    fn clear(&mut self) {
        self.state = BookingFormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::notify::NoticeLog;
    use pretty_assertions::assert_eq;

    fn filled(mode: BookingMode) -> BookingForm {
        let mut form = BookingForm::new(mode);
        form.set_field(BookingField::Name, "Alex Agent");
        form.set_field(BookingField::Phone, "0447 856 645");
        form
    }

    #[test]
    fn empty_form_needs_name() {
        let form = BookingForm::default();
        assert_eq!(form.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn whitespace_name_is_blank() {
        let mut form = BookingForm::default();
        form.set_field(BookingField::Name, "   ");
        form.set_field(BookingField::Email, "alex@example.com");
        assert_eq!(form.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn name_without_contact_method() {
        let mut form = BookingForm::new(BookingMode::Callback);
        form.set_field(BookingField::Name, "Alex Agent");
        assert_eq!(form.validate(), Err(ValidationError::ContactMethodRequired));
    }

    #[test]
    fn email_alone_is_a_contact_method() {
        let mut form = BookingForm::new(BookingMode::Callback);
        form.set_field(BookingField::Name, "Alex Agent");
        form.set_field(BookingField::Email, "alex@example.com");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn schedule_mode_checks_date_time_service_in_order() {
        let mut form = filled(BookingMode::Schedule);
        assert_eq!(form.validate(), Err(ValidationError::DateRequired));

        form.set_field(BookingField::Date, "2026-11-02");
        assert_eq!(form.validate(), Err(ValidationError::TimeRequired));

        form.set_field(BookingField::Time, "10:30");
        assert_eq!(form.validate(), Err(ValidationError::ServiceRequired));

        form.set_field(BookingField::Service, "in-home");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn time_checked_before_service() {
        let mut form = filled(BookingMode::Schedule);
        form.set_field(BookingField::Date, "2026-11-02");
        form.set_field(BookingField::Service, "virtual");
        assert_eq!(form.validate(), Err(ValidationError::TimeRequired));
    }

    #[test]
    fn callback_mode_skips_schedule_fields() {
        let form = filled(BookingMode::Callback);
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn switching_mode_keeps_fields() {
        let mut form = filled(BookingMode::Callback);
        form.set_mode(BookingMode::Schedule);
        assert_eq!(form.mode(), BookingMode::Schedule);
        assert_eq!(form.field(BookingField::Name), "Alex Agent");
        assert_eq!(form.validate(), Err(ValidationError::DateRequired));
    }

    #[test]
    fn set_field_overwrites() {
        let mut form = BookingForm::default();
        form.set_field(BookingField::Notes, "3 bed / 2 bath");
        form.set_field(BookingField::Notes, "");
        assert_eq!(form.field(BookingField::Notes), "");
        assert!(form.state().is_empty());
    }

    #[test]
    fn request_trims_and_drops_blanks() {
        let mut form = filled(BookingMode::Callback);
        form.set_field(BookingField::Notes, "  Call after 3pm ");
        form.set_field(BookingField::Email, " ");

        assert_eq!(
            form.request(),
            BookingRequest {
                mode: BookingMode::Callback,
                name: "Alex Agent".into(),
                email: None,
                phone: Some("0447 856 645".into()),
                agent_license: None,
                date: None,
                time: None,
                service: None,
                notes: Some("Call after 3pm".into()),
            }
        );
    }

    #[test]
    fn request_serializes_for_a_backend() {
        let mut form = filled(BookingMode::Schedule);
        form.set_field(BookingField::Date, "2026-11-02");
        form.set_field(BookingField::Time, "09:00");
        form.set_field(BookingField::Service, "vacant");

        let json = serde_json::to_value(form.request()).unwrap();
        assert_eq!(json["mode"], "schedule");
        assert_eq!(json["time"], "09:00");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn clear_keeps_mode() {
        let mut form = filled(BookingMode::Callback);
        form.clear();
        assert!(form.state().is_empty());
        assert_eq!(form.mode(), BookingMode::Callback);
    }

    #[test]
    fn success_message_depends_on_mode() {
        assert!(
            BookingForm::new(BookingMode::Schedule)
                .success_message()
                .contains("consultation request has been received")
        );
        assert!(
            BookingForm::new(BookingMode::Callback)
                .success_message()
                .contains("call you back")
        );
    }

    #[test]
    fn success_message_follows_the_mode_that_was_sent() {
        let log = NoticeLog::new();
        let mut form = FormController::new(filled(BookingMode::Callback));

        let request = form.begin_submit(&log).unwrap();
        form.model_mut().set_mode(BookingMode::Schedule);
        form.finish_submit(Ok(()), &log).unwrap();

        assert_eq!(request.mode, BookingMode::Callback);
        assert_eq!(
            log.last().map(|n| n.message),
            Some("Thanks! We'll call you back to coordinate your free consultation.".to_string())
        );
        assert_eq!(form.model().mode(), BookingMode::Schedule);
    }

    #[test]
    fn mode_keys_round_trip() {
        for mode in BookingMode::ALL {
            assert_eq!(BookingMode::from_key(mode.key()), Some(mode));
        }
        assert_eq!(BookingMode::from_key("walk-in"), None);
        assert_eq!(BookingMode::Callback.submit_label(true), "Requesting...");
    }
}
