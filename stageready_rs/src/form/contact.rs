//! General enquiry form on the contact page.

use serde::Serialize;

use super::{FormModel, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: ContactFormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form, e.g. with a service picked from a link.
    pub fn with_values(state: ContactFormState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.state.name,
            ContactField::Email => &self.state.email,
            ContactField::Phone => &self.state.phone,
            ContactField::Service => &self.state.service,
            ContactField::Message => &self.state.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.state.name,
            ContactField::Email => &mut self.state.email,
            ContactField::Phone => &mut self.state.phone,
            ContactField::Service => &mut self.state.service,
            ContactField::Message => &mut self.state.message,
        };
        *slot = value.into();
    }
}

impl FormModel for ContactForm {
    type Request = ContactRequest;

    fn validate(&self) -> Result<(), ValidationError> {
        let s = &self.state;
        if [&s.name, &s.email, &s.message]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(ValidationError::ContactDetailsRequired);
        }
        Ok(())
    }

    fn request(&self) -> ContactRequest {
        let s = &self.state;
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        ContactRequest {
            name: s.name.trim().to_string(),
            email: s.email.trim().to_string(),
            phone: optional(&s.phone),
            service: optional(&s.service),
            message: s.message.trim().to_string(),
        }
    }

    fn success_message(&self) -> &'static str {
        "Thank you! We'll be in touch shortly."
    }

    fn clear(&mut self) {
        self.state = ContactFormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jordan");
        form.set_field(ContactField::Email, "jordan@example.com");
        form.set_field(ContactField::Message, "Two-bed apartment listing next month.");
        form
    }

    #[test]
    fn requires_name_email_and_message() {
        assert_eq!(
            ContactForm::new().validate(),
            Err(ValidationError::ContactDetailsRequired)
        );

        let mut form = complete();
        form.set_field(ContactField::Message, "  ");
        assert_eq!(form.validate(), Err(ValidationError::ContactDetailsRequired));
    }

    #[test]
    fn phone_and_service_are_optional() {
        let form = complete();
        assert_eq!(form.validate(), Ok(()));
        let request = form.request();
        assert_eq!(request.phone, None);
        assert_eq!(request.service, None);
    }

    #[test]
    fn prefilled_values_are_kept_until_cleared() {
        let mut form = ContactForm::with_values(ContactFormState {
            service: "re-design".into(),
            ..Default::default()
        });
        assert_eq!(form.field(ContactField::Service), "re-design");
        form.clear();
        assert_eq!(form.state(), &ContactFormState::default());
    }
}
