//! Contact form model and the email-delivery request it produces.
//!
//! Delivery goes through a third-party transactional email API that takes a
//! service id, a template id, a public key and the template parameters as
//! JSON. Sending is up to the platform layer; this module validates and
//! shapes the request and classifies the outcome.

use serde::{Deserialize, Serialize};

/// Form fields as typed by the visitor. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub date: String,
    pub location: String,
    pub guests: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingField { field: &'static str },
    InvalidEmail { email: String },
    InvalidGuestCount { value: String },
    /// The request never got an HTTP response.
    Transport { reason: String },
    /// The API answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingField { field } => write!(f, "required field '{field}' is empty"),
            ContactError::InvalidEmail { email } => write!(f, "'{email}' is not an email address"),
            ContactError::InvalidGuestCount { value } => {
                write!(f, "guest count '{value}' is not a positive number")
            }
            ContactError::Transport { reason } => write!(f, "email request failed: {reason}"),
            ContactError::Rejected { status, body } => {
                write!(f, "email service rejected the request ({status}): {body}")
            }
        }
    }
}

impl std::error::Error for ContactError {}

impl ContactError {
    /// Validation problems are the visitor's to fix; everything else gets
    /// the generic "try again or call us" message.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingField { .. }
                | ContactError::InvalidEmail { .. }
                | ContactError::InvalidGuestCount { .. }
        )
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.chars().any(char::is_whitespace)
}

impl ContactRequest {
    /// Trims every field.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            event_type: self.event_type.trim().to_string(),
            date: self.date.trim().to_string(),
            location: self.location.trim().to_string(),
            guests: self.guests.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let request = self.normalized();
        if request.name.is_empty() {
            return Err(ContactError::MissingField { field: "name" });
        }
        if request.email.is_empty() {
            return Err(ContactError::MissingField { field: "email" });
        }
        if !looks_like_email(&request.email) {
            return Err(ContactError::InvalidEmail {
                email: request.email,
            });
        }
        if !request.guests.is_empty() {
            match request.guests.parse::<u32>() {
                Ok(count) if count > 0 => {}
                _ => {
                    return Err(ContactError::InvalidGuestCount {
                        value: request.guests,
                    })
                }
            }
        }
        Ok(())
    }
}

/// Credentials and endpoint of the email service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailSettings {
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Request body for the email API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: ContactRequest,
}

impl<'a> EmailRequest<'a> {
    /// Validates `request` and wraps it for `settings`.
    pub fn new(settings: &'a EmailSettings, request: &ContactRequest) -> Result<Self, ContactError> {
        request.validate()?;
        Ok(Self {
            service_id: &settings.service_id,
            template_id: &settings.template_id,
            user_id: &settings.public_key,
            template_params: request.normalized(),
        })
    }

    pub fn to_json(&self) -> String {
        // Plain strings only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Classifies the HTTP response of a send.
pub fn outcome(status: u16, body: &str) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Rejected {
            status,
            body: body.to_string(),
        })
    }
}

/// Banner texts shown while and after submitting, in the site's language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactMessages {
    pub sending: String,
    pub success: String,
    pub failure: String,
    pub missing_name: String,
    pub missing_email: String,
    pub invalid_email: String,
    pub invalid_guests: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            sending: "Šaljemo...".to_string(),
            success: "Hvala! Vaš upit je poslan, javit ćemo vam se uskoro.".to_string(),
            failure: "Nešto je pošlo po zlu. Pokušajte ponovno ili nas kontaktirajte telefonom ili e-mailom."
                .to_string(),
            missing_name: "Molimo upišite svoje ime.".to_string(),
            missing_email: "Molimo upišite svoju e-mail adresu.".to_string(),
            invalid_email: "E-mail adresa nije ispravna.".to_string(),
            invalid_guests: "Broj gostiju mora biti pozitivan broj.".to_string(),
        }
    }
}

impl ContactMessages {
    /// Text for a failed submission. Service failures all share `failure`.
    pub fn for_error(&self, error: &ContactError) -> &str {
        match error {
            ContactError::MissingField { field: "name" } => &self.missing_name,
            ContactError::MissingField { .. } => &self.missing_email,
            ContactError::InvalidEmail { .. } => &self.invalid_email,
            ContactError::InvalidGuestCount { .. } => &self.invalid_guests,
            ContactError::Transport { .. } | ContactError::Rejected { .. } => &self.failure,
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
