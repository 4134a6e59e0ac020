//! Simulated form submissions.
//!
//! Forms are validated and acknowledged; nothing is stored or sent, and no
//! payment is taken. A valid submission yields the confirmation message key.

use crate::i18n::TranslationKey;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Preset donation amounts shown on the donate page.
pub const PRESET_AMOUNTS: [u32; 4] = [10, 25, 50, 100];

/// Upper bound for a custom donation amount.
pub const MAX_DONATION: u32 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Invalid donation amount: '{0}'")]
    InvalidAmount(String),

    #[error("Unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// A form that can be validated and acknowledged.
pub trait Submission {
    fn validate(&self) -> Result<(), FormError>;

    /// Confirmation shown after a valid submission.
    fn success_key(&self) -> TranslationKey;
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), FormError> {
    require("email", value)?;
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex pattern is valid")
    });
    if !regex.is_match(value.trim()) {
        return Err(FormError::InvalidEmail(value.trim().to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission for ContactForm {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("message", &self.message)
    }

    fn success_key(&self) -> TranslationKey {
        TranslationKey::ContactSuccess
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub availability: String,
}

impl Submission for VolunteerForm {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("interest", &self.interest)
    }

    fn success_key(&self) -> TranslationKey {
        TranslationKey::InvolvedSuccess
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

impl Submission for NewsletterForm {
    fn validate(&self) -> Result<(), FormError> {
        require_email(&self.email)
    }

    fn success_key(&self) -> TranslationKey {
        TranslationKey::NewsletterSuccess
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    OneTime,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 2] = [Frequency::OneTime, Frequency::Monthly];

    pub fn value(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one_time",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn label_key(&self) -> TranslationKey {
        match self {
            Frequency::OneTime => TranslationKey::DonateFrequencyOneTime,
            Frequency::Monthly => TranslationKey::DonateFrequencyMonthly,
        }
    }

    fn parse(value: &str) -> Result<Frequency, FormError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.value() == value)
            .ok_or_else(|| FormError::UnknownOption {
                field: "frequency",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Bankily,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Bankily,
        PaymentMethod::BankTransfer,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Bankily => "bankily",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn label_key(&self) -> TranslationKey {
        match self {
            PaymentMethod::Card => TranslationKey::DonateMethodCard,
            PaymentMethod::Bankily => TranslationKey::DonateMethodBankily,
            PaymentMethod::BankTransfer => TranslationKey::DonateMethodBankTransfer,
        }
    }

    fn parse(value: &str) -> Result<PaymentMethod, FormError> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.value() == value)
            .ok_or_else(|| FormError::UnknownOption {
                field: "method",
                value: value.to_string(),
            })
    }
}

/// Raw donation form. `amount` is a preset value or `custom`, in which case
/// `custom_amount` holds the figure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DonationForm {
    pub amount: String,
    pub custom_amount: String,
    pub frequency: String,
    pub method: String,
}

/// A validated donation choice. This is a UI selection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationSelection {
    pub amount: u32,
    pub frequency: Frequency,
    pub method: PaymentMethod,
}

impl DonationForm {
    pub fn selection(&self) -> Result<DonationSelection, FormError> {
        require("amount", &self.amount)?;
        let raw_amount = if self.amount == "custom" {
            require("custom_amount", &self.custom_amount)?;
            self.custom_amount.trim()
        } else {
            self.amount.trim()
        };

        let amount = raw_amount
            .parse::<u32>()
            .ok()
            .filter(|amount| *amount > 0 && *amount <= MAX_DONATION)
            .ok_or_else(|| FormError::InvalidAmount(raw_amount.to_string()))?;

        if self.amount != "custom" && !PRESET_AMOUNTS.contains(&amount) {
            return Err(FormError::InvalidAmount(raw_amount.to_string()));
        }

        require("frequency", &self.frequency)?;
        require("method", &self.method)?;

        Ok(DonationSelection {
            amount,
            frequency: Frequency::parse(self.frequency.trim())?,
            method: PaymentMethod::parse(self.method.trim())?,
        })
    }
}

impl Submission for DonationForm {
    fn validate(&self) -> Result<(), FormError> {
        self.selection().map(|_| ())
    }

    fn success_key(&self) -> TranslationKey {
        TranslationKey::DonateSuccess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(amount: &str, custom: &str) -> DonationForm {
        DonationForm {
            amount: amount.to_string(),
            custom_amount: custom.to_string(),
            frequency: "monthly".to_string(),
            method: "bankily".to_string(),
        }
    }

    // ==================== Contact Tests ====================

    #[test]
    fn test_contact_valid() {
        let form = ContactForm {
            name: "Aminetou".to_string(),
            email: "aminetou@example.org".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.success_key(), TranslationKey::ContactSuccess);
    }

    #[test]
    fn test_contact_missing_name() {
        let form = ContactForm {
            email: "a@example.org".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));
    }

    #[test]
    fn test_contact_invalid_email() {
        let form = ContactForm {
            name: "Sidi".to_string(),
            email: "not-an-email".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail("not-an-email".to_string()))
        );
    }

    // ==================== Volunteer/Newsletter Tests ====================

    #[test]
    fn test_volunteer_requires_interest() {
        let form = VolunteerForm {
            name: "Khadija".to_string(),
            email: "k@example.org".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("interest")));
    }

    #[test]
    fn test_newsletter() {
        let empty = NewsletterForm::default();
        assert_eq!(empty.validate(), Err(FormError::MissingField("email")));

        let form = NewsletterForm {
            email: " reader@example.org ".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.success_key(), TranslationKey::NewsletterSuccess);
    }

    // ==================== Donation Tests ====================

    #[test]
    fn test_donation_preset() {
        let selection = donation("25", "").selection().unwrap();
        assert_eq!(
            selection,
            DonationSelection {
                amount: 25,
                frequency: Frequency::Monthly,
                method: PaymentMethod::Bankily,
            }
        );
    }

    #[test]
    fn test_donation_unlisted_preset_rejected() {
        assert_eq!(
            donation("30", "").selection(),
            Err(FormError::InvalidAmount("30".to_string()))
        );
    }

    #[test]
    fn test_donation_custom_amount() {
        assert_eq!(donation("custom", "75").selection().unwrap().amount, 75);
    }

    #[test]
    fn test_donation_custom_amount_invalid() {
        assert_eq!(
            donation("custom", "-5").selection(),
            Err(FormError::InvalidAmount("-5".to_string()))
        );
        assert_eq!(
            donation("custom", "0").selection(),
            Err(FormError::InvalidAmount("0".to_string()))
        );
        assert_eq!(
            donation("custom", "").selection(),
            Err(FormError::MissingField("custom_amount"))
        );
    }

    #[test]
    fn test_donation_unknown_method() {
        let mut form = donation("10", "");
        form.method = "crypto".to_string();
        assert_eq!(
            form.validate(),
            Err(FormError::UnknownOption {
                field: "method",
                value: "crypto".to_string()
            })
        );
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            FormError::MissingField("email").to_string(),
            "Missing required field: email"
        );
        assert_eq!(
            FormError::UnknownOption {
                field: "frequency",
                value: "yearly".to_string()
            }
            .to_string(),
            "Unknown frequency: 'yearly'"
        );
    }
}
