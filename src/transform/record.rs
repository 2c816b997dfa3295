//! User record normalization.

use serde::{Deserialize, Serialize};

use crate::domain::{EmailMatcher, PatternMatcher, PhoneNumberMatcher};

/// Raw user fields as entered. Missing fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawUserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordValidation {
    pub email_valid: bool,
    pub phone_valid: bool,
}

/// Cleaned user record with a derived username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub username: String,
    pub validation: RecordValidation,
}

/// Trims, collapses, and re-cases each field of `raw`.
pub fn normalize_user(raw: &RawUserData) -> UserRecord {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

    let name = title_case(&collapse_whitespace(&field(&raw.name)));
    let address = title_case(&collapse_whitespace(&field(&raw.address)));
    let email = EmailMatcher::clean(&field(&raw.email));
    let phone = PhoneNumberMatcher::digits(&field(&raw.phone));

    let username = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let validation = RecordValidation {
        email_valid: EmailMatcher::new().normalize(&email).is_some(),
        phone_valid: PhoneNumberMatcher::validate(&phone),
    };

    UserRecord {
        name,
        email,
        phone,
        address,
        username,
        validation,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `4b` becomes `4B` and `o'neil` becomes `O'Neil`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
