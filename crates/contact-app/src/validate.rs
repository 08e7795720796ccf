//! # Submit-Time Validation
//!
//! Pure rules over a form snapshot and the auth snapshot. All rules are
//! checked independently; every failing field appears in the result.
//!
//! Values are taken as typed: no trimming, no length caps. Whitespace-only
//! input counts as filled.

use contact_core::{AuthSnapshot, ContactFormData, Field, ValidationErrors};

/// Validate a submit attempt.
///
/// Email is only checked for anonymous visitors; authenticated sessions
/// supply it implicitly through their identity and it is never flagged.
pub fn validate(data: &ContactFormData, auth: &AuthSnapshot) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if !auth.is_authenticated {
        if data.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !email_shaped(&data.email) {
            errors.insert(Field::Email, "Email address is invalid");
        }
    }

    if data.message.is_empty() {
        errors.insert(Field::Message, "Message is required");
    }

    errors
}

/// Permissive `local@domain.tld` shape: a non-whitespace run containing `@`
/// with at least one character before it, and a dotted remainder after it.
fn email_shaped(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        // Look for `x.y` after the `@`, unbroken by whitespace.
        let mut seen_domain = false;
        for j in (i + 1)..chars.len() {
            let d = chars[j];
            if d.is_whitespace() {
                break;
            }
            if d == '.' && seen_domain && chars.get(j + 1).is_some_and(|n| !n.is_whitespace()) {
                return true;
            }
            seen_domain = true;
        }
    }
    false
}
