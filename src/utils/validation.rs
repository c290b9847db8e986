//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::{constants, models::RepresentativeType};

/// Submission links must carry an ftp/http/https scheme followed by a
/// non-empty body without spaces or quotes.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^\s"]+$"#).expect("valid link regex"));

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate phone number (digits only, fixed length)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.len() != constants::PHONE_LENGTH {
        return Err("Phone number must be 10 digits");
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number can only contain digits");
    }
    Ok(())
}

/// Validate a submission link's URL shape
pub fn validate_link(link: &str) -> Result<(), &'static str> {
    if link.len() > constants::MAX_LINK_LENGTH as usize {
        return Err("Link is too long");
    }
    if !LINK_RE.is_match(link) {
        return Err("Link must be an ftp, http or https URL");
    }
    Ok(())
}

/// Validate a representative type
pub fn validate_representative_type(kind: &str) -> Result<(), &'static str> {
    RepresentativeType::parse(kind)
        .map(|_| ())
        .ok_or("Invalid representative type")
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a task title
pub fn validate_task_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Task title cannot be empty");
    }
    if sanitized.len() > constants::MAX_TASK_TITLE_LENGTH as usize {
        return Err("Task title must be at most 256 characters");
    }
    Ok(sanitized)
}

/// Validate and sanitize a task description
pub fn validate_task_description(description: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(description);
    if sanitized.is_empty() {
        return Err("Task description cannot be empty");
    }
    if sanitized.len() > constants::MAX_TASK_DESCRIPTION_LENGTH as usize {
        return Err("Task description is too long");
    }
    Ok(sanitized)
}

/// Validate a task point value
pub fn validate_task_points(points: i64) -> Result<(), &'static str> {
    if points <= 0 {
        return Err("Points must be a positive integer");
    }
    Ok(())
}

/// Validate an awarded point value
pub fn validate_awarded_points(points: i64) -> Result<(), &'static str> {
    if points < 0 {
        return Err("Awarded points cannot be negative");
    }
    Ok(())
}
