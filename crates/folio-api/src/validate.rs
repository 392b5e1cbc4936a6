//! Request validation.
//!
//! Every check produces [`Issue`] values naming the offending field, so a
//! 400 response carries one entry per problem rather than only the first.

use serde::Serialize;

use crate::error::ApiError;

/// A single validation failure, tied to the request field that caused it.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
  pub field:   &'static str,
  pub message: String,
}

impl Issue {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

/// `Err(ApiError::Validation)` when any issue was collected.
pub fn fail_on(issues: Vec<Issue>) -> Result<(), ApiError> {
  if issues.is_empty() {
    Ok(())
  } else {
    Err(ApiError::Validation(issues))
  }
}

/// Syntactic email check: one `@`, non-empty local part, and a domain
/// with at least one interior dot. No whitespace anywhere.
pub fn is_valid_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let mut parts = s.splitn(2, '@');
  let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  match domain.split_once('.') {
    Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
    None => false,
  }
}

/// A path identifier must be a positive integer.
pub fn check_id(id: i64) -> Result<(), ApiError> {
  let mut issues = Vec::new();
  if id <= 0 {
    issues.push(Issue::new("id", "must be a positive integer"));
  }
  fail_on(issues)
}

pub fn check_name(issues: &mut Vec<Issue>, name: &str) {
  if name.trim().is_empty() {
    issues.push(Issue::new("name", "must not be empty"));
  }
}

pub fn check_email(issues: &mut Vec<Issue>, email: &str) {
  if !is_valid_email(email) {
    issues.push(Issue::new("email", "must be a valid email address"));
  }
}
