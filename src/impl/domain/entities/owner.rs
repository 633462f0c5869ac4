use std::sync::LazyLock;

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidPhoneNumber;

static E164: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").expect("hardcoded regex should be valid"));

/// Phone number identifying the owner of a ledger.
///
/// This is the only credential the backend sees: every read and write is
/// partitioned by it. Always held in E.164 form (`+923001234567`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Normalize user input ("+92 300-1234567") into an owner id.
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
            .collect();
        if !E164.is_match(&compact) {
            return Err(InvalidPhoneNumber::new(raw));
        }
        Ok(Self(compact))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
