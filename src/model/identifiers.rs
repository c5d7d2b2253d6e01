//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Unique identifier for a desk-audit record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct AuditId(String);

impl AuditId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidAuditId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidAuditId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AuditId {
    type Error = InvalidAuditId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a fraud-detection risk rule (e.g. "R001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRuleId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidRuleId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RuleId {
    type Error = InvalidRuleId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single fraud finding inside the claim-details view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FindingId(String);

impl FindingId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidFindingId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidFindingId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected audit id.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidAuditId {
    /// The id was empty or whitespace-only.
    #[error("Audit id cannot be empty")]
    Empty,
}

/// Rejected rule id.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidRuleId {
    /// The id was empty or whitespace-only.
    #[error("Rule id cannot be empty")]
    Empty,
}

/// Rejected finding id.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidFindingId {
    /// The id was empty or whitespace-only.
    #[error("Finding id cannot be empty")]
    Empty,
}

// ===== Tests =====
