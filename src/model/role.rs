//! User roles and what they are allowed to see.

use std::fmt;

/// Role of the signed-in user.
///
/// The role decides the audit-table column set (admins get an extra
/// "Allocation" column) and gates the risk screens. Authentication itself
/// is out of scope; the role arrives via config or CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regional-office administrator.
    RoAdmin,
    /// Head-office administrator.
    HoAdmin,
    /// Desk auditor working the claim queue.
    DeskAuditor,
}

impl UserRole {
    /// Parse a role from its wire/CLI spelling (`ro_admin` etc).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ro_admin" => Some(Self::RoAdmin),
            "ho_admin" => Some(Self::HoAdmin),
            "desk_auditor" => Some(Self::DeskAuditor),
            _ => None,
        }
    }

    /// Wire/CLI spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoAdmin => "ro_admin",
            Self::HoAdmin => "ho_admin",
            Self::DeskAuditor => "desk_auditor",
        }
    }

    /// Whether this role is an administrator.
    ///
    /// Admins see the allocation column and may open the risk screens.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::RoAdmin | Self::HoAdmin)
    }

    /// Title shown above the audit table.
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Self::RoAdmin => "Desk Audit Module - RO Admin",
            Self::HoAdmin => "Desk Audit Module - HO Admin",
            Self::DeskAuditor => "Desk Audit Module - Desk Audit",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
