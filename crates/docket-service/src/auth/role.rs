//! Organizational roles and their seniority ranking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Roles in the firm's hierarchy.
///
/// Roles are totally ordered by [`Role::hierarchy_level`]; `Ord` follows that
/// ranking, so `Role::SuperAdmin > Role::Partner`.
///
/// ## Hierarchy (most → least senior)
///
/// ```text
/// super-admin > partner > senior-associate > associate
///   > junior-associate > paralegal > client > guest
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// System administrator; unrestricted.
    SuperAdmin,
    /// Firm partner; sees every case, but not confidential documents.
    Partner,
    SeniorAssociate,
    Associate,
    JuniorAssociate,
    Paralegal,
    /// External client of the firm.
    Client,
    /// Unauthenticated or anonymous visitor.
    Guest,
}

impl Role {
    /// All roles in descending seniority.
    pub const ALL: [Self; 8] = [
        Self::SuperAdmin,
        Self::Partner,
        Self::SeniorAssociate,
        Self::Associate,
        Self::JuniorAssociate,
        Self::Paralegal,
        Self::Client,
        Self::Guest,
    ];

    /// Returns the seniority rank of this role (higher = more senior).
    ///
    /// Every role has a distinct level.
    #[must_use]
    pub const fn hierarchy_level(self) -> u8 {
        match self {
            Self::SuperAdmin => 8,
            Self::Partner => 7,
            Self::SeniorAssociate => 6,
            Self::Associate => 5,
            Self::JuniorAssociate => 4,
            Self::Paralegal => 3,
            Self::Client => 2,
            Self::Guest => 1,
        }
    }

    /// Returns `true` if this role ranks strictly above `other`.
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.hierarchy_level() > other.hierarchy_level()
    }

    /// Returns `true` for roles held by firm staff rather than outside parties.
    #[must_use]
    pub const fn is_internal(self) -> bool {
        !matches!(self, Self::Client | Self::Guest)
    }

    /// Returns the canonical name for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Partner => "partner",
            Self::SeniorAssociate => "senior-associate",
            Self::Associate => "associate",
            Self::JuniorAssociate => "junior-associate",
            Self::Paralegal => "paralegal",
            Self::Client => "client",
            Self::Guest => "guest",
        }
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hierarchy_level().cmp(&other.hierarchy_level())
    }
}

impl std::str::FromStr for Role {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
