//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold.
///
/// The set is closed and flat: no role implies another. Where an admin
/// should also reach a teacher screen, the route lists both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// System administrator.
    Admin,
    /// Academic officer (programmes, classes, teacher assignment).
    Academic,
    /// Accounting staff (tuition and salaries).
    Accounting,
    /// Teacher.
    Teacher,
    /// Student.
    Student,
}

impl UserRole {
    /// Every role, in login form order.
    pub const ALL: [UserRole; 5] = [
        Self::Student,
        Self::Teacher,
        Self::Admin,
        Self::Academic,
        Self::Accounting,
    ];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Academic => "academic",
            Self::Accounting => "accounting",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Human-readable label shown on the login form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Academic => "Academic officer",
            Self::Accounting => "Accounting",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = campus_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "academic" => Ok(Self::Academic),
            "accounting" => Ok(Self::Accounting),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            _ => Err(campus_core::AppError::validation(format!(
                "Invalid user role: '{s}'. \
                 Expected one of: admin, academic, accounting, teacher, student"
            ))),
        }
    }
}
