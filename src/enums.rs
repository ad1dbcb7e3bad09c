use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ─── Category ────────────────────────────────────────────────────────

/// Closed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    Entertainment,
    Ecommerce,
    Finance,
    Stocks,
    Cryptocurrency,
}

impl Category {
    /// Canonical string stored in the database and accepted on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Entertainment => "Entertainment",
            Category::Ecommerce => "E-commerce",
            Category::Finance => "Finance",
            Category::Stocks => "Stocks",
            Category::Cryptocurrency => "Cryptocurrency",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::General,
            Category::Entertainment,
            Category::Ecommerce,
            Category::Finance,
            Category::Stocks,
            Category::Cryptocurrency,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(Category::General),
            "Entertainment" => Ok(Category::Entertainment),
            "E-commerce" => Ok(Category::Ecommerce),
            "Finance" => Ok(Category::Finance),
            "Stocks" => Ok(Category::Stocks),
            "Cryptocurrency" => Ok(Category::Cryptocurrency),
            _ => Err(AppError::Validation(format!(
                "Category must be one of General, Entertainment, E-commerce, Finance, Stocks, Cryptocurrency (got: {})",
                s
            ))),
        }
    }
}

// ─── PricingMode ─────────────────────────────────────────────────────

/// How the listed price is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMode {
    PerPerson,
    PerGroup,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::PerPerson => "per-person",
            PricingMode::PerGroup => "per-group",
        }
    }

    /// Inclusive price bounds for this mode, in dollars.
    pub fn price_bounds(&self) -> (f64, f64) {
        match self {
            PricingMode::PerPerson => (0.10, 0.30),
            PricingMode::PerGroup => (0.10, 150.00),
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-person" => Ok(PricingMode::PerPerson),
            "per-group" => Ok(PricingMode::PerGroup),
            _ => Err(AppError::Validation(format!(
                "Pricing mode must be per-person or per-group (got: {})",
                s
            ))),
        }
    }
}

// ─── EarningStatus ───────────────────────────────────────────────────

/// Lifecycle of a ledger entry. The only transition is pending -> paid,
/// performed by the settlement sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EarningStatus {
    Pending,
    Paid,
}

impl EarningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningStatus::Pending => "pending",
            EarningStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for EarningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EarningStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(EarningStatus::Pending),
            "paid" => Ok(EarningStatus::Paid),
            _ => Err(AppError::Validation(format!("Invalid earning status: {}", s))),
        }
    }
}

// ─── UserRole ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Intermediary,
    Mediator,
    Admin,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Intermediary => "intermediary",
            UserRole::Mediator => "mediator",
            UserRole::Admin => "admin",
            UserRole::Viewer => "viewer",
        }
    }

    /// Roles a user may pick at registration time.
    pub fn registerable() -> &'static [UserRole] {
        &[UserRole::Intermediary, UserRole::Mediator, UserRole::Admin]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intermediary" => Ok(UserRole::Intermediary),
            "mediator" => Ok(UserRole::Mediator),
            "admin" => Ok(UserRole::Admin),
            "viewer" => Ok(UserRole::Viewer),
            _ => Err(AppError::Validation(format!(
                "Invalid role: {}. Supported: intermediary, mediator, admin, viewer",
                s
            ))),
        }
    }
}
