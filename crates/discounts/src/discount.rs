//! Discount strategies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ordering_core::{Amount, DomainError};

/// Discount category a client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Small,
    Medium,
    Large,
}

impl DiscountType {
    pub const ALL: [DiscountType; 3] = [DiscountType::Small, DiscountType::Medium, DiscountType::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            DiscountType::Small => "small",
            DiscountType::Medium => "medium",
            DiscountType::Large => "large",
        }
    }
}

impl core::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for DiscountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(DiscountType::Small),
            "medium" => Ok(DiscountType::Medium),
            "large" => Ok(DiscountType::Large),
            other => Err(DomainError::invalid_argument(format!(
                "unknown discount type: {other}"
            ))),
        }
    }
}

/// A discount calculation strategy.
///
/// Each strategy claims exactly one [`DiscountType`]; `calculate` returns the
/// discount to subtract, not the discounted amount.
pub trait Discount: Send + Sync + core::fmt::Debug {
    /// The category this strategy handles.
    fn discount_type(&self) -> DiscountType;

    /// Fraction of the amount granted as discount.
    fn rate(&self) -> Decimal;

    fn is_applicable(&self, discount_type: DiscountType) -> bool {
        self.discount_type() == discount_type
    }

    fn calculate(&self, amount: Amount) -> Amount {
        amount.scaled_by(self.rate())
    }
}

/// 10% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallDiscount;

impl Discount for SmallDiscount {
    fn discount_type(&self) -> DiscountType {
        DiscountType::Small
    }

    fn rate(&self) -> Decimal {
        Decimal::new(10, 2)
    }
}

/// 25% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediumDiscount;

impl Discount for MediumDiscount {
    fn discount_type(&self) -> DiscountType {
        DiscountType::Medium
    }

    fn rate(&self) -> Decimal {
        Decimal::new(25, 2)
    }
}

/// 50% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeDiscount;

impl Discount for LargeDiscount {
    fn discount_type(&self) -> DiscountType {
        DiscountType::Large
    }

    fn rate(&self) -> Decimal {
        Decimal::new(50, 2)
    }
}
