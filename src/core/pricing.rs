use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKUP_PERCENT: u32 = 10;
pub const MAX_MARKUP_PERCENT: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Drop the fractional rupee.
    #[default]
    Truncate,
    /// Round half to even.
    HalfEven,
}

/// Markup applied on top of a product's retail price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    #[serde(default = "default_markup_percent")]
    pub markup_percent: u32,
    #[serde(default)]
    pub rounding: Rounding,
}

fn default_markup_percent() -> u32 {
    DEFAULT_MARKUP_PERCENT
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            markup_percent: DEFAULT_MARKUP_PERCENT,
            rounding: Rounding::Truncate,
        }
    }
}

impl PricingPolicy {
    pub fn new(markup_percent: u32, rounding: Rounding) -> Self {
        Self {
            markup_percent,
            rounding,
        }
    }

    /// Selling price in whole rupees. Exact integer arithmetic, so
    /// 10% on 60 is always 66 and never 65.99999.
    ///
    /// Any `u32` markup is accepted; the largest result,
    /// `u32::MAX * (100 + u32::MAX) / 100`, still fits in a `u64`.
    pub fn selling_price(&self, retail_price: u32) -> u64 {
        let numerator = u128::from(retail_price) * (100 + u128::from(self.markup_percent));
        let quotient = (numerator / 100) as u64;
        let remainder = (numerator % 100) as u64;

        match self.rounding {
            Rounding::Truncate => quotient,
            Rounding::HalfEven => match (remainder * 2).cmp(&100) {
                std::cmp::Ordering::Less => quotient,
                std::cmp::Ordering::Greater => quotient + 1,
                std::cmp::Ordering::Equal => quotient + (quotient % 2),
            },
        }
    }
}
