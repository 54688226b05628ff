//! Discount selection.

use std::collections::HashMap;

use ordering_core::Amount;

use crate::discount::{Discount, DiscountType, LargeDiscount, MediumDiscount, SmallDiscount};

/// Looks up the strategy registered for a [`DiscountType`] and applies it.
///
/// The registry maps each type to at most one strategy. When nothing is
/// registered for the requested type, [`DiscountService::calculate`] returns the
/// amount unchanged instead of failing.
#[derive(Debug)]
pub struct DiscountService {
    strategies: HashMap<DiscountType, Box<dyn Discount>>,
}

impl DiscountService {
    /// A service with no strategies at all.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Small (10%), medium (25%) and large (50%).
    pub fn standard() -> Self {
        Self::empty()
            .with(SmallDiscount)
            .with(MediumDiscount)
            .with(LargeDiscount)
    }

    pub fn with(mut self, strategy: impl Discount + 'static) -> Self {
        self.register(strategy);
        self
    }

    /// Register a strategy under its own type, returning the one it replaces.
    pub fn register(&mut self, strategy: impl Discount + 'static) -> Option<Box<dyn Discount>> {
        let discount_type = strategy.discount_type();
        let previous = self.strategies.insert(discount_type, Box::new(strategy));
        if previous.is_some() {
            tracing::warn!(%discount_type, "discount strategy replaced");
        }
        previous
    }

    pub fn strategy_for(&self, discount_type: DiscountType) -> Option<&dyn Discount> {
        self.strategies.get(&discount_type).map(Box::as_ref)
    }

    /// Discount granted on `amount` for `discount_type`.
    ///
    /// Falls back to returning `amount` itself when no strategy is registered
    /// for the type.
    pub fn calculate(&self, amount: Amount, discount_type: DiscountType) -> Amount {
        match self.strategy_for(discount_type) {
            Some(strategy) => {
                let discount = strategy.calculate(amount);
                tracing::debug!(%discount_type, %amount, %discount, "discount calculated");
                discount
            }
            None => {
                tracing::debug!(%discount_type, %amount, "no discount strategy registered; returning amount unchanged");
                amount
            }
        }
    }
}

impl Default for DiscountService {
    fn default() -> Self {
        Self::standard()
    }
}
