use serde::Serialize;

use ordering_core::{Amount, DomainError, DomainResult, Entity, ProductId};

/// Entity: Product.
///
/// Invariants (checked on construction and on every change):
/// - the description is not blank,
/// - the price is strictly positive.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    description: String,
    price: Amount,
}

impl Product {
    pub fn new(description: impl Into<String>, price: Amount) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), description, price)
    }

    pub fn with_id(
        id: ProductId,
        description: impl Into<String>,
        price: Amount,
    ) -> DomainResult<Self> {
        let description = description.into();
        ensure_description(&description)?;
        ensure_price(price)?;

        Ok(Self {
            id,
            description,
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Amount {
        self.price
    }

    pub fn change_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        ensure_description(&description)?;

        tracing::debug!(product_id = %self.id, "product description changed");
        self.description = description;
        Ok(())
    }

    pub fn change_price(&mut self, price: Amount) -> DomainResult<()> {
        ensure_price(price)?;

        tracing::debug!(product_id = %self.id, old = %self.price, new = %price, "product price changed");
        self.price = price;
        Ok(())
    }
}

fn ensure_description(description: &str) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::invalid_argument("description is required"));
    }
    Ok(())
}

fn ensure_price(price: Amount) -> DomainResult<()> {
    if !price.is_positive() {
        return Err(DomainError::invalid_argument(format!(
            "price must be positive, got {price}"
        )));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Product {}
