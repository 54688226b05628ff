use serde::Serialize;

use ordering_core::{Amount, Entity, OrderItemId, Quantity};
use ordering_products::Product;

/// Entity: one line of an order (a product and how many of it).
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    id: OrderItemId,
    product: Product,
    quantity: Quantity,
}

impl OrderItem {
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self::with_id(OrderItemId::new(), product, quantity)
    }

    pub fn with_id(id: OrderItemId, product: Product, quantity: Quantity) -> Self {
        Self {
            id,
            product,
            quantity,
        }
    }

    pub fn id_typed(&self) -> OrderItemId {
        self.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Product price times quantity, computed on every call.
    pub fn sub_total(&self) -> Amount {
        self.product.price() * self.quantity
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for OrderItem {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for OrderItem {}
