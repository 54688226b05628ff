use serde::Serialize;

use ordering_core::{AggregateRoot, Amount, Entity, OrderId};
use ordering_parties::Customer;

use crate::item::OrderItem;

/// Aggregate root: Order.
///
/// Items are append-only and the total is never cached: it is recomputed from
/// the current items and discount on every call to [`Order::total`].
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    items: Vec<OrderItem>,
    discount: Amount,
    version: u64,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self::with_id(OrderId::new(), customer)
    }

    pub fn with_id(id: OrderId, customer: Customer) -> Self {
        Self {
            id,
            customer,
            items: Vec::new(),
            discount: Amount::ZERO,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn discount(&self) -> Amount {
        self.discount
    }

    /// Append an item. Duplicates are not detected and there is no limit.
    pub fn add_item(&mut self, item: OrderItem) {
        tracing::debug!(
            order_id = %self.id,
            item_id = %item.id_typed(),
            sub_total = %item.sub_total(),
            "order item added"
        );
        self.items.push(item);
        self.version += 1;
    }

    /// Replace the discount.
    ///
    /// The discount is not checked against the total; a discount larger than the
    /// total produces a negative total.
    pub fn apply_discount(&mut self, discount: Amount) {
        tracing::debug!(order_id = %self.id, %discount, "order discount applied");
        self.discount = discount;
        self.version += 1;
    }

    /// Sum of item sub-totals minus the discount.
    pub fn total(&self) -> Amount {
        self.items.iter().map(OrderItem::sub_total).sum::<Amount>() - self.discount
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {
    fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Order {}

#[cfg(test)]
mod tests {
    use super::*;
    use ordering_core::Quantity;
    use ordering_parties::{Email, FullName};
    use ordering_products::Product;

    fn test_customer() -> Customer {
        Customer::new(
            FullName::new("Leia", "Organa"),
            Email::new("leia.organa@alderaan.org").unwrap(),
        )
    }

    fn test_item(price: i64, quantity: i64) -> OrderItem {
        let product = Product::new("Thermal detonator", Amount::from(price)).unwrap();
        OrderItem::new(product, Quantity::from(quantity))
    }

    #[test]
    fn new_order_is_empty_with_zero_discount() {
        let order = Order::new(test_customer());
        assert!(order.items().is_empty());
        assert_eq!(order.discount(), Amount::ZERO);
        assert_eq!(order.total(), Amount::ZERO);
        assert_eq!(order.version(), 0);
    }

    #[test]
    fn total_sums_sub_totals_minus_discount() {
        let mut order = Order::new(test_customer());
        order.add_item(test_item(100, 2));
        order.add_item(test_item(50, 3));
        assert_eq!(order.total(), Amount::from(350));

        order.apply_discount(Amount::from(50));
        assert_eq!(order.total(), Amount::from(300));
    }

    #[test]
    fn apply_discount_replaces_previous_discount() {
        let mut order = Order::new(test_customer());
        order.add_item(test_item(100, 1));

        order.apply_discount(Amount::from(10));
        order.apply_discount(Amount::from(30));

        assert_eq!(order.discount(), Amount::from(30));
        assert_eq!(order.total(), Amount::from(70));
    }

    #[test]
    fn discount_larger_than_total_goes_negative() {
        let mut order = Order::new(test_customer());
        order.add_item(test_item(100, 1));

        order.apply_discount(Amount::from(150));

        assert_eq!(order.total(), Amount::from(-50));
    }

    #[test]
    fn total_reflects_items_added_after_discount() {
        let mut order = Order::new(test_customer());
        order.apply_discount(Amount::from(25));
        assert_eq!(order.total(), Amount::from(-25));

        order.add_item(test_item(100, 1));
        assert_eq!(order.total(), Amount::from(75));
    }

    #[test]
    fn duplicate_items_are_kept() {
        let mut order = Order::new(test_customer());
        let item = test_item(10, 1);

        order.add_item(item.clone());
        order.add_item(item.clone());

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0], order.items()[1]);
        assert_eq!(order.total(), Amount::from(20));
    }

    #[test]
    fn version_increments_per_mutation() {
        let mut order = Order::new(test_customer());
        order.add_item(test_item(10, 1));
        assert_eq!(order.version(), 1);
        order.apply_discount(Amount::from(1));
        assert_eq!(order.version(), 2);
    }

    #[test]
    fn order_identity_is_its_id() {
        let id = OrderId::new();
        let a = Order::with_id(id, test_customer());
        let mut b = Order::with_id(id, test_customer());
        b.add_item(test_item(10, 1));

        assert_eq!(a, b);
        assert_eq!(a.id(), &id);
        assert_ne!(a, Order::new(test_customer()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: add_item is append-only; earlier items never change.
            #[test]
            fn add_item_is_append_only(
                lines in prop::collection::vec((1i64..10_000i64, 1i64..100i64), 1..20)
            ) {
                let mut order = Order::new(test_customer());

                for (n, (price, quantity)) in lines.iter().enumerate() {
                    let before: Vec<(OrderItem, Amount)> = order
                        .items()
                        .iter()
                        .map(|item| (item.clone(), item.sub_total()))
                        .collect();

                    order.add_item(test_item(*price, *quantity));

                    prop_assert_eq!(order.items().len(), n + 1);
                    for (i, (item, sub_total)) in before.iter().enumerate() {
                        prop_assert_eq!(&order.items()[i], item);
                        prop_assert_eq!(order.items()[i].sub_total(), *sub_total);
                    }
                }

                let expected: i64 = lines.iter().map(|(p, q)| p * q).sum();
                prop_assert_eq!(order.total(), Amount::from(expected));
            }
        }
    }
}
