use ordering_core::{Amount, Quantity};
use ordering_discounts::{DiscountService, DiscountType};
use ordering_parties::{Customer, Email, FullName};
use ordering_products::Product;
use ordering_sales::{Order, OrderItem};

fn luke() -> Customer {
    Customer::new(
        FullName::new("Luke", "Skywalker"),
        Email::new("luke.skywalker@starwars.com").expect("valid email"),
    )
}

fn falcon() -> Product {
    Product::new("Millennium Falcon", Amount::from(500_000_000)).expect("valid product")
}

#[test]
fn luke_buys_the_falcon_with_a_large_discount() {
    let customer = luke();
    assert_eq!(customer.name().first_name(), "Luke");
    assert_eq!(customer.name().last_name(), "Skywalker");
    assert_eq!(customer.email().as_str(), "luke.skywalker@starwars.com");

    let product = falcon();
    assert_eq!(product.description(), "Millennium Falcon");
    assert_eq!(product.price(), Amount::from(500_000_000));

    let item = OrderItem::new(product, Quantity::from(1));
    assert_eq!(item.sub_total(), Amount::from(500_000_000));

    let mut order = Order::new(customer.clone());
    order.add_item(item);
    assert_eq!(order.customer(), &customer);
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.total(), Amount::from(500_000_000));

    let discount = DiscountService::standard().calculate(order.total(), DiscountType::Large);
    assert_eq!(discount, Amount::from(250_000_000));

    order.apply_discount(discount);
    assert_eq!(order.total(), Amount::from(250_000_000));
}

#[test]
fn oversized_discount_yields_negative_total() {
    let mut order = Order::new(luke());
    order.add_item(OrderItem::new(falcon(), Quantity::from(1)));

    order.apply_discount(Amount::from(600_000_000));

    assert_eq!(order.total(), Amount::from(-100_000_000));
}

#[test]
fn unregistered_discount_type_returns_the_amount() {
    let service = DiscountService::empty();
    let amount = Amount::from(500_000_000);

    assert_eq!(service.calculate(amount, DiscountType::Medium), amount);
}
