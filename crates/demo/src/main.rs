use anyhow::Context;

use ordering_core::{Amount, Quantity};
use ordering_discounts::{DiscountService, DiscountType};
use ordering_parties::{Customer, Email, FullName};
use ordering_products::Product;
use ordering_sales::{Order, OrderItem};

/// Environment variable selecting the discount category (`small|medium|large`).
const DISCOUNT_ENV: &str = "ORDERING_DISCOUNT";

fn main() -> anyhow::Result<()> {
    ordering_observability::init();

    let discount_type = match std::env::var(DISCOUNT_ENV) {
        Ok(value) => value
            .parse::<DiscountType>()
            .with_context(|| format!("{DISCOUNT_ENV} is not a discount type"))?,
        Err(_) => DiscountType::Large,
    };

    let customer = Customer::new(
        FullName::new("Luke", "Skywalker"),
        Email::new("luke.skywalker@starwars.com").context("customer email")?,
    );
    tracing::info!(customer_id = %customer.id_typed(), name = %customer.name(), "customer registered");

    let product = Product::new("Millennium Falcon", Amount::from(500_000_000))
        .context("product")?;
    tracing::info!(product_id = %product.id_typed(), price = %product.price(), "product listed");

    let item = OrderItem::new(product, Quantity::from(1));

    let mut order = Order::new(customer);
    order.add_item(item);
    tracing::info!(order_id = %order.id_typed(), total = %order.total(), "order placed");

    let discounts = DiscountService::standard();
    let discount = discounts.calculate(order.total(), discount_type);
    order.apply_discount(discount);
    tracing::info!(
        order_id = %order.id_typed(),
        %discount_type,
        %discount,
        total = %order.total(),
        "discount applied"
    );

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
