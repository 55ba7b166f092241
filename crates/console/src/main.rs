//! Walks through the Acme catalog: vendors, a product, an order.

use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use acme_biz::{PlaceOrder, Product, Vendor, VendorRepository};
use acme_common::{AcmeConfig, Services, TracingActionLog, TracingEmailService};

fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let config = AcmeConfig::from_env();
    tracing::info!(company = %config.company_name, "starting acme console");
    let services = Services::new(Arc::new(TracingEmailService), Arc::new(TracingActionLog))
        .with_config(config);

    let repository = VendorRepository::new();
    for vendor in &repository {
        println!("{vendor}");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(repository.retrieve_all()).context("serialize vendors")?
    );

    let mut product = Product::with_details(1, "Saw", "15-inch steel blade hand saw");
    product.set_cost(Decimal::new(1650, 2));
    product.set_availability_date(Some(Utc::now().date_naive()));
    product.set_vendor(repository.retrieve(1));
    println!("{}", product.say_hello(&services));

    let price = product.calculate_suggested_price(Decimal::from(7), services.config());
    println!("Suggested price for {product}: {} {}", price.value(), price.message());

    let order = PlaceOrder::new(Some(&product), 12)
        .deliver_by(Utc::now() + Duration::days(14))
        .instructions("leave at loading dock");
    let result = product
        .vendor()
        .place_order(order, &services)
        .context("place order")?;
    println!("Order sent: {}\n{}", result.value(), result.message());

    let confirmations = Vendor::send_email(
        repository.retrieve_all(),
        "New catalog available",
        &services,
    );
    for confirmation in confirmations {
        println!("{confirmation}");
    }

    Ok(())
}
