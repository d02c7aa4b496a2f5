//! Billing resolver demo
//!
//! Two in-process "services" — customers and orders — each own their store.
//! The customer service is wired imperatively; the order service registers
//! itself through a [`Module`]. The resolver then stitches entities across
//! the two:
//! - resolving an order pulls the owning customer in from the customer
//!   service (`customer_id` → `id eq …`)
//! - resolving a customer appends its remote orders (`customer_id eq …`)
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=stitch=debug cargo run --example billing
//! ```

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use stitch::prelude::*;

/// The order service's contribution to the wiring
struct OrderModule {
    store: InMemoryRepository,
}

impl Module for OrderModule {
    fn name(&self) -> &str {
        "orders"
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["order"]
    }

    fn register(&self, builder: &mut ResolverBuilder) -> Result<()> {
        builder.add_repository("order", Arc::new(self.store.clone()));
        builder.add_service_for_type("order", Arc::new(self.store.client()));
        // orders carry a customer reference; customers list their orders
        builder.add_constraint("order", Constraint::new("customer", "id"));
        builder.add_constraint("customer", Constraint::new("orders", "customer_id"));
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let customers = InMemoryRepository::new("customer");
    let orders = InMemoryRepository::new("order");

    // Seed the customer service
    let customer_id = Uuid::new_v4();
    customers.insert(json!({
        "id": customer_id.to_string(),
        "name": "Acme Corp",
        "status": "active",
        "created_at": Utc::now().to_rfc3339(),
        // a locally drafted order; remote ones get appended behind it
        "orders": [{ "id": Uuid::new_v4().to_string(), "number": "ORD-DRAFT", "amount": 0.0 }],
    }))?;

    // Seed the order service
    let order_id = Uuid::new_v4();
    orders.insert(json!({
        "id": order_id.to_string(),
        "number": "ORD-001",
        "amount": 149.90,
        "customer_id": customer_id.to_string(),
        "created_at": Utc::now().to_rfc3339(),
    }))?;
    orders.insert(json!({
        "id": Uuid::new_v4().to_string(),
        "number": "ORD-002",
        "amount": 80.00,
        "customer_id": customer_id.to_string(),
        "created_at": Utc::now().to_rfc3339(),
    }))?;

    let order_module = OrderModule {
        store: orders.clone(),
    };

    let resolver = ResolverBuilder::new()
        .register_repository("customer", Arc::new(customers.clone()))
        .register_service_for_type("customer", Arc::new(customers.client()))
        .register_module(&order_module)?
        .build();

    println!("📦 Module: {} v{}", order_module.name(), order_module.version());

    // One hop forward: the order gets its customer stitched in
    let order = resolver
        .get_by_id("order", &order_id, true)
        .await?
        .expect("seeded order");
    println!("\n🧾 Order with customer included:");
    println!("{}", serde_json::to_string_pretty(&order)?);

    // One hop backward: the customer gets its orders appended
    let customer = resolver
        .get_by_id("customer", &customer_id, true)
        .await?
        .expect("seeded customer");
    println!("\n👤 Customer with orders included:");
    println!("{}", serde_json::to_string_pretty(&customer)?);

    // Without include_all nothing is fetched remotely
    let plain = resolver
        .get_by_id("order", &order_id, false)
        .await?
        .expect("seeded order");
    println!("\n🪶 Same order without relational data:");
    println!("{}", serde_json::to_string_pretty(&plain)?);

    Ok(())
}
