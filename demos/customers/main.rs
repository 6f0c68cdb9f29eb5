//! Customer Data Access Demo
//!
//! This demo walks through the record store the way a customer screen
//! would use it:
//! - Seeding a store keyed on `CustomerId`
//! - Inserting, updating, searching and removing customers
//! - Sharing the store between threads
//!
//! Run with: cargo run -p customers_demo
//! Set RUST_LOG=debug to see store logging.

use recstore_codec::to_json_pretty;
use recstore_core::{Criteria, Record, RecordStore, SharedRecordStore, StoreConfig, Value};
use std::thread;
use tracing_subscriber::EnvFilter;

/// Builds a customer record.
fn customer(id: i64, first: &str, last: &str, email: &str) -> Record {
    Record::new()
        .with("CustomerId", id)
        .with("FirstName", first)
        .with("LastName", last)
        .with("Email", email)
}

fn show(title: &str, store: &RecordStore) {
    println!("\n{title}:");
    for record in store.list_all() {
        let line: Vec<String> = record.fields().map(|(_, value)| value.to_string()).collect();
        println!("  {}", line.join(" "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Customer Data Access Demo ===");

    // 1. Seed a store
    let config = StoreConfig::new().identifier_field("CustomerId");
    let mut store = RecordStore::with_records(
        config,
        vec![
            customer(1001, "Reema", "Shah", "reema@transflower.in"),
            customer(1002, "Ritesh", "Patil", "ritesh@transflower.in"),
        ],
    )?;
    show("Seeded customers", &store);

    // 2. Insert
    store.insert(customer(1003, "Manisha", "Pant", "manisha.pant@gmail.com"))?;
    match store.insert(customer(1003, "Duplicate", "Entry", "dup@example.com")) {
        Ok(()) => println!("\nduplicate accepted"),
        Err(e) => println!("\nSecond insert of 1003 rejected: {e}"),
    }

    // 3. Update in place
    store.update(customer(1001, "Reema2", "Shah", "reema@transflower.in"))?;
    show("After updating 1001", &store);

    // 4. Search
    let patils = store.search(&Criteria::new("LastName", "Patil")?);
    println!("\nCustomers named Patil: {}", patils.len());

    // 5. Remove
    let removed = store.remove(&Criteria::new("FirstName", "Ritesh")?)?;
    println!("Removed {} customer(s)", removed.len());
    show("After removal", &store);

    // 6. Share across threads
    let shared = SharedRecordStore::from(store);
    thread::scope(|scope| {
        for id in 2001..2004 {
            let shared = shared.clone();
            scope.spawn(move || {
                let name = format!("Guest{}", id - 2000);
                if let Err(e) = shared.insert(customer(id, &name, "Visitor", "guest@example.com")) {
                    eprintln!("insert {id} failed: {e}");
                }
            });
        }
    });
    println!("\nShared store now holds {} customers", shared.len());

    let guest = shared.get(&Value::Integer(2002));
    println!("Customer 2002: {}", to_json_pretty(&guest)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
