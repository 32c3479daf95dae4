//! Catalog seeding entry point.
//!
//! # Responsibility
//! - Wire a repository to a concrete JSON file and the subscriber hub.
//! - Seed the two sample records explicitly, then list the catalog.
//! - Keep output deterministic for quick local sanity checks.

use catalog_core::{
    default_log_level, init_logging, JsonFileStore, ProductDraft, ProductRepository, RepoError,
    SubscriberHub,
};

const CATALOG_PATH: &str = "data/products.json";
const LOG_DIR: &str = "logs";

fn main() {
    if let Err(err) = init_logging(default_log_level(), LOG_DIR) {
        eprintln!("logging unavailable: {err}");
    }

    let hub = SubscriberHub::new();
    let events = hub.subscribe();
    let repo = ProductRepository::new(JsonFileStore::new(CATALOG_PATH), hub);

    for draft in seed_drafts() {
        match repo.add(draft) {
            Ok(product) => println!("added {} (id {})", product.title, product.id),
            // Re-running against an existing catalog file is fine.
            Err(RepoError::DuplicateCode(code)) => println!("skipped existing code {code}"),
            Err(err) => {
                eprintln!("seeding failed: {err}");
                std::process::exit(1);
            }
        }
    }

    for event in events.try_iter() {
        println!("event {} id={}", event.event_name(), event.product().id);
    }

    match repo.list(None) {
        Ok(products) => {
            println!("catalog has {} product(s):", products.len());
            for product in products {
                println!(
                    "  #{} {} code={} price={} stock={}",
                    product.id, product.title, product.code, product.price, product.stock
                );
            }
        }
        Err(err) => {
            eprintln!("listing failed: {err}");
            std::process::exit(1);
        }
    }
}

fn seed_drafts() -> [ProductDraft; 2] {
    [
        ProductDraft {
            title: "Manzana".to_string(),
            description: "Manzana natural".to_string(),
            price: 12.0,
            thumbnail: "ruta/imagen1.jpg".to_string(),
            code: "4005".to_string(),
            stock: 22,
        },
        ProductDraft {
            title: "Pera".to_string(),
            description: "Pera natural".to_string(),
            price: 150.0,
            thumbnail: "ruta/imagen2.jpg".to_string(),
            code: "LSLV2".to_string(),
            stock: 15,
        },
    ]
}
