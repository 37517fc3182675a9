//! # Seed Data Generator
//!
//! Populates the inventory document with a café menu for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default document
//! cargo run -p brew-store --bin seed
//!
//! # Specify the document path
//! cargo run -p brew-store --bin seed -- --db ./data/database.json
//! ```
//!
//! Each product gets a realistic café price and an opening stock level;
//! a few items are deliberately seeded low so the low-stock report has
//! something to show.

use std::env;

use tracing_subscriber::EnvFilter;

use brew_core::{Money, ProductInput};
use brew_store::Store;

/// The menu: (name, category, sub-category, price in cents, opening stock).
const MENU: &[(&str, &str, &str, i64, i64)] = &[
    // Hot drinks
    ("Espresso", "Beverages", "Hot Drinks", 300, 60),
    ("Americano", "Beverages", "Hot Drinks", 350, 60),
    ("Cappuccino", "Beverages", "Hot Drinks", 450, 50),
    ("Flat White", "Beverages", "Hot Drinks", 450, 50),
    ("Latte", "Beverages", "Hot Drinks", 475, 50),
    ("Mocha", "Beverages", "Hot Drinks", 500, 40),
    ("Green Tea", "Beverages", "Hot Drinks", 500, 20),
    ("Earl Grey", "Beverages", "Hot Drinks", 400, 25),
    ("Hot Chocolate", "Beverages", "Hot Drinks", 475, 30),
    // Cold drinks
    ("Iced Latte", "Beverages", "Cold Drinks", 500, 35),
    ("Iced Tea", "Beverages", "Cold Drinks", 400, 30),
    ("Fresh Orange Juice", "Beverages", "Cold Drinks", 550, 18),
    ("Sparkling Water", "Beverages", "Cold Drinks", 250, 48),
    ("Lemonade", "Beverages", "Cold Drinks", 375, 24),
    // Pastries
    ("Croissant", "Food", "Pastries", 380, 24),
    ("Pain au Chocolat", "Food", "Pastries", 420, 18),
    ("Blueberry Muffin", "Food", "Pastries", 350, 16),
    ("Cinnamon Roll", "Food", "Pastries", 400, 12),
    ("Scone", "Food", "Pastries", 320, 8),
    // Sandwiches
    ("Ham & Cheese Toastie", "Food", "Sandwiches", 650, 10),
    ("Caprese Panini", "Food", "Sandwiches", 700, 10),
    ("Chicken Avocado Wrap", "Food", "Sandwiches", 750, 8),
    // Retail
    ("House Blend Beans 250g", "Retail", "Coffee Beans", 1200, 15),
    ("Single Origin Beans 250g", "Retail", "Coffee Beans", 1600, 9),
    ("Loose Leaf Tea Tin", "Retail", "Tea", 950, 6),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./data/database.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Brew POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Document file path (default: ./data/database.json)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Brew POS Seed Data Generator");
    println!("============================");
    println!("Document: {}", db_path);
    println!();

    let store = Store::open(&db_path).await?;

    // Refuse to double-seed
    let status = store.status().await;
    if status.products > 0 {
        println!("Document already has {} products.", status.products);
        println!("Delete the file to regenerate.");
        return Ok(());
    }

    let products = store.products();
    for (name, category, sub_category, price_cents, quantity) in MENU {
        products
            .create(ProductInput {
                name: (*name).to_string(),
                description: None,
                category: (*category).to_string(),
                sub_category: (*sub_category).to_string(),
                price: Money::from_cents(*price_cents),
                quantity: *quantity,
                image_url: None,
            })
            .await?;
    }

    let status = store.status().await;
    println!("Seeded {} products into {}", status.products, status.path);

    Ok(())
}
