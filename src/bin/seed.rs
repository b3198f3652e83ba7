//! Resets the product catalog to the sample set.

use rust_decimal::dec;
use shophub_back::{
    Result, config::DatabaseConfig, database, models::NewProduct, queries::product_queries,
};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = seed_database().await {
        tracing::error!("Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn seed_database() -> Result<()> {
    let config = DatabaseConfig {
        url: std::env::var("DB_URL")?,
        max_connections: 5,
    };

    let pool = database::create_pool(&config).await?;

    let deleted = product_queries::delete_all(&pool).await?;
    tracing::info!("Cleared {} existing products", deleted);

    let inserted = product_queries::insert_products(&pool, &sample_products()).await?;
    tracing::info!("Added {} sample products", inserted);

    tracing::info!("Database seeding completed");
    Ok(())
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Wireless Headphones",
            description: "Premium noise-cancelling wireless headphones with 30-hour battery life",
            price: dec!(199.99),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
            category: "Electronics",
            stock: 50,
        },
        NewProduct {
            name: "Smart Watch",
            description: "Fitness tracking smartwatch with heart rate monitor and GPS",
            price: dec!(299.99),
            image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
            category: "Electronics",
            stock: 30,
        },
        NewProduct {
            name: "Laptop Backpack",
            description: "Durable water-resistant backpack with laptop compartment",
            price: dec!(49.99),
            image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
            category: "Accessories",
            stock: 100,
        },
        NewProduct {
            name: "Coffee Maker",
            description: "Programmable coffee maker with thermal carafe",
            price: dec!(79.99),
            image: "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=500",
            category: "Home",
            stock: 45,
        },
        NewProduct {
            name: "Running Shoes",
            description: "Lightweight running shoes with cushioned sole",
            price: dec!(89.99),
            image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
            category: "Sports",
            stock: 75,
        },
        NewProduct {
            name: "Yoga Mat",
            description: "Non-slip eco-friendly yoga mat with carrying strap",
            price: dec!(29.99),
            image: "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=500",
            category: "Sports",
            stock: 120,
        },
        NewProduct {
            name: "Desk Lamp",
            description: "LED desk lamp with adjustable brightness and color temperature",
            price: dec!(39.99),
            image: "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=500",
            category: "Home",
            stock: 60,
        },
        NewProduct {
            name: "Bluetooth Speaker",
            description: "Portable waterproof Bluetooth speaker with 12-hour battery",
            price: dec!(59.99),
            image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500",
            category: "Electronics",
            stock: 85,
        },
    ]
}
