use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductQuery},
};

pub async fn search_products(pool: &PgPool, params: ProductQuery) -> Result<Vec<Product>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM products WHERE 1=1");

    // exact category match
    if let Some(ref category) = params.category {
        query.push(" AND category = ");
        query.push_bind(category);
    }

    // case-insensitive substring match on name/description
    if let Some(ref search) = params.search {
        query.push(" AND (name ILIKE ");
        query.push_bind(format!("%{}%", search));
        query.push(" OR description ILIKE ");
        query.push_bind(format!("%{}%", search));
        query.push(")");
    }

    query.push(" ORDER BY created_at DESC");

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn delete_all(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products").execute(pool).await?;

    Ok(result.rows_affected())
}

pub async fn insert_products(pool: &PgPool, products: &[NewProduct]) -> Result<u64> {
    let names: Vec<&str> = products.iter().map(|p| p.name).collect();
    let descriptions: Vec<&str> = products.iter().map(|p| p.description).collect();
    let prices: Vec<Decimal> = products.iter().map(|p| p.price).collect();
    let images: Vec<&str> = products.iter().map(|p| p.image).collect();
    let categories: Vec<&str> = products.iter().map(|p| p.category).collect();
    let stocks: Vec<i32> = products.iter().map(|p| p.stock).collect();

    let result = sqlx::query(
        "INSERT INTO products (name, description, price, image, category, stock)
         SELECT unnest($1::varchar[]), unnest($2::text[]), unnest($3::decimal[]),
                unnest($4::text[]), unnest($5::varchar[]), unnest($6::int[])",
    )
    .bind(&names)
    .bind(&descriptions)
    .bind(&prices)
    .bind(&images)
    .bind(&categories)
    .bind(&stocks)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
