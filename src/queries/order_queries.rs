use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{CreateOrderRequest, Order, OrderItem},
};

pub async fn create_order_with_items(
    pool: &PgPool,
    user_id: i32,
    req: &CreateOrderRequest,
) -> Result<(Order, Vec<OrderItem>)> {
    let mut tx = pool.begin().await?;

    let shipping_address = serde_json::to_value(&req.shipping_address)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (id, user_id, total_amount, shipping_address)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(req.total_amount)
    .bind(&shipping_address)
    .fetch_one(&mut *tx)
    .await?;

    let product_ids: Vec<i32> = req.items.iter().map(|i| i.product_id).collect();
    let quantities: Vec<i32> = req.items.iter().map(|i| i.quantity).collect();
    let prices: Vec<Decimal> = req.items.iter().map(|i| i.price).collect();

    let items = sqlx::query_as::<_, OrderItem>(
        "INSERT INTO order_items (order_id, product_id, quantity, price)
         SELECT $1, unnest($2::int[]), unnest($3::int[]), unnest($4::decimal[])
         RETURNING *",
    )
    .bind(order.id)
    .bind(&product_ids)
    .bind(&quantities)
    .bind(&prices)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((order, items))
}

pub async fn get_user_orders(pool: &PgPool, user_id: i32) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Scoped by user id so another user's order reads as absent.
pub async fn find_user_order(pool: &PgPool, user_id: i32, order_id: Uuid) -> Result<Option<Order>> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(order)
}

pub async fn get_order_items(pool: &PgPool, order_id: Uuid) -> Result<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE order_id = $1")
        .bind(order_id)
        .fetch_all(pool)
        .await?;

    Ok(items)
}

pub async fn get_items_for_orders(pool: &PgPool, order_ids: &[Uuid]) -> Result<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE order_id = ANY($1)")
        .bind(order_ids)
        .fetch_all(pool)
        .await?;

    Ok(items)
}
