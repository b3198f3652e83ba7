use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DB models

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: i32,
    pub total_amount: Decimal,
    pub shipping_address: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    #[serde(skip)]
    pub id: i32,
    #[serde(skip)]
    pub order_id: Uuid,
    #[serde(rename = "product")]
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

// Request types

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "product")]
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
    pub total_amount: Decimal,
    pub shipping_address: ShippingAddress,
}

// Response types

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: OrderResponse,
}
