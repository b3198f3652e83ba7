use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateOrderRequest, OrderCreatedResponse, OrderResponse},
    queries::order_queries,
    utils::{extractors::extract_user_id, jwt::Claims},
};

pub async fn create_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse> {
    let user_id = extract_user_id(&claims)?;

    let (order, items) =
        order_queries::create_order_with_items(&state.db, user_id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: "Order created successfully".to_string(),
            order: OrderResponse { order, items },
        }),
    ))
}

pub async fn get_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<OrderResponse>>> {
    let user_id = extract_user_id(&claims)?;
    let orders = order_queries::get_user_orders(&state.db, user_id).await?;

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let all_items = order_queries::get_items_for_orders(&state.db, &order_ids).await?;

    let mut items_map: HashMap<Uuid, Vec<_>> = HashMap::new();
    for item in all_items {
        items_map.entry(item.order_id).or_default().push(item);
    }

    let response = orders
        .into_iter()
        .map(|order| {
            let items = items_map.remove(&order.id).unwrap_or_default();
            OrderResponse { order, items }
        })
        .collect();

    Ok(Json(response))
}

pub async fn get_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderResponse>> {
    let user_id = extract_user_id(&claims)?;

    let order = order_queries::find_user_order(&state.db, user_id, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    let items = order_queries::get_order_items(&state.db, order.id).await?;

    Ok(Json(OrderResponse { order, items }))
}
