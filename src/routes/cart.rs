use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::Result,
    models::{CartClearedResponse, CartItem, CartResponse, UpdateCartRequest},
    utils::{extractors::extract_user_id, jwt::Claims},
};

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<CartItem>>> {
    let user_id = extract_user_id(&claims)?;

    Ok(Json(state.carts.get(user_id).await))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(item): Json<CartItem>,
) -> Result<Json<CartResponse>> {
    let user_id = extract_user_id(&claims)?;
    let cart = state.carts.add(user_id, item).await;

    Ok(Json(CartResponse {
        message: "Item added to cart".to_string(),
        cart,
    }))
}

pub async fn update_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateCartRequest>,
) -> Result<Json<CartResponse>> {
    let user_id = extract_user_id(&claims)?;
    let cart = state
        .carts
        .update(user_id, payload.product_id, payload.quantity)
        .await;

    Ok(Json(CartResponse {
        message: "Cart updated".to_string(),
        cart,
    }))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i32>,
) -> Result<Json<CartResponse>> {
    let user_id = extract_user_id(&claims)?;
    let cart = state.carts.remove(user_id, product_id).await;

    Ok(Json(CartResponse {
        message: "Item removed from cart".to_string(),
        cart,
    }))
}

pub async fn clear_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CartClearedResponse>> {
    let user_id = extract_user_id(&claims)?;
    state.carts.clear(user_id).await;

    Ok(Json(CartClearedResponse {
        message: "Cart cleared".to_string(),
    }))
}
