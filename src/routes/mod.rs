mod cart;
mod google_auth;
mod health;
mod orders;
mod products;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    let protected = Router::new()
        .route("/cart", get(cart::get_cart))
        .route("/cart/add", post(cart::add_to_cart))
        .route("/cart/update", put(cart::update_cart))
        .route("/cart/remove/{product_id}", delete(cart::remove_from_cart))
        .route("/cart/clear", delete(cart::clear_cart))
        .route("/orders", post(orders::create_order).get(orders::get_orders))
        .route("/orders/{id}", get(orders::get_order))
        .route_layer(middleware::from_fn(crate::middleware::auth_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/google", post(google_auth::google_auth))
        .route("/products", get(products::search_products))
        .merge(protected)
}
