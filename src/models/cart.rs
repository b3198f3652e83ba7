use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry within a cart. Name, price and image are snapshotted
/// from the product at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
pub struct CartClearedResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn cart_item_uses_camel_case_on_the_wire() {
        let item = CartItem {
            product_id: 7,
            quantity: 2,
            name: "Desk Lamp".to_string(),
            price: dec!(39.99),
            image: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["productId"], 7);
        assert_eq!(value["quantity"], 2);
        assert!(value.get("product_id").is_none());
    }
}
