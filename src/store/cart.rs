use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::CartItem;

/// Store abstraction over a user's cart. Every operation is scoped to an
/// authenticated user id; implementations decide where the items live.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Current ordered list of line items, empty if the user has no cart yet.
    async fn get(&self, user_id: i32) -> Vec<CartItem>;

    /// Adds an item. If the product is already in the cart its quantity is
    /// incremented by the given amount; otherwise the item is appended,
    /// preserving insertion order. Returns the updated cart.
    async fn add(&self, user_id: i32, item: CartItem) -> Vec<CartItem>;

    /// Overwrites the quantity of a line item. A quantity of zero or less
    /// removes the item; an absent product id is a no-op. Returns the
    /// updated cart.
    async fn update(&self, user_id: i32, product_id: i32, quantity: i32) -> Vec<CartItem>;

    /// Removes the matching line item if present. Returns the updated cart.
    async fn remove(&self, user_id: i32, product_id: i32) -> Vec<CartItem>;

    /// Replaces the user's cart with an empty list.
    async fn clear(&self, user_id: i32);
}

/// Transient cart store: carts exist only for the lifetime of the process.
/// The write lock is held across each read-modify-write, so concurrent
/// mutations for the same user serialize instead of losing updates.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<i32, Vec<CartItem>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get(&self, user_id: i32) -> Vec<CartItem> {
        self.carts
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn add(&self, user_id: i32, item: CartItem) -> Vec<CartItem> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id).or_default();

        match cart.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => existing.quantity += item.quantity,
            None => cart.push(item),
        }

        cart.clone()
    }

    async fn update(&self, user_id: i32, product_id: i32, quantity: i32) -> Vec<CartItem> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id).or_default();

        if quantity <= 0 {
            cart.retain(|i| i.product_id != product_id);
        } else if let Some(item) = cart.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }

        cart.clone()
    }

    async fn remove(&self, user_id: i32, product_id: i32) -> Vec<CartItem> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(user_id).or_default();

        cart.retain(|i| i.product_id != product_id);

        cart.clone()
    }

    async fn clear(&self, user_id: i32) {
        self.carts.write().await.insert(user_id, Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::{Decimal, dec};

    const USER: i32 = 1;
    const OTHER_USER: i32 = 2;

    fn item(product_id: i32, quantity: i32, price: Decimal) -> CartItem {
        CartItem {
            product_id,
            quantity,
            name: format!("Product {}", product_id),
            price,
            image: None,
        }
    }

    #[tokio::test]
    async fn get_returns_empty_list_for_unknown_user() {
        let store = InMemoryCartStore::new();
        assert!(store.get(USER).await.is_empty());
    }

    #[tokio::test]
    async fn add_accumulates_quantity_for_same_product() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 2, dec!(10))).await;
        let cart = store.add(USER, item(1, 3, dec!(10))).await;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[tokio::test]
    async fn add_preserves_insertion_order() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(3, 1, dec!(1))).await;
        store.add(USER, item(1, 1, dec!(1))).await;
        store.add(USER, item(2, 1, dec!(1))).await;
        let cart = store.add(USER, item(1, 1, dec!(1))).await;

        let ids: Vec<i32> = cart.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn update_overwrites_quantity() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 2, dec!(10))).await;
        let cart = store.update(USER, 1, 7).await;

        assert_eq!(cart[0].quantity, 7);
    }

    #[tokio::test]
    async fn update_with_zero_or_negative_quantity_removes_item() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 2, dec!(10))).await;
        assert!(store.update(USER, 1, 0).await.is_empty());

        store.add(USER, item(1, 2, dec!(10))).await;
        assert!(store.update(USER, 1, -1).await.is_empty());
    }

    #[tokio::test]
    async fn update_of_absent_product_is_a_noop() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 2, dec!(10))).await;
        let cart = store.update(USER, 99, 5).await;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[tokio::test]
    async fn remove_deletes_only_the_matching_item() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 1, dec!(5))).await;
        store.add(USER, item(2, 1, dec!(5))).await;
        let cart = store.remove(USER, 1).await;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, 2);
    }

    #[tokio::test]
    async fn remove_of_absent_product_leaves_cart_unchanged() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 2, dec!(10))).await;
        let before = store.get(USER).await;
        let after = store.remove(USER, 99).await;

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn clear_always_yields_an_empty_list() {
        let store = InMemoryCartStore::new();

        store.clear(USER).await;
        assert!(store.get(USER).await.is_empty());

        store.add(USER, item(1, 2, dec!(10))).await;
        store.add(USER, item(2, 1, dec!(3))).await;
        store.clear(USER).await;
        assert!(store.get(USER).await.is_empty());
    }

    #[tokio::test]
    async fn totals_are_derivable_by_summation() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 1, dec!(10))).await;
        let cart = store.add(USER, item(2, 2, dec!(5))).await;

        let total: Decimal = cart
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum();
        let count: i32 = cart.iter().map(|i| i.quantity).sum();

        assert_eq!(total, dec!(20));
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn carts_are_isolated_per_user() {
        let store = InMemoryCartStore::new();

        store.add(USER, item(1, 1, dec!(10))).await;
        store.add(OTHER_USER, item(2, 4, dec!(7))).await;
        store.clear(OTHER_USER).await;

        let cart = store.get(USER).await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, 1);
        assert!(store.get(OTHER_USER).await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_adds_for_one_user_do_not_lose_updates() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryCartStore::new());

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add(USER, item(1, 1, dec!(2))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let cart = store.get(USER).await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 50);
    }
}
