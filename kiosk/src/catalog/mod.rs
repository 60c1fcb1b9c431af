//! Menu catalog store
//!
//! Holds the orderable items for the whole process. Handles are cheap to
//! clone and all clones share one catalog, so the admin console and the
//! customer session see each other's changes immediately.
//!
//! Lookups use `id` equality; duplicate ids are allowed. An update touches
//! only the first matching entry, a removal drops every matching entry.

pub mod seed;

use shared::models::{Category, MenuItem, MenuItemUpdate};
use tokio::sync::watch;

use crate::observable::{ObservableList, Snapshot};

#[derive(Debug, Clone)]
pub struct MenuStore {
    items: ObservableList<MenuItem>,
}

impl MenuStore {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: ObservableList::new(items),
        }
    }

    /// Store initialised with the built-in catalog
    pub fn with_seed_catalog() -> Self {
        Self::new(seed::menu_items())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Read-only snapshot of the catalog
    pub fn items(&self) -> Snapshot<MenuItem> {
        self.items.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<MenuItem>> {
        self.items.subscribe()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// First entry with the given id
    pub fn find(&self, id: &str) -> Option<MenuItem> {
        self.items().iter().find(|i| i.id == id).cloned()
    }

    /// Items of one category, catalog order preserved
    pub fn by_category(&self, category: Category) -> Vec<MenuItem> {
        self.items()
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    pub fn popular(&self) -> Vec<MenuItem> {
        self.items()
            .iter()
            .filter(|i| i.is_popular())
            .cloned()
            .collect()
    }

    /// Append unconditionally (no duplicate-id check)
    pub fn add_menu_item(&self, item: MenuItem) {
        tracing::debug!(id = %item.id, name = %item.name, "Menu item added");
        self.items.replace_with(|items| {
            let mut next = items.to_vec();
            next.push(item);
            Some(next)
        });
    }

    /// Merge `update` into the first entry matching `id`
    ///
    /// Returns `false` (and changes nothing) when no entry matches.
    pub fn update_menu_item(&self, id: &str, update: &MenuItemUpdate) -> bool {
        let updated = self.items.replace_with(|items| {
            let idx = items.iter().position(|i| i.id == id)?;
            let mut next = items.to_vec();
            update.apply_to(&mut next[idx]);
            Some(next)
        });
        if updated {
            tracing::debug!(id = %id, "Menu item updated");
        } else {
            tracing::debug!(id = %id, "Menu item update ignored: no such item");
        }
        updated
    }

    /// Remove every entry matching `id`; returns how many were removed
    pub fn remove_menu_item(&self, id: &str) -> usize {
        let mut removed = 0;
        self.items.replace_with(|items| {
            let next: Vec<MenuItem> = items.iter().filter(|i| i.id != id).cloned().collect();
            removed = items.len() - next.len();
            (removed > 0).then_some(next)
        });
        tracing::debug!(id = %id, removed, "Menu item removal");
        removed
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn item(id: &str, cents: i64, category: Category) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            image: "placeholder.jpg".to_string(),
            category,
            popular: None,
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = MenuStore::with_seed_catalog();
        assert_eq!(store.len(), 13);
        assert_eq!(store.find("side-2").unwrap().name, "Onion Rings");
        assert_eq!(store.by_category(Category::Desserts).len(), 2);
        assert_eq!(store.popular().len(), 4);
    }

    #[test]
    fn test_add_appends_even_with_duplicate_id() {
        let store = MenuStore::empty();
        store.add_menu_item(item("b1", 1000, Category::Burgers));
        store.add_menu_item(item("b1", 2000, Category::Burgers));

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, Decimal::new(1000, 2));
        assert_eq!(items[1].price, Decimal::new(2000, 2));
    }

    #[test]
    fn test_update_first_match_only() {
        let store = MenuStore::new(vec![
            item("b1", 1000, Category::Burgers),
            item("b1", 2000, Category::Burgers),
        ]);

        assert!(store.update_menu_item("b1", &MenuItemUpdate::price(Decimal::from(5))));

        let items = store.items();
        assert_eq!(items[0].price, Decimal::from(5));
        assert_eq!(items[1].price, Decimal::new(2000, 2));
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let store = MenuStore::with_seed_catalog();
        let before = store.items();
        let rx = store.subscribe();

        let updated = store.update_menu_item("nonexistent", &MenuItemUpdate::price(Decimal::ONE));

        assert!(!updated);
        assert!(Arc::ptr_eq(&before, &store.items()));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_remove_all_matches() {
        let store = MenuStore::new(vec![
            item("b1", 1000, Category::Burgers),
            item("s1", 500, Category::Sides),
            item("b1", 2000, Category::Burgers),
        ]);

        assert_eq!(store.remove_menu_item("b1"), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, "s1");

        assert_eq!(store.remove_menu_item("b1"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let store = MenuStore::empty();
        let mut rx = store.subscribe();
        let first = store.items();

        store.add_menu_item(item("d1", 790, Category::Drinks));
        assert!(rx.has_changed().unwrap());
        let second = rx.borrow_and_update().clone();
        assert!(!Arc::ptr_eq(&first, &second));

        store.update_menu_item("d1", &MenuItemUpdate {
            popular: Some(true),
            ..Default::default()
        });
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update()[0].is_popular());

        store.remove_menu_item("d1");
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn test_category_move_via_update() {
        let store = MenuStore::new(vec![item("x", 100, Category::Sides)]);
        store.update_menu_item("x", &MenuItemUpdate {
            category: Some(Category::Desserts),
            ..Default::default()
        });
        assert!(store.by_category(Category::Sides).is_empty());
        assert_eq!(store.by_category(Category::Desserts).len(), 1);
    }

    #[test]
    fn test_negative_and_zero_prices_accepted() {
        let store = MenuStore::empty();
        store.add_menu_item(item("free", 0, Category::Sides));
        store.add_menu_item(item("refund", -100, Category::Sides));
        assert_eq!(store.len(), 2);
    }
}
