//! Cart store
//!
//! Same ownership model as [`crate::catalog::MenuStore`]: cloneable handles
//! over one shared list. Entries are keyed by menu item id and never hold a
//! quantity below 1; setting a quantity of zero or less removes the entry.

use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{CartItem, MenuItem, total_amount, total_quantity};
use tokio::sync::watch;

use crate::observable::{ObservableList, Snapshot};
use crate::utils::validation::{MAX_NOTE_LEN, normalize_note, validate_optional_text};

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: ObservableList<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Snapshot<CartItem> {
        self.items.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<CartItem>> {
        self.items.subscribe()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<CartItem> {
        self.items().iter().find(|c| c.id() == id).cloned()
    }

    /// Add one unit of `item`
    ///
    /// Increments the existing entry with the same id, otherwise appends a new
    /// entry with quantity 1. The entry keeps the item data captured on first
    /// add.
    pub fn add_to_cart(&self, item: &MenuItem) {
        self.items.replace_with(|items| {
            let mut next = items.to_vec();
            match next.iter_mut().find(|c| c.id() == item.id) {
                Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
                None => next.push(CartItem::new(item.clone())),
            }
            Some(next)
        });
        tracing::debug!(id = %item.id, "Added to cart");
    }

    /// Remove the entry for `id`; returns whether anything was removed
    pub fn remove_from_cart(&self, id: &str) -> bool {
        let removed = self.items.replace_with(|items| {
            if !items.iter().any(|c| c.id() == id) {
                return None;
            }
            Some(items.iter().filter(|c| c.id() != id).cloned().collect())
        });
        if removed {
            tracing::debug!(id = %id, "Removed from cart");
        }
        removed
    }

    /// Set the quantity of `id`
    ///
    /// `quantity <= 0` removes the entry. Values above `u32::MAX` saturate.
    /// Unknown ids are ignored.
    pub fn set_quantity(&self, id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let updated = self.items.replace_with(|items| {
            let idx = items.iter().position(|c| c.id() == id)?;
            if items[idx].quantity == quantity {
                return None;
            }
            let mut next = items.to_vec();
            next[idx].quantity = quantity;
            Some(next)
        });
        if updated {
            tracing::debug!(id = %id, quantity, "Cart quantity set");
        }
        updated
    }

    /// Attach a note (e.g. "sem cebola") to an entry
    ///
    /// The note is trimmed and a blank note clears it. Fails only when the note
    /// exceeds [`MAX_NOTE_LEN`]; unknown ids are ignored and return `Ok(false)`.
    pub fn set_notes(&self, id: &str, notes: Option<String>) -> Result<bool, AppError> {
        let notes = normalize_note(notes);
        validate_optional_text(&notes, "notes", MAX_NOTE_LEN)?;
        let updated = self.items.replace_with(|items| {
            let idx = items.iter().position(|c| c.id() == id)?;
            if items[idx].notes == notes {
                return None;
            }
            let mut next = items.to_vec();
            next[idx].notes = notes;
            Some(next)
        });
        Ok(updated)
    }

    pub fn clear_cart(&self) {
        let cleared = self
            .items
            .replace_with(|items| (!items.is_empty()).then(Vec::new));
        if cleared {
            tracing::debug!("Cart cleared");
        }
    }

    /// Sum of price × quantity over all entries
    pub fn get_total(&self) -> Decimal {
        total_amount(&self.items())
    }

    /// Sum of quantities
    pub fn get_item_count(&self) -> u32 {
        total_quantity(&self.items())
    }

    pub fn line_total(&self, id: &str) -> Option<Decimal> {
        self.get(id).map(|c| c.line_total())
    }
}
