//! Menu management
//!
//! Staff-side editing of the shared catalog. The admin console holds a handle
//! to the same [`MenuStore`] the customer sessions read from, so every change
//! is visible to them on their next snapshot.
//!
//! Unlike the raw store, the console validates its input and reports unknown
//! ids as errors.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, MenuItem, MenuItemUpdate};
use shared::money::{MAX_PRICE, format_brl};

use crate::catalog::MenuStore;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    validate_text_len,
};

fn validate_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(
            AppError::with_message(ErrorCode::MenuItemInvalidPrice, "price must not be negative")
                .with_detail("field", "price"),
        );
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("price must not exceed {}", format_brl(MAX_PRICE)),
        )
        .with_detail("field", "price"));
    }
    Ok(())
}

fn validate_create(item: &MenuItem) -> AppResult<()> {
    validate_required_text(&item.id, "id", MAX_NAME_LEN)?;
    validate_required_text(&item.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&item.description, "description", MAX_NOTE_LEN)?;
    validate_text_len(&item.image, "image", MAX_URL_LEN)?;
    validate_price(item.price)
}

fn validate_update(update: &MenuItemUpdate) -> AppResult<()> {
    if update.is_empty() {
        return Err(AppError::invalid_request("update has no fields"));
    }
    if let Some(name) = &update.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&update.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&update.image, "image", MAX_URL_LEN)?;
    if let Some(price) = update.price {
        validate_price(price)?;
    }
    Ok(())
}

fn item_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id)
}

#[derive(Debug, Clone)]
pub struct AdminConsole {
    menu: MenuStore,
}

impl AdminConsole {
    pub fn new(menu: MenuStore) -> Self {
        Self { menu }
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    /// Catalog grouped by category, in tab order; empty categories included
    pub fn overview(&self) -> Vec<(Category, Vec<MenuItem>)> {
        let items = self.menu.items();
        Category::ALL
            .into_iter()
            .map(|category| {
                let in_category = items
                    .iter()
                    .filter(|i| i.category == category)
                    .cloned()
                    .collect();
                (category, in_category)
            })
            .collect()
    }

    pub fn create_item(&self, item: MenuItem) -> AppResult<()> {
        validate_create(&item)?;
        tracing::info!(id = %item.id, category = %item.category, "Admin created menu item");
        self.menu.add_menu_item(item);
        Ok(())
    }

    /// Apply `update` to the first item with `id`
    pub fn edit_item(&self, id: &str, update: &MenuItemUpdate) -> AppResult<MenuItem> {
        validate_update(update)?;
        if !self.menu.update_menu_item(id, update) {
            return Err(item_not_found(id));
        }
        tracing::info!(id = %id, "Admin edited menu item");
        self.menu.find(id).ok_or_else(|| item_not_found(id))
    }

    /// Remove every item with `id`; returns how many were removed
    pub fn delete_item(&self, id: &str) -> AppResult<usize> {
        match self.menu.remove_menu_item(id) {
            0 => Err(item_not_found(id)),
            removed => {
                tracing::info!(id = %id, removed, "Admin deleted menu item");
                Ok(removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: "Smash Duplo".to_string(),
            description: "Dois smash 120g e cheddar".to_string(),
            price: Decimal::new(3890, 2),
            image: "burger-bacon.jpg".to_string(),
            category: Category::Burgers,
            popular: None,
        }
    }

    #[test]
    fn test_overview_groups_in_tab_order() {
        let admin = AdminConsole::new(MenuStore::with_seed_catalog());
        let overview = admin.overview();
        let categories: Vec<_> = overview.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL);
        let sizes: Vec<_> = overview.iter().map(|(_, items)| items.len()).collect();
        assert_eq!(sizes, [5, 3, 3, 2]);
    }

    #[test]
    fn test_create_visible_to_other_handles() {
        let store = MenuStore::empty();
        let admin = AdminConsole::new(store.clone());
        let rx = store.subscribe();

        admin.create_item(draft("burger-9")).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(store.find("burger-9").unwrap().name, "Smash Duplo");
    }

    #[test]
    fn test_create_validation() {
        let admin = AdminConsole::new(MenuStore::empty());

        let mut blank_name = draft("x");
        blank_name.name = "  ".into();
        assert_eq!(admin.create_item(blank_name).unwrap_err().code, ErrorCode::ValidationFailed);

        let mut blank_id = draft("");
        blank_id.id = String::new();
        assert!(admin.create_item(blank_id).is_err());

        let mut long_desc = draft("x");
        long_desc.description = "d".repeat(MAX_NOTE_LEN + 1);
        assert!(admin.create_item(long_desc).is_err());

        let mut long_image = draft("x");
        long_image.image = "i".repeat(MAX_URL_LEN + 1);
        assert!(admin.create_item(long_image).is_err());

        let mut negative = draft("x");
        negative.price = Decimal::new(-1, 2);
        assert_eq!(
            admin.create_item(negative).unwrap_err().code,
            ErrorCode::MenuItemInvalidPrice
        );

        let mut empty_desc = draft("ok");
        empty_desc.description = String::new();
        assert!(admin.create_item(empty_desc).is_ok());

        assert_eq!(admin.menu().len(), 1);
    }

    #[test]
    fn test_edit_item() {
        let admin = AdminConsole::new(MenuStore::with_seed_catalog());

        let edited = admin
            .edit_item("drink-1", &MenuItemUpdate {
                price: Some(Decimal::new(890, 2)),
                popular: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(edited.price, Decimal::new(890, 2));
        assert!(edited.is_popular());

        let err = admin
            .edit_item("drink-9", &MenuItemUpdate::price(Decimal::ONE))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);

        let err = admin
            .edit_item("drink-1", &MenuItemUpdate::price(Decimal::MAX))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
        assert_eq!(err.message, "price must not exceed R$ 1.000.000,00");
        assert!(admin.edit_item("drink-1", &MenuItemUpdate::price(MAX_PRICE)).is_ok());

        let err = admin.edit_item("drink-1", &MenuItemUpdate::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);

        let err = admin
            .edit_item("drink-1", &MenuItemUpdate {
                name: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_delete_item() {
        let admin = AdminConsole::new(MenuStore::with_seed_catalog());
        assert_eq!(admin.delete_item("dessert-1").unwrap(), 1);
        assert_eq!(admin.menu().len(), 12);
        assert_eq!(
            admin.delete_item("dessert-1").unwrap_err().code,
            ErrorCode::MenuItemNotFound
        );
    }
}
