//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Catalog entry
///
/// `id` is the lookup key but is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in BRL (no sign or range enforcement)
    pub price: Decimal,
    /// Opaque asset reference
    pub image: String,
    pub category: Category,
    /// Promotional "Popular" badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

impl MenuItem {
    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub popular: Option<bool>,
}

impl MenuItemUpdate {
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.category.is_none()
            && self.popular.is_none()
    }

    /// Merge the present fields over `item`
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(image) = &self.image {
            item.image = image.clone();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(popular) = self.popular {
            item.popular = Some(popular);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem {
            id: "burger-1".to_string(),
            name: "Smash Clássico".to_string(),
            description: "Blend bovino 150g".to_string(),
            price: Decimal::new(3290, 2),
            image: "burger-classico.jpg".to_string(),
            category: Category::Burgers,
            popular: None,
        }
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut item = burger();
        let update = MenuItemUpdate {
            price: Some(Decimal::new(3490, 2)),
            popular: Some(true),
            ..Default::default()
        };
        update.apply_to(&mut item);

        assert_eq!(item.price, Decimal::new(3490, 2));
        assert_eq!(item.popular, Some(true));
        assert_eq!(item.name, "Smash Clássico");
        assert_eq!(item.category, Category::Burgers);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut item = burger();
        let update = MenuItemUpdate::default();
        assert!(update.is_empty());
        update.apply_to(&mut item);
        assert_eq!(item, burger());
    }

    #[test]
    fn test_popular_omitted_when_absent() {
        let json = serde_json::to_value(burger()).unwrap();
        assert!(json.get("popular").is_none());
        assert_eq!(json["category"], "burgers");
    }
}
