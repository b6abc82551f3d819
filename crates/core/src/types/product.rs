//! Catalog types: products, variants, images, categories and inventory.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::SeoMetadata;
use super::id::{CategoryId, ImageId, ProductId, VariantId};

/// A sellable catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Original price shown struck through when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub inventory: Inventory,
    #[serde(default)]
    pub seo: SeoMetadata,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The image flagged primary, falling back to the lowest `order`.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.iter().min_by_key(|image| image.order))
    }

    /// Whether a higher compare-at price is set.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .is_some_and(|compare_at| compare_at > self.price)
    }

    /// Variants that are currently purchasable.
    pub fn active_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        self.variants.iter().filter(|variant| variant.is_active)
    }
}

/// Image attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ImageId,
    pub url: String,
    /// Alt text for accessibility.
    pub alt: String,
    pub is_primary: bool,
    /// Display position, ascending.
    pub order: u32,
}

/// A purchasable variation of a product (size, color, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: VariantId,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,
    pub sku: String,
    /// Units on hand for this variant.
    pub inventory: i64,
    /// Ordered option name/value pairs (e.g. Size: M, Color: Red).
    #[serde(default)]
    pub options: Vec<VariantOption>,
    pub is_active: bool,
}

impl ProductVariant {
    /// Value of the named option, if set.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| option.value.as_str())
    }
}

/// Option name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: String,
    pub value: String,
}

/// Catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    pub is_active: bool,
}

/// Stock tracking settings and level for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub track_inventory: bool,
    pub quantity: i64,
    pub low_stock_threshold: i64,
    pub allow_backorders: bool,
}

impl Inventory {
    /// Whether the product can be ordered right now.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        !self.track_inventory || self.allow_backorders || self.quantity > 0
    }

    /// Whether tracked stock is at or below the low-stock threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.track_inventory && self.quantity <= self.low_stock_threshold
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    fn widget() -> Product {
        serde_json::from_value(json!({
            "id": "42",
            "name": "Widget",
            "description": "A very good widget",
            "price": 19.99,
            "compareAtPrice": 24.99,
            "images": [
                { "id": "i2", "url": "https://cdn.example.com/2.jpg", "alt": "Back", "isPrimary": false, "order": 2 },
                { "id": "i1", "url": "https://cdn.example.com/1.jpg", "alt": "Front", "isPrimary": false, "order": 1 }
            ],
            "category": { "id": "c1", "name": "Gadgets", "slug": "gadgets", "isActive": true },
            "tags": ["new"],
            "variants": [
                {
                    "id": "v1", "name": "Small", "price": 19.99, "sku": "W-S", "inventory": 3,
                    "options": [{ "name": "Size", "value": "S" }], "isActive": true
                },
                {
                    "id": "v2", "name": "Large", "price": 21.99, "sku": "W-L", "inventory": 0,
                    "options": [{ "name": "Size", "value": "L" }], "isActive": false
                }
            ],
            "inventory": { "trackInventory": true, "quantity": 3, "lowStockThreshold": 5, "allowBackorders": false },
            "seo": { "title": "Widget" },
            "isActive": true,
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_product_prices_parse_exactly() {
        let product = widget();
        assert_eq!(product.price, Decimal::from_str("19.99").unwrap());
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_primary_image_falls_back_to_order() {
        let product = widget();
        assert_eq!(product.primary_image().unwrap().id.as_str(), "i1");
    }

    #[test]
    fn test_active_variants_and_options() {
        let product = widget();
        let active: Vec<_> = product.active_variants().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].option("Size"), Some("S"));
        assert_eq!(active[0].option("Color"), None);
    }

    #[test]
    fn test_inventory_stock_levels() {
        let product = widget();
        assert!(product.inventory.is_in_stock());
        assert!(product.inventory.is_low_stock());

        let sold_out = Inventory {
            track_inventory: true,
            quantity: 0,
            low_stock_threshold: 5,
            allow_backorders: false,
        };
        assert!(!sold_out.is_in_stock());

        let backorderable = Inventory {
            allow_backorders: true,
            ..sold_out
        };
        assert!(backorderable.is_in_stock());
    }
}
