use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::decode::{lenient, lenient_map, lenient_seq, string_or_number};
use crate::error::AppResult;

/// A store's structured menu, as returned by `menu?lang=en&structured=true`.
///
/// Each table maps a short platform code (e.g. `"14SCREEN"`) to its record.
/// Absent groups decode to empty tables; an empty menu is still a valid menu.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Menu {
    #[serde(rename = "Categorization", default, deserialize_with = "lenient")]
    pub categorization: Categorization,
    #[serde(rename = "Coupons", default, deserialize_with = "lenient_map")]
    pub coupons: HashMap<String, Coupon>,
    #[serde(rename = "Flavors", default, deserialize_with = "lenient")]
    pub flavors: Flavors,
    #[serde(rename = "Products", default, deserialize_with = "lenient_map")]
    pub products: HashMap<String, Product>,
    #[serde(rename = "Sides", default, deserialize_with = "lenient")]
    pub sides: Sides,
    #[serde(rename = "Sizes", default, deserialize_with = "lenient")]
    pub sizes: Sizes,
    #[serde(rename = "Toppings", default, deserialize_with = "lenient")]
    pub toppings: Toppings,
    #[serde(rename = "Variants", default, deserialize_with = "lenient_map")]
    pub variants: HashMap<String, Variant>,
}

/// Browsing trees, each rooted at a top-level category.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Categorization {
    #[serde(rename = "Food", default, deserialize_with = "lenient")]
    pub food: Category,
    #[serde(rename = "Coupons", default, deserialize_with = "lenient")]
    pub coupons: Category,
    #[serde(rename = "PreconfiguredProducts", default, deserialize_with = "lenient")]
    pub preconfigured: Category,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Category {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    pub code: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient")]
    pub description: String,
    /// Product codes listed directly under this category.
    #[serde(rename = "Products", default, deserialize_with = "lenient_seq")]
    pub products: Vec<String>,
    #[serde(rename = "Categories", default, deserialize_with = "lenient_seq")]
    pub categories: Vec<Category>,
}

impl Category {
    fn find(&self, code: &str) -> Option<&Category> {
        if self.code == code {
            return Some(self);
        }
        self.categories.iter().find_map(|child| child.find(code))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Coupon {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    pub code: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(rename = "Price", default, deserialize_with = "string_or_number")]
    pub price: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Product {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    pub code: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(rename = "ProductType", default, deserialize_with = "lenient")]
    pub product_type: String,
    #[serde(rename = "Variants", default, deserialize_with = "lenient_seq")]
    pub variants: Vec<String>,
}

/// A concrete orderable size/crust of a product.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Variant {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    pub code: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "Price", default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(rename = "ProductCode", default, deserialize_with = "lenient")]
    pub product_code: String,
}

/// Record shared by the flavor, side, size and topping tables.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Entry {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    pub code: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient")]
    pub description: String,
}

pub type EntryTable = HashMap<String, Entry>;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Flavors {
    #[serde(rename = "BreadDipCombos", default, deserialize_with = "lenient_map")]
    pub bread_dip_combos: EntryTable,
    #[serde(rename = "Pasta", default, deserialize_with = "lenient_map")]
    pub pasta: EntryTable,
    #[serde(rename = "Pizza", default, deserialize_with = "lenient_map")]
    pub pizza: EntryTable,
    #[serde(rename = "Wings", default, deserialize_with = "lenient_map")]
    pub wings: EntryTable,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Sides {
    #[serde(rename = "Bread", default, deserialize_with = "lenient_map")]
    pub bread: EntryTable,
    #[serde(rename = "Dessert", default, deserialize_with = "lenient_map")]
    pub dessert: EntryTable,
    #[serde(rename = "GSalad", default, deserialize_with = "lenient_map")]
    pub salad: EntryTable,
    #[serde(rename = "Tots", default, deserialize_with = "lenient_map")]
    pub tots: EntryTable,
    #[serde(rename = "Wings", default, deserialize_with = "lenient_map")]
    pub wings: EntryTable,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Sizes {
    #[serde(rename = "Bread", default, deserialize_with = "lenient_map")]
    pub bread: EntryTable,
    #[serde(rename = "Dessert", default, deserialize_with = "lenient_map")]
    pub dessert: EntryTable,
    #[serde(rename = "Drinks", default, deserialize_with = "lenient_map")]
    pub drinks: EntryTable,
    #[serde(rename = "Pizza", default, deserialize_with = "lenient_map")]
    pub pizza: EntryTable,
    #[serde(rename = "Tots", default, deserialize_with = "lenient_map")]
    pub tots: EntryTable,
    #[serde(rename = "Wings", default, deserialize_with = "lenient_map")]
    pub wings: EntryTable,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Toppings {
    #[serde(rename = "Bread", default, deserialize_with = "lenient_map")]
    pub bread: EntryTable,
    #[serde(rename = "Pasta", default, deserialize_with = "lenient_map")]
    pub pasta: EntryTable,
    #[serde(rename = "Pizza", default, deserialize_with = "lenient_map")]
    pub pizza: EntryTable,
    #[serde(rename = "Sandwich", default, deserialize_with = "lenient_map")]
    pub sandwich: EntryTable,
    #[serde(rename = "Tots", default, deserialize_with = "lenient_map")]
    pub tots: EntryTable,
    #[serde(rename = "Wings", default, deserialize_with = "lenient_map")]
    pub wings: EntryTable,
}

impl Menu {
    /// Decodes a structured menu body. Fails only on unparsable JSON; a
    /// document of any other shape is an empty menu.
    pub fn from_json(body: &str) -> AppResult<Self> {
        let document: Value = serde_json::from_str(body)?;
        Ok(Menu::deserialize(document).unwrap_or_default())
    }

    // NOTE: code lists come straight from the tables, callers sort if they need order.
    pub fn coupon_codes(&self) -> Vec<&str> {
        self.coupons.keys().map(String::as_str).collect()
    }

    pub fn product_codes(&self) -> Vec<&str> {
        self.products.keys().map(String::as_str).collect()
    }

    pub fn variant_codes(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    pub fn coupon(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(code)
    }

    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    pub fn variant(&self, code: &str) -> Option<&Variant> {
        self.variants.get(code)
    }

    /// All variants belonging to `product_code`, ordered by variant code.
    pub fn variants_of(&self, product_code: &str) -> Vec<&Variant> {
        let mut variants: Vec<&Variant> = self
            .variants
            .values()
            .filter(|v| v.product_code == product_code)
            .collect();
        variants.sort_by(|a, b| a.code.cmp(&b.code));
        variants
    }

    /// Finds a category by code anywhere in the browsing trees.
    pub fn category(&self, code: &str) -> Option<&Category> {
        let trees = &self.categorization;
        [&trees.food, &trees.coupons, &trees.preconfigured]
            .into_iter()
            .find_map(|root| root.find(code))
    }
}
