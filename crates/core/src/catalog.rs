//! Product catalog: the product record, category filtering, and the default
//! seed used when no catalog has been persisted yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Image URI.
    pub image: String,
    pub description: String,
}

/// Category selection applied to the catalog view.
///
/// Parsed from a category token. Tokens outside the known set fall back to
/// [`CategoryFilter::All`] so the shopper never lands on an empty page by
/// accident; a known category that simply has no products does produce an
/// empty view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Token that selects the whole catalog.
    pub const ALL_TOKEN: &'static str = "all";

    /// Parse a category token.
    ///
    /// Accepts `all`, the category names (`vases`, `bowls`, `plates`) and the
    /// shelf aliases used by the shop navigation (`prep`, `serving`,
    /// `storage`). Anything else, including the `drinks` shelf which has no
    /// category behind it, selects the whole catalog.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "vases" | "prep" => Self::Only(Category::Vases),
            "bowls" | "serving" => Self::Only(Category::Bowls),
            "plates" | "storage" => Self::Only(Category::Plates),
            "all" => Self::All,
            other => {
                tracing::debug!(token = other, "Unknown category token, showing all products");
                Self::All
            }
        }
    }

    /// Canonical token for this filter.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_TOKEN,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }

    /// The matching products, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Number of products in each category, in [`Category::ALL`] order.
#[must_use]
pub fn category_counts(products: &[Product]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let count = products.iter().filter(|p| p.category == category).count();
            (category, count)
        })
        .collect()
}

/// Identifier for a newly created product.
///
/// Derived from the creation time in milliseconds, bumped past the largest
/// existing id when the clock would collide or run backwards.
#[must_use]
pub fn next_product_id(existing: &[Product], now: DateTime<Utc>) -> ProductId {
    let candidate = now.timestamp_millis();
    let next = existing
        .iter()
        .map(|p| p.id.as_i64())
        .max()
        .map_or(candidate, |max| candidate.max(max.saturating_add(1)));
    ProductId::new(next)
}

const VASE_IMAGE: &str = "https://cdn.poehali.dev/projects/03cdfc4b-c9d5-403b-9300-fbfb80a1303a/files/c6b39d23-50ac-495e-a184-e65410d39ff1.jpg";
const BOWL_IMAGE: &str = "https://cdn.poehali.dev/projects/03cdfc4b-c9d5-403b-9300-fbfb80a1303a/files/111dfe02-c713-43fe-8e81-d7d9e7e8c115.jpg";
const PLATE_IMAGE: &str = "https://cdn.poehali.dev/projects/03cdfc4b-c9d5-403b-9300-fbfb80a1303a/files/847895ae-1a4d-4159-9147-693fda418ce1.jpg";

/// The six products written on first run.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    let product = |id: i64, name: &str, price: u32, category, image: &str, description: &str| {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_units(price),
            category,
            image: image.to_owned(),
            description: description.to_owned(),
        }
    };

    vec![
        product(1, "Terracotta vase", 2500, Category::Vases, VASE_IMAGE, "Handmade, 25 cm tall"),
        product(2, "Clay bowl", 1800, Category::Bowls, BOWL_IMAGE, "Made for table serving"),
        product(3, "Decorative plate", 1500, Category::Plates, PLATE_IMAGE, "One-off design, 30 cm across"),
        product(4, "Clay jug", 3200, Category::Vases, VASE_IMAGE, "Classic shape, holds 1.5 l"),
        product(5, "Ceramic salad bowl", 2000, Category::Bowls, BOWL_IMAGE, "Glazed finish"),
        product(6, "Serving platter", 2800, Category::Plates, PLATE_IMAGE, "Oval, 35 cm"),
    ]
}
