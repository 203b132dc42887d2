//! Catalog filtering and sorting.
//!
//! The product listing supports a category filter and four sort orders,
//! applied client-side over the fetched list.

use std::str::FromStr;

use shopfront_core::Product;

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "name-asc" => Ok(Self::NameAscending),
            "name-desc" => Ok(Self::NameDescending),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Filter by exact category match, then sort.
///
/// No filter and no sort returns the list unchanged (insertion order).
#[must_use]
pub fn apply(
    products: Vec<Product>,
    category: Option<&str>,
    sort: Option<SortKey>,
) -> Vec<Product> {
    let mut filtered: Vec<Product> = match category {
        Some(category) => products
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        None => products,
    };

    if let Some(sort) = sort {
        match sort {
            SortKey::PriceAscending => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceDescending => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::NameAscending => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::NameDescending => filtered.sort_by(|a, b| b.name.cmp(&a.name)),
        }
    }

    filtered
}
