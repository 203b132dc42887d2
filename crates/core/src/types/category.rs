//! Product categories.
//!
//! Categories are a static enumeration, not derived from product data and
//! with no entity lifecycle.

use serde::{Deserialize, Serialize};

use super::id::CategoryId;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// The fixed category set.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new(1),
            name: "Electronics".to_string(),
            description: "Electronic devices and accessories".to_string(),
        },
        Category {
            id: CategoryId::new(2),
            name: "Clothing".to_string(),
            description: "Apparel and fashion items".to_string(),
        },
        Category {
            id: CategoryId::new(3),
            name: "Home".to_string(),
            description: "Household items and furniture".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_categories() {
        let cats = categories();
        assert_eq!(cats.len(), 3);
        let names: Vec<_> = cats.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Electronics", "Clothing", "Home"]);
    }

    #[test]
    fn test_categories_are_stable() {
        // Same set every call, ids 1..=3 in order.
        assert_eq!(categories(), categories());
        assert_eq!(categories()[0].id, CategoryId::new(1));
    }
}
