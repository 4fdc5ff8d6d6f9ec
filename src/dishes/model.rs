//! Dish entity model

use serde::{Deserialize, Serialize};

use crate::core::id::next_id;
use crate::core::store::Keyed;

/// A dish on the menu
///
/// Invariant: `price` is a strictly positive integer at all times after
/// creation or update; the validation chains enforce it before any mutator
/// runs. Dishes are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

/// Mutable dish fields as submitted in a request's data section
#[derive(Debug, Clone, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Dish {
    /// Build a new dish from a draft, assigning a fresh id
    pub fn create(draft: DishDraft) -> Self {
        Self {
            id: next_id(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, draft: DishDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image_url = draft.image_url;
    }
}

impl Keyed for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> DishDraft {
        DishDraft {
            name: "Taco".to_string(),
            description: "Crispy corn shell".to_string(),
            price: 5,
            image_url: "https://images.example/taco.png".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_a_fresh_id() {
        let a = Dish::create(draft());
        let b = Dish::create(draft());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Taco");
        assert_eq!(a.price, 5);
    }

    #[test]
    fn test_apply_overwrites_all_fields_but_keeps_id() {
        let mut dish = Dish::create(draft());
        let id = dish.id.clone();

        dish.apply(DishDraft {
            name: "Burrito".to_string(),
            description: "Wrapped".to_string(),
            price: 9,
            image_url: "https://images.example/burrito.png".to_string(),
        });

        assert_eq!(dish.id, id);
        assert_eq!(dish.name, "Burrito");
        assert_eq!(dish.price, 9);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let dish = Dish {
            id: "abc".to_string(),
            name: "Taco".to_string(),
            description: "d".to_string(),
            price: 5,
            image_url: "u".to_string(),
        };

        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(
            value,
            json!({"id": "abc", "name": "Taco", "description": "d", "price": 5, "image_url": "u"})
        );
    }
}
