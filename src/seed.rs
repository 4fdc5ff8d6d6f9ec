//! Sample records loaded into the repositories at startup
//!
//! Ids are fixed so restarts and docs stay stable; they use the same 32-hex
//! format the id generator produces.

use serde_json::{Map, Value};

use crate::dishes::model::Dish;
use crate::orders::model::{Order, OrderLine, OrderStatus};

/// The starting menu
pub fn dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: "d351db2b49b69679504652ea1d6c972c".to_string(),
            name: "Dolcelatte and chickpea spaghetti".to_string(),
            description: "Spaghetti topped with a blend of dolcelatte and fresh chickpeas"
                .to_string(),
            price: 19,
            image_url: "https://images.example/spaghetti.jpg".to_string(),
        },
        Dish {
            id: "3c637d011d844ebab1205fef8a7e36ea".to_string(),
            name: "Century eggs".to_string(),
            description: "Whole eggs preserved in clay and ash for a few months".to_string(),
            price: 3,
            image_url: "https://images.example/eggs.jpg".to_string(),
        },
        Dish {
            id: "90c3d873684bf381dfab29034b5bba73".to_string(),
            name: "Falafel and tahini bagel".to_string(),
            description: "A warm bagel filled with falafel and tahini".to_string(),
            price: 6,
            image_url: "https://images.example/bagel.jpg".to_string(),
        },
    ]
}

/// A couple of orders in different states
pub fn orders() -> Vec<Order> {
    let menu = dishes();
    vec![
        Order {
            id: "f6069a542257054114138301947672ba".to_string(),
            deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
            mobile_number: "(202) 456-1111".to_string(),
            status: OrderStatus::OutForDelivery,
            dishes: vec![line(&menu[0], 1)],
        },
        Order {
            id: "5a887d326e83d3c5bdcbee398ea32aff".to_string(),
            deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".to_string(),
            mobile_number: "(505) 143-3369".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![line(&menu[1], 3), line(&menu[2], 1)],
        },
    ]
}

fn line(dish: &Dish, quantity: i64) -> OrderLine {
    let mut fields = Map::new();
    fields.insert("id".to_string(), Value::String(dish.id.clone()));
    fields.insert("name".to_string(), Value::String(dish.name.clone()));
    fields.insert(
        "description".to_string(),
        Value::String(dish.description.clone()),
    );
    fields.insert("price".to_string(), Value::from(dish.price));
    fields.insert(
        "image_url".to_string(),
        Value::String(dish.image_url.clone()),
    );
    OrderLine {
        quantity,
        dish: fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_well_formed() {
        let mut ids: Vec<String> = dishes().into_iter().map(|d| d.id).collect();
        ids.extend(orders().into_iter().map(|o| o.id));

        for id in &ids {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }

        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_seed_records_satisfy_the_invariants() {
        for dish in dishes() {
            assert!(dish.price > 0);
            assert!(!dish.name.is_empty());
        }
        for order in orders() {
            assert!(!order.dishes.is_empty());
            assert!(order.dishes.iter().all(|l| l.quantity > 0));
        }
    }

    #[test]
    fn test_seed_contains_a_pending_order() {
        // Keeps the delete flow demonstrable out of the box.
        assert!(orders().iter().any(|o| o.status == OrderStatus::Pending));
    }
}
