use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub menu_item_id: Uuid,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i32,
}

/// Every cart mutation goes through one of these actions; the stored cart
/// is only ever changed by `Cart::apply`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    AddItem {
        menu_item_id: Uuid,
        name: String,
        unit_price: i64,
        quantity: i32,
    },
    RemoveItem {
        menu_item_id: Uuid,
    },
    SetQuantity {
        menu_item_id: Uuid,
        quantity: i32,
    },
    Clear,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem {
                menu_item_id,
                name,
                unit_price,
                quantity,
            } => {
                if quantity <= 0 {
                    return;
                }
                match self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
                    Some(line) => line.quantity += quantity,
                    None => self.lines.push(CartLine {
                        menu_item_id,
                        name,
                        unit_price,
                        quantity,
                    }),
                }
            }
            CartAction::RemoveItem { menu_item_id } => {
                self.lines.retain(|l| l.menu_item_id != menu_item_id);
            }
            CartAction::SetQuantity {
                menu_item_id,
                quantity,
            } => {
                if quantity <= 0 {
                    self.lines.retain(|l| l.menu_item_id != menu_item_id);
                } else if let Some(line) =
                    self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id)
                {
                    line.quantity = quantity;
                }
            }
            CartAction::Clear => self.lines.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * l.quantity as i64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(id: Uuid, qty: i32) -> CartAction {
        CartAction::AddItem {
            menu_item_id: id,
            name: "Jollof rice".into(),
            unit_price: 1500,
            quantity: qty,
        }
    }

    #[test]
    fn add_merges_existing_lines() {
        let id = Uuid::new_v4();
        let mut cart = Cart::default();

        cart.apply(add(id, 2));
        cart.apply(add(id, 3));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
        assert_eq!(cart.subtotal(), 7500);
    }

    #[test]
    fn remove_of_absent_item_is_a_noop() {
        let mut cart = Cart::default();
        cart.apply(add(Uuid::new_v4(), 1));

        cart.apply(CartAction::RemoveItem {
            menu_item_id: Uuid::new_v4(),
        });

        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn set_quantity_to_zero_removes_the_line() {
        let id = Uuid::new_v4();
        let mut cart = Cart::default();
        cart.apply(add(id, 2));

        cart.apply(CartAction::SetQuantity {
            menu_item_id: id,
            quantity: 0,
        });

        assert!(cart.is_empty());
    }

    #[test]
    fn add_with_non_positive_quantity_is_rejected() {
        let mut cart = Cart::default();

        cart.apply(add(Uuid::new_v4(), 0));
        cart.apply(add(Uuid::new_v4(), -3));

        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::default();
        cart.apply(add(Uuid::new_v4(), 1));
        cart.apply(add(Uuid::new_v4(), 4));

        cart.apply(CartAction::Clear);

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn actions_round_trip_through_json() {
        let action = CartAction::SetQuantity {
            menu_item_id: Uuid::new_v4(),
            quantity: 2,
        };

        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"set_quantity\""));

        let back: CartAction = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, CartAction::SetQuantity { quantity: 2, .. }));
    }
}
