use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::errors::Error;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub medicine_id: String,
    pub medicine_name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub prescription_id: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub updated_at: DateTime<Utc>,
}

pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn add_quantity(current: u32, extra: u32) -> Result<u32, Error> {
    current
        .checked_add(extra)
        .ok_or_else(|| Error::validation("quantity", "quantity is too large"))
}

impl Cart {
    pub fn empty(user_id: &str) -> Self {
        Self {
            id: Ulid::new().to_string(),
            user_id: user_id.to_string(),
            items: Vec::new(),
            total_amount: 0.0,
            updated_at: Utc::now(),
        }
    }

    pub fn quantity_of(&self, medicine_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.medicine_id == medicine_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Merges into an existing line for the same medicine.
    pub fn add(&mut self, item: CartItem) -> Result<(), Error> {
        match self
            .items
            .iter_mut()
            .find(|line| line.medicine_id == item.medicine_id)
        {
            Some(line) => {
                line.quantity = add_quantity(line.quantity, item.quantity)?;
                line.price = item.price;
                if item.prescription_id.is_some() {
                    line.prescription_id = item.prescription_id;
                }
            }
            None => self.items.push(item),
        }
        self.touch();
        Ok(())
    }

    /// Zero removes the line. Returns false when there is no such line.
    pub fn set_quantity(&mut self, medicine_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(medicine_id);
        }
        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.medicine_id == medicine_id)
        else {
            return false;
        };
        line.quantity = quantity;
        self.touch();
        true
    }

    pub fn remove(&mut self, medicine_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.medicine_id != medicine_id);
        let removed = self.items.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.total_amount = round_to_cents(self.items.iter().map(CartItem::line_total).sum());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem::new(id.to_string(), id.to_uppercase(), price, quantity, None)
    }

    #[test]
    fn add_merges_lines_and_recomputes_total() {
        let mut cart = Cart::empty("ana");
        cart.add(item("a", 4.99, 2)).unwrap();
        cart.add(item("b", 0.10, 3)).unwrap();
        cart.add(item("a", 4.99, 1)).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.quantity_of("a"), 3);
        assert_eq!(cart.total_amount, 15.27);
    }

    #[test]
    fn add_keeps_prescription_unless_replaced() {
        let mut cart = Cart::empty("ana");
        let mut first = item("rx", 12.5, 1);
        first.prescription_id = Some("p1".to_string());
        cart.add(first).unwrap();
        cart.add(item("rx", 12.5, 1)).unwrap();

        assert_eq!(cart.items[0].prescription_id.as_deref(), Some("p1"));
    }

    #[test]
    fn add_rejects_quantity_overflow_and_keeps_line() {
        let mut cart = Cart::empty("ana");
        cart.add(item("a", 1.0, 1)).unwrap();

        assert!(matches!(
            cart.add(item("a", 1.0, u32::MAX)),
            Err(Error::Validation { field, .. }) if field == "quantity"
        ));
        assert_eq!(cart.quantity_of("a"), 1);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::empty("ana");
        cart.add(item("a", 2.0, 2)).unwrap();

        assert!(cart.set_quantity("a", 5));
        assert_eq!(cart.total_amount, 10.0);

        assert!(cart.set_quantity("a", 0));
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_amount, 0.0);

        assert!(!cart.set_quantity("a", 1));
        assert!(!cart.remove("a"));
    }
}
