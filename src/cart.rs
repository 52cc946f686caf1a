//! Ephemeral order cart over the showcase catalog.
//!
//! Cart state lives for one invocation only and is never persisted,
//! unlike the catalog store.

use serde::Serialize;

use crate::catalog::StaticWork;

/// One (work, quantity) pairing. At most one line exists per work id.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub work: StaticWork,
    pub quantity: u32,
}

impl CartLine {
    /// Line total, treating a missing price as zero.
    pub fn subtotal(&self) -> u64 {
        self.work.price.unwrap_or(0) * u64::from(self.quantity)
    }
}

#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the existing line for this work, or start one at quantity 1.
    /// Insertion order is preserved for display.
    pub fn add(&mut self, work: &StaticWork) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.work.id == work.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                work: work.clone(),
                quantity: 1,
            });
        }
    }

    /// Set a line's quantity exactly; zero or below removes the line.
    /// Quantities beyond `u32::MAX` are clamped so a line never ends up
    /// back at zero through wraparound.
    pub fn set_quantity(&mut self, work_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(work_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.work.id == work_id) {
            line.quantity = quantity;
        }
    }

    /// Idempotent removal.
    pub fn remove(&mut self, work_id: i64) {
        self.lines.retain(|l| l.work.id != work_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived grand total; never stored.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: i64, price: Option<u64>) -> StaticWork {
        StaticWork {
            id,
            title: format!("Work {id}"),
            category: "Брендинг".to_string(),
            main_image: String::new(),
            images: Vec::new(),
            description: String::new(),
            details: String::new(),
            price,
            tags: Vec::new(),
        }
    }

    #[test]
    fn add_merges_lines_per_work_id() {
        let mut cart = Cart::new();
        let a = work(1, Some(1000));
        let b = work(2, Some(500));

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].work.id, 1);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn quantity_floor_removes_the_line() {
        let mut cart = Cart::new();
        let a = work(1, Some(1000));
        cart.add(&a);

        cart.set_quantity(1, 0);
        assert!(cart.is_empty());

        cart.add(&a);
        cart.set_quantity(1, -1);
        assert!(cart.is_empty());

        // A later add starts a fresh line at quantity 1.
        cart.add(&a);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn set_quantity_is_exact_for_positive_values() {
        let mut cart = Cart::new();
        cart.add(&work(1, Some(1000)));
        cart.set_quantity(1, 5);
        assert_eq!(cart.lines()[0].quantity, 5);

        // Unknown ids are ignored.
        cart.set_quantity(99, 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_clamps_instead_of_wrapping() {
        let mut cart = Cart::new();
        cart.add(&work(1, Some(1000)));

        cart.set_quantity(1, i64::from(u32::MAX) + 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);

        cart.set_quantity(1, i64::from(u32::MAX) + 2);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn total_treats_missing_price_as_zero() {
        let mut cart = Cart::new();
        cart.add(&work(1, Some(1000)));
        cart.set_quantity(1, 2);
        cart.add(&work(2, None));
        cart.set_quantity(2, 3);

        assert_eq!(cart.total(), 2000);
    }

    #[test]
    fn clear_and_remove_are_idempotent() {
        let mut cart = Cart::new();
        cart.add(&work(1, Some(1000)));

        cart.remove(2);
        assert_eq!(cart.len(), 1);

        cart.remove(1);
        cart.remove(1);
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
