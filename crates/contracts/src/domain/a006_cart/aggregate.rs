//! Client-side cart and checkout form

use crate::domain::a001_product::aggregate::Product;
use crate::domain::a003_discount::aggregate::{ApplyDiscountRequest, DiscountApplication};
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub image: Option<String>,
    pub quantity: u32,
    pub stock: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub discount: Option<DiscountApplication>,
}

impl Cart {
    /// Adds `quantity` units; an existing line is incremented. Quantity is
    /// capped at stock. Returns the resulting line quantity (0 when out of stock).
    pub fn add(&mut self, product: &Product, quantity: u32) -> u32 {
        if product.stock == 0 || quantity == 0 {
            return self.quantity_of(product.id);
        }
        self.discount = None;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.stock = product.stock;
            line.quantity = line.quantity.saturating_add(quantity).min(product.stock);
            return line.quantity;
        }

        let line = CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.main_image().map(str::to_string),
            quantity: quantity.min(product.stock),
            stock: product.stock,
        };
        let q = line.quantity;
        self.lines.push(line);
        q
    }

    /// Sets a line quantity within `1..=stock`; 0 removes the line
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            let q = quantity.min(line.stock.max(1));
            if q != line.quantity {
                line.quantity = q;
                self.discount = None;
            }
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            self.discount = None;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = None;
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        round_cents(self.lines.iter().map(CartLine::line_total).sum())
    }

    pub fn product_ids(&self) -> Vec<i64> {
        self.lines.iter().map(|l| l.product_id).collect()
    }

    /// Stores a discount priced for `request` if the cart still holds the
    /// same products and subtotal. Returns false and leaves the cart alone otherwise.
    pub fn accept_discount(
        &mut self,
        request: &ApplyDiscountRequest,
        application: DiscountApplication,
    ) -> bool {
        let same_value = (self.subtotal() - request.order_value).abs() < 0.005;
        if self.is_empty() || !same_value || self.product_ids() != request.product_ids {
            return false;
        }
        self.discount = Some(application);
        true
    }

    pub fn discount_amount(&self) -> f64 {
        self.discount
            .as_ref()
            .map_or(0.0, |d| d.discount_amount.clamp(0.0, self.subtotal()))
    }

    pub fn total(&self) -> f64 {
        round_cents(self.subtotal() - self.discount_amount())
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ============================================================================
// Checkout
// ============================================================================

pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const NOTE: &str = "note";
}

pub const NOTE_MAX_CHARS: usize = 500;

const NAME_RULES: ValidationRules = ValidationRules::required().with_length(Some(2), Some(100));
const PHONE_RULES: ValidationRules = ValidationRules::required().with_length(Some(7), Some(20));
const ADDRESS_RULES: ValidationRules = ValidationRules::required().with_length(Some(5), Some(255));
const NOTE_RULES: ValidationRules = ValidationRules::none().with_length(None, Some(NOTE_MAX_CHARS));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub note: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            fields::FULL_NAME,
            NAME_RULES.validate_string(&self.full_name, "Full name"),
        );
        errors.check(fields::PHONE, PHONE_RULES.validate_string(&self.phone, "Phone"));
        let phone_ok = self
            .phone
            .trim()
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
        if !phone_ok {
            errors.insert(fields::PHONE, "Phone may contain only digits, spaces and + - ( )");
        }
        errors.check(
            fields::ADDRESS,
            ADDRESS_RULES.validate_string(&self.address, "Address"),
        );
        errors.check(fields::NOTE, NOTE_RULES.validate_string(&self.note, "Note"));
        errors.into_result()
    }

    pub fn note_chars_left(&self) -> usize {
        NOTE_MAX_CHARS.saturating_sub(self.note.trim().chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            images: vec![format!("/img/{}.jpg", id)],
            brand: None,
            category: None,
            stock,
            sale: false,
            description: None,
            reviews: vec![],
        }
    }

    fn applied(amount: f64) -> DiscountApplication {
        DiscountApplication {
            discount_id: Some(1),
            code: "SAVE".into(),
            discount_amount: amount,
            final_amount: 0.0,
        }
    }

    #[test]
    fn test_add_increments_and_caps_at_stock() {
        let mut cart = Cart::default();
        let p = product(1, 10.0, 3);
        assert_eq!(cart.add(&p, 2), 2);
        assert_eq!(cart.add(&p, 2), 3);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.add(&product(2, 5.0, 0), 1), 0);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].image.as_deref(), Some("/img/1.jpg"));
    }

    #[test]
    fn test_subtotal_and_total_items() {
        let mut cart = Cart::default();
        cart.add(&product(1, 19.99, 10), 2);
        cart.add(&product(2, 5.5, 10), 1);
        assert_eq!(cart.subtotal(), 45.48);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.product_ids(), vec![1, 2]);
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut cart = Cart::default();
        cart.add(&product(1, 10.0, 4), 1);
        cart.set_quantity(1, 9);
        assert_eq!(cart.quantity_of(1), 4);
        cart.set_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_discount_never_exceeds_subtotal_and_resets_on_change() {
        let mut cart = Cart::default();
        cart.add(&product(1, 10.0, 5), 1);
        cart.discount = Some(applied(25.0));
        assert_eq!(cart.discount_amount(), 10.0);
        assert_eq!(cart.total(), 0.0);

        cart.add(&product(1, 10.0, 5), 1);
        assert!(cart.discount.is_none());
        assert_eq!(cart.total(), 20.0);
    }

    fn request_for(cart: &Cart) -> ApplyDiscountRequest {
        ApplyDiscountRequest {
            code: "SAVE".into(),
            order_value: cart.subtotal(),
            product_ids: cart.product_ids(),
        }
    }

    #[test]
    fn test_accept_discount_for_unchanged_cart() {
        let mut cart = Cart::default();
        cart.add(&product(1, 12.5, 5), 2);
        let request = request_for(&cart);
        assert!(cart.accept_discount(&request, applied(5.0)));
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_accept_discount_refuses_changed_cart() {
        let mut cart = Cart::default();
        cart.add(&product(1, 12.5, 5), 2);
        cart.add(&product(2, 4.0, 5), 1);
        let request = request_for(&cart);

        cart.set_quantity(1, 1);
        assert!(!cart.accept_discount(&request, applied(5.0)));
        assert!(cart.discount.is_none());

        // same subtotal, different products
        let mut other = Cart::default();
        other.add(&product(3, 29.0, 5), 1);
        assert_eq!(other.subtotal(), request.order_value);
        assert!(!other.accept_discount(&request, applied(5.0)));

        cart.clear();
        assert!(!cart.accept_discount(&request, applied(5.0)));
    }

    #[test]
    fn test_checkout_validation() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        assert!(errors.contains(fields::FULL_NAME));
        assert!(errors.contains(fields::PHONE));
        assert!(errors.contains(fields::ADDRESS));
        assert!(!errors.contains(fields::NOTE));

        let form = CheckoutForm {
            full_name: "Alex Doe".into(),
            phone: "+1 (555) 010-2030".into(),
            address: "12 Market Street".into(),
            note: "x".repeat(NOTE_MAX_CHARS + 1),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(fields::NOTE));

        let ok = CheckoutForm {
            note: "Leave at the door".into(),
            ..form
        };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.note_chars_left(), NOTE_MAX_CHARS - 17);
    }
}
