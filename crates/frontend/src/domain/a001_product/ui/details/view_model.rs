use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::ToastService;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Quantity picked on the detail page, kept within `1..=stock`
pub fn clamp_quantity(requested: i64, stock: u32) -> u32 {
    let upper = i64::from(stock.max(1));
    requested.clamp(1, upper) as u32
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub product: RwSignal<Option<Product>>,
    pub error: RwSignal<Option<String>>,
    pub selected_image: RwSignal<usize>,
    pub quantity: RwSignal<u32>,
    requested: RwSignal<Option<i64>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            product: RwSignal::new(None),
            error: RwSignal::new(None),
            selected_image: RwSignal::new(0),
            quantity: RwSignal::new(1),
            requested: RwSignal::new(None),
        }
    }

    /// Loads the product through the shared slice; a non-numeric id is
    /// reported without a request. The previous product is cleared first.
    pub fn load(&self, ctx: AppGlobalContext, raw_id: Option<String>) {
        let vm = *self;
        vm.product.set(None);
        vm.error.set(None);
        vm.selected_image.set(0);
        vm.quantity.set(1);

        let Some(id) = raw_id.and_then(|s| s.trim().parse::<i64>().ok()) else {
            vm.requested.set(None);
            vm.error.set(Some("Product not found".to_string()));
            return;
        };
        vm.requested.set(Some(id));
        spawn_local(async move {
            let result = ctx.products.fetch_by_id(id).await;
            // a later load replaced this one
            if vm.requested.try_get_untracked().flatten() != Some(id) {
                return;
            }
            match result {
                Ok(product) => {
                    let _ = vm.product.try_set(Some(product));
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e));
                }
            }
        });
    }

    pub fn set_quantity(&self, raw: &str) {
        let stock = self
            .product
            .with_untracked(|p| p.as_ref().map_or(1, |p| p.stock));
        let requested = raw.trim().parse::<i64>().unwrap_or(1);
        self.quantity.set(clamp_quantity(requested, stock));
    }

    pub fn step_quantity(&self, delta: i64) {
        let current = i64::from(self.quantity.get_untracked());
        self.set_quantity(&(current + delta).to_string());
    }

    pub fn add_to_cart(&self, ctx: AppGlobalContext, toast: ToastService) {
        let Some(product) = self.product.get_untracked() else {
            return;
        };
        match ctx.add_to_cart(&product, self.quantity.get_untracked()) {
            0 => toast.error(format!("No more {} in stock", product.name)),
            added => toast.success(format!("Added {} x{} to cart", product.name, added)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(3, 10), 3);
        assert_eq!(clamp_quantity(0, 10), 1);
        assert_eq!(clamp_quantity(-4, 10), 1);
        assert_eq!(clamp_quantity(25, 10), 10);
        assert_eq!(clamp_quantity(2, 0), 1);
    }
}
