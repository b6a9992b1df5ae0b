use crate::shared::state::slice::Slice;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_discount::aggregate::Discount;
use contracts::domain::a004_tag::aggregate::Tag;
use contracts::domain::a005_blog_post::aggregate::BlogPost;
use contracts::domain::a006_cart::aggregate::Cart;
use leptos::prelude::*;

/// Process-wide store: one slice per resource plus the client-side cart.
/// Created once in `App` and shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub products: Slice<Product>,
    pub categories: Slice<Category>,
    pub discounts: Slice<Discount>,
    pub tags: Slice<Tag>,
    pub blog_posts: Slice<BlogPost>,
    pub cart: RwSignal<Cart>,
    /// Product shown in the quick-view modal
    pub quick_view: RwSignal<Option<Product>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            products: Slice::new(),
            categories: Slice::new(),
            discounts: Slice::new(),
            tags: Slice::new(),
            blog_posts: Slice::new(),
            cart: RwSignal::new(Cart::default()),
            quick_view: RwSignal::new(None),
        }
    }

    pub fn cart_count(&self) -> Signal<u32> {
        let cart = self.cart;
        Signal::derive(move || cart.with(Cart::total_items))
    }

    /// Adds up to `quantity` units of `product`; returns how many were
    /// actually added once stock limits apply.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) -> u32 {
        let before = self.cart.with_untracked(|c| c.quantity_of(product.id));
        let after = self
            .cart
            .try_update(|c| c.add(product, quantity))
            .unwrap_or(before);
        if after > before {
            log::info!("cart: {} x{} added", product.name, after - before);
        }
        after.saturating_sub(before)
    }

    pub fn close_quick_view(&self) {
        self.quick_view.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
