use crate::layout::global_context::AppGlobalContext;
use crate::shared::number_format::format_money;
use crate::shared::state::form::refresh_errors;
use crate::shared::toast::ToastService;
use contracts::domain::a006_cart::aggregate::CheckoutForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CheckoutViewModel {
    pub form: RwSignal<CheckoutForm>,
    pub errors: RwSignal<FieldErrors>,
}

impl CheckoutViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CheckoutForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    pub fn update_field(&self, edit: impl FnOnce(&mut CheckoutForm)) {
        self.form.update(edit);
        if self.errors.with_untracked(FieldErrors::is_empty) {
            return;
        }
        let current = self.form.with_untracked(CheckoutForm::validate);
        self.errors
            .update(|shown| *shown = refresh_errors(shown, current));
    }

    /// Validates the form and confirms the order locally: the cart is
    /// emptied and the confirmation text returned. Nothing is sent to the API.
    pub fn submit(&self, ctx: AppGlobalContext, toast: ToastService) -> Option<String> {
        if let Err(errors) = self.form.with_untracked(CheckoutForm::validate) {
            self.errors.set(errors);
            return None;
        }
        self.errors.set(FieldErrors::new());

        let (items, total) = ctx.cart.with_untracked(|c| (c.total_items(), c.total()));
        let name = self.form.with_untracked(|f| f.full_name.trim().to_string());
        log::info!("checkout: {} items, total {:.2}", items, total);

        let message = format!(
            "Thank you, {}! Your order of {} items ({}) has been placed.",
            name,
            items,
            format_money(total)
        );
        toast.success("Order placed");
        ctx.cart.update(|c| c.clear());
        self.form.set(CheckoutForm::default());
        Some(message)
    }
}
