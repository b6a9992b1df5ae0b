use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::app_config;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Process-wide store: one slice per entity plus the cart.
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new(app_config().toast_timeout_ms));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
