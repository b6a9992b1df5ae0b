use crate::shared::http;
use crate::shared::state::slice::{Resource, WritableResource};
use contracts::domain::a003_discount::aggregate::{
    ApplyDiscountRequest, Discount, DiscountApplication, DiscountDto,
};

const APPLY_PATH: &str = "/api/discounts/apply";

impl Resource for Discount {
    const PATH: &'static str = "/api/discounts";
    const LABEL: &'static str = "discounts";
}

impl WritableResource for Discount {
    type Draft = DiscountDto;
}

/// Asks the server to price a discount code against the current order.
/// The server answer is authoritative; the local preview is only an estimate.
pub async fn apply_discount(request: &ApplyDiscountRequest) -> Result<DiscountApplication, String> {
    log::debug!(
        "discounts: apply {} to order {:.2}",
        request.code,
        request.order_value
    );
    http::post::<_, DiscountApplication>(APPLY_PATH, request)
        .await
        .and_then(|p| p.require_data())
        .map_err(|e| {
            log::warn!("discounts: apply failed: {}", e);
            e.to_string()
        })
}
