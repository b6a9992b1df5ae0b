use crate::shared::state::form::{EntityForm, FormViewModel};
use contracts::domain::a003_discount::aggregate::{Discount, DiscountDto, DiscountForm};
use contracts::shared::validation::FieldErrors;

/// Order value used for the live preview on the discount form
pub const PREVIEW_ORDER_VALUE: f64 = 100.0;

impl EntityForm for DiscountForm {
    type Entity = Discount;

    fn from_entity(entity: &Discount) -> Self {
        DiscountForm::from_discount(entity)
    }

    fn validate(&self) -> Result<DiscountDto, FieldErrors> {
        DiscountForm::validate(self)
    }
}

pub type DiscountDetailsViewModel = FormViewModel<DiscountForm>;

/// What the edited discount would take off an order of `order_value`,
/// `None` while the form is invalid
pub fn preview(form: &DiscountForm, order_value: f64) -> Option<f64> {
    let dto = form.validate().ok()?;
    let draft = Discount {
        id: 0,
        name: dto.name,
        code: dto.code,
        discount_type: dto.discount_type,
        discount_value: dto.discount_value,
        min_order_value: dto.min_order_value,
        max_discount_amount: dto.max_discount_amount,
        max_usage: dto.max_usage,
        usage_count: 0,
        applicable_product_id: dto.applicable_product_id,
        start_date: Some(dto.start_date.to_string()),
        end_date: Some(dto.end_date.to_string()),
        is_active: dto.is_active,
    };
    Some(draft.preview_amount(order_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_discount::aggregate::DiscountType;

    fn form() -> DiscountForm {
        DiscountForm {
            name: "Spring sale".into(),
            code: "SPRING-25".into(),
            discount_type: DiscountType::Percentage,
            discount_value: "25".into(),
            max_discount_amount: "20".into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-31".into(),
            ..DiscountForm::default()
        }
    }

    #[test]
    fn test_preview_caps_at_max_discount() {
        assert_eq!(preview(&form(), PREVIEW_ORDER_VALUE), Some(20.0));
        assert_eq!(preview(&form(), 40.0), Some(10.0));
    }

    #[test]
    fn test_preview_requires_valid_form() {
        let invalid = DiscountForm {
            discount_value: "150".into(),
            ..form()
        };
        assert_eq!(preview(&invalid, PREVIEW_ORDER_VALUE), None);
    }
}
