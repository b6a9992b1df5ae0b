use crate::shared::slice::Entity;
use crate::shared::validation::{FieldErrors, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "PERCENTAGE",
            DiscountType::Fixed => "FIXED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Fixed => "Fixed amount",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "FIXED" => DiscountType::Fixed,
            _ => DiscountType::Percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_value: Option<f64>,
    pub max_discount_amount: Option<f64>,
    pub max_usage: Option<i64>,
    #[serde(default)]
    pub usage_count: i64,
    pub applicable_product_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Entity for Discount {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Discount {
    /// Client-side estimate of the amount taken off `order_value`.
    /// The API stays authoritative through `POST /api/discounts/apply`.
    pub fn preview_amount(&self, order_value: f64) -> f64 {
        if order_value <= 0.0 {
            return 0.0;
        }
        if let Some(min) = self.min_order_value {
            if order_value < min {
                return 0.0;
            }
        }
        let raw = match self.discount_type {
            DiscountType::Percentage => order_value * self.discount_value.clamp(0.0, 100.0) / 100.0,
            DiscountType::Fixed => self.discount_value.max(0.0),
        };
        let capped = match self.max_discount_amount {
            Some(cap) if cap > 0.0 => raw.min(cap),
            _ => raw,
        };
        round_cents(capped.min(order_value))
    }

    pub fn usage_exhausted(&self) -> bool {
        matches!(self.max_usage, Some(max) if self.usage_count >= max)
    }

    /// Active flag, usage limit and date range checked against `today`
    pub fn is_usable_on(&self, today: NaiveDate) -> bool {
        if !self.is_active || self.usage_exhausted() {
            return false;
        }
        let start = self.start_date.as_deref().and_then(parse_date);
        let end = self.end_date.as_deref().and_then(parse_date);
        start.map_or(true, |s| s <= today) && end.map_or(true, |e| today <= e)
    }

    /// "10%" or "$5.00"
    pub fn value_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", trim_float(self.discount_value)),
            DiscountType::Fixed => format!("${:.2}", self.discount_value),
        }
    }
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Request body for create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDto {
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_value: Option<f64>,
    pub max_discount_amount: Option<f64>,
    pub max_usage: Option<i64>,
    pub applicable_product_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// Body of `POST /api/discounts/apply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyDiscountRequest {
    pub code: String,
    pub order_value: f64,
    pub product_ids: Vec<i64>,
}

/// Data of a successful apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountApplication {
    pub discount_id: Option<i64>,
    pub code: String,
    pub discount_amount: f64,
    pub final_amount: f64,
}

pub mod fields {
    pub const NAME: &str = "name";
    pub const CODE: &str = "code";
    pub const VALUE: &str = "discountValue";
    pub const MIN_ORDER: &str = "minOrderValue";
    pub const MAX_DISCOUNT: &str = "maxDiscountAmount";
    pub const MAX_USAGE: &str = "maxUsage";
    pub const PRODUCT: &str = "applicableProductId";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
}

pub const PERCENT_OVERFLOW: &str = "Discount value must not exceed 100%";

const NAME_RULES: ValidationRules = ValidationRules::required().with_length(None, Some(100));
const CODE_RULES: ValidationRules = ValidationRules::required().with_length(Some(3), Some(20));
const VALUE_RULES: ValidationRules = ValidationRules::required();
const PERCENT_RULES: ValidationRules = ValidationRules::required()
    .with_range(None, Some(100.0))
    .with_message(PERCENT_OVERFLOW);
const AMOUNT_RULES: ValidationRules = ValidationRules::none().with_range(Some(0.0), None);
const USAGE_RULES: ValidationRules = ValidationRules::none().with_range(Some(1.0), None);
const PRODUCT_RULES: ValidationRules = ValidationRules::none().with_range(Some(1.0), None);

/// Editable form state; numeric and date fields hold the raw input text
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountForm {
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub min_order_value: String,
    pub max_discount_amount: String,
    pub max_usage: String,
    pub applicable_product_id: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Default for DiscountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: String::new(),
            min_order_value: String::new(),
            max_discount_amount: String::new(),
            max_usage: String::new(),
            applicable_product_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
        }
    }
}

impl DiscountForm {
    pub fn from_discount(d: &Discount) -> Self {
        let opt = |v: Option<f64>| v.map(trim_float).unwrap_or_default();
        let date = |v: &Option<String>| {
            v.as_deref()
                .and_then(parse_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            name: d.name.clone(),
            code: d.code.clone(),
            discount_type: d.discount_type,
            discount_value: trim_float(d.discount_value),
            min_order_value: opt(d.min_order_value),
            max_discount_amount: opt(d.max_discount_amount),
            max_usage: d.max_usage.map(|v| v.to_string()).unwrap_or_default(),
            applicable_product_id: d
                .applicable_product_id
                .map(|v| v.to_string())
                .unwrap_or_default(),
            start_date: date(&d.start_date),
            end_date: date(&d.end_date),
            is_active: d.is_active,
        }
    }

    pub fn validate(&self) -> Result<DiscountDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(fields::NAME, NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(fields::CODE, CODE_RULES.validate_string(&self.code, "Code"));
        let code_ok = self
            .code
            .trim()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !code_ok {
            errors.insert(
                fields::CODE,
                "Code may contain only letters, digits, '-' and '_'",
            );
        }

        let value_rules = match self.discount_type {
            DiscountType::Percentage => PERCENT_RULES,
            DiscountType::Fixed => VALUE_RULES,
        };
        let value = match value_rules.parse_number(&self.discount_value, "Discount value") {
            Ok(Some(v)) if v <= 0.0 => {
                errors.insert(fields::VALUE, "Discount value must be greater than 0");
                None
            }
            Ok(v) => v,
            Err(e) => {
                errors.insert(fields::VALUE, e);
                None
            }
        };

        let min_order = collect(
            &mut errors,
            fields::MIN_ORDER,
            AMOUNT_RULES.parse_number(&self.min_order_value, "Minimum order value"),
        );
        let max_discount = collect(
            &mut errors,
            fields::MAX_DISCOUNT,
            AMOUNT_RULES.parse_number(&self.max_discount_amount, "Maximum discount"),
        );
        let max_usage = collect(
            &mut errors,
            fields::MAX_USAGE,
            USAGE_RULES.parse_integer(&self.max_usage, "Maximum usage"),
        );
        let product_id = collect(
            &mut errors,
            fields::PRODUCT,
            PRODUCT_RULES.parse_integer(&self.applicable_product_id, "Product id"),
        );

        let start = required_date(&mut errors, fields::START_DATE, &self.start_date, "Start date");
        let end = required_date(&mut errors, fields::END_DATE, &self.end_date, "End date");
        if let (Some(s), Some(e)) = (start, end) {
            if s >= e {
                errors.insert(fields::START_DATE, "Start date must be before end date");
                errors.insert(fields::END_DATE, "End date must be after start date");
            }
        }

        errors.into_result()?;

        match (value, start, end) {
            (Some(discount_value), Some(start_date), Some(end_date)) => Ok(DiscountDto {
                name: self.name.trim().to_string(),
                code: self.code.trim().to_uppercase(),
                discount_type: self.discount_type,
                discount_value,
                min_order_value: min_order,
                max_discount_amount: max_discount,
                max_usage,
                applicable_product_id: product_id,
                start_date,
                end_date,
                is_active: self.is_active,
            }),
            _ => {
                let mut errors = FieldErrors::new();
                errors.insert(fields::VALUE, "Discount value is required");
                Err(errors)
            }
        }
    }
}

fn collect<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    result: Result<Option<T>, String>,
) -> Option<T> {
    match result {
        Ok(v) => v,
        Err(e) => {
            errors.insert(field, e);
            None
        }
    }
}

fn required_date(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    label: &str,
) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.insert(field, format!("{} must be a date (YYYY-MM-DD)", label));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> DiscountForm {
        DiscountForm {
            name: "Spring sale".into(),
            code: "spring-25".into(),
            discount_type: DiscountType::Percentage,
            discount_value: "50".into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-31".into(),
            ..Default::default()
        }
    }

    fn discount(kind: DiscountType, value: f64) -> Discount {
        Discount {
            id: 1,
            name: "Test".into(),
            code: "TEST".into(),
            discount_type: kind,
            discount_value: value,
            min_order_value: None,
            max_discount_amount: None,
            max_usage: None,
            usage_count: 0,
            applicable_product_id: None,
            start_date: Some("2025-03-01".into()),
            end_date: Some("2025-03-31T23:59:59".into()),
            is_active: true,
        }
    }

    #[test]
    fn test_percentage_over_100_fails() {
        let form = DiscountForm {
            discount_value: "150".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(fields::VALUE), Some(PERCENT_OVERFLOW));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_percentage_50_passes() {
        let dto = valid_form().validate().unwrap();
        assert_eq!(dto.discount_value, 50.0);
        assert_eq!(dto.code, "SPRING-25");
        assert_eq!(dto.start_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_fixed_value_over_100_passes() {
        let form = DiscountForm {
            discount_type: DiscountType::Fixed,
            discount_value: "150".into(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_start_after_end_fails_on_both_fields() {
        let form = DiscountForm {
            start_date: "2025-03-10".into(),
            end_date: "2025-03-01".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(fields::START_DATE));
        assert!(errors.contains(fields::END_DATE));
    }

    #[test]
    fn test_required_and_numeric_fields() {
        let form = DiscountForm {
            discount_value: "0".into(),
            max_usage: "0".into(),
            min_order_value: "ten".into(),
            code: "a b".into(),
            ..DiscountForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(fields::NAME), Some("Name is required"));
        assert_eq!(
            errors.get(fields::VALUE),
            Some("Discount value must be greater than 0")
        );
        assert!(errors.contains(fields::CODE));
        assert!(errors.contains(fields::MAX_USAGE));
        assert_eq!(
            errors.get(fields::MIN_ORDER),
            Some("Minimum order value must be a number")
        );
        assert_eq!(errors.get(fields::START_DATE), Some("Start date is required"));
    }

    #[test]
    fn test_form_round_trips_existing_discount() {
        let mut d = discount(DiscountType::Fixed, 5.0);
        d.max_usage = Some(10);
        let form = DiscountForm::from_discount(&d);
        assert_eq!(form.discount_value, "5");
        assert_eq!(form.end_date, "2025-03-31");
        let dto = form.validate().unwrap();
        assert_eq!(dto.max_usage, Some(10));
    }

    #[test]
    fn test_preview_amount() {
        let mut pct = discount(DiscountType::Percentage, 20.0);
        assert_eq!(pct.preview_amount(50.0), 10.0);

        pct.max_discount_amount = Some(5.0);
        assert_eq!(pct.preview_amount(50.0), 5.0);

        pct.min_order_value = Some(100.0);
        assert_eq!(pct.preview_amount(50.0), 0.0);

        let fixed = discount(DiscountType::Fixed, 30.0);
        assert_eq!(fixed.preview_amount(12.5), 12.5);
        assert_eq!(fixed.preview_amount(100.0), 30.0);
    }

    #[test]
    fn test_usable_on() {
        let mut d = discount(DiscountType::Percentage, 10.0);
        let day = |m, dd| NaiveDate::from_ymd_opt(2025, m, dd).unwrap();
        assert!(d.is_usable_on(day(3, 15)));
        assert!(d.is_usable_on(day(3, 31)));
        assert!(!d.is_usable_on(day(4, 1)));

        d.max_usage = Some(3);
        d.usage_count = 3;
        assert!(!d.is_usable_on(day(3, 15)));
    }

    #[test]
    fn test_value_label() {
        assert_eq!(discount(DiscountType::Percentage, 12.5).value_label(), "12.5%");
        assert_eq!(discount(DiscountType::Fixed, 5.0).value_label(), "$5.00");
    }
}
