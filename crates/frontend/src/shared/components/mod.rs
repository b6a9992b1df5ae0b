pub mod avatar;
pub mod confirm_dialog;
pub mod form_field;
pub mod page_header;
pub mod pagination_controls;
pub mod product_card;
pub mod promo_banner;
pub mod review_item;
pub mod tag_badge;
