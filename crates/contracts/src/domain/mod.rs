pub mod a001_product;
pub mod a002_category;
pub mod a003_discount;
pub mod a004_tag;
pub mod a005_blog_post;
pub mod a006_cart;
