use crate::shared::state::slice::Resource;
use contracts::domain::a001_product::aggregate::Product;

impl Resource for Product {
    const PATH: &'static str = "/api/products";
    const LABEL: &'static str = "products";
}
