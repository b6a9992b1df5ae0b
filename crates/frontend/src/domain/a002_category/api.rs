use crate::shared::state::slice::{Resource, WritableResource};
use contracts::domain::a002_category::aggregate::{Category, CategoryDto};

impl Resource for Category {
    const PATH: &'static str = "/api/categories";
    const LABEL: &'static str = "categories";
}

impl WritableResource for Category {
    type Draft = CategoryDto;
}
