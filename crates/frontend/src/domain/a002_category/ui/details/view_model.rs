use crate::shared::state::form::{EntityForm, FormViewModel};
use contracts::domain::a002_category::aggregate::{Category, CategoryDto, CategoryForm};
use contracts::shared::validation::FieldErrors;

impl EntityForm for CategoryForm {
    type Entity = Category;

    fn from_entity(entity: &Category) -> Self {
        CategoryForm::from_category(entity)
    }

    fn validate(&self) -> Result<CategoryDto, FieldErrors> {
        CategoryForm::validate(self)
    }
}

pub type CategoryDetailsViewModel = FormViewModel<CategoryForm>;
