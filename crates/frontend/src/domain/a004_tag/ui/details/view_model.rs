use crate::shared::state::form::{EntityForm, FormViewModel};
use contracts::domain::a004_tag::aggregate::{Tag, TagDto, TagForm};
use contracts::shared::validation::FieldErrors;

impl EntityForm for TagForm {
    type Entity = Tag;

    fn from_entity(entity: &Tag) -> Self {
        TagForm::from_tag(entity)
    }

    fn validate(&self) -> Result<TagDto, FieldErrors> {
        TagForm::validate(self)
    }
}

pub type TagDetailsViewModel = FormViewModel<TagForm>;
