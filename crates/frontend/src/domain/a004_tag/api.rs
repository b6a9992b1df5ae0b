use crate::shared::state::slice::{Resource, WritableResource};
use contracts::domain::a004_tag::aggregate::{Tag, TagDto};

impl Resource for Tag {
    const PATH: &'static str = "/api/tags";
    const LABEL: &'static str = "tags";
}

impl WritableResource for Tag {
    type Draft = TagDto;
}
