use contracts::domain::a004_tag::aggregate::Tag;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

#[component]
pub fn TagBadge(tag: Tag) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
            {format!("#{}", tag.name)}
        </Badge>
    }
}
