use super::avatar::Avatar;
use contracts::domain::a001_product::aggregate::Review;
use leptos::prelude::*;

/// Five-character star row, e.g. "★★★☆☆"
pub fn star_row(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ReviewItem(review: Review) -> impl IntoView {
    let author = review.author_name().to_string();
    let avatar = review.user.as_ref().and_then(|u| u.avatar.clone());
    let stars = review.stars();

    view! {
        <div class="review">
            <Avatar name=author.clone() image=avatar.unwrap_or_default() size=36 />
            <div class="review__body">
                <div class="review__header">
                    <span class="review__author">{author}</span>
                    <span class="review__stars" title=format!("{} of 5", stars)>{star_row(stars)}</span>
                </div>
                {(!review.text.trim().is_empty()).then(|| view! {
                    <p class="review__text">{review.text.clone()}</p>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_row() {
        assert_eq!(star_row(3), "★★★☆☆");
        assert_eq!(star_row(0), "☆☆☆☆☆");
        assert_eq!(star_row(7), "★★★★★");
    }
}
