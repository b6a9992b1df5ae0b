use leptos::prelude::*;

/// Up to two uppercase initials, "?" for a blank name
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Round user picture, falling back to initials
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional)] image: Option<String>,
    #[prop(default = 40)] size: u32,
) -> impl IntoView {
    let style = format!("width: {0}px; height: {0}px;", size);

    match image.filter(|src| !src.trim().is_empty()) {
        Some(src) => view! {
            <img class="avatar" style=style src=src alt=name />
        }
        .into_any(),
        None => view! {
            <span class="avatar avatar--initials" style=style title=name.clone()>
                {initials(&name)}
            </span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("jane doe"), "JD");
        assert_eq!(initials("  Ana  Maria Lopez "), "AM");
        assert_eq!(initials("Kim"), "K");
        assert_eq!(initials("   "), "?");
    }
}
