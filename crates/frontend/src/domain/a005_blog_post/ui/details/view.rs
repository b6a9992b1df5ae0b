use crate::layout::global_context::use_app_context;
use crate::shared::components::avatar::Avatar;
use crate::shared::components::tag_badge::TagBadge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use contracts::domain::a005_blog_post::aggregate::BlogPost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let ctx = use_app_context();
    let posts = ctx.blog_posts;
    let params = use_params_map();

    let post = RwSignal::new(None::<BlogPost>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let raw = params.with(|p| p.get("id"));
        match raw.and_then(|s| s.parse::<i64>().ok()) {
            Some(id) => {
                error.set(None);
                spawn_local(async move {
                    match posts.fetch_by_id(id).await {
                        Ok(p) => {
                            let _ = post.try_set(Some(p));
                        }
                        Err(e) => {
                            let _ = error.try_set(Some(e));
                        }
                    }
                });
            }
            None => error.set(Some("Post not found".to_string())),
        }
    });

    view! {
        <div class="page blog-post">
            <A href="/blog" attr:class="back-link">
                {icon("chevron-left")}
                "All posts"
            </A>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || posts.loading().get() && post.with(Option::is_none)>
                <div class="loading"><Spinner /></div>
            </Show>

            {move || post.get().map(|p| view! { <BlogPostBody post=p /> })}
        </div>
    }
}

#[component]
fn BlogPostBody(post: BlogPost) -> impl IntoView {
    let author = post.author.clone().unwrap_or_else(|| "Editorial team".to_string());

    view! {
        <article class="blog-post__article">
            <h1 class="blog-post__title">{post.title.clone()}</h1>
            <div class="blog-post__meta">
                <Avatar name=author.clone() size=32 />
                <span>{author}</span>
                <span>{format_opt_date(post.created_date.as_deref())}</span>
            </div>
            {post.image.clone().map(|src| view! {
                <img class="blog-post__image" src=src alt=post.title.clone() />
            })}
            <div class="blog-post__content">
                {post
                    .paragraphs()
                    .into_iter()
                    .map(|p| view! { <p>{p.to_string()}</p> })
                    .collect_view()}
            </div>
            <div class="blog-post__tags">
                {post.tags.iter().cloned().map(|tag| view! { <TagBadge tag=tag /> }).collect_view()}
            </div>
        </article>
    }
}
