use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::tag_badge::TagBadge;
use crate::shared::config::app_config;
use crate::shared::date_utils::format_opt_date;
use crate::shared::state::list_state::{create_state, total_pages};
use contracts::domain::a005_blog_post::aggregate::BlogPost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const EXCERPT_CHARS: usize = 160;

#[component]
pub fn BlogPostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let meta = match post.author.as_deref() {
        Some(author) => format!("{} · {}", author, format_opt_date(post.created_date.as_deref())),
        None => format_opt_date(post.created_date.as_deref()),
    };

    let image_alt = post.title.clone();
    let title = post.title.clone();
    view! {
        <article class="post-card">
            {post.image.clone().map(|src| view! {
                <A href=href.clone()>
                    <img class="post-card__image" src=src alt=image_alt loading="lazy" />
                </A>
            })}
            <div class="post-card__body">
                <div class="post-card__meta">{meta}</div>
                <A href=href.clone()>
                    <h3 class="post-card__title">{title}</h3>
                </A>
                <p class="post-card__excerpt">{post.excerpt(EXCERPT_CHARS)}</p>
                <div class="post-card__tags">
                    {post.tags.iter().cloned().map(|tag| view! { <TagBadge tag=tag /> }).collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn BlogListPage() -> impl IntoView {
    let ctx = use_app_context();
    let posts = ctx.blog_posts;
    let page_size = app_config().storefront_page_size;
    let state = create_state();

    Effect::new(move |_| {
        let current = state.get();
        spawn_local(async move {
            let _ = posts.fetch_list(current.page, current.search, page_size).await;
        });
    });

    let total = Signal::derive(move || total_pages(posts.pagination().get()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let on_page_change = Callback::new(move |page: usize| {
        let total = total.get_untracked();
        state.maybe_update(|s| s.go_to(page, total));
    });

    view! {
        <div class="page blog-list">
            <PageHeader title="Blog" subtitle="News, guides and stories">
                {()}
            </PageHeader>

            {move || posts.error().get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !posts.loading().get()
                fallback=|| view! { <div class="loading"><Spinner /></div> }
            >
                <div class="post-grid">
                    <For
                        each=move || posts.items().get()
                        key=|p: &BlogPost| p.id
                        children=|post: BlogPost| view! { <BlogPostCard post=post /> }
                    />
                </div>
            </Show>

            <PaginationControls
                current_page=current_page
                total_pages=total
                on_page_change=on_page_change
            />
        </div>
    }
}
