use crate::domain::a005_blog_post::ui::list::BlogPostCard;
use crate::layout::global_context::use_app_context;
use crate::shared::components::product_card::ProductCard;
use crate::shared::components::promo_banner::{HeroBanner, SaleBanner, ServiceHighlights};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a005_blog_post::aggregate::BlogPost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const FEATURED_COUNT: usize = 8;
const LATEST_POSTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    // local copies: the shop and blog pages refill the shared slices
    let featured = RwSignal::new(Vec::<Product>::new());
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        if let Ok(page) = ctx.products.fetch_list(1, String::new(), FEATURED_COUNT).await {
            let _ = featured.try_set(page.items);
        }
        let _ = loading.try_set(false);
        if let Ok(page) = ctx.blog_posts.fetch_list(1, String::new(), LATEST_POSTS).await {
            let _ = posts.try_set(page.items);
        }
    });

    view! {
        <div class="page home">
            <HeroBanner />
            <ServiceHighlights />

            <section class="home__section">
                <div class="home__section-header">
                    <h2>"Featured products"</h2>
                    <A href="/products">"View all"</A>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading"><Spinner /></div> }
                >
                    <div class="product-grid">
                        <For
                            each=move || featured.get()
                            key=|p: &Product| p.id
                            children=|product: Product| view! { <ProductCard product=product /> }
                        />
                    </div>
                </Show>
            </section>

            <SaleBanner
                headline="Mid-season sale"
                text="Selected items up to 30% off while stock lasts."
                code="SALE30"
            />

            <Show when=move || posts.with(|p| !p.is_empty())>
                <section class="home__section">
                    <div class="home__section-header">
                        <h2>"From the blog"</h2>
                        <A href="/blog">"All posts"</A>
                    </div>
                    <div class="post-grid">
                        <For
                            each=move || posts.get()
                            key=|p: &BlogPost| p.id
                            children=|post: BlogPost| view! { <BlogPostCard post=post /> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}
