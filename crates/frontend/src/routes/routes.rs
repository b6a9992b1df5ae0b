use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductListPage;
use crate::domain::a001_product::ui::quick_view::QuickViewModal;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_discount::ui::details::DiscountDetails;
use crate::domain::a003_discount::ui::list::DiscountList;
use crate::domain::a004_tag::ui::details::TagDetails;
use crate::domain::a004_tag::ui::list::TagList;
use crate::domain::a005_blog_post::ui::details::BlogPostPage;
use crate::domain::a005_blog_post::ui::list::BlogListPage;
use crate::domain::a006_cart::ui::cart::CartPage;
use crate::layout::admin::AdminLayout;
use crate::layout::Shell;
use crate::pages::admin_home::AdminHomePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/blog") view=BlogListPage />
                    <Route path=path!("/blog/:id") view=BlogPostPage />

                    <Route path=path!("/admin") view=|| view! { <AdminLayout><AdminHomePage /></AdminLayout> } />
                    <Route path=path!("/admin/categories") view=|| view! { <AdminLayout><CategoryList /></AdminLayout> } />
                    <Route path=path!("/admin/categories/new") view=|| view! { <AdminLayout><CategoryDetails /></AdminLayout> } />
                    <Route path=path!("/admin/categories/:id/edit") view=|| view! { <AdminLayout><CategoryDetails /></AdminLayout> } />
                    <Route path=path!("/admin/discounts") view=|| view! { <AdminLayout><DiscountList /></AdminLayout> } />
                    <Route path=path!("/admin/discounts/new") view=|| view! { <AdminLayout><DiscountDetails /></AdminLayout> } />
                    <Route path=path!("/admin/discounts/:id/edit") view=|| view! { <AdminLayout><DiscountDetails /></AdminLayout> } />
                    <Route path=path!("/admin/tags") view=|| view! { <AdminLayout><TagList /></AdminLayout> } />
                    <Route path=path!("/admin/tags/new") view=|| view! { <AdminLayout><TagDetails /></AdminLayout> } />
                    <Route path=path!("/admin/tags/:id/edit") view=|| view! { <AdminLayout><TagDetails /></AdminLayout> } />
                </Routes>
            </Shell>
            <QuickViewModal />
            <ToastHost />
        </Router>
    }
}
