pub mod view;

pub use view::BlogPostPage;
