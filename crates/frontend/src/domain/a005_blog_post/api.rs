use crate::shared::state::slice::Resource;
use contracts::domain::a005_blog_post::aggregate::BlogPost;

impl Resource for BlogPost {
    const PATH: &'static str = "/api/blogs";
    const LABEL: &'static str = "blog";
}
