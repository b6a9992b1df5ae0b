pub mod api;
pub mod pagination;
pub mod slice;
pub mod validation;
