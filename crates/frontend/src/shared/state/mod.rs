pub mod form;
pub mod list_state;
pub mod slice;
