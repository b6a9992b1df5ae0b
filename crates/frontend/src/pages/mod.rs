pub mod admin_home;
pub mod home;
pub mod not_found;
