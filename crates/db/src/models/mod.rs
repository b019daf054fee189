pub mod anime;
pub mod app_user;
