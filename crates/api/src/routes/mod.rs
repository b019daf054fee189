pub mod anime;
pub mod health;
