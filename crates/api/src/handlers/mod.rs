pub mod anime;
pub mod fallback;
