//! Business rules sitting between the handlers and the storage traits.

pub mod anime;
