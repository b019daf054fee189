//! Domain primitives shared by the storage and HTTP crates.
//!
//! Nothing in here touches the database or the network.

pub mod error;
pub mod naming;
pub mod roles;
pub mod types;
