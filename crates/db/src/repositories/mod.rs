//! PostgreSQL implementations of the storage traits.

pub mod anime_repo;
pub mod app_user_repo;

pub use anime_repo::AnimeRepo;
pub use app_user_repo::AppUserRepo;
