pub mod catalog;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod seed;
pub mod settings;
pub mod telemetry;

pub use catalog::{get_page, PageNumber, PAGE_SIZE};
pub use errors::{AppError, Result};
pub use handlers::{configure_routes, AppState};
pub use models::{CatalogPage, Category, Product};
pub use seed::{seed, SeedReport};
