pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod view;

pub use error::{AppError, Result};
pub use store::{ProjectEdit, ProjectStore};
pub use view::{derive_page, derive_page_at, PageInfo, PageView};
