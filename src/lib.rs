pub mod app;
pub mod components;
pub mod core;
pub mod features;
pub mod pages;

pub use app::{App, AppView};
