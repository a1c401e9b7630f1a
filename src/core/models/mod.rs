pub mod project;
pub mod view_state;

pub use project::{normalize_tags, parse_tags, seed_projects, Project};
pub use view_state::{parse_page_size, Filter, ViewState};
