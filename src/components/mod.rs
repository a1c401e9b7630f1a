pub mod nav_bar;
pub mod project_modal;

pub use nav_bar::NavBar;
pub use project_modal::{NewProjectForm, NewProjectModal};
