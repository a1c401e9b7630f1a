pub mod home;
pub mod projects;

pub use home::Home;
pub use projects::Projects;
