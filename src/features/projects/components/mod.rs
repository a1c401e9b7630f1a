pub mod board_toolbar;
pub mod filter_tabs;
pub mod flash_notice;
pub mod pager;
pub mod project_card;

pub use board_toolbar::BoardToolbar;
pub use filter_tabs::FilterTabs;
pub use flash_notice::FlashNotice;
pub use pager::Pager;
pub use project_card::ProjectCard;
