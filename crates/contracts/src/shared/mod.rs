pub mod export;
pub mod indicators;
pub mod list_view;
