pub mod criteria;
pub mod list_view;
pub mod repository;
pub mod state;
