pub mod list;
pub mod resolver;
