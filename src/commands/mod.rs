pub mod compare;
pub mod list;
