pub mod catalog;
pub mod character;
pub mod detail;
pub mod status;
