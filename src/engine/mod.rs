pub mod catalog;
pub mod sources;
pub mod tracker;
