pub mod catalog;
pub mod data;
pub mod draft;
pub mod options;
pub mod payload;
pub mod schedule;
