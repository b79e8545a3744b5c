pub use crate::error::Result;

pub mod config;
pub mod error;
pub mod model;
pub mod webhook;
pub mod wizard;
