pub mod cart;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod gallery;
pub mod order;
pub mod stats;
pub mod storage;

pub use error::{AtelierError, Result};
