pub mod error;
pub mod game;
pub mod models;

pub use error::{LotoError, Result};
