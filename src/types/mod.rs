pub mod error;

pub use error::{LensError, Result};
