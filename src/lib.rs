pub mod cs;
pub mod math;

pub use cs::{error, sort};
pub use error::{Error, Result};
