pub mod criteria;
pub mod domain;
pub mod error;
mod util;

pub use criteria::*;
pub use domain::*;
pub use error::{Error, Result};
pub use util::*;
