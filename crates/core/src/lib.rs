pub mod error;
pub mod extract;
pub mod model;

pub use error::{EndoscopeError, Result};
pub use extract::{Endpoint, extract_endpoints};
