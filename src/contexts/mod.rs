// Context modules for application state management
pub mod error;
pub mod layout;

pub use error::*;
pub use layout::*;
