pub mod api;
pub mod filter;
pub mod model;

pub use api::*;
pub use filter::*;
pub use model::*;
