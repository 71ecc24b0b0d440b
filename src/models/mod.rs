pub mod request;
pub mod trade;

pub use request::*;
pub use trade::*;
