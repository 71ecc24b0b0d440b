pub mod client;
pub mod pipeline;
pub mod report;

pub use client::*;
pub use pipeline::*;
pub use report::*;
