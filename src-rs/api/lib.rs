pub mod client;
pub mod types;

pub use client::HttpTaskApi;
pub use types::TaskApi;
