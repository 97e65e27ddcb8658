//! Browser/JS adapters for the contact pipeline.

mod client;
mod endpoint;
mod env;
mod fetch;

pub use client::ContactClient;
pub use endpoint::ContactEndpoint;
pub use env::JsEnv;
pub use fetch::FetchExecutor;
