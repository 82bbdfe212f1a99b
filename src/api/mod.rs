//! Backend API module for the demo request endpoint

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::DemoRequestTransport;

#[cfg(test)]
pub use traits::MockDemoRequestTransport;
