//! Application initialization and resource setup.
//!
//! Initialization functions for the shared resources:
//! - DNS resolver (custom nameserver, explicit timeouts)
//! - HTTP client (for the recommendation call)
//! - Logger

mod client;
mod logger;
mod resolver;

pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
