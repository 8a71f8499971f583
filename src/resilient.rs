#[path = "resilient/config.rs"]
mod config;

#[path = "resilient/wrapper.rs"]
mod wrapper;

#[path = "resilient/chat.rs"]
mod chat;

#[cfg(test)]
#[path = "resilient/tests.rs"]
mod tests;

pub use config::ResilienceConfig;
pub use wrapper::ResilientOracle;
