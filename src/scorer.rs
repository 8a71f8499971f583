#[path = "scorer/judgment.rs"]
mod judgment;

#[path = "scorer/prompt.rs"]
mod prompt;

#[path = "scorer/client.rs"]
mod client;


pub use client::{Evaluation, Scorer};
pub use judgment::Judgment;
