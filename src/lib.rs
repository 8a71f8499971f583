//! A library for ranking resumes against a job description with LLM scoring.
//!
//! Each resume is scored independently by an external oracle (a Groq-hosted
//! chat model by default), all calls run concurrently, individual failures
//! degrade to score-0 entries instead of aborting the batch, and the
//! outcomes are ranked deterministically.
//!
//! ```no_run
//! use resume_ranker::{PipelineBuilder, RankRequest, Resume};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = PipelineBuilder::new()
//!         .api_key(std::env::var("GROQ_API_KEY")?)
//!         .retries(2)
//!         .build()?;
//!
//!     let request = RankRequest::new(
//!         "Senior backend engineer, Go, distributed systems",
//!         vec![
//!             Resume::new("a.pdf", "5 years Go microservices"),
//!             Resume::new("b.pdf", "Frontend CSS specialist"),
//!         ],
//!     );
//!
//!     for ranked in pipeline.run(&request).await? {
//!         println!("{} -> {} ({})", ranked.filename, ranked.score, ranked.reasoning);
//!     }
//!     Ok(())
//! }
//! ```

pub mod backends;
pub mod builder;
pub mod chat;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod resilient;
pub mod scorer;

pub use builder::PipelineBuilder;
pub use chat::{ChatMessage, ChatProvider, ChatResponse, ChatRole};
pub use dispatch::{DispatchOptions, RankedResume};
pub use error::RankError;
pub use pipeline::{Pipeline, PipelineOptions, RankRequest, Resume};
pub use ranking::rank;
pub use resilient::{ResilienceConfig, ResilientOracle};
pub use scorer::{Evaluation, Judgment, Scorer};
