#[path = "dispatch/types.rs"]
mod types;

#[path = "dispatch/coordinator.rs"]
mod coordinator;


pub use coordinator::dispatch;
pub use types::{DispatchOptions, RankedResume};
