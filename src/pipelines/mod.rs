//! Pipelines.
//!
//! [ReviewCollector] implements the paginated collection itself,
//! and [ReviewPipeline] runs a collection and saves it, behind the light [Pipeline] trait.
pub mod collector;
pub mod pipeline;
mod reviews;

pub use collector::{Collection, PageOutcome, ReviewCollector, StopReason, POLITENESS_DELAY};
pub use pipeline::Pipeline;
pub use reviews::ReviewPipeline;
