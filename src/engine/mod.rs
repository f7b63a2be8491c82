pub mod pipeline;
#[cfg(test)]
pub mod integration_tests;

pub use pipeline::{run_pipeline, run_stream, PipelineReport};
