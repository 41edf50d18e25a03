pub mod cli;
pub mod config;
pub mod error;
pub mod enrichment;
pub mod lookup;
pub mod render;
pub mod interactive;
pub mod batch;
pub mod logging;

pub use sector_profiler_common as common;
