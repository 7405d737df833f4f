mod aggregator;
mod report;

pub use aggregator::{Aggregator, Bucket, DEFAULT_THRESHOLD, Summary};
pub use report::{RunReport, SkippedFile};
