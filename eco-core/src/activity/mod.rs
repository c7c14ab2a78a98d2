//! Activity Aggregation

mod summarizer;

pub use summarizer::{ActivitySummarizer, RECENT_ACTIVITY_LIMIT};
