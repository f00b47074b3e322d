pub mod aggregator;
pub mod cache;
pub mod clock;
pub mod daily;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod outcome;
pub mod phrases;
pub mod preprocess;
pub mod retry;
pub mod scorer;
pub mod speech;
pub mod translation;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::WordInfoAggregator;
pub use cache::WordCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use daily::{DailyWordGenerator, DailyWordStore};
pub use error::CoreError;
pub use outcome::{Degradation, Outcome};
pub use retry::{Backoff, RetryPolicy};
