mod stats;

pub use stats::StatsError;
pub use stats::StatsManager;
pub use stats::summarize;
