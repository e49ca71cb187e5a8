pub mod badge;
pub mod config;
pub mod duration;
pub mod format;
pub mod github;
pub mod logger;
pub mod pipeline;
pub mod readme;

pub use config::Config;
pub use duration::{CalendarDuration, DurationError};
pub use format::format_duration;
pub use pipeline::{RunReport, run};
pub use readme::PatchOutcome;
