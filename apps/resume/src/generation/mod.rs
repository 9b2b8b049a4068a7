// Selection core: tag filter, experience budget, skill caps, date ranges.
// Pure functions over the loaded Profile; trace output goes through
// SelectionObserver, never straight to the logger.

pub mod content_selector;
pub mod date_range;
pub mod generator;
pub mod observer;
pub mod skills;
pub mod tag_filter;

pub use generator::build_resume_view;
pub use observer::TracingObserver;
