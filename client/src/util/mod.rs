//! Small pure helpers shared by components and pages.

pub mod clock;
pub mod format;
pub mod notify;
pub mod progress;
