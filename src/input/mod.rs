//! Input adapters that drive the star panel from outside the core.

#[cfg(feature = "gui")]
pub mod gui;
