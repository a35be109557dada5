//! Output formatting for the terminal and machine-readable consumers.
//!
//! The HTML dashboard and the PDF report have their own modules; these
//! reporters cover the quick-look surfaces.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
