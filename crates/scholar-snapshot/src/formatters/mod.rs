//! Output formatters for the snapshot file and the console.

mod console;
mod json;

pub use self::json::*;
pub use console::*;
