//! Page rendering
//!
//! Rendering is split in two steps: this module turns a page of cards into
//! backend-neutral [`DrawCommand`]s, and `output` turns those into PDF.
//! Keeping the placement math free of PDF objects lets it be tested
//! directly.

mod commands;
mod marks;
mod page;

pub use commands::*;
pub use marks::{crosshairs, guide_lines};
pub use page::*;
