//! Layout calculation modules
//!
//! This module handles the geometric side of printing a deck:
//! - Grid capacity (how many cards fit on a page)
//! - Cell placement for front and mirrored back surfaces
//! - Paging of the card sequence

mod grid;
mod pager;

pub use grid::*;
pub use pager::*;
