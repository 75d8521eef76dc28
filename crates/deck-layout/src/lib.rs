mod assemble;
mod constants;
mod deck;
pub mod layout;
mod options;
pub mod output;
pub mod render;
mod types;

pub use assemble::*;
pub use constants::mm_to_pt;
pub use deck::*;
pub use layout::{GridPosition, GridSize, Page, PageGeometry, build_pages, compute_grid};
pub use options::*;
pub use output::{generate_calibration, generate_deck, save_pdf, write_pdf};
pub use render::{DrawCommand, PageRenderer, normalize_rotation, render_page};
pub use types::*;
