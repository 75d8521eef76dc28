//! PDF output
//!
//! This module turns assembled documents into files:
//! 1. Embed card images as image XObjects
//! 2. Emit content streams for every drawing command
//! 3. Write timestamped PDFs to the results directory

mod image;
mod io;
mod pdf;

pub use image::load_image_stream;
pub use io::{
    encode_pdf, generate_calibration, generate_deck, output_file_name, save_documents, save_pdf,
};
pub use pdf::{build_document, write_pdf};
