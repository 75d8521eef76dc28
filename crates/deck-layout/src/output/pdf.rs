//! PDF document construction
//!
//! Converts a [`PageDocument`] into a PDF using raw content stream
//! operators. Every page has the configured media box and its content is
//! wrapped in a single `q ... Q` pair so a back-page rotation applies to
//! the whole page.

use crate::assemble::PageDocument;
use crate::options::LayoutConfig;
use crate::render::DrawCommand;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::PathBuf;

use super::image::load_image_stream;

/// Image XObjects already embedded in the output, keyed by source path
type ImageCache = HashMap<PathBuf, (ObjectId, String)>;

/// Build PDF bytes for a document.
///
/// Any unreadable image aborts the whole document.
pub fn write_pdf(document: &PageDocument, config: &LayoutConfig) -> Result<Vec<u8>> {
    let mut output = build_document(document, config)?;
    let mut writer = Vec::new();
    output.save_to(&mut writer)?;
    Ok(writer)
}

/// Build the in-memory PDF for a document
pub fn build_document(document: &PageDocument, config: &LayoutConfig) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let mut images = ImageCache::new();
    let mut kids = Vec::new();

    for ops in document.pages() {
        let page_id = render_pdf_page(&mut output, &ops, config, pages_id, &mut images)?;
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    Ok(output)
}

fn render_pdf_page(
    output: &mut Document,
    ops: &[&DrawCommand],
    config: &LayoutConfig,
    parent_pages_id: ObjectId,
    images: &mut ImageCache,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(config.page_width),
            Object::Real(config.page_height),
        ]),
    );

    let mut content = String::from("q\n");
    let mut xobjects = Dictionary::new();

    for op in ops {
        match op {
            DrawCommand::Rotate {
                degrees,
                center_x,
                center_y,
            } => content.push_str(&rotation_command(*degrees, *center_x, *center_y)),
            DrawCommand::PlaceImage { path, rect } => {
                let (image_id, name) = match images.get(path) {
                    Some(entry) => entry.clone(),
                    None => {
                        let image_id = output.add_object(load_image_stream(path)?);
                        let entry = (image_id, format!("Im{}", images.len()));
                        images.insert(path.clone(), entry.clone());
                        entry
                    }
                };
                xobjects.set(name.as_bytes(), Object::Reference(image_id));
                content.push_str(&format!(
                    "q {} 0 0 {} {} {} cm /{} Do Q\n",
                    rect.width, rect.height, rect.x, rect.y, name
                ));
            }
            DrawCommand::FillRect { rect, gray } => {
                content.push_str(&format!(
                    "q {} g {} {} {} {} re f Q\n",
                    gray, rect.x, rect.y, rect.width, rect.height
                ));
            }
            DrawCommand::Line {
                from,
                to,
                width,
                gray,
            } => {
                content.push_str(&format!(
                    "q {} w {} G {} {} m {} {} l S Q\n",
                    width, gray, from.0, from.1, to.0, to.1
                ));
            }
        }
    }

    content.push_str("Q\n");

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// `cm` operator rotating counter-clockwise about `(cx, cy)`.
///
/// Equivalent to translate(cx, cy) · rotate(θ) · translate(−cx, −cy).
fn rotation_command(degrees: f32, cx: f32, cy: f32) -> String {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let e = cx - cx * cos + cy * sin;
    let f = cy - cx * sin - cy * cos;
    format!("{} {} {} {} {} {} cm\n", cos, sin, -sin, cos, e, f)
}
