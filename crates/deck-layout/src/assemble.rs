//! Document assembly
//!
//! Orders rendered front and back pages into one or two documents and owns
//! the page breaks between them.

use crate::layout::{Page, build_pages};
use crate::options::LayoutConfig;
use crate::render::{DrawCommand, PageRenderer};
use crate::types::*;
use log::info;

/// One entry in a document's event stream
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Draw(DrawCommand),
    /// Ends the current page
    PageBreak,
}

/// What a document contains, used for naming output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Fronts,
    Backs,
    /// Front and back pages alternating
    Interleaved,
    Calibration,
}

impl DocumentKind {
    pub fn file_prefix(self) -> &'static str {
        match self {
            DocumentKind::Fronts => "fronts",
            DocumentKind::Backs => "backs",
            DocumentKind::Interleaved => "deck",
            DocumentKind::Calibration => "calibration",
        }
    }
}

/// A paginated stream of drawing commands
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub kind: DocumentKind,
    pub events: Vec<DocumentEvent>,
}

impl PageDocument {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            events: Vec::new(),
        }
    }

    /// Append a page's commands followed by a page break
    pub fn push_page(&mut self, ops: Vec<DrawCommand>) {
        self.events.extend(ops.into_iter().map(DocumentEvent::Draw));
        self.events.push(DocumentEvent::PageBreak);
    }

    pub fn page_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DocumentEvent::PageBreak))
            .count()
    }

    /// Commands grouped per page
    pub fn pages(&self) -> Vec<Vec<&DrawCommand>> {
        let mut pages = Vec::new();
        let mut current = Vec::new();
        for event in &self.events {
            match event {
                DocumentEvent::Draw(op) => current.push(op),
                DocumentEvent::PageBreak => pages.push(std::mem::take(&mut current)),
            }
        }
        pages
    }
}

/// The documents produced for one deck
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDeck {
    /// `[fronts, backs]` in sequential order, `[deck]` when interleaved
    pub documents: Vec<PageDocument>,
    pub page_count: usize,
    pub card_count: usize,
}

/// Render every page in the configured document order
pub fn assemble(pages: &[Page], config: &LayoutConfig) -> AssembledDeck {
    let renderer = PageRenderer::new(config);

    let documents = match config.order {
        DocumentOrder::Sequential => {
            let mut fronts = PageDocument::new(DocumentKind::Fronts);
            let mut backs = PageDocument::new(DocumentKind::Backs);
            for page in pages {
                fronts.push_page(renderer.render(page, Surface::Front));
            }
            for page in pages {
                backs.push_page(renderer.render(page, Surface::Back));
            }
            vec![fronts, backs]
        }
        DocumentOrder::Interleaved => {
            let mut deck = PageDocument::new(DocumentKind::Interleaved);
            for page in pages {
                deck.push_page(renderer.render(page, Surface::Front));
                deck.push_page(renderer.render(page, Surface::Back));
            }
            vec![deck]
        }
    };

    AssembledDeck {
        documents,
        page_count: pages.len(),
        card_count: pages.iter().map(|p| p.cards.len()).sum(),
    }
}

/// Lay out a whole deck: grid, paging and assembly
pub fn render_deck(cards: &[CardPair], config: &LayoutConfig) -> Result<AssembledDeck> {
    config.validate()?;

    let grid = config.grid();
    let pages = build_pages(cards, grid.columns, grid.rows);
    info!(
        "Laying out {} cards on {} pages ({}x{} grid, {:?})",
        cards.len(),
        pages.len(),
        grid.columns,
        grid.rows,
        config.order
    );

    Ok(assemble(&pages, config))
}

/// Two-page document with only crosshairs: a front page, then a back page
/// rotated and offset like card backs
pub fn calibration_document(config: &LayoutConfig) -> Result<PageDocument> {
    config.validate()?;

    let renderer = PageRenderer::new(config);
    let mut document = PageDocument::new(DocumentKind::Calibration);
    document.push_page(renderer.render_calibration(Surface::Front));
    document.push_page(renderer.render_calibration(Surface::Back));
    Ok(document)
}
