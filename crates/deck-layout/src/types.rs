use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No back image for {} and blank backs are disabled", front.display())]
    MissingBack { front: PathBuf },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Portrait dimensions in millimetres
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
        }
    }

    /// Look up a paper size by its settings name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "A3" => Ok(PaperSize::A3),
            "A4" => Ok(PaperSize::A4),
            "A5" => Ok(PaperSize::A5),
            "LETTER" => Ok(PaperSize::Letter),
            "LEGAL" => Ok(PaperSize::Legal),
            other => Err(DeckError::Config(format!("Unknown page size: {}", other))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "LETTER",
            PaperSize::Legal => "LEGAL",
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Printed first; never rotated, offset or oversized
    Front,
    /// Printed on the reverse; columns mirrored
    Back,
}

/// Role marker parsed from a card file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// `F` marker: a front with a pair id
    Front,
    /// `B` marker: a back that pairs with the front of the same id
    Back,
    /// No marker: single-sided card
    Unmarked,
}

/// A single image file in the deck directory
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    pub path: PathBuf,
    /// Two-digit pair id, present only with a role marker
    pub pair_id: Option<String>,
    pub role: CardRole,
    /// Repeat count; ignored for backs
    pub quantity: usize,
    /// Display name, used for logging only
    pub name: String,
}

/// One scheduled card: a front and what goes behind it
#[derive(Debug, Clone, PartialEq)]
pub struct CardPair {
    pub front: PathBuf,
    /// `None` renders a blank rectangle
    pub back: Option<PathBuf>,
}

impl CardPair {
    pub fn new(front: impl Into<PathBuf>, back: Option<PathBuf>) -> Self {
        Self {
            front: front.into(),
            back,
        }
    }

    /// Image for the given surface, `None` for a blank back
    pub fn image_for(&self, surface: Surface) -> Option<&PathBuf> {
        match surface {
            Surface::Front => Some(&self.front),
            Surface::Back => self.back.as_ref(),
        }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Grow by `amount` in both dimensions, keeping the same center
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            x: self.x - amount / 2.0,
            y: self.y - amount / 2.0,
            width: self.width + amount,
            height: self.height + amount,
        }
    }
}

/// How fronts and backs are ordered in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentOrder {
    /// Two documents: all fronts, then all backs (manual two-pass printing)
    #[default]
    Sequential,
    /// One document alternating front and back pages (duplex printers)
    Interleaved,
}
