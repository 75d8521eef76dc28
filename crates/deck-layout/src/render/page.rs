//! Per-page placement of card images

use crate::constants::{BACKGROUND_GRAY, ROTATION_EPSILON};
use crate::layout::{GridPosition, Page, PageGeometry};
use crate::options::LayoutConfig;
use crate::types::Surface;
use log::debug;

use super::marks::{crosshairs, guide_lines};
use super::{DrawCommand, normalize_rotation};

// =============================================================================
// Public API
// =============================================================================

/// Render one surface of a page into drawing commands.
///
/// Convenience wrapper around [`PageRenderer`] for a single page.
pub fn render_page(page: &Page, config: &LayoutConfig, surface: Surface) -> Vec<DrawCommand> {
    PageRenderer::new(config).render(page, surface)
}

/// Renders pages for one layout configuration.
///
/// The grid geometry is resolved once and reused for every page.
pub struct PageRenderer<'a> {
    config: &'a LayoutConfig,
    geometry: PageGeometry,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            geometry: PageGeometry::new(config),
        }
    }

    /// Commands for one surface of `page`, in drawing order:
    /// back rotation, cells, cutting guides, crosshairs.
    pub fn render(&self, page: &Page, surface: Surface) -> Vec<DrawCommand> {
        let mut ops = Vec::with_capacity(page.cards.len() + 1);

        ops.extend(self.rotation(surface));

        let columns = self.geometry.grid.columns;
        for (idx, card) in page.cards.iter().enumerate() {
            let pos = GridPosition::from_index(idx, columns);
            let rect = self.geometry.cell_rect(pos, surface, self.config);

            ops.push(match card.image_for(surface) {
                Some(path) => DrawCommand::PlaceImage {
                    path: path.clone(),
                    rect,
                },
                None => DrawCommand::FillRect {
                    rect,
                    gray: BACKGROUND_GRAY,
                },
            });
        }

        if self.config.guide_lines && surface == Surface::Front {
            ops.extend(guide_lines(&self.geometry));
        }

        if self.config.crosshairs {
            ops.extend(self.crosshairs(surface));
        }

        debug!(
            "Rendered {:?} of page {} ({} cards, {} commands)",
            surface,
            page.index + 1,
            page.cards.len(),
            ops.len()
        );

        ops
    }

    /// A page carrying only crosshairs, transformed like a card page
    pub fn render_calibration(&self, surface: Surface) -> Vec<DrawCommand> {
        let mut ops: Vec<DrawCommand> = self.rotation(surface).into_iter().collect();
        ops.extend(self.crosshairs(surface));
        ops
    }

    /// Rotation about the page center, backs only
    fn rotation(&self, surface: Surface) -> Option<DrawCommand> {
        if surface != Surface::Back {
            return None;
        }

        let degrees = normalize_rotation(self.config.rotation_deg);
        if degrees.abs() < ROTATION_EPSILON {
            return None;
        }

        Some(DrawCommand::Rotate {
            degrees,
            center_x: self.config.page_width / 2.0,
            center_y: self.config.page_height / 2.0,
        })
    }

    fn crosshairs(&self, surface: Surface) -> Vec<DrawCommand> {
        let (offset_x, offset_y) = match surface {
            Surface::Front => (0.0, 0.0),
            Surface::Back => (self.config.back_offset_x, self.config.back_offset_y),
        };
        crosshairs(
            self.config.page_width,
            self.config.page_height,
            offset_x,
            offset_y,
        )
    }
}
