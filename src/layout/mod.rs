//! Document layout.
//!
//! The portfolio page is a vertical stack of sections. Each section reports
//! its height at the current content width; a Taffy column tree (with a gap
//! between sections) then positions every section and yields the total
//! document height. The shell renders each section into the document buffer
//! at its computed rect.

pub mod text_measure;

use std::io;

use taffy::{
    AvailableSpace, Dimension, FlexDirection, LengthPercentage, Rect, Size, Style, TaffyTree,
};

/// Vertical gap between sections, in rows.
pub const SECTION_GAP: u16 = 2;

/// Horizontal page padding, in columns.
pub const PAGE_PADDING_X: u16 = 2;

/// Rows reserved at the top of the document for the fixed overlays
/// (progress bar + navbar) so the hero starts below them.
pub const PAGE_PADDING_TOP: u16 = 3;

// =============================================================================
// Types
// =============================================================================

/// A section's resolved position and size within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl SectionRect {
    /// Row of the section's bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether any row of this rect falls inside [top, bottom).
    pub fn intersects_rows(&self, top: u16, bottom: u16) -> bool {
        self.y < bottom && self.bottom() > top
    }
}

/// The positioned document: one rect per section, in order.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub rects: Vec<SectionRect>,
    pub total_height: u16,
}

// =============================================================================
// Layout computation
// =============================================================================

/// Position a column of sections with `section_heights` at `width` columns.
///
/// Rects come back in input order. The content width handed to each section
/// is `width - 2 * PAGE_PADDING_X`; callers measure heights at that width
/// before calling.
pub fn layout_document(width: u16, section_heights: &[u16]) -> io::Result<DocumentLayout> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let mut children = Vec::with_capacity(section_heights.len());
    for &height in section_heights {
        let child = tree
            .new_leaf(Style {
                size: Size {
                    width: Dimension::Percent(1.0),
                    height: Dimension::Length(height as f32),
                },
                ..Default::default()
            })
            .map_err(layout_error)?;
        children.push(child);
    }

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::Length(width as f32),
                    height: Dimension::Auto,
                },
                gap: Size {
                    width: LengthPercentage::Length(0.0),
                    height: LengthPercentage::Length(SECTION_GAP as f32),
                },
                padding: Rect {
                    left: LengthPercentage::Length(PAGE_PADDING_X as f32),
                    right: LengthPercentage::Length(PAGE_PADDING_X as f32),
                    top: LengthPercentage::Length(PAGE_PADDING_TOP as f32),
                    bottom: LengthPercentage::Length(0.0),
                },
                ..Default::default()
            },
            &children,
        )
        .map_err(layout_error)?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::MaxContent,
        },
    )
    .map_err(layout_error)?;

    let mut rects = Vec::with_capacity(children.len());
    for child in &children {
        let layout = tree.layout(*child).map_err(layout_error)?;
        rects.push(SectionRect {
            x: layout.location.x.round() as u16,
            y: layout.location.y.round() as u16,
            width: layout.size.width.round() as u16,
            height: layout.size.height.round() as u16,
        });
    }

    let root_layout = tree.layout(root).map_err(layout_error)?;
    let total_height = root_layout.size.height.round() as u16;

    Ok(DocumentLayout {
        rects,
        total_height,
    })
}

/// The content width sections measure themselves against.
#[inline]
pub fn content_width(terminal_width: u16) -> u16 {
    terminal_width.saturating_sub(PAGE_PADDING_X * 2)
}

fn layout_error(err: taffy::TaffyError) -> io::Error {
    io::Error::other(format!("layout failed: {err}"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections_in_order() {
        let doc = layout_document(80, &[10, 20, 5]).unwrap();
        assert_eq!(doc.rects.len(), 3);

        assert_eq!(doc.rects[0].y, PAGE_PADDING_TOP);
        assert_eq!(doc.rects[0].height, 10);

        assert_eq!(doc.rects[1].y, PAGE_PADDING_TOP + 10 + SECTION_GAP);
        assert_eq!(doc.rects[1].height, 20);

        assert_eq!(
            doc.rects[2].y,
            PAGE_PADDING_TOP + 10 + SECTION_GAP + 20 + SECTION_GAP
        );
        assert_eq!(doc.rects[2].height, 5);
    }

    #[test]
    fn test_layout_total_height_includes_gaps_and_top_padding() {
        let doc = layout_document(80, &[10, 20, 5]).unwrap();
        assert_eq!(
            doc.total_height,
            PAGE_PADDING_TOP + 10 + 20 + 5 + 2 * SECTION_GAP
        );
    }

    #[test]
    fn test_layout_applies_horizontal_padding() {
        let doc = layout_document(80, &[10]).unwrap();
        assert_eq!(doc.rects[0].x, PAGE_PADDING_X);
        assert_eq!(doc.rects[0].width, 80 - 2 * PAGE_PADDING_X);
    }

    #[test]
    fn test_layout_empty_document() {
        let doc = layout_document(80, &[]).unwrap();
        assert!(doc.rects.is_empty());
        assert_eq!(doc.total_height, PAGE_PADDING_TOP);
    }

    #[test]
    fn test_rect_row_intersection() {
        let rect = SectionRect {
            x: 0,
            y: 10,
            width: 80,
            height: 5,
        };
        assert!(rect.intersects_rows(0, 11));
        assert!(rect.intersects_rows(14, 30));
        assert!(!rect.intersects_rows(0, 10));
        assert!(!rect.intersects_rows(15, 30));
    }

    #[test]
    fn test_content_width() {
        assert_eq!(content_width(80), 80 - 2 * PAGE_PADDING_X);
        assert_eq!(content_width(2), 0);
    }
}
