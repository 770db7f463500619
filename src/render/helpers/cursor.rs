//! Page cursor: the write position and the buffered pages
//!
//! Every page is kept as a `LayerBuilder` until the document is finished, so
//! later passes (the footer) can append to pages after the total is known.

use log::debug;

use super::layer::LayerBuilder;

/// Page size and content bounds in top-down points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// x of the content's left edge
    pub left: f32,
    /// x of the content's right edge
    pub right: f32,
    /// y where content starts on a fresh page
    pub top: f32,
    /// Content must end at or above this y
    pub bottom: f32,
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.right - self.left
    }
}

/// Tracks the current page and vertical position
pub struct PageCursor {
    geometry: PageGeometry,
    pages: Vec<LayerBuilder>,
    y: f32,
}

impl PageCursor {
    /// Start with one blank page, positioned at the top margin
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![LayerBuilder::new(geometry.height)],
            y: geometry.top,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Zero-based index of the page being written
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Room left on the current page
    pub fn remaining(&self) -> f32 {
        self.geometry.bottom - self.y
    }

    /// Whether `height` fits below the current position
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.geometry.bottom
    }

    /// Start a new page if `height` doesn't fit. Returns true when a page
    /// break happened.
    ///
    /// A block taller than a whole page still breaks only once; callers that
    /// can produce such blocks must split them.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.fits(height) {
            return false;
        }
        debug!(
            "Page break before {:.1}pt block at y={:.1} (page {})",
            height,
            self.y,
            self.page_index() + 1
        );
        self.new_page();
        true
    }

    /// Append a blank page and move to its top margin
    pub fn new_page(&mut self) {
        self.pages.push(LayerBuilder::new(self.geometry.height));
        self.y = self.geometry.top;
    }

    /// The layer of the page being written
    pub fn layer(&mut self) -> &mut LayerBuilder {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn pages(&self) -> &[LayerBuilder] {
        &self.pages
    }

    /// All buffered pages, for passes over the finished layout
    pub fn pages_mut(&mut self) -> &mut [LayerBuilder] {
        &mut self.pages
    }

    pub fn into_pages(self) -> Vec<LayerBuilder> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry {
            width: 595.28,
            height: 841.89,
            left: 40.0,
            right: 555.0,
            top: 40.0,
            bottom: 780.0,
        }
    }

    #[test]
    fn test_starts_on_first_page_at_top() {
        let cursor = PageCursor::new(geometry());
        assert_eq!(cursor.page_count(), 1);
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(cursor.y(), 40.0);
        assert_eq!(cursor.geometry().content_width(), 515.0);
    }

    #[test]
    fn test_ensure_space_without_break() {
        let mut cursor = PageCursor::new(geometry());
        cursor.set_y(700.0);
        // Exactly reaching the bottom boundary still fits
        assert!(!cursor.ensure_space(80.0));
        assert_eq!(cursor.page_count(), 1);
        assert_eq!(cursor.y(), 700.0);
    }

    #[test]
    fn test_ensure_space_breaks_and_resets() {
        let mut cursor = PageCursor::new(geometry());
        cursor.set_y(700.0);
        assert!(cursor.ensure_space(80.5));
        assert_eq!(cursor.page_count(), 2);
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.y(), 40.0);
    }

    #[test]
    fn test_layer_targets_current_page() {
        let mut cursor = PageCursor::new(geometry());
        cursor.new_page();
        cursor
            .layer()
            .use_text("second", 8.0, 40.0, 40.0, printpdf::BuiltinFont::Helvetica);
        let pages = cursor.into_pages();
        assert!(pages[0].texts().is_empty());
        assert_eq!(pages[1].texts(), ["second"]);
    }

    #[test]
    fn test_remaining() {
        let mut cursor = PageCursor::new(geometry());
        cursor.advance(100.0);
        assert_eq!(cursor.y(), 140.0);
        assert_eq!(cursor.remaining(), 640.0);
        assert!(cursor.fits(640.0));
        assert!(!cursor.fits(640.1));
    }
}
