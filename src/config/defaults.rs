//! Default layout and runtime values. Geometry is in PDF points.

/// A4 page width in points
pub const A4_WIDTH_PT: f32 = 595.28;

/// A4 page height in points
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Left margin and x of the content area's left edge
pub const DEFAULT_MARGIN_LEFT: f32 = 40.0;

/// x of the content area's right edge
pub const DEFAULT_CONTENT_RIGHT: f32 = 555.0;

/// y at which content resumes after a page break
pub const DEFAULT_MARGIN_TOP: f32 = 40.0;

/// Content must not extend below this y; the footer sits beneath it
pub const DEFAULT_CONTENT_BOTTOM: f32 = 780.0;

pub const DEFAULT_COMPANY_NAME: &str = "12 LONDON RD";
pub const DEFAULT_COMPANY_ADDRESS: &str = "Hamilton Court, Carthouse Lane, Horsell, GU21 4XS";
pub const DEFAULT_COMPANY_PHONE: &str = "Tel: 01276 473359";

/// Per-image fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: f32 = 5.0;

/// Number of photos fetched at once
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

/// Largest accepted photo download
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;
