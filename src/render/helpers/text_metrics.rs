//! Text measurement and line wrapping for PDF builtin fonts
//!
//! All measurements are in points. Widths come from Adobe's AFM metrics for
//! the Standard 14 fonts, so the wrapped lines we measure are exactly the
//! lines we draw.

use printpdf::BuiltinFont;

/// Line box height as a fraction of font size (font bounding box height)
const HELVETICA_LINE_HEIGHT: f32 = 1.156;
const TIMES_LINE_HEIGHT: f32 = 1.116;

const ELLIPSIS: &str = "...";

/// Text measurer for PDF builtin fonts
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    fn is_times(&self) -> bool {
        matches!(
            self.font,
            BuiltinFont::TimesRoman
                | BuiltinFont::TimesBold
                | BuiltinFont::TimesItalic
                | BuiltinFont::TimesBoldItalic
        )
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        // Builtin fonts are Win-1252; measure anything else as a mid-width glyph
        if !c.is_ascii() {
            return 556;
        }

        let code = c as usize;
        match self.font {
            BuiltinFont::TimesRoman | BuiltinFont::TimesItalic => {
                TIMES_ROMAN_WIDTHS.get(code).copied().unwrap_or(250)
            }
            BuiltinFont::TimesBold | BuiltinFont::TimesBoldItalic => {
                TIMES_BOLD_WIDTHS.get(code).copied().unwrap_or(250)
            }
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                HELVETICA_BOLD_WIDTHS.get(code).copied().unwrap_or(278)
            }
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => 600, // Monospace
            _ => HELVETICA_WIDTHS.get(code).copied().unwrap_or(278),
        }
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascender_pt(&self, font_size: f32) -> f32 {
        let ascender = if self.is_times() { 683.0 } else { 718.0 };
        ascender / 1000.0 * font_size
    }

    /// Height of one line box
    pub fn line_height_pt(&self, font_size: f32) -> f32 {
        let factor = if self.is_times() {
            TIMES_LINE_HEIGHT
        } else {
            HELVETICA_LINE_HEIGHT
        };
        font_size * factor
    }

    /// Greedy word wrap to `max_width`. Explicit newlines start new lines and
    /// words wider than the column are split by character.
    pub fn wrap(&self, text: &str, font_size: f32, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let space = self.measure_width_pt(" ", font_size);

        for paragraph in text.lines() {
            let mut current = String::new();
            let mut current_width = 0.0;

            for word in paragraph.split_whitespace() {
                let word_width = self.measure_width_pt(word, font_size);

                if word_width > max_width {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    let mut pieces = self.split_long_word(word, font_size, max_width);
                    if let Some(last) = pieces.pop() {
                        lines.extend(pieces);
                        current_width = self.measure_width_pt(&last, font_size);
                        current = last;
                    }
                    continue;
                }

                if current.is_empty() {
                    current.push_str(word);
                    current_width = word_width;
                } else if current_width + space + word_width <= max_width {
                    current.push(' ');
                    current.push_str(word);
                    current_width += space + word_width;
                } else {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                    current_width = word_width;
                }
            }

            if !current.is_empty() {
                lines.push(current);
            }
        }

        lines
    }

    fn split_long_word(&self, word: &str, font_size: f32, max_width: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0;
        for c in word.chars() {
            let cw = self.measure_width_pt(c.encode_utf8(&mut [0; 4]), font_size);
            if !piece.is_empty() && width + cw > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += cw;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }

    /// Height of `text` wrapped to `max_width`, with `line_gap` after each line
    pub fn text_height(&self, text: &str, font_size: f32, max_width: f32, line_gap: f32) -> f32 {
        let lines = self.wrap(text, font_size, max_width).len();
        lines as f32 * (self.line_height_pt(font_size) + line_gap)
    }

    /// Shorten single-line text to fit `max_width`, ending with "..."
    pub fn truncate(&self, text: &str, font_size: f32, max_width: f32) -> String {
        if self.measure_width_pt(text, font_size) <= max_width {
            return text.to_string();
        }
        let budget = max_width - self.measure_width_pt(ELLIPSIS, font_size);
        let mut out = String::new();
        let mut width = 0.0;
        for c in text.chars() {
            let cw = self.measure_width_pt(c.encode_utf8(&mut [0; 4]), font_size);
            if width + cw > budget {
                break;
            }
            out.push(c);
            width += cw;
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push_str(ELLIPSIS);
        out
    }
}

/// Get a builtin font measurer for Helvetica (sans-serif regular)
pub fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

/// Get a builtin font measurer for Helvetica-Bold
pub fn get_helvetica_bold_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
}

/// Get a builtin font measurer for Times-Roman (serif regular)
pub fn get_times_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::TimesRoman))
}

/// Get a builtin font measurer for Times-Bold
pub fn get_times_bold_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::TimesBold))
}

/// Get the appropriate builtin font measurer for a BuiltinFont
pub fn get_builtin_measurer(font: BuiltinFont) -> &'static BuiltinFontMeasurer {
    match font {
        BuiltinFont::TimesRoman | BuiltinFont::TimesItalic => get_times_measurer(),
        BuiltinFont::TimesBold | BuiltinFont::TimesBoldItalic => get_times_bold_measurer(),
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
            get_helvetica_bold_measurer()
        }
        // Courier, Symbol, ZapfDingbats - default to Helvetica metrics
        _ => get_helvetica_measurer(),
    }
}

// =============================================================================
// Adobe AFM Character Width Tables (ASCII subset, in 1000 units per em)
// =============================================================================

/// Times-Roman character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 128] = [
    // 0-31: Control characters (use 0)
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 48-63: 0 1 2 3 4 5 6 7 8 9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    // 64-79: @ A B C D E F G H I J K L M N O
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    // 80-95: P Q R S T U V W X Y Z [ \ ] ^ _
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    // 96-111: ` a b c d e f g h i j k l m n o
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    // 112-127: p q r s t u v w x y z { | } ~ DEL
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
];

/// Times-Bold character widths
#[rustfmt::skip]
static TIMES_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520, 0,
];

/// Helvetica character widths
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_scales_with_size() {
        let measurer = get_helvetica_measurer();
        let width = measurer.measure_width_pt("Hello", 8.0);
        assert!(width > 0.0);
        let bigger = measurer.measure_width_pt("Hello", 16.0);
        assert!((bigger - width * 2.0).abs() < 0.01);
        // Bold glyphs are at least as wide
        assert!(get_helvetica_bold_measurer().measure_width_pt("Hello", 8.0) >= width);
    }

    #[test]
    fn test_wrap_respects_width() {
        let measurer = get_helvetica_measurer();
        let text = "The nearside rear door has a shallow dent below the handle and light scratches";
        let lines = measurer.wrap(text, 8.0, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measurer.measure_width_pt(line, 8.0) <= 100.0);
        }
        // No words lost
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let measurer = get_helvetica_measurer();
        let word = "x".repeat(200);
        let lines = measurer.wrap(&word, 7.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(measurer.measure_width_pt(line, 7.0) <= 50.0);
        }
    }

    #[test]
    fn test_wrap_keeps_paragraphs_and_skips_empty() {
        let measurer = get_helvetica_measurer();
        assert!(measurer.wrap("", 8.0, 100.0).is_empty());
        assert_eq!(measurer.wrap("one\ntwo", 8.0, 500.0), vec!["one", "two"]);
        assert_eq!(measurer.text_height("", 8.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_text_height_counts_lines() {
        let measurer = get_helvetica_measurer();
        let one = measurer.text_height("short", 9.0, 400.0, 3.0);
        assert!((one - (measurer.line_height_pt(9.0) + 3.0)).abs() < 0.001);
        let two = measurer.text_height("a\nb", 9.0, 400.0, 3.0);
        assert!((two - one * 2.0).abs() < 0.001);
    }

    #[test]
    fn test_truncate() {
        let measurer = get_helvetica_measurer();
        assert_eq!(measurer.truncate("Pirelli", 8.0, 100.0), "Pirelli");
        let long = measurer.truncate("Bridgestone Turanza T005 Driveguard", 8.0, 60.0);
        assert!(long.ends_with("..."));
        assert!(measurer.measure_width_pt(&long, 8.0) <= 60.0);
    }

    #[test]
    fn test_helvetica_vs_times() {
        let times = get_times_measurer();
        let helvetica = get_helvetica_measurer();
        let times_width = times.measure_width_pt("Hello", 11.0);
        let helvetica_width = helvetica.measure_width_pt("Hello", 11.0);
        assert!((times_width - helvetica_width).abs() > 0.01);
        assert!(times.line_height_pt(10.0) < helvetica.line_height_pt(10.0));
    }
}
