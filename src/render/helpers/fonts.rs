use printpdf::BuiltinFont;

use super::text_metrics::{get_builtin_measurer, BuiltinFontMeasurer};

/// Font family for a font set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    SansSerif, // Helvetica
    Serif,     // Times
}

impl FontFamily {
    /// Determine font family from a font name
    pub fn from_name(name: &str) -> Self {
        let name_lower = name.to_lowercase();
        if name_lower.contains("times")
            || (name_lower.contains("serif") && !name_lower.contains("sans"))
            || name_lower.contains("georgia")
            || name_lower.contains("garamond")
        {
            FontFamily::Serif
        } else {
            // Arial, Helvetica and unknown names
            FontFamily::SansSerif
        }
    }
}

/// Regular and bold builtin faces for one family
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFontSet {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
}

impl BuiltinFontSet {
    pub fn for_family(family: FontFamily) -> Self {
        match family {
            FontFamily::SansSerif => Self {
                regular: BuiltinFont::Helvetica,
                bold: BuiltinFont::HelveticaBold,
            },
            FontFamily::Serif => Self {
                regular: BuiltinFont::TimesRoman,
                bold: BuiltinFont::TimesBold,
            },
        }
    }

    pub fn face(&self, bold: bool) -> BuiltinFont {
        if bold {
            self.bold
        } else {
            self.regular
        }
    }

    /// Metrics for the regular or bold face
    pub fn measurer(&self, bold: bool) -> &'static BuiltinFontMeasurer {
        get_builtin_measurer(self.face(bold))
    }
}

impl Default for BuiltinFontSet {
    fn default() -> Self {
        Self::for_family(FontFamily::SansSerif)
    }
}
