//! Fonts available to label widgets.
//!
//! Labels only store a [`Font`] tag; the `MonoFont` reference is resolved at
//! draw time so widgets stay `Copy` and small.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_8X13;
use profont::PROFONT_14_POINT;

/// Body font (8x13 pixels). Default for labels.
pub const BODY_FONT: &MonoFont = &FONT_8X13;

/// Heading font (`ProFont` 14pt). Used for emphasized info lines.
pub const HEADING_FONT: &MonoFont = &PROFONT_14_POINT;

/// Font selection for a label widget.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Font {
    #[default]
    Body,
    Heading,
}

impl Font {
    /// The monospace font backing this selection.
    #[inline]
    pub const fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Body => BODY_FONT,
            Self::Heading => HEADING_FONT,
        }
    }

    /// Width of one rendered character including spacing.
    #[inline]
    pub const fn advance(self) -> u32 {
        let font = self.mono_font();
        font.character_size.width + font.character_spacing
    }

    /// Height of one text line.
    #[inline]
    pub const fn line_height(self) -> u32 { self.mono_font().character_size.height }

    /// Bounding size of a single line of `text` in this font.
    pub const fn text_size(
        self,
        text: &str,
    ) -> embedded_graphics::geometry::Size {
        let chars = text.len() as u32;
        let width = if chars == 0 {
            0
        } else {
            // No trailing spacing after the last glyph
            chars * self.advance() - self.mono_font().character_spacing
        };
        embedded_graphics::geometry::Size::new(width, self.line_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_is_body() {
        assert_eq!(Font::default(), Font::Body);
    }

    #[test]
    fn test_body_text_size() {
        let size = Font::Body.text_size("TL");
        assert_eq!(size.width, 2 * FONT_8X13.character_size.width + FONT_8X13.character_spacing);
        assert_eq!(size.height, 13);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(Font::Heading.text_size("").width, 0);
    }

    #[test]
    fn test_heading_is_larger_than_body() {
        assert!(Font::Heading.line_height() > Font::Body.line_height());
    }
}
