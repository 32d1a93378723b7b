//! Vertical rhythm and modular scale helpers for the page shell.

/// Minimum gap between a glyph box and its line box, in pixels, on each side.
const MIN_LINE_PADDING_PX: f64 = 2.0;

/// Typographic theme. Built once at startup and only ever read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub base_font_size_px: f64,
    pub base_line_height: f64,
    pub scale_ratio: f64,
    pub paragraph_spacing: f64,
    pub primary_color: String,
    pub header_font_family: String,
}

/// Font size and matching line height for one step of the modular scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub font_size: String,
    pub line_height: String,
}

impl Scale {
    pub fn to_style(&self) -> String {
        format!("font-size: {}; line-height: {};", self.font_size, self.line_height)
    }
}

impl Typography {
    fn base_line_height_px(&self) -> f64 {
        self.base_font_size_px * self.base_line_height
    }

    /// `lines` multiples of the base line height, in `rem`.
    pub fn rhythm(&self, lines: f64) -> String {
        rem(self.base_line_height * lines)
    }

    /// Font size `ratio^step` with a line height snapped to half rhythm lines.
    pub fn scale(&self, step: f64) -> Scale {
        let font_size_rem = self.scale_ratio.powf(step);
        let font_size_px = font_size_rem * self.base_font_size_px;
        let line_px = self.base_line_height_px();

        let mut lines = (2.0 * font_size_px / line_px).ceil() / 2.0;
        if lines <= 0.0 {
            lines = 0.5;
        }
        if lines * line_px - font_size_px < MIN_LINE_PADDING_PX * 2.0 {
            lines += 0.5;
        }
        let line_height = lines * line_px / font_size_px;

        Scale {
            font_size: rem(font_size_rem),
            line_height: trim(line_height),
        }
    }

    pub fn container_style(&self) -> String {
        format!(
            "margin-left: auto; margin-right: auto; max-width: {}; padding: {} {};",
            self.rhythm(26.0),
            self.rhythm(1.5),
            self.rhythm(3.0 / 4.0),
        )
    }

    pub fn paragraph_margin(&self) -> String {
        self.rhythm(self.paragraph_spacing)
    }
}

fn rem(value: f64) -> String {
    format!("{}rem", trim(value))
}

fn trim(value: f64) -> String {
    let rounded = format!("{value:.4}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}
