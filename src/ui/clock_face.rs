//! Large block-digit `MM:SS` clock.
//!
//! Digits are drawn with a 5-row block font. When the area is too small for
//! the block font the clock falls back to a single line of plain text, so it
//! stays readable on tiny terminals.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

const GLYPH_HEIGHT: u16 = 5;
const DIGIT_WIDTH: u16 = 5;
const COLON_WIDTH: u16 = 3;
/// Padding around each segment, so a highlight reads as a box
const SEGMENT_PAD: u16 = 1;

static DIGITS: [[&str; 5]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", "█████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "    █", "    █", "    █"],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

static COLON: [&str; 5] = ["   ", " █ ", "   ", " █ ", "   "];

/// Where each part of the clock lands for a given area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockGeometry {
    pub minutes: Rect,
    pub colon: Rect,
    pub seconds: Rect,
    /// Block font (true) or single-line fallback (false)
    pub large: bool,
}

/// Widget drawing `minutes:seconds` centered in its area
pub struct ClockFace<'a> {
    minutes: &'a str,
    seconds: &'a str,
    style: Style,
    minutes_style: Option<Style>,
    seconds_style: Option<Style>,
}

impl<'a> ClockFace<'a> {
    pub fn new(minutes: &'a str, seconds: &'a str) -> Self {
        Self {
            minutes,
            seconds,
            style: Style::default(),
            minutes_style: None,
            seconds_style: None,
        }
    }

    /// Build from an `MM:SS` string
    pub fn from_mm_ss(text: &'a str) -> Self {
        let (minutes, seconds) = text.split_once(':').unwrap_or((text, ""));
        Self::new(minutes, seconds)
    }

    /// Base style for the whole clock
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn minutes_style(mut self, style: Style) -> Self {
        self.minutes_style = Some(style);
        self
    }

    pub fn seconds_style(mut self, style: Style) -> Self {
        self.seconds_style = Some(style);
        self
    }

    /// Compute the placement of each part inside `area`
    pub fn geometry(&self, area: Rect) -> ClockGeometry {
        let minutes_w = digits_width(self.minutes) + SEGMENT_PAD * 2;
        let seconds_w = digits_width(self.seconds) + SEGMENT_PAD * 2;
        let height = GLYPH_HEIGHT + SEGMENT_PAD * 2;
        let width = minutes_w + COLON_WIDTH + seconds_w;

        if area.width >= width && area.height >= height {
            let x = area.x + (area.width - width) / 2;
            let y = area.y + (area.height - height) / 2;
            return ClockGeometry {
                minutes: Rect::new(x, y, minutes_w, height),
                colon: Rect::new(x + minutes_w, y, COLON_WIDTH, height),
                seconds: Rect::new(x + minutes_w + COLON_WIDTH, y, seconds_w, height),
                large: true,
            };
        }

        let minutes_w = text_width(self.minutes);
        let seconds_w = text_width(self.seconds);
        let width = (minutes_w + 1 + seconds_w).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height / 2;
        let height = area.height.min(1);
        ClockGeometry {
            minutes: clip(Rect::new(x, y, minutes_w, height), area),
            colon: clip(Rect::new(x + minutes_w, y, 1, height), area),
            seconds: clip(Rect::new(x + minutes_w + 1, y, seconds_w, height), area),
            large: false,
        }
    }
}

impl Widget for ClockFace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = self.geometry(area);
        let minutes_style = self.style.patch(self.minutes_style.unwrap_or_default());
        let seconds_style = self.style.patch(self.seconds_style.unwrap_or_default());

        if geometry.large {
            draw_segment(buf, geometry.minutes, self.minutes, minutes_style);
            draw_colon(buf, geometry.colon, self.style);
            draw_segment(buf, geometry.seconds, self.seconds, seconds_style);
        } else {
            let parts = [
                (geometry.minutes, self.minutes, minutes_style),
                (geometry.colon, ":", self.style),
                (geometry.seconds, self.seconds, seconds_style),
            ];
            for (rect, text, style) in parts {
                if rect.width > 0 && rect.height > 0 {
                    buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
                }
            }
        }
    }
}

fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

/// Width of a run of block-font digits with one column between glyphs
fn digits_width(text: &str) -> u16 {
    let n = text_width(text);
    if n == 0 {
        0
    } else {
        n * DIGIT_WIDTH + (n - 1)
    }
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}

/// Fill the padded segment box, then draw its glyphs inside
fn draw_segment(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    buf.set_style(rect, style);
    let mut x = rect.x + SEGMENT_PAD;
    let y = rect.y + SEGMENT_PAD;
    for c in text.chars() {
        if let Some(glyph) = c.to_digit(10).map(|d| &DIGITS[d as usize]) {
            for (row, line) in glyph.iter().enumerate() {
                buf.set_string(x, y + row as u16, line, style);
            }
        }
        x += DIGIT_WIDTH + 1;
    }
}

fn draw_colon(buf: &mut Buffer, rect: Rect, style: Style) {
    let y = rect.y + SEGMENT_PAD;
    for (row, line) in COLON.iter().enumerate() {
        buf.set_string(rect.x, y + row as u16, line, style);
    }
}
