//! SVG word-cloud renderer.
//!
//! Words are ranked by frequency, sized linearly between the configured
//! minimum and maximum font size, and flowed into rows from the top-left
//! corner. Words that no longer fit on the canvas are skipped.

use std::fmt::Write as _;

use super::{CloudRenderer, RenderedImage};
use crate::config::CloudConfig;
use crate::core::frequency::rank;
use crate::error::Result;

const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];

/// Approximate glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f64 = 0.6;

/// Renders word clouds as standalone SVG documents.
///
/// ```
/// use chatlens::capabilities::{CloudRenderer, SvgCloudRenderer};
///
/// let renderer = SvgCloudRenderer::default();
/// let tokens: Vec<String> = ["pizza", "pizza", "beach"].iter().map(|s| s.to_string()).collect();
/// let image = renderer.render(&tokens).unwrap().unwrap();
///
/// assert_eq!(image.mime, "image/svg+xml");
/// let svg = String::from_utf8(image.bytes).unwrap();
/// assert!(svg.contains(">pizza</text>"));
///
/// assert!(renderer.render(&[]).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgCloudRenderer {
    config: CloudConfig,
}

/// One word with its computed font size.
struct Placed<'a> {
    word: &'a str,
    size: f64,
    x: f64,
    y: f64,
}

impl SvgCloudRenderer {
    /// Creates a renderer with the given canvas settings.
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// Returns the canvas settings.
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    fn font_size(&self, count: usize, max_count: usize) -> f64 {
        let min = f64::from(self.config.min_font_size);
        let max = f64::from(self.config.max_font_size.max(self.config.min_font_size));
        if max_count <= 1 {
            return max;
        }
        let t = (count - 1) as f64 / (max_count - 1) as f64;
        min + (max - min) * t
    }

    fn layout<'a>(&self, ranked: &'a [(String, usize)]) -> Vec<Placed<'a>> {
        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        let max_count = ranked.first().map_or(0, |(_, c)| *c);

        let mut placed = Vec::new();
        let mut cursor_x = 0.0;
        let mut row_top = 0.0;
        let mut row_height: f64 = 0.0;

        for (word, count) in ranked.iter().take(self.config.max_words) {
            let size = self.font_size(*count, max_count);
            let word_width = word.chars().count() as f64 * size * GLYPH_WIDTH;
            if word_width > width {
                continue;
            }

            if cursor_x + word_width > width {
                row_top += row_height;
                cursor_x = 0.0;
                row_height = 0.0;
            }
            if row_top + size > height {
                continue;
            }

            placed.push(Placed {
                word: word.as_str(),
                size,
                x: cursor_x,
                y: row_top + size,
            });
            cursor_x += word_width + size * GLYPH_WIDTH;
            row_height = row_height.max(size * 1.1);
        }

        placed
    }
}

impl CloudRenderer for SvgCloudRenderer {
    fn render(&self, tokens: &[String]) -> Result<Option<RenderedImage>> {
        let ranked = rank(tokens.iter().cloned());
        if ranked.is_empty() {
            return Ok(None);
        }

        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.config.width,
            h = self.config.height,
        );
        let _ = write!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(&self.config.background)
        );
        for (i, word) in self.layout(&ranked).iter().enumerate() {
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" font-family="sans-serif" fill="{}">{}</text>"#,
                word.x,
                word.y,
                word.size,
                PALETTE[i % PALETTE.len()],
                escape_xml(word.word)
            );
        }
        svg.push_str("</svg>");

        Ok(Some(RenderedImage::new("image/svg+xml", svg.into_bytes())))
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
