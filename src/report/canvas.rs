//! Page-oriented drawing surface for reports
//!
//! Report layout only decides what goes where; a `ReportCanvas` takes care of
//! fonts, colours, wrapping and pages. `TextDocument` is the bundled backend:
//! it lays the placed text out as a paginated plain-text file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Millimetres per typographic point
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Average glyph advance as a fraction of the font size
const AVG_GLYPH_EM: f32 = 0.5;
/// Left margin that maps to column zero in the text rendering
const LEFT_MARGIN_MM: f32 = 14.0;
/// Horizontal millimetres per text column
const MM_PER_COLUMN: f32 = 2.0;
/// Text columns available across a page
const PAGE_COLUMNS: usize = 90;

/// Horizontal anchoring of placed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Drawing primitives used by the report layout
///
/// Coordinates are millimetres from the top-left corner of the current page.
pub trait ReportCanvas {
    fn set_font_size(&mut self, size: f32);

    /// Set the text colour as a hex string such as `#34495e`
    fn set_text_color(&mut self, color: &str);

    /// Place one or more lines, the first with its baseline at `y`
    fn text(&mut self, lines: &[String], x: f32, y: f32, align: Align);

    /// Word-wrap `text` so no line is wider than `max_width` at the current font size
    fn split_text_to_size(&self, text: &str, max_width: f32) -> Vec<String>;

    /// Start a new page; following text goes there
    fn add_page(&mut self);
}

/// A line of text as placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: String,
    pub align: Align,
}

/// Plain-text report backend
#[derive(Debug, Clone)]
pub struct TextDocument {
    pages: Vec<Vec<PlacedText>>,
    font_size: f32,
    color: String,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
            font_size: 16.0,
            color: "#000".to_string(),
        }
    }
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Placed text, page by page
    pub fn pages(&self) -> &[Vec<PlacedText>] {
        &self.pages
    }

    /// Render one page as plain text
    pub fn render_page(&self, index: usize) -> String {
        let mut out = String::new();
        let Some(page) = self.pages.get(index) else {
            return out;
        };
        for (i, placed) in page.iter().enumerate() {
            // Headings get breathing room
            if i > 0 && placed.font_size >= 16.0 {
                out.push('\n');
            }
            let indent = match placed.align {
                Align::Left => ((placed.x - LEFT_MARGIN_MM).max(0.0) / MM_PER_COLUMN).round() as usize,
                Align::Center => PAGE_COLUMNS.saturating_sub(placed.text.chars().count()) / 2,
            };
            out.push_str(&" ".repeat(indent));
            out.push_str(&placed.text);
            out.push('\n');
        }
        out
    }

    /// Render the whole document; pages are separated by a form feed
    pub fn render(&self) -> String {
        (0..self.pages.len())
            .map(|i| self.render_page(i))
            .collect::<Vec<_>>()
            .join("\u{c}\n")
    }

    /// Write the rendered document to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }

    fn line_height(&self) -> f32 {
        self.font_size * 1.15 * PT_TO_MM
    }

    fn current_page(&mut self) -> &mut Vec<PlacedText> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl ReportCanvas for TextDocument {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    fn text(&mut self, lines: &[String], x: f32, y: f32, align: Align) {
        let line_height = self.line_height();
        let (font_size, color) = (self.font_size, self.color.clone());
        let page = self.current_page();
        for (i, line) in lines.iter().enumerate() {
            page.push(PlacedText {
                text: line.clone(),
                x,
                y: y + i as f32 * line_height,
                font_size,
                color: color.clone(),
                align,
            });
        }
    }

    fn split_text_to_size(&self, text: &str, max_width: f32) -> Vec<String> {
        let columns = (max_width / (self.font_size * PT_TO_MM * AVG_GLYPH_EM)).floor();
        wrap_text(text, columns.max(1.0) as usize)
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

/// Greedy word wrap to `columns` characters
///
/// Explicit newlines are kept. Words longer than a line are split.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split words that cannot fit on any line
            while word.len() > columns {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(columns);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > columns {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }
        lines.push(current);
    }

    lines
}
