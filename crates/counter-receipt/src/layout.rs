//! # Receipt Layout
//!
//! Places receipt text on fixed-size pages. Pure: no PDF types, no I/O.
//!
//! ## Page Anatomy (A6, points, origin bottom-left)
//! ```text
//! ┌──────────────────────────────┐ 420
//! │                              │
//! │  Departmental Store Invoice  │ ← bold, centred, EVERY page
//! │                              │
//! │ Generated on: 2024-05-01 ... │ ← centred, page 1 only
//! │                              │
//! │ Wheat Flour: 2.0 per kg x ...│ ← one row per line item, 14pt pitch
//! │ Eggs: 12.0 per item x Rs.5 ..│
//! │   (long rows wrap, indented) │
//! │                              │
//! │         Grand Total: Rs.140  │ ← right-aligned, after the last row
//! │                              │
//! │            Page 1            │ ← italic, centred footer
//! └──────────────────────────────┘ 0
//! 0                             298
//! ```
//!
//! ## Font Metrics
//! All text is set in the Courier family (PDF standard fonts). Every glyph
//! advances 600/1000 em, so widths are integer arithmetic on char counts.

use counter_core::Invoice;

// =============================================================================
// Geometry
// =============================================================================

/// Page size and margins in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: i64,
    pub height: i64,
    pub margin: i64,
}

impl PageGeometry {
    /// ISO A6 (105 × 148 mm) with 10 mm margins.
    pub const A6: PageGeometry = PageGeometry {
        width: 298,
        height: 420,
        margin: 28,
    };

    /// Horizontal space between the margins.
    pub fn content_width(&self) -> i64 {
        self.width - 2 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A6
    }
}

// =============================================================================
// Text Runs
// =============================================================================

/// The three faces a receipt uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Italic];

    /// PDF standard Type1 font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Courier",
            FontFace::Bold => "Courier-Bold",
            FontFace::Italic => "Courier-Oblique",
        }
    }

    /// Name the font is registered under in page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
            FontFace::Italic => "F3",
        }
    }
}

/// Courier advance width per glyph, in thousandths of the font size.
const GLYPH_WIDTH_PER_MILLE: i64 = 600;

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, size: i64) -> i64 {
    text.chars().count() as i64 * size * GLYPH_WIDTH_PER_MILLE / 1000
}

/// How many glyphs fit in `width` points at `size`.
pub fn max_chars(width: i64, size: i64) -> usize {
    (width * 1000 / (size * GLYPH_WIDTH_PER_MILLE)).max(1) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text at an absolute position (baseline, from bottom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub face: FontFace,
    pub size: i64,
    pub x: i64,
    pub y: i64,
}

/// One laid-out page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub runs: Vec<TextRun>,
}

impl Page {
    /// Text of every run, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|run| run.text.as_str())
    }
}

// =============================================================================
// Content
// =============================================================================

/// The words on a receipt, before positioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptContent {
    pub title: String,
    pub generated_on: String,
    pub rows: Vec<String>,
    pub total: String,
}

impl ReceiptContent {
    /// Rows use the same `LineItem` rendering as the on-screen invoice.
    pub fn from_invoice(invoice: &Invoice, title: &str) -> Self {
        ReceiptContent {
            title: title.to_string(),
            generated_on: format!("Generated on: {}", invoice.timestamp()),
            rows: invoice.lines.iter().map(|line| line.to_string()).collect(),
            total: format!("Grand Total: {}", invoice.grand_total),
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Font sizes and spacing for a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub geometry: PageGeometry,
    pub title_size: i64,
    pub body_size: i64,
    pub footer_size: i64,
    /// Baseline-to-baseline distance of body rows.
    pub row_pitch: i64,
    /// Baseline of the page-number footer.
    pub footer_baseline: i64,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            geometry: PageGeometry::A6,
            title_size: 12,
            body_size: 10,
            footer_size: 8,
            row_pitch: 14,
            footer_baseline: 20,
        }
    }
}

/// Indent for the second and later lines of a wrapped row.
const CONTINUATION_INDENT: &str = "  ";

impl ReceiptLayout {
    /// Flows the content onto as many pages as it needs (at least one).
    ///
    /// ## Page Break Rule
    /// ```text
    /// next baseline < footer_baseline + footer_size + body_size
    ///      │
    ///      ▼
    /// close page (add footer) → open page (add title) → continue
    /// ```
    pub fn paginate(&self, content: &ReceiptContent) -> Vec<Page> {
        let mut pages = Vec::new();
        let mut page = self.open_page(1, &content.title);
        let mut cursor = self.body_top();

        page.runs.push(self.place(&content.generated_on, FontFace::Regular, self.body_size, Align::Center, cursor));
        cursor -= self.row_pitch + self.row_pitch / 2;

        for row in &content.rows {
            for piece in self.wrap(row) {
                if cursor < self.body_floor() {
                    page = self.turn_page(&mut pages, page, &content.title);
                    cursor = self.body_top();
                }
                page.runs.push(self.place(&piece, FontFace::Regular, self.body_size, Align::Left, cursor));
                cursor -= self.row_pitch;
            }
        }

        cursor -= self.row_pitch / 2;
        if cursor < self.body_floor() {
            page = self.turn_page(&mut pages, page, &content.title);
            cursor = self.body_top();
        }
        page.runs.push(self.place(&content.total, FontFace::Regular, self.body_size, Align::Right, cursor));

        pages.push(self.close_page(page));
        pages
    }

    /// Splits a row into pieces that fit the content width.
    ///
    /// Breaks at spaces where possible; a single word wider than the page
    /// is cut. Continuation pieces carry a two-space indent.
    pub fn wrap(&self, row: &str) -> Vec<String> {
        let limit = max_chars(self.geometry.content_width(), self.body_size);
        let mut pieces: Vec<String> = Vec::new();
        let mut current = String::new();

        for word in row.split_whitespace() {
            let mut rest = word;
            while !rest.is_empty() {
                let room = if pieces.is_empty() {
                    limit
                } else {
                    limit.saturating_sub(CONTINUATION_INDENT.len()).max(1)
                };
                let used = current.chars().count();
                let gap = usize::from(used > 0);

                if used + gap + rest.chars().count() <= room {
                    if gap == 1 {
                        current.push(' ');
                    }
                    current.push_str(rest);
                    break;
                }
                if used > 0 {
                    pieces.push(std::mem::take(&mut current));
                    continue;
                }

                // Word alone is wider than a line.
                let cut = rest.char_indices().nth(room).map_or(rest.len(), |(i, _)| i);
                pieces.push(rest[..cut].to_string());
                rest = &rest[cut..];
            }
        }

        if !current.is_empty() || pieces.is_empty() {
            pieces.push(current);
        }

        pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| if i == 0 { piece } else { format!("{}{}", CONTINUATION_INDENT, piece) })
            .collect()
    }

    fn body_top(&self) -> i64 {
        self.title_baseline() - self.title_size - self.row_pitch / 2
    }

    fn body_floor(&self) -> i64 {
        self.footer_baseline + self.footer_size + self.body_size
    }

    fn title_baseline(&self) -> i64 {
        self.geometry.height - self.geometry.margin - self.title_size
    }

    fn open_page(&self, number: usize, title: &str) -> Page {
        let title = self.place(title, FontFace::Bold, self.title_size, Align::Center, self.title_baseline());
        Page {
            number,
            runs: vec![title],
        }
    }

    fn turn_page(&self, pages: &mut Vec<Page>, page: Page, title: &str) -> Page {
        let number = page.number + 1;
        pages.push(self.close_page(page));
        self.open_page(number, title)
    }

    fn close_page(&self, mut page: Page) -> Page {
        let footer = format!("Page {}", page.number);
        page.runs.push(self.place(&footer, FontFace::Italic, self.footer_size, Align::Center, self.footer_baseline));
        page
    }

    fn place(&self, text: &str, face: FontFace, size: i64, align: Align, y: i64) -> TextRun {
        let geometry = &self.geometry;
        let width = text_width(text, size);
        let x = match align {
            Align::Left => geometry.margin,
            Align::Center => geometry.margin + (geometry.content_width() - width) / 2,
            Align::Right => geometry.width - geometry.margin - width,
        };
        TextRun {
            text: text.to_string(),
            face,
            size,
            x: x.max(geometry.margin),
            y,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn content(rows: usize) -> ReceiptContent {
        ReceiptContent {
            title: "Departmental Store Invoice".to_string(),
            generated_on: "Generated on: 2024-05-01 09:30:00".to_string(),
            rows: (1..=rows).map(|i| format!("Item {}: 1.0 per kg x Rs.10 = Rs.10", i)).collect(),
            total: "Grand Total: Rs.10".to_string(),
        }
    }

    #[test]
    fn test_content_from_invoice() {
        use chrono::NaiveDate;
        use counter_core::{Cart, Catalog};

        let catalog = Catalog::departmental_store();
        let mut cart = Cart::new();
        cart.add_text(&catalog, "Wheat Flour", "3.5").unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();

        let content = ReceiptContent::from_invoice(&Invoice::render(&cart, &catalog, now), "Invoice");
        assert_eq!(content.title, "Invoice");
        assert_eq!(content.generated_on, "Generated on: 2024-05-01 09:30:00");
        assert_eq!(content.rows, ["Wheat Flour: 3.5 per kg x Rs.40 = Rs.140"]);
        assert_eq!(content.total, "Grand Total: Rs.140");
    }

    #[test]
    fn test_text_metrics() {
        assert_eq!(text_width("abcde", 10), 30);
        assert_eq!(max_chars(PageGeometry::A6.content_width(), 10), 40);
    }

    #[test]
    fn test_single_page_anatomy() {
        let layout = ReceiptLayout::default();
        let pages = layout.paginate(&content(2));

        assert_eq!(pages.len(), 1);
        let lines: Vec<&str> = pages[0].lines().collect();
        assert_eq!(
            lines,
            [
                "Departmental Store Invoice",
                "Generated on: 2024-05-01 09:30:00",
                "Item 1: 1.0 per kg x Rs.10 = Rs.10",
                "Item 2: 1.0 per kg x Rs.10 = Rs.10",
                "Grand Total: Rs.10",
                "Page 1",
            ]
        );

        let runs = &pages[0].runs;
        assert_eq!(runs[0].face, FontFace::Bold);
        assert_eq!(runs[5].face, FontFace::Italic);
        assert!(runs.windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_alignment() {
        let layout = ReceiptLayout::default();
        let page = &layout.paginate(&content(1))[0];
        let geometry = PageGeometry::A6;

        let title = &page.runs[0];
        let title_width = text_width(&title.text, title.size);
        let left_gap = title.x - geometry.margin;
        let right_gap = geometry.width - geometry.margin - (title.x + title_width);
        assert!((left_gap - right_gap).abs() <= 1);

        let row = &page.runs[2];
        assert_eq!(row.x, geometry.margin);

        let total = &page.runs[3];
        assert_eq!(total.x + text_width(&total.text, total.size), geometry.width - geometry.margin);
    }

    #[test]
    fn test_empty_receipt_still_has_one_page() {
        let layout = ReceiptLayout::default();
        let pages = layout.paginate(&content(0));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines().any(|l| l == "Grand Total: Rs.10"));
    }

    #[test]
    fn test_overflow_flows_to_more_pages() {
        let layout = ReceiptLayout::default();
        let pages = layout.paginate(&content(60));

        assert!(pages.len() >= 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i + 1);
            let lines: Vec<&str> = page.lines().collect();
            assert_eq!(lines[0], "Departmental Store Invoice");
            assert_eq!(*lines.last().unwrap(), format!("Page {}", i + 1));
            assert_eq!(lines.iter().filter(|l| l.starts_with("Generated on")).count(), usize::from(i == 0));
            assert!(page.runs.iter().all(|run| run.y >= layout.footer_baseline));
        }

        let rows: usize = pages
            .iter()
            .flat_map(|p| p.lines())
            .filter(|l| l.starts_with("Item "))
            .count();
        assert_eq!(rows, 60);

        let last = pages.last().unwrap();
        assert!(last.lines().any(|l| l.starts_with("Grand Total")));
    }

    #[test]
    fn test_wrap_short_row_untouched() {
        let layout = ReceiptLayout::default();
        assert_eq!(layout.wrap("Eggs: 12.0 per item x Rs.5 = Rs.60"), ["Eggs: 12.0 per item x Rs.5 = Rs.60"]);
    }

    #[test]
    fn test_wrap_long_row_at_spaces() {
        let layout = ReceiptLayout::default();
        let row = "Basmati Rice Extra Long Grain: 12.125 per kg x Rs.180 = Rs.2182.50";
        let pieces = layout.wrap(row);

        assert!(pieces.len() > 1);
        assert!(pieces.iter().all(|p| p.chars().count() <= 40));
        assert!(pieces[1..].iter().all(|p| p.starts_with("  ")));
        let rejoined: Vec<&str> = pieces.iter().flat_map(|p| p.split_whitespace()).collect();
        assert_eq!(rejoined, row.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn test_wrap_cuts_oversized_word() {
        let layout = ReceiptLayout::default();
        let pieces = layout.wrap(&"X".repeat(90));
        assert!(pieces.iter().all(|p| p.chars().count() <= 40));
        let letters: usize = pieces.iter().map(|p| p.trim_start().len()).sum();
        assert_eq!(letters, 90);
    }
}
