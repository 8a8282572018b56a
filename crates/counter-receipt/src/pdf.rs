//! # PDF Assembly
//!
//! Turns laid-out pages into an in-memory lopdf [`Document`].
//!
//! ## Object Graph
//! ```text
//! Trailer ─┬─ Root ──► Catalog ──► Pages (MediaBox, Resources, Count)
//!          │                          │
//!          │                          ├── Page 1 ──► Contents (BT … ET)
//!          │                          └── Page N ──► Contents
//!          └─ Info ──► Title, Producer
//!
//! Resources ──► Font ─┬─ F1 Courier
//!                     ├─ F2 Courier-Bold
//!                     └─ F3 Courier-Oblique
//! ```
//!
//! Streams are left uncompressed. Receipts are a few kilobytes at most.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::error::{ExportError, ExportResult};
use crate::layout::{FontFace, Page, PageGeometry, TextRun};

/// Value written to the document's `Producer` entry.
pub const PRODUCER: &str = "Counter POS";

/// Builds a PDF with one page per laid-out [`Page`].
pub fn build_document(pages: &[Page], geometry: PageGeometry, title: &str) -> ExportResult<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content: Content<Vec<Operation>> = Content {
            operations: page.runs.iter().flat_map(show_text).collect(),
        };
        let encoded = content.encode().map_err(|err| ExportError::Encode {
            page: page.number,
            message: err.to_string(),
        })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), geometry.width.into(), geometry.height.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(pdf_text(title)),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// `BT /Fn size Tf x y Td (text) Tj ET`
fn show_text(run: &TextRun) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![run.face.resource_name().into(), run.size.into()]),
        Operation::new("Td", vec![run.x.into(), run.y.into()]),
        Operation::new("Tj", vec![Object::string_literal(pdf_text(&run.text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Standard fonts only cover Latin-1 through their built-in encoding;
/// anything outside printable ASCII is replaced with `?`.
fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' || c.is_ascii_graphic() { c } else { '?' })
        .collect()
}

/// Text shown on each page, in content order. Used by tests that read
/// receipts back.
#[cfg(test)]
pub(crate) fn page_texts(doc: &Document) -> Vec<Vec<String>> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let data = doc.get_page_content(page_id).unwrap();
            Content::decode(&data)
                .unwrap()
                .operations
                .into_iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
