//! PDF renderer: one text line per baseline, built directly with lopdf.
//!
//! Uses the standard Type1 Helvetica font with WinAnsi encoding, so no font data is
//! embedded. Characters WinAnsi cannot represent are drawn as `?`.

use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::render::page::{PageGeometry, PlacedLine};
use crate::render::{document_lines, RenderError};

const FONT_RESOURCE: &str = "F1";

/// Renders `text` (split on `'\n'`) into a paginated PDF.
pub fn render_pdf(text: &str, geometry: &PageGeometry) -> Result<Bytes, RenderError> {
    let lines = document_lines(text);
    let pages = geometry.layout(lines.len());

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for placed in &pages {
        let content = page_content(placed, &lines, geometry);
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(format!("content stream encoding failed: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = add_page(&mut doc, pages_id, content_id);
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                geometry.width_pt.into(),
                geometry.height_pt.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(format!("serialization failed: {e}")))?;
    Ok(Bytes::from(buffer))
}

fn add_page(doc: &mut Document, pages_id: ObjectId, content_id: ObjectId) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    })
}

/// One text object per page; each line is positioned absolutely with `Tm`.
fn page_content(placed: &[PlacedLine], lines: &[&str], geometry: &PageGeometry) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), geometry.font_size_pt.into()],
        ),
    ];

    for line in placed {
        let text = lines[line.line_index];
        if text.is_empty() {
            continue;
        }
        operations.push(Operation::new(
            "Tm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                1.into(),
                line.x_pt.into(),
                line.y_pt.into(),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(win_ansi_bytes(text))],
        ));
    }

    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Maps text to WinAnsiEncoding. Latin-1 maps through directly; typographic punctuation
/// goes to its 0x80–0x9F slot; carriage returns are dropped and anything else becomes `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| match c {
            '\r' => None,
            '\t' => Some(b' '),
            ' '..='~' | '\u{a0}'..='\u{ff}' => Some(c as u8),
            '\u{20ac}' => Some(0x80),
            '\u{2026}' => Some(0x85),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201c}' => Some(0x93),
            '\u{201d}' => Some(0x94),
            '\u{2022}' => Some(0x95),
            '\u{2013}' => Some(0x96),
            '\u{2014}' => Some(0x97),
            _ => Some(b'?'),
        })
        .collect()
}
