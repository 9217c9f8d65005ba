//! PDF fixtures built in memory with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{dictionary, Document, Object, Stream};
use tempfile::NamedTempFile;

/// Builds a PDF with one page per entry of `page_texts`, each page showing
/// its text with a single `Tj`. Texts must not contain `(`, `)` or `\`.
pub fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    build_pdf_with_unreadable_page(page_texts, None)
}

/// Like `build_pdf`, but the page at `unreadable` (0-based) draws its text
/// with an Identity-H `Type0` font that has no `ToUnicode` map, so lopdf
/// cannot extract it.
pub fn build_pdf_with_unreadable_page(page_texts: &[&str], unreadable: Option<usize>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "NoUnicodeCID",
        "Encoding" => "Identity-H",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for (index, text) in page_texts.iter().enumerate() {
        let page_font = if unreadable == Some(index) { cid_font_id } else { font_id };
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(page_font) },
        };
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_ids.len() as i64),
    });

    for pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(*pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Writes `bytes` to a temporary `.pdf` file that lives as long as the handle
pub fn write_temp_pdf(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".pdf").unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

pub fn temp_pdf(page_texts: &[&str]) -> NamedTempFile {
    write_temp_pdf(&build_pdf(page_texts))
}

/// The three-page document used throughout: 1 + 3 + 0 occurrences of "cat"
pub fn cat_pdf() -> NamedTempFile {
    temp_pdf(&["the cat sat", "category catalog cat", "a dog barked"])
}

/// Three pages of "cat" text where page 2 cannot be extracted
pub fn unreadable_page_pdf() -> NamedTempFile {
    write_temp_pdf(&build_pdf_with_unreadable_page(
        &["the cat sat", "category catalog cat", "a dog barked"],
        Some(1),
    ))
}
