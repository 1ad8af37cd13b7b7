//! Integration tests for PDF text extraction on generated documents.

use std::path::Path;

use fdfetch::extract_text;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tempfile::TempDir;

/// Writes a PDF with one page per entry in `pages`, each page drawing its
/// entry as a single text run.
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content should encode"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).expect("page count fits in i64");
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("should save pdf");
}

/// Collapses whitespace so assertions are independent of the line breaks
/// the extractor inserts within a page.
fn collapsed(text: &str) -> String {
    text.split_whitespace().collect()
}

#[test]
fn test_three_pages_concatenate_in_page_order() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("three_pages.pdf");
    write_pdf(&path, &["A", "B", "C"]);

    let text = extract_text(&path).expect("should extract");
    assert_eq!(collapsed(&text), "ABC");
}

#[test]
fn test_single_page_text_round_trips() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("one_page.pdf");
    write_pdf(&path, &["Alpha 2022 periodic transaction report"]);

    let text = extract_text(&path).expect("should extract");
    assert_eq!(collapsed(&text), "Alpha2022periodictransactionreport");
}

#[test]
fn test_zero_page_document_yields_empty_string() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("empty.pdf");
    write_pdf(&path, &[]);

    let text = extract_text(&path).expect("should extract");
    assert!(text.is_empty());
}
