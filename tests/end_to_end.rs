//! End-to-end tests over real ZIP packages.
//!
//! Fixtures are built in memory the way Word lays out a package, including
//! parts the minimal writer never produces (header, settings).

use docmark::convert::{self, to_package, to_xml};
use docmark::docx::{DOCUMENT_PART, STYLES_PART};
use docmark::{
    extract_highlights, extract_highlights_from_bytes, extract_highlights_from_file,
    ConversionError, Error, Package, ProcessOptions,
};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Build a Word-like package with extra parts around the given document XML.
fn word_package(document_xml: &str) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let parts: [(&str, &str); 6] = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
        ),
        (
            "word/_rels/document.xml.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings" Target="settings.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/header" Target="header1.xml"/>
</Relationships>"#,
        ),
        ("word/settings.xml", "<w:settings/>"),
        ("word/header1.xml", "<w:hdr/>"),
        (DOCUMENT_PART, document_xml),
    ];

    for (name, content) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    buffer
}

fn document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

#[test]
fn test_hello_world_from_word_package() {
    let xml = document(
        r#"<w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:rPr><w:highlight w:val="green"/></w:rPr><w:t>World</w:t></w:r></w:p>
           <w:p><w:r><w:rPr><w:highlight w:val="yellow"/></w:rPr><w:t xml:space="preserve"> 	 </w:t></w:r></w:p>"#,
    );
    let records = extract_highlights_from_bytes(&word_package(&xml), &ProcessOptions::default())
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.text, "World");
    assert_eq!(record.highlight_color.as_deref(), Some("green"));
    assert_eq!(record.paragraph_index, 0);
    assert_eq!(record.run_index, 1);
}

#[test]
fn test_to_xml_reads_full_word_package() {
    let xml = document(r#"<w:p><w:r><w:t>content</w:t></w:r></w:p>"#);
    assert_eq!(to_xml(&word_package(&xml)).unwrap(), xml);
}

#[test]
fn test_to_package_contains_minimal_part_set() {
    let xml = format!(r#"<w:document xmlns:w="{W_NS}"><w:body><w:p/></w:body></w:document>"#);
    let package = Package::open(to_package(&xml).unwrap()).unwrap();

    assert_eq!(package.read_part(DOCUMENT_PART).unwrap(), xml.as_bytes());
    assert_eq!(
        package.part_names(),
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
        ]
    );
    assert!(package.contains(STYLES_PART));
}

#[test]
fn test_repackaging_drops_extra_parts() {
    let xml = document(r#"<w:p><w:r><w:t>x</w:t></w:r></w:p>"#);
    let original = word_package(&xml);
    let rebuilt = to_package(&to_xml(&original).unwrap()).unwrap();

    let package = Package::open(rebuilt.clone()).unwrap();
    assert!(!package.contains("word/header1.xml"));
    assert!(!package.contains("word/settings.xml"));
    assert_eq!(to_xml(&rebuilt).unwrap(), xml);
}

#[test]
fn test_round_trip_preserves_text_exactly() {
    let samples = [
        document(r#"<w:p><w:r><w:t>Ünïcödé — 漢字 &amp; &lt;escaped&gt;</w:t></w:r></w:p>"#),
        format!("<w:document xmlns:w=\"{W_NS}\">\r\n\t<w:body/>\r\n</w:document>\n"),
        String::from("<w:document xmlns:w=\"urn:other\"/>"),
    ];
    for xml in samples {
        assert_eq!(to_xml(&to_package(&xml).unwrap()).unwrap(), xml);
    }
}

#[test]
fn test_failure_kinds_are_distinct() {
    let not_zip = to_xml(b"PK\x03\x04 truncated").unwrap_err();
    assert!(matches!(
        not_zip,
        ConversionError::InvalidDocumentPackage(Error::CorruptArchive(_))
    ));

    let mut writer = docmark::PackageWriter::new();
    writer.write_part("word/other.xml", "<x/>");
    let missing = to_xml(&writer.finalize().unwrap()).unwrap_err();
    assert!(matches!(
        missing,
        ConversionError::InvalidDocumentPackage(Error::PartNotFound(ref p)) if p == DOCUMENT_PART
    ));

    let mut writer = docmark::PackageWriter::new();
    writer.write_part(DOCUMENT_PART, vec![b'<', 0x80, b'>']);
    let encoding = to_xml(&writer.finalize().unwrap()).unwrap_err();
    assert!(matches!(encoding, ConversionError::InvalidDocumentEncoding(_)));

    assert!(matches!(to_xml(&[]), Err(ConversionError::EmptyInput)));
}

#[test]
fn test_malformed_xml_names_position() {
    let err = extract_highlights("<w:document xmlns:w=\"x\">\n<w:body>\n<w:p></w:body>").unwrap_err();
    match err {
        Error::MalformedXml { line, column, reason } => {
            assert_eq!(line, 3);
            assert!(column > 0);
            assert!(!reason.is_empty());
        }
        other => panic!("expected MalformedXml, got {other:?}"),
    }
}

#[test]
fn test_records_are_ordered() {
    let mut body = String::new();
    for p in 0..20 {
        body.push_str("<w:p>");
        for r in 0..5 {
            if (p + r) % 3 == 0 {
                body.push_str(&format!(
                    r#"<w:r><w:rPr><w:highlight w:val="red"/></w:rPr><w:t>p{p}r{r}</w:t></w:r>"#
                ));
            } else {
                body.push_str("<w:r><w:t>plain</w:t></w:r>");
            }
        }
        body.push_str("</w:p>");
    }
    let records = extract_highlights(&document(&body)).unwrap();
    assert!(!records.is_empty());
    assert!(records.windows(2).all(|w| w[0].position() < w[1].position()));
    for record in &records {
        assert_eq!(
            record.text,
            format!("p{}r{}", record.paragraph_index, record.run_index)
        );
    }
}

#[test]
fn test_extract_from_file() {
    let xml = document(r#"<w:p><w:r><w:rPr><w:highlight/></w:rPr><w:t>on disk</w:t></w:r></w:p>"#);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.docx");
    std::fs::write(&path, word_package(&xml)).unwrap();

    let records = extract_highlights_from_file(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].highlight_color.as_deref(), Some("yellow"));
}

#[test]
fn test_checked_packaging_rejects_malformed_xml() {
    assert!(matches!(
        convert::to_package_checked("<w:document><w:body></w:document>"),
        Err(ConversionError::InvalidXml(Error::MalformedXml { .. }))
    ));
}
