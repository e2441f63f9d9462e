//! Reading and synthesizing the main document part.
//!
//! The read side pulls `word/document.xml` out of a package as UTF-8 text.
//! The write side wraps raw document XML in a minimal package: content
//! types, package and document relationships, default styles, and the
//! document part itself, written byte-for-byte as given.

use crate::container::{Package, PackageWriter};
use crate::error::Result;

/// Path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Path of the styles part.
pub const STYLES_PART: &str = "word/styles.xml";

/// Path of the content types manifest.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Path of the package-level relationships.
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";

/// Path of the document-level relationships.
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Media type of a word-processing document.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media type of raw document XML.
pub const XML_MEDIA_TYPE: &str = "application/xml";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

// Calibri 11pt, en-US.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:docDefaults>
        <w:rPrDefault>
            <w:rPr>
                <w:rFonts w:ascii="Calibri" w:eastAsia="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>
                <w:sz w:val="22"/>
                <w:szCs w:val="22"/>
                <w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>
            </w:rPr>
        </w:rPrDefault>
    </w:docDefaults>
</w:styles>"#;

/// Decode the main document part of a package as UTF-8 text.
///
/// Fails with `PartNotFound` when the part is absent and `InvalidEncoding`
/// when its bytes are not valid UTF-8.
pub fn decode(package: &Package) -> Result<String> {
    let xml = package.read_part_text(DOCUMENT_PART)?;
    tracing::debug!(bytes = xml.len(), part = DOCUMENT_PART, "decoded document part");
    Ok(xml)
}

/// Build a minimal package around raw document XML without finalizing it.
///
/// The XML is not parsed or validated; it becomes the document part as-is.
pub fn assemble(document_xml: &str) -> PackageWriter {
    let mut writer = PackageWriter::new();
    writer.write_part(CONTENT_TYPES_PART, CONTENT_TYPES_XML);
    writer.write_part(PACKAGE_RELS_PART, PACKAGE_RELS_XML);
    writer.write_part(DOCUMENT_RELS_PART, DOCUMENT_RELS_XML);
    writer.write_part(STYLES_PART, STYLES_XML);
    writer.write_part(DOCUMENT_PART, document_xml);
    writer
}

/// Wrap raw document XML in a minimal DOCX package and serialize it.
pub fn encode(document_xml: &str) -> Result<Vec<u8>> {
    tracing::debug!(bytes = document_xml.len(), "assembling minimal package");
    assemble(document_xml).finalize()
}
