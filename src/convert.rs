//! DOCX ⇄ document XML conversion.
//!
//! `to_xml` pulls the main document part out of a package; `to_package`
//! wraps raw document XML in a minimal package. The two are asymmetric:
//! packaging keeps only the document, styles, relationships and content
//! types, so `to_xml(to_package(x)) == x` but not the other way round.

use crate::container::Package;
use crate::docx::{part, DocumentTree};
use crate::error::{ConversionError, Error};

/// Result type for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Extract the raw document XML from DOCX bytes.
///
/// Archive and missing-part failures surface as
/// [`ConversionError::InvalidDocumentPackage`], encoding failures as
/// [`ConversionError::InvalidDocumentEncoding`].
pub fn to_xml(data: &[u8]) -> ConversionResult<String> {
    if data.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let package = Package::open(data.to_vec()).map_err(classify)?;
    part::decode(&package).map_err(classify)
}

/// Wrap raw document XML in a minimal DOCX package.
///
/// The text is not checked for well-formedness; see [`to_package_checked`].
pub fn to_package(xml: &str) -> ConversionResult<Vec<u8>> {
    part::encode(xml).map_err(classify)
}

/// Like [`to_package`], but rejects XML that does not parse.
pub fn to_package_checked(xml: &str) -> ConversionResult<Vec<u8>> {
    if let Err(e) = DocumentTree::parse(xml) {
        tracing::warn!(error = %e, "rejected malformed document XML");
        return Err(ConversionError::InvalidXml(e));
    }
    to_package(xml)
}

/// Package uploaded XML bytes, decoding them as UTF-8 first.
pub fn to_package_from_bytes(data: &[u8], validate: bool) -> ConversionResult<Vec<u8>> {
    if data.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let xml = std::str::from_utf8(data).map_err(|e| {
        classify(Error::InvalidEncoding {
            path: "<input>".to_string(),
            reason: e.to_string(),
        })
    })?;

    if validate {
        to_package_checked(xml)
    } else {
        to_package(xml)
    }
}

/// Map a library error to its user-facing conversion error.
pub(crate) fn classify(err: Error) -> ConversionError {
    let converted = match err {
        Error::EmptyInput => ConversionError::EmptyInput,
        e @ (Error::CorruptArchive(_) | Error::PartNotFound(_)) => {
            ConversionError::InvalidDocumentPackage(e)
        }
        e @ Error::InvalidEncoding { .. } => ConversionError::InvalidDocumentEncoding(e),
        e @ Error::MalformedXml { .. } => ConversionError::InvalidXml(e),
        e => ConversionError::Other(e),
    };
    tracing::warn!(error = %converted, "conversion failed");
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::PackageWriter;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Hi</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn test_round_trip_is_byte_exact() {
        let docx = to_package(XML).unwrap();
        assert_eq!(to_xml(&docx).unwrap(), XML);
    }

    #[test]
    fn test_to_xml_empty() {
        assert!(matches!(to_xml(&[]), Err(ConversionError::EmptyInput)));
    }

    #[test]
    fn test_to_xml_not_an_archive() {
        let err = to_xml(b"<w:document/>").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidDocumentPackage(Error::CorruptArchive(_))
        ));
    }

    #[test]
    fn test_to_xml_missing_document_part() {
        let mut writer = PackageWriter::new();
        writer.write_part("word/styles.xml", "<w:styles/>");
        let err = to_xml(&writer.finalize().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidDocumentPackage(Error::PartNotFound(_))
        ));
    }

    #[test]
    fn test_to_xml_bad_encoding() {
        let mut writer = PackageWriter::new();
        writer.write_part(part::DOCUMENT_PART, vec![0xC3, 0x28]);
        let err = to_xml(&writer.finalize().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidDocumentEncoding(Error::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_to_package_skips_validation() {
        assert!(to_package("<w:document>").is_ok());
    }

    #[test]
    fn test_to_package_checked() {
        assert!(matches!(
            to_package_checked("<w:document>"),
            Err(ConversionError::InvalidXml(Error::MalformedXml { .. }))
        ));
        assert!(to_package_checked(XML).is_ok());
    }

    #[test]
    fn test_to_package_from_bytes() {
        assert!(matches!(
            to_package_from_bytes(&[], false),
            Err(ConversionError::EmptyInput)
        ));
        assert!(matches!(
            to_package_from_bytes(&[0xFF, 0xFE, 0x00], false),
            Err(ConversionError::InvalidDocumentEncoding(_))
        ));
        let docx = to_package_from_bytes(XML.as_bytes(), true).unwrap();
        assert_eq!(to_xml(&docx).unwrap(), XML);
    }
}
