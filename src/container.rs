//! ZIP package access for OOXML documents.
//!
//! [`Package`] is the read side: an in-memory archive opened from bytes,
//! with exact-path part lookup. [`PackageWriter`] is the write side: parts
//! accumulate in memory and are serialized once by [`PackageWriter::finalize`].

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;

/// Relationship type of the package-level link to the main document part.
pub const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// A relationship entry from a .rels part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships parsed from a .rels part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
    /// Map from relationship type to list of relationships
    pub by_type: HashMap<String, Vec<Relationship>>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// Get relationships by type.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.by_type
            .get(rel_type)
            .map(|v| v.iter().collect())
            .unwrap_or_default()
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_type
            .entry(rel.rel_type.clone())
            .or_default()
            .push(rel.clone());
        self.by_id.insert(rel.id.clone(), rel);
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Relationships sorted by ID, for stable listing.
    pub fn sorted(&self) -> Vec<&Relationship> {
        let mut rels: Vec<&Relationship> = self.by_id.values().collect();
        rels.sort_by(|a, b| a.id.cmp(&b.id));
        rels
    }
}

/// An OOXML package opened for reading.
///
/// Part paths are case-sensitive and forward-slash separated, exactly as
/// stored in the archive.
pub struct Package {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl Package {
    /// Open a package from a byte buffer.
    ///
    /// Fails with [`Error::EmptyInput`] on a zero-length buffer and
    /// [`Error::CorruptArchive`] when the bytes are not a ZIP container.
    pub fn open(data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let size = data.len();
        let archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| Error::CorruptArchive(e.to_string()))?;
        tracing::debug!(bytes = size, parts = archive.len(), "opened package");
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docmark::container::Package;
    ///
    /// let package = Package::from_path("document.docx")?;
    /// assert!(package.contains("word/document.xml"));
    /// # Ok::<(), docmark::Error>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::open(data)
    }

    /// Read the raw bytes of a part by exact path.
    pub fn read_part(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::PartNotFound(path.to_string()),
            other => Error::CorruptArchive(format!("{}: {}", path, other)),
        })?;
        // The declared size comes from the archive itself; grow as bytes arrive.
        let declared = file.size();
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::CorruptArchive(format!("{}: {}", path, e)))?;
        if data.len() as u64 != declared {
            return Err(Error::CorruptArchive(format!(
                "{}: declared {} bytes, read {}",
                path,
                declared,
                data.len()
            )));
        }
        Ok(data)
    }

    /// Read a part and decode it as strict UTF-8 text.
    pub fn read_part_text(&self, path: &str) -> Result<String> {
        let bytes = self.read_part(path)?;
        String::from_utf8(bytes).map_err(|e| Error::InvalidEncoding {
            path: path.to_string(),
            reason: e.utf8_error().to_string(),
        })
    }

    /// Check if a part exists in the archive.
    pub fn contains(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let result = archive.file_names().any(|n| n == path);
        result
    }

    /// List all part names, sorted.
    pub fn part_names(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }

    /// Read relationships attached to a part (`word/document.xml` →
    /// `word/_rels/document.xml.rels`). A missing .rels part is an empty set.
    pub fn read_relationships(&self, part_path: &str) -> Result<Relationships> {
        self.parse_relationships(&rels_path_for(part_path))
    }

    /// Read package-level relationships (`_rels/.rels`).
    pub fn read_package_relationships(&self) -> Result<Relationships> {
        self.parse_relationships("_rels/.rels")
    }

    /// Resolve the main document part through the package relationships,
    /// falling back to `word/document.xml` when no officeDocument link exists.
    ///
    /// A `_rels/.rels` part that fails to parse is an error, not a fallback.
    pub fn main_document_path(&self) -> Result<String> {
        let rels = self.read_package_relationships()?;
        let target = rels
            .get_by_type(OFFICE_DOCUMENT_REL_TYPE)
            .first()
            .map(|rel| rel.target.trim_start_matches('/').to_string());
        Ok(target.unwrap_or_else(|| crate::docx::DOCUMENT_PART.to_string()))
    }

    fn parse_relationships(&self, rels_path: &str) -> Result<Relationships> {
        let content = match self.read_part_text(rels_path) {
            Ok(c) => c,
            Err(Error::PartNotFound(_)) => return Ok(Relationships::new()),
            Err(e) => return Err(e),
        };

        if content.trim().is_empty() {
            return Ok(Relationships::new());
        }

        let mut rels = Relationships::new();
        let mut reader = quick_xml::Reader::from_str(&content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Empty(e))
                | Ok(quick_xml::events::Event::Start(e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut rel = Relationship {
                        id: String::new(),
                        rel_type: String::new(),
                        target: String::new(),
                        external: false,
                    };

                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"Id" => rel.id = value,
                            b"Type" => rel.rel_type = value,
                            b"Target" => rel.target = value,
                            b"TargetMode" => rel.external = value.eq_ignore_ascii_case("external"),
                            _ => {}
                        }
                    }

                    if !rel.id.is_empty() {
                        rels.add(rel);
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => {
                    return Err(Error::malformed(format!(
                        "{} (byte {}): {}",
                        rels_path,
                        reader.error_position(),
                        e
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("parts", &self.part_names().len())
            .finish()
    }
}

/// Build the .rels path for a part.
fn rels_path_for(part_path: &str) -> String {
    let part_path = part_path.trim_start_matches('/');
    if part_path.is_empty() {
        return "_rels/.rels".to_string();
    }
    match part_path.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_path),
    }
}

/// An OOXML package under construction.
///
/// Writing the same path twice keeps the last bytes in the position of the
/// first write, so output order is deterministic.
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<(String, Vec<u8>)>,
}

impl PackageWriter {
    /// Begin an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a part.
    pub fn write_part(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        let path = path.into();
        let data = data.into();
        match self.parts.iter_mut().find(|(p, _)| *p == path) {
            Some(slot) => slot.1 = data,
            None => self.parts.push((path, data)),
        }
    }

    /// Number of parts written so far.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts have been written.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Part names in write order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(p, _)| p.as_str())
    }

    /// Serialize all parts into a Deflate-compressed ZIP buffer.
    pub fn finalize(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (path, data) in &self.parts {
            zip.start_file(path.as_str(), options)
                .map_err(|e| Error::Zip(format!("{}: {}", path, e)))?;
            zip.write_all(data)?;
        }
        zip.finish().map_err(|e| Error::Zip(e.to_string()))?;

        tracing::debug!(parts = self.parts.len(), bytes = buffer.len(), "finalized package");
        Ok(buffer)
    }
}
