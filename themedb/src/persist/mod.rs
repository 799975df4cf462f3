// Persistence - save-time normalization and atomic write-then-replace

use crate::document::ThemeDocument;
use crate::error::{Result, ThemeDbError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize a document to its normalized on-disk form.
///
/// Normalization is deterministic and stable under repetition: sections are
/// emitted in lexicographic name order; within a section, entries render as
/// `key = value`, blank extras are dropped, and the remaining lines (entries
/// and comments alike) are sorted as plain text. Sections that would render
/// no lines at all are omitted. A single blank line separates consecutive
/// sections, with none after the last.
pub fn serialize(doc: &ThemeDocument) -> String {
    let mut sections: Vec<_> = doc.sections().collect();
    sections.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut blocks = Vec::new();
    for (name, section) in sections {
        let mut lines: Vec<String> = section
            .entries()
            .map(|(k, v)| format!("{k} = {v}"))
            .collect();
        lines.extend(
            section
                .extras()
                .iter()
                .filter(|l| !l.trim().is_empty())
                .cloned(),
        );
        lines.sort_unstable();

        if lines.is_empty() {
            continue;
        }

        let mut block = format!("[{name}]\n");
        for line in &lines {
            block.push_str(line);
            block.push('\n');
        }
        blocks.push(block);
    }

    blocks.join("\n")
}

/// Write the normalized form of `doc` to its path.
///
/// The output goes to a temporary sibling file first and only replaces the
/// target once fully written, so readers see either the old file or the new
/// one, never a partial write. Empty output while the document still holds
/// a non-blank section aborts the save instead of clobbering the target.
pub fn save(doc: &ThemeDocument) -> Result<()> {
    let output = serialize(doc);

    if output.is_empty() && doc.sections().any(|(_, s)| !s.is_blank()) {
        log::warn!(
            "Refusing to replace '{}' with empty output",
            doc.path().display()
        );
        return Err(ThemeDbError::EmptyWriteAborted(doc.path().to_path_buf()));
    }

    let parent = match doc.path().parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(output.as_bytes())?;
    tmp.persist(doc.path())
        .map_err(|e| ThemeDbError::Io(e.error))?;
    Ok(())
}
