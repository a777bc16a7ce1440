use std::path::Path;

use quill_docx::WordDocument;

use crate::error::AppendResult;

/// Append `content` as one paragraph to a Word document on the local
/// filesystem, creating a fresh document when the file does not exist.
///
/// Same semantics as the blob workflow, minus the network.
pub fn append_content_to_file(path: &Path, content: &str) -> AppendResult<()> {
    let mut document = if path.exists() {
        WordDocument::from_bytes(&std::fs::read(path)?)?
    } else {
        WordDocument::empty()
    };
    document.append_paragraph(content)?;
    std::fs::write(path, document.to_bytes()?)?;
    Ok(())
}
