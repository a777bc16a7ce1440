use thiserror::Error;

/// Errors from opening, mutating, or serializing a Wordprocessing package.
#[derive(Debug, Error)]
pub enum DocxError {
    /// The bytes are not a readable OOXML container.
    #[error("package error: {0}")]
    Package(#[from] zip::result::ZipError),

    /// The package has no `word/document.xml` part.
    #[error("the main document part is missing")]
    MissingMainPart,

    /// The main document part has no `w:body` element.
    #[error("the document body is missing")]
    MissingBody,

    /// The main document part is not well-formed XML.
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error while reading or writing the container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for codec operations.
pub type DocxResult<T> = Result<T, DocxError>;
