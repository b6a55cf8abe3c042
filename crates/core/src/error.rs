//! Error types for slide parsing, enrichment, and export.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the slide parser.
///
/// Parsing itself is total; these cover the collaborators around it.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to write an export.
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// The input contained no text to turn into slides.
    #[error("No content to parse: input is empty or whitespace only")]
    EmptyInput,

    /// The image source name is not recognized.
    #[error("Unknown image source: {0}")]
    UnknownImageSource(String),

    /// The export format name is not recognized.
    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),

    /// An image provider could not produce a reference for a slide.
    #[error("Image lookup failed: {0}")]
    ImageLookup(String),

    /// Navigation targeted a slide that does not exist.
    #[error("Slide {index} is out of range (deck has {total} slides)")]
    SlideOutOfRange { index: usize, total: usize },
}
