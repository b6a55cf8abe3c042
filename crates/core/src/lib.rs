//! Core slide parsing for QuickSlides: turns loosely structured text into
//! slides, fills in missing images, and exports decks as text or markdown.

pub mod classify;
pub mod enrich;
pub mod error;
pub mod export;
pub mod image;
pub mod navigation;
pub mod parser;
pub mod segment;
pub mod types;

pub use classify::{classify, LineRule, SlideClassifier};
pub use enrich::{
    image_keywords, placeholder_image, ImageEnricher, ImageProvider, PicsumProvider,
    PlaceholderOnly,
};
pub use error::{Error, Result};
pub use export::{MarkdownExporter, TextExporter};
pub use image::is_image_reference;
pub use navigation::PresentationState;
pub use parser::{parse_slides, validate_input, SlideParser};
pub use segment::{segment, Segmenter};
pub use types::{Deck, ExportFormat, ImageSource, Slide};
