//! Domain types for representing parsed slide content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A single slide inferred from one block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide heading, if one was found.
    pub title: Option<String>,

    /// Secondary heading shown under the title.
    pub subtitle: Option<String>,

    /// Bullet points in presentation order.
    pub bullets: Vec<String>,

    /// Image URLs in presentation order.
    pub images: Vec<String>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.bullets.is_empty()
            && self.images.is_empty()
    }

    /// True if the slide carries at least one image.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// An ordered sequence of slides produced from one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create a deck from already parsed slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Count of slides that still need an image.
    pub fn slides_without_images(&self) -> usize {
        self.slides.iter().filter(|s| !s.has_images()).count()
    }

    /// Consume the deck, returning its slides.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }
}

/// Where automatically assigned slide images come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Keyword-seeded placeholder in the Unsplash style.
    Unsplash,
    /// Keyword-seeded placeholder in the Pexels style.
    Pexels,
    /// Keyword-seeded placeholder in the Pixabay style.
    Pixabay,
    /// Unseeded placeholder, varied by a caller-supplied nonce.
    Random,
}

impl ImageSource {
    /// Lowercase name used on the command line and in the browser.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsplash => "unsplash",
            Self::Pexels => "pexels",
            Self::Pixabay => "pixabay",
            Self::Random => "random",
        }
    }
}

impl FromStr for ImageSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unsplash" => Ok(Self::Unsplash),
            "pexels" => Ok(Self::Pexels),
            "pixabay" => Ok(Self::Pixabay),
            "random" => Ok(Self::Random),
            _ => Err(Error::UnknownImageSource(s.to_string())),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output formats a deck can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text handout.
    Text,
    /// Markdown in the same markup the parser reads.
    Markdown,
    /// Serialized slide records.
    Json,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownExportFormat(s.to_string())),
        }
    }
}
