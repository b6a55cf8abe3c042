//! Automatic images for slides that have none.
//!
//! Runs after parsing and before rendering. Each slide without images gets
//! one reference from an [`ImageProvider`], seeded with keywords taken from
//! the slide's own text. A provider failure only affects that slide, which
//! then gets a generic placeholder.

use unicode_normalization::UnicodeNormalization;

use crate::types::{ImageSource, Slide};
use crate::{Error, Result};

/// Keyword used when a slide has no usable words.
pub const FALLBACK_KEYWORD: &str = "abstract";

/// Words too common to describe an image.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "will", "your", "our", "are",
    "can", "how", "what", "why", "when",
];

/// Only words longer than this are used as keywords.
const MIN_KEYWORD_LEN: usize = 3;

/// Number of keywords kept per slide.
const MAX_KEYWORDS: usize = 2;

const PICSUM_BASE: &str = "https://picsum.photos";
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 450;

/// Derive image search keywords from a slide.
///
/// Looks at the title, subtitle and first two bullets, strips punctuation and
/// keeps the first two distinctive words. Falls back to `"abstract"`.
pub fn image_keywords(slide: &Slide) -> String {
    let mut parts: Vec<&str> = vec![
        slide.title.as_deref().unwrap_or(""),
        slide.subtitle.as_deref().unwrap_or(""),
    ];
    parts.extend(slide.bullets.iter().take(2).map(String::as_str));

    let text: String = parts
        .join(" ")
        .to_lowercase()
        .nfkd()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let keywords: Vec<&str> = text
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .collect();

    if keywords.is_empty() {
        FALLBACK_KEYWORD.to_string()
    } else {
        keywords.join(" ")
    }
}

/// Generic placeholder used when a provider fails.
pub fn placeholder_image(index: usize, nonce: u64) -> String {
    format!(
        "{}/{}/{}?random={}",
        PICSUM_BASE,
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        nonce.wrapping_add(index as u64)
    )
}

/// Produces an image reference for a slide.
pub trait ImageProvider {
    /// Return an image URL for the slide at `index` described by `keywords`.
    fn image_for(&self, keywords: &str, index: usize) -> Result<String>;
}

impl<F> ImageProvider for F
where
    F: Fn(&str, usize) -> Result<String>,
{
    fn image_for(&self, keywords: &str, index: usize) -> Result<String> {
        self(keywords, index)
    }
}

/// Seeded placeholder images from picsum.photos.
///
/// The same keywords and index always map to the same image, except for
/// [`ImageSource::Random`], which is varied by the nonce instead.
#[derive(Debug, Clone)]
pub struct PicsumProvider {
    source: ImageSource,
    nonce: u64,
}

impl PicsumProvider {
    pub fn new(source: ImageSource) -> Self {
        Self { source, nonce: 0 }
    }

    /// Set the value mixed into unseeded URLs, usually a timestamp.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }
}

impl ImageProvider for PicsumProvider {
    fn image_for(&self, keywords: &str, index: usize) -> Result<String> {
        let seed = match self.source {
            ImageSource::Unsplash => format!("{}-{}", urlencoding::encode(keywords), index),
            ImageSource::Pexels => format!("pexels-{}-{}", urlencoding::encode(keywords), index),
            ImageSource::Pixabay => format!("pixabay-{}-{}", urlencoding::encode(keywords), index),
            ImageSource::Random => self.nonce.wrapping_add(index as u64).to_string(),
        };

        Ok(format!(
            "{}/seed/{}/{}/{}",
            PICSUM_BASE, seed, IMAGE_WIDTH, IMAGE_HEIGHT
        ))
    }
}

/// Fills in images for slides that have none.
pub struct ImageEnricher<P> {
    provider: P,
    nonce: u64,
}

impl<P: ImageProvider> ImageEnricher<P> {
    /// Create an enricher around a provider.
    pub fn new(provider: P) -> Self {
        Self { provider, nonce: 0 }
    }

    /// Set the value mixed into placeholder URLs.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Pick an image for one slide, falling back to a placeholder on error.
    pub fn assign_fallback_image(&self, slide: &Slide, index: usize) -> String {
        let keywords = image_keywords(slide);

        match self.provider.image_for(&keywords, index) {
            Ok(url) => {
                log::debug!(
                    "Slide {}: {:?} - keywords {:?} - image {}",
                    index + 1,
                    slide.title,
                    keywords,
                    url
                );
                url
            }
            Err(e) => {
                log::warn!("Could not find an image for slide {}: {}", index + 1, e);
                placeholder_image(index, self.nonce)
            }
        }
    }

    /// Give every slide without images exactly one image.
    ///
    /// Slides that already have images are left untouched. Returns the number
    /// of slides that were given an image.
    pub fn enrich(&self, slides: &mut [Slide]) -> usize {
        let mut enriched = 0;

        for (index, slide) in slides.iter_mut().enumerate() {
            if slide.has_images() {
                log::debug!("Slide {} already has images, skipping", index + 1);
                continue;
            }

            let url = self.assign_fallback_image(slide, index);
            slide.images = vec![url];
            enriched += 1;
        }

        enriched
    }
}

/// Provider that always fails, for callers that want placeholders only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderOnly;

impl ImageProvider for PlaceholderOnly {
    fn image_for(&self, _keywords: &str, _index: usize) -> Result<String> {
        Err(Error::ImageLookup("no image provider configured".to_string()))
    }
}
