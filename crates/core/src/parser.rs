//! Text-to-deck parsing: segmentation followed by per-block classification.

use crate::classify::SlideClassifier;
use crate::segment::Segmenter;
use crate::types::{Deck, Slide};
use crate::{Error, Result};

/// Parses raw text into slides.
#[derive(Debug, Clone, Default)]
pub struct SlideParser {
    segmenter: Segmenter,
    classifier: SlideClassifier,
}

impl SlideParser {
    /// Create a parser with default segmentation and classification settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segmenter.
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: SlideClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Parse text into slides, one per segmented block.
    ///
    /// Never fails and never returns an empty list: blank input gives one
    /// empty slide.
    pub fn parse(&self, text: &str) -> Vec<Slide> {
        let slides: Vec<Slide> = self
            .segmenter
            .segment(text)
            .iter()
            .map(|block| self.classifier.classify(block))
            .collect();

        log::debug!("Parsed {} slides", slides.len());
        slides
    }

    /// Parse text into a [`Deck`].
    pub fn parse_deck(&self, text: &str) -> Deck {
        Deck::new(self.parse(text))
    }
}

/// Parse text into slides with the default configuration.
pub fn parse_slides(text: &str) -> Vec<Slide> {
    SlideParser::new().parse(text)
}

/// Reject input that has nothing to parse.
///
/// Returns the trimmed text on success.
pub fn validate_input(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(trimmed)
}
