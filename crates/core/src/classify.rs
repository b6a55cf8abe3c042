//! Classifying the lines of one slide block into slide fields.
//!
//! Each non-empty line is tested against the rules below in order and the
//! first match wins:
//!
//! 1. image reference
//! 2. `## ` subtitle
//! 3. `#` title (any other heading level)
//! 4. bullet marker (`-`, `*`, `•` or `1.` followed by whitespace)
//! 5. implicit title, when no title is set yet
//! 6. implicit subtitle, right after the title and before any bullet
//! 7. implicit bullet
//!
//! Explicit title and subtitle lines overwrite earlier values, so with several
//! `#` lines in one block only the last one is kept.

use regex::Regex;
use std::sync::LazyLock;

use crate::image::{is_absolute_url, is_image_reference};
use crate::types::Slide;

/// Lines at or above this length are never taken as an implicit subtitle.
pub const DEFAULT_SUBTITLE_MAX_LEN: usize = 100;

/// Bullet glyph or numbered-list marker followed by whitespace.
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]|[0-9]+\.)\s+(.*)$").unwrap());

/// Leading heading hashes and the whitespace after them.
static HEADING_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());

/// The rule that consumed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Image,
    Subtitle,
    Title,
    Bullet,
    ImplicitTitle,
    ImplicitSubtitle,
    ImplicitBullet,
    /// A URL-like line that is not an image; it is discarded.
    Dropped,
}

/// Turns one block of text into a [`Slide`].
#[derive(Debug, Clone)]
pub struct SlideClassifier {
    subtitle_max_len: usize,
}

impl Default for SlideClassifier {
    fn default() -> Self {
        Self {
            subtitle_max_len: DEFAULT_SUBTITLE_MAX_LEN,
        }
    }
}

impl SlideClassifier {
    /// Create a classifier with the default implicit-subtitle limit of 100 characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom length limit (exclusive) for implicit subtitles.
    pub fn with_subtitle_max_len(mut self, len: usize) -> Self {
        self.subtitle_max_len = len;
        self
    }

    /// Classify every non-empty line of a block, top to bottom.
    pub fn classify(&self, block: &str) -> Slide {
        let mut slide = Slide::new();

        for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let rule = self.classify_line(&mut slide, line);
            log::trace!("{:?}: {}", rule, line);
        }

        slide
    }

    /// Apply the first matching rule for a single trimmed line.
    pub fn classify_line(&self, slide: &mut Slide, line: &str) -> LineRule {
        if is_image_reference(line) {
            slide.images.push(line.to_string());
            return LineRule::Image;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            slide.subtitle = non_empty(rest.trim());
            log::debug!("Detected subtitle: {:?}", slide.subtitle);
            return LineRule::Subtitle;
        }

        if line.starts_with('#') {
            slide.title = non_empty(HEADING_PREFIX_REGEX.replace(line, "").trim());
            log::debug!("Detected title (markdown): {:?}", slide.title);
            return LineRule::Title;
        }

        if let Some(caps) = BULLET_REGEX.captures(line) {
            let text = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            slide.bullets.push(text.to_string());
            return LineRule::Bullet;
        }

        if slide.title.is_none() && !is_absolute_url(line) {
            let text = line.strip_suffix(':').unwrap_or(line).trim();
            slide.title = non_empty(text);
            log::debug!("Auto-detected title: {:?}", slide.title);
            return LineRule::ImplicitTitle;
        }

        let is_url_like = line.starts_with("http");

        if slide.title.is_some()
            && slide.subtitle.is_none()
            && slide.bullets.is_empty()
            && line.chars().count() < self.subtitle_max_len
            && !is_url_like
        {
            slide.subtitle = Some(line.to_string());
            log::debug!("Auto-detected subtitle: {:?}", slide.subtitle);
            return LineRule::ImplicitSubtitle;
        }

        if !is_url_like {
            slide.bullets.push(line.to_string());
            return LineRule::ImplicitBullet;
        }

        LineRule::Dropped
    }
}

/// Classify a block using the default configuration.
pub fn classify(block: &str) -> Slide {
    SlideClassifier::new().classify(block)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
