//! Splitting raw text into one block per slide.
//!
//! An explicit `---` line always wins. Without one, blocks are guessed from
//! headings and blank lines, with a paragraph split as a last resort.

use regex::Regex;
use std::sync::LazyLock;

/// A line consisting only of this marker separates slides.
pub const SLIDE_DELIMITER: &str = "---";

/// Lines shorter than this after a blank line are treated as the start of a new slide.
pub const DEFAULT_SHORT_LINE_LIMIT: usize = 60;

/// Blank-line separated paragraphs (whitespace-only lines count as blank).
static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Splits input text into per-slide text blocks.
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Maximum length (exclusive) of a line that may open a new slide after a blank line.
    short_line_limit: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            short_line_limit: DEFAULT_SHORT_LINE_LIMIT,
        }
    }
}

impl Segmenter {
    /// Create a segmenter with the default short-line limit of 60 characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom short-line limit for the blank-line heuristic.
    pub fn with_short_line_limit(mut self, limit: usize) -> Self {
        self.short_line_limit = limit.max(1);
        self
    }

    /// Split text into trimmed, non-empty blocks, one per slide.
    ///
    /// Always returns at least one block. For non-blank input every block is
    /// non-empty; blank input yields a single empty block.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        let blocks = if has_delimiter_line(&text) {
            log::debug!("Segmenting on explicit '{}' delimiter lines", SLIDE_DELIMITER);
            split_on_delimiter(&text)
        } else {
            self.split_heuristically(&text)
        };

        if blocks.is_empty() {
            log::debug!("No blocks found, using the whole input as one slide");
            return vec![text.trim().to_string()];
        }

        blocks
    }

    /// Guess slide boundaries from headings and blank lines.
    fn split_heuristically(&self, text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().collect();
        let mut blocks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for (idx, line) in lines.iter().copied().enumerate() {
            let trimmed = line.trim();

            if trimmed.starts_with('#') && !current.is_empty() {
                flush_block(&mut blocks, &mut current);
                current.push(line);
            } else if !trimmed.is_empty() {
                current.push(line);
            } else if !current.is_empty() {
                let starts_new_slide = next_non_empty_line(&lines[idx + 1..])
                    .map(|next| self.is_short(next) || next.starts_with('#'))
                    .unwrap_or(false);

                if starts_new_slide {
                    flush_block(&mut blocks, &mut current);
                }
            }
        }

        flush_block(&mut blocks, &mut current);

        if blocks.len() == 1 {
            let paragraphs = split_paragraphs(text);
            if paragraphs.len() > 1 {
                log::debug!("Heuristic found one slide, splitting into {} paragraphs", paragraphs.len());
                return paragraphs;
            }
        }

        log::debug!("Heuristic segmentation found {} slides", blocks.len());
        blocks
    }

    fn is_short(&self, line: &str) -> bool {
        line.chars().count() < self.short_line_limit
    }
}

/// Split text into slide blocks using the default configuration.
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::new().segment(text)
}

/// True if any line is exactly the slide delimiter (ignoring surrounding whitespace).
fn has_delimiter_line(text: &str) -> bool {
    text.lines().any(|line| line.trim() == SLIDE_DELIMITER)
}

fn split_on_delimiter(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim() == SLIDE_DELIMITER {
            flush_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }

    flush_block(&mut blocks, &mut current);
    blocks
}

fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK_REGEX
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find the next line with content, trimmed.
fn next_non_empty_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.iter().copied().map(str::trim).find(|l| !l.is_empty())
}

/// Push the accumulated lines as a block if they contain any text, then reset.
fn flush_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    let block = current.join("\n");
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_LINE: &str =
        "This sentence is deliberately written to be longer than sixty characters in total.";

    #[test]
    fn test_delimiter_split() {
        assert_eq!(segment("A\n\n---\n\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_delimiter_discards_empty_pieces() {
        let blocks = segment("---\nFirst\n---\n   \n---\nSecond\n---");
        assert_eq!(blocks, vec!["First", "Second"]);
    }

    #[test]
    fn test_delimiter_takes_priority_over_headings() {
        let blocks = segment("# One\nline\n# Two\nline\n---\n# Three");
        assert_eq!(blocks, vec!["# One\nline\n# Two\nline", "# Three"]);
    }

    #[test]
    fn test_delimiter_must_be_its_own_line() {
        let blocks = segment("Before---after\nstill the same slide");
        assert_eq!(blocks, vec!["Before---after\nstill the same slide"]);
    }

    #[test]
    fn test_indented_delimiter_line() {
        assert_eq!(segment("A\n  ---  \nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_heading_starts_new_slide() {
        let blocks = segment("# Intro\nWelcome\n# Agenda\n- one\n- two");
        assert_eq!(blocks, vec!["# Intro\nWelcome", "# Agenda\n- one\n- two"]);
    }

    #[test]
    fn test_blank_line_before_short_line_splits() {
        let blocks = segment("Welcome\nSubtitle here\n\nNext Topic\nDetails");
        assert_eq!(blocks, vec!["Welcome\nSubtitle here", "Next Topic\nDetails"]);
    }

    #[test]
    fn test_blank_line_before_long_line_joins() {
        let input = format!("# Topic\nShort intro\n\n{}\n\nClosing", LONG_LINE);
        let blocks = segment(&input);
        assert_eq!(
            blocks,
            vec![format!("# Topic\nShort intro\n{}", LONG_LINE), "Closing".to_string()]
        );
    }

    #[test]
    fn test_single_block_falls_back_to_paragraphs() {
        let input = format!("Opening remarks\n\n{}", LONG_LINE);
        let blocks = segment(&input);
        assert_eq!(blocks, vec!["Opening remarks".to_string(), LONG_LINE.to_string()]);
    }

    #[test]
    fn test_single_long_paragraph_is_one_block() {
        let input = format!("{}\n{}\n{}", LONG_LINE, LONG_LINE, LONG_LINE);
        let blocks = segment(&input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], input);
    }

    #[test]
    fn test_multiple_blank_lines() {
        assert_eq!(segment("A\n\n\n\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_trailing_blank_lines_do_not_split() {
        assert_eq!(segment("Only slide\n\n\n"), vec!["Only slide"]);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(segment("A\r\n---\r\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_only_delimiters_falls_back_to_whole_input() {
        assert_eq!(segment("  ---  "), vec!["---"]);
    }

    #[test]
    fn test_blank_input_yields_single_empty_block() {
        assert_eq!(segment("   \n\n  "), vec![""]);
    }

    #[test]
    fn test_custom_short_line_limit() {
        let segmenter = Segmenter::new().with_short_line_limit(5);
        let blocks = segmenter.segment("Title\nmore\n\nlonger line\nend\n\nok\nfin");
        assert_eq!(blocks, vec!["Title\nmore\nlonger line\nend", "ok\nfin"]);
    }
}
