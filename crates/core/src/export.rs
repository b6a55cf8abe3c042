//! Plain-text and markdown output.
//!
//! The text export is a printable handout. The markdown export writes slides
//! back in the explicit markup the parser understands, so an exported deck
//! can be edited and parsed again.

use std::io::Write;

use crate::segment::SLIDE_DELIMITER;
use crate::types::Slide;
use crate::Result;

/// Default width of the `=====` rule under each slide header.
const DEFAULT_RULE_WIDTH: usize = 50;

/// Formatter for plain-text handouts.
#[derive(Debug, Clone)]
pub struct TextExporter {
    rule_width: usize,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self {
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

impl TextExporter {
    /// Create an exporter with a 50-character rule under each slide header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom rule width.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// Format slides as a plain-text handout.
    ///
    /// Images are not included.
    ///
    /// # Example output
    /// ```text
    /// SLIDE 1
    /// ==================================================
    ///
    /// WELCOME
    ///
    /// Getting started
    ///
    /// • First point
    /// ```
    pub fn export(&self, slides: &[Slide]) -> String {
        let mut out = String::new();

        for (index, slide) in slides.iter().enumerate() {
            out.push_str(&format!("SLIDE {}\n", index + 1));
            out.push_str(&"=".repeat(self.rule_width));
            out.push_str("\n\n");

            if let Some(title) = &slide.title {
                out.push_str(&title.to_uppercase());
                out.push_str("\n\n");
            }

            if let Some(subtitle) = &slide.subtitle {
                out.push_str(subtitle);
                out.push_str("\n\n");
            }

            for bullet in &slide.bullets {
                out.push_str("• ");
                out.push_str(bullet);
                out.push('\n');
            }

            out.push_str("\n\n");
        }

        out
    }

    /// Write the handout to a writer.
    pub fn write_to<W: Write>(&self, slides: &[Slide], mut writer: W) -> Result<()> {
        writer.write_all(self.export(slides).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Formatter that writes slides back as parser input.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }

    /// Format slides as markdown separated by `---` lines, with a trailing newline.
    pub fn export(&self, slides: &[Slide]) -> String {
        if slides.is_empty() {
            return String::new();
        }

        let separator = format!("\n\n{}\n\n", SLIDE_DELIMITER);
        let body = slides
            .iter()
            .map(format_slide_markdown)
            .collect::<Vec<_>>()
            .join(&separator);

        format!("{}\n", body)
    }

    /// Write the markdown to a writer.
    pub fn write_to<W: Write>(&self, slides: &[Slide], mut writer: W) -> Result<()> {
        writer.write_all(self.export(slides).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn format_slide_markdown(slide: &Slide) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &slide.title {
        lines.push(format!("# {}", title));
    }
    if let Some(subtitle) = &slide.subtitle {
        lines.push(format!("## {}", subtitle));
    }
    lines.extend(slide.images.iter().cloned());
    lines.extend(slide.bullets.iter().map(|b| format!("- {}", b)));

    lines.join("\n")
}
