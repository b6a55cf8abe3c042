//! WASM-compatible wrapper for QuickSlides parsing.
//!
//! This crate exposes the slide parser to JavaScript for the browser front
//! end, which owns rendering, navigation buttons, and file downloads.

use quickslides_core::{
    is_image_reference, parse_slides, validate_input, ImageEnricher, ImageSource, MarkdownExporter,
    PicsumProvider, Slide, TextExporter,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse raw text into an array of slide objects.
///
/// Each object has `title`, `subtitle` (string or null), `bullets` and `images` (string arrays).
#[wasm_bindgen]
pub fn parse_content(text: &str) -> Result<JsValue, JsValue> {
    let slides = parse_content_impl(text)?;

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_content_impl(text: &str) -> Result<Vec<Slide>, String> {
    let text = validate_input(text).map_err(|e| format!("{}", e))?;
    Ok(parse_slides(text))
}

/// Check whether a string is an image URL the parser would pick up.
#[wasm_bindgen]
pub fn is_image_url(text: &str) -> bool {
    is_image_reference(text)
}

/// Give every slide without images a generated image.
///
/// # Arguments
/// * `slides` - Array of slide objects from `parse_content`
/// * `source` - One of "unsplash", "pexels", "pixabay", "random"
/// * `nonce` - Varies random images between calls, usually `Date.now()`
#[wasm_bindgen]
pub fn add_auto_images(slides: JsValue, source: &str, nonce: f64) -> Result<JsValue, JsValue> {
    let slides: Vec<Slide> = serde_wasm_bindgen::from_value(slides)
        .map_err(|e| JsValue::from_str(&format!("Invalid slides array: {}", e)))?;

    let slides = add_auto_images_impl(slides, source, nonce as u64)?;

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn add_auto_images_impl(mut slides: Vec<Slide>, source: &str, nonce: u64) -> Result<Vec<Slide>, String> {
    let source: ImageSource = source.parse().map_err(|e| format!("{}", e))?;

    let provider = PicsumProvider::new(source).with_nonce(nonce);
    ImageEnricher::new(provider).with_nonce(nonce).enrich(&mut slides);

    Ok(slides)
}

/// Format slides as a plain-text handout.
#[wasm_bindgen]
pub fn export_text(slides: JsValue) -> Result<String, JsValue> {
    let slides: Vec<Slide> = serde_wasm_bindgen::from_value(slides)
        .map_err(|e| JsValue::from_str(&format!("Invalid slides array: {}", e)))?;

    Ok(export_text_impl(&slides)?)
}

fn export_text_impl(slides: &[Slide]) -> Result<String, String> {
    if slides.is_empty() {
        return Err("No slides to export".to_string());
    }

    Ok(TextExporter::new().export(slides))
}

/// Format slides as markdown that `parse_content` reads back.
#[wasm_bindgen]
pub fn export_markdown(slides: JsValue) -> Result<String, JsValue> {
    let slides: Vec<Slide> = serde_wasm_bindgen::from_value(slides)
        .map_err(|e| JsValue::from_str(&format!("Invalid slides array: {}", e)))?;

    Ok(export_markdown_impl(&slides)?)
}

fn export_markdown_impl(slides: &[Slide]) -> Result<String, String> {
    if slides.is_empty() {
        return Err("No slides to export".to_string());
    }

    Ok(MarkdownExporter::new().export(slides))
}
