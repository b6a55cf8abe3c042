//! CLI tool for turning plain text into slide decks.

use anyhow::{Context, Result};
use clap::Parser;
use quickslides_core::{
    validate_input, ExportFormat, ImageEnricher, ImageSource, MarkdownExporter, PicsumProvider,
    PresentationState, Slide, SlideParser, TextExporter,
};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Input path that stands for standard input.
const STDIN_PATH: &str = "-";

/// Turn loosely structured text into slides and export them.
#[derive(Parser, Debug)]
#[command(name = "quickslides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file(s); reads stdin when omitted or given as "-"
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format: text, markdown or json
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Add images to slides without one: unsplash, pexels, pixabay or random
    #[arg(short, long)]
    images: Option<ImageSource>,

    /// Only output this slide (1-based)
    #[arg(short, long)]
    slide: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let parser = SlideParser::new();

    if args.input.is_empty() {
        let output = process_file(Path::new(STDIN_PATH), &args, &parser)?;
        print!("{}", output);
        return Ok(());
    }

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &parser) {
            Ok(output) => {
                if prints_to_stdout(input_path, &args) {
                    print!("{}", output);
                } else {
                    let output_path =
                        output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Stdin has no file to write next to, so its output always goes to stdout.
fn prints_to_stdout(input_path: &Path, args: &Args) -> bool {
    args.print || is_stdin(input_path)
}

/// Read a text file, or stdin for "-".
fn read_input(input_path: &Path) -> Result<String> {
    if is_stdin(input_path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))
}

/// Read and render a single input.
fn process_file(input_path: &Path, args: &Args, parser: &SlideParser) -> Result<String> {
    let text = read_input(input_path)?;
    render(&text, args, parser)
}

/// Parse, optionally enrich, select, and export.
fn render(text: &str, args: &Args, parser: &SlideParser) -> Result<String> {
    let text = validate_input(text)?;
    let deck = parser.parse_deck(text);

    if args.verbose {
        eprintln!(
            "  Found {} slides ({} without images)",
            deck.len(),
            deck.slides_without_images()
        );
    }

    let mut slides = deck.into_slides();

    if let Some(source) = args.images {
        let nonce = clock_nonce();
        let provider = PicsumProvider::new(source).with_nonce(nonce);
        let enriched = ImageEnricher::new(provider)
            .with_nonce(nonce)
            .enrich(&mut slides);

        if args.verbose {
            eprintln!("  Added {} images from {}", enriched, source);
        }
    }

    let slides = match args.slide {
        Some(number) => vec![select_slide(slides, number)?],
        None => slides,
    };

    export(&slides, args.format)
}

/// Pick one slide by 1-based number.
fn select_slide(slides: Vec<Slide>, number: usize) -> Result<Slide> {
    let mut state = PresentationState::new(slides);
    let index = number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Slide numbers start at 1"))?;

    Ok(state.go_to(index)?.clone())
}

fn export(slides: &[Slide], format: ExportFormat) -> Result<String> {
    let output = match format {
        ExportFormat::Text => TextExporter::new().export(slides),
        ExportFormat::Markdown => MarkdownExporter::new().export(slides),
        ExportFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(slides).context("Failed to serialize slides")?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}

/// Milliseconds since the epoch, used to vary random images between runs.
fn clock_nonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Determine the output path for a processed file.
fn output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: ExportFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("presentation");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: ExportFormat, slide: Option<usize>, images: Option<ImageSource>) -> Args {
        Args {
            input: Vec::new(),
            output: None,
            print: true,
            format,
            images,
            slide,
            verbose: false,
        }
    }

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(Path::new("talks/intro.txt"), None, ExportFormat::Markdown).unwrap();
        assert_eq!(path, PathBuf::from("talks/intro.md"));
    }

    #[test]
    fn test_output_path_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");

        let path = output_path(Path::new("intro.txt"), Some(&out), ExportFormat::Json).unwrap();

        assert_eq!(path, out.join("intro.json"));
        assert!(out.is_dir());
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");

        write_output(&path, "SLIDE 1\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "SLIDE 1\n");
    }

    #[test]
    fn test_dash_reads_stdin_and_prints() {
        let mut a = args(ExportFormat::Text, None, None);
        a.print = false;

        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-notes.txt")));
        assert!(prints_to_stdout(Path::new("-"), &a));
        assert!(!prints_to_stdout(Path::new("talk.txt"), &a));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talk.txt");
        std::fs::write(&path, "# Hello\n- world").unwrap();

        assert_eq!(read_input(&path).unwrap(), "# Hello\n- world");
        assert!(read_input(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_render_rejects_blank_input() {
        let parser = SlideParser::new();
        assert!(render("  \n ", &args(ExportFormat::Text, None, None), &parser).is_err());
    }

    #[test]
    fn test_render_single_slide_as_markdown() {
        let parser = SlideParser::new();
        let output = render(
            "One\n---\nTwo\n- point",
            &args(ExportFormat::Markdown, Some(2), None),
            &parser,
        )
        .unwrap();

        assert_eq!(output, "# Two\n- point\n");
    }

    #[test]
    fn test_render_slide_out_of_range() {
        let parser = SlideParser::new();
        let a = args(ExportFormat::Text, Some(5), None);
        assert!(render("One\n---\nTwo", &a, &parser).is_err());

        let zero = args(ExportFormat::Text, Some(0), None);
        assert!(render("One", &zero, &parser).is_err());
    }

    #[test]
    fn test_render_json_with_images() {
        let parser = SlideParser::new();
        let output = render(
            "# Mountains\n---\n# Lake\nhttps://i.imgur.com/lake.png",
            &args(ExportFormat::Json, None, Some(ImageSource::Pexels)),
            &parser,
        )
        .unwrap();

        let slides: Vec<Slide> = serde_json::from_str(&output).unwrap();
        assert_eq!(
            slides[0].images,
            vec!["https://picsum.photos/seed/pexels-mountains-0/800/450"]
        );
        assert_eq!(slides[1].images, vec!["https://i.imgur.com/lake.png"]);
    }
}
