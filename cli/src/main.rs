//! docmark CLI - highlighted text extraction and DOCX/XML conversion
//!
//! A command-line tool for pulling highlighted runs out of Word documents
//! and converting between .docx packages and their raw document XML.

use clap::{Parser, Subcommand};
use colored::*;
use docmark::docx::DOCUMENT_PART;
use docmark::render::JsonFormat;
use docmark::{suggested_filename, Package, ProcessOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DOCMARK_LOG";

/// Highlighted text extraction and DOCX/XML round-tripping
#[derive(Parser)]
#[command(
    name = "docmark",
    author = "iyulab",
    version,
    about = "Extract highlighted text from Word documents",
    long_about = "docmark - Highlighted text extraction for Word documents.\n\n\
                  Reports highlighted runs as JSON and converts between .docx\n\
                  packages and their raw document XML."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, global = true, value_name = "BYTES")]
    max_size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract highlighted text as a JSON report
    #[command(visible_alias = "hl")]
    Highlights {
        /// Input .docx file
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Convert a .docx file to its document XML
    ToXml {
        /// Input .docx file
        input: PathBuf,

        /// Output file path (default: <input base>.xml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert document XML to a minimal .docx file
    ToDocx {
        /// Input .xml file
        input: PathBuf,

        /// Output file path (default: <input base>.docx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject XML that is not well-formed
        #[arg(long)]
        validate: bool,
    },

    /// Show package parts and relationships
    Info {
        /// Input .docx file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ProcessOptions::new();
    if let Some(limit) = cli.max_size {
        options = options.with_max_input_bytes(limit);
    }

    match cli.command {
        Commands::Highlights {
            input,
            output,
            compact,
        } => {
            require_extension(&input, "docx", "File must be a DOCX document")?;
            let pb = create_spinner("Extracting highlights...");

            let data = fs::read(&input)?;
            if compact {
                options = options.with_json_format(JsonFormat::Compact);
            }
            let report = docmark::highlight_report(&file_name(&input), &data, &options)?;
            let json = docmark::render::to_json_with_options(&report, &options)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Extracted {} highlighted runs: {}",
                    "✓".green().bold(),
                    report.highlighted_text_count,
                    path.display()
                );
            }
        }

        Commands::ToXml { input, output } => {
            require_extension(&input, "docx", "File must be a DOCX document")?;
            let pb = create_spinner("Reading document part...");

            let data = fs::read(&input)?;
            let xml = docmark::docx_to_xml(&data, &options)?;
            let output = output.unwrap_or_else(|| sibling(&input, "xml"));
            fs::write(&output, xml)?;

            pb.finish_and_clear();
            println!(
                "{} Converted to XML: {}",
                "✓".green().bold(),
                output.display()
            );
        }

        Commands::ToDocx {
            input,
            output,
            validate,
        } => {
            require_extension(&input, "xml", "File must be an XML document")?;
            let pb = create_spinner("Packaging document...");

            let data = fs::read(&input)?;
            let options = options.with_xml_validation(validate);
            let docx = docmark::xml_to_docx(&data, &options)?;
            let output = output.unwrap_or_else(|| sibling(&input, "docx"));
            fs::write(&output, docx)?;

            pb.finish_and_clear();
            println!(
                "{} Converted to DOCX: {}",
                "✓".green().bold(),
                output.display()
            );
        }

        Commands::Info { input } => {
            let data = fs::read(&input)?;
            options.check_size(&data)?;
            let package = Package::open(data)?;
            let main_document = package.main_document_path()?;

            println!("{}", "Package Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "File".bold(), file_name(&input));
            println!("{}: {}", "Main document".bold(), main_document);
            println!(
                "{}: {}",
                "Document part".bold(),
                if package.contains(DOCUMENT_PART) {
                    "present".green()
                } else {
                    "missing".red()
                }
            );

            println!("\n{}", "Parts".cyan().bold());
            println!("{}", "─".repeat(40));
            for name in package.part_names() {
                println!("  {}", name);
            }

            let rels = package.read_package_relationships()?;
            let doc_rels = package.read_relationships(&main_document)?;
            println!("\n{}", "Relationships".cyan().bold());
            println!("{}", "─".repeat(40));
            for rel in rels.sorted().into_iter().chain(doc_rels.sorted()) {
                println!(
                    "  {} {} → {}{}",
                    rel.id.bold(),
                    rel.rel_type.rsplit('/').next().unwrap_or(&rel.rel_type),
                    rel.target,
                    if rel.external { " (external)" } else { "" }
                );
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "docmark".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Highlighted text extraction and DOCX/XML round-tripping");
}

/// Reject inputs whose extension does not match, case-insensitively.
fn require_extension(path: &Path, extension: &str, message: &str) -> Result<(), String> {
    let matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if matches {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// Output path next to the input, named by [`suggested_filename`].
fn sibling(input: &Path, extension: &str) -> PathBuf {
    input.with_file_name(suggested_filename(&file_name(input), extension))
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
