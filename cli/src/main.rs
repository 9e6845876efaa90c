//! resumark CLI - resume markup to DOCX, with LLM tailoring

mod tailor;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use resumark::convert::{load_header, tool_relative, DEFAULT_HEADER_PATH};
use resumark::{render, ConvertOptions, Converter, JsonFormat, RenderConfig, RenderStats};

use tailor::{TailorRequest, DEFAULT_BASE_URL, DEFAULT_MODEL, SETTINGS_DIR};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(author = "resumark contributors")]
#[command(version)]
#[command(about = "Render resume markup to Word documents and tailor it to job listings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a markup resume to DOCX
    Convert {
        /// Input markup file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output DOCX file name
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Folder to save the DOCX in (default: exported_resumes next to the executable, for bare names)
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,

        /// Running header text file (default: settings/header.txt next to the executable)
        #[arg(long, value_name = "FILE")]
        header: Option<PathBuf>,

        /// JSON file with rendering overrides
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Tailor a resume to a job listing with an LLM, then convert it
    Tailor {
        /// URL of the job listing
        #[arg(long, alias = "job_url", value_name = "URL")]
        job_url: String,

        /// Original markup resume
        #[arg(long, value_name = "FILE")]
        resume: PathBuf,

        /// Tailored markup file name (default: random name in markdown_resumes)
        #[arg(long, alias = "output_md", value_name = "FILE")]
        output_md: Option<PathBuf>,

        /// DOCX file name (default: random name in exported_resumes)
        #[arg(long, alias = "output_docx", value_name = "FILE")]
        output_docx: Option<PathBuf>,

        /// Chat model id
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// true: minimal changes to the baseline; false: creative rewrite
        #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
        moderate: bool,

        /// Print job details and the full prompt
        #[arg(short, long)]
        verbose: bool,

        /// Folder to save the DOCX in
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,

        /// Folder holding header.txt, moderate.txt and unmoderated.txt (relative to the current directory)
        #[arg(long, value_name = "DIR", default_value = SETTINGS_DIR)]
        settings: PathBuf,

        /// JSON file with rendering overrides
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// API key for the chat completions endpoint
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Base URL of an OpenAI-compatible API
        #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Print the rendered document model
    Preview {
        /// Input markup file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Running header text file; a missing file renders without a header
        /// (default: settings/header.txt next to the executable)
        #[arg(long, value_name = "FILE")]
        header: Option<PathBuf>,

        /// JSON file with rendering overrides
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            path,
            header,
            config,
        }) => cmd_convert(&input, &output, path, header, config.as_deref()),
        Some(Commands::Tailor {
            job_url,
            resume,
            output_md,
            output_docx,
            model,
            moderate,
            verbose,
            path,
            settings,
            config,
            api_key,
            base_url,
        }) => load_config(config.as_deref()).and_then(|config| {
            cmd_tailor(TailorRequest {
                job_url,
                resume,
                output_md,
                output_docx,
                model,
                moderate,
                verbose,
                output_dir: path,
                settings_dir: settings,
                api_key,
                base_url,
                config,
            })
        }),
        Some(Commands::Preview {
            input,
            json,
            compact,
            header,
            config,
        }) => cmd_preview(&input, json, compact, header, config.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: resumark <COMMAND>".yellow());
            println!("       resumark --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(RenderConfig::from_json(&json)?)
        }
        None => Ok(RenderConfig::default()),
    }
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    path: Option<PathBuf>,
    header: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::beside_tool().with_config(load_config(config)?);
    if let Some(header) = header {
        options = options.with_header_path(header);
    }
    if let Some(dir) = path {
        options = options.with_output_dir(dir);
    }

    let result = Converter::new(options).convert(input, output)?;

    println!(
        "{} {}",
        "Resume converted and saved as".green(),
        result.output_path.display()
    );
    print_stats(&result.stats);
    Ok(())
}

fn cmd_tailor(request: TailorRequest) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = tailor::run(request)?;

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), outcome.backup_path.display());
    println!("  {} {}", "├─".dimmed(), outcome.markdown_path.display());
    println!("  {} {}", "└─".dimmed(), outcome.docx_path.display());
    print_stats(&outcome.stats);
    Ok(())
}

fn cmd_preview(
    input: &Path,
    json: bool,
    compact: bool,
    header: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let header = header.unwrap_or_else(|| tool_relative(DEFAULT_HEADER_PATH));
    let header_text = match load_header(&header) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{}; rendering without a header", e);
            String::new()
        }
    };

    let options = ConvertOptions::new().with_config(load_config(config)?);
    let markup = fs::read_to_string(input)?;
    let doc = Converter::new(options).render_str(&markup, &header_text);

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", render::to_json(&doc, format)?);
    } else {
        println!("{}", render::to_text(&doc));
        print_stats(&RenderStats::from_document(&doc));
    }
    Ok(())
}

fn print_stats(stats: &RenderStats) {
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Rules".bold(), stats.rule_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
}

fn cmd_version() {
    println!("{} {}", "resumark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume markup to DOCX renderer");
    println!();
    println!("License: MIT");
}
