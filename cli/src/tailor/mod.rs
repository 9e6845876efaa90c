//! Resume tailoring pipeline: fetch a job listing, ask a model to rewrite
//! the resume for it, save the markup and convert it to `.docx`.

mod error;
mod fetch;
mod files;
mod llm;
mod prompt;

pub use error::TailorError;
pub use llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::SETTINGS_DIR;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use resumark::{ConvertOptions, Converter, RenderConfig, RenderStats};

use files::{BACKUP_DIR, MARKDOWN_DIR};
use llm::LlmClient;
use prompt::{PromptParts, Settings};

/// Inputs of one tailoring run.
#[derive(Debug, Clone)]
pub struct TailorRequest {
    pub job_url: String,
    pub resume: PathBuf,
    pub output_md: Option<PathBuf>,
    pub output_docx: Option<PathBuf>,
    pub model: String,
    pub moderate: bool,
    pub verbose: bool,
    pub output_dir: Option<PathBuf>,
    pub settings_dir: PathBuf,
    pub api_key: Option<String>,
    pub base_url: String,
    pub config: RenderConfig,
}

/// What a tailoring run produced.
#[derive(Debug, Clone)]
pub struct TailorOutcome {
    pub backup_path: PathBuf,
    pub markdown_path: PathBuf,
    pub docx_path: PathBuf,
    pub stats: RenderStats,
}

/// Run the pipeline on a fresh Tokio runtime.
pub fn run(request: TailorRequest) -> Result<TailorOutcome, TailorError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(Pipeline::new(request).run())
}

struct Pipeline {
    request: TailorRequest,
    settings: Settings,
}

impl Pipeline {
    fn new(request: TailorRequest) -> Self {
        let settings = Settings::new(&request.settings_dir);
        Self { request, settings }
    }

    async fn run(self) -> Result<TailorOutcome, TailorError> {
        let request = &self.request;
        let verbose = request.verbose;

        let api_key = request
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TailorError::MissingApiKey)?;

        let markdown_dir = PathBuf::from(MARKDOWN_DIR);
        let markdown_path = files::place_bare(
            &output_name(request.output_md.as_deref(), files::default_markdown_name),
            &markdown_dir,
        )?;
        let docx_name = files::place_bare(
            &output_name(request.output_docx.as_deref(), files::default_docx_name),
            Path::new(resumark::convert::DEFAULT_EXPORT_DIR),
        )?;

        let backup_path = files::backup_resume(&request.resume, &markdown_dir.join(BACKUP_DIR))?;
        if verbose {
            println!("Backup of original resume saved as {}", backup_path.display());
        }
        let resume = fs::read_to_string(&request.resume)?;

        let spinner = self.spinner("Fetching job details from the URL...");
        let http = Client::builder().timeout(Duration::from_secs(120)).build()?;
        let job_details = fetch::fetch_job_details(&http, &request.job_url).await;
        spinner.finish_and_clear();
        let job_details = job_details?;
        println!("{}", "Job details fetched successfully.".green());
        if verbose {
            println!("\n--- JOB DETAILS ---");
            println!("{}", job_details);
            println!("-------------------\n");
        }

        let header = self.settings.header()?;
        let instructions = self.settings.instructions(request.moderate)?;
        let prompt = prompt::build_prompt(&PromptParts {
            header: &header,
            date: chrono::Local::now().date_naive(),
            instructions: &instructions,
            job_details: &job_details,
            resume: &resume,
        });
        if verbose {
            println!("\n--- FULL PROMPT ---");
            println!("{}", prompt);
            println!("-------------------\n");
        }

        let spinner = self.spinner("Tailoring the resume to match the job listing...");
        let client = LlmClient::new(api_key, &request.base_url)?;
        let tailored = client.complete(&request.model, &prompt).await;
        spinner.finish_and_clear();
        let tailored = tailored?;
        println!("{}", "Resume tailored successfully.".green());

        fs::write(&markdown_path, &tailored)?;
        log::info!("Wrote {}", markdown_path.display());
        if verbose {
            println!("Tailored resume saved as {}", markdown_path.display());
        } else {
            println!("{}", "Tailored resume saved.".green());
        }

        let spinner = self.spinner("Converting the tailored resume to DOCX...");
        let mut options = ConvertOptions::new()
            .with_config(request.config.clone())
            .with_header_path(self.settings.header_path());
        if let Some(dir) = &request.output_dir {
            options = options.with_output_dir(dir);
        }
        let converted = Converter::new(options).convert(&markdown_path, &docx_name);
        spinner.finish_and_clear();
        let converted = converted?;
        if verbose {
            println!(
                "Conversion successful. DOCX saved as {}",
                converted.output_path.display()
            );
        } else {
            println!("{}", "Conversion successful.".green());
        }

        Ok(TailorOutcome {
            backup_path,
            markdown_path,
            docx_path: converted.output_path,
            stats: converted.stats,
        })
    }

    /// Spinner for a step; hidden in verbose mode, which prints instead.
    fn spinner(&self, message: &str) -> ProgressBar {
        if self.request.verbose {
            println!("{}", message);
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

fn output_name(given: Option<&Path>, default: fn() -> String) -> PathBuf {
    given
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default()))
}
