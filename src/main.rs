//! Resume matcher: scores a resume against job descriptions

use clap::Parser;
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::input::manager::{read_job_description, InputManager};
use resume_matcher::output::formatter::save_report_to_file;
use resume_matcher::output::{AnalysisReport, ReportGenerator};
use resume_matcher::processing::analyzer;
use resume_matcher::{Result, ResumeMatcherError};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        if e.is_extraction_error() {
            error!("Could not read the resume, analysis aborted: {}", e);
        } else {
            error!("Command failed: {}", e);
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            mime,
            format,
            output,
            save,
            max_terms,
            no_color,
        } => {
            let output_format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let job_descriptions = if job.is_empty() {
                job_text
            } else {
                let mut texts = Vec::with_capacity(job.len());
                for path in &job {
                    texts.push(read_job_description(path).await?);
                }
                texts
            };

            // Validate before touching the resume so a missing JD #1 never
            // triggers extraction.
            if let Err(e) = analyzer::validate_job_descriptions(&job_descriptions) {
                warn!("Please provide a resume and at least Job Description 1");
                return Err(e);
            }

            let started = Instant::now();
            let document_format = cli::resolve_document_format(&resume, format.as_deref(), mime.as_deref())?;
            info!("Analyzing {} ({}) against {} job description(s)", resume.display(), document_format, job_descriptions.len());

            let input_manager = InputManager::from_config(&config);
            let resume_text = input_manager.extract_text(&resume, Some(document_format)).await?;
            let results = analyzer::analyze(&resume_text, &job_descriptions)?;

            let report = AnalysisReport::new(
                resume.to_string_lossy(),
                document_format,
                results,
                started.elapsed(),
            );

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                max_terms.unwrap_or(config.display.max_terms),
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Extraction timeout: {}s", config.extraction.timeout_secs);
                println!("Max document size: {} bytes", config.extraction.max_document_bytes);
                println!("Max DOCX body size: {} bytes", config.extraction.max_xml_entry_bytes);
                println!("Displayed terms: {}", config.display.max_terms);
                println!("Output format: {:?}", config.output.format);
                println!("Colored output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                match &config_path {
                    Some(path) => default_config.save_to(path)?,
                    None => default_config.save()?,
                }
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
