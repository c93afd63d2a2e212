//! Resume matcher: resume screening and job matching for data roles

mod cli;
mod config;
mod dataset;
mod error;
mod extraction;
mod input;
mod matching;
mod nlp;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use dataset::{DatasetInsights, DatasetRepository};
use error::{Result, ResumeMatcherError};
use extraction::{ResumeExtractor, SkillTaxonomy};
use input::InputManager;
use log::{error, info};
use matching::{ATSHeuristicScorer, CandidateRanker, JobScorer};
use output::report::{MatchReport, RankingReport, Report};
use output::formatter_for;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path.clone()),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            top,
            output,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            info!("Matching resume {} against job dataset", resume.display());

            let repository = DatasetRepository::load(&config)?;
            let extractor = ResumeExtractor::new(SkillTaxonomy::data_roles())?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let profile = extractor.extract(&resume_text);
            let scorer = JobScorer::new();
            let top_jobs = scorer.best_matches(
                &profile.skills,
                repository.jobs(),
                top.unwrap_or(config.matching.top_jobs),
            );

            let report = Report::Match(MatchReport { profile, top_jobs });
            print_report(&report, format, detailed, &config)?;
        }

        Commands::Rank {
            job,
            top,
            output,
            detailed,
        } => {
            let format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            let repository = DatasetRepository::load(&config)?;
            let posting = repository.find_job(&job).ok_or_else(|| {
                ResumeMatcherError::InvalidInput(format!("No job with id or title: {}", job))
            })?;

            info!("Ranking candidates for job {}", posting.job_id);

            let records = repository.matches_for_job(&posting.job_id);
            let ranker = CandidateRanker::new();
            let candidates =
                ranker.top_candidates(&records, top.unwrap_or(config.matching.top_candidates));

            let report = Report::Ranking(RankingReport {
                job: posting.clone(),
                candidates,
            });
            print_report(&report, format, detailed, &config)?;
        }

        Commands::Ats { resume, output } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let scorecard = ATSHeuristicScorer::new().score(&resume_text);
            print_report(&Report::Ats(scorecard), format, false, &config)?;
        }

        Commands::Insights { top, output } => {
            let format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            let repository = DatasetRepository::load(&config)?;
            let insights = DatasetInsights::compute(&repository, top);

            print_report(&Report::Insights(insights), format, false, &config)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Data directory: {}", config.data.data_dir.display());
                println!("  Candidates: {}", config.data.candidates_file);
                println!("  Jobs: {}", config.data.jobs_file);
                println!("  Matches: {}", config.data.matches_file);
                println!("Top job suggestions: {}", config.matching.top_jobs);
                println!("Top ranked candidates: {}", config.matching.top_candidates);
                println!("Output format: {:?}", config.output.format);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn print_report(
    report: &Report,
    format: config::OutputFormat,
    detailed: bool,
    config: &Config,
) -> Result<()> {
    let output_config = config::OutputConfig {
        format,
        detailed: detailed || config.output.detailed,
        color_output: config.output.color_output,
    };

    let formatter = formatter_for(&output_config);
    print!("{}", formatter.format_report(report)?);
    Ok(())
}
