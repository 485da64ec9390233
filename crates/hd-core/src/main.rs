//! heredity CLI entry point.
//!
//! Usage:
//!   heredity infer family.csv                 # posterior table as text
//!   heredity --format json infer family.csv   # full report as JSON
//!   heredity model show                       # print the active model
//!   heredity model validate model.json        # check a model file

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hd_common::{Error, OutputFormat, Result};
use hd_config::{resolve_model, ConfigPaths, GeneModel, ResolvedModel};
use hd_core::exit_codes::ExitCode;
use hd_core::inference::{
    InferenceConfig, InferenceEngine, DEFAULT_MAX_INDIVIDUALS, MAX_ENUMERABLE_INDIVIDUALS,
};
use hd_core::logging::{init_logging, LogFormat};
use hd_core::output::{sink_for, text::DEFAULT_PRECISION, InferenceReport, ResultSink};
use hd_core::pedigree::{CsvPedigreeSource, JsonPedigreeSource, PedigreeSource};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "heredity")]
#[command(version)]
#[command(about = "Exact gene and trait inference over small family pedigrees")]
struct Cli {
    /// Gene model file (overrides HEREDITY_MODEL and the user config)
    #[arg(long, global = true, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute posterior gene and trait probabilities for a pedigree
    Infer(InferArgs),

    /// Inspect gene models
    Model {
        #[command(subcommand)]
        command: ModelCommands,
    },
}

#[derive(Args, Debug)]
struct InferArgs {
    /// Pedigree file
    #[arg(value_name = "PEDIGREE")]
    pedigree: PathBuf,

    /// Input layout (defaults to the file extension, then csv)
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    #[arg(long, default_value_t = DEFAULT_MAX_INDIVIDUALS, help = max_individuals_help())]
    max_individuals: usize,

    /// Decimal places in text output
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

#[derive(Subcommand, Debug)]
enum ModelCommands {
    /// Print the model that would be used, and where it came from
    Show,

    /// Validate a model file
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

fn max_individuals_help() -> String {
    format!("Largest pedigree to enumerate (at most {MAX_ENUMERABLE_INDIVIDUALS})")
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_format);

    let outcome = match &cli.command {
        Commands::Infer(args) => run_infer(&cli, args),
        Commands::Model { command } => match command {
            ModelCommands::Show => run_model_show(&cli),
            ModelCommands::Validate { file } => run_model_validate(&cli, file),
        },
    };

    let code = match outcome {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            eprintln!("heredity: error[{}]: {}", err.code(), err);
            ExitCode::from_error(&err)
        }
    };
    if !code.is_success() {
        process::exit(code.as_i32());
    }
}

fn resolve(cli: &Cli) -> Result<ResolvedModel> {
    let paths = ConfigPaths::from_env(cli.model.clone());
    let resolved = resolve_model(&paths)?;
    debug!(source = %resolved.source, "model resolved");
    Ok(resolved)
}

fn run_infer(cli: &Cli, args: &InferArgs) -> Result<()> {
    let ResolvedModel { model, source } = resolve(cli)?;
    let fingerprint = model.fingerprint();

    let format = args
        .input_format
        .unwrap_or_else(|| InputFormat::detect(&args.pedigree));
    let pedigree = match format {
        InputFormat::Csv => CsvPedigreeSource::new(&args.pedigree).load()?,
        InputFormat::Json => JsonPedigreeSource::new(&args.pedigree).load()?,
    };
    info!(
        path = %args.pedigree.display(),
        individuals = pedigree.len(),
        "pedigree loaded"
    );

    let config = InferenceConfig {
        max_individuals: args.max_individuals,
    };
    let result = InferenceEngine::new(model, config).infer(&pedigree)?;
    let report = InferenceReport::new(result, fingerprint, source);

    let stdout = std::io::stdout();
    let mut sink = sink_for(cli.format, stdout.lock(), args.precision);
    sink.write_report(&report)
}

#[derive(Serialize)]
struct ModelView<'a> {
    source: &'a hd_config::ModelSource,
    fingerprint: String,
    model: &'a GeneModel,
}

fn run_model_show(cli: &Cli) -> Result<()> {
    let resolved = resolve(cli)?;
    let view = ModelView {
        source: &resolved.source,
        fingerprint: resolved.model.fingerprint(),
        model: &resolved.model,
    };

    let mut out = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let m = view.model;
            writeln!(out, "source: {}", view.source)?;
            writeln!(out, "fingerprint: {}", view.fingerprint)?;
            writeln!(
                out,
                "gene_prior: 0={} 1={} 2={}",
                m.gene_prior.zero, m.gene_prior.one, m.gene_prior.two
            )?;
            writeln!(
                out,
                "trait_given_gene: 0={} 1={} 2={}",
                m.trait_given_gene.zero, m.trait_given_gene.one, m.trait_given_gene.two
            )?;
            writeln!(out, "mutation_rate: {}", m.mutation_rate)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ValidationView<'a> {
    path: &'a Path,
    valid: bool,
    fingerprint: String,
}

fn run_model_validate(cli: &Cli, file: &Path) -> Result<()> {
    let model = GeneModel::from_file(file).map_err(Error::from)?;
    let view = ValidationView {
        path: file,
        valid: true,
        fingerprint: model.fingerprint(),
    };

    let mut out = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}: valid ({})", file.display(), view.fingerprint)?;
        }
    }
    Ok(())
}
