//! Transform command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use slanglit_core::{
    MatchPolicy, Precedence, SlangTable, TransformConfig, TransformMode, TransformOutput,
    Transformer,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Input files or patterns (supports glob); reads stdin when neither this nor --text is given
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Transform this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Dictionary file (TOML or JSON) to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Replace slang or annotate it with the literary form
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Only accept known inflectional endings after a slang stem
    #[arg(long)]
    pub strict_suffixes: bool,

    /// Let prepositions and pronouns override the word's own ending
    #[arg(long)]
    pub context_first: bool,

    /// Leave adjectives before replaced nouns untouched
    #[arg(long)]
    pub no_agreement: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads for multi-file input (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Transformation modes selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Substitute literary forms
    Replace,
    /// Keep slang and add the literary form in parentheses
    Annotate,
}

impl From<ModeArg> for TransformMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Replace => TransformMode::Replace,
            ModeArg::Annotate => TransformMode::Annotate,
        }
    }
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting slang transformation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let loaded;
        let table = match self.dictionary.as_ref().or(config.transform.dictionary.as_ref()) {
            Some(path) => {
                loaded = load_table(path)?;
                &loaded
            }
            None => slanglit_core::builtin_table(),
        };

        let settings = self.transform_config(&config);
        log::debug!("Transform settings: {:?}", settings);
        let transformer = Transformer::with_config(table, settings);

        let documents = self.transform_sources(&transformer, &config)?;

        let replacements: usize = documents.iter().map(|(_, out)| out.replacements.len()).sum();
        log::info!(
            "Transformed {} document(s) with {} replacement(s)",
            documents.len(),
            replacements
        );

        let mut formatter = self.formatter(&config)?;
        for (source, output) in &documents {
            formatter.format_document(source, output)?;
        }
        formatter.finish()
    }

    /// Core settings from the config file with command-line flags applied on top
    fn transform_config(&self, config: &CliConfig) -> TransformConfig {
        let mut builder = TransformConfig::builder()
            .mode(self.mode.map_or(config.transform.mode, TransformMode::from))
            .match_policy(config.transform.match_policy)
            .precedence(config.transform.precedence)
            .agree_modifiers(config.transform.agree_modifiers && !self.no_agreement);

        if self.strict_suffixes {
            builder = builder.match_policy(MatchPolicy::StrictSuffix);
        }
        if self.context_first {
            builder = builder.precedence(Precedence::ContextFirst);
        }

        builder.build()
    }

    fn transform_sources(
        &self,
        transformer: &Transformer<'_>,
        config: &CliConfig,
    ) -> Result<Vec<(String, TransformOutput)>> {
        if let Some(text) = &self.text {
            if text.is_empty() {
                return Err(CliError::EmptyInput.into());
            }
            return Ok(vec![("<text>".to_string(), transformer.transform(text))]);
        }

        if self.input.is_empty() {
            let text = FileReader::read_stdin()?;
            if text.is_empty() {
                return Err(CliError::EmptyInput.into());
            }
            return Ok(vec![("<stdin>".to_string(), transformer.transform(&text))]);
        }

        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let threads = self
            .threads
            .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get);
        log::debug!("Using {} worker thread(s)", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let documents = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<(String, TransformOutput)> {
                    let text = FileReader::read_text(path)?;
                    let output = transformer.transform(&text);
                    progress.file_completed(&path.display().to_string());
                    Ok((path.display().to_string(), output))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        progress.finish();
        Ok(documents)
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let format = self.format.unwrap_or(config.output.default_format);
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .pretty(config.output.pretty_json)
                    .include_replacements(config.output.include_replacements),
            ),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Load a dictionary file, reporting failures as [`CliError::DictionaryError`]
pub(crate) fn load_table(path: &Path) -> Result<SlangTable> {
    slanglit_core::dictionary::from_file(path)
        .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())).into())
}
