use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cricut-finder")]
#[command(about = "Find Cricut Design Space canvas images, newest first", long_about = None)]
pub struct Args {
    /// Home directory to search instead of the current user's
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: OutputFormat,

    /// Open the folder of the N-th listed image (1 is the newest)
    #[arg(long, value_name = "N")]
    pub open: Option<usize>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref home) = self.home {
            validate_home(home)?;
        }
        if self.open == Some(0) {
            anyhow::bail!("--open takes a 1-based row number");
        }
        Ok(())
    }

    /// Index into the sorted result list selected by `--open`.
    pub fn open_index(&self, available: usize) -> Result<Option<usize>> {
        match self.open {
            None => Ok(None),
            Some(n) if n >= 1 && n <= available => Ok(Some(n - 1)),
            Some(n) => anyhow::bail!("--open {n} is out of range: {available} image(s) found"),
        }
    }
}

pub fn validate_home(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Home directory does not exist: {}", path.display());
    }

    let meta = std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    if !meta.is_dir() {
        anyhow::bail!("Home path is not a directory: {}", path.display());
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}
