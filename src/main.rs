use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use cricut_finder::cli;
use cricut_finder::logging::{self, Verbosity};
use cricut_finder::output::OutputFormatter;
use cricut_finder::{DiscoveryEngine, Error, SystemOpener};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;

    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let engine = match args.home.clone() {
        Some(home) => DiscoveryEngine::new(home),
        None => DiscoveryEngine::from_environment().context("Could not locate home directory")?,
    };

    let files = match cricut_finder::discover_sorted(&engine) {
        Ok(files) => files,
        Err(Error::Discovery(err)) if err.is_missing_data() => {
            return Err(err).context("Cricut Design Space application data not found");
        }
        Err(err) => return Err(err).context("Failed to scan Cricut files"),
    };
    tracing::info!(count = files.len(), "Found Cricut images");

    let open_index = args.open_index(files.len())?;

    let rendered = OutputFormatter::format(&files, args.format)?;
    if let Some(ref path) = args.output_file {
        std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
    } else if !args.quiet {
        print!("{rendered}");
    }

    if let Some(index) = open_index {
        let file = &files[index];
        let opener = SystemOpener::detect();
        cricut_finder::open_containing_folder(&opener, file).with_context(|| {
            format!(
                "Could not open {}",
                file.containing_directory().display()
            )
        })?;
        if !args.quiet {
            eprintln!("Opened {}", file.containing_directory().display());
        }
    }

    Ok(())
}
