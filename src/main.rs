use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use textconv::cli::{Args, Commands, InputSource};
use textconv::convert::{convert, limits, ConvertRequest};
use textconv::format::{supported_targets, TextFormat};

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match &args.command {
        Some(Commands::Targets { from }) => {
            for target in supported_targets(*from) {
                println!("{target}");
            }
            return Ok(());
        }
        Some(Commands::Formats) => {
            for format in TextFormat::ALL {
                println!("{format}");
            }
            return Ok(());
        }
        None => {}
    }

    let source = InputSource::resolve(&args)?;
    let input = source.read()?;

    let limit = limits::parse_size_limit(args.max_input_size.as_deref())
        .map_err(|message| anyhow::anyhow!(message))?;
    limits::check_input_size(&input, limit)?;

    let from = args
        .from
        .or_else(|| source.format_hint())
        .context("source format is required; pass --from or use a recognized file extension")?;
    let to = args
        .to
        .or_else(|| {
            args.output
                .as_deref()
                .and_then(TextFormat::from_extension)
        })
        .context("target format is required; pass --to or use a recognized output extension")?;

    let request = ConvertRequest::new(input, from, to);
    let output = convert(&request)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !args.quiet {
                eprintln!("converted {} ({from} → {to})", path.display());
            }
        }
        None => println!("{output}"),
    }
    Ok(())
}
