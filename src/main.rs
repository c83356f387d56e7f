mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use figkit::{FigureFactory, FigureRecord, FigureSerializer, TextSerializer};
use tracing::{error, info};

use cli::{CliArgs, Command};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for figkit.
    // Override with RUST_LOG (e.g. RUST_LOG=figkit=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figkit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let factory = FigureFactory::default();
    let serializer = TextSerializer::new(factory);

    match run(args.command, &factory, &serializer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    factory: &FigureFactory,
    serializer: &dyn FigureSerializer,
) -> anyhow::Result<()> {
    match command {
        Command::Create {
            file,
            points,
            fill,
            border,
            point_color,
        } => {
            let mut records = load_or_empty(serializer, &file)?;
            let figure = factory.create(&points).context("cannot create figure")?;
            info!(kind = %figure.kind(), index = records.len(), "created figure");
            records.push(FigureRecord::new(figure, fill, border, point_color));
            serializer.serialize(&records, &file)?;
        }
        Command::List { file } => {
            let records = serializer.deserialize(&file)?;
            for (index, record) in records.iter().enumerate() {
                println!("{}", summary_line(index, record));
            }
        }
        Command::Show { file, index } => {
            let records = serializer.deserialize(&file)?;
            let Some(record) = records.get(index) else {
                bail!("no record {index} in {}", file.display());
            };
            println!("{}", summary_line(index, record));
            for line in point_lines(record) {
                println!("{line}");
            }
        }
        Command::Remove { file, index } => {
            let mut records = serializer.deserialize(&file)?;
            if index >= records.len() {
                bail!("no record {index} in {}", file.display());
            }
            let removed = records.remove(index);
            info!(kind = %removed.figure.kind(), index, "removed figure");
            serializer.serialize(&records, &file)?;
        }
        Command::Check { file } => {
            let records = serializer.deserialize(&file)?;
            println!("{}: {} records ok", file.display(), records.len());
        }
    }
    Ok(())
}

fn load_or_empty(
    serializer: &dyn FigureSerializer,
    path: &Path,
) -> anyhow::Result<Vec<FigureRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    serializer
        .deserialize(path)
        .with_context(|| format!("cannot load {}", path.display()))
}

fn summary_line(index: usize, record: &FigureRecord) -> String {
    format!(
        "{index}\t{}\t{} points\tarea {}\tfill {}\tborder {}\tpoints {}",
        record.figure.kind(),
        record.figure.point_count(),
        record.figure.area(),
        record.fill_color,
        record.border_color,
        record.point_color,
    )
}

/// One `index: x y` line per boundary point, in traversal order.
fn point_lines(record: &FigureRecord) -> Vec<String> {
    record
        .figure
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  {i}: {} {}", p.x, p.y))
        .collect()
}
