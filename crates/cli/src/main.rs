//! mdpub: export a markdown book to EPUB via an external converter.
//!
//! Reads the site's navigation listing, stages each listed document through
//! the transform pipeline into a scratch workspace, and runs pandoc once
//! over the ordered set.

mod assemble;
mod convert;
mod error;
mod sidebar;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

use crate::convert::{BookMeta, ConverterRunner, SystemRunner, pandoc_command};
use crate::error::ExportError;

#[derive(Parser)]
#[command(name = "mdpub")]
#[command(version)]
#[command(about = "Export a markdown book to EPUB via pandoc", long_about = None)]
struct Cli {
    /// Navigation listing (JSON, or YAML by extension)
    #[arg(long, default_value = "docs/.vitepress/sidebar.json", value_name = "FILE")]
    sidebar: PathBuf,

    /// Root directory of the markdown sources
    #[arg(long, default_value = "docs", value_name = "DIR")]
    docs: PathBuf,

    /// Locale subdirectory the listing's links resolve under
    #[arg(long, default_value = "en")]
    locale: String,

    /// Output EPUB path, relative to the invocation directory
    #[arg(short, long, default_value = "book.epub", value_name = "FILE")]
    output: PathBuf,

    /// Scratch staging directory, recreated from empty each run
    #[arg(long, default_value = ".temp", value_name = "DIR")]
    workspace: PathBuf,

    /// Book title metadata
    #[arg(long, default_value = "Documentation")]
    title: String,

    /// Book author metadata
    #[arg(long)]
    author: Option<String>,

    /// Converter binary to invoke
    #[arg(long, default_value = "pandoc", value_name = "BIN")]
    pandoc: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli, &SystemRunner) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, runner: &dyn ConverterRunner) -> Result<(), ExportError> {
    let categories = sidebar::load_sidebar(&cli.sidebar)?;
    for category in &categories {
        let labels: Vec<&str> = category.items.iter().map(|e| e.text.as_str()).collect();
        debug!("sidebar category {:?}: [{}]", category.text, labels.join(", "));
    }
    let files = sidebar::flatten(&categories, &cli.locale);
    if files.is_empty() {
        return Err(ExportError::EmptySidebar {
            path: cli.sidebar.clone(),
        });
    }
    info!("files to include: {files:?}");

    assemble::stage(&cli.docs, &cli.workspace, &files)?;

    let meta = BookMeta {
        title: cli.title.clone(),
        author: cli.author.clone(),
    };
    let cmd = pandoc_command(
        &cli.pandoc,
        &files,
        &cli.workspace,
        &cli.docs,
        &cli.locale,
        &cli.output,
        &meta,
    );
    info!("running {} {}", cmd.program, cmd.args.join(" "));
    let out = runner.run(&cmd)?;
    if !out.stdout.trim().is_empty() {
        info!("{}", out.stdout.trim());
    }
    if !out.stderr.trim().is_empty() {
        warn!("{}", out.stderr.trim());
    }
    info!("EPUB generated: {}", cli.output.display());
    Ok(())
}
