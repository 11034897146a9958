use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use common::export::Format;

#[derive(Debug, Parser)]
#[command(name = "vars-runner")]
#[command(author, version, about = "Check and export Vagrant CI variable files", long_about = None)]
pub struct Cli {
    /// Verbose logging
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Configuration file [default: vars.toml]
    #[arg(long, short)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load variable files and report whether they are valid
    Check(FilesArgs),
    /// Print the resolved variables
    Render(RenderArgs),
    /// Print or write the provisioner settings
    Export(ExportArgs),
    /// List recognized options and the Vagrantfile defaults
    Options,
}

#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Variable files, applied in order after the configured base files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub files: FilesArgs,

    /// Fill unset options with the Vagrantfile defaults
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub defaults: bool,

    /// yaml, json or toml instead of `$name = value` lines
    #[arg(long)]
    pub format: Option<Format>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub files: FilesArgs,

    /// Output format, overrides the config file
    #[arg(long)]
    pub format: Option<Format>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
