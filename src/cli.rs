// ABOUTME: Command-line arguments for the studio binary.
// ABOUTME: Flags override config values; --print and --list-styles run without the TUI.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "studio", version, about = "Generate content in various writing styles")]
pub struct Args {
    /// Style id to preselect (see --list-styles).
    #[arg(short, long)]
    pub style: Option<String>,

    /// Prompt text to start with.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Generate once, print the content to stdout, and exit.
    #[arg(long)]
    pub print: bool,

    /// With --print, emit the history entry as JSON.
    #[arg(long, requires = "print")]
    pub json: bool,

    /// With --print, also export the content as Markdown.
    #[arg(long, requires = "print")]
    pub export: bool,

    /// Directory exported Markdown files are written to.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Simulated generation latency in milliseconds.
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Config file to use instead of ~/.content-studio/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the available styles and exit.
    #[arg(long)]
    pub list_styles: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref style) = self.style {
            config.generation.default_style = style.clone();
        }
        if let Some(ref dir) = self.export_dir {
            config.export.directory = dir.clone();
        }
        if let Some(ms) = self.latency_ms {
            config.generation.simulated_latency_ms = ms;
        }
    }
}
