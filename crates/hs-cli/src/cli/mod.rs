use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, VariantArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hacksphere` binary.
#[derive(Debug, Parser)]
#[command(
    name = "hacksphere",
    version,
    about = "HackSphere - hackathon participant portal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Portal variant (overrides `portal.variant` from config)
    #[arg(long, global = true, value_enum)]
    pub variant: Option<VariantArg>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            variant: self.variant.map(Into::into),
        }
    }
}
