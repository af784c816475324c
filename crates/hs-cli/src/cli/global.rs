use clap::ValueEnum;
use hs_core::enums::PortalVariant;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Portal variant as spelled on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum VariantArg {
    Classic,
    Extended,
}

impl From<VariantArg> for PortalVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Self::Classic,
            VariantArg::Extended => Self::Extended,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub variant: Option<PortalVariant>,
}
