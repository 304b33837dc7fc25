use clap::Parser;

/// Alfred script filter for Jisho.org word search
#[derive(Debug, Parser)]
#[command(name = "jisho-alfred", version, about)]
pub struct Cli {
    /// Search text typed into Alfred
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Prepend a row announcing a newer workflow version
    #[arg(long, env = "JISHO_UPDATE_AVAILABLE")]
    pub update_available: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}
