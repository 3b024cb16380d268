use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "qanda")]
#[clap(about = "Q&A assistant powered by hosted chat completions", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
