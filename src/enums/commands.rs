use clap::Subcommand;
use crate::config::constants::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Subcommand)]
pub enum Commands {
    Ask {
        /// Question text; prompted for on stdin when omitted
        question: Option<String>,
        #[clap(short, long, default_value = DEFAULT_MODEL)]
        model: String,
        #[clap(short, long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,
        #[clap(long, default_value_t = DEFAULT_MAX_TOKENS)]
        max_tokens: u32,
        /// Overrides the OPENAI_API_KEY environment variable
        #[clap(long)]
        api_key: Option<String>,
    },
    Models,
}
