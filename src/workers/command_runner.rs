use std::io::{self, Write};
use std::time::Instant;

use crate::config::constants::{OPENAI_API_KEY_ENV, SUPPORTED_MODELS};
use crate::enums::commands::Commands;
use crate::errors::{QandaError, QandaResult};
use crate::helpers::prompt_generator::generate_prompt;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::structs::config::generation_config::GenerationConfig;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> QandaResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Ask { question, model, temperature, max_tokens, api_key } => {
                self.ask_command(question, model, temperature, max_tokens, api_key).await
            }
            Commands::Models => self.models_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn ask_command(
        &self,
        question: Option<String>,
        model: String,
        temperature: f32,
        max_tokens: u32,
        api_key: Option<String>,
    ) -> QandaResult<()> {
        let question = match question {
            Some(question) => question,
            None => Self::read_question()?,
        };

        let api_key = api_key
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
            .unwrap_or_default();

        let config = GenerationConfig::new(api_key, model, temperature, max_tokens);

        // Guard conditions run before any component; a notice ends the
        // submission with no remote call attempted.
        if let Err(notice) = Self::check_submission(&question, &config) {
            match notice {
                QandaError::MissingInput => log::info!("ℹ️ {}", notice.user_message()),
                _ => log::warn!("⚠️ {}", notice.user_message()),
            }
            return Ok(());
        }

        let prompt_request = generate_prompt(&question);
        let provider = OpenAIProvider::new();

        let mut spinner = AnimatedLogger::start("🤖 Thinking...".to_string());

        match provider.complete(&prompt_request, &config).await {
            Ok(answer) => {
                spinner.stop("✅ Answer ready").await;
                println!("\nAssistant: {}", answer);
                Ok(())
            }
            Err(error) => {
                spinner.stop("❌ Request failed").await;
                log::error!("❌ {}", error);
                Err(error)
            }
        }
    }

    fn models_command(&self) -> QandaResult<()> {
        log::info!("📋 Supported models:");

        for (i, model) in SUPPORTED_MODELS.iter().enumerate() {
            log::info!("{}. 🧠 {}", i + 1, model);
        }

        log::info!("📊 Total models: {}", SUPPORTED_MODELS.len());
        Ok(())
    }

    /// Guard checks: question first, then the credential. Neither reaches
    /// the prompt builder or the invoker.
    pub fn check_submission(question: &str, config: &GenerationConfig) -> QandaResult<()> {
        if question.trim().is_empty() {
            return Err(QandaError::MissingInput);
        }

        if config.api_key.trim().is_empty() {
            return Err(QandaError::MissingCredential);
        }

        Ok(())
    }

    fn read_question() -> QandaResult<String> {
        print!("You: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
