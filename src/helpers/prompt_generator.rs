use crate::constants::prompts::SYSTEM_PROMPT;
use crate::structs::prompt_request::PromptRequest;

/// Pairs the fixed system instruction with the user's question. Pure
/// transformation; the caller guards against empty input before this runs.
pub fn generate_prompt(question: &str) -> PromptRequest {
    PromptRequest {
        system_instruction: SYSTEM_PROMPT.to_string(),
        user_question: question.to_string(),
    }
}
