/// One question paired with the fixed system instruction.
///
/// Built fresh for every submission and dropped once the answer is
/// rendered; no history is carried between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub system_instruction: String,
    pub user_question: String,
}
