pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Please respond to the user queries.";

// The user turn goes over the wire as "Question: <text>"; the raw question
// stays untouched on the PromptRequest itself.
pub const QUESTION_TEMPLATE_PREFIX: &str = "Question: ";
