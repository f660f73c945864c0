// Profile assistant: cache lookup first, LLM generation on a miss.
// All LLM calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod prompts;
