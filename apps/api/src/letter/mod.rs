// Cover letter generation: validate → compose → call provider → paginate → render.
// All provider calls go through llm_client::CompletionProvider.

pub mod composer;
pub mod gate;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod upload;
