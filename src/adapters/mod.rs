// Adapters layer: concrete implementations for external systems
// (catalog files, the LLM recommendation service).

pub mod catalog;
pub mod llm;
