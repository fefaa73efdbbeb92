// src/generation/mod.rs — Prompting, verification and parsing of model output

pub mod complexity;
pub mod fences;
pub mod language;
pub mod pdf;
pub mod prompts;
pub mod session;
pub mod verify;

pub use complexity::{parse_complexity, ComplexityBreakdown, FuncComplexity};
pub use fences::strip_code_fences;
pub use language::{CodeLanguage, CommentRule, NaturalLanguage};
pub use pdf::{parse_pdf_metadata, FunctionExplanation, PdfMetadata};
pub use prompts::{build_messages, ExplanationLevel, NamingScheme, PromptCommand};
pub use session::ChatSession;
pub use verify::{verify_code_correctness, verify_revision_correctness};
