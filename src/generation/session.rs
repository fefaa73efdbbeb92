// src/generation/session.rs — One request's trip through the model and back

use std::sync::Arc;

use super::complexity::{parse_complexity, ComplexityBreakdown};
use super::fences::strip_code_fences;
use super::language::{CodeLanguage, NaturalLanguage};
use super::pdf::{parse_pdf_metadata, PdfMetadata};
use super::prompts::{ExplanationLevel, NamingScheme, PromptCommand};
use super::verify::{verify_code_correctness, verify_revision_correctness};
use crate::infra::errors::ScribeError;
use crate::infra::timing::StageTimer;
use crate::provider::{ChatRequest, ModelProvider};
use crate::util::log_preview;

/// Sends a code block to the model under one command and post-processes
/// the reply.
///
/// A session is cheap: it holds a shared provider handle plus the model
/// and language for the request.
pub struct ChatSession {
    provider: Arc<dyn ModelProvider>,
    model: String,
    language: CodeLanguage,
}

impl ChatSession {
    pub fn new(provider: Arc<dyn ModelProvider>, model: impl Into<String>, language: CodeLanguage) -> Self {
        Self {
            provider,
            model: model.into(),
            language,
        }
    }

    pub fn language(&self) -> CodeLanguage {
        self.language
    }

    /// Line comments. Returns whether the code survived intact and the
    /// model's text as received.
    pub async fn annotate(&self, code: &str) -> Result<(bool, String), ScribeError> {
        let output = self.complete(&PromptCommand::Annotate, code).await?;
        let matched = self.check(code, &output);
        Ok((matched, output))
    }

    pub async fn explain(
        &self,
        code: &str,
        level: ExplanationLevel,
        response_language: NaturalLanguage,
    ) -> Result<String, ScribeError> {
        let command = PromptCommand::Explain {
            level,
            response_language,
        };
        self.complete(&command, code).await
    }

    /// Function and class definitions, optionally in a documentation
    /// framework's style. The reply is unfenced before checking.
    pub async fn define(
        &self,
        code: &str,
        framework: Option<String>,
    ) -> Result<(bool, String), ScribeError> {
        let output = self
            .complete(&PromptCommand::Define { framework }, code)
            .await?;
        let stripped = strip_code_fences(&output);
        let matched = self.check(code, &stripped);
        Ok((matched, stripped))
    }

    pub async fn revise(
        &self,
        code: &str,
        scheme: NamingScheme,
    ) -> Result<(bool, String), ScribeError> {
        let output = self
            .complete(&PromptCommand::Revise { scheme }, code)
            .await?;
        let stripped = strip_code_fences(&output);
        let accepted = verify_revision_correctness(code, &stripped);
        Ok((accepted, stripped))
    }

    /// Big-O analysis. The raw text is returned alongside the parsed
    /// breakdown, which is empty when the reply was not in the line format.
    pub async fn analyse(&self, code: &str) -> Result<(String, ComplexityBreakdown), ScribeError> {
        let output = self.complete(&PromptCommand::Analyse, code).await?;
        let breakdown = parse_complexity(&output);
        if breakdown.is_empty() && !output.trim().is_empty() {
            tracing::warn!(
                preview = %log_preview(&output, 120),
                "complexity analysis did not parse"
            );
        }
        Ok((output, breakdown))
    }

    pub async fn generate_pdf_metadata(&self, file_content: &str) -> Result<PdfMetadata, ScribeError> {
        let command = PromptCommand::GeneratePdf {
            language: self.language,
        };
        let output = self.complete(&command, file_content).await?;
        let metadata = parse_pdf_metadata(&output);
        tracing::debug!(
            id = %metadata.id,
            functions = metadata.function_explanations.len(),
            "parsed report metadata"
        );
        Ok(metadata)
    }

    fn check(&self, original: &str, candidate: &str) -> bool {
        let _timer = StageTimer::start("verify");
        let matched = verify_code_correctness(original, candidate, self.language.comment_rule());
        if !matched {
            tracing::info!(language = %self.language, "model output altered the code");
        }
        matched
    }

    async fn complete(&self, command: &PromptCommand, code: &str) -> Result<String, ScribeError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: command.messages(code),
        };

        let _timer = StageTimer::start("chat_completion");
        let response = self.provider.chat(request).await?;
        tracing::debug!(
            command = command.name(),
            provider = self.provider.id(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            total_tokens = response.usage.total(),
            stop_reason = ?response.stop_reason,
            "chat completion finished"
        );
        Ok(response.content)
    }
}
