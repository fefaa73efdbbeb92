// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::generation::{
    ComplexityBreakdown, CodeLanguage, FunctionExplanation, NamingScheme, NaturalLanguage,
    PdfMetadata,
};

/// Upstream model family the client asks for. Only OpenAI-compatible
/// deployments are served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageModel {
    #[default]
    #[serde(rename = "openai")]
    OpenAI,
}

/// Fields shared by every generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationBase {
    #[serde(default)]
    pub language_model: LanguageModel,
    pub code_extension: CodeLanguage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    pub code_block_to_generate_from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    pub code_block_to_generate_from: String,
    /// 10, 20, 30, 40 or 50.
    #[serde(default = "default_explanation_complexity")]
    pub explanation_complexity: u8,
    #[serde(default)]
    pub response_language: NaturalLanguage,
}

fn default_explanation_complexity() -> u8 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyseRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    pub code_block_to_generate_from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviseRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    pub code_block_to_generate_from: String,
    #[serde(default)]
    pub variable_naming_scheme: NamingScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefineRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    pub code_block_to_generate_from: String,
    #[serde(default)]
    pub alternative_framework: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePdfRequest {
    #[serde(flatten)]
    pub base: GenerationBase,
    /// Whole source file. The editor extension sends it as
    /// `code_file_to_generate_from`.
    #[serde(alias = "code_file_to_generate_from")]
    pub file_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateResponse {
    pub annotated_output: String,
    pub successful_annotation: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explained_output: String,
    pub explanation_complexity: u8,
}

#[derive(Debug, Serialize)]
pub struct AnalyseResponse {
    pub analysed_output: String,
    pub complexity_breakdown: ComplexityBreakdown,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviseResponse {
    pub revised_output: String,
    pub successful_revision: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefineResponse {
    pub defined_output: String,
    pub successful_definition: bool,
}

#[derive(Debug, Serialize)]
pub struct GeneratePdfResponse {
    pub id: String,
    pub title: String,
    pub footnotes: Vec<String>,
    pub description: Option<String>,
    pub function_explanations: Vec<FunctionExplanation>,
}

impl From<PdfMetadata> for GeneratePdfResponse {
    fn from(meta: PdfMetadata) -> Self {
        Self {
            id: meta.id,
            title: meta.title,
            footnotes: meta.footnotes,
            description: meta.description,
            function_explanations: meta.function_explanations,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
    pub organization: String,
    /// Editor extension release this server pairs with.
    pub extension_version: String,
    /// API versions the extension may request.
    pub accepted_versions: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_defaults() {
        let req: ExplainRequest = serde_json::from_str(
            r#"{"code_extension":"python","code_block_to_generate_from":"x = 1"}"#,
        )
        .unwrap();
        assert_eq!(req.base.language_model, LanguageModel::OpenAI);
        assert_eq!(req.base.code_extension, CodeLanguage::Python);
        assert_eq!(req.explanation_complexity, 30);
        assert_eq!(req.response_language, NaturalLanguage::English);
    }

    #[test]
    fn test_unknown_language_model_rejected() {
        let result = serde_json::from_str::<AnnotateRequest>(
            r#"{"language_model":"claude","code_extension":"java","code_block_to_generate_from":"x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_define_framework_optional() {
        let req: DefineRequest = serde_json::from_str(
            r#"{"language_model":"openai","code_extension":"typescript","code_block_to_generate_from":"f()"}"#,
        )
        .unwrap();
        assert!(req.alternative_framework.is_none());
    }

    #[test]
    fn test_revise_default_scheme() {
        let req: ReviseRequest = serde_json::from_str(
            r#"{"code_extension":"cpp","code_block_to_generate_from":"int x;"}"#,
        )
        .unwrap();
        assert_eq!(req.variable_naming_scheme, NamingScheme::Lower);
    }

    #[test]
    fn test_pdf_request_accepts_extension_field() {
        let req: GeneratePdfRequest = serde_json::from_str(
            r#"{"code_file_to_generate_from":"x = 1","language_model":"openai","code_extension":"python"}"#,
        )
        .unwrap();
        assert_eq!(req.file_content, "x = 1");
    }

    #[test]
    fn test_pdf_response_field_names() {
        let meta = crate::generation::pdf::parse_pdf_metadata_with_id("title: T", "id1".into());
        let json = serde_json::to_value(GeneratePdfResponse::from(meta)).unwrap();
        assert_eq!(json["id"], "id1");
        assert_eq!(json["title"], "T");
        assert!(json["description"].is_null());
        assert_eq!(json["footnotes"], serde_json::json!([]));
        assert_eq!(json["function_explanations"], serde_json::json!([]));
    }
}
