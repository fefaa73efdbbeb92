// src/api/handlers.rs

use std::future::Future;

use axum::extract::State;
use axum::Json;
use tracing::Instrument;

use crate::api::error::ApiError;
use crate::api::{types::*, validation, ApiState};
use crate::generation::{ChatSession, CodeLanguage};

/// Run a handler body inside a span carrying a fresh request id.
async fn in_request_span<T, F>(command: &'static str, language: CodeLanguage, body: F) -> T
where
    F: Future<Output = T>,
{
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("request", %request_id, command, %language);
    async {
        tracing::info!("generation request received");
        body.await
    }
    .instrument(span)
    .await
}

fn session(state: &ApiState, language: CodeLanguage) -> ChatSession {
    ChatSession::new(state.provider.clone(), state.model.clone(), language)
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Setting up server!".into(),
    })
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        name: state.app.name.clone(),
        version: state.app.version.clone(),
        organization: state.app.organization.clone(),
        extension_version: state.app.extension_version.clone(),
        accepted_versions: state.app.accepted_versions.clone(),
    })
}

/// POST /generation/annotate/
pub async fn annotate(
    State(state): State<ApiState>,
    Json(body): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("annotate", language, async {
        validation::require_code(&body.code_block_to_generate_from)?;
        let (successful_annotation, annotated_output) = session(&state, language)
            .annotate(&body.code_block_to_generate_from)
            .await?;
        Ok::<_, ApiError>(Json(AnnotateResponse {
            annotated_output,
            successful_annotation,
        }))
    })
    .await
}

/// POST /generation/explain/
pub async fn explain(
    State(state): State<ApiState>,
    Json(body): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("explain", language, async {
        validation::require_code(&body.code_block_to_generate_from)?;
        let level = validation::explanation_level(body.explanation_complexity)?;
        let explained_output = session(&state, language)
            .explain(
                &body.code_block_to_generate_from,
                level,
                body.response_language,
            )
            .await?;
        Ok::<_, ApiError>(Json(ExplainResponse {
            explained_output,
            explanation_complexity: body.explanation_complexity,
        }))
    })
    .await
}

/// POST /generation/analyse/
pub async fn analyse(
    State(state): State<ApiState>,
    Json(body): Json<AnalyseRequest>,
) -> Result<Json<AnalyseResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("analyse", language, async {
        validation::require_code(&body.code_block_to_generate_from)?;
        let (analysed_output, complexity_breakdown) = session(&state, language)
            .analyse(&body.code_block_to_generate_from)
            .await?;
        Ok::<_, ApiError>(Json(AnalyseResponse {
            analysed_output,
            complexity_breakdown,
        }))
    })
    .await
}

/// POST /generation/revise/
pub async fn revise(
    State(state): State<ApiState>,
    Json(body): Json<ReviseRequest>,
) -> Result<Json<ReviseResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("revise", language, async {
        validation::require_code(&body.code_block_to_generate_from)?;
        let (successful_revision, revised_output) = session(&state, language)
            .revise(
                &body.code_block_to_generate_from,
                body.variable_naming_scheme,
            )
            .await?;
        Ok::<_, ApiError>(Json(ReviseResponse {
            revised_output,
            successful_revision,
        }))
    })
    .await
}

/// POST /generation/define/
pub async fn define(
    State(state): State<ApiState>,
    Json(body): Json<DefineRequest>,
) -> Result<Json<DefineResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("define", language, async {
        validation::require_code(&body.code_block_to_generate_from)?;
        let framework = validation::framework(language, body.alternative_framework.clone())?;
        let (successful_definition, defined_output) = session(&state, language)
            .define(&body.code_block_to_generate_from, framework)
            .await?;
        Ok::<_, ApiError>(Json(DefineResponse {
            defined_output,
            successful_definition,
        }))
    })
    .await
}

/// POST /generation/create-pdf/ (also served at /generation/generate-pdf/)
pub async fn generate_pdf(
    State(state): State<ApiState>,
    Json(body): Json<GeneratePdfRequest>,
) -> Result<Json<GeneratePdfResponse>, ApiError> {
    let language = body.base.code_extension;
    in_request_span("generate_pdf", language, async {
        validation::require_code(&body.file_content)?;
        let metadata = session(&state, language)
            .generate_pdf_metadata(&body.file_content)
            .await?;
        Ok::<_, ApiError>(Json(GeneratePdfResponse::from(metadata)))
    })
    .await
}
