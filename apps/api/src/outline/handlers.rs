use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::outline::models::{Document, IdentityOverride};
use crate::outline::parse_cv;
use crate::render::CvView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseCvRequest {
    pub cv_text: String,
    #[serde(default)]
    pub identity: Option<IdentityOverride>,
}

#[derive(Debug, Serialize)]
pub struct ParseCvResponse {
    pub document: Document,
}

#[derive(Debug, Serialize)]
pub struct RenderCvResponse {
    pub document: Document,
    pub view: CvView,
}

/// POST /api/v1/cv/parse
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    Json(req): Json<ParseCvRequest>,
) -> Result<Json<ParseCvResponse>, AppError> {
    let document = parse_off_thread(&state, req).await?;
    Ok(Json(ParseCvResponse { document }))
}

/// POST /api/v1/cv/render
pub async fn handle_render_cv(
    State(state): State<AppState>,
    Json(req): Json<ParseCvRequest>,
) -> Result<Json<RenderCvResponse>, AppError> {
    let document = parse_off_thread(&state, req).await?;
    let view = CvView::build(&document);
    Ok(Json(RenderCvResponse { document, view }))
}

/// Validates the request size, then parses on the blocking pool.
async fn parse_off_thread(state: &AppState, req: ParseCvRequest) -> Result<Document, AppError> {
    let limit = state.config.max_cv_text_bytes;
    if req.cv_text.len() > limit {
        return Err(AppError::Validation(format!(
            "cv_text is {} bytes; the limit is {limit}",
            req.cv_text.len()
        )));
    }

    let ParseCvRequest { cv_text, identity } = req;
    let document = tokio::task::spawn_blocking(move || parse_cv(&cv_text, identity.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in CV parse: {e}")))?;

    info!(
        "Parsed CV: {} sections detected, {} in body, identity '{}'",
        document.sections_detected,
        document.body.len(),
        document.identity.name
    );
    Ok(document)
}
