use crate::domain::errors::MatchError;
use crate::interface_adapters::protocol::{
    ErrorResponse, MatchSummary, NewMatchRequest, NewMatchResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{CreateMatchUseCase, ListMatchesUseCase};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, info, warn};

// Handler for allocating a new match.
pub async fn create_match(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let request = parse_new_match_request(&body).map_err(map_match_error)?;
    let config = request.into_config(state.default_grid_size);

    let use_case = CreateMatchUseCase {
        engine: state.engine.as_ref(),
        repository: state.repository.as_ref(),
        ids: state.ids.as_ref(),
    };

    let created = use_case.execute(config).await.map_err(map_match_error)?;
    info!(match_id = %created.id, grid_size = created.grid_size, "match created");

    let location = format!("/matches/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NewMatchResponse { id: created.id }),
    ))
}

// Handler for enumerating every stored match.
pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListMatchesUseCase {
        repository: state.repository.as_ref(),
    };

    let matches = use_case.execute().await.map_err(map_match_error)?;

    Ok(Json(matches.iter().map(MatchSummary::from).collect()))
}

// An empty (or whitespace-only) body means the client accepts every default.
fn parse_new_match_request(body: &[u8]) -> Result<NewMatchRequest, MatchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewMatchRequest::default());
    }

    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "rejected match request body");
        MatchError::InvalidRequest("malformed match request".to_string())
    })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_match_error(err: MatchError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        MatchError::InvalidRequest(reason) => error_response(StatusCode::BAD_REQUEST, &reason),
        MatchError::EngineFailure => {
            warn!("engine failed to allocate match");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to allocate match")
        }
        MatchError::StorageFailure => {
            warn!("match repository unavailable");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
        }
    }
}
