//! The `/hero/` endpoint.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use herodex_db::{HeroStore, StoreResult};
use herodex_types::{parse_filter, Hero, HeroQuery, Stat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{ApiError, AppState};

/// What a request to `/hero/` asks for, resolved once from its method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroCommand {
    /// `POST`: fetch from upstream and upsert.
    Create,
    /// `GET`: filter and list stored heroes.
    List,
    Unsupported,
}

impl From<&Method> for HeroCommand {
    fn from(method: &Method) -> Self {
        match *method {
            Method::POST => HeroCommand::Create,
            Method::GET => HeroCommand::List,
            _ => HeroCommand::Unsupported,
        }
    }
}

/// Body of a successful `GET /hero/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HeroList {
    pub heroes: Vec<Hero>,
}

#[derive(Deserialize)]
struct CreateHeroRequest {
    #[serde(default)]
    name: Option<String>,
}

pub(crate) async fn hero(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, ApiError> {
    match HeroCommand::from(&method) {
        HeroCommand::Create => create(&state, &body).await,
        HeroCommand::List => list(&state, query.as_deref().unwrap_or_default()).await,
        HeroCommand::Unsupported => Err(ApiError::MethodNotAllowed),
    }
}

async fn create(state: &AppState, body: &[u8]) -> Result<Response, ApiError> {
    let name = requested_name(body);
    let name = name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::Validation(
            "Parameter \"name\" is required".to_string(),
        ));
    }

    let stats = state
        .source
        .fetch(name)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Hero \"{name}\" not found")))?;

    let (hero, created) = with_store(state, move |store| store.upsert(&stats)).await?;
    info!(id = hero.id, name = %hero.name, created, "Stored hero");

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(hero)).into_response())
}

async fn list(state: &AppState, raw_query: &str) -> Result<Response, ApiError> {
    let query = hero_query(&query_params(raw_query))?;
    debug!(?query, "Listing heroes");

    let heroes = with_store(state, move |store| store.find(&query)).await?;
    if heroes.is_empty() {
        return Err(ApiError::NotFound(
            "No heroes match the given criteria".to_string(),
        ));
    }
    Ok(Json(HeroList { heroes }).into_response())
}

/// Reads `name` from a JSON body, falling back to a form-encoded body.
fn requested_name(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<CreateHeroRequest>(body) {
        Ok(request) => request.name,
        Err(_) => url::form_urlencoded::parse(body)
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value.into_owned())
            .last(),
    }
}

fn query_params(raw_query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw_query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Builds the store query from request parameters. Empty values are
/// ignored; stats are validated in [`Stat::ALL`] order and the first bad
/// one is reported.
fn hero_query(params: &HashMap<String, String>) -> Result<HeroQuery, ApiError> {
    let mut query = HeroQuery::new();
    if let Some(name) = params.get("name").filter(|n| !n.is_empty()) {
        query = query.with_name(name.as_str());
    }
    for stat in Stat::ALL {
        if let Some(raw) = params.get(stat.as_str()).filter(|v| !v.is_empty()) {
            query = query.with_stat(stat, parse_filter(raw)?);
        }
    }
    Ok(query)
}

/// Runs a store operation on the blocking thread pool.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&HeroStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || op(store.as_ref())).await?;
    Ok(result?)
}
