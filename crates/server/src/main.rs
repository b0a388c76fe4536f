// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use summit_api::{
    AddToDraftResponse, ApiError, AuthenticationService, DecideExpeditionRequest,
    DecideExpeditionResponse, FormExpeditionResponse, GetExpeditionResponse,
    ListExpeditionsRequest, ListExpeditionsResponse, LoginRequest, LoginResponse, PasswordPolicy,
    UpdateExpeditionRequest, UpdateExpeditionResponse, abandon_draft, add_to_draft,
    decide_expedition, get_expedition, list_expeditions, request_formation, update_expedition,
};
use summit_domain::Role;
use summit_persistence::Persistence;

use crate::session::SessionActor;

mod session;

/// Summit Server - HTTP server for the Summit expedition registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Login for a bootstrap account to create at startup if it does not
    /// already exist. Requires `--bootstrap-password`.
    #[arg(long)]
    bootstrap_login: Option<String>,

    /// Password for the bootstrap account.
    #[arg(long)]
    bootstrap_password: Option<String>,

    /// Role for the bootstrap account ("user" or "moderator").
    #[arg(long, default_value = "moderator")]
    bootstrap_role: String,

    /// Seed a small demonstration alpinist catalog into an empty database.
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the catalog, workflow rows, and sessions.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for listing expeditions.
#[derive(Debug, Deserialize)]
struct ListExpeditionsQuery {
    /// Restrict to a single status.
    status: Option<String>,
    /// Inclusive lower bound on formed time (ISO 8601).
    formed_from: Option<String>,
    /// Inclusive upper bound on formed time (ISO 8601).
    formed_to: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::FORBIDDEN
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, HttpError> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing or invalid Authorization header"),
        })
}

/// Handler for POST `/api/v1/auth/login`.
///
/// Verifies credentials and opens a new session.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login = %req.login, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let (session_token, actor, account) =
        AuthenticationService::login(&mut persistence, &req.login, &req.password)
            .map_err(ApiError::from)?;
    drop(persistence);

    info!(account_id = actor.user_id, "Login succeeded");

    Ok(Json(LoginResponse {
        session_token,
        account_id: actor.user_id,
        display_name: account.display_name,
        role: account.role,
        message: String::from("Login successful"),
    }))
}

/// Handler for POST `/api/v1/auth/logout`.
///
/// Deletes the caller's session.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, token).map_err(ApiError::from)?;
    drop(persistence);

    info!("Session closed");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/api/v1/alpinist/expedition/{alpinist_id}`.
///
/// Adds an alpinist to the caller's open draft, creating the draft on
/// demand.
async fn handle_add_to_draft(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Path(alpinist_id): Path<i64>,
) -> Result<Json<AddToDraftResponse>, HttpError> {
    info!(
        account_id = actor.user_id,
        alpinist_id, "Handling add-to-draft request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AddToDraftResponse = add_to_draft(&mut persistence, &actor, alpinist_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/v1/expedition`.
///
/// Edits the client-writable fields of an expedition.
async fn handle_update_expedition(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Json(req): Json<UpdateExpeditionRequest>,
) -> Result<Json<UpdateExpeditionResponse>, HttpError> {
    info!(
        account_id = actor.user_id,
        expedition_id = req.expedition_id,
        "Handling update-expedition request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateExpeditionResponse = update_expedition(&mut persistence, &actor, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/v1/expedition/status/form/{id}`.
///
/// Submits the caller's draft for moderation.
async fn handle_request_formation(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Path(expedition_id): Path<i64>,
) -> Result<Json<FormExpeditionResponse>, HttpError> {
    info!(
        account_id = actor.user_id,
        expedition_id, "Handling request-formation request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: FormExpeditionResponse =
        request_formation(&mut persistence, &actor, expedition_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/v1/expedition/{id}/status`.
///
/// Records a moderator decision on a formed expedition.
async fn handle_decide_expedition(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Path(expedition_id): Path<i64>,
    Json(req): Json<DecideExpeditionRequest>,
) -> Result<Json<DecideExpeditionResponse>, HttpError> {
    info!(
        account_id = actor.user_id,
        expedition_id,
        decision = %req.status,
        "Handling decide-expedition request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DecideExpeditionResponse =
        decide_expedition(&mut persistence, &actor, expedition_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/v1/expedition/{id}`.
///
/// Abandons the caller's draft.
async fn handle_abandon_draft(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Path(expedition_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(
        account_id = actor.user_id,
        expedition_id, "Handling abandon-draft request"
    );

    let mut persistence = app_state.persistence.lock().await;
    abandon_draft(&mut persistence, &actor, expedition_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/v1/expedition/filter`.
///
/// Lists expeditions visible to the caller.
async fn handle_list_expeditions(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Query(query): Query<ListExpeditionsQuery>,
) -> Result<Json<ListExpeditionsResponse>, HttpError> {
    info!(account_id = actor.user_id, "Handling list-expeditions request");

    let request: ListExpeditionsRequest = ListExpeditionsRequest {
        status: query.status,
        formed_from: query.formed_from,
        formed_to: query.formed_to,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: ListExpeditionsResponse = list_expeditions(&mut persistence, &actor, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/v1/expedition/{id}`.
///
/// Fetches a single expedition with its member list.
async fn handle_get_expedition(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor, _): SessionActor,
    Path(expedition_id): Path<i64>,
) -> Result<Json<GetExpeditionResponse>, HttpError> {
    info!(
        account_id = actor.user_id,
        expedition_id, "Handling get-expedition request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: GetExpeditionResponse = get_expedition(&mut persistence, &actor, expedition_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(handle_login))
        .route("/api/v1/auth/logout", post(handle_logout))
        .route(
            "/api/v1/alpinist/expedition/{alpinist_id}",
            post(handle_add_to_draft),
        )
        .route("/api/v1/expedition", put(handle_update_expedition))
        .route(
            "/api/v1/expedition/status/form/{id}",
            put(handle_request_formation),
        )
        .route("/api/v1/expedition/{id}/status", put(handle_decide_expedition))
        .route("/api/v1/expedition/filter", get(handle_list_expeditions))
        .route(
            "/api/v1/expedition/{id}",
            get(handle_get_expedition).delete(handle_abandon_draft),
        )
        .with_state(app_state)
}

/// Creates the bootstrap account at startup when one was requested and no
/// account with that login exists yet.
fn bootstrap_account(persistence: &mut Persistence, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(login), Some(password)) = (&args.bootstrap_login, &args.bootstrap_password) else {
        if args.bootstrap_login.is_some() || args.bootstrap_password.is_some() {
            return Err("--bootstrap-login and --bootstrap-password must be given together".into());
        }
        return Ok(());
    };

    let role: Role = Role::parse_str(&args.bootstrap_role)?;

    if persistence.get_account_by_login(login)?.is_some() {
        info!(login = %login, "Bootstrap account already exists");
        return Ok(());
    }

    PasswordPolicy::default().validate(password, login, login)?;

    let account_id: i64 =
        persistence.create_account(login, login, password, role.as_str())?;
    info!(login = %login, account_id, role = %role, "Created bootstrap account");

    Ok(())
}

/// Seeds a small demonstration alpinist catalog into an empty database.
fn seed_demo_catalog(persistence: &mut Persistence) -> Result<(), Box<dyn std::error::Error>> {
    if persistence.get_alpinist(1)?.is_some() {
        info!("Catalog already populated, skipping demo seed");
        return Ok(());
    }

    let demo: [(&str, &str, &str, &str); 4] = [
        (
            "Walter Bonatti",
            "1930-2011",
            "Italy",
            "Grand Capucin east face, 1951; Gasherbrum IV west ridge, 1958",
        ),
        (
            "Hermann Buhl",
            "1924-1957",
            "Austria",
            "First ascent of Nanga Parbat, solo, 1953",
        ),
        (
            "Wanda Rutkiewicz",
            "1943-1992",
            "Poland",
            "First woman to summit K2, 1986",
        ),
        (
            "Riccardo Cassin",
            "1909-2009",
            "Italy",
            "Walker Spur, 1938; Denali south face, 1961",
        ),
    ];

    for (name, lifetime, country, description) in demo {
        let alpinist_id: i64 =
            persistence.create_alpinist(name, lifetime, country, description, None)?;
        info!(alpinist_id, name, "Seeded demo alpinist");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Summit Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    bootstrap_account(&mut persistence, &args)?;
    if args.seed_demo {
        seed_demo_catalog(&mut persistence)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
