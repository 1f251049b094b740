use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountResponse, NewAccount, UpdateAccount},
        Account, Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    list_accounts_handler,
    get_account_handler,
    create_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_accounts_handler))
        .route("/", post(create_account_handler))
        .route("/:id", get(get_account_handler))
        .route("/:id", put(update_account_handler))
        .route("/:id", delete(delete_account_handler))
}

/// The id path segment is parsed by hand so that a malformed id and an
/// absent id are indistinguishable to the client: both are a 404.
fn parse_id(raw: &str) -> Result<i32, Error> {
    raw.parse()
        .map_err(|_| Error::new(StatusCode::NOT_FOUND, "Account not found"))
}

fn validate_names(first_name: &str, last_name: &str) -> Result<(), Error> {
    if first_name.is_empty() || last_name.is_empty() {
        return Err(Error::new(
            StatusCode::BAD_REQUEST,
            "First name and last name must not be empty",
        ));
    }
    Ok(())
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts", body = [AccountResponse]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    let accounts = state.db.list_accounts().await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, Error> {
    let id = parse_id(&id)?;
    let account = state.db.get_account_by_id(id).await?;
    let account = account.ok_or((StatusCode::NOT_FOUND, "Account not found"))?;

    Ok(Json(AccountResponse::from(account)))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    tag = ACCOUNT_API_GROUP,
    request_body = NewAccount,
    responses(
        (status = 201, description = "Account successfully created", body = AccountResponse),
        (status = 400, description = "Empty name fields"),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewAccount>,
) -> Result<impl IntoResponse, Error> {
    validate_names(&body.first_name, &body.last_name)?;

    let new_account = Account {
        first_name: body.first_name,
        last_name: body.last_name,
        balance: body.balance,
        ..Default::default()
    };

    let account = state.db.create_account(&new_account).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Update account handler function. The row is overwritten wholesale:
/// fields omitted from the body land as zero values, not as "unchanged".
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = UpdateAccount,
    responses(
        (status = 200, description = "Account successfully updated", body = AccountResponse),
        (status = 400, description = "Empty name fields"),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateAccount>,
) -> Result<Json<AccountResponse>, Error> {
    let id = parse_id(&id)?;

    // The target must pre-exist; the id always comes from the path
    if state.db.get_account_by_id(id).await?.is_none() {
        return Err(Error::new(StatusCode::NOT_FOUND, "Account not found"));
    }

    validate_names(&body.first_name, &body.last_name)?;

    let account = Account {
        id,
        first_name: body.first_name,
        last_name: body.last_name,
        balance: body.balance,
        ..Default::default()
    };

    let updated_account = state.db.update_account(&account).await?;

    Ok(Json(AccountResponse::from(updated_account)))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account deleted, confirmation keyed by id"),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, Error> {
    let id = parse_id(&id)?;

    if state.db.get_account_by_id(id).await?.is_none() {
        return Err(Error::new(StatusCode::NOT_FOUND, "Account not found"));
    }

    state.db.delete_account(id).await?;

    // Confirmation shape is keyed by the id for compatibility with
    // existing clients, e.g. {"id #4": "deleted"}
    let mut confirmation = serde_json::Map::new();
    confirmation.insert(format!("id #{}", id), json!("deleted"));

    Ok(Json(serde_json::Value::Object(confirmation)))
}
