use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::database::models::ClienteForm;
use crate::error::AppError;
use crate::state::AppState;

/// GET /cliente - render the full client list
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let clientes = state.clientes.list_all().await?;
    state.views.cliente_list(&clientes)
}

/// POST /cliente - insert a new client, then return to the list
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ClienteForm>,
) -> Result<Redirect, AppError> {
    let cliente = state.clientes.save(None, &form).await?;
    tracing::info!("Created cliente {}", cliente.id);

    Ok(Redirect::to("/cliente"))
}

/// PUT /cliente/:id - overwrite an existing client's fields. The path id
/// always wins; a missing id is a 404 with no write performed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ClienteForm>,
) -> Result<Redirect, AppError> {
    if !state.clientes.exists_by_id(id).await? {
        return Err(AppError::not_found(format!("cliente {} does not exist", id)));
    }

    state.clientes.save(Some(id), &form).await?;

    Ok(Redirect::to("/cliente"))
}

/// DELETE /cliente/:id - unconditional delete, no existence pre-check
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.clientes.delete_by_id(id).await?;

    Ok(Redirect::to("/cliente"))
}
