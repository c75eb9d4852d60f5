use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::database::models::EstacionamentoForm;
use crate::error::AppError;
use crate::state::AppState;

/// GET /estacionamentos - render the full parking lot list
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let estacionamentos = state.estacionamentos.list_all().await?;
    state.views.estacionamento_list(&estacionamentos)
}

/// POST /estacionamentos - insert a new parking lot, then return to the list
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EstacionamentoForm>,
) -> Result<Redirect, AppError> {
    let estacionamento = state.estacionamentos.save(None, &form).await?;
    tracing::info!("Created estacionamento {}", estacionamento.id);

    Ok(Redirect::to("/estacionamentos"))
}

/// PUT /estacionamentos/:id - overwrite an existing parking lot's fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EstacionamentoForm>,
) -> Result<Redirect, AppError> {
    if !state.estacionamentos.exists_by_id(id).await? {
        return Err(AppError::not_found(format!(
            "estacionamento {} does not exist",
            id
        )));
    }

    state.estacionamentos.save(Some(id), &form).await?;

    Ok(Redirect::to("/estacionamentos"))
}

/// DELETE /estacionamentos/:id - unconditional delete, no existence pre-check
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.estacionamentos.delete_by_id(id).await?;

    Ok(Redirect::to("/estacionamentos"))
}
