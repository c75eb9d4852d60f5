use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form-bound payload for create and update. The id never travels in the
/// body; on update the path id wins unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteForm {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}
