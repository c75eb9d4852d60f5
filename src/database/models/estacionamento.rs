use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Estacionamento {
    pub id: i64,
    pub nome: String,
    pub endereco: String,
    pub vagas: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstacionamentoForm {
    pub nome: String,
    pub endereco: String,
    pub vagas: i32,
}
