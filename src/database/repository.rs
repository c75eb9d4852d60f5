use sqlx::PgPool;

use crate::database::models::{Cliente, ClienteForm, Estacionamento, EstacionamentoForm};
use crate::database::DatabaseError;

/// Persistence access point for Cliente rows. One concrete struct per
/// entity; the contract is exactly list_all, save, exists_by_id and
/// delete_by_id.
#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full-table read, ordered by id for stable rendering
    pub async fn list_all(&self) -> Result<Vec<Cliente>, DatabaseError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, cpf, telefone, created_at, updated_at
             FROM clientes
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    /// Insert when no id is given, update the addressed row otherwise.
    /// Mirrors a store-assigned surrogate key: the caller never supplies
    /// an id on insert.
    pub async fn save(&self, id: Option<i64>, form: &ClienteForm) -> Result<Cliente, DatabaseError> {
        let cliente = match id {
            None => {
                sqlx::query_as::<_, Cliente>(
                    "INSERT INTO clientes (nome, cpf, telefone)
                     VALUES ($1, $2, $3)
                     RETURNING id, nome, cpf, telefone, created_at, updated_at",
                )
                .bind(&form.nome)
                .bind(&form.cpf)
                .bind(&form.telefone)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Cliente>(
                    "UPDATE clientes
                     SET nome = $2, cpf = $3, telefone = $4, updated_at = now()
                     WHERE id = $1
                     RETURNING id, nome, cpf, telefone, created_at, updated_at",
                )
                .bind(id)
                .bind(&form.nome)
                .bind(&form.cpf)
                .bind(&form.telefone)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(cliente)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM clientes WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Unconditional delete; removing an absent id is a silent no-op
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Same shape as ClienteRepository, for Estacionamento rows
#[derive(Clone)]
pub struct EstacionamentoRepository {
    pool: PgPool,
}

impl EstacionamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Estacionamento>, DatabaseError> {
        let estacionamentos = sqlx::query_as::<_, Estacionamento>(
            "SELECT id, nome, endereco, vagas, created_at, updated_at
             FROM estacionamentos
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(estacionamentos)
    }

    pub async fn save(
        &self,
        id: Option<i64>,
        form: &EstacionamentoForm,
    ) -> Result<Estacionamento, DatabaseError> {
        let estacionamento = match id {
            None => {
                sqlx::query_as::<_, Estacionamento>(
                    "INSERT INTO estacionamentos (nome, endereco, vagas)
                     VALUES ($1, $2, $3)
                     RETURNING id, nome, endereco, vagas, created_at, updated_at",
                )
                .bind(&form.nome)
                .bind(&form.endereco)
                .bind(form.vagas)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Estacionamento>(
                    "UPDATE estacionamentos
                     SET nome = $2, endereco = $3, vagas = $4, updated_at = now()
                     WHERE id = $1
                     RETURNING id, nome, endereco, vagas, created_at, updated_at",
                )
                .bind(id)
                .bind(&form.nome)
                .bind(&form.endereco)
                .bind(form.vagas)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(estacionamento)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM estacionamentos WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM estacionamentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
