use sqlx::PgPool;

use crate::database::repository::{ClienteRepository, EstacionamentoRepository};
use crate::views::Views;

/// Shared application state. Handlers receive their storage dependencies
/// here instead of reaching for ambient singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub clientes: ClienteRepository,
    pub estacionamentos: EstacionamentoRepository,
    pub views: Views,
}

impl AppState {
    pub fn new(pool: PgPool, views: Views) -> Self {
        Self {
            clientes: ClienteRepository::new(pool.clone()),
            estacionamentos: EstacionamentoRepository::new(pool.clone()),
            pool,
            views,
        }
    }
}
