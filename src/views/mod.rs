use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

use crate::database::models::{Cliente, Estacionamento};
use crate::error::AppError;

// Templates ship inside the binary so deployments need no template dir
static TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("cliente.html", include_str!("../../templates/cliente.html")),
    (
        "estacionamentos/list.html",
        include_str!("../../templates/estacionamentos/list.html"),
    ),
];

/// Template registry shared through application state
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera: Arc::new(tera) })
    }

    pub fn cliente_list(&self, clientes: &[Cliente]) -> Result<Html<String>, AppError> {
        let mut context = Context::new();
        context.insert("cliente", clientes);

        let page = self.tera.render("cliente.html", &context)?;
        Ok(Html(page))
    }

    pub fn estacionamento_list(
        &self,
        estacionamentos: &[Estacionamento],
    ) -> Result<Html<String>, AppError> {
        let mut context = Context::new();
        context.insert("estacionamentos", estacionamentos);

        let page = self.tera.render("estacionamentos/list.html", &context)?;
        Ok(Html(page))
    }
}
