//! HTML template loading and rendering.
//!
//! Templates are read from the configured directory once at startup. Both
//! pages must exist and parse, otherwise the server refuses to start.

use std::path::Path;

use anyhow::Context;
use axum::response::Html;
use minijinja::Environment;
use roster_core::AppError;
use serde::Serialize;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const NOT_FOUND_TEMPLATE: &str = "404.html";

const REQUIRED_TEMPLATES: [&str; 2] = [INDEX_TEMPLATE, NOT_FOUND_TEMPLATE];

pub fn load_templates(dir: impl AsRef<Path>) -> anyhow::Result<Environment<'static>> {
    let dir = dir.as_ref();
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(dir.to_path_buf()));

    for name in REQUIRED_TEMPLATES {
        env.get_template(name)
            .with_context(|| format!("Failed to load template {} from {}", name, dir.display()))?;
    }

    Ok(env)
}

pub fn render<C: Serialize>(
    env: &Environment<'_>,
    name: &str,
    ctx: C,
) -> Result<Html<String>, AppError> {
    let template = env.get_template(name).map_err(AppError::internal)?;
    let body = template.render(ctx).map_err(AppError::internal)?;
    Ok(Html(body))
}
