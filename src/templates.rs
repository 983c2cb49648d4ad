//! Minimal HTML templates read from the static directory.
//!
//! Supported syntax:
//! * `{{ Name }}` - value of `Name`, HTML-escaped
//! * `{{#Name}} ... {{/Name}}` - body repeated for every object in the array `Name`,
//!   with placeholders resolved against that object

use std::path::PathBuf;

use log::error;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::utils::html::escape;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const SHORT_TEMPLATE: &str = "short.html";

type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads `name` from disk and fills it from `data`, which must serialize to an object.
    ///
    /// The file is read on every call so edits show up without a restart.
    pub async fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let path = self.dir.join(name);
        let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
            error!("Failed to read template {}: {}", path.display(), e);
            AppError::TemplateRender(format!("{}: {}", path.display(), e))
        })?;

        let context = match serde_json::to_value(data) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(AppError::TemplateRender(format!(
                    "template data for {} must be an object, got {}",
                    name, other
                )))
            }
            Err(e) => return Err(AppError::TemplateRender(e.to_string())),
        };

        render_str(&source, &context).map_err(|e| {
            error!("Failed to render template {}: {}", path.display(), e);
            AppError::TemplateRender(format!("{}: {}", path.display(), e))
        })
    }
}

fn render_str(source: &str, context: &Map<String, Value>) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open
            .find("}}")
            .ok_or_else(|| "unclosed '{{'".to_string())?;
        let tag = after_open[..end].trim();
        rest = &after_open[end + 2..];

        if let Some(name) = tag.strip_prefix('#') {
            let name = name.trim();
            let closing = format!("{{{{/{}}}}}", name);
            let body_end = rest
                .find(&closing)
                .ok_or_else(|| format!("section '{}' is never closed", name))?;
            let body = &rest[..body_end];
            rest = &rest[body_end + closing.len()..];

            match context.get(name) {
                Some(Value::Array(items)) => {
                    for item in items {
                        let item = item
                            .as_object()
                            .ok_or_else(|| format!("items of '{}' must be objects", name))?;
                        out.push_str(&render_str(body, item)?);
                    }
                }
                Some(_) => return Err(format!("section '{}' is not a list", name)),
                None => return Err(format!("unknown section '{}'", name)),
            }
        } else {
            let value = context
                .get(tag)
                .ok_or_else(|| format!("unknown placeholder '{}'", tag))?;
            match value {
                Value::String(s) => out.push_str(&escape(s)),
                Value::Null => {}
                other => out.push_str(&escape(&other.to_string())),
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
