use std::time::Instant;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{debug, info, warn};

use crate::{
    config::{Config, Environment},
    errors::AppError,
    middleware::RequestLogger,
    routes, services,
    templates::{Templates, INDEX_TEMPLATE, SHORT_TEMPLATE},
    types::{AppState, Result},
};

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<()> {
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

// Detailed access log outside production, short lines in production
fn access_log_format(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "%a \"%r\" %s %b %T",
        Environment::Development | Environment::Testing => {
            "%a \"%r\" %s %b %T \"%{Referer}i\" \"%{User-Agent}i\""
        }
    }
}

pub async fn server() -> Result<()> {
    let config = Config::load()?;
    setup_logging(&config)?;

    let start_time = Instant::now();

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Full configuration: {:?}", config);
    }

    // Templates are read per request; a missing file only fails that request
    for name in [INDEX_TEMPLATE, SHORT_TEMPLATE] {
        let path = config.app.static_dir.join(name);
        if !path.is_file() {
            warn!("Template {} not found, pages using it will fail", path.display());
        }
    }

    let enable_debug_logging = config.app.environment != Environment::Production;

    let log_format = access_log_format(config.app.environment);

    // One store for the whole process, shared by every worker
    let shortener = services::build();
    let templates = web::Data::new(Templates::new(config.app.static_dir.clone()));
    let state = web::Data::new(AppState {
        start_time,
        version: config.app.version.clone(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(shortener.clone())
            .app_data(templates.clone())
            .app_data(state.clone())
            .wrap(RequestLogger::new(enable_debug_logging))
            .wrap(Logger::new(log_format))
            .configure(routes::configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host, config.server.port))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_format_per_environment() {
        assert!(!access_log_format(Environment::Production).contains("User-Agent"));
        assert!(access_log_format(Environment::Development).contains("%{Referer}i"));
        assert!(access_log_format(Environment::Testing).contains("%{User-Agent}i"));
    }
}
