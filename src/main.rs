use std::process;

use log::error;

use url_shortn::{app, errors::AppError};

#[actix_web::main]
async fn main() {
    if let Err(err) = app::server().await {
        // The logger may not be up yet, so also write straight to stderr
        eprintln!("{}", err);
        match err {
            AppError::Server(e) => {
                error!("Critical server error: {}", e);
                process::exit(1);
            }
            AppError::Config(e) => {
                error!("Critical configuration error: {}", e);
                process::exit(2);
            }
            AppError::Logger(e) => {
                error!("Critical logger error: {}", e);
                process::exit(3);
            }
            _ => {
                error!("Unexpected error: {}", err);
                process::exit(1);
            }
        }
    }
}
