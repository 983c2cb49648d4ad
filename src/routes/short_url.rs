use actix_web::web;

use crate::handlers::{
    form_handler, form_post_handler, method_not_allowed_handler, redirect_handler,
    short_prefix_handler, shorten_handler,
};

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/shortn")
            .route(web::post().to(shorten_handler))
            .default_service(web::to(method_not_allowed_handler)),
    )
    .service(web::resource("/short").to(short_prefix_handler))
    .service(
        // Everything after the prefix is the key, including an empty one
        web::resource("/short/{key:.*}")
            .route(web::get().to(redirect_handler))
            .default_service(web::to(method_not_allowed_handler)),
    )
    .service(
        // Catch-all, registered last: any other path serves the form page
        web::resource("/{tail:.*}")
            .route(web::post().to(form_post_handler))
            .default_service(web::to(form_handler)),
    );
}
