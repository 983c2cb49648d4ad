use actix_web::{
    http::header::{ContentType, LOCATION},
    web, HttpResponse,
};
use log::{debug, info, warn};

use crate::{
    errors::AppError,
    models::{IndexView, ShortenForm, ShortenedView, SHORT_PATH_PREFIX},
    services::ShortenerServiceType,
    templates::{Templates, INDEX_TEMPLATE, SHORT_TEMPLATE},
    types::Result,
    utils::header::location_value,
};

/// Form page listing every stored mapping
pub async fn form_handler(
    service: web::Data<ShortenerServiceType>,
    templates: web::Data<Templates>,
) -> Result<HttpResponse> {
    let view = IndexView::from(service.entries().await);
    let html = templates.render(INDEX_TEMPLATE, &view).await?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

/// A form posted to `/` is sent on to `/shortn`
pub async fn form_post_handler() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/shortn"))
        .finish()
}

/// Create short URL route handler
///
/// The url is read from the urlencoded body first and from the query string
/// when the body carries none.
pub async fn shorten_handler(
    form: Option<web::Form<ShortenForm>>,
    query: Option<web::Query<ShortenForm>>,
    service: web::Data<ShortenerServiceType>,
    templates: web::Data<Templates>,
) -> Result<HttpResponse> {
    let mut submitted = form.map(web::Form::into_inner).unwrap_or_default();
    if submitted.url.is_empty() {
        if let Some(query) = query {
            submitted = query.into_inner();
        }
    }

    let entry = service.shorten(submitted).await?;
    let html = templates
        .render(SHORT_TEMPLATE, &ShortenedView::from(entry))
        .await?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

/// `/short` without the trailing slash is sent to the prefix itself
pub async fn short_prefix_handler() -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((LOCATION, SHORT_PATH_PREFIX))
        .finish()
}

pub async fn method_not_allowed_handler() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed("Invalid Operation".to_string()))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    service: web::Data<ShortenerServiceType>,
) -> Result<HttpResponse> {
    let short_key = path.into_inner();
    if short_key.is_empty() {
        // Nothing to look up; answer with an empty body rather than an error
        debug!("Redirect requested without a short key");
        return Ok(HttpResponse::Ok().finish());
    }

    let original_url = match service.resolve(&short_key).await {
        Ok(url) => url,
        Err(err) => {
            warn!("ShortKey Not Found: {}", short_key);
            return Err(err);
        }
    };

    info!("Redirecting '{}' to {:?}", short_key, original_url);
    let location = location_value(&original_url).map_err(|e| {
        AppError::Internal(format!("Location for key '{}' is not a valid header: {}", short_key, e))
    })?;
    Ok(HttpResponse::MovedPermanently()
        .insert_header((LOCATION, location))
        .finish())
}
