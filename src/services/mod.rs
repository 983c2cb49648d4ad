use std::sync::Arc;

use actix_web::web;

mod key_generator;
mod shortener;

pub use key_generator::KeyGenerator;
pub use shortener::ShortenerService;

use crate::repositories::InMemoryKeyStore;

pub type ShortenerServiceType = ShortenerService<InMemoryKeyStore>;

/// Builds the single service instance shared by every worker
pub fn build() -> web::Data<ShortenerServiceType> {
    let store = Arc::new(InMemoryKeyStore::new());
    web::Data::new(ShortenerService::new(store, KeyGenerator::new()))
}
