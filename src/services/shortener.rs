// src/services/shortener.rs - Business logic
use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::errors::AppError;
use crate::models::{Entry, ShortenForm};
use crate::repositories::KeyStore;
use crate::services::KeyGenerator;

type Result<T> = std::result::Result<T, AppError>;

pub struct ShortenerService<S: KeyStore> {
    store: Arc<S>,
    generator: KeyGenerator,
}

impl<S: KeyStore> ShortenerService<S> {
    pub fn new(store: Arc<S>, generator: KeyGenerator) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Stores `form.url` under a fresh short key.
    ///
    /// ### Errors
    /// * `AppError::MissingInput` - If the url field is empty; nothing is stored
    /// * `AppError::ExhaustedKeyspace` - If no free key was found
    pub async fn shorten(&self, form: ShortenForm) -> Result<Entry> {
        form.validate()?;

        let entry = self.generator.generate_for(self.store.as_ref(), &form.url).await?;
        info!("Generated ShortKey: {}", entry.short_key);

        Ok(entry)
    }

    /// Looks up the original URL for `key`.
    ///
    /// ### Errors
    /// * `AppError::KeyNotFound` - If the key was never issued
    pub async fn resolve(&self, key: &str) -> Result<String> {
        Ok(self.store.get(key).await?)
    }

    pub async fn entries(&self) -> Vec<Entry> {
        self.store.entries().await
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryKeyStore;
    use crate::utils::id_generator::is_short_id;

    fn service() -> ShortenerService<InMemoryKeyStore> {
        ShortenerService::new(Arc::new(InMemoryKeyStore::new()), KeyGenerator::new())
    }

    fn form(url: &str) -> ShortenForm {
        ShortenForm { url: url.to_string() }
    }

    #[tokio::test]
    async fn test_shorten_then_resolve() {
        let service = service();
        let entry = service.shorten(form("https://example.com")).await.unwrap();

        assert!(is_short_id(&entry.short_key));
        assert_eq!(entry.short_path(), format!("/short/{}", entry.short_key));
        assert_eq!(
            service.resolve(&entry.short_key).await.unwrap(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_url_is_stored_verbatim() {
        let service = service();
        let raw = "  not even a URL?a=1&b=<2>  ";
        let entry = service.shorten(form(raw)).await.unwrap();

        assert_eq!(service.resolve(&entry.short_key).await.unwrap(), raw);
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_without_storing() {
        let service = service();
        let err = service.shorten(form("")).await.unwrap_err();

        assert!(matches!(err, AppError::MissingInput(ref msg) if msg == "No Url Found"));
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn test_resolve_unknown_key() {
        let err = service().resolve("doesnotexist").await.unwrap_err();
        assert!(matches!(err, AppError::KeyNotFound(_)));
    }

    #[tokio::test]
    async fn test_same_url_gets_distinct_keys() {
        let service = service();
        let first = service.shorten(form("https://example.com")).await.unwrap();
        let second = service.shorten(form("https://example.com")).await.unwrap();

        assert_ne!(first.short_key, second.short_key);
        assert_eq!(service.entries().await.len(), 2);
    }
}
