//! Language service.

use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::traits::Patch;
use showtime_database::repositories::LanguageRepository;
use showtime_entity::catalog::{Language, LanguagePatch, NewLanguage};

#[derive(Debug, Clone)]
pub struct LanguageService {
    languages: LanguageRepository,
}

impl LanguageService {
    pub fn new(languages: LanguageRepository) -> Self {
        Self { languages }
    }

    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Language>> {
        self.languages.list(search).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Language> {
        self.languages
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Language not found"))
    }

    pub async fn create(&self, data: &NewLanguage) -> AppResult<Language> {
        let language = self.languages.create(data).await?;
        info!(language_id = language.id, code = %language.code, "Language created");
        Ok(language)
    }

    pub async fn update(&self, id: i64, patch: &LanguagePatch) -> AppResult<Language> {
        let current = self.get(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }
        self.languages
            .update(&patch.merge(&current))
            .await?
            .ok_or_else(|| AppError::not_found("Language not found"))
    }

    /// Languages referenced by a movie entry or a screening cannot be deleted.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        if self.languages.is_in_use(id).await? {
            return Err(AppError::conflict(
                "Language is used by movies or screenings",
            ));
        }
        self.languages.delete(id).await?;
        info!(language_id = id, "Language deleted");
        Ok(())
    }
}
