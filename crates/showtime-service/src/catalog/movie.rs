//! Movie service: movies with their genre, cast, and language links.

use std::collections::BTreeSet;

use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::traits::Patch;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::repositories::{
    GenreRepository, LanguageRepository, MovieFilter, MovieRepository,
};
use showtime_entity::catalog::{
    CastEntry, Movie, MovieDetails, MovieLanguage, MovieLanguageDetail, MovieLanguagePatch,
    MoviePatch, NewMovie, NewMovieLanguage,
};

#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub movie: NewMovie,
    pub genre_ids: Vec<i64>,
    pub cast: Vec<CastEntry>,
}

/// `None` link lists leave the current links untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub patch: MoviePatch,
    pub genre_ids: Option<Vec<i64>>,
    pub cast: Option<Vec<CastEntry>>,
}

#[derive(Debug, Clone)]
pub struct MovieService {
    movies: MovieRepository,
    genres: GenreRepository,
    languages: LanguageRepository,
}

impl MovieService {
    pub fn new(movies: MovieRepository, genres: GenreRepository, languages: LanguageRepository) -> Self {
        Self {
            movies,
            genres,
            languages,
        }
    }

    pub async fn list(&self, filter: &MovieFilter, page: &PageRequest) -> AppResult<PageResponse<Movie>> {
        self.movies.list(filter, page).await
    }

    /// Movie with links; `lang` overlays the localized title and description.
    pub async fn get(&self, id: i64, lang: Option<&str>) -> AppResult<MovieDetails> {
        let mut details = self
            .movies
            .find_details(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))?;

        if let Some(code) = lang {
            details.localize(code);
        }
        Ok(details)
    }

    pub async fn create(&self, req: CreateMovie) -> AppResult<MovieDetails> {
        let genre_ids = dedup(&req.genre_ids);
        self.require_genres(&genre_ids).await?;
        self.require_persons(&req.cast).await?;

        let movie = self.movies.create(&req.movie, &genre_ids, &req.cast).await?;
        info!(movie_id = movie.id, title = %movie.original_title, "Movie created");
        self.get(movie.id, None).await
    }

    pub async fn update(&self, id: i64, req: UpdateMovie) -> AppResult<MovieDetails> {
        let current = self.find(id).await?;

        let genre_ids = req.genre_ids.as_deref().map(dedup);
        if let Some(ids) = &genre_ids {
            self.require_genres(ids).await?;
        }
        if let Some(cast) = &req.cast {
            self.require_persons(cast).await?;
        }

        self.movies
            .update(
                &req.patch.merge(&current),
                genre_ids.as_deref(),
                req.cast.as_deref(),
            )
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))?;

        info!(movie_id = id, "Movie updated");
        self.get(id, None).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.movies.soft_delete(id).await? {
            return Err(AppError::not_found("Movie not found"));
        }
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    pub async fn languages(&self, movie_id: i64) -> AppResult<Vec<MovieLanguageDetail>> {
        self.find(movie_id).await?;
        self.movies.list_languages(movie_id).await
    }

    pub async fn add_language(&self, data: &NewMovieLanguage) -> AppResult<MovieLanguage> {
        self.find(data.movie_id).await?;
        if self.languages.find_by_id(data.language_id).await?.is_none() {
            return Err(AppError::validation("Language not found"));
        }
        self.movies.add_language(data).await
    }

    pub async fn update_language(
        &self,
        movie_id: i64,
        entry_id: i64,
        patch: &MovieLanguagePatch,
    ) -> AppResult<MovieLanguage> {
        let current = self
            .movies
            .find_language_entry(movie_id, entry_id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie language not found"))?;
        if patch.is_empty() {
            return Ok(current);
        }
        self.movies
            .update_language(&patch.merge(&current))
            .await?
            .ok_or_else(|| AppError::not_found("Movie language not found"))
    }

    pub async fn remove_language(&self, movie_id: i64, entry_id: i64) -> AppResult<()> {
        if !self.movies.remove_language(movie_id, entry_id).await? {
            return Err(AppError::not_found("Movie language not found"));
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    async fn require_genres(&self, ids: &[i64]) -> AppResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        if self.genres.count_existing(ids).await? != ids.len() as i64 {
            return Err(AppError::validation("One or more genres do not exist"));
        }
        Ok(())
    }

    async fn require_persons(&self, cast: &[CastEntry]) -> AppResult<()> {
        let ids = dedup(&cast.iter().map(|c| c.person_id).collect::<Vec<_>>());
        if ids.is_empty() {
            return Ok(());
        }
        if self.movies.count_existing_persons(&ids).await? != ids.len() as i64 {
            return Err(AppError::validation("One or more cast members do not exist"));
        }
        Ok(())
    }
}

fn dedup(ids: &[i64]) -> Vec<i64> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::dedup;

    #[test]
    fn dedup_sorts_and_removes_repeats() {
        assert_eq!(dedup(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(dedup(&[]).is_empty());
    }
}
