//! Genre service.

use tracing::info;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_database::repositories::GenreRepository;
use showtime_entity::catalog::Genre;

#[derive(Debug, Clone)]
pub struct GenreService {
    genres: GenreRepository,
}

impl GenreService {
    pub fn new(genres: GenreRepository) -> Self {
        Self { genres }
    }

    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Genre>> {
        self.genres.list(search).await
    }

    pub async fn create(&self, name: &str) -> AppResult<Genre> {
        let genre = self.genres.create(name).await?;
        info!(genre_id = genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }

    pub async fn update(&self, id: i64, name: &str) -> AppResult<Genre> {
        self.genres
            .update(id, name)
            .await?
            .ok_or_else(|| AppError::not_found("Genre not found"))
    }

    /// Genres linked to a live movie cannot be deleted.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.genres.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Genre not found"));
        }
        if self.genres.is_in_use(id).await? {
            return Err(AppError::conflict("Genre is used by one or more movies"));
        }
        self.genres.delete(id).await?;
        info!(genre_id = id, "Genre deleted");
        Ok(())
    }
}
