//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use showtime_auth::{AccessGate, PasswordHasher, SessionManager};
use showtime_cache::CacheManager;
use showtime_core::config::AppConfig;
use showtime_database::repositories::{
    GenreRepository, LanguageRepository, MovieRepository, ScreenRepository, ScreeningRepository,
    TheaterRepository,
};
use showtime_database::{RoleStore, UserStore};
use showtime_service::{
    AuthService, GenreService, LanguageService, MovieService, RoleService, ScreenService,
    ScreeningService, TheaterService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Every field is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub db_pool: PgPool,
    pub cache: CacheManager,

    // ── Auth ─────────────────────────────────────────────────
    pub gate: AccessGate,
    pub auth: AuthService,

    // ── Services ─────────────────────────────────────────────
    pub users: UserService,
    pub roles: RoleService,
    pub genres: GenreService,
    pub languages: LanguageService,
    pub movies: MovieService,
    pub theaters: TheaterService,
    pub screens: ScreenService,
    pub screenings: ScreeningService,
}

impl AppState {
    /// Wire every service from the shared infrastructure.
    ///
    /// The credential stores are trait objects so tests can substitute the
    /// in-memory store; content repositories always use `db_pool`.
    pub fn new(
        config: AppConfig,
        db_pool: PgPool,
        cache: CacheManager,
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
    ) -> Self {
        let hasher = PasswordHasher::new();
        let sessions = SessionManager::new(cache.clone(), config.session.clone());

        let genre_repo = GenreRepository::new(db_pool.clone());
        let language_repo = LanguageRepository::new(db_pool.clone());
        let movie_repo = MovieRepository::new(db_pool.clone());
        let theater_repo = TheaterRepository::new(db_pool.clone());
        let screen_repo = ScreenRepository::new(db_pool.clone());
        let screening_repo = ScreeningRepository::new(db_pool.clone());

        Self {
            gate: AccessGate::new(sessions.clone(), Arc::clone(&users)),
            auth: AuthService::new(Arc::clone(&users), sessions.clone(), hasher.clone()),
            users: UserService::new(
                Arc::clone(&users),
                Arc::clone(&roles),
                sessions,
                hasher,
            ),
            roles: RoleService::new(roles, users, config.auth.clone()),
            genres: GenreService::new(genre_repo.clone()),
            languages: LanguageService::new(language_repo.clone()),
            movies: MovieService::new(movie_repo.clone(), genre_repo, language_repo.clone()),
            theaters: TheaterService::new(theater_repo.clone(), screen_repo.clone()),
            screens: ScreenService::new(screen_repo.clone(), theater_repo),
            screenings: ScreeningService::new(screening_repo, movie_repo, screen_repo, language_repo),
            config: Arc::new(config),
            db_pool,
            cache,
        }
    }
}
