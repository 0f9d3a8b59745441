use crate::application::{
    movie::{
        MovieSelectionReadModel, MovieServiceDependencies, MovieViewingReadModel,
        find_movie_for_viewing as execute_find_movie_for_viewing,
        find_movies_to_select_from as execute_find_movies_to_select_from,
    },
    rental::{
        RentalServiceDependencies, RentalViewingReadModel, rent_movie as execute_rent_movie,
        view_rental as execute_view_rental,
    },
};
use crate::domain::value_objects::{MovieId, RentalId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{RentMovieRequest, RentalCreatedResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// `T` はトランザクションハンドルの型（本番はPostgreSQL、テストはモック）。
pub struct AppState<T: Send> {
    pub movie_deps: MovieServiceDependencies<T>,
    pub rental_deps: RentalServiceDependencies<T>,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /movies - 選択可能な映画の一覧
pub async fn list_movies<T: Send + 'static>(
    State(state): State<Arc<AppState<T>>>,
) -> Result<Json<Vec<MovieSelectionReadModel>>, ApiError> {
    let movies = execute_find_movies_to_select_from(&state.movie_deps).await?;
    Ok(Json(movies))
}

/// GET /movies/:id - 視聴用の映画詳細
///
/// 見つからない場合は404を返す。
pub async fn get_movie_for_viewing<T: Send + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<MovieViewingReadModel>, ApiError> {
    let movie_id = MovieId::from_uuid(movie_id);

    execute_find_movie_for_viewing(&state.movie_deps, movie_id)
        .await?
        .map(Json)
        .ok_or(ApiError::MovieNotFound(movie_id))
}

/// GET /rentals/:id - レンタル詳細
pub async fn get_rental<T: Send + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<RentalViewingReadModel>, ApiError> {
    let rental_id = RentalId::from_uuid(rental_id);

    execute_view_rental(&state.rental_deps, rental_id)
        .await?
        .map(Json)
        .ok_or(ApiError::RentalNotFound(rental_id))
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /rentals - 映画をレンタル
///
/// 入力の形以外は検証しない（終了が開始より前でも受け付ける）。
pub async fn rent_movie<T: Send + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Json(req): Json<RentMovieRequest>,
) -> Result<(StatusCode, Json<RentalCreatedResponse>), ApiError> {
    let rental_id = execute_rent_movie(&state.rental_deps, req.into_command()).await?;

    let response = RentalCreatedResponse {
        rental_id: rental_id.value(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
