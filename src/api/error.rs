use crate::application::{movie::MovieApplicationError, rental::RentalApplicationError};
use crate::domain::value_objects::{MovieId, RentalId};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層が `None` で返した不在を404に、
/// 協調者のエラーを500にマッピングする。
#[derive(Debug)]
pub enum ApiError {
    MovieNotFound(MovieId),
    RentalNotFound(RentalId),
    Movie(MovieApplicationError),
    Rental(RentalApplicationError),
}

impl From<MovieApplicationError> for ApiError {
    fn from(err: MovieApplicationError) -> Self {
        ApiError::Movie(err)
    }
}

impl From<RentalApplicationError> for ApiError {
    fn from(err: RentalApplicationError) -> Self {
        ApiError::Rental(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::MovieNotFound(movie_id) => (
                StatusCode::NOT_FOUND,
                "MOVIE_NOT_FOUND",
                format!("Movie {} not found", movie_id),
            ),
            ApiError::RentalNotFound(rental_id) => (
                StatusCode::NOT_FOUND,
                "RENTAL_NOT_FOUND",
                format!("Rental {} not found", rental_id),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Movie(MovieApplicationError::TransactionError(ref e))
            | ApiError::Rental(RentalApplicationError::TransactionError(ref e)) => {
                tracing::error!("Transaction error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TRANSACTION_ERROR",
                    "Failed to complete transaction".to_string(),
                )
            }
            ApiError::Movie(MovieApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Movie repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access movies".to_string(),
                )
            }
            ApiError::Rental(RentalApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Rental repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access rentals".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
