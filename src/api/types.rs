use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::RentMovie;
use crate::domain::value_objects::{CustomerId, MovieId};

/// レンタルリクエスト（POST /rentals）
#[derive(Debug, Deserialize)]
pub struct RentMovieRequest {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
    pub movie_category_name: String,
    pub movie_title: String,
    pub start_of_rental: DateTime<Utc>,
    pub end_of_rental: DateTime<Utc>,
}

impl RentMovieRequest {
    /// リクエストをコマンドに変換する
    pub fn into_command(self) -> RentMovie {
        RentMovie {
            customer_id: CustomerId::from_uuid(self.customer_id),
            movie_id: MovieId::from_uuid(self.movie_id),
            movie_category_name: self.movie_category_name,
            movie_title: self.movie_title,
            start_of_rental: self.start_of_rental,
            end_of_rental: self.end_of_rental,
        }
    }
}

/// レンタル作成レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct RentalCreatedResponse {
    pub rental_id: Uuid,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
