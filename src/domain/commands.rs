use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomerId, MovieId};

/// コマンド：映画をレンタルする
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentMovie {
    pub customer_id: CustomerId,
    pub movie_id: MovieId,
    pub movie_category_name: String,
    pub movie_title: String,
    pub start_of_rental: DateTime<Utc>,
    pub end_of_rental: DateTime<Utc>,
}
