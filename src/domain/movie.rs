use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MovieId;

/// Movie集約 - カタログに登録された1本の映画
///
/// 映画リポジトリが所有・永続化する。
/// アプリケーション層からは読み取り専用として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    // 識別子
    pub movie_id: MovieId,

    // 表示情報
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub video_url: String,
    pub publication_date: DateTime<Utc>,

    /// カテゴリ名
    pub category: String,
}
