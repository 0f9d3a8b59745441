use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{movie::Movie, value_objects::MovieId};

/// 映画選択ビュー（Read Model）
///
/// 一覧表示用の軽量な射影。永続化されず、リクエストごとに再計算される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSelectionReadModel {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub publication_date: DateTime<Utc>,
    pub category: String,
}

/// 映画視聴ビュー（Read Model）
///
/// 再生画面用の射影。ポスターの代わりに動画URLを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieViewingReadModel {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub publication_date: DateTime<Utc>,
    pub category: String,
}

/// 映画一覧から選択ビューを構築する
///
/// リポジトリが返した順序をそのまま保つ。
pub fn build_selection_read_models(movies: Vec<Movie>) -> Vec<MovieSelectionReadModel> {
    movies
        .into_iter()
        .map(|movie| MovieSelectionReadModel {
            id: movie.movie_id,
            title: movie.title,
            description: movie.description,
            poster_url: movie.poster_url,
            publication_date: movie.publication_date,
            category: movie.category,
        })
        .collect()
}

/// 映画から視聴ビューを構築する
///
/// 映画が存在しない場合は `None` をそのまま返す。
pub fn build_viewing_read_model(movie: Option<Movie>) -> Option<MovieViewingReadModel> {
    let movie = movie?;

    Some(MovieViewingReadModel {
        id: movie.movie_id,
        title: movie.title,
        description: movie.description,
        video_url: movie.video_url,
        publication_date: movie.publication_date,
        category: movie.category,
    })
}
