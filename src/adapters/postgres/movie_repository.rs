use crate::adapters::postgres::transaction_provider::PgTransaction;
use crate::domain::{movie::Movie, value_objects::MovieId};
use crate::ports::movie_repository::{MovieRepository as MovieRepositoryTrait, Result};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use sqlx::{Row, postgres::PgRow};

/// PostgreSQLの行データをMovieに変換する
fn map_row_to_movie(row: &PgRow) -> Result<Movie> {
    Ok(Movie {
        movie_id: MovieId::from_uuid(row.try_get("movie_id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        poster_url: row.try_get("poster_url")?,
        video_url: row.try_get("video_url")?,
        publication_date: row.try_get("publication_date")?,
        category: row.try_get("category")?,
    })
}

/// MovieRepositoryのPostgreSQL実装
///
/// 状態を持たず、すべてのクエリを渡されたトランザクション上で実行する。
pub struct MovieRepository;

impl MovieRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepositoryTrait<PgTransaction> for MovieRepository {
    /// 全映画を公開日の新しい順（同日はタイトル順）で取得
    async fn find_movies(&self, trx: &mut PgTransaction) -> Result<Vec<Movie>> {
        sqlx::query(
            r#"
            SELECT
                movie_id,
                title,
                description,
                poster_url,
                video_url,
                publication_date,
                category
            FROM movies
            ORDER BY publication_date DESC, title ASC
            "#,
        )
        .fetch(&mut **trx)
        .map(|row| -> Result<Movie> { map_row_to_movie(&row?) })
        .try_collect()
        .await
    }

    async fn get_movie_by_id(
        &self,
        trx: &mut PgTransaction,
        movie_id: MovieId,
    ) -> Result<Option<Movie>> {
        let row = sqlx::query(
            r#"
            SELECT
                movie_id,
                title,
                description,
                poster_url,
                video_url,
                publication_date,
                category
            FROM movies
            WHERE movie_id = $1
            "#,
        )
        .bind(movie_id.value())
        .fetch_optional(&mut **trx)
        .await?;

        row.as_ref().map(map_row_to_movie).transpose()
    }
}
