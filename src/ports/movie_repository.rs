use crate::domain::{movie::Movie, value_objects::MovieId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 映画リポジトリポート
///
/// 映画カタログの永続化を抽象化する。
/// すべての操作は呼び出し側が開いたトランザクション `T` の中で実行される。
#[async_trait]
pub trait MovieRepository<T: Send>: Send + Sync {
    /// すべての映画を取得する
    ///
    /// 並び順はリポジトリが決める。
    async fn find_movies(&self, trx: &mut T) -> Result<Vec<Movie>>;

    /// IDで映画を取得する
    ///
    /// 存在しない場合は `None` を返す（エラーではない）。
    async fn get_movie_by_id(&self, trx: &mut T, movie_id: MovieId) -> Result<Option<Movie>>;
}
