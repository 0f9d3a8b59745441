use crate::domain::value_objects::MovieId;
use crate::ports::*;
use std::sync::Arc;

use super::errors::{MovieApplicationError, Result};
use super::read_models::{
    MovieSelectionReadModel, MovieViewingReadModel, build_selection_read_models,
    build_viewing_read_model,
};
use crate::application::transaction::transact;

/// 映画カタログサービスの依存関係
///
/// `T` はトランザクションプロバイダーが発行し、リポジトリが受け取るハンドルの型。
/// 振る舞いは持たず、ユースケース関数に引数として渡す。
pub struct MovieServiceDependencies<T: Send> {
    pub movie_repository: Arc<dyn MovieRepository<T>>,
    pub transaction_provider: Arc<dyn TransactionProvider<Transaction = T>>,
}

impl<T: Send> Clone for MovieServiceDependencies<T> {
    fn clone(&self) -> Self {
        Self {
            movie_repository: Arc::clone(&self.movie_repository),
            transaction_provider: Arc::clone(&self.transaction_provider),
        }
    }
}

/// 選択可能な映画の一覧を取得する
///
/// トランザクション内で全映画を取得し、選択ビューに射影する。
/// 件数と順序はリポジトリの結果と一致する。
pub async fn find_movies_to_select_from<T: Send>(
    deps: &MovieServiceDependencies<T>,
) -> Result<Vec<MovieSelectionReadModel>> {
    let repository = &deps.movie_repository;

    transact(deps.transaction_provider.as_ref(), |mut trx| async move {
        let outcome = repository
            .find_movies(&mut trx)
            .await
            .map(build_selection_read_models)
            .map_err(MovieApplicationError::RepositoryError);
        (trx, outcome)
    })
    .await
}

/// 視聴する映画を取得する
///
/// # 戻り値
/// 映画が存在しない場合は `Ok(None)`（エラーではない）
pub async fn find_movie_for_viewing<T: Send>(
    deps: &MovieServiceDependencies<T>,
    movie_id: MovieId,
) -> Result<Option<MovieViewingReadModel>> {
    let repository = &deps.movie_repository;

    transact(deps.transaction_provider.as_ref(), |mut trx| async move {
        let outcome = repository
            .get_movie_by_id(&mut trx, movie_id)
            .await
            .map(build_viewing_read_model)
            .map_err(MovieApplicationError::RepositoryError);
        (trx, outcome)
    })
    .await
}
