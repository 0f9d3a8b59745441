use std::future::Future;
use thiserror::Error;

use crate::ports::TransactionProvider;

/// トランザクション境界のエラー
///
/// プロバイダーのエラーをそのまま保持し、メッセージも変換しない。
#[derive(Debug, Error)]
pub enum TransactionError {
    /// トランザクションを開始できなかった
    #[error(transparent)]
    Begin(Box<dyn std::error::Error + Send + Sync>),

    /// コミットに失敗した
    #[error(transparent)]
    Commit(Box<dyn std::error::Error + Send + Sync>),
}

/// 作業単位をトランザクション内で実行する
///
/// トランザクションハンドルを所有権ごと `work` に渡し、結果と一緒に返してもらう。
/// - `Ok` ならコミットして値を返す
/// - `Err` ならロールバックして元のエラーをそのまま返す
///
/// ロールバック自体の失敗はログに残すだけで、元のエラーを置き換えない。
/// `work` の途中でパニックした場合、ハンドルのDropに後始末を委ねる。
///
/// # 例
/// ```ignore
/// let movies = transact(provider, |mut trx| async move {
///     let outcome = repository.find_movies(&mut trx).await.map_err(MyError::from);
///     (trx, outcome)
/// })
/// .await?;
/// ```
pub async fn transact<P, R, E, F, Fut>(provider: &P, work: F) -> Result<R, E>
where
    P: TransactionProvider + ?Sized,
    F: FnOnce(P::Transaction) -> Fut,
    Fut: Future<Output = (P::Transaction, Result<R, E>)>,
    E: From<TransactionError>,
{
    let trx = provider.begin().await.map_err(TransactionError::Begin)?;

    let (trx, outcome) = work(trx).await;

    match outcome {
        Ok(value) => {
            provider.commit(trx).await.map_err(TransactionError::Commit)?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!("Rolling back transaction");
            if let Err(rollback_err) = provider.rollback(trx).await {
                tracing::warn!(error = %rollback_err, "Failed to roll back transaction");
            }
            Err(err)
        }
    }
}
