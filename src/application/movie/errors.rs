use thiserror::Error;

use crate::application::transaction::TransactionError;

/// 映画カタログアプリケーション層のエラー
///
/// 映画が見つからないことはエラーではなく `None` で表す。
/// 外部協調者のエラーは変換せずにそのまま伝播する。
#[derive(Debug, Error)]
pub enum MovieApplicationError {
    /// トランザクションプロバイダーのエラー
    #[error(transparent)]
    TransactionError(#[from] TransactionError),

    /// MovieRepositoryのエラー
    #[error(transparent)]
    RepositoryError(Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, MovieApplicationError>;
