use thiserror::Error;

use crate::application::transaction::TransactionError;

/// レンタル管理アプリケーション層のエラー
///
/// レンタルが見つからないことはエラーではなく `None` で表す。
#[derive(Debug, Error)]
pub enum RentalApplicationError {
    /// トランザクションプロバイダーのエラー
    #[error(transparent)]
    TransactionError(#[from] TransactionError),

    /// RentalRepositoryのエラー
    #[error(transparent)]
    RepositoryError(Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, RentalApplicationError>;
