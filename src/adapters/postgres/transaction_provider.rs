use crate::ports::transaction_provider::{
    Result, TransactionProvider as TransactionProviderTrait,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres};

/// PostgreSQLトランザクションハンドル
pub type PgTransaction = sqlx::Transaction<'static, Postgres>;

/// TransactionProviderのPostgreSQL実装
///
/// コネクションプールからトランザクションを開始する。
/// コミットもロールバックもされずにDropされたトランザクションは
/// sqlxによってロールバックされる。
pub struct TransactionProvider {
    pool: PgPool,
}

impl TransactionProvider {
    /// PostgreSQLコネクションプールから新しいTransactionProviderを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionProviderTrait for TransactionProvider {
    type Transaction = PgTransaction;

    async fn begin(&self) -> Result<PgTransaction> {
        Ok(self.pool.begin().await?)
    }

    async fn commit(&self, trx: PgTransaction) -> Result<()> {
        trx.commit().await?;
        Ok(())
    }

    async fn rollback(&self, trx: PgTransaction) -> Result<()> {
        trx.rollback().await?;
        Ok(())
    }
}
