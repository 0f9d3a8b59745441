use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// トランザクションプロバイダーポート
///
/// 1つのユースケースを原子的に実行するためのトランザクション境界を抽象化する。
/// `Transaction` はリポジトリに渡されるハンドルで、実装ごとに型が決まる。
///
/// アプリケーション層はこのトレイトを直接呼ばず、
/// `application::transaction::transact` を通じて利用する。
#[async_trait]
pub trait TransactionProvider: Send + Sync {
    /// リポジトリ呼び出しに渡すトランザクションハンドル
    type Transaction: Send;

    /// トランザクションを開始する
    async fn begin(&self) -> Result<Self::Transaction>;

    /// トランザクションをコミットする
    async fn commit(&self, trx: Self::Transaction) -> Result<()>;

    /// トランザクションをロールバックする
    async fn rollback(&self, trx: Self::Transaction) -> Result<()>;
}
