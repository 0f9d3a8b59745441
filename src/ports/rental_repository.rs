use crate::domain::{
    rental::{CreateRentalData, Rental},
    value_objects::RentalId,
};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// レンタルリポジトリポート
#[async_trait]
pub trait RentalRepository<T: Send>: Send + Sync {
    /// 新しいレンタルを作成する
    ///
    /// IDと監査情報（created_at, updated_at）はリポジトリが割り当て、
    /// 保存されたエンティティを返す。
    async fn create_rental(&self, trx: &mut T, data: CreateRentalData) -> Result<Rental>;

    /// IDでレンタルを取得する
    async fn get_rental_by_id(&self, trx: &mut T, rental_id: RentalId) -> Result<Option<Rental>>;
}
