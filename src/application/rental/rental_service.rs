use crate::domain::{commands::RentMovie, value_objects::RentalId};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{RentalApplicationError, Result};
use super::read_models::{
    RentalViewingReadModel, build_rental_data_from_command, build_viewing_read_model,
};
use crate::application::transaction::transact;

/// レンタルサービスの依存関係
pub struct RentalServiceDependencies<T: Send> {
    pub rental_repository: Arc<dyn RentalRepository<T>>,
    pub transaction_provider: Arc<dyn TransactionProvider<Transaction = T>>,
}

impl<T: Send> Clone for RentalServiceDependencies<T> {
    fn clone(&self) -> Self {
        Self {
            rental_repository: Arc::clone(&self.rental_repository),
            transaction_provider: Arc::clone(&self.transaction_provider),
        }
    }
}

/// 映画をレンタルする
///
/// コマンドからレンタル日数を計算し、トランザクション内でレンタルを作成する。
///
/// 入力の検証は行わない：
/// - 終了が開始以前の場合、0または負のレンタル日数がそのまま保存される
/// - 同じ映画への同時レンタルの競合検出もしない
///
/// # 戻り値
/// リポジトリが割り当てたレンタルID
pub async fn rent_movie<T: Send>(
    deps: &RentalServiceDependencies<T>,
    cmd: RentMovie,
) -> Result<RentalId> {
    let data = build_rental_data_from_command(cmd);
    let repository = &deps.rental_repository;

    let rental = transact(deps.transaction_provider.as_ref(), |mut trx| async move {
        let outcome = repository
            .create_rental(&mut trx, data)
            .await
            .map_err(RentalApplicationError::RepositoryError);
        (trx, outcome)
    })
    .await?;

    tracing::info!(
        rental_id = %rental.rental_id,
        rental_days = rental.rental_days,
        "Rental created"
    );

    Ok(rental.rental_id)
}

/// レンタルを閲覧する
///
/// # 戻り値
/// レンタルが存在しない場合は `Ok(None)`
pub async fn view_rental<T: Send>(
    deps: &RentalServiceDependencies<T>,
    rental_id: RentalId,
) -> Result<Option<RentalViewingReadModel>> {
    let repository = &deps.rental_repository;

    transact(deps.transaction_provider.as_ref(), |mut trx| async move {
        let outcome = repository
            .get_rental_by_id(&mut trx, rental_id)
            .await
            .map(build_viewing_read_model)
            .map_err(RentalApplicationError::RepositoryError);
        (trx, outcome)
    })
    .await
}
