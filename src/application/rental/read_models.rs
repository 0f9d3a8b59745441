use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    commands::RentMovie,
    rental::{self, CreateRentalData, Rental},
    value_objects::{CustomerId, MovieId, RentalId},
};

/// レンタル閲覧ビュー（Read Model）
///
/// Rentalから監査情報（created_at, updated_at）を除いた射影。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalViewingReadModel {
    pub id: RentalId,
    pub customer_id: CustomerId,
    pub movie_id: MovieId,
    pub movie_title: String,
    pub movie_category_name: String,
    pub rental_start: DateTime<Utc>,
    pub rental_days: f64,
}

/// コマンドからレンタル作成データを構築する
///
/// レンタル日数は開始・終了日時の差から計算する。
/// 終了が開始より前でも検証しない。
pub fn build_rental_data_from_command(cmd: RentMovie) -> CreateRentalData {
    let rental_days = rental::rental_days(cmd.start_of_rental, cmd.end_of_rental);

    CreateRentalData {
        customer_id: cmd.customer_id,
        movie_category_name: cmd.movie_category_name,
        movie_id: cmd.movie_id,
        movie_title: cmd.movie_title,
        rental_start: cmd.start_of_rental,
        rental_days,
    }
}

/// レンタルから閲覧ビューを構築する
pub fn build_viewing_read_model(rental: Option<Rental>) -> Option<RentalViewingReadModel> {
    let rental = rental?;

    Some(RentalViewingReadModel {
        id: rental.rental_id,
        customer_id: rental.customer_id,
        movie_id: rental.movie_id,
        movie_title: rental.movie_title,
        movie_category_name: rental.movie_category_name,
        rental_start: rental.rental_start,
        rental_days: rental.rental_days,
    })
}
