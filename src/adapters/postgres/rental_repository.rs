use crate::adapters::postgres::transaction_provider::PgTransaction;
use crate::domain::{
    rental::{CreateRentalData, Rental},
    value_objects::{CustomerId, MovieId, RentalId},
};
use crate::ports::rental_repository::{RentalRepository as RentalRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{Row, postgres::PgRow};

/// PostgreSQLの行データをRentalに変換する
fn map_row_to_rental(row: &PgRow) -> Result<Rental> {
    Ok(Rental {
        rental_id: RentalId::from_uuid(row.try_get("rental_id")?),
        customer_id: CustomerId::from_uuid(row.try_get("customer_id")?),
        movie_id: MovieId::from_uuid(row.try_get("movie_id")?),
        movie_title: row.try_get("movie_title")?,
        movie_category_name: row.try_get("movie_category_name")?,
        rental_start: row.try_get("rental_start")?,
        rental_days: row.try_get("rental_days")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// RentalRepositoryのPostgreSQL実装
pub struct RentalRepository;

impl RentalRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepositoryTrait<PgTransaction> for RentalRepository {
    /// レンタルを作成し、保存された行を返す
    ///
    /// IDはここで採番し、監査情報はデータベースの現在時刻を使う。
    async fn create_rental(
        &self,
        trx: &mut PgTransaction,
        data: CreateRentalData,
    ) -> Result<Rental> {
        let row = sqlx::query(
            r#"
            INSERT INTO rentals (
                rental_id,
                customer_id,
                movie_id,
                movie_title,
                movie_category_name,
                rental_start,
                rental_days,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING
                rental_id,
                customer_id,
                movie_id,
                movie_title,
                movie_category_name,
                rental_start,
                rental_days,
                created_at,
                updated_at
            "#,
        )
        .bind(RentalId::new().value())
        .bind(data.customer_id.value())
        .bind(data.movie_id.value())
        .bind(&data.movie_title)
        .bind(&data.movie_category_name)
        .bind(data.rental_start)
        .bind(data.rental_days)
        .fetch_one(&mut **trx)
        .await?;

        map_row_to_rental(&row)
    }

    async fn get_rental_by_id(
        &self,
        trx: &mut PgTransaction,
        rental_id: RentalId,
    ) -> Result<Option<Rental>> {
        let row = sqlx::query(
            r#"
            SELECT
                rental_id,
                customer_id,
                movie_id,
                movie_title,
                movie_category_name,
                rental_start,
                rental_days,
                created_at,
                updated_at
            FROM rentals
            WHERE rental_id = $1
            "#,
        )
        .bind(rental_id.value())
        .fetch_optional(&mut **trx)
        .await?;

        row.as_ref().map(map_row_to_rental).transpose()
    }
}
