use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomerId, MovieId, RentalId};

/// 1日あたりのミリ秒数
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Rental集約 - 1人の顧客による1本の映画の1回のレンタル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    // 識別子
    pub rental_id: RentalId,

    // 他の集約への参照
    pub customer_id: CustomerId,
    pub movie_id: MovieId,

    // レンタル時点の映画情報（非正規化）
    pub movie_title: String,
    pub movie_category_name: String,

    // レンタル期間
    pub rental_start: DateTime<Utc>,
    pub rental_days: f64,

    // 監査情報
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// レンタル作成時にリポジトリへ渡すデータ
///
/// IDと監査情報はリポジトリが割り当てる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRentalData {
    pub customer_id: CustomerId,
    pub movie_category_name: String,
    pub movie_id: MovieId,
    pub movie_title: String,
    pub rental_start: DateTime<Utc>,
    pub rental_days: f64,
}

/// 純粋関数：レンタル日数を計算する
///
/// 開始から終了までのミリ秒差を1日のミリ秒数で割った値（小数を含む）。
/// 終了が開始より前でも検証せず、負の値をそのまま返す。
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLISECONDS_PER_DAY
}
