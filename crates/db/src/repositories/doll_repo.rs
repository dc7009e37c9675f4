//! Repository for the `dolls` table.
//!
//! Sole owner of the storage date encoding: `buy_date` is persisted as
//! `YYYY-MM-DD HH:MM:SS` text (second precision, no offset), while every
//! caller above this layer sees a structured [`Timestamp`].

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::gateway::{Gateway, StoreError};
use crate::models::doll::{CreateDoll, Doll};
use crate::{DbId, Timestamp};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, animal_type, buy_date";

/// Textual form `buy_date` takes in the store.
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw row as the store returns it, before the date is decoded.
#[derive(FromRow)]
struct DollRow {
    id: DbId,
    name: String,
    price: f64,
    animal_type: String,
    buy_date: String,
}

impl DollRow {
    fn into_doll(self) -> Doll {
        Doll {
            id: self.id,
            name: self.name,
            price: self.price,
            animal_type: self.animal_type,
            buy_date: decode_buy_date(&self.buy_date),
        }
    }
}

fn encode_buy_date(ts: &Timestamp) -> String {
    ts.naive_utc().format(STORAGE_DATE_FORMAT).to_string()
}

/// Decode a stored `buy_date` value.
///
/// A value that does not parse means the store holds data this application
/// cannot represent (encoding drift between store and application). That is
/// systemic corruption, not a per-request failure, so this halts loudly
/// instead of returning an error the caller could downgrade to a 500.
fn decode_buy_date(raw: &str) -> Timestamp {
    match NaiveDateTime::parse_from_str(raw, STORAGE_DATE_FORMAT) {
        Ok(naive) => naive.and_utc(),
        Err(err) => panic!(
            "dolls.buy_date value {raw:?} does not match the storage encoding \
             ({STORAGE_DATE_FORMAT}): {err}"
        ),
    }
}

/// Provides CRUD operations for dolls.
pub struct DollRepo;

impl DollRepo {
    /// Find a doll by id. Zero rows is `Ok(None)`, not a failure.
    pub async fn fetch_one(gw: &Gateway, id: DbId) -> Result<Option<Doll>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dolls WHERE id = $1");
        let row = gw
            .query_one(sqlx::query_as::<_, DollRow>(&query).bind(id))
            .await?;
        Ok(row.map(DollRow::into_doll))
    }

    /// List every doll in store-native order. Callers must not assume a
    /// specific ordering; no sort key is imposed.
    pub async fn fetch_all(gw: &Gateway) -> Result<Vec<Doll>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dolls");
        let rows = gw
            .query_many(sqlx::query_as::<_, DollRow>(&query))
            .await?;
        Ok(rows.into_iter().map(DollRow::into_doll).collect())
    }

    /// Insert a new doll, returning the store-assigned id.
    pub async fn create(gw: &Gateway, input: &CreateDoll) -> Result<DbId, StoreError> {
        let query = "INSERT INTO dolls (name, price, animal_type, buy_date)
             VALUES ($1, $2, $3, $4)
             RETURNING id";
        gw.insert_returning_id(
            sqlx::query_scalar(query)
                .bind(&input.name)
                .bind(input.price)
                .bind(&input.animal_type)
                .bind(encode_buy_date(&input.buy_date)),
        )
        .await
    }

    /// Replace every field of the doll with the given id.
    ///
    /// Unconditional update: replacing an id that does not exist affects
    /// zero rows and still succeeds. Callers needing existence checks must
    /// do their own keyed read.
    pub async fn replace(gw: &Gateway, id: DbId, input: &CreateDoll) -> Result<(), StoreError> {
        let query = "UPDATE dolls
             SET name = $2, price = $3, animal_type = $4, buy_date = $5
             WHERE id = $1";
        gw.exec(
            sqlx::query(query)
                .bind(id)
                .bind(&input.name)
                .bind(input.price)
                .bind(&input.animal_type)
                .bind(encode_buy_date(&input.buy_date)),
        )
        .await?;
        Ok(())
    }

    /// Delete the doll with the given id. Same no-op-on-missing-id
    /// semantics as [`DollRepo::replace`].
    pub async fn remove(gw: &Gateway, id: DbId) -> Result<(), StoreError> {
        gw.exec(sqlx::query("DELETE FROM dolls WHERE id = $1").bind(id))
            .await?;
        Ok(())
    }
}
