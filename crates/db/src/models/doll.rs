//! Doll entity model and input DTO.

use serde::{Deserialize, Serialize};

use crate::{DbId, Timestamp};

/// A doll from the `dolls` table.
///
/// `buy_date` serializes as an ISO-8601 timestamp on the wire; the textual
/// form it takes in the store is a repository concern and never leaves
/// that layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doll {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub animal_type: String,
    pub buy_date: Timestamp,
}

/// Client-supplied doll fields, used both for create and for full
/// replacement on update. There is no partial patch; every field is
/// required. An `id` in the payload is ignored (the store assigns ids on
/// create, and update takes the id from the path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoll {
    pub name: String,
    pub price: f64,
    pub animal_type: String,
    pub buy_date: Timestamp,
}
