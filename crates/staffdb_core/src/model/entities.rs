//! Entity rows for the staff schema.

use crate::model::decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type TownId = i64;
pub type AddressId = i64;
pub type DepartmentId = i64;
pub type EmployeeId = i64;

/// A town that addresses may point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    pub id: TownId,
    pub name: String,
}

/// A street address, optionally located in a town.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Serialized as `address_text` to match the column name.
    #[serde(rename = "address_text")]
    pub text: String,
    /// `None` when the town is unknown.
    pub town_id: Option<TownId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// An employee row.
///
/// `address_id` may still point at an address that a caller intends to
/// delete; the store rejects such deletes instead of nulling the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Decimal,
    pub department_id: DepartmentId,
    pub address_id: Option<AddressId>,
}

impl Employee {
    /// Returns `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
