//! Employee Model

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::patch::{self, Patch};

/// Employee record
///
/// `salary` is `None` when no salary is recorded; zero is a real salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub salary: Option<i64>,
}

impl Employee {
    /// Merge an update onto this record. Only provided fields change.
    pub fn patched(&self, update: EmployeeUpdate) -> Employee {
        Employee {
            id: self.id,
            name: update.name.merge(self.name.clone()),
            email: update.email.merge(self.email.clone()),
            position: update.position.merge(self.position.clone()),
            salary: update.salary.merge(self.salary),
        }
    }
}

/// Create employee payload
///
/// Required fields are `Option` so a missing key can be reported as a
/// validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "deserialize_salary")]
    pub salary: Option<i64>,
}

impl EmployeeCreate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        salary: Option<i64>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            position: Some(position.into()),
            salary,
        }
    }
}

/// Update employee payload
///
/// Unknown keys (such as an `id` echoed back by a client) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(
        default,
        skip_serializing_if = "Patch::is_omitted",
        deserialize_with = "patch::deserialize_required"
    )]
    pub name: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_omitted",
        deserialize_with = "patch::deserialize_required"
    )]
    pub email: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_omitted",
        deserialize_with = "patch::deserialize_required"
    )]
    pub position: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_omitted",
        deserialize_with = "deserialize_salary_patch"
    )]
    pub salary: Patch<Option<i64>>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_omitted()
            && self.email.is_omitted()
            && self.position.is_omitted()
            && self.salary.is_omitted()
    }
}

// =============================================================================
// Salary input
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryError {
    #[error("Salary must be a whole number, got '{0}'")]
    NotAnInteger(String),
}

/// Parse salary text as typed into a form. Blank means "no salary".
pub fn parse_salary(input: &str) -> Result<Option<i64>, SalaryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| SalaryError::NotAnInteger(trimmed.to_string()))
}

/// Accepts an integer, `null`, `""` or a numeric string.
fn deserialize_salary<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SalaryVisitor)
}

fn deserialize_salary_patch<'de, D>(deserializer: D) -> Result<Patch<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_salary(deserializer).map(Patch::Set)
}

struct SalaryVisitor;

impl<'de> Visitor<'de> for SalaryVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer salary, an empty string or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(SalaryVisitor)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::custom(SalaryError::NotAnInteger(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
            Ok(Some(v as i64))
        } else {
            Err(E::custom(SalaryError::NotAnInteger(v.to_string())))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_salary(v).map_err(E::custom)
    }
}
