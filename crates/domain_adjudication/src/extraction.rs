//! Extraction contract and boundary normalization
//!
//! The document extraction collaborator returns a field mapping whose values
//! are best-effort reads of a scanned claim form. Every field is optional and
//! any of them may be malformed; nothing here is allowed to fail. The raw
//! mapping is converted once, at the boundary, into [`ClaimFacts`] so the
//! engine never deals with missing values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured data extracted from a claim document
///
/// This is the wire contract with the extraction service. Absent keys are
/// defaults, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedClaimData {
    pub patient_name: Option<String>,
    pub diagnosis: Option<String>,
    /// Expected format `YYYY-MM-DD`; may be malformed or absent
    pub date_of_service: Option<String>,
    pub total_claimed_amount: Option<Decimal>,
    pub doctor_reg_no: Option<String>,
    /// Extraction self-reported confidence in [0, 1]
    pub confidence_score: Option<Decimal>,
    /// Raw line items; entries that are not well-formed records are skipped
    pub line_items: Vec<Value>,
}

impl ExtractedClaimData {
    /// Builds claim data from a raw extraction mapping, field by field
    ///
    /// A value of the wrong type is treated the same as an absent key. This
    /// never fails, even when `raw` is not an object at all.
    pub fn from_value(raw: &Value) -> Self {
        Self {
            patient_name: string_field(raw, "patient_name"),
            diagnosis: string_field(raw, "diagnosis"),
            date_of_service: string_field(raw, "date_of_service"),
            total_claimed_amount: decimal_field(raw, "total_claimed_amount"),
            doctor_reg_no: string_field(raw, "doctor_reg_no"),
            confidence_score: decimal_field(raw, "confidence_score"),
            line_items: raw
                .get("line_items")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn decimal_field(raw: &Value, key: &str) -> Option<Decimal> {
    raw.get(key)
        .and_then(|v| serde_json::from_value::<Decimal>(v.clone()).ok())
}

/// A single billed line on the claim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub item: String,
    pub cost: Decimal,
}

impl LineItem {
    /// Parses a raw line-item value, returning `None` for anything that is
    /// not a well-formed record with a non-negative cost
    pub fn from_value(raw: &Value) -> Option<Self> {
        if !raw.is_object() {
            return None;
        }
        let item: LineItem = serde_json::from_value(raw.clone()).ok()?;
        if item.cost.is_sign_negative() {
            return None;
        }
        Some(item)
    }
}

/// The service date as read from the document
///
/// Absence and unparseability are distinct outcomes: the waiting-period
/// check is skipped entirely for a missing date, while a present but
/// malformed date routes the claim to manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDate {
    Missing,
    Unparseable,
    On(NaiveDate),
}

impl ServiceDate {
    /// Parses an optional `YYYY-MM-DD` string
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => ServiceDate::Missing,
            Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                Ok(date) => ServiceDate::On(date),
                Err(_) => ServiceDate::Unparseable,
            },
        }
    }
}

/// Normalized view of an extracted claim, consumed by the engine
///
/// All defaults are substituted here: confidence and amounts default to
/// zero, missing strings to empty. The diagnosis is lowercased once for
/// keyword matching; line items keep their original description text so
/// reasons can quote the document verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimFacts {
    pub confidence_score: Decimal,
    pub doctor_reg_no: String,
    pub service_date: ServiceDate,
    pub diagnosis: String,
    pub claimed_amount: Decimal,
    pub line_items: Vec<LineItem>,
}

impl ClaimFacts {
    /// Normalizes extracted data, silently dropping malformed line items
    pub fn from_extracted(data: &ExtractedClaimData) -> Self {
        Self {
            confidence_score: data.confidence_score.unwrap_or_default(),
            doctor_reg_no: data.doctor_reg_no.clone().unwrap_or_default(),
            service_date: ServiceDate::parse(data.date_of_service.as_deref()),
            diagnosis: data
                .diagnosis
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            claimed_amount: data.total_claimed_amount.unwrap_or_default(),
            line_items: data
                .line_items
                .iter()
                .filter_map(LineItem::from_value)
                .collect(),
        }
    }
}
