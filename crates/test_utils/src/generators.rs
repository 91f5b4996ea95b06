//! Property-Based Test Generators
//!
//! Proptest strategies for generating extraction payloads, including the
//! malformed shapes the engine must absorb without failing.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use domain_adjudication::ExtractedClaimData;

/// Strategy for extraction confidence scores in [0, 1]
pub fn confidence_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=100u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for non-negative monetary amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for `YYYY-MM-DD` date strings across several policy years
pub fn service_date_strategy() -> impl Strategy<Value = String> {
    (2022i32..2026i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Strategy for line-item descriptions, some of which hit the standard
/// exclusion keywords
pub fn item_description_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("consultation".to_string()),
        Just("blood test".to_string()),
        Just("x-ray".to_string()),
        Just("cosmetic surgery".to_string()),
        Just("vitamin supplement".to_string()),
        "[a-z]{3,12}( [a-z]{3,12})?",
    ]
}

/// Strategy for well-formed line-item records
pub fn line_item_strategy() -> impl Strategy<Value = Value> {
    (item_description_strategy(), 0i64..1_000_000i64)
        .prop_map(|(item, cost)| json!({"item": item, "cost": Decimal::new(cost, 2)}))
}

/// Strategy for arbitrary junk that may appear in a line-item list
pub fn malformed_line_item_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        Just(json!("just a string")),
        Just(json!(42)),
        Just(json!([1, 2, 3])),
        Just(json!({"item": "tests", "cost": "free"})),
        Just(json!({"cost": true})),
    ]
}

/// Strategy for line-item lists mixing valid and malformed entries
pub fn line_items_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(
        prop_oneof![
            4 => line_item_strategy(),
            1 => malformed_line_item_strategy(),
        ],
        0..8,
    )
}

/// Strategy for whole extraction payloads with every field independently
/// present or absent
pub fn claim_data_strategy() -> impl Strategy<Value = ExtractedClaimData> {
    (
        prop::option::of(Just("Asha Rao".to_string())),
        prop::option::of("[A-Za-z ]{0,40}"),
        prop::option::of(prop_oneof![
            service_date_strategy(),
            Just("garbage".to_string()),
            Just("10/03/2024".to_string()),
        ]),
        prop::option::of(amount_strategy()),
        prop::option::of(prop_oneof![
            Just("MH/12345".to_string()),
            Just(String::new()),
        ]),
        prop::option::of(confidence_strategy()),
        line_items_strategy(),
    )
        .prop_map(
            |(
                patient_name,
                diagnosis,
                date_of_service,
                total_claimed_amount,
                doctor_reg_no,
                confidence_score,
                line_items,
            )| ExtractedClaimData {
                patient_name,
                diagnosis,
                date_of_service,
                total_claimed_amount,
                doctor_reg_no,
                confidence_score,
                line_items,
            },
        )
}
