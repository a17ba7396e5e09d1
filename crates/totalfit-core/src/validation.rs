// ABOUTME: Schema validation that coerces raw JSON payloads into typed request records
// ABOUTME: Reports the offending field path and violated constraint on the first failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! # Schema Validator
//!
//! Payloads are parsed into a `serde_json::Value` first and then walked field by
//! field, so every rejection can name the exact path that failed
//! (`performance_data[3].rpe`) together with the rule it broke. Out-of-range
//! values are rejected, never clamped. Unknown fields are ignored and `null` is
//! treated the same as an absent field.

use crate::constants::limits::{
    MAX_AVAILABILITY_DAYS, MAX_HEART_RATE, MAX_RPE, MIN_AVAILABILITY_DAYS, MIN_HEART_RATE, MIN_RPE,
};
use crate::errors::ValidationError;
use crate::models::{
    AnalyzePerformanceRequest, CareerRecommendationRequest, GeneratePlanRequest, MetricPoint,
    PredictInjuryRequest,
};
use serde_json::{Map, Value};

/// Largest float magnitude accepted as an integer without precision loss
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A typed record that can be validated out of raw JSON
pub trait Schema: Sized {
    /// Validate `value` and convert it into `Self`
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field
    fn from_json(value: &Value) -> Result<Self, ValidationError>;

    /// Parse and validate a raw request body
    ///
    /// # Errors
    ///
    /// Returns a malformed-body error for invalid JSON, otherwise whatever
    /// [`Schema::from_json`] reports
    fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| ValidationError::malformed("body", format!("invalid JSON: {e}")))?;
        Self::from_json(&value)
    }
}

/// Field accessor over one JSON object, tracking its path for error messages
struct Fields<'a> {
    prefix: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self, ValidationError> {
        value.as_object().map_or_else(
            || Err(ValidationError::malformed("body", "must be a JSON object")),
            |map| {
                Ok(Self {
                    prefix: String::new(),
                    map,
                })
            },
        )
    }

    fn nested(path: String, value: &'a Value) -> Result<Self, ValidationError> {
        match value.as_object() {
            Some(map) => Ok(Self { prefix: path, map }),
            None => Err(ValidationError::wrong_type(path, "an object")),
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.prefix)
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    fn required_string(&self, name: &str) -> Result<String, ValidationError> {
        self.optional_string(name)?
            .ok_or_else(|| ValidationError::missing(self.path(name)))
    }

    fn optional_string(&self, name: &str) -> Result<Option<String>, ValidationError> {
        self.get(name)
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ValidationError::wrong_type(self.path(name), "a string"))
            })
            .transpose()
    }

    fn optional_string_list(&self, name: &str) -> Result<Option<Vec<String>>, ValidationError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::wrong_type(self.path(name), "an array of strings"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    ValidationError::wrong_type(format!("{}[{index}]", self.path(name)), "a string")
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn required_array(&self, name: &str) -> Result<&'a Vec<Value>, ValidationError> {
        let value = self
            .get(name)
            .ok_or_else(|| ValidationError::missing(self.path(name)))?;
        value
            .as_array()
            .ok_or_else(|| ValidationError::wrong_type(self.path(name), "an array"))
    }

    fn optional_integer(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        self.get(name)
            .map(|value| {
                as_integer(value)
                    .ok_or_else(|| ValidationError::wrong_type(self.path(name), "an integer"))
            })
            .transpose()
    }

    fn required_integer(&self, name: &str) -> Result<i64, ValidationError> {
        self.optional_integer(name)?
            .ok_or_else(|| ValidationError::missing(self.path(name)))
    }

    fn optional_number(&self, name: &str) -> Result<Option<f64>, ValidationError> {
        self.get(name)
            .map(|value| {
                value
                    .as_f64()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| ValidationError::wrong_type(self.path(name), "a number"))
            })
            .transpose()
    }

    /// Non-negative integer field, accepting the full `u64` range
    fn optional_count(&self, name: &str) -> Result<Option<u64>, ValidationError> {
        self.get(name)
            .map(|value| {
                if let Some(n) = value.as_u64() {
                    return Ok(n);
                }
                let n = as_integer(value)
                    .ok_or_else(|| ValidationError::wrong_type(self.path(name), "an integer"))?;
                u64::try_from(n).map_err(|_| {
                    ValidationError::out_of_range(
                        self.path(name),
                        "must be greater than or equal to 0",
                    )
                })
            })
            .transpose()
    }
}

/// Integers arrive either as JSON integers or as floats with no fractional part
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() <= MAX_EXACT_FLOAT_INTEGER)
            .map(|n| n as i64)
    })
}

fn metric_point(fields: &Fields<'_>) -> Result<MetricPoint, ValidationError> {
    let date = fields.required_string("date")?;
    let steps = fields.optional_count("steps")?;
    let calories = fields.optional_count("calories")?;

    let heart_rate = fields
        .optional_integer("heart_rate")?
        .map(|bpm| {
            if (MIN_HEART_RATE..=MAX_HEART_RATE).contains(&bpm) {
                u16::try_from(bpm).map_err(|_| heart_rate_range_error(fields))
            } else {
                Err(heart_rate_range_error(fields))
            }
        })
        .transpose()?;

    let rpe = fields
        .optional_number("rpe")?
        .map(|rpe| {
            if (MIN_RPE..=MAX_RPE).contains(&rpe) {
                Ok(rpe)
            } else {
                Err(ValidationError::out_of_range(
                    fields.path("rpe"),
                    format!("must be between {MIN_RPE} and {MAX_RPE}"),
                ))
            }
        })
        .transpose()?;

    Ok(MetricPoint {
        date,
        steps,
        heart_rate,
        calories,
        rpe,
    })
}

fn heart_rate_range_error(fields: &Fields<'_>) -> ValidationError {
    ValidationError::out_of_range(
        fields.path("heart_rate"),
        format!("must be between {MIN_HEART_RATE} and {MAX_HEART_RATE}"),
    )
}

fn metric_points(fields: &Fields<'_>, name: &str) -> Result<Vec<MetricPoint>, ValidationError> {
    let base = fields.path(name);
    fields
        .required_array(name)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let point = Fields::nested(format!("{base}[{index}]"), item)?;
            metric_point(&point)
        })
        .collect()
}

impl Schema for MetricPoint {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        metric_point(&Fields::root(value)?)
    }
}

impl Schema for PredictInjuryRequest {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::root(value)?;
        Ok(Self {
            athlete_id: fields.required_string("athlete_id")?,
            recent_metrics: metric_points(&fields, "recent_metrics")?,
        })
    }
}

impl Schema for AnalyzePerformanceRequest {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::root(value)?;
        Ok(Self {
            athlete_id: fields.required_string("athlete_id")?,
            metrics: metric_points(&fields, "metrics")?,
        })
    }
}

impl Schema for GeneratePlanRequest {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::root(value)?;
        let athlete_id = fields.required_string("athlete_id")?;
        let goal = fields.required_string("goal")?;

        let days = fields.required_integer("availability_days")?;
        let availability_days = u8::try_from(days)
            .ok()
            .filter(|_| (MIN_AVAILABILITY_DAYS..=MAX_AVAILABILITY_DAYS).contains(&days))
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "availability_days",
                    format!("must be between {MIN_AVAILABILITY_DAYS} and {MAX_AVAILABILITY_DAYS}"),
                )
            })?;

        Ok(Self {
            athlete_id,
            goal,
            availability_days,
            preferences: fields.optional_string_list("preferences")?,
        })
    }
}

impl Schema for CareerRecommendationRequest {
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::root(value)?;
        Ok(Self {
            athlete_id: fields.required_string("athlete_id")?,
            performance_data: metric_points(&fields, "performance_data")?,
            current_role: fields.optional_string("current_role")?,
            career_goals: fields.optional_string_list("career_goals")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationKind;
    use serde_json::json;

    #[test]
    fn test_metric_point_optional_fields_stay_absent() {
        let point = MetricPoint::from_json(&json!({ "date": "2025-03-01" })).unwrap();
        assert_eq!(point, MetricPoint::new("2025-03-01"));
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let point =
            MetricPoint::from_json(&json!({ "date": "d", "steps": null, "rpe": null })).unwrap();
        assert_eq!(point.steps, None);
        assert_eq!(point.rpe, None);
    }

    #[test]
    fn test_measured_zero_is_kept() {
        let point = MetricPoint::from_json(&json!({ "date": "d", "steps": 0, "rpe": 0 })).unwrap();
        assert_eq!(point.steps, Some(0));
        assert_eq!(point.rpe, Some(0.0));
    }

    #[test]
    fn test_counts_accept_values_above_i64_max() {
        let point = MetricPoint::from_json(&json!({
            "date": "d",
            "steps": u64::MAX,
            "calories": 9_223_372_036_854_775_808_u64,
        }))
        .unwrap();
        assert_eq!(point.steps, Some(u64::MAX));
        assert_eq!(point.calories, Some(9_223_372_036_854_775_808));
    }

    #[test]
    fn test_negative_count_is_out_of_range() {
        let err = MetricPoint::from_json(&json!({ "date": "d", "steps": -1 })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::OutOfRange);
    }

    #[test]
    fn test_heart_rate_bounds_are_inclusive() {
        assert!(MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 20 })).is_ok());
        assert!(MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 220 })).is_ok());

        let low = MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 19 })).unwrap_err();
        assert_eq!(low.kind, ValidationKind::OutOfRange);
        assert_eq!(low.field, "heart_rate");

        let high = MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 221 })).unwrap_err();
        assert_eq!(high.constraint, "must be between 20 and 220");
    }

    #[test]
    fn test_rpe_bounds() {
        assert!(MetricPoint::from_json(&json!({ "date": "d", "rpe": 10.0 })).is_ok());
        let err = MetricPoint::from_json(&json!({ "date": "d", "rpe": 10.5 })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::OutOfRange);
        assert_eq!(err.field, "rpe");
        let err = MetricPoint::from_json(&json!({ "date": "d", "rpe": -0.1 })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::OutOfRange);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let err = MetricPoint::from_json(&json!({ "date": "d", "steps": -1 })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::OutOfRange);
        assert_eq!(err.field, "steps");
        let err = MetricPoint::from_json(&json!({ "date": "d", "calories": -20 })).unwrap_err();
        assert_eq!(err.field, "calories");
    }

    #[test]
    fn test_integral_float_coerces_but_fraction_does_not() {
        let point = MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 72.0 })).unwrap();
        assert_eq!(point.heart_rate, Some(72));

        let err = MetricPoint::from_json(&json!({ "date": "d", "heart_rate": 72.5 })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::WrongType);
        assert_eq!(err.constraint, "must be an integer");
    }

    #[test]
    fn test_wrong_type_names_field() {
        let err = MetricPoint::from_json(&json!({ "date": "d", "steps": "many" })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::WrongType);
        assert_eq!(err.field, "steps");
    }

    #[test]
    fn test_nested_path_in_list() {
        let body = json!({
            "athlete_id": "a1",
            "recent_metrics": [
                { "date": "d1", "heart_rate": 70 },
                { "date": "d2" },
                { "date": "d3", "heart_rate": 300 }
            ]
        });
        let err = PredictInjuryRequest::from_json(&body).unwrap_err();
        assert_eq!(err.field, "recent_metrics[2].heart_rate");
    }

    #[test]
    fn test_missing_required_fields() {
        let err = PredictInjuryRequest::from_json(&json!({ "recent_metrics": [] })).unwrap_err();
        assert_eq!(err.kind, ValidationKind::Missing);
        assert_eq!(err.field, "athlete_id");

        let err = AnalyzePerformanceRequest::from_json(&json!({ "athlete_id": "a" })).unwrap_err();
        assert_eq!(err.field, "metrics");

        let err = CareerRecommendationRequest::from_json(&json!({
            "athlete_id": "a",
            "performance_data": [{ "steps": 100 }]
        }))
        .unwrap_err();
        assert_eq!(err.field, "performance_data[0].date");
    }

    #[test]
    fn test_availability_days_range() {
        for days in [0, 8, -3] {
            let err = GeneratePlanRequest::from_json(&json!({
                "athlete_id": "a",
                "goal": "5k",
                "availability_days": days
            }))
            .unwrap_err();
            assert_eq!(err.kind, ValidationKind::OutOfRange);
            assert_eq!(err.field, "availability_days");
        }

        let request = GeneratePlanRequest::from_json(&json!({
            "athlete_id": "a",
            "goal": "5k",
            "availability_days": 7,
            "preferences": ["morning"]
        }))
        .unwrap();
        assert_eq!(request.availability_days, 7);
        assert_eq!(request.preferences, Some(vec!["morning".to_owned()]));
    }

    #[test]
    fn test_string_list_element_type() {
        let err = CareerRecommendationRequest::from_json(&json!({
            "athlete_id": "a",
            "performance_data": [],
            "career_goals": ["coach", 7]
        }))
        .unwrap_err();
        assert_eq!(err.field, "career_goals[1]");
    }

    #[test]
    fn test_malformed_bodies() {
        let err = PredictInjuryRequest::from_slice(b"{not json").unwrap_err();
        assert_eq!(err.kind, ValidationKind::Malformed);
        assert_eq!(err.field, "body");

        let err = PredictInjuryRequest::from_slice(b"[1, 2]").unwrap_err();
        assert_eq!(err.kind, ValidationKind::Malformed);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let request = AnalyzePerformanceRequest::from_json(&json!({
            "athlete_id": "a",
            "metrics": [{ "date": "d", "vo2max": 55 }],
            "source": "watch"
        }))
        .unwrap();
        assert_eq!(request.metrics.len(), 1);
    }
}
