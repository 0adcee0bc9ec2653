use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::common::{self, custom_field_value, CustomFieldValue};
use crate::proto::fields::CustomField;
use crate::validation::FieldErrors;

/// Longest accepted single-line value; matches the `short_text` column.
pub const SHORT_TEXT_MAX: usize = 200;

/// Declared type of a custom field. Stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    SingleLine,
    MultiLine,
    Integer,
    Float,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::SingleLine,
        FieldType::MultiLine,
        FieldType::Integer,
        FieldType::Float,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FieldType::SingleLine => "S",
            FieldType::MultiLine => "L",
            FieldType::Integer => "I",
            FieldType::Float => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldType::SingleLine => "single-line text",
            FieldType::MultiLine => "multi-line text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
        }
    }

    /// The storage column that is active for this type.
    pub fn column(self) -> &'static str {
        match self {
            FieldType::SingleLine => "short_text",
            FieldType::MultiLine => "long_text",
            FieldType::Integer => "integer_value",
            FieldType::Float => "float_value",
        }
    }

    pub fn from_proto(value: i32) -> Option<Self> {
        match common::FieldType::try_from(value).ok()? {
            common::FieldType::SingleLine => Some(FieldType::SingleLine),
            common::FieldType::MultiLine => Some(FieldType::MultiLine),
            common::FieldType::Integer => Some(FieldType::Integer),
            common::FieldType::Float => Some(FieldType::Float),
            common::FieldType::Unspecified => None,
        }
    }

    pub fn to_proto(self) -> common::FieldType {
        match self {
            FieldType::SingleLine => common::FieldType::SingleLine,
            FieldType::MultiLine => common::FieldType::MultiLine,
            FieldType::Integer => common::FieldType::Integer,
            FieldType::Float => common::FieldType::Float,
        }
    }

    /// Coerces raw form input to this type. Blank input clears the value.
    pub fn parse_value(self, field_name: &str, raw: &str) -> Result<Option<FieldValue>, FieldErrors> {
        let mismatch = || {
            FieldErrors::single(
                field_name,
                format!("Expected a value of type {} for field '{}'.", self.label(), field_name),
            )
        };

        match self {
            FieldType::SingleLine => {
                let text = raw.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                if text.contains('\n') {
                    return Err(mismatch());
                }
                if text.chars().count() > SHORT_TEXT_MAX {
                    return Err(FieldErrors::single(
                        field_name,
                        format!("Ensure this field has no more than {} characters.", SHORT_TEXT_MAX),
                    ));
                }
                Ok(Some(FieldValue::SingleLine(text.to_string())))
            }
            FieldType::MultiLine => {
                if raw.trim().is_empty() {
                    return Ok(None);
                }
                Ok(Some(FieldValue::MultiLine(raw.to_string())))
            }
            FieldType::Integer => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                raw.parse::<i64>()
                    .map(|n| Some(FieldValue::Integer(n)))
                    .map_err(|_| mismatch())
            }
            FieldType::Float => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                match raw.parse::<f64>() {
                    Ok(f) if f.is_finite() => Ok(Some(FieldValue::Float(f))),
                    _ => Err(mismatch()),
                }
            }
        }
    }
}

/// A custom value tagged with the type it was validated against.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    SingleLine(String),
    MultiLine(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::SingleLine(_) => FieldType::SingleLine,
            FieldValue::MultiLine(_) => FieldType::MultiLine,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Float(_) => FieldType::Float,
        }
    }

    pub fn to_proto(&self) -> custom_field_value::Value {
        match self {
            FieldValue::SingleLine(s) | FieldValue::MultiLine(s) => {
                custom_field_value::Value::TextValue(s.clone())
            }
            FieldValue::Integer(n) => custom_field_value::Value::IntValue(*n),
            FieldValue::Float(f) => custom_field_value::Value::FloatValue(*f),
        }
    }
}

/// The four storage columns of a custom value row. Only the column matching
/// the field type is ever read or written.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct TypedColumns {
    pub short_text: Option<String>,
    pub long_text: Option<String>,
    pub integer_value: Option<i64>,
    pub float_value: Option<f64>,
}

impl TypedColumns {
    pub fn get(&self, field_type: FieldType) -> Option<FieldValue> {
        match field_type {
            FieldType::SingleLine => self.short_text.clone().map(FieldValue::SingleLine),
            FieldType::MultiLine => self.long_text.clone().map(FieldValue::MultiLine),
            FieldType::Integer => self.integer_value.map(FieldValue::Integer),
            FieldType::Float => self.float_value.map(FieldValue::Float),
        }
    }

    /// Writes `value` into the column for `field_type`, leaving the others as
    /// they are. `None` clears the active column.
    pub fn set(
        &mut self,
        field_name: &str,
        field_type: FieldType,
        value: Option<FieldValue>,
    ) -> Result<(), FieldErrors> {
        match (field_type, value) {
            (FieldType::SingleLine, None) => self.short_text = None,
            (FieldType::MultiLine, None) => self.long_text = None,
            (FieldType::Integer, None) => self.integer_value = None,
            (FieldType::Float, None) => self.float_value = None,
            (FieldType::SingleLine, Some(FieldValue::SingleLine(s))) => self.short_text = Some(s),
            (FieldType::MultiLine, Some(FieldValue::MultiLine(s))) => self.long_text = Some(s),
            (FieldType::Integer, Some(FieldValue::Integer(n))) => self.integer_value = Some(n),
            (FieldType::Float, Some(FieldValue::Float(f))) => self.float_value = Some(f),
            (expected, Some(_)) => {
                return Err(FieldErrors::single(
                    field_name,
                    format!(
                        "Expected a value of type {} for field '{}'.",
                        expected.label(),
                        field_name
                    ),
                ))
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CustomFieldModel {
    pub id: i64,
    pub name: String,
    pub field_type: String,
    pub private: bool,
    pub asset_tracked: bool,
}

impl CustomFieldModel {
    pub fn kind(&self) -> Option<FieldType> {
        FieldType::from_code(&self.field_type)
    }

    /// The private flag is only exposed to staff.
    pub fn to_proto(&self, is_staff: bool) -> CustomField {
        CustomField {
            id: self.id,
            name: self.name.clone(),
            field_type: self
                .kind()
                .map(FieldType::to_proto)
                .unwrap_or(common::FieldType::Unspecified) as i32,
            private: is_staff.then_some(self.private),
            asset_tracked: self.asset_tracked,
        }
    }
}

/// A field joined with its (possibly absent) value for one item or asset.
#[derive(Debug, Clone, FromRow)]
pub struct CustomValueRow {
    pub field_id: i64,
    pub name: String,
    pub field_type: String,
    pub private: bool,
    #[sqlx(flatten)]
    pub columns: TypedColumns,
}

impl CustomValueRow {
    pub fn value(&self) -> Option<FieldValue> {
        match FieldType::from_code(&self.field_type) {
            Some(field_type) => self.columns.get(field_type),
            None => {
                tracing::warn!(
                    "Custom field {} has unknown type code '{}'",
                    self.name,
                    self.field_type
                );
                None
            }
        }
    }

    pub fn to_proto(&self, is_staff: bool) -> CustomFieldValue {
        CustomFieldValue {
            field_id: self.field_id,
            name: self.name.clone(),
            field_type: FieldType::from_code(&self.field_type)
                .map(FieldType::to_proto)
                .unwrap_or(common::FieldType::Unspecified) as i32,
            private: is_staff.then_some(self.private),
            value: self.value().map(|v| v.to_proto()),
        }
    }
}

/// Custom values as seen by the caller: private fields are dropped for
/// non-staff callers and annotated with their flag for staff.
pub fn visible_values(rows: &[CustomValueRow], is_staff: bool) -> Vec<CustomFieldValue> {
    rows.iter()
        .filter(|row| is_staff || !row.private)
        .map(|row| row.to_proto(is_staff))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, code: &str, private: bool, columns: TypedColumns) -> CustomValueRow {
        CustomValueRow {
            field_id: 1,
            name: name.to_string(),
            field_type: code.to_string(),
            private,
            columns,
        }
    }

    #[test]
    fn test_field_type_codes_roundtrip() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::from_code(t.code()), Some(t));
            assert_eq!(FieldType::from_proto(t.to_proto() as i32), Some(t));
        }
        assert_eq!(FieldType::from_code("X"), None);
        assert_eq!(FieldType::from_proto(0), None);
        assert_eq!(FieldType::from_proto(42), None);
    }

    #[test]
    fn test_parse_value_coerces_by_type() {
        assert_eq!(
            FieldType::Integer.parse_value("count", " 42 ").unwrap(),
            Some(FieldValue::Integer(42))
        );
        assert_eq!(
            FieldType::Float.parse_value("weight", "2.5").unwrap(),
            Some(FieldValue::Float(2.5))
        );
        assert_eq!(
            FieldType::MultiLine.parse_value("notes", "a\nb").unwrap(),
            Some(FieldValue::MultiLine("a\nb".to_string()))
        );
        assert_eq!(FieldType::Integer.parse_value("count", "").unwrap(), None);
    }

    #[test]
    fn test_parse_value_rejects_wrong_type() {
        let err = FieldType::Integer.parse_value("count", "4.2").unwrap_err();
        assert_eq!(
            err.get("count").unwrap(),
            ["Expected a value of type integer for field 'count'."]
        );
        assert!(FieldType::Float.parse_value("weight", "heavy").is_err());
        assert!(FieldType::Float.parse_value("weight", "NaN").is_err());
        assert!(FieldType::SingleLine.parse_value("label", "two\nlines").is_err());
        let long = "x".repeat(SHORT_TEXT_MAX + 1);
        assert!(FieldType::SingleLine.parse_value("label", &long).is_err());
    }

    #[test]
    fn test_get_reads_only_the_declared_column() {
        let columns = TypedColumns {
            short_text: Some("stale".to_string()),
            long_text: None,
            integer_value: Some(7),
            float_value: Some(1.5),
        };
        assert_eq!(columns.get(FieldType::Integer), Some(FieldValue::Integer(7)));
        assert_eq!(columns.get(FieldType::Float), Some(FieldValue::Float(1.5)));
        assert_eq!(columns.get(FieldType::MultiLine), None);
    }

    #[test]
    fn test_set_leaves_other_columns_untouched() {
        let mut columns = TypedColumns {
            short_text: Some("keep".to_string()),
            long_text: Some("keep too".to_string()),
            integer_value: None,
            float_value: Some(9.0),
        };
        columns
            .set("count", FieldType::Integer, Some(FieldValue::Integer(3)))
            .unwrap();
        assert_eq!(columns.integer_value, Some(3));
        assert_eq!(columns.short_text.as_deref(), Some("keep"));
        assert_eq!(columns.long_text.as_deref(), Some("keep too"));
        assert_eq!(columns.float_value, Some(9.0));

        columns.set("count", FieldType::Integer, None).unwrap();
        assert_eq!(columns.integer_value, None);
        assert_eq!(columns.float_value, Some(9.0));
    }

    #[test]
    fn test_set_rejects_mismatched_value() {
        let mut columns = TypedColumns::default();
        let err = columns
            .set("count", FieldType::Integer, Some(FieldValue::Float(1.0)))
            .unwrap_err();
        assert!(err.contains("count"));
        assert_eq!(columns, TypedColumns::default());
    }

    #[test]
    fn test_visible_values_hides_private_fields_from_non_staff() {
        let rows = vec![
            row("color", "S", false, TypedColumns {
                short_text: Some("red".to_string()),
                ..Default::default()
            }),
            row("cost", "F", true, TypedColumns {
                float_value: Some(3.25),
                ..Default::default()
            }),
        ];

        let public = visible_values(&rows, false);
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "color");
        assert_eq!(public[0].private, None);

        let staff = visible_values(&rows, true);
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[1].private, Some(true));
        assert_eq!(
            staff[1].value,
            Some(custom_field_value::Value::FloatValue(3.25))
        );
    }

    #[test]
    fn test_unknown_type_code_has_no_value() {
        let r = row("odd", "Z", false, TypedColumns {
            short_text: Some("x".to_string()),
            ..Default::default()
        });
        assert_eq!(r.value(), None);
        assert_eq!(r.to_proto(false).field_type, common::FieldType::Unspecified as i32);
    }
}
