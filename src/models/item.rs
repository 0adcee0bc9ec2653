use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::common::{CustomFieldValue, Tag};
use crate::proto::items::Item;
use crate::validation::{
    optional_text, parse_non_negative, parse_required_non_negative, required_text, FieldErrors,
};

/// Columns selected for [`ItemModel`].
pub const ITEM_COLUMNS: &str = "id, name, quantity, minimum_stock, model_no, description, \
     location, has_assets, created_at, updated_at";

pub const NAME_MAX: usize = 100;
pub const MODEL_NO_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;
pub const LOCATION_MAX: usize = 100;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemModel {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub minimum_stock: i64,
    pub model_no: String,
    pub description: String,
    pub location: String,
    pub has_assets: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemModel {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.minimum_stock
    }

    pub fn to_proto(&self, tags: Vec<Tag>, custom_fields: Vec<CustomFieldValue>) -> Item {
        Item {
            id: self.id,
            name: self.name.clone(),
            quantity: self.quantity,
            minimum_stock: self.minimum_stock,
            model_no: self.model_no.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            has_assets: self.has_assets,
            tags,
            custom_fields,
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}

impl TagModel {
    pub fn to_proto(&self) -> Tag {
        Tag {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Validated item attributes shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i64,
    pub minimum_stock: i64,
    pub model_no: String,
    pub description: String,
    pub location: String,
    pub tags: Vec<String>,
}

/// Raw form input for an item.
#[derive(Debug, Clone, Copy)]
pub struct ItemInput<'a> {
    pub name: &'a str,
    pub quantity: &'a str,
    pub minimum_stock: &'a str,
    pub model_no: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub tags: &'a [String],
}

impl ItemInput<'_> {
    pub fn validate(&self) -> Result<ItemFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.collect(required_text("name", self.name, NAME_MAX));
        let quantity = errors.collect(parse_required_non_negative("quantity", self.quantity));
        let minimum_stock = errors.collect(parse_non_negative("minimum_stock", self.minimum_stock));
        let model_no = errors.collect(optional_text("model_no", self.model_no, MODEL_NO_MAX));
        let description =
            errors.collect(optional_text("description", self.description, DESCRIPTION_MAX));
        let location = errors.collect(optional_text("location", self.location, LOCATION_MAX));
        let tags = errors.collect(normalize_tags(self.tags));

        match (name, quantity, minimum_stock, model_no, description, location, tags) {
            (
                Some(name),
                Some(quantity),
                Some(minimum_stock),
                Some(model_no),
                Some(description),
                Some(location),
                Some(tags),
            ) if errors.is_empty() => Ok(ItemFields {
                name,
                quantity,
                minimum_stock,
                model_no,
                description,
                location,
                tags,
            }),
            _ => Err(errors),
        }
    }
}

/// Trims, drops blanks and de-duplicates tag names, keeping first-seen order.
pub fn normalize_tags(raw: &[String]) -> Result<Vec<String>, FieldErrors> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if tag.chars().count() > NAME_MAX {
            return Err(FieldErrors::single(
                "tags",
                format!("Tag names may not exceed {} characters.", NAME_MAX),
            ));
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    Ok(tags)
}

pub fn duplicate_name_error() -> FieldErrors {
    FieldErrors::single("name", "An item with this name already exists.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(name: &'a str, quantity: &'a str, tags: &'a [String]) -> ItemInput<'a> {
        ItemInput {
            name,
            quantity,
            minimum_stock: "",
            model_no: "",
            description: "",
            location: "",
            tags,
        }
    }

    #[test]
    fn test_validate_accepts_valid_item() {
        let tags = vec!["lab".to_string(), " lab ".to_string(), "".to_string(), "cable".to_string()];
        let fields = input(" Oscilloscope ", "4", &tags).validate().unwrap();
        assert_eq!(fields.name, "Oscilloscope");
        assert_eq!(fields.quantity, 4);
        assert_eq!(fields.minimum_stock, 0);
        assert_eq!(fields.tags, vec!["lab", "cable"]);
    }

    #[test]
    fn test_validate_reports_every_bad_field() {
        let err = input("", "-3", &[]).validate().unwrap_err();
        assert!(err.contains("name"));
        assert!(err.contains("quantity"));

        let err = input("Multimeter", "many", &[]).validate().unwrap_err();
        assert!(!err.contains("name"));
        assert!(err.contains("quantity"));
    }

    #[test]
    fn test_validate_requires_quantity() {
        let err = input("Cable", "", &[]).validate().unwrap_err();
        assert_eq!(err.get("quantity").unwrap(), ["This field is required."]);
        assert!(!err.contains("minimum_stock"));

        let fields = input("Cable", "0", &[]).validate().unwrap();
        assert_eq!(fields.quantity, 0);
    }

    #[test]
    fn test_duplicate_name_error_is_keyed_on_name() {
        let err = duplicate_name_error();
        assert_eq!(err.get("name").unwrap(), ["An item with this name already exists."]);
    }

    #[test]
    fn test_validate_rejects_long_description() {
        let description = "d".repeat(DESCRIPTION_MAX + 1);
        let mut raw = input("Multimeter", "1", &[]);
        raw.description = &description;
        assert!(raw.validate().unwrap_err().contains("description"));
    }

    #[test]
    fn test_low_stock() {
        let now = Utc::now();
        let mut item = ItemModel {
            id: 1,
            name: "Fuse".to_string(),
            quantity: 2,
            minimum_stock: 5,
            model_no: String::new(),
            description: String::new(),
            location: String::new(),
            has_assets: false,
            created_at: now,
            updated_at: now,
        };
        assert!(item.is_low_stock());
        item.quantity = 5;
        assert!(!item.is_low_stock());
    }
}
