use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::assets::Asset;
use crate::proto::common::CustomFieldValue;
use crate::validation::FieldErrors;

/// Columns selected for [`AssetModel`]; expects `assets a JOIN items i`.
pub const ASSET_COLUMNS: &str =
    "a.id, a.item_id, i.name AS item_name, a.tag, a.status, a.created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    InStock,
    Loaned,
    Disbursed,
}

impl AssetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::InStock => "in_stock",
            AssetStatus::Loaned => "loaned",
            AssetStatus::Disbursed => "disbursed",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, FieldErrors> {
        match raw.trim() {
            "in_stock" => Ok(AssetStatus::InStock),
            "loaned" => Ok(AssetStatus::Loaned),
            "disbursed" => Ok(AssetStatus::Disbursed),
            other => Err(FieldErrors::single(
                "status",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssetModel {
    pub id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub tag: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl AssetModel {
    pub fn is_in_stock(&self) -> bool {
        self.status == AssetStatus::InStock.as_str()
    }

    /// Only an asset on the shelf may be deleted.
    pub fn check_deletable(&self) -> Result<(), FieldErrors> {
        if self.is_in_stock() {
            return Ok(());
        }
        Err(FieldErrors::single(
            "status",
            format!(
                "Asset {} is {} and cannot be deleted.",
                self.tag,
                self.status.replace('_', " ")
            ),
        ))
    }

    pub fn to_proto(&self, custom_fields: Vec<CustomFieldValue>) -> Asset {
        Asset {
            id: self.id,
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            tag: self.tag.clone(),
            status: self.status.clone(),
            custom_fields,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(AssetStatus::parse("loaned").unwrap(), AssetStatus::Loaned);
        assert_eq!(AssetStatus::parse(" in_stock ").unwrap(), AssetStatus::InStock);
        assert!(AssetStatus::parse("lost").unwrap_err().contains("status"));
    }

    #[test]
    fn test_only_in_stock_assets_are_deletable() {
        let mut asset = AssetModel {
            id: 3,
            item_id: 1,
            item_name: "Oscilloscope".to_string(),
            tag: "OSC-001".to_string(),
            status: AssetStatus::InStock.as_str().to_string(),
            created_at: Utc::now(),
        };
        assert!(asset.check_deletable().is_ok());

        asset.status = AssetStatus::Loaned.as_str().to_string();
        let err = asset.check_deletable().unwrap_err();
        assert_eq!(
            err.get("status").unwrap(),
            ["Asset OSC-001 is loaned and cannot be deleted."]
        );

        asset.status = AssetStatus::Disbursed.as_str().to_string();
        assert!(asset.check_deletable().unwrap_err().contains("status"));
    }
}
