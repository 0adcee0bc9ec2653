use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::logs::Log;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    ItemCreation,
    ItemModification,
    ItemDeletion,
    FieldModification,
    RequestCreation,
    RequestApproval,
    RequestDenial,
    RequestCancellation,
    LoanReturn,
    LoanConversion,
    UserCreation,
}

impl LogCategory {
    pub const ALL: [LogCategory; 11] = [
        LogCategory::ItemCreation,
        LogCategory::ItemModification,
        LogCategory::ItemDeletion,
        LogCategory::FieldModification,
        LogCategory::RequestCreation,
        LogCategory::RequestApproval,
        LogCategory::RequestDenial,
        LogCategory::RequestCancellation,
        LogCategory::LoanReturn,
        LogCategory::LoanConversion,
        LogCategory::UserCreation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogCategory::ItemCreation => "Item Creation",
            LogCategory::ItemModification => "Item Modification",
            LogCategory::ItemDeletion => "Item Deletion",
            LogCategory::FieldModification => "Field Modification",
            LogCategory::RequestCreation => "Request Creation",
            LogCategory::RequestApproval => "Request Approval",
            LogCategory::RequestDenial => "Request Denial",
            LogCategory::RequestCancellation => "Request Cancellation",
            LogCategory::LoanReturn => "Loan Return",
            LogCategory::LoanConversion => "Loan Conversion",
            LogCategory::UserCreation => "User Creation",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, FieldErrors> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                FieldErrors::single("category", format!("\"{}\" is not a valid choice.", raw))
            })
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LogModel {
    pub id: i64,
    pub category: String,
    pub item_id: Option<i64>,
    pub item_name: String,
    pub initiating_user_id: Option<i64>,
    pub affected_user_id: Option<i64>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl LogModel {
    pub fn to_proto(&self) -> Log {
        Log {
            id: self.id,
            category: self.category.clone(),
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            initiating_user_id: self.initiating_user_id,
            affected_user_id: self.affected_user_id,
            message: self.message.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        for c in LogCategory::ALL {
            assert_eq!(LogCategory::parse(c.as_str()).unwrap(), c);
        }
        assert_eq!(
            LogCategory::parse("item deletion").unwrap(),
            LogCategory::ItemDeletion
        );
        assert_eq!(
            LogCategory::parse("request creation").unwrap(),
            LogCategory::RequestCreation
        );
        assert_eq!(
            LogCategory::parse("Field Modification").unwrap(),
            LogCategory::FieldModification
        );
        assert!(LogCategory::parse("Item Theft").unwrap_err().contains("category"));
    }
}
