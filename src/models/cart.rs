use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::cart::{CartAsset, CartItem};
use crate::validation::{parse_positive, FieldErrors};

/// How requested quantity leaves the inventory once approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Loan,
    Disbursement,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Loan => "loan",
            RequestType::Disbursement => "disbursement",
        }
    }

    /// Accepts exactly `loan` or `disbursement`.
    pub fn parse(raw: &str) -> Result<Self, FieldErrors> {
        match raw {
            "loan" => Ok(RequestType::Loan),
            "disbursement" => Ok(RequestType::Disbursement),
            other => Err(FieldErrors::single(
                "request_type",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }
}

/// Validated quantity and type of a cart line.
pub fn validate_cart_line(quantity: &str, request_type: &str) -> Result<(i64, RequestType), FieldErrors> {
    let mut errors = FieldErrors::new();
    let quantity = errors.collect(parse_positive("quantity", quantity));
    let request_type = errors.collect(RequestType::parse(request_type));
    match (quantity, request_type) {
        (Some(q), Some(t)) => Ok((q, t)),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CartItemModel {
    pub id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub has_assets: bool,
    pub quantity: i64,
    pub request_type: String,
}

impl CartItemModel {
    pub fn to_proto(&self) -> CartItem {
        CartItem {
            id: self.id,
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            quantity: self.quantity,
            request_type: self.request_type.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CartAssetModel {
    pub id: i64,
    pub asset_id: i64,
    pub asset_tag: String,
    pub item_id: i64,
    pub item_name: String,
    pub request_type: String,
}

impl CartAssetModel {
    pub fn to_proto(&self) -> CartAsset {
        CartAsset {
            id: self.id,
            asset_id: self.asset_id,
            asset_tag: self.asset_tag.clone(),
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            request_type: self.request_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_is_exact() {
        assert_eq!(RequestType::parse("loan").unwrap(), RequestType::Loan);
        assert_eq!(RequestType::parse("disbursement").unwrap(), RequestType::Disbursement);
        assert!(RequestType::parse("Loan").is_err());
        assert!(RequestType::parse(" loan").is_err());
        let err = RequestType::parse("gift").unwrap_err();
        assert_eq!(err.get("request_type").unwrap(), ["\"gift\" is not a valid choice."]);
    }

    #[test]
    fn test_validate_cart_line() {
        assert_eq!(validate_cart_line("2", "loan").unwrap(), (2, RequestType::Loan));

        let err = validate_cart_line("0", "gift").unwrap_err();
        assert!(err.contains("quantity"));
        assert!(err.contains("request_type"));

        let err = validate_cart_line("-1", "disbursement").unwrap_err();
        assert!(err.contains("quantity"));
        assert!(!err.contains("request_type"));
    }
}
