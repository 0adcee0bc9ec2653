use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::asset::AssetStatus;
use crate::proto::common::User;
use crate::proto::requests::{Request, RequestedItem};
use crate::validation::FieldErrors;

pub const REQUEST_COLUMNS: &str = "id, requester_id, administrator_id, status, open_comment, \
     close_comment, date_open, date_closed";

/// Lifecycle of a request. `Approved` and `Denied` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Outstanding,
    Approved,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Outstanding => "outstanding",
            RequestStatus::Approved => "approved",
            RequestStatus::Denied => "denied",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, FieldErrors> {
        match raw {
            "outstanding" => Ok(RequestStatus::Outstanding),
            "approved" => Ok(RequestStatus::Approved),
            "denied" => Ok(RequestStatus::Denied),
            other => Err(FieldErrors::single(
                "status",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }

    pub fn is_terminal(self) -> bool {
        self != RequestStatus::Outstanding
    }

    /// The only legal moves are out of `Outstanding`; closed requests never
    /// transition again.
    pub fn transition(self, decision: Decision) -> Result<RequestStatus, FieldErrors> {
        match (self, decision) {
            (RequestStatus::Outstanding, Decision::Approve) => Ok(RequestStatus::Approved),
            (RequestStatus::Outstanding, Decision::Deny) => Ok(RequestStatus::Denied),
            (closed, _) => Err(FieldErrors::single(
                "status",
                format!("Request has already been {}.", closed.as_str()),
            )),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RequestModel {
    pub id: i64,
    pub requester_id: i64,
    pub administrator_id: Option<i64>,
    pub status: String,
    pub open_comment: String,
    pub close_comment: String,
    pub date_open: DateTime<Utc>,
    pub date_closed: Option<DateTime<Utc>>,
}

impl RequestModel {
    pub fn status(&self) -> Result<RequestStatus, FieldErrors> {
        RequestStatus::parse(&self.status)
    }

    pub fn to_proto(
        &self,
        requester: Option<User>,
        administrator: Option<User>,
        requested_items: Vec<RequestedItem>,
    ) -> Request {
        Request {
            id: self.id,
            requester,
            administrator,
            status: self.status.clone(),
            open_comment: self.open_comment.clone(),
            close_comment: self.close_comment.clone(),
            date_open: self.date_open.to_rfc3339(),
            date_closed: self
                .date_closed
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
            requested_items,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RequestedItemModel {
    pub id: i64,
    pub request_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub asset_id: Option<i64>,
    pub quantity: i64,
    pub request_type: String,
}

impl RequestedItemModel {
    pub fn to_proto(&self) -> RequestedItem {
        RequestedItem {
            id: self.id,
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            asset_id: self.asset_id,
            quantity: self.quantity,
            request_type: self.request_type.clone(),
        }
    }
}

/// A requested line joined with the stock it would draw from.
#[derive(Debug, Clone, FromRow)]
pub struct StockLine {
    pub item_id: i64,
    pub item_name: String,
    pub available: i64,
    pub asset_id: Option<i64>,
    pub asset_tag: Option<String>,
    pub asset_status: Option<String>,
    pub quantity: i64,
    pub request_type: String,
}

/// Checks that every line of a request can be served from current stock.
/// Quantities for the same item are summed before comparing. Errors are
/// keyed by item name.
pub fn check_stock(lines: &[StockLine]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut totals: BTreeMap<i64, (&str, i64, i64)> = BTreeMap::new();

    for line in lines {
        if let (Some(_), Some(status)) = (line.asset_id, line.asset_status.as_deref()) {
            if status != AssetStatus::InStock.as_str() {
                errors.add(
                    line.item_name.as_str(),
                    format!(
                        "Asset {} is not available ({}).",
                        line.asset_tag.as_deref().unwrap_or("?"),
                        status
                    ),
                );
            }
        }
        let entry = totals
            .entry(line.item_id)
            .or_insert((line.item_name.as_str(), line.available, 0));
        entry.2 += line.quantity;
    }

    for (name, available, requested) in totals.into_values() {
        if requested > available {
            errors.add(
                name,
                format!(
                    "Insufficient stock: requested {}, available {}.",
                    requested, available
                ),
            );
        }
    }

    errors.finish(())
}

/// Everything that blocks approval: asset lines whose asset was deleted
/// (`orphaned` item names) plus every stock problem from [`check_stock`].
pub fn check_fulfilment(lines: &[StockLine], orphaned: &[String]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for name in orphaned {
        errors.add(name.as_str(), "The requested asset no longer exists.");
    }
    if let Err(stock_errors) = check_stock(lines) {
        errors.merge(stock_errors);
    }
    errors.finish(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: i64, name: &str, available: i64, quantity: i64) -> StockLine {
        StockLine {
            item_id,
            item_name: name.to_string(),
            available,
            asset_id: None,
            asset_tag: None,
            asset_status: None,
            quantity,
            request_type: "loan".to_string(),
        }
    }

    #[test]
    fn test_outstanding_transitions_once() {
        let approved = RequestStatus::Outstanding.transition(Decision::Approve).unwrap();
        assert_eq!(approved, RequestStatus::Approved);
        let denied = RequestStatus::Outstanding.transition(Decision::Deny).unwrap();
        assert_eq!(denied, RequestStatus::Denied);
    }

    #[test]
    fn test_terminal_states_reject_every_decision() {
        for closed in [RequestStatus::Approved, RequestStatus::Denied] {
            assert!(closed.is_terminal());
            for decision in [Decision::Approve, Decision::Deny] {
                let err = closed.transition(decision).unwrap_err();
                assert!(err.contains("status"));
            }
        }
        let err = RequestStatus::Approved.transition(Decision::Approve).unwrap_err();
        assert_eq!(err.get("status").unwrap(), ["Request has already been approved."]);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(RequestStatus::parse("denied").unwrap(), RequestStatus::Denied);
        assert!(RequestStatus::parse("closed").is_err());
    }

    #[test]
    fn test_check_stock_sums_lines_per_item() {
        let ok = vec![line(1, "Cable", 5, 2), line(1, "Cable", 5, 3), line(2, "Fuse", 1, 1)];
        assert!(check_stock(&ok).is_ok());

        let short = vec![line(1, "Cable", 5, 2), line(1, "Cable", 5, 4)];
        let err = check_stock(&short).unwrap_err();
        assert_eq!(
            err.get("Cable").unwrap(),
            ["Insufficient stock: requested 6, available 5."]
        );
    }

    #[test]
    fn test_check_stock_requires_assets_in_stock() {
        let mut asset_line = line(3, "Laptop", 2, 1);
        asset_line.asset_id = Some(10);
        asset_line.asset_tag = Some("LT-10".to_string());
        asset_line.asset_status = Some("loaned".to_string());

        let err = check_stock(&[asset_line.clone()]).unwrap_err();
        assert_eq!(err.get("Laptop").unwrap(), ["Asset LT-10 is not available (loaned)."]);

        asset_line.asset_status = Some("in_stock".to_string());
        assert!(check_stock(&[asset_line]).is_ok());
    }

    #[test]
    fn test_check_fulfilment_reports_orphans_and_shortages_together() {
        let lines = vec![line(1, "Cable", 2, 5), line(2, "Fuse", 10, 1)];
        let orphaned = vec!["Oscilloscope".to_string()];
        let err = check_fulfilment(&lines, &orphaned).unwrap_err();
        assert_eq!(
            err.get("Oscilloscope").unwrap(),
            ["The requested asset no longer exists."]
        );
        assert_eq!(
            err.get("Cable").unwrap(),
            ["Insufficient stock: requested 5, available 2."]
        );
        assert!(!err.contains("Fuse"));
    }

    #[test]
    fn test_check_fulfilment_accepts_servable_request() {
        let lines = vec![line(1, "Cable", 5, 5)];
        assert!(check_fulfilment(&lines, &[]).is_ok());
        assert!(check_fulfilment(&[], &["Multimeter".to_string()]).is_err());
    }
}
