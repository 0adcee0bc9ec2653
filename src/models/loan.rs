use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::loans::{Disbursement, Loan};
use crate::validation::{parse_positive, FieldErrors};

/// Columns selected for [`LoanModel`]; expects `loans l JOIN items i JOIN requests r`.
pub const LOAN_COLUMNS: &str = "l.id, l.request_id, l.item_id, i.name AS item_name, l.asset_id, \
     r.requester_id AS user_id, l.quantity_loaned, l.quantity_returned, l.date_loaned";

/// Columns selected for [`DisbursementModel`]; expects `disbursements d JOIN items i JOIN requests r`.
pub const DISBURSEMENT_COLUMNS: &str = "d.id, d.request_id, d.item_id, i.name AS item_name, \
     d.asset_id, r.requester_id AS user_id, d.quantity, d.date_created";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LoanModel {
    pub id: i64,
    pub request_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub asset_id: Option<i64>,
    pub user_id: i64,
    pub quantity_loaned: i64,
    pub quantity_returned: i64,
    pub date_loaned: DateTime<Utc>,
}

/// What happens to a loan after a return or a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanOutcome {
    /// The loan stays open with these counters.
    Remaining {
        quantity_loaned: i64,
        quantity_returned: i64,
    },
    /// Nothing is left outstanding; the loan row is removed.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanChange {
    pub quantity: i64,
    pub outcome: LoanOutcome,
}

impl LoanModel {
    /// Quantity still out on loan.
    pub fn remaining(&self) -> i64 {
        self.quantity_loaned - self.quantity_returned
    }

    fn checked_quantity(&self, raw: &str) -> Result<i64, FieldErrors> {
        let quantity = parse_positive("quantity", raw)?;
        if quantity > self.remaining() {
            return Err(FieldErrors::single(
                "quantity",
                format!(
                    "Cannot exceed the {} item(s) remaining on this loan.",
                    self.remaining()
                ),
            ));
        }
        Ok(quantity)
    }

    /// Turns part of the loan into a permanent disbursement. The loaned
    /// quantity shrinks by the converted amount.
    pub fn plan_conversion(&self, raw_quantity: &str) -> Result<LoanChange, FieldErrors> {
        let quantity = self.checked_quantity(raw_quantity)?;
        let quantity_loaned = self.quantity_loaned - quantity;
        let outcome = if quantity_loaned == self.quantity_returned {
            LoanOutcome::Exhausted
        } else {
            LoanOutcome::Remaining {
                quantity_loaned,
                quantity_returned: self.quantity_returned,
            }
        };
        Ok(LoanChange { quantity, outcome })
    }

    /// Records returned stock.
    pub fn plan_return(&self, raw_quantity: &str) -> Result<LoanChange, FieldErrors> {
        let quantity = self.checked_quantity(raw_quantity)?;
        let quantity_returned = self.quantity_returned + quantity;
        let outcome = if quantity_returned == self.quantity_loaned {
            LoanOutcome::Exhausted
        } else {
            LoanOutcome::Remaining {
                quantity_loaned: self.quantity_loaned,
                quantity_returned,
            }
        };
        Ok(LoanChange { quantity, outcome })
    }

    pub fn to_proto(&self) -> Loan {
        Loan {
            id: self.id,
            request_id: self.request_id,
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            asset_id: self.asset_id,
            user_id: self.user_id,
            quantity_loaned: self.quantity_loaned,
            quantity_returned: self.quantity_returned,
            date_loaned: self.date_loaned.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DisbursementModel {
    pub id: i64,
    pub request_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub asset_id: Option<i64>,
    pub user_id: i64,
    pub quantity: i64,
    pub date_created: DateTime<Utc>,
}

impl DisbursementModel {
    pub fn to_proto(&self) -> Disbursement {
        Disbursement {
            id: self.id,
            request_id: self.request_id,
            item_id: self.item_id,
            item_name: self.item_name.clone(),
            asset_id: self.asset_id,
            user_id: self.user_id,
            quantity: self.quantity,
            date_created: self.date_created.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(quantity_loaned: i64, quantity_returned: i64) -> LoanModel {
        LoanModel {
            id: 1,
            request_id: 2,
            item_id: 3,
            item_name: "Multimeter".to_string(),
            asset_id: None,
            user_id: 4,
            quantity_loaned,
            quantity_returned,
            date_loaned: Utc::now(),
        }
    }

    #[test]
    fn test_full_conversion_exhausts_loan() {
        let change = loan(5, 0).plan_conversion("5").unwrap();
        assert_eq!(change.quantity, 5);
        assert_eq!(change.outcome, LoanOutcome::Exhausted);
    }

    #[test]
    fn test_over_quantity_conversion_is_rejected() {
        let err = loan(5, 0).plan_conversion("6").unwrap_err();
        assert_eq!(
            err.get("quantity").unwrap(),
            ["Cannot exceed the 5 item(s) remaining on this loan."]
        );
    }

    #[test]
    fn test_non_positive_conversion_is_rejected() {
        assert!(loan(5, 0).plan_conversion("0").unwrap_err().contains("quantity"));
        assert!(loan(5, 0).plan_conversion("-2").unwrap_err().contains("quantity"));
        assert!(loan(5, 0).plan_conversion("two").unwrap_err().contains("quantity"));
    }

    #[test]
    fn test_partial_conversion_decrements_loan() {
        let change = loan(5, 0).plan_conversion("2").unwrap();
        assert_eq!(
            change.outcome,
            LoanOutcome::Remaining {
                quantity_loaned: 3,
                quantity_returned: 0
            }
        );
    }

    #[test]
    fn test_conversion_respects_returned_quantity() {
        let partly_returned = loan(5, 2);
        assert_eq!(partly_returned.remaining(), 3);
        assert!(partly_returned.plan_conversion("4").is_err());
        assert_eq!(
            partly_returned.plan_conversion("3").unwrap().outcome,
            LoanOutcome::Exhausted
        );
    }

    #[test]
    fn test_returns() {
        let change = loan(4, 1).plan_return("2").unwrap();
        assert_eq!(
            change.outcome,
            LoanOutcome::Remaining {
                quantity_loaned: 4,
                quantity_returned: 3
            }
        );
        assert_eq!(loan(4, 1).plan_return("3").unwrap().outcome, LoanOutcome::Exhausted);
        assert!(loan(4, 1).plan_return("4").is_err());
    }
}
