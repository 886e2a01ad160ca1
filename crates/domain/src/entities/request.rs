//! Request - A service order made of product line items
//!
//! `sum` is derived from the line items when the request is built and when it
//! is deserialised; there is no way to set it directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RequestLineItem, Validate};
use crate::errors::{DomainError, DomainResult};
use crate::validation::require_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequestRecord")]
pub struct Request {
    id: String,
    /// Set at creation, never changed
    request_date: DateTime<Utc>,
    sum: f64,
    is_cancelled: bool,
    is_completed: bool,
    line_items: Vec<RequestLineItem>,
}

/// Wire shape of a request; any incoming `sum` is ignored
#[derive(Deserialize)]
struct RequestRecord {
    id: String,
    request_date: DateTime<Utc>,
    #[serde(default)]
    is_cancelled: bool,
    #[serde(default)]
    is_completed: bool,
    #[serde(default)]
    line_items: Vec<RequestLineItem>,
}

impl From<RequestRecord> for Request {
    fn from(record: RequestRecord) -> Self {
        Self {
            sum: total_of(&record.line_items),
            id: record.id,
            request_date: record.request_date,
            is_cancelled: record.is_cancelled,
            is_completed: record.is_completed,
            line_items: record.line_items,
        }
    }
}

fn total_of(line_items: &[RequestLineItem]) -> f64 {
    line_items.iter().map(RequestLineItem::total).sum()
}

impl Request {
    pub fn new(id: impl Into<String>, is_cancelled: bool, line_items: Vec<RequestLineItem>) -> Self {
        Self {
            id: id.into(),
            request_date: Utc::now(),
            sum: total_of(&line_items),
            is_cancelled,
            is_completed: false,
            line_items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn request_date(&self) -> DateTime<Utc> {
        self.request_date
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn line_items(&self) -> &[RequestLineItem] {
        &self.line_items
    }

    /// Line items not yet realised as installs
    pub fn pending_line_items(&self) -> impl Iterator<Item = &RequestLineItem> {
        self.line_items
            .iter()
            .filter(|item| item.install_id().is_none())
    }

    /// Every line item has produced an install
    pub fn is_fulfilled(&self) -> bool {
        !self.line_items.is_empty() && self.pending_line_items().next().is_none()
    }
}

impl Validate for Request {
    fn validate(&self) -> DomainResult<()> {
        require_id(&self.id, "Id")?;
        if self.line_items.is_empty() {
            return Err(DomainError::validation(
                "LineItems",
                "The request must include products",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn guid() -> String {
        Uuid::new_v4().to_string()
    }

    fn line_items() -> Vec<RequestLineItem> {
        vec![RequestLineItem::new(guid(), guid(), 100.0, 10.0)]
    }

    fn failed_field(request: &Request) -> String {
        match request.validate() {
            Err(DomainError::Validation { field, .. }) => field,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_id_is_empty_or_not_guid() {
        assert_eq!(failed_field(&Request::new("", false, line_items())), "Id");
        assert_eq!(failed_field(&Request::new("id", false, line_items())), "Id");
    }

    #[test]
    fn test_line_items_required() {
        let request = Request::new(guid(), false, Vec::new());
        assert_eq!(request.sum(), 0.0);
        assert_eq!(failed_field(&request), "LineItems");
    }

    #[test]
    fn test_id_reported_before_missing_line_items() {
        assert_eq!(failed_field(&Request::new("", false, Vec::new())), "Id");
    }

    #[test]
    fn test_sum_calculated_from_line_items() {
        let items = vec![
            RequestLineItem::new(guid(), guid(), 100.0, 10.0),
            RequestLineItem::new(guid(), guid(), 200.0, 15.0),
        ];
        let request = Request::new(guid(), false, items);
        assert_eq!(request.sum(), 325.0);
    }

    #[test]
    fn test_all_fields_correct() {
        let id = guid();
        let items = line_items();
        let request = Request::new(id.clone(), true, items.clone());

        assert!(request.validate().is_ok());
        assert_eq!(request.id(), id);
        assert!(request.is_cancelled());
        assert!(!request.is_completed());
        assert_eq!(request.line_items(), items.as_slice());
    }

    #[test]
    fn test_fulfilment_tracks_install_back_references() {
        let request_id = guid();
        let open = RequestLineItem::new(request_id.clone(), guid(), 50.0, 5.0);
        let done = RequestLineItem::new(request_id.clone(), guid(), 70.0, 7.0).with_install_id(guid());

        let request = Request::new(request_id.clone(), false, vec![open.clone(), done.clone()]);
        assert!(!request.is_fulfilled());
        assert_eq!(request.pending_line_items().collect::<Vec<_>>(), vec![&open]);

        let request = Request::new(request_id, false, vec![done]);
        assert!(request.is_fulfilled());
    }

    #[test]
    fn test_deserialised_sum_is_recomputed() {
        let request = Request::new(guid(), false, line_items());
        let mut json = serde_json::to_value(&request).unwrap();
        json["sum"] = serde_json::json!(1_000_000.0);

        let restored: Request = serde_json::from_value(json).unwrap();
        assert_eq!(restored.sum(), 110.0);
        assert_eq!(restored, request);
    }

    proptest! {
        #[test]
        fn prop_sum_equals_line_totals(prices in proptest::collection::vec((0.01f64..10_000.0, 0.01f64..10_000.0), 0..16)) {
            let items: Vec<_> = prices
                .iter()
                .map(|(product, install)| RequestLineItem::new(guid(), guid(), *product, *install))
                .collect();
            let expected: f64 = prices.iter().map(|(product, install)| product + install).sum();

            let request = Request::new(guid(), false, items);
            prop_assert_eq!(request.sum(), expected);
            prop_assert_eq!(request.validate().is_ok(), !prices.is_empty());
        }

        #[test]
        fn prop_validate_is_idempotent(id in "[a-z0-9-]{0,40}", with_items in any::<bool>()) {
            let items = if with_items { line_items() } else { Vec::new() };
            let request = Request::new(id, false, items);
            prop_assert_eq!(request.validate(), request.validate());
        }
    }
}
