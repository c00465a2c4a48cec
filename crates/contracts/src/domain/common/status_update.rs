use super::validation::{attachment_names, optional_amount, optional_text, required_option};
use super::{AttachmentMeta, StatusUpdate, ValidationErrors, WorkflowStatus};
use serde::{Deserialize, Serialize};

/// Raw input of the status-update modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateForm {
    pub status: String,
    pub notes: String,
    pub assigned_to: String,
    pub amount: String,
    pub attachments: Vec<AttachmentMeta>,
}

impl StatusUpdateForm {
    pub fn validate<S: WorkflowStatus>(&self) -> Result<StatusUpdate<S>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let status = errors.check("status", required_option::<S>(&self.status, "Status"));
        let amount = errors.check("amount", optional_amount(&self.amount, "Amount"));

        match (status, amount) {
            (Some(status), Some(amount)) if errors.is_empty() => Ok(StatusUpdate {
                status,
                notes: optional_text(&self.notes),
                assigned_to: optional_text(&self.assigned_to),
                amount,
                documents: attachment_names(&self.attachments),
            }),
            _ => Err(errors),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_order::SalesOrderStatus;

    #[test]
    fn test_valid_update() {
        let form = StatusUpdateForm {
            status: "offer-made".into(),
            notes: "  Buyer offered asking price ".into(),
            amount: "1,200,000".into(),
            attachments: vec![AttachmentMeta {
                name: "offer.pdf".into(),
                size_bytes: 2048,
            }],
            ..Default::default()
        };
        let update = form.validate::<SalesOrderStatus>().unwrap();
        assert_eq!(update.status, SalesOrderStatus::OfferMade);
        assert_eq!(update.notes.as_deref(), Some("Buyer offered asking price"));
        assert_eq!(update.assigned_to, None);
        assert_eq!(update.amount, Some(1_200_000.0));
        assert_eq!(update.documents, vec!["offer.pdf".to_string()]);
    }

    #[test]
    fn test_missing_status_and_bad_amount() {
        let form = StatusUpdateForm {
            amount: "lots".into(),
            ..Default::default()
        };
        let errors = form.validate::<SalesOrderStatus>().unwrap_err();
        assert_eq!(errors.get("status"), Some("Status is required"));
        assert_eq!(errors.get("amount"), Some("Amount must be a number"));
    }

    #[test]
    fn test_unknown_status_code() {
        let form = StatusUpdateForm {
            status: "archived".into(),
            ..Default::default()
        };
        let errors = form.validate::<SalesOrderStatus>().unwrap_err();
        assert_eq!(errors.get("status"), Some("Unknown status 'archived'"));
    }
}
