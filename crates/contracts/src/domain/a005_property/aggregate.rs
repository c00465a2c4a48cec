use crate::domain::common::validation::{
    optional_amount, optional_count, optional_text, required_amount, required_option,
    required_text,
};
use crate::domain::common::{
    cmp_f64, cmp_opt, AttachmentMeta, Catalog, Filterable, Location, PropertyType, Sortable,
    StatusUpdate, SubjectRef, Timeline, TimelineDetails, ValidationErrors, WorkflowRecord,
    WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    pub enum ListingStatus {
        Available => ("available", "Available"),
        UnderOffer => ("under-offer", "Under Offer"),
        Sold => ("sold", "Sold"),
        Rented => ("rented", "Rented"),
        Withdrawn => ("withdrawn", "Withdrawn"),
    }
}

impl WorkflowStatus for ListingStatus {
    fn initial() -> Self {
        ListingStatus::Available
    }

    fn permitted_next(&self) -> &'static [Self] {
        use ListingStatus::*;
        match self {
            Available => &[UnderOffer, Withdrawn],
            UnderOffer => &[Sold, Rented, Available, Withdrawn],
            Withdrawn => &[Available],
            Sold | Rented => &[],
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, ListingStatus::Sold | ListingStatus::Rented)
    }
}

crate::catalog_enum! {
    pub enum ListingType {
        Sale => ("sale", "For Sale"),
        Rent => ("rent", "For Rent"),
    }
}

/// Property listing (aggregate a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub property_type: PropertyType,
    pub location: Location,
    pub listing_type: ListingType,
    /// Sale price or monthly rent
    pub price: f64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: Option<f64>,
    pub agent: Option<String>,
    pub description: Option<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub closed_date: Option<NaiveDate>,
    pub photos: Vec<AttachmentMeta>,
    pub timeline: Timeline,
}

impl Property {
    pub fn subject(&self) -> SubjectRef {
        SubjectRef::new(&self.id, &self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub address: String,
    pub property_type: PropertyType,
    pub location: Location,
    pub listing_type: ListingType,
    pub price: f64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: Option<f64>,
    pub agent: Option<String>,
    pub description: Option<String>,
    pub photos: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyForm {
    pub title: String,
    pub address: String,
    pub property_type: String,
    pub location: String,
    pub listing_type: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area_sqft: String,
    pub agent: String,
    pub description: String,
    pub photos: Vec<AttachmentMeta>,
}

impl PropertyForm {
    pub fn validate(&self) -> Result<PropertyDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = errors.check("title", required_text(&self.title, "Title"));
        let address = errors.check("address", required_text(&self.address, "Address"));
        let property_type = errors.check(
            "property_type",
            required_option::<PropertyType>(&self.property_type, "Property type"),
        );
        let location = errors.check("location", required_option::<Location>(&self.location, "Location"));
        let listing_type = errors.check(
            "listing_type",
            required_option::<ListingType>(&self.listing_type, "Listing type"),
        );
        let price = errors.check("price", required_amount(&self.price, "Price"));
        let bedrooms = errors.check("bedrooms", optional_count(&self.bedrooms, "Bedrooms"));
        let bathrooms = errors.check("bathrooms", optional_count(&self.bathrooms, "Bathrooms"));
        let area_sqft = errors.check("area_sqft", optional_amount(&self.area_sqft, "Area"));

        if !errors.is_empty() {
            return Err(errors);
        }
        match (
            title,
            address,
            property_type,
            location,
            listing_type,
            price,
            bedrooms,
            bathrooms,
            area_sqft,
        ) {
            (
                Some(title),
                Some(address),
                Some(property_type),
                Some(location),
                Some(listing_type),
                Some(price),
                Some(bedrooms),
                Some(bathrooms),
                Some(area_sqft),
            ) => Ok(PropertyDraft {
                title,
                address,
                property_type,
                location,
                listing_type,
                price,
                bedrooms,
                bathrooms,
                area_sqft,
                agent: optional_text(&self.agent),
                description: optional_text(&self.description),
                photos: self.photos.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl WorkflowRecord for Property {
    type Status = ListingStatus;
    type Draft = PropertyDraft;

    fn id_prefix() -> &'static str {
        "PR-"
    }

    fn element_name() -> &'static str {
        "Property"
    }

    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>, _: &WorkflowSettings) -> Self {
        Self {
            id,
            title: draft.title,
            address: draft.address,
            property_type: draft.property_type,
            location: draft.location,
            listing_type: draft.listing_type,
            price: draft.price,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            area_sqft: draft.area_sqft,
            agent: draft.agent,
            description: draft.description,
            status: ListingStatus::initial(),
            created_at: now,
            closed_date: None,
            photos: draft.photos,
            timeline: Timeline::new(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status, now: DateTime<Utc>) {
        self.status = status;
        if status.is_completion() {
            self.closed_date = Some(now.date_naive());
        }
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    fn creation_details(&self) -> TimelineDetails {
        TimelineDetails {
            new_status: Some(self.status.code().to_string()),
            assigned_to: self.agent.clone(),
            amount: Some(self.price),
            documents: self.photos.iter().map(|p| p.name.clone()).collect(),
            ..Default::default()
        }
    }

    /// An amount on an update is a price change
    fn apply_update(&mut self, update: &StatusUpdate<Self::Status>) {
        if let Some(agent) = &update.assigned_to {
            self.agent = Some(agent.clone());
        }
        if let Some(price) = update.amount {
            self.price = price;
        }
    }
}

impl Filterable for Property {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.address.as_str(),
            self.location.label(),
            self.description.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.property_type.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.price)
    }
}

impl Sortable for Property {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "title" => self.title.cmp(&other.title),
            "type" => self.property_type.position().cmp(&other.property_type.position()),
            "location" => self.location.position().cmp(&other.location.position()),
            "status" => self.status.position().cmp(&other.status.position()),
            "price" => cmp_f64(self.price, other.price),
            "bedrooms" => cmp_opt(&self.bedrooms, &other.bedrooms),
            "area" => cmp_opt(&self.area_sqft, &other.area_sqft),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{RecordCollection, RecordFilter, TransitionPolicy};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn form() -> PropertyForm {
        PropertyForm {
            title: "12 Harbour View".into(),
            address: "12 Harbour Rd".into(),
            property_type: "apartment".into(),
            location: "waterfront".into(),
            listing_type: "sale".into(),
            price: "850000".into(),
            bedrooms: "2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_must_be_whole_numbers() {
        let mut f = form();
        f.bedrooms = "2.5".into();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("bedrooms"), Some("Bedrooms must be a whole number"));
    }

    #[test]
    fn test_search_includes_location_label() {
        let mut c = RecordCollection::<Property>::new(WorkflowSettings::default());
        c.create(form().validate().unwrap(), now());
        let filter = RecordFilter {
            search: "Waterfront".into(),
            category: "apartment".into(),
            ..Default::default()
        };
        assert_eq!(c.filtered(&filter).len(), 1);
        assert_eq!(c.records()[0].subject().name, "12 Harbour View");
    }

    #[test]
    fn test_sale_closes_listing() {
        let mut c = RecordCollection::<Property>::new(WorkflowSettings::default());
        let id = c.create(form().validate().unwrap(), now()).id.clone();
        c.update_status(&id, StatusUpdate::new(ListingStatus::UnderOffer), now())
            .unwrap();
        let mut sold = StatusUpdate::new(ListingStatus::Sold);
        sold.amount = Some(830_000.0);
        let property = c.update_status(&id, sold, now()).unwrap();
        assert_eq!(property.price, 830_000.0);
        assert_eq!(property.closed_date, Some(now().date_naive()));
        assert!(property.status.is_terminal());
    }

    #[test]
    fn test_withdrawn_listing_can_return_only_to_available() {
        assert_eq!(
            crate::domain::common::selectable_statuses(ListingStatus::Withdrawn, TransitionPolicy::Strict),
            vec![ListingStatus::Available]
        );
    }
}
