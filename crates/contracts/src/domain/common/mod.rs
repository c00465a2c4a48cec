//! Common types and traits for all workflow records

pub mod catalog;
pub mod collection;
pub mod filter;
pub mod record;
pub mod record_id;
pub mod sort;
pub mod status;
pub mod status_update;
pub mod subject;
pub mod timeline;
pub mod validation;

// Re-exports
pub use catalog::{Catalog, CatalogOption, Location, Priority, PropertyType};
pub use collection::{status_from_code, RecordCollection, WorkflowError};
pub use filter::{AmountRange, FilterError, FilterForm, Filterable, RecordFilter};
pub use record::{StatusUpdate, WorkflowRecord};
pub use record_id::IdSequence;
pub use sort::{cmp_f64, cmp_opt, sort_list, SortState, Sortable};
pub use status::{
    accepts_updates, check_transition, selectable_statuses, TransitionError, TransitionPolicy,
    WorkflowStatus,
};
pub use status_update::StatusUpdateForm;
pub use subject::{NameLookup, SubjectDirectory, SubjectRef};
pub use timeline::{format_relative, AttachmentMeta, Timeline, TimelineDetails, TimelineEntry};
pub use validation::ValidationErrors;
