use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to a client or property as shown on a record.
///
/// Informational only: the id is not checked against a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub name: String,
}

impl SubjectRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Unknown ids keep the id as display name
    pub fn resolve(id: &str, name: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.unwrap_or_else(|| id.to_string()),
        }
    }
}

/// Resolves display names for the client/property pickers of create forms
pub trait NameLookup {
    fn client_name(&self, id: &str) -> Option<String>;
    fn property_name(&self, id: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectDirectory {
    clients: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl SubjectDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.clients.insert(id.into(), name.into());
        self
    }

    pub fn with_property(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.properties.insert(id.into(), name.into());
        self
    }

    /// Directory built from the current client and property lists
    pub fn from_subjects(
        clients: impl IntoIterator<Item = SubjectRef>,
        properties: impl IntoIterator<Item = SubjectRef>,
    ) -> Self {
        Self {
            clients: clients.into_iter().map(|s| (s.id, s.name)).collect(),
            properties: properties.into_iter().map(|s| (s.id, s.name)).collect(),
        }
    }

    pub fn client(&self, id: &str) -> SubjectRef {
        SubjectRef::resolve(id, self.client_name(id))
    }

    pub fn property(&self, id: &str) -> SubjectRef {
        SubjectRef::resolve(id, self.property_name(id))
    }
}

impl NameLookup for SubjectDirectory {
    fn client_name(&self, id: &str) -> Option<String> {
        self.clients.get(id.trim()).cloned()
    }

    fn property_name(&self, id: &str) -> Option<String> {
        self.properties.get(id.trim()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_fall_back_to_id() {
        let dir = SubjectDirectory::new().with_client("CL-0001", "Jane Cooper");
        assert_eq!(dir.client("CL-0001"), SubjectRef::new("CL-0001", "Jane Cooper"));
        assert_eq!(dir.property("1"), SubjectRef::new("1", "1"));
    }
}
