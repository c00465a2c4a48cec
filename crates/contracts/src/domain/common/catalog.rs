use serde::Serialize;

/// One entry of an option catalog, as rendered in a `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Static lookup table mapping a stable code to a human label.
///
/// Catalog position is the display order of the dropdown.
pub trait Catalog: Sized + Copy + PartialEq + 'static {
    /// All values in catalog order
    fn all() -> &'static [Self];

    /// Stable code used in forms, filters and serialized data
    fn code(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    /// Index in catalog order, used when sorting by a catalog column
    fn position(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(usize::MAX)
    }

    /// Look up a value by its code (case-insensitive)
    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.code().eq_ignore_ascii_case(code))
    }

    /// Options for a dropdown, in catalog order
    fn options() -> Vec<CatalogOption> {
        Self::all()
            .iter()
            .map(|v| CatalogOption {
                code: v.code(),
                label: v.label(),
            })
            .collect()
    }

    /// Label for a code, falling back to the code itself
    fn label_for(code: &str) -> String {
        Self::from_code(code)
            .map(|v| v.label().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

/// Declares a catalog enum with serde codes, `Display` and a [`Catalog`] impl.
#[macro_export]
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $code)] $variant ),+
        }

        impl $crate::domain::common::Catalog for $name {
            fn all() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::domain::common::Catalog::label(self))
            }
        }
    };
}

catalog_enum! {
    /// Priority shared by purchase orders and maintenance requests
    pub enum Priority {
        Critical => ("critical", "Critical"),
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

catalog_enum! {
    /// Property classification used by listings, sales and purchases
    pub enum PropertyType {
        House => ("house", "House"),
        Apartment => ("apartment", "Apartment"),
        Condo => ("condo", "Condo"),
        Townhome => ("townhome", "Townhome"),
        Land => ("land", "Land"),
        Commercial => ("commercial", "Commercial"),
    }
}

catalog_enum! {
    /// Area a property or a client's preference belongs to
    pub enum Location {
        Downtown => ("downtown", "Downtown"),
        Suburbs => ("suburbs", "Suburbs"),
        Waterfront => ("waterfront", "Waterfront"),
        Countryside => ("countryside", "Countryside"),
        BusinessDistrict => ("business-district", "Business District"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Priority::from_code("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_code(" low "), Some(Priority::Low));
        assert_eq!(Priority::from_code("urgent"), None);
    }

    #[test]
    fn test_options_keep_catalog_order() {
        let codes: Vec<_> = Priority::options().into_iter().map(|o| o.code).collect();
        assert_eq!(codes, vec!["critical", "high", "medium", "low"]);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Location::BusinessDistrict).unwrap();
        assert_eq!(json, "\"business-district\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Location::BusinessDistrict);
    }

    #[test]
    fn test_label_for_unknown_code_falls_back() {
        assert_eq!(PropertyType::label_for("condo"), "Condo");
        assert_eq!(PropertyType::label_for("castle"), "castle");
    }
}
