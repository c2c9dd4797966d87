use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// What a PDF is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    View,
    Workbook,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::View => "View",
            SourceKind::Workbook => "Workbook",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `View` / `Workbook`.
impl FromStr for SourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "View" => Ok(SourceKind::View),
            "Workbook" => Ok(SourceKind::Workbook),
            other => Err(CoreError::InvalidSourceKind(other.to_string())),
        }
    }
}

/// Page layout for the rendered PDF. Values are passed to Tableau verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfSettings {
    /// Page type, e.g. `A4`, `Letter`.
    #[serde(rename = "type")]
    pub page_type: String,
    /// `Portrait` or `Landscape`.
    pub orientation: String,
}

/// Dashboard filter name → value pairs, kept in the order they were given.
///
/// Order matters: each filter is assigned the next `filter_<n>` slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilters {
    entries: Vec<(String, String)>,
}

impl DashboardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filter. Re-inserting a name replaces its value but keeps
    /// the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DashboardFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = DashboardFilters::new();
        for (k, v) in iter {
            filters.insert(k, v);
        }
        filters
    }
}

impl Serialize for DashboardFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DashboardFilters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FiltersVisitor;

        impl<'de> Visitor<'de> for FiltersVisitor {
            type Value = DashboardFilters;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of dashboard filter names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut filters = DashboardFilters::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    filters.insert(name, value);
                }
                Ok(filters)
            }
        }

        deserializer.deserialize_map(FiltersVisitor)
    }
}

/// Caller-supplied export configuration (`tableau_params` in the event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub pdf_settings: PdfSettings,
    #[serde(default)]
    pub dashboard_filters: DashboardFilters,
}

/// A single validated export: what to render and where to put it.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub source_kind: SourceKind,
    pub source_name: String,
    pub bucket: String,
    pub object_key: String,
    pub export_params: ExportConfig,
}
