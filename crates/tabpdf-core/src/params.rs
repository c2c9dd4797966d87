//! Flattening of an [`ExportConfig`] into Tableau's PDF request parameters.
//!
//! Tableau's view and workbook PDF endpoints take their layout and view
//! filters as query parameters: `type=A4&orientation=Landscape&vf_Region=West`.
//! The builder produces one keyed entry per parameter so callers can log or
//! inspect them before the session joins them into a query string.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::export::ExportConfig;

pub const PDF_LAYOUT: &str = "pdf_layout";
pub const PDF_ORIENTATION: &str = "pdf_orientation";

/// Prefix Tableau uses to recognise a query parameter as a view filter.
pub const VIEW_FILTER_PREFIX: &str = "vf_";

/// URL component encoding: everything except ASCII alphanumerics and
/// `_ . - ~ /` is escaped.
pub const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a filter name or value.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string()
}

/// Key of the `index`-th filter slot.
pub fn filter_key(index: usize) -> String {
    format!("filter_{index}")
}

/// Ordered parameter set: the two layout entries, then `filter_0..filter_n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedViewParams {
    entries: Vec<(String, String)>,
}

impl FlattenedViewParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values joined with `&`, ready to append after `?`.
    ///
    /// Values are already encoded, so this must not be run through another
    /// URL encoder.
    pub fn query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Serialize for FlattenedViewParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Build the flattened PDF parameters for an export.
///
/// `type` and `orientation` are inserted verbatim; Tableau rejects values it
/// does not know.
pub fn build_params(config: &ExportConfig) -> FlattenedViewParams {
    let mut entries = Vec::with_capacity(2 + config.dashboard_filters.len());

    entries.push((
        PDF_LAYOUT.to_string(),
        format!("type={}", config.pdf_settings.page_type),
    ));
    entries.push((
        PDF_ORIENTATION.to_string(),
        format!("orientation={}", config.pdf_settings.orientation),
    ));

    for (i, (name, value)) in config.dashboard_filters.iter().enumerate() {
        entries.push((
            filter_key(i),
            format!(
                "{VIEW_FILTER_PREFIX}{}={}",
                encode_component(name),
                encode_component(value)
            ),
        ));
    }

    FlattenedViewParams { entries }
}
