use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use tabpdf_core::models::export::{DashboardFilters, ExportConfig, PdfSettings};
use tabpdf_core::params::{build_params, encode_component};

fn config(filters: &[(&str, &str)]) -> ExportConfig {
    ExportConfig {
        pdf_settings: PdfSettings {
            page_type: "A4".to_string(),
            orientation: "Landscape".to_string(),
        },
        dashboard_filters: filters.iter().copied().collect(),
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8().unwrap().into_owned()
}

#[test]
fn single_filter_end_to_end() {
    let params = build_params(&config(&[("Region", "West")]));

    assert_eq!(params.len(), 3);
    assert_eq!(params.get("pdf_layout"), Some("type=A4"));
    assert_eq!(params.get("pdf_orientation"), Some("orientation=Landscape"));
    assert_eq!(params.get("filter_0"), Some("vf_Region=West"));
}

#[test]
fn no_filters_yields_only_layout() {
    let params = build_params(&config(&[]));

    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec!["pdf_layout", "pdf_orientation"]
    );
    assert_eq!(params.query_string(), "type=A4&orientation=Landscape");
}

#[test]
fn filter_slots_follow_mapping_order() {
    let params = build_params(&config(&[
        ("Region", "West"),
        ("Year", "2024"),
        ("Segment", "Consumer"),
    ]));

    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec![
            "pdf_layout",
            "pdf_orientation",
            "filter_0",
            "filter_1",
            "filter_2"
        ]
    );
    assert_eq!(params.get("filter_1"), Some("vf_Year=2024"));
    assert_eq!(params.get("filter_2"), Some("vf_Segment=Consumer"));
}

#[test]
fn names_and_values_are_percent_encoded() {
    let params = build_params(&config(&[("Sub Category", "Tables & Chairs")]));

    assert_eq!(
        params.get("filter_0"),
        Some("vf_Sub%20Category=Tables%20%26%20Chairs")
    );
}

#[test]
fn layout_values_pass_through_unvalidated() {
    let mut cfg = config(&[]);
    cfg.pdf_settings.page_type = "Tabloid?".to_string();
    cfg.pdf_settings.orientation = "sideways".to_string();

    let params = build_params(&cfg);
    assert_eq!(params.get("pdf_layout"), Some("type=Tabloid?"));
    assert_eq!(params.get("pdf_orientation"), Some("orientation=sideways"));
}

#[test]
fn query_string_joins_in_order() {
    let params = build_params(&config(&[("Region", "West"), ("State", "New York")]));

    assert_eq!(
        params.query_string(),
        "type=A4&orientation=Landscape&vf_Region=West&vf_State=New%20York"
    );
}

#[test]
fn component_encoding_matches_url_quote_rules() {
    assert_eq!(encode_component("simple_name-1.0~"), "simple_name-1.0~");
    assert_eq!(encode_component("a/b"), "a/b");
    assert_eq!(encode_component("a=b"), "a%3Db");
    assert_eq!(encode_component("50%"), "50%25");
    assert_eq!(encode_component("a+b,c;d"), "a%2Bb%2Cc%3Bd");
    assert_eq!(encode_component("Zürich"), "Z%C3%BCrich");
}

#[test]
fn serializes_as_ordered_json_object() {
    let params = build_params(&config(&[("Region", "West")]));
    let json = serde_json::to_string(&params).unwrap();

    assert_eq!(
        json,
        r#"{"pdf_layout":"type=A4","pdf_orientation":"orientation=Landscape","filter_0":"vf_Region=West"}"#
    );
}

proptest! {
    #[test]
    fn entry_count_is_two_plus_filters(names in prop::collection::hash_set("[a-zA-Z ]{1,12}", 0..8)) {
        let filters: DashboardFilters = names.iter().map(|n| (n.clone(), "x".to_string())).collect();
        let cfg = ExportConfig {
            pdf_settings: PdfSettings { page_type: "A4".into(), orientation: "Portrait".into() },
            dashboard_filters: filters,
        };

        let params = build_params(&cfg);
        prop_assert_eq!(params.len(), 2 + names.len());
        for i in 0..names.len() {
            let key = format!("filter_{i}");
            prop_assert!(params.get(&key).is_some());
        }
    }

    #[test]
    fn filter_segments_decode_to_originals(name in "\\PC{1,16}", value in "\\PC{0,16}") {
        let cfg = ExportConfig {
            pdf_settings: PdfSettings { page_type: "A4".into(), orientation: "Portrait".into() },
            dashboard_filters: [(name.clone(), value.clone())].into_iter().collect(),
        };

        let params = build_params(&cfg);
        let entry = params.get("filter_0").unwrap();
        let encoded = entry.strip_prefix("vf_").unwrap();
        let (enc_name, enc_value) = encoded.split_once('=').unwrap();

        prop_assert_eq!(decode(enc_name), name);
        prop_assert_eq!(decode(enc_value), value);
    }
}
