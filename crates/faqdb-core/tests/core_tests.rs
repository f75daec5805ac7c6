use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use faqdb_core::config::Config;
use faqdb_core::error::Error;
use faqdb_core::loader::RecordLoader;
use faqdb_core::options::{SearchOptions, SearchOptionsOverrides};
use faqdb_core::types::{facet_label, Category, CategorySelection, FaqRecord, FilterState};

const RECORDS_JSON: &str = r#"[
  {"id": "1", "question": "How to enroll?", "answer": "Use the enroll button.", "category": "enrollment", "popular": true,
   "tags": ["signup"], "searchKeywords": ["register"], "readTime": "2 min", "lastUpdated": "2024-01-10"},
  {"id": "2", "question": "Payment methods", "answer": "Cards and PayPal.", "category": "payment"}
]"#;

#[test]
fn record_json_uses_camel_case_and_defaults_optional_fields() {
    let records: Vec<FaqRecord> = serde_json::from_str(RECORDS_JSON).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].search_keywords, vec!["register".to_string()]);
    assert_eq!(records[0].read_time.as_deref(), Some("2 min"));
    assert_eq!(records[1].category, Some(Category::Payment));
    assert!(!records[1].popular);
    assert!(records[1].tags.is_empty(), "absent tags mean empty");
    assert!(records[1].search_keywords.is_empty());
}

#[test]
fn filter_state_defaults_to_no_search_and_all_categories() {
    let state = FilterState::default();
    assert_eq!(state.search_query, "");
    assert_eq!(state.selected_category, CategorySelection::All);
    assert!(state.open_items.is_empty());

    let json = serde_json::to_value(&state).expect("serialize");
    assert_eq!(json["selected_category"], "all");
}

#[test]
fn category_selection_admits_only_matching_records() {
    let payment = CategorySelection::from("payment");
    assert!(payment.admits(Some(Category::Payment)));
    assert!(!payment.admits(Some(Category::Courses)));
    assert!(!payment.admits(None), "uncategorised records are excluded by a specific selection");

    let unknown = CategorySelection::from("billing");
    assert!(Category::ALL.iter().all(|c| !unknown.admits(Some(*c))));

    assert!(CategorySelection::from("all").admits(None));
}

#[test]
fn facet_labels_fall_back_to_raw_key() {
    assert_eq!(facet_label("all"), "All Questions");
    assert_eq!(facet_label("payment"), "Payment & Billing");
    assert_eq!(facet_label("billing"), "billing");
    assert!("billing".parse::<Category>().is_err());
}

#[test]
fn merge_keeps_base_values_for_unset_overrides() {
    let overrides = SearchOptionsOverrides { max_results: Some(5), include_answers: Some(false), ..Default::default() };
    let merged = SearchOptions::default().merge(&overrides);
    assert_eq!(merged.max_results, 5);
    assert!(!merged.include_answers);
    assert!(merged.enable_fuzzy_search);
    assert!(merged.include_keywords);
    assert!((merged.search_threshold - 0.3).abs() < f64::EPSILON);
}

#[test]
fn default_threshold_admits_any_positive_score() {
    let options = SearchOptions::default();
    assert!(!options.passes_threshold(0));
    assert!(options.passes_threshold(1));
}

#[test]
fn validate_rejects_zero_cap_and_negative_threshold() {
    let zero = SearchOptions { max_results: 0, ..Default::default() };
    assert!(matches!(zero.validate(), Err(Error::InvalidConfig(_))));
    let negative = SearchOptions { search_threshold: -1.0, ..Default::default() };
    assert!(negative.validate().is_err());
    let nan = SearchOptions { search_threshold: f64::NAN, ..Default::default() };
    assert!(nan.validate().is_err());
    assert!(SearchOptions::default().validate().is_ok());
}

#[test]
fn config_from_toml_applies_search_overrides() {
    let config = Config::from_toml_str(
        r#"
        [search]
        max_results = 10
        enable_fuzzy_search = false

        [session]
        debounce_ms = 150

        [[facets.custom]]
        key = "payment"
        count = 4
        "#,
    )
    .expect("config");

    let options = config.search_options().expect("options");
    assert_eq!(options.max_results, 10);
    assert!(!options.enable_fuzzy_search);
    assert!(options.include_answers);
    assert_eq!(config.debounce().expect("debounce"), Duration::from_millis(150));

    let facets = config.custom_facets().expect("facets").expect("present");
    assert_eq!(facets.len(), 1);
    assert_eq!(facets[0].label, "Payment & Billing");
    assert_eq!(facets[0].count, 4);
}

#[test]
fn config_without_tables_uses_defaults() {
    let config = Config::from_toml_str("").expect("config");
    assert_eq!(config.search_options().expect("options"), SearchOptions::default());
    assert_eq!(config.debounce().expect("debounce"), Duration::from_millis(300));
    assert!(config.custom_facets().expect("facets").is_none());
}

#[test]
fn config_rejects_invalid_search_table() {
    assert!(Config::from_toml_str("[search]\nmax_results = 0\n").is_err());
}

#[test]
fn config_load_from_dir_merges_env_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("faqdb.toml"), "[data]\nrecords_path = \"faq.json\"\n[search]\nmax_results = 20\n").unwrap();
    fs::write(tmp.path().join("faqdb.test.toml"), "[search]\nmax_results = 7\n").unwrap();

    let config = Config::load_from_dir(tmp.path(), "test").expect("load");
    assert_eq!(config.search_options().expect("options").max_results, 7);
    let path = config.records_path(tmp.path()).expect("path").expect("present");
    assert_eq!(path, tmp.path().join("faq.json"));
}

#[test]
fn config_load_from_reads_base_file_and_session_table() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("faqdb.toml"), "[search]\nmax_results = 12\n[session]\ndebounce_ms = 150\n").unwrap();

    let config = Config::load_from(tmp.path()).expect("load");
    assert_eq!(config.search_options().expect("options").max_results, 12);
    assert_eq!(config.debounce().expect("debounce"), Duration::from_millis(150));
}

#[test]
fn loader_reads_single_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("faq.json");
    fs::write(&file, RECORDS_JSON).unwrap();

    let records = RecordLoader::new().load_path(&file).expect("load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "1");
}

#[test]
fn loader_concatenates_directory_in_path_order() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("nested")).unwrap();
    fs::write(tmp.path().join("b.json"), r#"[{"id": "b", "question": "B?"}]"#).unwrap();
    fs::write(tmp.path().join("a.json"), r#"[{"id": "a", "question": "A?"}]"#).unwrap();
    fs::write(tmp.path().join("nested/c.json"), r#"[{"id": "c", "question": "C?"}]"#).unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

    let ids: Vec<String> = RecordLoader::new().load_path(tmp.path()).expect("load").into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let limited = RecordLoader::new().load_directory_limited(tmp.path(), 1).expect("load limited");
    assert_eq!(limited.len(), 1);
}

#[test]
fn loader_reports_missing_path_and_bad_json() {
    let tmp = TempDir::new().unwrap();
    let missing = RecordLoader::new().load_path(&tmp.path().join("nope.json"));
    assert!(matches!(missing, Err(Error::NotFound(_))));

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(RecordLoader::new().load_path(&bad), Err(Error::Parse { .. })));
}
