//! Integration tests for the CLI pipeline module.

use std::io::Write;

use tempfile::NamedTempFile;

use rms_cli::pipeline::{SummaryRequest, run_breakdown, run_dimensions, run_summary};

const EXPORT: &str = "\
Site Id,Region,Sub Region,Device Brand,Reason,Offline Date,Days Passed,Aging,Domain
S1,Sindh,N,X,Power,2025-01-01,120,100+ Days,Enfra
S2,Sindh,N,Y,Power,2025-02-01,10,30 Days,SMS LD
S3,Punjab,S,X,,,,,
";

fn write_export() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{EXPORT}").unwrap();
    file
}

#[test]
fn summary_without_filters_covers_every_row() {
    let file = write_export();
    let result = run_summary(file.path(), &SummaryRequest {
        reason_limit: 10,
        ..SummaryRequest::default()
    })
    .unwrap();

    assert_eq!(result.rows_loaded, 3);
    assert_eq!(result.rows_skipped, 0);
    assert_eq!(result.filtered_count, 3);
    assert_eq!(result.summary.total_count, 3);
    assert_eq!(result.summary.avg_days, 43.3);
    assert_eq!(result.summary.most_common_reason, "Power");
    assert_eq!(result.summary.critical_count, 1);
}

#[test]
fn summary_honors_region_filter() {
    let file = write_export();
    let result = run_summary(file.path(), &SummaryRequest {
        regions: vec!["N".to_string()],
        reason_limit: 10,
        ..SummaryRequest::default()
    })
    .unwrap();

    assert_eq!(result.filtered_count, 2);
    assert_eq!(result.summary.total_count, 2);
    assert_eq!(result.summary.avg_days, 65.0);
    assert_eq!(result.summary.critical_count, 1);
}

#[test]
fn summary_result_serializes_for_the_machine_interface() {
    let file = write_export();
    let result = run_summary(file.path(), &SummaryRequest {
        reason_limit: 10,
        ..SummaryRequest::default()
    })
    .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"total_count\":3"));
    assert!(json.contains("\"most_common_reason\":\"Power\""));
}

#[test]
fn breakdown_cross_tabulates_by_domain() {
    let file = write_export();
    let result = run_breakdown(file.path()).unwrap();

    assert_eq!(result.breakdown.enfra, 1);
    assert_eq!(result.breakdown.sms_ld, 1);
    assert_eq!(result.breakdown.others, 1);
    assert_eq!(result.breakdown.total, 3);

    assert_eq!(result.region_domain.len(), 3);
    assert_eq!(result.region_domain[0].region, "Sindh");
    assert_eq!(result.region_domain[0].domain, "Enfra");

    assert_eq!(result.enfra_aging.len(), 1);
    assert_eq!(result.enfra_aging[0].category, "100+ Days");
    assert_eq!(result.top_reasons[0].category, "Power");
}

#[test]
fn dimensions_lists_distinct_values_in_first_seen_order() {
    let file = write_export();
    let result = run_dimensions(file.path()).unwrap();

    let sub_region = result
        .dimensions
        .iter()
        .find(|entry| entry.dimension == "sub_region")
        .unwrap();
    assert_eq!(sub_region.values, vec!["N".to_string(), "S".to_string()]);

    let aging = result
        .dimensions
        .iter()
        .find(|entry| entry.dimension == "aging_category")
        .unwrap();
    assert_eq!(
        aging.values,
        vec![
            "100+ Days".to_string(),
            "30 Days".to_string(),
            "Unknown".to_string()
        ]
    );
}

#[test]
fn missing_export_is_an_error() {
    let result = run_summary(
        std::path::Path::new("/nonexistent/DB.csv"),
        &SummaryRequest::default(),
    );
    assert!(result.is_err());
}
