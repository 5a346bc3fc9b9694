use assert_json_diff::assert_json_eq;
use serde_json::json;
use uspto_odp::error::AppError;
use uspto_odp::model::requests::{SearchRequest, normalize_patent_number};

#[test]
fn test_search_request_by_patent_number_body() {
    let request = SearchRequest::by_patent_number("US11,989,999").unwrap();
    let body = serde_json::to_value(&request).unwrap();
    assert_json_eq!(
        body,
        json!({"filters": {"applicationMetaData.patentNumber": "11989999"}})
    );
}

#[test]
fn test_search_request_same_body_for_all_formats() {
    let a = SearchRequest::by_patent_number("US11,989,999").unwrap();
    let b = SearchRequest::by_patent_number("11,989,999").unwrap();
    let c = SearchRequest::by_patent_number("11989999").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_search_request_full_body() {
    let request = SearchRequest::new()
        .with_query("barcode scanner")
        .with_filter("applicationMetaData.applicationTypeCode", "UTL")
        .with_pagination(25, 50);
    let body = serde_json::to_value(&request).unwrap();
    assert_json_eq!(
        body,
        json!({
            "q": "barcode scanner",
            "filters": {"applicationMetaData.applicationTypeCode": "UTL"},
            "pagination": {"offset": 25, "limit": 50}
        })
    );
}

#[test]
fn test_search_request_empty() {
    assert!(SearchRequest::new().is_empty());
    assert!(SearchRequest::new().with_query("  ").is_empty());
    assert!(!SearchRequest::new().with_query("x").is_empty());
    assert_json_eq!(serde_json::to_value(SearchRequest::new()).unwrap(), json!({}));
}

#[test]
fn test_search_request_invalid_patent_number() {
    let result = SearchRequest::by_patent_number("not a number");
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_normalize_patent_number_strips_kind_code() {
    assert_eq!(normalize_patent_number("US 7,654,321 B2").unwrap(), "7654321");
    assert_eq!(normalize_patent_number("RE48,123 E").unwrap(), "RE48123");
}
