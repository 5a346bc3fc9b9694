use uspto_odp::model::responses::SearchResponse;

#[test]
fn test_search_response_parse() {
    let json = r#"{
        "count": 2,
        "patentFileWrapperDataBag": [
            {"applicationNumberText": "18085747", "applicationMetaData": {"patentNumber": "11989999", "docketNumber": "06-1129-C5"}},
            {"applicationNumberText": "17000001", "applicationMetaData": {}}
        ],
        "requestIdentifier": "test-request-id-123"
    }"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.count, 2);
    assert_eq!(response.request_identifier.as_deref(), Some("test-request-id-123"));
    assert_eq!(
        response.application_numbers().collect::<Vec<_>>(),
        vec!["18085747", "17000001"]
    );
    let first = response.first().unwrap();
    assert_eq!(first.metadata.patent_number.as_deref(), Some("11989999"));
    assert_eq!(first.metadata.docket_number.as_deref(), Some("06-1129-C5"));
}

#[test]
fn test_search_response_empty_body() {
    let response: SearchResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.count, 0);
    assert!(response.is_empty());
    assert!(response.into_first().is_none());
}

#[test]
fn test_search_response_null_bag() {
    let response: SearchResponse =
        serde_json::from_str(r#"{"count": null, "patentFileWrapperDataBag": null}"#).unwrap();
    assert_eq!(response.count, 0);
    assert!(response.is_empty());
}
