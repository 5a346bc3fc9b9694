use chrono::NaiveDate;
use uspto_odp::presentation::foreign_priority::ForeignPriorityCollection;

#[test]
fn test_foreign_priority_parse() {
    let json = r#"{
        "count": 1,
        "patentFileWrapperDataBag": [{
            "applicationNumberText": "16123456",
            "foreignPriorityBag": [
                {"ipOfficeName": "JAPAN", "filingDate": "2017-09-12", "applicationNumberText": "2017-175000"},
                {"ipOfficeName": "EUROPEAN PATENT OFFICE (EPO)", "filingDate": "", "applicationNumberText": "17190000.1"}
            ]
        }]
    }"#;
    let collection: ForeignPriorityCollection = serde_json::from_str(json).unwrap();
    let data = &collection.priorities[0];
    assert_eq!(data.application_number, "16123456");
    assert_eq!(data.foreign_priorities.len(), 2);
    assert_eq!(data.foreign_priorities[0].office_name, "JAPAN");
    assert_eq!(
        data.foreign_priorities[0].filing_date,
        NaiveDate::from_ymd_opt(2017, 9, 12)
    );
    assert!(data.foreign_priorities[1].filing_date.is_none());
}

#[test]
fn test_foreign_priority_empty() {
    let collection: ForeignPriorityCollection = serde_json::from_str(r#"{"count": 0}"#).unwrap();
    assert_eq!(collection.count, 0);
    assert!(collection.priorities.is_empty());
}

#[test]
fn test_foreign_priority_null_strings() {
    let json = r#"{"patentFileWrapperDataBag": [{
        "applicationNumberText": null,
        "foreignPriorityBag": [{"ipOfficeName": null, "filingDate": null, "applicationNumberText": null}]
    }]}"#;
    let collection: ForeignPriorityCollection = serde_json::from_str(json).unwrap();
    let data = &collection.priorities[0];
    assert_eq!(data.application_number, "");
    assert_eq!(data.foreign_priorities[0].office_name, "");
    assert_eq!(data.foreign_priorities[0].application_number, "");
    assert!(data.foreign_priorities[0].filing_date.is_none());
}
