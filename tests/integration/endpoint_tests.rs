// Integration tests for the per-application endpoints

use crate::common::{self, mock_get_json};
use chrono::NaiveDate;
use mockito::Server;
use uspto_odp::prelude::*;

#[tokio::test]
async fn test_get_patent_documents() {
    let mut server = Server::new_async().await;
    let mock = mock_get_json(
        &mut server,
        "/16123456/documents",
        200,
        r#"{"documentBag": [{
            "applicationNumberText": "16123456",
            "officialDate": "2023-03-01T00:00:00.000Z",
            "documentIdentifier": "LDXBTPQ7XBLUEX3",
            "documentCode": "CTNF",
            "documentCodeDescriptionText": "Non-Final Rejection",
            "directionCategory": "OUTGOING",
            "downloadOptionBag": [{"mimeTypeIdentifier": "PDF", "downloadUrl": "https://example.com/a.pdf", "pageTotalQuantity": 12}]
        }]}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let documents = client.get_patent_documents("16123456").await.unwrap();

    mock.assert_async().await;
    assert_eq!(documents.len(), 1);
    let doc = &documents.documents[0];
    assert_eq!(doc.document_code, "CTNF");
    assert_eq!(doc.download_option(MimeType::Pdf).unwrap().page_count, Some(12));
}

#[tokio::test]
async fn test_get_patent_continuity() {
    let mut server = Server::new_async().await;
    let mock = mock_get_json(
        &mut server,
        "/16123456/continuity",
        200,
        r#"{"count": 1, "patentFileWrapperDataBag": [{
            "applicationNumberText": "16123456",
            "parentContinuityBag": [{
                "parentApplicationNumberText": "15150000",
                "childApplicationNumberText": "16123456",
                "parentPatentNumber": "10000000",
                "claimParentageTypeCode": "CON"
            }]
        }]}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let continuity = client.get_patent_continuity("16123456").await.unwrap();

    mock.assert_async().await;
    let app = &continuity.continuities[0];
    assert_eq!(app.parent_numbers().collect::<Vec<_>>(), vec!["15150000"]);
    assert!(app.child_continuity.is_empty());
}

#[tokio::test]
async fn test_get_foreign_priority() {
    let mut server = Server::new_async().await;
    let mock = mock_get_json(
        &mut server,
        "/16123456/foreign-priority",
        200,
        r#"{"count": 1, "patentFileWrapperDataBag": [{
            "applicationNumberText": "16123456",
            "foreignPriorityBag": [{"ipOfficeName": "JAPAN", "filingDate": "2017-09-12", "applicationNumberText": "2017-175000"}]
        }]}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let priority = client.get_foreign_priority("16123456").await.unwrap();

    mock.assert_async().await;
    let claim = &priority.priorities[0].foreign_priorities[0];
    assert_eq!(claim.office_name, "JAPAN");
    assert_eq!(claim.filing_date, NaiveDate::from_ymd_opt(2017, 9, 12));
}

#[tokio::test]
async fn test_get_patent_transactions() {
    let mut server = Server::new_async().await;
    let mock = mock_get_json(
        &mut server,
        "/16123456/transactions",
        200,
        r#"{"count": 1, "patentFileWrapperDataBag": [{
            "applicationNumberText": "16123456",
            "eventDataBag": [
                {"eventCode": "CTNF", "eventDescriptionText": "Non-Final Rejection", "eventDate": "2023-03-01"},
                {"eventCode": "EML_NTR", "eventDescriptionText": "Email Notification", "eventDate": "2023-03-01"}
            ]
        }], "requestIdentifier": "req-tx"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let transactions = client.get_patent_transactions("16123456").await.unwrap();

    mock.assert_async().await;
    assert_eq!(transactions.events().count(), 2);
    assert_eq!(transactions.request_identifier.as_deref(), Some("req-tx"));
}

#[tokio::test]
async fn test_get_patent_assignments() {
    let mut server = Server::new_async().await;
    let mock = mock_get_json(
        &mut server,
        "/16123456/assignment",
        200,
        r#"{"count": 1, "patentFileWrapperDataBag": [{
            "applicationNumberText": "16123456",
            "assignmentBag": [{
                "reelNumber": 47999,
                "frameNumber": "1",
                "reelNumber/frameNumber": "47999/0001",
                "conveyanceText": "ASSIGNMENT OF ASSIGNORS INTEREST",
                "assignorBag": [{"assignorName": "DOE, JANE", "executionDate": "2019-01-05"}],
                "assigneeBag": [{"assigneeNameText": "ACME CORP", "assigneeAddress": {"cityName": "SPRINGFIELD"}}]
            }]
        }]}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let assignments = client.get_patent_assignments("16123456").await.unwrap();

    mock.assert_async().await;
    let record = &assignments.assignments[0].assignments[0];
    assert_eq!(record.reel_number, Some(47999));
    assert_eq!(record.frame_number, Some(1));
    assert_eq!(record.assignees[0].name, "ACME CORP");
    assert_eq!(record.assignees[0].address.city, "SPRINGFIELD");
}

#[tokio::test]
async fn test_endpoint_api_error_is_propagated() {
    let mut server = Server::new_async().await;
    let _mock = mock_get_json(
        &mut server,
        "/16123456/documents",
        400,
        r#"{"code": "400", "error": "Bad Request", "errorDetailed": "Invalid application number"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    match client.get_patent_documents("16123456").await {
        Err(AppError::Api(err)) => {
            assert_eq!(err.code, 400);
            assert_eq!(err.error_details.as_deref(), Some("Invalid application number"));
            assert_eq!(err.status_description(), "Bad Request - Invalid request parameters");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
