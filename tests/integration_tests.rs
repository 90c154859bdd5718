//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: request → XML response → decoded tables.

use rets_compact::{
    decode_metadata_str, MetadataKind, MetadataRequest, Session, SessionConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

const SYSTEM_BODY: &str = "<RETS ReplyCode=\"0\" ReplyText=\"Operation Successful\">\n\
    <METADATA-SYSTEM Version=\"1.12.30\" Date=\"2026-01-05T12:00:00Z\">\n\
    <SYSTEM SystemID=\"MLS01\" SystemDescription=\"Example MLS\"/>\n\
    <COMMENTS>Refreshed nightly.</COMMENTS>\n\
    </METADATA-SYSTEM>\n\
    </RETS>";

const TABLE_BODY: &str = "<RETS ReplyCode=\"0\" ReplyText=\"Operation Successful\">\n\
    <DELIMITER value=\"09\"/>\n\
    <METADATA-TABLE Resource=\"Property\" Class=\"RES\" Version=\"1.12.30\" Date=\"2026-01-05T12:00:00Z\">\n\
    <COLUMNS>\tSystemName\tStandardName\tDataType\t</COLUMNS>\n\
    <DATA>\tLIST_PRICE\tListPrice\tDecimal\t</DATA>\n\
    <DATA>\tLIST_DATE\tListDate\tDate\t</DATA>\n\
    <DATA>\tSTATUS\tStatus\tCharacter\t</DATA>\n\
    </METADATA-TABLE>\n\
    </RETS>";

fn mock_session(server: &MockServer) -> Session {
    Session::new(SessionConfig::new(format!("{}/getMetadata", server.uri()))).unwrap()
}

// ============================================================================
// End-to-End Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_system_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getMetadata"))
        .and(query_param("Type", "METADATA-SYSTEM"))
        .and(query_param("Format", "COMPACT"))
        .and(query_param("ID", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SYSTEM_BODY))
        .mount(&mock_server)
        .await;

    let session = mock_session(&mock_server);
    let response = session
        .get_metadata(&MetadataRequest::all(MetadataKind::System))
        .await
        .unwrap();

    assert!(response.status.is_success());
    let system = response.system().expect("system payload");
    assert_eq!(system.system_id, "MLS01");
    assert_eq!(system.description, "Example MLS");
    assert_eq!(system.comments, "Refreshed nightly.");
    assert_eq!(system.version, "1.12.30");
}

#[tokio::test]
async fn test_fetch_table_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getMetadata"))
        .and(query_param("Type", "METADATA-TABLE"))
        .and(query_param("ID", "Property:RES"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TABLE_BODY))
        .mount(&mock_server)
        .await;

    let session = mock_session(&mock_server);
    let response = session
        .get_metadata(&MetadataRequest::with_id(
            MetadataKind::Table,
            "Property:RES",
        ))
        .await
        .unwrap();

    let table = response.table().expect("tabular payload");
    assert_eq!(table.id, "Property:RES");
    assert_eq!(table.columns(), ["SystemName", "StandardName", "DataType"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("DataType", 0).unwrap(), "Decimal");
    assert_eq!(table.lookup("SystemName", 2).unwrap(), "STATUS");
}

#[tokio::test]
async fn test_fetch_empty_metadata_section() {
    let mock_server = MockServer::start().await;

    let body = r#"<RETS ReplyCode="0" ReplyText="Operation Successful"></RETS>"#;
    Mock::given(method("GET"))
        .and(path("/getMetadata"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let session = mock_session(&mock_server);
    let response = session
        .get_metadata(&MetadataRequest::all(MetadataKind::Lookup))
        .await
        .unwrap();

    assert!(response.status.is_success());
    assert!(response.payload.is_none());
}

// ============================================================================
// Offline Decode Tests
// ============================================================================

#[test]
fn test_decode_saved_response() {
    let response = decode_metadata_str(MetadataKind::Table, TABLE_BODY).unwrap();
    let table = response.table().unwrap();

    // spot-check the decoded grid through the index
    assert_eq!(table.lookup("StandardName", 1).unwrap(), "ListDate");
    assert_eq!(table.version, "1.12.30");
}

#[test]
fn test_decoded_table_is_shareable_across_threads() {
    let response = decode_metadata_str(MetadataKind::Table, TABLE_BODY).unwrap();
    let table = std::sync::Arc::new(response.table().unwrap().clone());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = table.clone();
            std::thread::spawn(move || table.lookup("SystemName", i % 3).unwrap().to_string())
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap().is_empty());
    }
}
