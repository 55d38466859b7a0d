use serde_json::json;
use transcend_client::mock::MockTransport;
use transcend_client::{ClientError, GraphqlRequest, OperationKind, Transport, decode};

#[derive(Debug, serde::Deserialize)]
struct Ack {
    success: bool,
}

#[tokio::test]
async fn replays_in_order_and_records_requests() {
    let mock = MockTransport::new();
    mock.push_data(json!({ "success": true }));
    mock.push_error(ClientError::MissingData);
    assert_eq!(mock.pending(), 2);

    let first = mock
        .mutate(GraphqlRequest::new("mutation A { a }", "A", json!({ "x": 1 })))
        .await
        .unwrap();
    let ack: Ack = decode(first).unwrap();
    assert!(ack.success);

    let second = mock
        .query(GraphqlRequest::new("query B { b }", "B", json!({})))
        .await;
    assert!(second.is_err());

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].kind, OperationKind::Mutation);
    assert_eq!(requests[0].request.variables["x"], 1);
    assert_eq!(requests[1].kind, OperationKind::Query);
    assert_eq!(requests[1].request.name(), "B");
}

#[tokio::test]
async fn empty_queue_is_missing_data() {
    let mock = MockTransport::new();
    let result = mock.query(GraphqlRequest::new("{ x }", "X", json!(null))).await;
    assert!(matches!(result, Err(ClientError::MissingData)));
}
