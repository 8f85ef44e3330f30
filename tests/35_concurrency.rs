mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Identity assignment reads MAX+1 inside a serializable transaction, so two
/// concurrent creates may serialize (two distinct identities) or one may fail
/// with an observable conflict. What must never happen: a success body with a
/// missing or duplicated identity.
#[tokio::test]
async fn concurrent_creates_never_produce_silent_duplicates() -> Result<()> {
    if !common::db_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Targets for the foreign keys
    let citizen = client
        .post(format!("{}/api/citizens", server.base_url))
        .json(&json!({ "name": "Ravi Kumar" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let citizen_id = citizen["data"]["citizen_id"]
        .as_i64()
        .expect("citizen create must succeed before the concurrency run");

    let service = client
        .post(format!("{}/api/services", server.base_url))
        .json(&json!({ "name": "Birth Certificate", "fee": 50.0 }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let service_id = service["data"]["service_id"]
        .as_i64()
        .expect("service create must succeed before the concurrency run");

    let payload = json!({
        "citizen_id": citizen_id,
        "service_id": service_id,
        "status": "Pending",
        "request_date": "2025-02-01"
    });

    let url = format!("{}/api/service-requests", server.base_url);
    let (a, b) = tokio::join!(
        client.post(&url).json(&payload).send(),
        client.post(&url).json(&payload).send(),
    );

    let mut ids = Vec::new();
    for res in [a?, b?] {
        let status = res.status();
        let body = res.json::<Value>().await?;
        match status {
            StatusCode::CREATED => {
                let id = body["data"]["request_id"]
                    .as_i64()
                    .expect("success body must carry an identity");
                assert!(id > 0, "identity must be positive: {}", body);
                ids.push(id);
            }
            // Visible collision is a legitimate outcome
            StatusCode::CONFLICT | StatusCode::BAD_REQUEST => {
                assert_eq!(body["success"], false, "body: {}", body);
            }
            other => panic!("unexpected status {}: {}", other, body),
        }
    }

    if ids.len() == 2 {
        assert_ne!(ids[0], ids[1], "duplicate identities handed out silently");
    }

    Ok(())
}
