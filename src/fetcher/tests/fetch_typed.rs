//! Tests for fetch_as typed decoding.
//!
//! Verifies that JSON documents are mapped onto the typed models, and that shape mismatches
//! surface as decode errors against the fetched URL.

use serde::Deserialize;

use super::*;
use crate::model::swapi::{Person, Reference};

/// Expect Ok with a typed person for a well-formed payload
#[tokio::test]
async fn decodes_person_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_person_endpoint(3, 1).build().await?;

    let client = SwapiClient::new(test.http_client.clone());
    let person: Person = fetch_as(&client, &test.person_url(3)).await.unwrap();

    assert_eq!(person.name.as_deref(), Some("Person 3"));
    assert_eq!(person.self_url(), Some(test.person_url(3).as_str()));

    test.assert_mocks();

    Ok(())
}

/// Expect Decode error when valid JSON has the wrong shape
#[tokio::test]
async fn fails_with_decode_on_unexpected_shape() -> Result<(), TestError> {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Strict {
        required: u32,
    }

    let test = TestBuilder::new().with_person_endpoint(1, 1).build().await?;

    let client = SwapiClient::new(test.http_client.clone());
    let result = fetch_as::<Strict, _>(&client, &test.person_url(1)).await;

    match result {
        Err(FetchError::Decode { url, .. }) => assert_eq!(url, test.person_url(1)),
        other => panic!("Expected Decode error, got {:?}", other),
    }

    Ok(())
}

/// Expect Decode error when the body is a JSON array instead of an object
///
/// Arrays with enough elements would otherwise be mapped onto struct fields by position.
#[tokio::test]
async fn fails_with_decode_on_array_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/films/1/")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"["not","an","object"]"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let url = format!("{}/films/1/", test.base_url());
    let client = SwapiClient::new(test.http_client.clone());
    let result = fetch_as::<Reference, _>(&client, &url).await;

    match result {
        Err(FetchError::Decode { url: failed_url, reason }) => {
            assert_eq!(failed_url, url);
            assert_eq!(reason, "expected a JSON object");
        }
        other => panic!("Expected Decode error, got {:?}", other),
    }

    test.assert_mocks();

    Ok(())
}
