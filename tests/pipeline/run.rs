//! End-to-end tests of a pipeline run against a mock SWAPI server and SQLite.

use super::*;

/// Tests loading five people in one chunk.
///
/// Every person references film 1 and planet 1, so each of those is requested once per person.
///
/// Expected: five rows with IDs 1..=5 and their references flattened
#[tokio::test]
async fn loads_people_into_database() -> Result<(), TestError> {
    let mut builder = TestBuilder::new()
        .with_film_endpoint(1, 5)
        .with_planet_endpoint(1, 5);
    for id in 1..=5 {
        builder = builder.with_person_endpoint(id, 1);
    }
    let test = builder.build().await?;

    let result = driver(&test, 1..6, 5).run().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let summary = result.unwrap();
    assert!(summary.is_success());
    assert_eq!(summary.records_persisted(), 5);

    let rows = PeopleRepository::new(test.db.clone()).get_all().await?;
    assert_eq!(
        rows.iter().map(|row| row.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(rows[0].name.as_deref(), Some("Person 1"));
    assert_eq!(rows[0].films, "Film 1");
    assert_eq!(rows[0].homeworld.as_deref(), Some("Planet 1"));
    assert_eq!(rows[0].species, "");

    test.assert_mocks();

    Ok(())
}

/// Tests that a missing person fails only its own chunk.
///
/// Expected: chunk 0 stored, chunk 1 reported as failed
#[tokio::test]
async fn failed_chunk_does_not_block_others() -> Result<(), TestError> {
    let mut builder = TestBuilder::new()
        .with_film_endpoint(1, 5)
        .with_planet_endpoint(1, 5)
        .with_status_endpoint("/people/6/", 404, 1);
    for id in 1..=5 {
        builder = builder.with_person_endpoint(id, 1);
    }
    let test = builder.build().await?;

    let summary = driver(&test, 1..7, 5)
        .run()
        .await
        .expect("reset should succeed");

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 1);

    let rows = PeopleRepository::new(test.db.clone()).get_all().await?;
    assert_eq!(rows.len(), 5);

    test.assert_mocks();

    Ok(())
}
