use super::*;

/// Tests opening a data directory with no collection files.
///
/// Verifies that every collection starts out empty at version zero instead
/// of failing on the missing files.
#[tokio::test]
async fn starts_empty_when_files_are_missing() {
    let test = TestBuilder::new().build().unwrap();

    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let (version, users) = store.users().get_all().await;
    assert_eq!(version, 0);
    assert!(users.is_empty());

    let (_, players) = store.players().get_all().await;
    assert!(players.is_empty());

    let (_, trainings) = store.trainings().get_all().await;
    assert!(trainings.is_empty());
}

/// Tests opening a data directory with seeded collection files.
///
/// Verifies that records come back with their fields intact.
#[tokio::test]
async fn loads_seeded_collections() {
    let test = TestBuilder::new()
        .with_users(json!([fixture::user("Matthias", "geheim")]))
        .with_players(json!([fixture::player("Anna", "01.01.2024")]))
        .with_trainings(json!([fixture::training("Mo, 02.06.2025", &[("Anna", "✅")])]))
        .build()
        .unwrap();

    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let (_, users) = store.users().get_all().await;
    assert_eq!(
        users,
        vec![User {
            name: "Matthias".to_string(),
            password: "geheim".to_string(),
        }]
    );

    let (_, players) = store.players().get_all().await;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Anna");
    assert!(!players[0].is_trainer);

    let (_, trainings) = store.trainings().get_all().await;
    assert_eq!(trainings.len(), 1);
    assert_eq!(trainings[0].date, "Mo, 02.06.2025");
}

/// Tests opening a directory whose collection file is not an array of
/// records.
///
/// Expected: Err(StoreError::Corrupt)
#[tokio::test]
async fn fails_on_corrupt_collection_file() {
    let test = TestBuilder::new()
        .with_collection("players", json!({ "bogus": true }))
        .build()
        .unwrap();

    let result = JsonStore::open(test.data_dir()).await;

    assert!(matches!(
        result,
        Err(StoreError::Corrupt {
            collection: "players",
            ..
        })
    ));
}
