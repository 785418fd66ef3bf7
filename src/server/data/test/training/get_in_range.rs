use super::*;

/// Tests that both boundary days of the range are included.
#[tokio::test]
async fn includes_both_boundary_dates() {
    let test = TestBuilder::new()
        .with_trainings(json!([
            fixture::training("So, 01.06.2025", &[]),
            fixture::training("Mi, 04.06.2025", &[]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let selected = TrainingRepository::new(&store)
        .get_in_range(day("2025-06-01"), day("2025-06-04"))
        .await;

    assert_eq!(selected.len(), 2);
}

/// Tests that trainings outside the range are not selected.
#[tokio::test]
async fn excludes_trainings_outside_the_range() {
    let test = TestBuilder::new()
        .with_trainings(json!([
            fixture::training("Sa, 31.05.2025", &[]),
            fixture::training("Mo, 02.06.2025", &[]),
            fixture::training("Do, 05.06.2025", &[]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let selected = TrainingRepository::new(&store)
        .get_in_range(day("2025-06-01"), day("2025-06-04"))
        .await;

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].date, "Mo, 02.06.2025");
}

/// Tests that the selection comes back sorted by date ascending even when
/// the collection is stored out of order.
#[tokio::test]
async fn sorts_selection_by_date_ascending() {
    let test = TestBuilder::new()
        .with_trainings(json!([
            fixture::training("Mi, 04.06.2025", &[]),
            fixture::training("So, 01.06.2025", &[]),
            fixture::training("Mo, 02.06.2025", &[]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let selected = TrainingRepository::new(&store)
        .get_in_range(day("2025-06-01"), day("2025-06-04"))
        .await;

    let dates: Vec<&str> = selected.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["So, 01.06.2025", "Mo, 02.06.2025", "Mi, 04.06.2025"]
    );
}

/// Tests that a record with an unparseable date is skipped rather than
/// aborting the selection.
#[tokio::test]
async fn skips_unparseable_dates() {
    let test = TestBuilder::new()
        .with_trainings(json!([
            fixture::training("irgendwann", &[]),
            fixture::training("Mo, 02.06.2025", &[]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let selected = TrainingRepository::new(&store)
        .get_in_range(day("2025-06-01"), day("2025-06-04"))
        .await;

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].date, "Mo, 02.06.2025");
}
