use super::*;

/// Tests the reference scenario: two trainings in range, one attended and
/// one declined, gives 50% with the matching phrases.
#[tokio::test]
async fn computes_percentage_and_details() {
    let test = TestBuilder::new()
        .with_players(json!([fixture::player("Anna", "01.01.2024")]))
        .with_trainings(json!([
            fixture::training("Mo, 02.06.2025", &[("Anna", "✅")]),
            fixture::training("Di, 03.06.2025", &[("Anna", "❌")]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let report = ReportService::new(&store)
        .attendance(range("2025-06-01", "2025-06-04"))
        .await
        .unwrap();

    assert_eq!(report.training_count, 2);
    assert_eq!(report.players.len(), 1);

    let anna = &report.players[0];
    assert_eq!(anna.name, "Anna");
    assert_eq!(anna.join_date, "01.01.2024");
    assert_eq!(anna.percent, 50);
    assert_eq!(anna.details.len(), 2);
    assert_eq!(anna.details[0].date, "Mo, 02.06.2025");
    assert_eq!(anna.details[0].status_text, "TEILNEHMEND");
    assert_eq!(anna.details[1].date, "Di, 03.06.2025");
    assert_eq!(anna.details[1].status_text, "ABGEMELDET");
}

/// Tests that trainings on the boundary days count toward the report.
#[tokio::test]
async fn includes_boundary_trainings() {
    let test = TestBuilder::new()
        .with_players(json!([fixture::player("Anna", "01.01.2024")]))
        .with_trainings(json!([
            fixture::training("So, 01.06.2025", &[("Anna", "✅")]),
            fixture::training("Mi, 04.06.2025", &[("Anna", "✅")]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let report = ReportService::new(&store)
        .attendance(range("2025-06-01", "2025-06-04"))
        .await
        .unwrap();

    assert_eq!(report.training_count, 2);
    assert_eq!(report.players[0].percent, 100);
}

/// Tests that a range containing no trainings aborts the report instead of
/// producing 0% entries.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn errors_when_no_trainings_in_range() {
    let test = TestBuilder::new()
        .with_players(json!([fixture::player("Anna", "01.01.2024")]))
        .with_trainings(json!([fixture::training("Mo, 02.06.2025", &[("Anna", "✅")])]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let result = ReportService::new(&store)
        .attendance(range("2025-07-01", "2025-07-31"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests the rounding rule: 2 attended of 3 selected is 67%, not 66%.
#[tokio::test]
async fn rounds_percentage_half_up() {
    let test = TestBuilder::new()
        .with_players(json!([fixture::player("Anna", "01.01.2024")]))
        .with_trainings(json!([
            fixture::training("Mo, 02.06.2025", &[("Anna", "✅")]),
            fixture::training("Di, 03.06.2025", &[("Anna", "✅")]),
            fixture::training("Mi, 04.06.2025", &[("Anna", "❌")]),
        ]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let report = ReportService::new(&store)
        .attendance(range("2025-06-01", "2025-06-07"))
        .await
        .unwrap();

    assert_eq!(report.players[0].percent, 67);
}

/// Tests that trainers do not appear in the report and that the remaining
/// players keep roster order.
#[tokio::test]
async fn excludes_trainers_and_keeps_roster_order() {
    let test = TestBuilder::new()
        .with_players(json!([
            fixture::player("Zoe", "01.01.2024"),
            fixture::trainer("Tim", "01.01.2023"),
            fixture::player("Anna", "01.01.2024"),
        ]))
        .with_trainings(json!([fixture::training_with_trainers(
            "Mo, 02.06.2025",
            &[("Anna", "✅"), ("Zoe", "⏳")],
            &[("Tim", "Zugesagt")],
        )]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let report = ReportService::new(&store)
        .attendance(range("2025-06-01", "2025-06-04"))
        .await
        .unwrap();

    let names: Vec<&str> = report.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Zoe"]);
}

/// Tests that players without an entry in a training get the default phrase
/// and no attendance credit, and that unknown icons never count as
/// attending.
#[tokio::test]
async fn defaults_missing_and_unknown_icons() {
    let test = TestBuilder::new()
        .with_players(json!([
            fixture::player("Anna", "01.01.2024"),
            fixture::player("Mia", "01.02.2024"),
        ]))
        .with_trainings(json!([fixture::training(
            "Mo, 02.06.2025",
            &[("Mia", "🤷")],
        )]))
        .build()
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await.unwrap();

    let report = ReportService::new(&store)
        .attendance(range("2025-06-01", "2025-06-04"))
        .await
        .unwrap();

    for entry in &report.players {
        assert_eq!(entry.percent, 0);
        assert_eq!(
            entry.details[0].status_text,
            "ZUGESAGT, ABER NICHT ERSCHIENEN"
        );
    }
}
