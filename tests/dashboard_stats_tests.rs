//! Integration tests for the dashboard statistics

use aerostaff::prelude::*;
use chrono::{Duration, TimeZone};
use std::fs;
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

fn agg() -> StatsAggregator<Utc> {
    StatsAggregator::at(now(), Utc)
}

fn days_ago(days: i64) -> String {
    (now() - Duration::days(days)).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn seekers(offsets: &[i64]) -> Vec<JobSeeker> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| JobSeeker {
            id: format!("js-{}", i),
            date_inscription: Some(days_ago(*offset)),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_five_new_records_report_full_increase() {
    let records = seekers(&[1, 3, 8, 15, 29]);
    let stats = agg().entity_stats(&records, "dateInscription", 30);

    assert_eq!(stats.total, 5);
    assert_eq!(stats.window_count, 5);
    assert_eq!(stats.previous_window_count, 0);
    assert_eq!(stats.trend_percent, 100);
}

#[test]
fn test_trend_against_previous_window() {
    // 3 in the last 30 days, 4 in the 30 days before
    let records = seekers(&[2, 10, 20, 35, 40, 50, 58, 120]);
    let stats = agg().entity_stats(&records, "dateInscription", 30);

    assert_eq!(stats.total, 8);
    assert_eq!((stats.window_count, stats.previous_window_count), (3, 4));
    assert_eq!(stats.trend_percent, -25);
}

#[test]
fn test_dashboard_from_fixture_dir() {
    let dir = TempDir::new().unwrap();
    let write = |name: &str, value: serde_json::Value| {
        fs::write(dir.path().join(name), value.to_string()).unwrap();
    };

    write(
        "professionals.json",
        serde_json::json!([
            {"id": "p1", "dateInscription": "2024-06-25"},
            {"id": "p2", "dateInscription": "2024-04-01"}
        ]),
    );
    write("professional-pending.json", serde_json::json!([{"id": "p3"}]));
    write(
        "job-seekers.json",
        serde_json::json!([
            {"id": "j1", "dateInscription": "2024-06-28 10:00:00"},
            {"id": "j2", "dateInscription": "2024-06-10 10:00:00"}
        ]),
    );
    write("job-seekers-pending.json", serde_json::json!([{"id": "j3"}, {"id": "j4"}]));
    write(
        "job-offers.json",
        serde_json::json!([
            {"id": "o1", "titre": "Pilote", "etat": "En ligne", "datePublication": "2024-06-29"},
            {"id": "o2", "titre": "Mécanicien", "etat": "Expirée", "datePublication": "2024-06-01"}
        ]),
    );
    write(
        "inspirations.json",
        serde_json::json!([
            {"id": "i1", "titre": "a", "statut": "approved", "categorie": "Pilotage", "createdAt": "2024-06-27T09:00:00Z"},
            {"id": "i2", "titre": "b", "statut": "archived", "categorie": "Cabine", "createdAt": "2024-03-01T09:00:00Z"},
            {"id": "i3", "titre": "c", "statut": "approved", "categorie": "Pilotage", "createdAt": "2024-06-10T09:00:00Z"}
        ]),
    );
    write("inspirations-rejected.json", serde_json::json!([{"id": "i4", "statut": "rejected"}]));

    let data = DashboardData::load_dir(dir.path()).unwrap();
    let stats = agg().dashboard_stats(&data.sources(), 30);

    assert_eq!(stats.professionals.total, 2);
    assert_eq!(stats.professionals.pending, 1);
    assert_eq!(stats.job_seekers.pending, 2);
    assert_eq!(stats.job_seekers.rejected, 0);
    assert_eq!(stats.job_offers.active, 1);
    assert_eq!(stats.inspirations.approved, 2);
    assert_eq!(stats.inspirations.archived, 1);
    assert_eq!(stats.inspirations.rejected, 1);
    assert_eq!(stats.pending_validations, 3);

    // p1, j1, o1, i1 in the last week; plus j2, o2, i3 in the last month
    assert_eq!(stats.recent_activity.last_7_days, 4);
    assert_eq!(stats.recent_activity.last_30_days, 7);

    let categories = stats.category_distribution();
    assert_eq!(categories[0].category, "Pilotage");
    assert_eq!(categories[0].value, 2);
    assert_eq!(categories[1].category, "Cabine");
}

#[test]
fn test_configured_fields_drive_the_stats() {
    let yaml = r#"
entities:
  - name: inspirations
    label: Inspirations
    date_field: datePublication
    category_field: auteur
"#;
    let config = DashboardConfig::from_yaml_str(yaml).unwrap();
    let data = DashboardData {
        inspirations: vec![
            Inspiration {
                id: "i1".to_string(),
                auteur: Some("Claire".to_string()),
                categorie: Some("Pilotage".to_string()),
                created_at: Some("2023-01-10".to_string()),
                date_publication: Some("2024-06-28".to_string()),
                ..Default::default()
            },
            Inspiration {
                id: "i2".to_string(),
                auteur: Some("Claire".to_string()),
                created_at: Some("2024-06-29".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    let stats = agg().dashboard_stats(&data.sources(), 30);
    assert_eq!(stats.recent_activity.last_7_days, 1);
    assert_eq!(stats.inspirations.by_category.get("Pilotage"), Some(&1));

    let sources = data.sources_with(config.dashboard_fields());
    let stats = agg().dashboard_stats(&sources, 30);
    assert_eq!(stats.recent_activity.last_7_days, 1);
    assert_eq!(stats.inspirations.by_category.get("Claire"), Some(&2));
    assert_eq!(stats.inspirations.by_category.get("Pilotage"), None);

    let overview = agg().activity_overview(&sources, 7);
    let day = overview.iter().find(|b| b.date == "2024-06-28").expect("bucket exists");
    assert_eq!(day.get("inspirations"), 1);
    // job seekers keep their built-in date field
    assert_eq!(sources.fields.job_seekers_date, "dateInscription");
}

#[test]
fn test_chart_series_are_dense_and_ascending() {
    let job_seekers = seekers(&[0, 1, 1, 89, 200]);
    let sources = DashboardSources {
        job_seekers: &job_seekers,
        ..Default::default()
    };

    let trends = agg().registration_trends(&sources, 90);
    assert_eq!(trends.len(), 90);
    assert_eq!(trends.first().map(|b| b.date.as_str()), Some("2024-04-01"));
    assert_eq!(trends.last().map(|b| b.date.as_str()), Some("2024-06-29"));
    assert!(trends.windows(2).all(|w| w[0].date < w[1].date));

    // today's registration has no bucket yet, the one from 200 days ago is out of range
    let total: u64 = trends.iter().map(|b| b.get("jobSeekers")).sum();
    assert_eq!(total, 3);
    assert!(trends.iter().all(|b| b.get("professionals") == 0));
}

#[test]
fn test_unparseable_dates_count_in_total_only() {
    let mut records = seekers(&[1]);
    records.push(JobSeeker {
        date_inscription: Some("31/12/2023".to_string()),
        ..Default::default()
    });
    records.push(JobSeeker::default());

    let stats = agg().entity_stats(&records, "dateInscription", 30);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.window_count, 1);
}

#[test]
fn test_parse_date_shapes() {
    assert_eq!(
        parse_date_in("2024-05-02", &Utc),
        Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap())
    );
    assert_eq!(
        parse_date_in("2024-05-02 14:21:00", &Utc),
        parse_date_in("2024-05-02", &Utc)
    );
    assert_eq!(
        parse_date_in("2024-05-02T14:21:00Z", &Utc),
        Some(Utc.with_ymd_and_hms(2024, 5, 2, 14, 21, 0).unwrap())
    );
    assert_eq!(parse_date_in("", &Utc), None);
    assert_eq!(parse_date_in("2024-02-30", &Utc), None);
}
