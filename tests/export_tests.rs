//! Integration tests for CSV export

use aerostaff::prelude::*;
use chrono::NaiveDate;

#[test]
fn test_export_job_offers() {
    let offers = vec![
        JobOffer {
            id: "o1".to_string(),
            offre_numero: Some(42),
            titre: "Pilote, A320".to_string(),
            entreprise: Some("Air Horizon".to_string()),
            etat: Some("En ligne".to_string()),
            ..Default::default()
        },
        JobOffer {
            id: "o2".to_string(),
            titre: "Technicien".to_string(),
            ..Default::default()
        },
    ];

    let csv = to_csv(
        &offers,
        &["N°", "Titre", "Entreprise", "État"],
        &["offreNumero", "titre", "entreprise", "etat"],
    )
    .unwrap();

    let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').split('\n').collect();
    assert!(csv.starts_with('\u{feff}'));
    assert_eq!(
        lines,
        vec![
            "N°,Titre,Entreprise,État",
            "42,\"Pilote, A320\",Air Horizon,En ligne",
            ",Technicien,,",
        ]
    );
}

#[test]
fn test_export_errors() {
    let offers: Vec<JobOffer> = Vec::new();
    let err = to_csv(&offers, &["Titre"], &["titre"]).unwrap_err();
    assert_eq!(err.to_string(), "No data to export");

    let offers = vec![JobOffer::default()];
    let err = to_csv(&offers, &["Titre"], &["titre", "etat"]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::HeaderMismatch {
            headers: 1,
            fields: 2
        }
    ));
}

#[test]
fn test_filename_with_date() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    assert_eq!(filename_with_date("inspirations", date), "inspirations-2025-01-09");
}
