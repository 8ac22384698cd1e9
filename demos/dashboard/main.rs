//! Dashboard walkthrough
//!
//! This example demonstrates:
//! - Loading the fixture set from a directory, or building sample data
//! - Running a table query with search, multi-key sort and pagination
//! - Computing the dashboard statistics and chart series
//! - Exporting the visible page as CSV
//!
//! ```text
//! cargo run --example dashboard                # built-in sample data
//! cargo run --example dashboard -- data/mock   # fixture directory
//! ```

use aerostaff::prelude::*;
use anyhow::Result;
use chrono::Duration;

fn sample_data(now: DateTime<Utc>) -> DashboardData {
    let day = |offset: i64| (now - Duration::days(offset)).format("%Y-%m-%d").to_string();

    let seeker = |id: &str, nom: &str, pays: &str, offset: i64| JobSeeker {
        id: id.to_string(),
        nom_complet: nom.to_string(),
        email: format!("{}@example.com", id),
        pays: Some(pays.to_string()),
        date_inscription: Some(format!("{} 09:30:00", day(offset))),
        ..Default::default()
    };

    let offer = |id: &str, titre: &str, etat: &str, offset: i64| JobOffer {
        id: id.to_string(),
        titre: titre.to_string(),
        etat: Some(etat.to_string()),
        date_publication: Some(day(offset)),
        ..Default::default()
    };

    let inspiration = |id: &str, categorie: &str, statut: InspirationStatus, offset: i64| Inspiration {
        id: id.to_string(),
        titre: format!("Parcours {}", id),
        categorie: Some(categorie.to_string()),
        statut,
        created_at: Some(format!("{}T08:00:00Z", day(offset))),
        ..Default::default()
    };

    DashboardData {
        job_seekers: vec![
            seeker("js-1", "Amina Diallo", "Sénégal", 2),
            seeker("js-2", "Lucas Martin", "France", 5),
            seeker("js-3", "Sofia Rossi", "Italie", 12),
            seeker("js-4", "Karim Benali", "France", 40),
            seeker("js-5", "Nadia Haddad", "Maroc", 45),
        ],
        job_seekers_pending: vec![seeker("js-6", "Yann Le Gall", "France", 1)],
        professionals: vec![Professional {
            id: "pro-1".to_string(),
            nom_complet: "Claire Dubois".to_string(),
            entreprise: Some("Air Horizon".to_string()),
            date_inscription: Some(day(3)),
            ..Default::default()
        }],
        job_offers: vec![
            offer("of-1", "Pilote de ligne A320", "En ligne", 4),
            offer("of-2", "Technicien avionique", "Expirée", 20),
            offer("of-3", "Hôtesse de l'air", "En ligne", 33),
        ],
        inspirations: vec![
            inspiration("in-1", "Pilotage", InspirationStatus::Approved, 6),
            inspiration("in-2", "Cabine", InspirationStatus::Approved, 15),
            inspiration("in-3", "Pilotage", InspirationStatus::Archived, 50),
        ],
        inspirations_pending: vec![inspiration("in-4", "Maintenance", InspirationStatus::Pending, 1)],
        ..Default::default()
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("✈️  Aerostaff Dashboard Example");
    println!("===============================\n");

    let config = DashboardConfig::default_config();
    let aggregator = StatsAggregator::now();

    let data = match std::env::args().nth(1) {
        Some(dir) => DashboardData::load_dir(&dir)?,
        None => sample_data(aggregator.reference_time()),
    };

    // Table query: French candidates, newest first
    let mut view = config.view_state_for("job_seekers")?;
    view.set_page_size(2);
    view.set_search("france");
    view.toggle_sort("dateInscription");
    view.toggle_sort("dateInscription");

    let fields = config.searchable_fields("job_seekers")?;
    let page = TableQueryEngine::run(&data.job_seekers, &view, &fields)?;
    let meta = page.meta(&view);

    println!("📋 Job seekers matching {:?}", view.search);
    for seeker in &page.data {
        println!(
            "   - {} ({})",
            seeker.nom_complet,
            seeker.date_inscription.as_deref().unwrap_or("-")
        );
    }
    println!(
        "   page {}/{} · {} results\n",
        meta.page_index + 1,
        meta.total_pages,
        meta.total
    );

    // Statistics
    let sources = data.sources_with(config.dashboard_fields());
    let stats = aggregator.dashboard_stats(&sources, config.stats.trend_window_days);
    println!("📊 Dashboard statistics");
    println!("{}\n", serde_json::to_string_pretty(&stats)?);

    for slice in stats.status_breakdown() {
        println!("   {:<12} {}", slice.label, slice.value);
    }

    let trends = aggregator.registration_trends(&sources, config.stats.chart_days);
    let active_days = trends
        .iter()
        .filter(|bucket| bucket.get("jobSeekers") + bucket.get("professionals") > 0)
        .count();
    println!(
        "\n📈 {} daily points, {} days with registrations",
        trends.len(),
        active_days
    );

    // Export
    let rows: Vec<JobSeeker> = page.into_owned().0;
    let csv = to_csv(&rows, &["Nom complet", "Email", "Pays"], &["nomComplet", "email", "pays"])?;
    let name = filename_with_date("chercheurs-emploi", Local::now().date_naive());
    println!("\n💾 {}.csv ({} bytes)", name, csv.len());

    Ok(())
}
