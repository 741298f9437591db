use tourdb_core::{filter_and_sort, Criteria, Package};
use tourdb_sheets::SheetsClient;

/// List packages, scoped to a destination when given, then filtered and
/// sorted by the criteria.
pub(crate) async fn run_packages(
    client: &SheetsClient,
    destination: Option<&str>,
    criteria: &Criteria,
) -> anyhow::Result<()> {
    let all = client.get_packages().await?;
    let scoped: Vec<Package> = all
        .into_iter()
        .filter(|p| destination.is_none_or(|slug| p.destination == slug))
        .collect();
    let selected = filter_and_sort(&scoped, criteria);

    if selected.is_empty() {
        println!(
            "no packages match the current filters{}; try widening the selection",
            destination
                .map(|s| format!(" for destination {s}"))
                .unwrap_or_default()
        );
        return Ok(());
    }

    let header = format!(
        "{:<10}{:<14}{:<7}{:<8}{:<10}TITLE",
        "ID", "DESTINATION", "DAYS", "RATING", "PRICE"
    );
    println!("{header}");
    for package in &selected {
        let title_display = if package.title.chars().count() > 50 {
            format!("{}...", package.title.chars().take(50).collect::<String>())
        } else {
            package.title.clone()
        };
        println!(
            "{:<10}{:<14}{:<7}{:<8}{:<10}{}",
            package.id,
            package.destination,
            format!("{}d/{}n", package.days, package.nights),
            package.rating,
            package.price,
            title_display
        );
    }
    println!();
    println!("showing {} of {} packages", selected.len(), scoped.len());

    Ok(())
}

/// List every destination with its slug, so the slug can be fed back into
/// `packages --destination`.
pub(crate) async fn run_destinations(client: &SheetsClient) -> anyhow::Result<()> {
    let destinations = client.get_destinations().await?;

    if destinations.is_empty() {
        println!("no destinations found");
        return Ok(());
    }

    let header = format!("{:<14}{:<18}{:<12}SUBTITLE", "SLUG", "NAME", "COUNTRY");
    println!("{header}");
    for destination in &destinations {
        let country = destination.country.as_deref().unwrap_or("-");
        println!(
            "{:<14}{:<18}{:<12}{}",
            destination.slug, destination.name, country, destination.subtitle
        );
    }

    Ok(())
}
