use tourdb_core::group_by_day;
use tourdb_sheets::SheetsClient;

/// Print one package the way the detail page lays it out: summary, per-day
/// itinerary, inclusions, exclusions, policies.
pub(crate) async fn run_show(client: &SheetsClient, id: &str) -> anyhow::Result<()> {
    let detail = client
        .package_detail(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("package '{id}' not found; run `packages` to list ids"))?;

    let package = &detail.package;
    println!("{} ({})", package.title, package.destination);
    println!(
        "{} days / {} nights, {}-star hotel, from {} per person",
        package.days, package.nights, package.rating, package.price
    );
    if !package.overview.is_empty() {
        println!();
        println!("{}", package.overview);
    }

    let days = group_by_day(&detail.itinerary);
    if !days.is_empty() {
        println!();
        println!("Itinerary:");
        for day in &days {
            println!("  Day {}: {}", day.day, day.title);
            for bullet in &day.bullets {
                println!("    - {bullet}");
            }
        }
    }

    if !detail.inclusions.is_empty() {
        println!();
        println!("Included:");
        for note in &detail.inclusions {
            println!("  + {}", note.item);
        }
    }

    if !detail.exclusions.is_empty() {
        println!();
        println!("Not included:");
        for note in &detail.exclusions {
            println!("  - {}", note.item);
        }
    }

    if !detail.policies.is_empty() {
        println!();
        println!("Policies:");
        for policy in &detail.policies {
            println!("  [{}] {}", policy.kind.as_str(), policy.text);
        }
    }

    Ok(())
}
