use super::*;

fn package(id: &str, price: u32, days: u32, rating: u32) -> Package {
    Package {
        id: id.to_string(),
        destination: "goa".to_string(),
        title: format!("Package {id}"),
        image: "https://img.example/cover.jpg".to_string(),
        days,
        nights: days.saturating_sub(1),
        rating,
        price,
        overview: String::new(),
    }
}

fn criteria(budget: BudgetTier, duration: DurationTier, sort_by: SortKey) -> Criteria {
    Criteria {
        budget,
        duration,
        sort_by,
    }
}

fn ids(packages: &[Package]) -> Vec<&str> {
    packages.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn default_criteria_keeps_everything_in_order() {
    let input = vec![
        package("a", 30_000, 2, 3),
        package("b", 90_000, 5, 4),
        package("c", 250_000, 12, 5),
    ];
    let out = filter_and_sort(&input, &Criteria::default());
    assert_eq!(out, input);
}

#[test]
fn budget_cap_is_inclusive_on_both_sides() {
    let input = vec![package("exact", 50_000, 5, 4)];

    let budget = filter_and_sort(
        &input,
        &criteria(BudgetTier::Budget, DurationTier::All, SortKey::None),
    );
    assert_eq!(ids(&budget), vec!["exact"], "50 000 passes the budget tier");

    let mid = filter_and_sort(
        &input,
        &criteria(BudgetTier::Mid, DurationTier::All, SortKey::None),
    );
    assert_eq!(ids(&mid), vec!["exact"], "50 000 passes the mid tier too");
}

#[test]
fn one_above_the_cap_moves_to_mid_only() {
    let input = vec![package("above", 50_001, 5, 4)];

    let budget = filter_and_sort(
        &input,
        &criteria(BudgetTier::Budget, DurationTier::All, SortKey::None),
    );
    assert!(budget.is_empty(), "50 001 fails the budget tier");

    let mid = filter_and_sort(
        &input,
        &criteria(BudgetTier::Mid, DurationTier::All, SortKey::None),
    );
    assert_eq!(ids(&mid), vec!["above"]);
}

#[test]
fn luxury_floor_is_shared_with_mid() {
    let input = vec![package("floor", 150_000, 5, 4)];

    let mid = filter_and_sort(
        &input,
        &criteria(BudgetTier::Mid, DurationTier::All, SortKey::None),
    );
    assert_eq!(ids(&mid), vec!["floor"]);

    let luxury = filter_and_sort(
        &input,
        &criteria(BudgetTier::Luxury, DurationTier::All, SortKey::None),
    );
    assert_eq!(ids(&luxury), vec!["floor"]);
}

#[test]
fn duration_boundaries_between_short_and_medium() {
    let three = vec![package("three", 40_000, 3, 4)];
    let four = vec![package("four", 40_000, 4, 4)];

    assert_eq!(
        ids(&filter_and_sort(
            &three,
            &criteria(BudgetTier::All, DurationTier::Short, SortKey::None)
        )),
        vec!["three"]
    );
    assert!(filter_and_sort(
        &three,
        &criteria(BudgetTier::All, DurationTier::Medium, SortKey::None)
    )
    .is_empty());

    assert!(filter_and_sort(
        &four,
        &criteria(BudgetTier::All, DurationTier::Short, SortKey::None)
    )
    .is_empty());
    assert_eq!(
        ids(&filter_and_sort(
            &four,
            &criteria(BudgetTier::All, DurationTier::Medium, SortKey::None)
        )),
        vec!["four"]
    );
}

#[test]
fn duration_boundaries_between_medium_and_long() {
    let seven = vec![package("seven", 40_000, 7, 4)];
    let eight = vec![package("eight", 40_000, 8, 4)];

    assert_eq!(
        ids(&filter_and_sort(
            &seven,
            &criteria(BudgetTier::All, DurationTier::Medium, SortKey::None)
        )),
        vec!["seven"]
    );
    assert!(filter_and_sort(
        &eight,
        &criteria(BudgetTier::All, DurationTier::Medium, SortKey::None)
    )
    .is_empty());
    assert_eq!(
        ids(&filter_and_sort(
            &eight,
            &criteria(BudgetTier::All, DurationTier::Long, SortKey::None)
        )),
        vec!["eight"]
    );
}

#[test]
fn tiers_combine_with_logical_and() {
    let input = vec![
        package("cheap-short", 20_000, 2, 4),
        package("cheap-long", 20_000, 10, 4),
        package("pricey-short", 200_000, 2, 4),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::Budget, DurationTier::Short, SortKey::None),
    );
    assert_eq!(ids(&out), vec!["cheap-short"]);
}

#[test]
fn price_asc_orders_cheapest_first() {
    let input = vec![
        package("b", 90_000, 5, 4),
        package("a", 30_000, 2, 3),
        package("c", 250_000, 12, 5),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::All, DurationTier::All, SortKey::PriceAsc),
    );
    assert_eq!(ids(&out), vec!["a", "b", "c"]);
}

#[test]
fn price_desc_orders_most_expensive_first() {
    let input = vec![
        package("b", 90_000, 5, 4),
        package("a", 30_000, 2, 3),
        package("c", 250_000, 12, 5),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::All, DurationTier::All, SortKey::PriceDesc),
    );
    assert_eq!(ids(&out), vec!["c", "b", "a"]);
}

#[test]
fn duration_asc_orders_shortest_first() {
    let input = vec![
        package("long", 10_000, 9, 4),
        package("short", 10_000, 2, 4),
        package("mid", 10_000, 5, 4),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::All, DurationTier::All, SortKey::DurationAsc),
    );
    assert_eq!(ids(&out), vec!["short", "mid", "long"]);
}

#[test]
fn rating_desc_orders_best_first() {
    let input = vec![
        package("three", 10_000, 2, 3),
        package("five", 10_000, 2, 5),
        package("four", 10_000, 2, 4),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::All, DurationTier::All, SortKey::RatingDesc),
    );
    assert_eq!(ids(&out), vec!["five", "four", "three"]);
}

#[test]
fn equal_prices_keep_their_filtered_order() {
    let input = vec![
        package("first", 60_000, 5, 4),
        package("second", 60_000, 3, 5),
        package("cheaper", 10_000, 2, 3),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::All, DurationTier::All, SortKey::PriceAsc),
    );
    assert_eq!(
        ids(&out),
        vec!["cheaper", "first", "second"],
        "stable sort must keep first before second"
    );
}

#[test]
fn mid_budget_rating_desc_scenario() {
    let input = vec![
        package("1", 40_000, 2, 3),
        package("2", 60_000, 5, 5),
        package("3", 200_000, 10, 4),
    ];
    let out = filter_and_sort(
        &input,
        &criteria(BudgetTier::Mid, DurationTier::All, SortKey::RatingDesc),
    );
    assert_eq!(ids(&out), vec!["2"], "only package 2 is in the mid tier");
}

#[test]
fn filter_and_sort_is_pure() {
    let input = vec![
        package("b", 90_000, 5, 4),
        package("a", 30_000, 2, 3),
    ];
    let snapshot = input.clone();
    let crit = criteria(BudgetTier::All, DurationTier::All, SortKey::PriceAsc);

    let first = filter_and_sort(&input, &crit);
    let second = filter_and_sort(&input, &crit);

    assert_eq!(first, second, "same inputs must give identical results");
    assert_eq!(input, snapshot, "the input list must not be mutated");
}

#[test]
fn empty_input_stays_empty() {
    let out = filter_and_sort(
        &[],
        &criteria(BudgetTier::Luxury, DurationTier::Long, SortKey::PriceDesc),
    );
    assert!(out.is_empty());
}

#[test]
fn tier_spellings_parse_from_str() {
    assert_eq!("budget".parse::<BudgetTier>(), Ok(BudgetTier::Budget));
    assert_eq!("all".parse::<DurationTier>(), Ok(DurationTier::All));
    assert_eq!("price-asc".parse::<SortKey>(), Ok(SortKey::PriceAsc));
    assert_eq!("rating-desc".parse::<SortKey>(), Ok(SortKey::RatingDesc));
    assert!("cheap".parse::<BudgetTier>().is_err());
    assert!("price-low".parse::<SortKey>().is_err());
}

#[test]
fn tier_spellings_round_trip_through_serde() {
    let crit = criteria(BudgetTier::Mid, DurationTier::Long, SortKey::PriceDesc);
    let json = serde_json::to_string(&crit).expect("serialization failed");
    assert!(json.contains("\"mid\""), "unexpected encoding: {json}");
    assert!(json.contains("\"price-desc\""), "unexpected encoding: {json}");
    let decoded: Criteria = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(decoded, crit);
}
