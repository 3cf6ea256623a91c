use game_catalog::{
    all_categories, all_tags, games_by_category, games_by_tag, popular_tags, search_games,
    Catalog, GameRecord,
};

fn game(id: &str, category: &str, tags: &str) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        title: format!("Game {}", id),
        description: format!("Description of game {}", id),
        category: category.to_string(),
        tags: tags.to_string(),
        ..GameRecord::default()
    }
}

fn fixture_catalog() -> Catalog {
    Catalog::from_games(vec![
        game("1", "Action", "2D, Multiplayer"),
        game("2", "Action", "3D"),
        game("3", "Puzzle", "2D, Casual"),
        game("4", "Racing", "3D, Cars"),
        game("5", "Puzzle", "Casual"),
        game("6", "", "Retro"),
    ])
}

#[test]
fn queries_are_idempotent_over_a_snapshot() {
    let catalog = fixture_catalog();
    let first = games_by_category(&catalog, "Puzzle", Some(1), 1);
    let second = games_by_category(&catalog, "Puzzle", Some(1), 1);
    assert_eq!(first, second);
}

#[test]
fn category_totals_sum_to_the_categorized_record_count() {
    let catalog = fixture_catalog();

    let summed: usize = all_categories(&catalog)
        .iter()
        .map(|c| games_by_category(&catalog, c, None, 0).total)
        .sum();
    let categorized = catalog.iter().filter(|g| !g.category.is_empty()).count();

    assert_eq!(summed, categorized);
}

#[test]
fn every_listed_tag_has_at_least_one_game() {
    let catalog = fixture_catalog();
    for tag in all_tags(&catalog) {
        assert!(games_by_tag(&catalog, &tag, None, 0).total >= 1, "tag {}", tag);
    }
}

#[test]
fn multi_tag_records_land_in_every_bucket() {
    let catalog = Catalog::from_games(vec![game("1", "Action", "Action, Racing")]);

    assert_eq!(games_by_tag(&catalog, "action", None, 0).total, 1);
    assert_eq!(games_by_tag(&catalog, "Racing", None, 0).total, 1);
}

#[test]
fn pagination_slice_law_holds() {
    let catalog = fixture_catalog();
    let full = games_by_category(&catalog, "Puzzle", None, 0);

    for limit in 0..4 {
        for offset in 0..5 {
            let page = games_by_category(&catalog, "Puzzle", Some(limit), offset);
            let start = offset.min(full.games.len());
            let end = (offset + limit).min(full.games.len());

            assert_eq!(page.games, full.games[start..end].to_vec());
            assert_eq!(page.total, full.total);
        }
    }
}

#[test]
fn blank_search_is_empty_by_contract() {
    let catalog = fixture_catalog();
    let empty = search_games(&catalog, "", None, 0);
    let spaces = search_games(&catalog, "   ", None, 0);

    assert_eq!(empty.total, 0);
    assert!(empty.games.is_empty());
    assert_eq!(spaces.total, 0);
    assert!(spaces.games.is_empty());
}

// Worked example from the site's behavior: two records sharing a category
// under different casing, three distinct tags
#[test]
fn two_record_example_behaves_as_documented() {
    let catalog = Catalog::from_games(vec![
        game("1", "Action", "2D, Multiplayer"),
        game("2", "action", "3D"),
    ]);

    assert_eq!(games_by_category(&catalog, "Action", None, 0).total, 2);
    assert_eq!(all_tags(&catalog), vec!["2D", "3D", "Multiplayer"]);

    // All counts tie at one, so the first-seen tag wins the top slot
    let top = popular_tags(&catalog, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "2D");
    assert_eq!(top[0].count, 1);
}
