use landing_core::db::open_db_in_memory;
use landing_core::{
    BrandingConfig, NewBrandingConfig, NewContentSection, NewRoadmapItem, NewTeamMember,
    RoadmapStatus, SqliteLandingPageService,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn section(name: &str, order_index: i64, is_active: bool) -> NewContentSection {
    NewContentSection {
        section_name: name.to_string(),
        title: format!("{name} title"),
        content: format!("{name} body"),
        order_index,
        is_active,
    }
}

fn member(name: &str, order_index: i64, is_active: bool) -> NewTeamMember {
    NewTeamMember {
        name: name.to_string(),
        position: "Engineer".to_string(),
        bio: format!("{name} bio"),
        image_url: None,
        linkedin_url: None,
        twitter_url: None,
        order_index,
        is_active,
    }
}

fn milestone(title: &str, year: i32, order_index: i64, is_active: bool) -> NewRoadmapItem {
    NewRoadmapItem {
        title: title.to_string(),
        description: format!("{title} description"),
        quarter: "Q1".to_string(),
        year,
        status: RoadmapStatus::Planned,
        order_index,
        is_active,
    }
}

#[test]
fn empty_store_returns_fallback_branding_and_empty_lists() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();

    let data = service.get_landing_page_data().unwrap();

    let expected = BrandingConfig::fallback(data.branding.created_at);
    assert_eq!(data.branding, expected);
    assert!(data.content.is_empty());
    assert!(data.team_members.is_empty());
    assert!(data.roadmap_items.is_empty());

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM branding_config;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0, "fallback branding must not be persisted");
}

#[test]
fn content_is_filtered_by_activity_and_sorted_by_order_index() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    service
        .create_landing_page_content(&section("features", 2, true))
        .unwrap();
    service
        .create_landing_page_content(&section("about", 1, true))
        .unwrap();
    service
        .create_landing_page_content(&section("tokenomics", 3, false))
        .unwrap();

    let data = service.get_landing_page_data().unwrap();
    let order: Vec<i64> = data.content.iter().map(|s| s.order_index).collect();
    assert_eq!(order, vec![1, 2]);
    assert!(data.content.iter().all(|s| s.is_active));
}

#[test]
fn team_is_filtered_by_activity_and_sorted_by_order_index() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    service.create_team_member(&member("Carol", 3, true)).unwrap();
    service.create_team_member(&member("Alice", 1, true)).unwrap();
    service.create_team_member(&member("Bob", 2, false)).unwrap();

    let data = service.get_landing_page_data().unwrap();
    let names: Vec<&str> = data.team_members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}

#[test]
fn roadmap_is_sorted_by_year_then_order_index() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    service
        .create_roadmap_item(&milestone("late", 2025, 1, true))
        .unwrap();
    service
        .create_roadmap_item(&milestone("second", 2024, 2, true))
        .unwrap();
    service
        .create_roadmap_item(&milestone("first", 2024, 1, true))
        .unwrap();
    service
        .create_roadmap_item(&milestone("hidden", 2023, 0, false))
        .unwrap();

    let data = service.get_landing_page_data().unwrap();
    let keys: Vec<(i32, i64)> = data
        .roadmap_items
        .iter()
        .map(|item| (item.year, item.order_index))
        .collect();
    assert_eq!(keys, vec![(2024, 1), (2024, 2), (2025, 1)]);
}

#[test]
fn order_index_ties_keep_insertion_order() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    let first = service
        .create_landing_page_content(&section("features", 1, true))
        .unwrap();
    let second = service
        .create_landing_page_content(&section("features", 1, true))
        .unwrap();

    let data = service.get_landing_page_data().unwrap();
    let ids: Vec<i64> = data.content.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn stored_branding_replaces_fallback() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    let repo = landing_core::SqliteBrandingRepository::try_new(&conn).unwrap();
    let stored = landing_core::BrandingRepository::create_branding(
        &repo,
        &NewBrandingConfig {
            coin_name: "OtherCoin".to_string(),
            coin_symbol: "OTH".to_string(),
            ..NewBrandingConfig::default()
        },
    )
    .unwrap();

    let data = service.get_landing_page_data().unwrap();
    assert_eq!(data.branding, stored);
}

#[test]
fn repeated_reads_without_writes_are_identical() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    service.seed_default_branding().unwrap();
    service
        .create_landing_page_content(&section("about", 0, true))
        .unwrap();
    service.create_team_member(&member("Alice", 0, true)).unwrap();
    service
        .create_roadmap_item(&milestone("launch", 2025, 0, true))
        .unwrap();

    let first = service.get_landing_page_data().unwrap();
    let second = service.get_landing_page_data().unwrap();
    assert_eq!(first, second);
}

#[test]
fn aggregate_serializes_with_camel_case_keys() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();

    let json = serde_json::to_value(service.get_landing_page_data().unwrap()).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["branding", "content", "roadmapItems", "teamMembers"]);
    assert_eq!(json["branding"]["coin_symbol"], "ULTA");
    assert!(json["branding"]["logo_url"].is_null());
}

#[test]
fn store_failure_fails_the_whole_aggregate() {
    let conn = setup();
    let service = SqliteLandingPageService::try_from_connection(&conn).unwrap();
    conn.execute_batch("DROP TABLE team_members;").unwrap();

    assert!(service.get_landing_page_data().is_err());
}
