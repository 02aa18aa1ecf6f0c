use landing_core::db::migrations::latest_version;
use landing_core::{
    RepoError, SqliteBrandingRepository, SqliteContentRepository, SqliteLandingPageService,
    SqliteRoadmapRepository, SqliteTeamRepository,
};
use rusqlite::Connection;

#[test]
fn repositories_reject_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteContentRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
    assert!(SqliteLandingPageService::try_from_connection(&conn).is_err());
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteTeamRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("team_members"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE roadmap_items (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            quarter TEXT NOT NULL,
            year INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteRoadmapRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "roadmap_items",
            column: "status"
        })
    ));
}

#[test]
fn invalid_persisted_status_is_reported() {
    let conn = landing_core::db::open_db_in_memory().unwrap();
    // Bypass the CHECK constraint to simulate a corrupted row.
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO roadmap_items (title, description, quarter, year, status, order_index)
         VALUES ('t', 'd', 'Q1', 2025, 'abandoned', 0);",
    )
    .unwrap();

    let repo = SqliteRoadmapRepository::try_new(&conn).unwrap();
    let err = landing_core::RoadmapRepository::list_active_items(&repo).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("abandoned")));
}

#[test]
fn branding_repository_accepts_migrated_connection() {
    let conn = landing_core::db::open_db_in_memory().unwrap();
    assert!(SqliteBrandingRepository::try_new(&conn).is_ok());
}
