use pressroom_core::db::migrations::{apply_migrations, latest_version};
use pressroom_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_full_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "articles");
    assert_table_exists(&conn, "categories");
    assert_table_exists(&conn, "articles_categories");
}

#[test]
fn reapplying_migrations_on_migrated_store_fails() {
    let mut conn = open_db_in_memory().unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    match err {
        DbError::SchemaAlreadyApplied { db_version } => {
            assert_eq!(db_version, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_same_database_file_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pressroom.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::SchemaAlreadyApplied { .. }));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn junction_inserts_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO articles_categories (article_id, category_id) VALUES (41, 42);",
        [],
    );
    assert!(result.is_err(), "dangling link row must be rejected");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
