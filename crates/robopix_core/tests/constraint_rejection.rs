use robopix_core::db::open_db_in_memory;
use robopix_core::ConstraintKind;
use rusqlite::{params, Connection};

#[test]
fn photo_with_dangling_robot_reference_is_rejected() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute(
            "INSERT INTO photos (robot_id, file_name, file_path)
             VALUES (?1, ?2, ?3);",
            params![4242, "ghost.jpg", "/photos/ghost.jpg"],
        )
        .unwrap_err();

    assert_eq!(
        ConstraintKind::classify(&err),
        Some(ConstraintKind::ForeignKey)
    );
    assert_eq!(count(&conn, "photos"), 0);
}

#[test]
fn robot_with_dangling_category_reference_is_rejected() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute(
            "INSERT INTO robots (category_id, manufacturer, model_name, robot_type)
             VALUES (99, 'Acme', 'Nonesuch', 'hexapod');",
            [],
        )
        .unwrap_err();

    assert_eq!(
        ConstraintKind::classify(&err),
        Some(ConstraintKind::ForeignKey)
    );
    assert_eq!(count(&conn, "robots"), 0);
}

#[test]
fn duplicate_tag_name_is_rejected() {
    let conn = open_db_in_memory().unwrap();

    insert_tag(&conn, "aerial");
    let err = conn
        .execute("INSERT INTO tags (tag_name) VALUES ('aerial');", [])
        .unwrap_err();

    assert_eq!(ConstraintKind::classify(&err), Some(ConstraintKind::Unique));
    assert_eq!(count(&conn, "tags"), 1);
}

#[test]
fn tag_name_is_required() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute("INSERT INTO tags (tag_name) VALUES (NULL);", [])
        .unwrap_err();

    assert_eq!(ConstraintKind::classify(&err), Some(ConstraintKind::NotNull));
}

#[test]
fn photo_file_name_and_path_are_required() {
    let conn = open_db_in_memory().unwrap();

    let missing_path = conn
        .execute("INSERT INTO photos (file_name) VALUES ('orphan.jpg');", [])
        .unwrap_err();
    assert_eq!(
        ConstraintKind::classify(&missing_path),
        Some(ConstraintKind::NotNull)
    );

    let missing_name = conn
        .execute("INSERT INTO photos (file_path) VALUES ('/photos/orphan.jpg');", [])
        .unwrap_err();
    assert_eq!(
        ConstraintKind::classify(&missing_name),
        Some(ConstraintKind::NotNull)
    );
    assert_eq!(count(&conn, "photos"), 0);
}

#[test]
fn seeded_identifier_collision_is_rejected() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute(
            "INSERT INTO robot_categories (category_id, category_name)
             VALUES (1, 'Drones Again');",
            [],
        )
        .unwrap_err();

    assert_eq!(
        ConstraintKind::classify(&err),
        Some(ConstraintKind::PrimaryKey)
    );
    assert_eq!(count(&conn, "robot_categories"), 3);
}

#[test]
fn photo_tag_link_requires_both_sides() {
    let conn = open_db_in_memory().unwrap();
    let photo_id = insert_photo(&conn, "arm.jpg");
    let tag_id = insert_tag(&conn, "welding");

    let dangling_tag = conn
        .execute(
            "INSERT INTO photo_tags (photo_id, tag_id) VALUES (?1, ?2);",
            params![photo_id, tag_id + 100],
        )
        .unwrap_err();
    assert_eq!(
        ConstraintKind::classify(&dangling_tag),
        Some(ConstraintKind::ForeignKey)
    );

    let dangling_photo = conn
        .execute(
            "INSERT INTO photo_tags (photo_id, tag_id) VALUES (?1, ?2);",
            params![photo_id + 100, tag_id],
        )
        .unwrap_err();
    assert_eq!(
        ConstraintKind::classify(&dangling_photo),
        Some(ConstraintKind::ForeignKey)
    );
    assert_eq!(count(&conn, "photo_tags"), 0);
}

#[test]
fn duplicate_photo_tag_link_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let photo_id = insert_photo(&conn, "arm.jpg");
    let tag_id = insert_tag(&conn, "welding");

    conn.execute(
        "INSERT INTO photo_tags (photo_id, tag_id) VALUES (?1, ?2);",
        params![photo_id, tag_id],
    )
    .unwrap();
    let err = conn
        .execute(
            "INSERT INTO photo_tags (photo_id, tag_id) VALUES (?1, ?2);",
            params![photo_id, tag_id],
        )
        .unwrap_err();

    // SQLite reports a composite primary key collision under either the
    // PRIMARYKEY or UNIQUE extended code depending on the index it hits.
    let kind = ConstraintKind::classify(&err);
    assert!(
        matches!(
            kind,
            Some(ConstraintKind::PrimaryKey) | Some(ConstraintKind::Unique)
        ),
        "unexpected classification: {kind:?}"
    );
    assert_eq!(count(&conn, "photo_tags"), 1);
}

#[test]
fn failed_multi_row_insert_leaves_no_partial_effect() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute(
            "INSERT INTO tags (tag_name) VALUES ('indoor'), ('indoor');",
            [],
        )
        .unwrap_err();

    assert_eq!(ConstraintKind::classify(&err), Some(ConstraintKind::Unique));
    assert_eq!(count(&conn, "tags"), 0);
}

fn insert_photo(conn: &Connection, file_name: &str) -> i64 {
    conn.execute(
        "INSERT INTO photos (file_name, file_path) VALUES (?1, ?2);",
        params![file_name, format!("/photos/{file_name}")],
    )
    .unwrap();
    conn.last_insert_rowid()
}

fn insert_tag(conn: &Connection, tag_name: &str) -> i64 {
    conn.execute("INSERT INTO tags (tag_name) VALUES (?1);", [tag_name])
        .unwrap();
    conn.last_insert_rowid()
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
