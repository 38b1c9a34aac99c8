//! Reference and path navigation tests

use firestore_lite::database::{Database, DatabaseConfig};
use firestore_lite::path::{Address, PathError};

fn db() -> Database {
    Database::new(DatabaseConfig::new("projectId")).unwrap()
}

#[test]
fn test_parse_normalizes_separators() {
    for raw in ["col/doc", "/col/doc", "col/doc/", "//col//doc//"] {
        assert_eq!(Address::parse(raw).segments(), ["col", "doc"]);
    }
    assert!(Address::parse("").is_root());
    assert!(Address::parse("///").is_root());
}

#[test]
fn test_kinds_alternate() {
    let root = Address::root();
    let col = root.child("col");
    let doc = col.child("doc");
    let sub = doc.child("sub");

    assert!(root.is_root() && !root.is_collection() && !root.is_document());
    assert!(col.is_collection() && !col.is_document());
    assert!(doc.is_document() && !doc.is_collection());
    assert!(sub.is_collection());
}

#[test]
fn test_names_and_endpoints() {
    let db = db();
    let root = "projects/projectId/databases/(default)/documents";
    let url = format!("https://firestore.googleapis.com/v1/{}", root);

    assert_eq!(db.reference("").name(), root);
    assert_eq!(db.reference("col/doc").name(), format!("{}/col/doc", root));
    assert_eq!(db.reference("/col/doc/").endpoint(), format!("{}/col/doc", url));
    assert_eq!(db.reference("").endpoint(), url);
}

#[test]
fn test_parent_and_parent_collection() {
    let db = db();
    let post = db.reference("users/u1/posts/p1");
    let posts = post.parent().unwrap();

    assert_eq!(posts.path(), "users/u1/posts");
    assert_eq!(post.parent_collection().unwrap().path(), "users/u1/posts");
    assert_eq!(posts.parent().unwrap().path(), "users/u1");
    assert_eq!(posts.parent_collection().unwrap().path(), "users");
    assert!(db.reference("users").parent_collection().unwrap().is_root());
}

#[test]
fn test_root_has_no_parent() {
    let root = db().reference("");
    assert_eq!(root.parent().unwrap_err(), PathError::NoParentOfRoot);
    assert_eq!(
        root.parent_collection().unwrap_err().to_string(),
        "Can't get parent of a root collection"
    );
}

#[test]
fn test_reference_from_name_round_trips() {
    let db = db();
    let doc = db.reference("col/doc");
    assert_eq!(db.reference_from_name(&doc.name()), Some(doc));
    assert!(db
        .reference_from_name("projects/other/databases/(default)/documents/col/doc")
        .is_none());
}

#[test]
fn test_custom_host_endpoint() {
    let db = Database::new(DatabaseConfig::new("p").with_host("localhost:8080", false)).unwrap();
    assert_eq!(
        db.reference("col").endpoint(),
        "http://localhost:8080/v1/projects/p/databases/(default)/documents/col"
    );
}
