mod common;

use common::Book;
use predicates::prelude::*;

#[test]
fn editing_replaces_the_whole_record() {
    let book = Book::new();
    let id = book.add(&[
        "--name",
        "Harold Medrano",
        "--phone",
        "302-456-7890",
        "--email",
        "harold@example.com",
        "--photo",
        "content://media/external/images/12",
    ]);

    book.rolodex()
        .args([
            "edit",
            "--id",
            id.as_str(),
            "--name",
            "Harold M.",
            "--phone",
            "302-456-7890",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    book.rolodex()
        .args(["show", "--id", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Harold M."))
        .stdout(predicate::str::contains("Email: -"))
        .stdout(predicate::str::contains("Photo: -"));

    let stored = std::fs::read_to_string(book.path()).unwrap();
    assert_eq!(stored.matches(&id).count(), 1);
    assert!(!stored.contains("harold@example.com"));
}

#[test]
fn editing_unknown_contact_fails() {
    let book = Book::new();

    book.rolodex()
        .args(["edit", "--id", "nope", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact Not found"));

    book.rolodex()
        .args(["show", "--id", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact Not found"));
}
