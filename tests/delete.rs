mod common;

use common::{Book, listing_format};
use predicates::prelude::*;

#[test]
fn deleting_contacts() {
    let book = Book::new();

    // Attempt to delete non existing contact
    book.rolodex()
        .args(["delete", "--id", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    let patricia = book.add(&["--name", "Patricia", "--phone", "08066809241"]);
    let diane = book.add(&["--name", "Diane", "--phone", "08064879199"]);
    let john = book.add(&["--name", "John", "--phone", "08046516806"]);

    book.rolodex()
        .args(["delete", "--id", diane.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    // Deleting the same contact again is harmless
    book.rolodex()
        .args(["delete", "--id", diane.as_str()])
        .assert()
        .success();

    book.rolodex()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(listing_format(
            1,
            "Patricia",
            "08066809241",
            "",
            &patricia,
        )))
        .stdout(predicate::str::contains(listing_format(
            2,
            "John",
            "08046516806",
            "",
            &john,
        )))
        .stdout(predicate::str::contains("Diane").not());
}
