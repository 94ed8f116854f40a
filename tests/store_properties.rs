use library_manager::{
    add_book, clear_books, delete_book, Book, BookStore, LibraryError, OverflowPolicy,
};

fn snapshot(store: &BookStore) -> Vec<Book> {
    store.enumerate().cloned().collect()
}

fn seeded() -> BookStore {
    let mut store = BookStore::new();
    store.insert(1, "Emma", "Jane Austen");
    store.insert(7, "Dune", "Frank Herbert");
    store.insert(2, "Beloved", "Toni Morrison");
    store.insert(7, "Kindred", "Octavia Butler");
    store.insert(3, "Ulysses", "James Joyce");
    store
}

#[test]
fn insert_then_enumerate_yields_new_book_first() {
    let mut store = seeded();
    store.insert(42, "Middlemarch", "George Eliot");
    assert_eq!(
        store.enumerate().next(),
        Some(&Book::new(42, "Middlemarch", "George Eliot"))
    );
}

#[test]
fn delete_removes_exactly_one_and_keeps_the_rest_in_order() {
    let mut store = seeded();
    let before = snapshot(&store);
    let count = |books: &[Book]| books.iter().filter(|book| book.id == 7).count();

    assert!(store.delete_by_id(7));
    let after = snapshot(&store);

    assert_eq!(count(&after[..]), count(&before[..]) - 1);
    let others_before: Vec<&Book> = before.iter().filter(|book| book.title != "Kindred").collect();
    let others_after: Vec<&Book> = after.iter().collect();
    assert_eq!(others_before, others_after);
}

#[test]
fn deleting_a_missing_id_is_a_no_op() {
    let mut store = seeded();
    let before = snapshot(&store);
    assert!(!store.delete_by_id(1000));
    assert_eq!(snapshot(&store), before);

    assert_eq!(
        delete_book(&mut store, "not a number"),
        Err(LibraryError::NotFound(0))
    );
    assert_eq!(snapshot(&store), before);
}

#[test]
fn clear_empties_any_store() {
    let mut store = seeded();
    store.clear();
    assert_eq!(store.enumerate().count(), 0);

    let mut store = seeded();
    assert_eq!(clear_books(&mut store), 5);
    assert!(store.is_empty());
}

#[test]
fn consecutive_inserts_come_back_newest_first() {
    let mut store = BookStore::new();
    for id in ["1", "2", "3"] {
        add_book(&mut store, OverflowPolicy::Truncate, id, "t", "a").unwrap();
    }
    let ids: Vec<i64> = store.enumerate().map(|book| book.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn non_positive_ids_never_reach_the_store() {
    let mut store = seeded();
    let before = snapshot(&store);
    for text in ["0", "-5"] {
        let result = add_book(&mut store, OverflowPolicy::Truncate, text, "t", "a");
        assert!(matches!(result, Err(LibraryError::InvalidId { .. })));
    }
    assert_eq!(snapshot(&store), before);
}

#[test]
fn duplicate_ids_are_removed_newest_first() {
    let mut store = BookStore::new();
    add_book(&mut store, OverflowPolicy::Truncate, "7", "A", "").unwrap();
    add_book(&mut store, OverflowPolicy::Truncate, "7", "B", "").unwrap();
    let titles = |store: &BookStore| -> Vec<String> {
        store.enumerate().map(|book| book.title.clone()).collect()
    };

    assert_eq!(titles(&store), vec!["B", "A"]);
    delete_book(&mut store, "7").unwrap();
    assert_eq!(titles(&store), vec!["A"]);
    delete_book(&mut store, "7").unwrap();
    assert!(titles(&store).is_empty());
}

#[test]
fn oversize_titles_follow_the_overflow_policy() {
    let long_title = "t".repeat(150);

    let mut store = BookStore::new();
    let book = add_book(&mut store, OverflowPolicy::Truncate, "1", &long_title, "a").unwrap();
    assert_eq!(book.title.chars().count(), 99);

    let mut store = BookStore::new();
    let result = add_book(&mut store, OverflowPolicy::Reject, "1", &long_title, "a");
    assert_eq!(
        result,
        Err(LibraryError::FieldTooLong {
            field: "Title",
            max: 99
        })
    );
    assert!(store.is_empty());
}
