// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_chunky_list::{ChunkedList, ListError, SequenceList, ValidRange};

fn contents(list: &ChunkedList<&'static str>) -> Vec<&'static str> {
    list.iter().copied().collect()
}

fn list_of(chunk_capacity: usize, items: &[&'static str]) -> ChunkedList<&'static str> {
    let mut list = ChunkedList::new(chunk_capacity);
    for it in items {
        list.add_back(*it).unwrap();
    }
    list
}

#[test]
fn test_fifth_item_spills_into_a_second_segment() {
    let mut list = list_of(4, &["a", "b", "c", "d"]);
    assert_eq!(list.len(), 4);
    assert_eq!(
        (0..4).map(|it| *list.get_index(it).unwrap()).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );

    list.add_back("e").unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list.get_index(4), Ok(&"e"));
    assert_eq!(list.segment_count(), 2);
}

#[test]
fn test_remove_index_from_the_middle() {
    let mut list = list_of(4, &["a", "b", "c", "d"]);
    assert_eq!(list.remove_index(2), Ok("c"));
    assert_eq!(contents(&list), vec!["a", "b", "d"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_add_front_reverses_insertion_order() {
    let mut list = ChunkedList::new(4);
    for it in ["1", "0", "-1", "-2"] {
        list.add_front(it).unwrap();
    }
    assert_eq!(contents(&list), vec!["-2", "-1", "0", "1"]);
}

#[test]
fn test_empty_list_reports_empty_for_everything_that_reads_or_removes() {
    // Both shapes of an empty list: a new one, and one that was drained.
    let fresh: ChunkedList<&str> = ChunkedList::new(3);
    let mut drained = list_of(3, &["a"]);
    drained.remove_back().unwrap();
    assert_eq!(drained.segment_count(), 0);

    for mut list in [fresh, drained] {
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.remove_front(), Err(ListError::EmptyList));
        assert_eq!(list.remove_back(), Err(ListError::EmptyList));
        assert_eq!(list.remove_index(0), Err(ListError::EmptyList));
        assert_eq!(list.remove_index(42), Err(ListError::EmptyList));
        assert_eq!(list.get_front(), Err(ListError::EmptyList));
        assert_eq!(list.get_back(), Err(ListError::EmptyList));
        assert_eq!(list.get_index(0), Err(ListError::EmptyList));
        assert_eq!(list.get_index(-1), Err(ListError::EmptyList));
        assert_eq!(list.pop(), None);
        assert_eq!(list.first(), None);
    }
}

#[test]
fn test_out_of_range_reads_report_bad_index() {
    let list = list_of(2, &["a", "b", "c"]);
    let size = list.len();
    assert_eq!(
        list.get_index(size),
        Err(ListError::BadIndex {
            index: 3,
            len: 3,
            valid_range: ValidRange::Exclusive,
        })
    );
    assert!(matches!(
        list.get_index(-1),
        Err(ListError::BadIndex { index: -1, .. })
    ));
}

#[test]
fn test_add_back_then_remove_back_restores_the_list() {
    let mut list = list_of(3, &["a", "b", "c"]);
    let before = list.clone();

    list.add_back("x").unwrap();
    assert_eq!(list.segment_count(), 2);
    assert_eq!(list.remove_back(), Ok("x"));

    assert_eq!(list.len(), before.len());
    assert_eq!(list, before);
    assert_eq!(list.segment_count(), 1);
}

#[test]
fn test_insert_into_full_segment_keeps_every_segment_within_capacity() {
    let mut list = list_of(3, &["a", "b", "c", "d", "e", "f"]);
    assert_eq!(list.segment_fills().as_slice(), &[3, 3]);

    list.add_index("x", 4).unwrap();
    list.add_index("y", 1).unwrap();

    assert_eq!(contents(&list), vec!["a", "y", "b", "c", "d", "x", "e", "f"]);
    assert!(list.segment_fills().iter().all(|fill| *fill <= 3));
    assert_eq!(list.segment_fills().iter().sum::<usize>(), list.len());
}

#[test]
fn test_failed_calls_do_not_change_the_list() {
    let mut list = list_of(2, &["a", "b", "c"]);
    let fills_before = list.segment_fills();

    assert!(list.add_index("x", 5).is_err());
    assert!(list.add_index("x", -1).is_err());
    assert!(list.remove_index(3).is_err());
    assert!(list.get_index(10).is_err());

    assert_eq!(contents(&list), vec!["a", "b", "c"]);
    assert_eq!(list.segment_fills(), fills_before);
}
