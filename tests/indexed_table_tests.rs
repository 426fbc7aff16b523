use bidir_dijkstra::data_structures::{IndexedSet, IndexedTable};
use bidir_dijkstra::Error;

#[test]
fn test_capacity_is_rounded_to_power_of_two() {
    let table: IndexedTable<f64> = IndexedTable::with_capacity(0, 0.75).unwrap();
    assert_eq!(table.capacity(), 16);

    let table: IndexedTable<f64> = IndexedTable::with_capacity(17, 0.75).unwrap();
    assert_eq!(table.capacity(), 32);

    let table: IndexedTable<f64> = IndexedTable::with_capacity(1024, 0.75).unwrap();
    assert_eq!(table.capacity(), 1024);
}

#[test]
fn test_load_factor_is_clamped() {
    let table: IndexedTable<usize> = IndexedTable::with_capacity(16, 0.05).unwrap();
    assert_eq!(table.load_factor(), 0.2);

    let table: IndexedTable<usize> = IndexedTable::with_capacity(16, 1.3).unwrap();
    assert_eq!(table.load_factor(), 1.3);
}

#[test]
fn test_huge_capacity_reports_no_memory() {
    let result: Result<IndexedTable<u8>, Error> = IndexedTable::with_capacity(usize::MAX, 1.0);
    assert_eq!(result.err(), Some(Error::NoMemory));
}

#[test]
fn test_put_inserts_then_updates_in_place() {
    let mut table = IndexedTable::new();
    assert!(table.put(5, 1.5).unwrap());
    assert!(table.put(7, 2.5).unwrap());
    assert!(!table.put(5, 0.5).unwrap());

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(5), Some(&0.5));
    assert_eq!(table[7], 2.5);
    // Updating keeps the original position
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![5, 7]);
}

#[test]
fn test_growth_doubles_at_threshold_and_keeps_order() {
    let mut table = IndexedTable::with_capacity(16, 0.75).unwrap();
    for key in 0..12 {
        table.put(key * 16, key).unwrap();
    }
    assert_eq!(table.capacity(), 16);

    // The 13th insertion finds the table at its threshold of 12
    table.put(1000, 12).unwrap();
    assert_eq!(table.capacity(), 32);

    let keys: Vec<usize> = table.keys().collect();
    let mut expected: Vec<usize> = (0..12).map(|key| key * 16).collect();
    expected.push(1000);
    assert_eq!(keys, expected);

    for key in 0..12 {
        assert_eq!(table[key * 16], key);
    }
}

#[test]
fn test_many_colliding_keys() {
    let mut table = IndexedTable::with_capacity(16, 4.0).unwrap();
    // All of these land in bucket 0 until the table grows
    for key in (0..2000).map(|i| i << 12) {
        table.put(key, key + 1).unwrap();
    }
    assert_eq!(table.len(), 2000);
    for key in (0..2000).map(|i| i << 12) {
        assert_eq!(table.get(key), Some(&(key + 1)));
    }
    assert!(!table.contains(1));
}

#[test]
fn test_remove_unlinks_chain_and_order() {
    let mut table = IndexedTable::new();
    for key in [3, 19, 35, 4] {
        // 3, 19 and 35 share a bucket in a 16-bucket table
        table.put(key, key * 10).unwrap();
    }

    assert_eq!(table.remove(19), Some(190));
    assert_eq!(table.remove(19), None);
    assert_eq!(table.len(), 3);
    assert!(table.contains(3));
    assert!(table.contains(35));
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![3, 35, 4]);

    assert_eq!(table.remove(4), Some(40));
    assert_eq!(table.remove(3), Some(30));
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![35]);

    // A freed slot is reused and the new key goes to the end
    table.put(8, 80).unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec![(35, &350), (8, &80)]);
}

#[test]
fn test_remove_absent_key() {
    let mut table: IndexedTable<u32> = IndexedTable::new();
    assert_eq!(table.remove(42), None);
    table.put(1, 1).unwrap();
    assert_eq!(table.remove(17), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_clear_preserves_capacity() {
    let mut table = IndexedTable::with_capacity(16, 0.5).unwrap();
    for key in 0..100 {
        table.put(key, ()).unwrap();
    }
    let capacity = table.capacity();
    assert!(capacity > 16);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), capacity);
    assert_eq!(table.iter().count(), 0);

    table.put(9, ()).unwrap();
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![9]);
}

#[test]
fn test_get_mut() {
    let mut table = IndexedTable::new();
    table.put(2, 1.0).unwrap();
    if let Some(value) = table.get_mut(2) {
        *value += 1.0;
    }
    assert_eq!(table[2], 2.0);
    assert!(table.get_mut(3).is_none());
}

#[test]
#[should_panic(expected = "vertex 11 has no entry")]
fn test_index_on_absent_key_panics() {
    let mut table = IndexedTable::new();
    table.put(10, 1.0).unwrap();
    let _value = table[11];
}

#[test]
fn test_iteration_is_exact_size() {
    let mut table = IndexedTable::new();
    for key in [8, 1, 6] {
        table.put(key, key).unwrap();
    }
    let iter = table.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(table.values().copied().collect::<Vec<_>>(), vec![8, 1, 6]);
}

#[test]
fn test_set_semantics() {
    let mut set = IndexedSet::with_capacity(4, 1.0).unwrap();
    assert!(set.insert(3).unwrap());
    assert!(set.insert(1).unwrap());
    assert!(!set.insert(3).unwrap());
    assert!(set.contains(1));
    assert!(!set.contains(2));
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 1]);

    assert!(set.remove(3));
    assert!(!set.remove(3));
    assert_eq!(set.len(), 1);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.capacity(), 16);
}

#[test]
fn test_debug_lists_entries_in_order() {
    let mut table = IndexedTable::new();
    table.put(2, "b").unwrap();
    table.put(1, "a").unwrap();
    assert_eq!(format!("{:?}", table), r#"{2: "b", 1: "a"}"#);

    let mut set = IndexedSet::new();
    set.insert(5).unwrap();
    set.insert(4).unwrap();
    assert_eq!(format!("{:?}", set), "{5, 4}");
}
