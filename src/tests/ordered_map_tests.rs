use crate::OrderedMap;

fn keys(map: &OrderedMap<&'static str, i32>) -> Vec<&'static str> {
    map.keys().copied().collect()
}

#[test]
fn test_insert_back_orders_entries() {
    let mut map = OrderedMap::new();
    assert_eq!(map.insert_back("a", 1), None);
    assert_eq!(map.insert_back("b", 2), None);
    assert_eq!(map.insert_back("c", 3), None);
    assert_eq!(keys(&map), vec!["a", "b", "c"]);

    // Reinsert moves to the back and hands out the old value
    assert_eq!(map.insert_back("a", 10), Some(1));
    assert_eq!(keys(&map), vec!["b", "c", "a"]);
    assert_eq!(map.get("a"), Some(&10));
    assert_eq!(map.len(), 3, "Reinsert should not duplicate the key");
}

#[test]
fn test_front_back_and_pop() {
    let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    assert!(map.front().is_none() && map.back().is_none());
    assert_eq!(map.pop_front(), None, "Empty map has nothing to pop");

    map.insert_back("a", 1);
    map.insert_back("b", 2);
    assert_eq!(map.front(), Some((&"a", &1)));
    assert_eq!(map.back(), Some((&"b", &2)));

    assert_eq!(map.pop_front(), Some(("a", 1)));
    assert_eq!(map.pop_front(), Some(("b", 2)));
    assert!(map.is_empty());
    assert_eq!(map.pop_front(), None);
}

#[test]
fn test_move_to_back() {
    let mut map = OrderedMap::new();
    for (i, key) in ["a", "b", "c"].into_iter().enumerate() {
        map.insert_back(key, i as i32);
    }

    assert!(map.move_to_back("b"));
    assert_eq!(keys(&map), vec!["a", "c", "b"]);
    assert!(map.move_to_back("b"), "Moving the back entry is a no-op hit");
    assert_eq!(keys(&map), vec!["a", "c", "b"]);
    assert!(map.move_to_back("a"));
    assert_eq!(keys(&map), vec!["c", "b", "a"]);
    assert!(!map.move_to_back("z"), "Absent key cannot be moved");
}

#[test]
fn test_get_does_not_reorder() {
    let mut map = OrderedMap::new();
    map.insert_back("a", 1);
    map.insert_back("b", 2);

    assert_eq!(map.get("a"), Some(&1));
    if let Some(value) = map.get_mut("a") {
        *value = 7;
    }
    assert_eq!(keys(&map), vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&7));
    assert!(map.contains_key("b"));
    assert!(!map.contains_key("c"));
}

#[test]
fn test_remove_relinks_neighbours() {
    let mut map = OrderedMap::new();
    for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        map.insert_back(key, i as i32);
    }

    assert_eq!(map.remove("b"), Some(1));
    assert_eq!(keys(&map), vec!["a", "c", "d"]);
    assert_eq!(map.remove("a"), Some(0));
    assert_eq!(map.remove("d"), Some(3));
    assert_eq!(keys(&map), vec!["c"]);
    assert_eq!(map.front(), map.back());
    assert_eq!(map.remove("b"), None);
}

#[test]
fn test_slots_are_recycled() {
    let mut map = OrderedMap::new();
    for round in 0..100 {
        map.insert_back(round, round);
        if map.len() > 4 {
            map.pop_front();
        }
    }

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![96, 97, 98, 99]);
    assert!(map.slot_count() <= 5, "Freed slots should be reused, got {}", map.slot_count());
}

#[test]
fn test_clear() {
    let mut map = OrderedMap::new();
    map.insert_back("a", 1);
    map.insert_back("b", 2);
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    map.insert_back("c", 3);
    assert_eq!(keys(&map), vec!["c"]);
}

#[test]
fn test_double_ended_iteration() {
    let mut map = OrderedMap::new();
    for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        map.insert_back(key, i as i32);
    }

    assert_eq!(map.keys().rev().copied().collect::<Vec<_>>(), vec!["d", "c", "b", "a"]);
    assert_eq!(map.values().len(), 4);

    let mut iter = map.iter();
    assert_eq!(iter.next(), Some((&"a", &0)));
    assert_eq!(iter.next_back(), Some((&"d", &3)));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some((&"b", &1)));
    assert_eq!(iter.next_back(), Some((&"c", &2)));
    assert_eq!(iter.next(), None, "Ends should not cross");
    assert_eq!(iter.next_back(), None);

    let mut owned = map.clone().into_iter();
    assert_eq!(owned.next_back(), Some(("d", 3)));
    assert_eq!(owned.collect::<Vec<_>>(), vec![("a", 0), ("b", 1), ("c", 2)]);
}

#[test]
fn test_debug_format() {
    let mut map = OrderedMap::new();
    map.insert_back(2, "two");
    map.insert_back(1, "one");
    assert_eq!(format!("{:?}", map), r#"{2: "two", 1: "one"}"#);
}
