use proptest::prelude::*;
use seedbloom::BloomFilter;

fn keys() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..64)
}

proptest! {
    #[test]
    fn no_false_negatives(size in 1usize..4096, hashes in 1usize..12, items in keys()) {
        let mut bf = BloomFilter::new(size, hashes).unwrap();
        for item in &items {
            bf.add(item);
        }
        for item in &items {
            prop_assert!(bf.contains(item));
        }
    }

    #[test]
    fn membership_survives_later_inserts(size in 1usize..2048, hashes in 1usize..8, first in keys(), later in keys()) {
        let mut bf = BloomFilter::new(size, hashes).unwrap();
        bf.extend(&first);
        for item in &later {
            bf.add(item);
            for seen in &first {
                prop_assert!(bf.contains(seen));
            }
        }
    }

    #[test]
    fn duplicate_adds_change_nothing(size in 1usize..2048, hashes in 1usize..8, items in keys()) {
        let mut once = BloomFilter::new(size, hashes).unwrap();
        let mut twice = BloomFilter::new(size, hashes).unwrap();
        for item in &items {
            once.add(item);
            twice.add(item);
            twice.add(item);
        }
        prop_assert_eq!(once.bits_set(), twice.bits_set());
        for item in &items {
            prop_assert_eq!(once.contains(item), twice.contains(item));
        }
    }

    #[test]
    fn lookups_are_repeatable(items in keys(), probe in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut bf = BloomFilter::new(300, 3).unwrap();
        bf.extend(&items);
        let first = bf.contains(&probe);
        for _ in 0..4 {
            prop_assert_eq!(bf.contains(&probe), first);
        }
    }

    #[test]
    fn fresh_filter_is_empty(size in 1usize..4096, hashes in 1usize..12, probe in proptest::collection::vec(any::<u8>(), 0..40)) {
        let bf = BloomFilter::new(size, hashes).unwrap();
        prop_assert!(bf.is_empty());
        prop_assert!(!bf.contains(&probe));
    }

    #[test]
    fn union_keeps_both_sides(a in keys(), b in keys()) {
        let mut left = BloomFilter::new(1024, 4).unwrap();
        let mut right = BloomFilter::new(1024, 4).unwrap();
        left.extend(&a);
        right.extend(&b);
        left.union(&right).unwrap();
        for item in a.iter().chain(&b) {
            prop_assert!(left.contains(item));
        }
    }
}
