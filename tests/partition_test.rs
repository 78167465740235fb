use thermolabel::partition;

#[test]
fn partition_is_disjoint_exhaustive_and_ordered() {
    let items: Vec<u32> = (0..10).collect();
    let shards = partition(&items, 4);
    assert_eq!(shards.len(), 4);
    assert_eq!(
        shards.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![3, 3, 2, 2]
    );
    let rejoined: Vec<u32> = shards.into_iter().flatten().collect();
    assert_eq!(rejoined, items);
}

#[test]
fn shard_lengths_differ_by_at_most_one() {
    for total in [0usize, 1, 7, 16, 100, 101] {
        for parts in [1usize, 2, 3, 8, 13] {
            let items: Vec<usize> = (0..total).collect();
            let shards = partition(&items, parts);
            let min = shards.iter().map(Vec::len).min().unwrap();
            let max = shards.iter().map(Vec::len).max().unwrap();
            assert!(max - min <= 1, "total={} parts={}", total, parts);
        }
    }
}

#[test]
fn more_parts_than_items_leaves_trailing_shards_empty() {
    let items: Vec<u32> = (0..3).collect();
    let shards = partition(&items, 8);
    assert_eq!(shards.len(), 8);
    assert_eq!(
        shards.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![1, 1, 1, 0, 0, 0, 0, 0]
    );
    let rejoined: Vec<u32> = shards.into_iter().flatten().collect();
    assert_eq!(rejoined, items);
}

#[test]
fn empty_input_yields_all_empty_shards() {
    let shards = partition(&Vec::<u32>::new(), 4);
    assert_eq!(shards.len(), 4);
    assert!(shards.iter().all(Vec::is_empty));
}
