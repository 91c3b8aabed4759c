use aug_forest::{Augment, AugTree, Color, CountTree, HeightTree, TreeSnapshot};

fn insert_value<A: Augment<i32>>(tree: &mut AugTree<i32, A>, value: i32) {
    tree.insert(value);
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after insert({value}): {err}\n{}", tree.print());
    }
}

fn shape<A: Augment<i32>>(tree: &AugTree<i32, A>) -> Vec<(i32, char, A::Value)> {
    tree.snapshot()
        .nodes
        .into_iter()
        .map(|n| {
            let color = if n.color == Color::Black { 'B' } else { 'R' };
            (n.item, color, n.aug)
        })
        .collect()
}

fn subtree_size<T, V>(snap: &TreeSnapshot<T, V>, id: Option<usize>) -> usize {
    id.map_or(0, |id| {
        let n = &snap.nodes[id];
        1 + subtree_size(snap, n.left) + subtree_size(snap, n.right)
    })
}

fn subtree_height<T, V>(snap: &TreeSnapshot<T, V>, id: Option<usize>) -> i32 {
    id.map_or(-1, |id| {
        let n = &snap.nodes[id];
        1 + subtree_height(snap, n.left).max(subtree_height(snap, n.right))
    })
}

const CLRS_KEYS: [i32; 10] = [20, 15, 25, 10, 5, 1, 17, 22, 27, 8];

const LONG_KEYS: [i32; 21] = [
    20, 15, 25, 10, 5, 1, 17, 22, 27, 8, 99, 101, 7, 2, 33, 34, 35, 103, 77, 78, 79,
];

#[test]
fn clrs_sequence_shape_matrix() {
    let mut tree = HeightTree::new();
    for key in CLRS_KEYS {
        insert_value(&mut tree, key);
    }

    assert_eq!(tree.root_item(), Some(&20));
    assert_eq!(
        shape(&tree),
        vec![
            (20, 'B', 3),
            (10, 'R', 2),
            (5, 'B', 1),
            (1, 'R', 0),
            (8, 'R', 0),
            (15, 'B', 1),
            (17, 'R', 0),
            (25, 'B', 1),
            (22, 'R', 0),
            (27, 'R', 0),
        ]
    );
}

#[test]
fn clrs_sequence_counts_matrix() {
    let mut tree = CountTree::new();
    for key in CLRS_KEYS {
        insert_value(&mut tree, key);
    }
    assert_eq!(*tree.root_aug(), CLRS_KEYS.len());

    let keys: Vec<i32> = tree.traverse_inorder().map(|v| *v.item).collect();
    let mut sorted = CLRS_KEYS.to_vec();
    sorted.sort();
    assert_eq!(keys, sorted);

    let snap = tree.snapshot();
    for node in &snap.nodes {
        assert_eq!(node.aug, subtree_size(&snap, Some(node.id)));
    }
}

#[test]
fn long_sequence_heights_matrix() {
    let mut tree = HeightTree::new();
    for key in LONG_KEYS {
        insert_value(&mut tree, key);
    }

    assert_eq!(
        shape(&tree),
        vec![
            (20, 'B', 5),
            (10, 'B', 3),
            (5, 'R', 2),
            (1, 'B', 1),
            (2, 'R', 0),
            (8, 'B', 1),
            (7, 'R', 0),
            (15, 'B', 1),
            (17, 'R', 0),
            (33, 'R', 4),
            (25, 'B', 1),
            (22, 'B', 0),
            (27, 'B', 0),
            (99, 'B', 3),
            (35, 'R', 2),
            (34, 'B', 0),
            (78, 'B', 1),
            (77, 'R', 0),
            (79, 'R', 0),
            (101, 'B', 1),
            (103, 'R', 0),
        ]
    );
}

#[test]
fn ascending_1_to_10_matrix() {
    let mut tree = HeightTree::new();
    for key in 1..=10 {
        insert_value(&mut tree, key);
    }
    assert_eq!(
        shape(&tree),
        vec![
            (4, 'B', 4),
            (2, 'B', 1),
            (1, 'B', 0),
            (3, 'B', 0),
            (6, 'B', 3),
            (5, 'B', 0),
            (8, 'R', 2),
            (7, 'B', 0),
            (9, 'B', 1),
            (10, 'R', 0),
        ]
    );
}

#[test]
fn numbers_from_0_to_300_matrix() {
    let mut counts = CountTree::new();
    let mut heights = HeightTree::new();
    for i in 0..=300 {
        insert_value(&mut counts, i);
        insert_value(&mut heights, i);
        assert_eq!(*counts.root_aug(), (i + 1) as usize);
    }

    let snap = heights.snapshot();
    for node in &snap.nodes {
        assert_eq!(node.aug, subtree_height(&snap, Some(node.id)));
    }
    // 2 * log2(n + 1) bound for red-black trees.
    let bound = 2.0 * ((heights.len() + 1) as f64).log2();
    assert!(f64::from(*heights.root_aug() + 1) <= bound);
}

#[test]
fn numbers_from_300_to_11_matrix() {
    let mut tree = CountTree::new();
    for i in (11..=300).rev() {
        insert_value(&mut tree, i);
    }
    assert_eq!(tree.len(), 290);
    let first = tree.traverse_inorder().next().map(|v| *v.item);
    assert_eq!(first, Some(11));
}

#[test]
fn numbers_both_directions_from_50_matrix() {
    let mut tree = CountTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, 50 + i);
        insert_value(&mut tree, 50 - i);
        assert_eq!(*tree.root_aug(), (i * 2 + 2) as usize);
    }
}

#[test]
fn repeated_keys_matrix() {
    let mut tree = CountTree::new();
    for i in 0..64 {
        insert_value(&mut tree, i % 4);
    }
    let keys: Vec<i32> = tree.traverse_inorder().map(|v| *v.item).collect();
    assert_eq!(keys.len(), 64);
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(keys.iter().filter(|&&k| k == 3).count(), 16);
}

#[test]
fn structure_view_matches_links_matrix() {
    let mut tree = CountTree::new();
    for key in CLRS_KEYS {
        insert_value(&mut tree, key);
    }
    let views: Vec<_> = tree.structure().collect();
    assert_eq!(views.len(), CLRS_KEYS.len());

    let root = &views[0];
    assert_eq!(*root.item, 20);
    assert_eq!(root.color, Color::Black);
    assert_eq!(root.left, Some(&10));
    assert_eq!(root.right, Some(&25));

    let leaf = views.iter().find(|v| *v.item == 27).unwrap();
    assert_eq!(leaf.left, None);
    assert_eq!(leaf.right, None);
    assert_eq!(leaf.color, Color::Red);
}
