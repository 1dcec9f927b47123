use quickcheck_macros::quickcheck;

use midbst::Tree;

use crate::SmallRange;

/// Checks the BST ordering invariant below `tree`, with every value in the
/// open interval `(lower, upper)`.
fn is_bst(tree: &Tree, lower: Option<i64>, upper: Option<i64>) -> bool {
    match tree.root() {
        None => true,
        Some(n) => {
            let v = n.value();
            lower.map_or(true, |l| l < v)
                && upper.map_or(true, |u| v < u)
                && is_bst(n.left(), lower, Some(v))
                && is_bst(n.right(), Some(v), upper)
        }
    }
}

#[quickcheck]
fn holds_exactly_the_range(range: SmallRange) -> bool {
    let tree = range.build();

    tree.len() == range.size() && tree.iter().eq(range.low..=range.high)
}

#[quickcheck]
fn ordering_invariant(range: SmallRange) -> bool {
    is_bst(&range.build(), None, None)
}

#[quickcheck]
fn height_is_logarithmic(range: SmallRange) -> bool {
    // ceil(lg(S + 1)) is the bit length of S.
    let size = range.size();
    let expected = (usize::BITS - size.leading_zeros()) as usize;

    range.build().height() == expected
}

#[quickcheck]
fn contains_matches_range(range: SmallRange, probes: Vec<i64>) -> bool {
    let tree = range.build();

    probes.iter().all(|&x| tree.contains(x) == range.contains(x))
}

#[quickcheck]
fn inverted_range_is_empty(a: i64, b: i64) -> bool {
    a <= b || Tree::build(a, b).is_empty()
}
