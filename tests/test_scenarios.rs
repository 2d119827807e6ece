/// End-to-end verification scenarios
///
/// Each case builds a forest, applies the listed unions and checks the verdict.
use moneymatters::{verify, UnionFind, Value, Verdict};
use pretty_assertions::assert_eq;

fn run(values: &[Value], unions: &[(usize, usize)]) -> Verdict {
    let mut forest = UnionFind::make(values.len() as i64).unwrap();
    for &(a, b) in unions {
        forest.union(a, b).unwrap();
    }
    verify(&mut forest, values).unwrap()
}

#[test]
fn test_two_balanced_pairs() {
    assert_eq!(run(&[3, -3, 5, -5], &[(0, 1), (2, 3)]), Verdict::Possible);
}

#[test]
fn test_one_pair_off_by_one() {
    assert_eq!(run(&[3, -3, 5, -4], &[(0, 1), (2, 3)]), Verdict::Impossible);
}

#[test]
fn test_zero_singletons() {
    assert_eq!(run(&[0, 0, 0], &[]), Verdict::Possible);
}

#[test]
fn test_repeated_union() {
    assert_eq!(run(&[1, -1], &[(0, 1), (0, 1)]), Verdict::Possible);
}

#[test]
fn test_zero_singleton_between_pairs() {
    assert_eq!(
        run(&[10, -10, 0, 7, -7], &[(0, 1), (3, 4)]),
        Verdict::Possible
    );
}

#[test]
fn test_nonzero_singleton() {
    assert_eq!(run(&[5], &[]), Verdict::Impossible);
}

#[test]
fn test_empty_forest() {
    assert_eq!(run(&[], &[]), Verdict::Possible);
}

#[test]
fn test_large_single_group() {
    let n = 200_000;
    let mut values = vec![0 as Value; n];
    values[0] = 1;
    values[n - 1] = -1;
    let unions: Vec<(usize, usize)> = (1..n).map(|i| (i, i - 1)).collect();
    assert_eq!(run(&values, &unions), Verdict::Possible);
}

#[test]
fn test_transitive_merge_spans_groups() {
    // {0,1} and {2,3} are each unbalanced but cancel once joined
    let values = [4, 1, -2, -3];
    assert_eq!(run(&values, &[(0, 1), (2, 3)]), Verdict::Impossible);
    assert_eq!(run(&values, &[(0, 1), (2, 3), (1, 2)]), Verdict::Possible);
}
