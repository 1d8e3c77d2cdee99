use lazyseq::prelude::*;

const FAILURE: SeqError = SeqError::InvalidArgument("no element five");

/// `[1, 2, 3, 30, 40]`, then a continuation that fails at index five.
fn failing_list<'a>() -> LazyList<'a, i32> {
    let mut xs = lazy_list(seq([1, 2, 3]));
    xs.append(|_, n| {
        if n == 5 {
            Err(FAILURE)
        } else {
            Ok(Step::Yielded(n as i32 * 10))
        }
    })
    .unwrap();
    xs
}

fn collect<S: Sequence>(s: S) -> Result<Vec<S::Item>, SeqError> {
    try_collect(s)
}

#[test]
fn test_lookup_and_cursor_agree() {
    let xs = failing_list();
    assert_eq!(xs.get(5), Err(FAILURE));
    assert_eq!(collect(xs.iter()), Err(FAILURE));
    assert_eq!(xs.cached_len(), 5);
}

#[test]
fn test_map_passes_error() {
    let xs = failing_list();
    assert_eq!(collect(xs.iter().map(|x| x + 1)), Err(FAILURE));
}

#[test]
fn test_filter_passes_error() {
    let xs = failing_list();
    assert_eq!(collect(xs.iter().filter(|x| x % 2 == 0)), Err(FAILURE));
}

#[test]
fn test_take_while_passes_error_without_cutting() {
    let xs = failing_list();
    assert_eq!(collect(xs.iter().take_while(|_| true)), Err(FAILURE));
    assert_eq!(collect(xs.iter().take_while(|x| *x < 30)), Ok(vec![1, 2, 3]));
}

#[test]
fn test_slice_passes_error() {
    let xs = failing_list();
    assert_eq!(collect(xs.slice(0, 8, 1).unwrap()), Err(FAILURE));
    assert_eq!(collect(xs.slice(0, UNBOUNDED, 2).unwrap()), Err(FAILURE));
    assert_eq!(collect(xs.slice_to(5).unwrap()), Ok(vec![1, 2, 3, 30, 40]));
}

#[test]
fn test_zip_passes_error() {
    let xs = failing_list();
    assert_eq!(collect(xs.iter().zip(seq(0..))), Err(FAILURE));
    assert_eq!(collect(seq(0..3).zip(xs.iter())), Ok(vec![(0, 1), (1, 2), (2, 3)]));
}

#[test]
fn test_chain_passes_error() {
    let xs = failing_list();
    assert_eq!(collect(chain(seq([0]), xs.iter())), Err(FAILURE));
    assert_eq!(collect(chain(xs.iter(), seq([0]))), Err(FAILURE));
}

#[test]
fn test_list_over_failing_list_passes_error() {
    let xs = failing_list();
    let copy = lazy_list(xs.iter());
    assert_eq!(copy.get(4), Ok(40));
    assert_eq!(copy.get(5), Err(FAILURE));
    assert_eq!(collect(copy.iter()), Err(FAILURE));
}

#[test]
fn test_plain_drivers_stop_at_error() {
    let xs = failing_list();
    assert_eq!(count(xs.iter()), 5);

    let mut seen = Vec::new();
    for x in xs.iter().into_iter() {
        seen.push(x);
    }
    assert_eq!(seen, vec![1, 2, 3, 30, 40]);
}
