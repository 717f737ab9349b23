// Longest common substring by diagonal shifting.
//
// The two sequences are slid against each other at every relative offset and
// each overlapping diagonal is scanned once, keeping a running match length
// that resets on mismatch:
//
//                      (shift b)                     (shift a)
//   a               ABC    ABC    ABC          ABC     ABC      ABC
//   b               DEF   DEF   DEF            DEF    DEF     DEF
//   shift           0     1     2              0       1        2
//   compared        AD BE CF  AE BF  AF        (dup)   BD CE    CD
//
// Shift 0 has the largest overlap and every later shift overlaps less, so once
// the best run found is at least as long as the next diagonal nothing further
// in that direction can beat it and the pass stops. Fastest when the common
// run is long, slowest (quadratic) when the inputs share little.
//
// Ties keep the first run found: a later run replaces the best only when it is
// strictly longer. Scan order is all b-shifts ascending, then all a-shifts
// ascending, each diagonal left to right.
use crate::instrumentation;

/// Best common run between two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcs {
    pub len: usize,
    /// Start of the run in `a`.
    pub a_start: usize,
    /// Start of the run in `b`.
    pub b_start: usize,
}

/// Find the longest contiguous run present in both `a` and `b`.
///
/// Returns `None` when the sequences share no element at any alignment
/// (including when either is empty).
pub fn find_lcs<T: PartialEq>(a: &[T], b: &[T]) -> Option<Lcs> {
    let best = shift_pass(a, b, Shift::B, None);
    shift_pass(a, b, Shift::A, best)
}

/// [`find_lcs`] over the `char`s of two strings. Offsets count chars, not bytes.
pub fn find_lcs_str(a: &str, b: &str) -> Option<Lcs> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    find_lcs(&a, &b)
}

/// Flat `(length, a_offset, b_offset)` form with `-1` offsets when nothing matched.
pub fn lcs_triple(found: Option<Lcs>) -> (usize, isize, isize) {
    match found {
        Some(l) => (l.len, l.a_start as isize, l.b_start as isize),
        None => (0, -1, -1),
    }
}

#[derive(Clone, Copy)]
enum Shift {
    /// `a` stays put, `b`'s start moves right.
    B,
    /// `b` stays put, `a`'s start moves right.
    A,
}

fn shift_pass<T: PartialEq>(a: &[T], b: &[T], shift: Shift, mut best: Option<Lcs>) -> Option<Lcs> {
    instrumentation::add_shift_pass(1);
    let (shifted_len, fixed_len, first) = match shift {
        Shift::B => (b.len(), a.len(), 0),
        // diagonal 0 was already covered by the b pass
        Shift::A => (a.len(), b.len(), 1),
    };

    for i in first..shifted_len {
        let overlap = fixed_len.min(shifted_len - i);
        if best.map_or(0, |l| l.len) >= overlap {
            instrumentation::add_short_circuit(1);
            break;
        }
        let (a0, b0) = match shift {
            Shift::B => (0, i),
            Shift::A => (i, 0),
        };
        best = scan_diagonal(a, b, a0, b0, overlap, best);
    }
    best
}

fn scan_diagonal<T: PartialEq>(
    a: &[T],
    b: &[T],
    a0: usize,
    b0: usize,
    len: usize,
    mut best: Option<Lcs>,
) -> Option<Lcs> {
    let mut best_len = best.map_or(0, |l| l.len);
    let mut run = 0usize;
    for k in 0..len {
        if a[a0 + k] == b[b0 + k] {
            run += 1;
            if run > best_len {
                best_len = run;
                // point at the start of the run, not where it was detected
                best = Some(Lcs {
                    len: run,
                    a_start: a0 + k + 1 - run,
                    b_start: b0 + k + 1 - run,
                });
            }
        } else {
            run = 0;
        }
    }
    instrumentation::add_diagonal(len as u64);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_have_no_match() {
        assert_eq!(find_lcs_str("", ""), None);
        assert_eq!(find_lcs_str("abc", ""), None);
        assert_eq!(find_lcs_str("", "abc"), None);
        assert_eq!(lcs_triple(find_lcs_str("", "")), (0, -1, -1));
    }

    #[test]
    fn identical_inputs_match_whole() {
        assert_eq!(lcs_triple(find_lcs_str("ABC", "ABC")), (3, 0, 0));
        assert_eq!(lcs_triple(find_lcs_str("A", "A")), (1, 0, 0));
    }

    #[test]
    fn disjoint_inputs_have_no_match() {
        assert_eq!(lcs_triple(find_lcs_str("ABC", "DEF")), (0, -1, -1));
    }

    #[test]
    fn offsets_point_at_run_start() {
        assert_eq!(lcs_triple(find_lcs_str("xxxABCyyy", "zzzABCww")), (3, 3, 3));
        assert_eq!(lcs_triple(find_lcs_str("ABCxx", "yyyyABC")), (3, 0, 4));
        assert_eq!(lcs_triple(find_lcs_str("yyyyABC", "ABCxx")), (3, 4, 0));
    }

    #[test]
    fn tie_keeps_first_run_in_shift_order() {
        // "ab" (b shift 0) and "cd" (b shift 0, later on the diagonal) tie;
        // the earlier one wins.
        assert_eq!(lcs_triple(find_lcs_str("abXcd", "abYcd")), (2, 0, 0));
        // "pq" sits on b-shift 2, "xy" only on an a-shift; b-shifts go first.
        assert_eq!(lcs_triple(find_lcs_str("__pqxy", "xy..pq")), (2, 2, 4));
    }

    #[test]
    fn longer_run_on_later_shift_replaces_best() {
        assert_eq!(lcs_triple(find_lcs_str("ab---hello", "abhello")), (5, 5, 2));
    }

    #[test]
    fn works_over_arbitrary_elements() {
        let a = [1u32, 2, 3, 4, 5];
        let b = [9u32, 3, 4, 5, 9];
        assert_eq!(
            find_lcs(&a, &b),
            Some(Lcs {
                len: 3,
                a_start: 2,
                b_start: 1
            })
        );
    }

    #[test]
    fn short_circuit_fires_on_identical_input() {
        instrumentation::reset_counters();
        find_lcs_str("abcdefgh", "abcdefgh");
        let snap = instrumentation::counters_snapshot();
        assert_eq!(snap.diagonals, 1);
        assert_eq!(snap.short_circuits, 2);
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        assert_eq!(lcs_triple(find_lcs_str("ééabc", "abc")), (3, 2, 0));
    }
}
