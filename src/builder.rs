use crate::core::Segment;
use crate::instrumentation;
use crate::lcs::find_lcs;
use smallvec::{SmallVec, smallvec};
use std::ops::Range;

// Pending work for the alignment loop. Popping a `Region` pushes its suffix,
// matched literal and prefix in reverse so they come back off the stack in
// prefix-literal-suffix order, the same order the recursive definition
// produces.
enum Work {
    Region { a: Range<usize>, b: Range<usize> },
    Literal(Range<usize>),
}

/// Decompose `a` and `b` into the literal runs they share and the wildcard
/// gaps between them.
///
/// The longest common run is fixed first, then the text before it and the
/// text after it are aligned independently. A region whose best common run is
/// shorter than `min_block_size` becomes a single `Wildcard`; a region that is
/// empty on both sides contributes nothing. Literal text is taken from `a`.
pub fn align(a: &[char], b: &[char], min_block_size: usize) -> Vec<Segment> {
    let min_block_size = min_block_size.max(1);
    let mut out = Vec::new();
    let mut stack: SmallVec<[Work; 16]> = smallvec![Work::Region {
        a: 0..a.len(),
        b: 0..b.len(),
    }];

    while let Some(work) = stack.pop() {
        match work {
            Work::Literal(r) => out.push(Segment::Literal(a[r].iter().collect())),
            Work::Region { a: ra, b: rb } => {
                if ra.is_empty() && rb.is_empty() {
                    continue;
                }
                instrumentation::add_region(1);
                match find_lcs(&a[ra.clone()], &b[rb.clone()]) {
                    Some(m) if m.len >= min_block_size => {
                        let a_hit = ra.start + m.a_start;
                        let b_hit = rb.start + m.b_start;
                        stack.push(Work::Region {
                            a: a_hit + m.len..ra.end,
                            b: b_hit + m.len..rb.end,
                        });
                        stack.push(Work::Literal(a_hit..a_hit + m.len));
                        stack.push(Work::Region {
                            a: ra.start..a_hit,
                            b: rb.start..b_hit,
                        });
                    }
                    _ => {
                        instrumentation::add_wildcard(1);
                        out.push(Segment::Wildcard);
                    }
                }
            }
        }
    }

    tracing::trace!(
        a_len = a.len(),
        b_len = b.len(),
        segments = out.len(),
        "aligned"
    );
    out
}

/// [`align`] over the `char`s of two strings.
pub fn align_str(a: &str, b: &str, min_block_size: usize) -> Vec<Segment> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    align(&a, &b, min_block_size)
}
