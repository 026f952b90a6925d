//! Pair enumeration for the collision scan.
//!
//! Brute force O(n²) over the body collection; the simulation only ever
//! holds a handful of bodies so there is no spatial partitioning.

/// How the collision scan walks the body collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairPolicy {
    /// Every ordered pair `(i, j)` with `i != j`, `i` outer and `j` inner.
    /// A colliding pair is visited twice per frame, once per ordering.
    #[default]
    Ordered,
    /// Each unordered pair once, as `(i, j)` with `i < j`.
    Unordered,
}

/// Iterator over index pairs of a collection of `len` bodies.
#[derive(Debug, Clone)]
pub struct PairIter {
    len: usize,
    policy: PairPolicy,
    i: usize,
    j: usize,
}

impl PairIter {
    pub fn new(len: usize, policy: PairPolicy) -> Self {
        let j = match policy {
            PairPolicy::Ordered => 0,
            PairPolicy::Unordered => 1,
        };
        Self {
            len,
            policy,
            i: 0,
            j,
        }
    }

    fn advance_row(&mut self) {
        self.i += 1;
        self.j = match self.policy {
            PairPolicy::Ordered => 0,
            PairPolicy::Unordered => self.i + 1,
        };
    }
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.len {
            if self.j >= self.len {
                self.advance_row();
                continue;
            }
            let pair = (self.i, self.j);
            self.j += 1;
            if pair.0 != pair.1 {
                return Some(pair);
            }
        }
        None
    }
}

/// Pairs of a collection of `len` bodies under `policy`.
pub fn pairs(len: usize, policy: PairPolicy) -> PairIter {
    PairIter::new(len, policy)
}

/// Mutable references to two distinct elements of a slice.
///
/// # Panics
///
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut requires distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
