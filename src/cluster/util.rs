use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

/// Reject item lists paired with a matrix of the wrong size.
pub(crate) fn check_size(items: &[String], matrix: &DistanceMatrix) -> Result<()> {
    if items.len() != matrix.len() {
        return Err(Error::SizeMismatch {
            items: items.len(),
            rows: matrix.len(),
        });
    }
    Ok(())
}

/// The member of `members` minimizing total distance to the rest.
///
/// Items are opaque strings, so clusters cannot report a synthetic average;
/// the medoid is the closest thing to a center that actually exists. Ties go
/// to the earliest member.
pub(crate) fn medoid(members: &[usize], matrix: &DistanceMatrix) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &candidate in members {
        let total: f64 = members.iter().map(|&m| matrix.get(candidate, m)).sum();
        match best {
            Some((_, best_total)) if total >= best_total => {}
            _ => best = Some((candidate, total)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[derive(Clone, Debug)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }

        // Union by size.
        let (mut big, mut small) = (ra, rb);
        if self.size[big] < self.size[small] {
            std::mem::swap(&mut big, &mut small);
        }

        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}
