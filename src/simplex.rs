//! Integer lattice on the simplex: every way of splitting `ndiv` units
//! across `dim` components, enumerated in lexicographic order.
//!
//! Lexicographic order starts at `[0, …, 0, ndiv]` and ends at
//! `[ndiv, 0, …, 0]`, and every point has a closed-form rank, so
//! neighbors can be located without a lookup table.

/// Binomial coefficient C(n, k).
pub fn binom(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // acc == C(n, i) at every step, so the division is exact.
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// Number of lattice points on the full simplex.
#[inline]
pub fn grid_size(dim: usize, ndiv: usize) -> usize {
    if dim == 0 {
        return 0;
    }
    binom(ndiv + dim - 1, dim - 1)
}

/// Lexicographic iterator over compositions of `ndiv` into `dim` parts.
#[derive(Debug, Clone)]
pub struct Compositions {
    next: Option<Vec<usize>>,
}

impl Compositions {
    pub fn new(dim: usize, ndiv: usize) -> Self {
        let next = (dim > 0).then(|| {
            let mut x = vec![0; dim];
            x[dim - 1] = ndiv;
            x
        });
        Self { next }
    }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

/// Next composition in lexicographic order, `None` after `[ndiv, 0, …, 0]`.
fn successor(x: &[usize]) -> Option<Vec<usize>> {
    let dim = x.len();
    let mut tail = 0;
    for j in (0..dim.saturating_sub(1)).rev() {
        tail += x[j + 1];
        if tail > 0 {
            let mut y = x.to_vec();
            y[j] += 1;
            for v in &mut y[j + 1..] {
                *v = 0;
            }
            y[dim - 1] = tail - 1;
            return Some(y);
        }
    }
    None
}

/// Position of `x` in the lexicographic enumeration of its simplex.
pub fn rank(x: &[usize]) -> usize {
    let dim = x.len();
    let mut remaining: usize = x.iter().sum();
    let mut r = 0;
    for j in 0..dim.saturating_sub(1) {
        let parts_after = dim - j - 1;
        for v in 0..x[j] {
            r += binom(remaining - v + parts_after - 1, parts_after - 1);
        }
        remaining -= x[j];
    }
    r
}

/// Ranks of every point reachable by moving one unit between two components.
pub fn unit_transfer_ranks(x: &[usize]) -> Vec<usize> {
    let dim = x.len();
    let mut out = Vec::with_capacity(dim * dim.saturating_sub(1));
    let mut y = x.to_vec();
    for from in 0..dim {
        if x[from] == 0 {
            continue;
        }
        for to in 0..dim {
            if to == from {
                continue;
            }
            y[from] -= 1;
            y[to] += 1;
            out.push(rank(&y));
            y[from] += 1;
            y[to] -= 1;
        }
    }
    out
}

/// Rank of the vertex holding all `ndiv` units in component `axis`.
pub fn pure_vertex_rank(dim: usize, ndiv: usize, axis: usize) -> usize {
    let mut x = vec![0; dim];
    x[axis] = ndiv;
    rank(&x)
}

/// Compositions with every component at least one unit.
pub fn interior(dim: usize, ndiv: usize) -> impl Iterator<Item = Vec<usize>> {
    let free = if dim > 0 && ndiv >= dim {
        Some(ndiv - dim)
    } else {
        None
    };
    free.into_iter()
        .flat_map(move |free| Compositions::new(dim, free))
        .map(|x| x.into_iter().map(|v| v + 1).collect::<Vec<usize>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_order_is_lexicographic() {
        let pts: Vec<_> = Compositions::new(3, 2).collect();
        assert_eq!(
            pts,
            vec![
                vec![0, 0, 2],
                vec![0, 1, 1],
                vec![0, 2, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![2, 0, 0],
            ]
        );
    }

    #[test]
    fn rank_matches_enumeration() {
        for (i, x) in Compositions::new(4, 5).enumerate() {
            assert_eq!(rank(&x), i, "rank mismatch for {x:?}");
        }
    }

    #[test]
    fn single_component_has_one_point() {
        let pts: Vec<_> = Compositions::new(1, 7).collect();
        assert_eq!(pts, vec![vec![7]]);
        assert_eq!(grid_size(1, 7), 1);
    }

    #[test]
    fn binomials() {
        assert_eq!(binom(5, 2), 10);
        assert_eq!(binom(7, 0), 1);
        assert_eq!(binom(3, 4), 0);
        assert_eq!(grid_size(3, 5), 21);
    }

    #[test]
    fn interior_points_are_strictly_positive() {
        let pts: Vec<_> = interior(3, 5).collect();
        assert_eq!(pts.len(), grid_size(3, 2));
        assert!(pts.iter().all(|p| p.iter().all(|&v| v >= 1)));
        assert!(pts.iter().all(|p| p.iter().sum::<usize>() == 5));
        assert_eq!(interior(4, 3).count(), 0);
    }
}
