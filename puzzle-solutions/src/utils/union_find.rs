//! Disjoint-set forest over `0..n`

/// Union-find with path compression and union by size
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`
    ///
    /// # Panics
    ///
    /// If `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`; `false` if they were already one
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in the set containing `x`
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Number of disjoint sets
    pub fn components(&self) -> usize {
        self.components
    }

    /// Members of every set, each sorted, sets ordered by smallest member
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); self.len()];
        for x in 0..self.len() {
            let root = self.find(x);
            by_root[root].push(x);
        }
        let mut groups: Vec<Vec<usize>> = by_root.into_iter().filter(|g| !g.is_empty()).collect();
        groups.sort_by_key(|g| g[0]);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_union_and_find() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.components(), 6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert!(uf.connected(0, 3));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.size_of(2), 4);
        assert_eq!(uf.size_of(5), 1);
        assert_eq!(uf.components(), 3);
        assert_eq!(uf.groups(), vec![vec![0, 1, 2, 3], vec![4], vec![5]]);
    }

    #[test]
    fn test_empty() {
        let mut uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.components(), 0);
        assert!(uf.groups().is_empty());
    }

    proptest! {
        #[test]
        fn prop_sizes_sum_to_len(
            n in 1usize..40,
            edges in prop::collection::vec((0usize..40, 0usize..40), 0..60),
        ) {
            let mut uf = UnionFind::new(n);
            for (a, b) in edges {
                uf.union(a % n, b % n);
            }
            let groups = uf.groups();
            prop_assert_eq!(groups.len(), uf.components());
            prop_assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), n);
            for group in &groups {
                prop_assert_eq!(uf.size_of(group[0]), group.len());
                for &x in group {
                    prop_assert!(uf.connected(group[0], x));
                }
            }
        }
    }
}
