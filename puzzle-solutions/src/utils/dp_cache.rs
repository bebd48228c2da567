//! Memoised dynamic programming over an implicit dependency graph
//!
//! A [`DpProblem`] says which sub-problems an index depends on and how to
//! combine their values. [`DpCache`] resolves dependencies with an explicit
//! work stack, so deep chains do not overflow the call stack, and computes
//! each value exactly once.
//!
//! ```rust
//! use puzzle_solutions::utils::dp_cache::{DpCache, DpProblem};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<u64, u64> for Fibonacci {
//!     fn deps(&self, n: &u64) -> Vec<u64> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::new(Fibonacci);
//! assert_eq!(cache.get(&90).unwrap(), 2880067194370816120);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// An index (transitively) depends on itself
    #[error("dependency cycle detected {depth} levels deep")]
    Cycle { depth: usize },
}

/// Dependency structure and combination step of a DP problem
///
/// `I` is the index type and `K` the value stored per index.
pub trait DpProblem<I, K> {
    /// Indices this index depends on; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index`, given the values of `deps(index)` in the same order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a pair of closures to [`DpProblem`]
pub struct ClosureProblem<I, K, D, C> {
    deps: D,
    compute: C,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(deps: D, compute: C) -> Self {
        Self {
            deps,
            compute,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.deps)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute)(index, deps)
    }
}

struct Frame<I> {
    index: I,
    deps: Vec<I>,
    next: usize,
}

/// Lazily filled memo table for a [`DpProblem`]
///
/// Takes `&self` so a cache can be shared by several lookups inside one
/// solver without threading a mutable borrow around.
pub struct DpCache<I, K, P> {
    values: RefCell<HashMap<I, K>>,
    problem: P,
}

impl<I, K, P> DpCache<I, K, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    P: DpProblem<I, K>,
{
    pub fn new(problem: P) -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            problem,
        }
    }

    /// Value for `index`, computing it and any missing dependencies first
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        if let Some(value) = self.values.borrow().get(index) {
            return Ok(value.clone());
        }

        let mut values = self.values.borrow_mut();
        let mut in_progress: HashSet<I> = HashSet::new();
        let mut stack = vec![self.frame(index.clone())];
        in_progress.insert(index.clone());

        while let Some(top) = stack.last_mut() {
            if let Some(dep) = top.deps.get(top.next).cloned() {
                top.next += 1;
                if values.contains_key(&dep) {
                    continue;
                }
                if !in_progress.insert(dep.clone()) {
                    return Err(DpError::Cycle { depth: stack.len() });
                }
                stack.push(self.frame(dep));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let resolved = done.deps.iter().map(|d| values[d].clone()).collect();
            let value = self.problem.compute(&done.index, resolved);
            in_progress.remove(&done.index);
            values.insert(done.index, value);
        }

        Ok(values[index].clone())
    }

    pub fn contains(&self, index: &I) -> bool {
        self.values.borrow().contains_key(index)
    }

    /// Number of memoised values
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    fn frame(&self, index: I) -> Frame<I> {
        let deps = self.problem.deps(&index);
        Frame {
            index,
            deps,
            next: 0,
        }
    }
}

impl<I, K, D, C> DpCache<I, K, ClosureProblem<I, K, D, C>>
where
    I: Hash + Eq + Clone,
    K: Clone,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Cache driven by a dependency closure and a compute closure
    pub fn from_fns(deps: D, compute: C) -> Self {
        Self::new(ClosureProblem::new(deps, compute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fibonacci;

    impl DpProblem<u64, u64> for Fibonacci {
        fn deps(&self, n: &u64) -> Vec<u64> {
            if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
        }

        fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
            if *n <= 1 { *n } else { deps[0] + deps[1] }
        }
    }

    #[test]
    fn test_fibonacci() {
        let cache = DpCache::new(Fibonacci);
        assert_eq!(cache.get(&0).unwrap(), 0);
        assert_eq!(cache.get(&1).unwrap(), 1);
        assert_eq!(cache.get(&10).unwrap(), 55);
        assert_eq!(cache.get(&20).unwrap(), 6765);
        assert_eq!(cache.len(), 21);
    }

    #[test]
    fn test_diamond_computes_shared_dependency_once() {
        struct Diamond {
            count: Rc<Cell<i32>>,
        }

        impl DpProblem<usize, i32> for Diamond {
            fn deps(&self, n: &usize) -> Vec<usize> {
                match *n {
                    0 => vec![1, 2],
                    1 | 2 => vec![3],
                    _ => vec![],
                }
            }

            fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
                self.count.set(self.count.get() + 1);
                match *n {
                    0 => deps[0] + deps[1],
                    1 => deps[0] * 2,
                    2 => deps[0] * 3,
                    _ => 10,
                }
            }
        }

        let count = Rc::new(Cell::new(0));
        let cache = DpCache::new(Diamond {
            count: count.clone(),
        });
        assert_eq!(cache.get(&0).unwrap(), 50);
        assert_eq!(count.get(), 4);
        assert_eq!(cache.get(&0).unwrap(), 50);
        assert_eq!(cache.get(&3).unwrap(), 10);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let cache = DpCache::from_fns(
            |n: &u32| if *n == 0 { vec![] } else { vec![n - 1] },
            |n: &u32, deps: Vec<u64>| deps.first().copied().unwrap_or(0) + u64::from(*n),
        );
        assert_eq!(cache.get(&200_000).unwrap(), 200_000 * 200_001 / 2);
    }

    #[test]
    fn test_cycle_is_reported() {
        let cache = DpCache::from_fns(
            |n: &u8| vec![(n + 1) % 3],
            |_: &u8, deps: Vec<u8>| deps[0],
        );
        assert!(matches!(cache.get(&0), Err(DpError::Cycle { .. })));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let cache = DpCache::from_fns(|n: &u8| vec![*n], |_: &u8, _: Vec<u8>| 0);
        assert_eq!(cache.get(&7), Err(DpError::Cycle { depth: 1 }));
        assert!(!cache.contains(&7));
    }

    #[test]
    fn test_grid_paths() {
        let cache = DpCache::from_fns(
            |&(r, c): &(usize, usize)| {
                let mut deps = Vec::new();
                if r > 0 {
                    deps.push((r - 1, c));
                }
                if c > 0 {
                    deps.push((r, c - 1));
                }
                deps
            },
            |_: &(usize, usize), deps: Vec<u64>| {
                if deps.is_empty() { 1 } else { deps.iter().sum() }
            },
        );
        assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
        assert_eq!(cache.get(&(2, 2)).unwrap(), 6);
    }

    proptest! {
        #[test]
        fn prop_matches_iterative_sum(n in 0u32..5_000) {
            let cache = DpCache::from_fns(
                |k: &u32| if *k == 0 { vec![] } else { vec![k - 1] },
                |k: &u32, deps: Vec<u64>| deps.first().copied().unwrap_or(0) + u64::from(*k),
            );
            let expected: u64 = (0..=u64::from(n)).sum();
            prop_assert_eq!(cache.get(&n).unwrap(), expected);
        }
    }
}
