//! Counting and enumeration helpers
//!
//! Permutations and fixed-size combinations come from `itertools`; this
//! module covers the shapes it does not.

/// Ordered ways to split `total` into `parts` non-negative summands
///
/// Yields `C(total + parts - 1, parts - 1)` vectors in lexicographic order.
///
/// ```
/// use puzzle_solutions::utils::combinatorics::compositions;
/// let all: Vec<Vec<u64>> = compositions(2, 2).collect();
/// assert_eq!(all, vec![vec![0, 2], vec![1, 1], vec![2, 0]]);
/// ```
pub fn compositions(total: u64, parts: usize) -> Compositions {
    let current = match parts {
        0 if total == 0 => Some(Vec::new()),
        0 => None,
        _ => {
            let mut first = vec![0; parts];
            first[parts - 1] = total;
            Some(first)
        }
    };
    Compositions { current }
}

/// Iterator returned by [`compositions`]
#[derive(Debug, Clone)]
pub struct Compositions {
    current: Option<Vec<u64>>,
}

impl Iterator for Compositions {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Vec<u64>> {
        let out = self.current.clone()?;
        let advanced = self.current.as_mut().is_some_and(|c| advance(c));
        if !advanced {
            self.current = None;
        }
        Some(out)
    }
}

// Odometer over every slot but the last, which holds the remainder.
fn advance(a: &mut [u64]) -> bool {
    let Some(last) = a.len().checked_sub(1) else {
        return false;
    };
    for i in (0..last).rev() {
        if a[last] > 0 {
            a[i] += 1;
            a[last] -= 1;
            return true;
        }
        a[last] += a[i];
        a[i] = 0;
    }
    false
}

/// Index sets of `items` whose values add up to exactly `target`
///
/// Each set is sorted ascending; sets come out in lexicographic order.
pub fn subsets_summing_to(items: &[u64], target: u64) -> Vec<Vec<usize>> {
    let mut suffix = vec![0; items.len() + 1];
    for i in (0..items.len()).rev() {
        suffix[i] = suffix[i + 1] + items[i];
    }
    let mut out = Vec::new();
    let mut chosen = Vec::new();
    collect_subsets(items, &suffix, 0, target, &mut chosen, &mut out);
    out
}

fn collect_subsets(
    items: &[u64],
    suffix: &[u64],
    start: usize,
    remaining: u64,
    chosen: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(chosen.clone());
    }
    if start == items.len() || suffix[start] < remaining {
        return;
    }
    for i in start..items.len() {
        if items[i] <= remaining {
            chosen.push(i);
            collect_subsets(items, suffix, i + 1, remaining - items[i], chosen, out);
            chosen.pop();
        }
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; `lcm(0, x) == 0`
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of every value, `1` for an empty input
pub fn lcm_all(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn binomial(n: u64, k: u64) -> u64 {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_compositions_edges() {
        assert_eq!(compositions(0, 0).collect::<Vec<_>>(), vec![Vec::<u64>::new()]);
        assert_eq!(compositions(3, 0).count(), 0);
        assert_eq!(compositions(5, 1).collect::<Vec<_>>(), vec![vec![5]]);
        assert_eq!(compositions(0, 3).collect::<Vec<_>>(), vec![vec![0, 0, 0]]);
        assert_eq!(compositions(100, 4).count(), 176_851);
    }

    #[test]
    fn test_subsets_summing_to() {
        let containers = [20, 15, 10, 5, 5];
        let subsets = subsets_summing_to(&containers, 25);
        assert_eq!(
            subsets,
            vec![vec![0, 3], vec![0, 4], vec![1, 2], vec![1, 3, 4]]
        );
        assert_eq!(subsets_summing_to(&[1, 2], 0), vec![Vec::<usize>::new()]);
        assert!(subsets_summing_to(&[4, 6], 5).is_empty());
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!(lcm_all([2, 3, 4, 5]), 60);
        assert_eq!(lcm_all([]), 1);
    }

    proptest! {
        #[test]
        fn prop_compositions_are_complete_and_valid(total in 0u64..12, parts in 1usize..5) {
            let all: Vec<Vec<u64>> = compositions(total, parts).collect();
            prop_assert_eq!(all.len() as u64, binomial(total + parts as u64 - 1, parts as u64 - 1));
            for c in &all {
                prop_assert_eq!(c.len(), parts);
                prop_assert_eq!(c.iter().sum::<u64>(), total);
            }
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_subsets_match_brute_force(
            items in prop::collection::vec(1u64..20, 0..10),
            target in 1u64..60,
        ) {
            let found = subsets_summing_to(&items, target);
            let brute = (0u32..1 << items.len())
                .filter(|mask| {
                    (0..items.len())
                        .filter(|i| mask & (1 << i) != 0)
                        .map(|i| items[i])
                        .sum::<u64>()
                        == target
                })
                .count();
            prop_assert_eq!(found.len(), brute);
            for subset in &found {
                prop_assert_eq!(subset.iter().map(|&i| items[i]).sum::<u64>(), target);
            }
        }
    }
}
