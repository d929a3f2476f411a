//! Code length limiting.
//!
//! [`limit_lengths`] repairs a length histogram whose longest code exceeds
//! a limit. It is a heuristic: each step trades two codes of the longest
//! length for one code one level up, and pays for the freed code space by
//! pushing one shorter code two levels down. The Kraft sum and the symbol
//! count are unchanged by every step. The result is valid but not the
//! optimal length-limited code for the original weights.
//!
//! Given histogram `[1, 1, 1, 1, 1, 2]` (a Fibonacci chain of seven
//! symbols) and limit 4, the steps are:
//!
//! ```text
//! [1, 1, 1, 1, 1, 2]
//! [1, 1, 1, 0, 4]       top -2, len-2 +1, key=3 -1, key+1 +2
//! [1, 1, 0, 3, 2]       key=2
//! [1, 0, 2, 4, 0]       key=1
//! [1, 0, 2, 4]          empty top bucket dropped
//! ```

use crate::tree::CodeLengths;
use huffbit_core::error::{HuffbitError, Result};
use tracing::{trace, warn};

/// Repair `population` in place so that no bucket past `limit` is
/// populated.
///
/// `population[i]` is the number of symbols of length `i + 1`. Trailing
/// empty buckets are removed. On failure `population` is left partially
/// repaired and must be discarded.
///
/// # Errors
///
/// [`HuffbitError::LimitTooSmall`] when no further repair step is
/// possible, which means `limit` is too short for the number of symbols.
pub fn limit_lengths(population: &mut Vec<usize>, limit: usize) -> Result<()> {
    let symbols: usize = population.iter().sum();
    let infeasible = || {
        warn!(limit, symbols, "code length limit is infeasible");
        HuffbitError::limit_too_small(limit, symbols)
    };

    while population.len() > limit {
        let size = population.len();
        if population[size - 1] == 0 {
            population.pop();
            continue;
        }
        if size < 3 {
            return Err(infeasible());
        }

        let mut key = size - 3;
        while population[key] == 0 {
            if key == 0 {
                return Err(infeasible());
            }
            key -= 1;
        }

        population[size - 1] = population[size - 1]
            .checked_sub(2)
            .ok_or_else(infeasible)?;
        population[size - 2] += 1;
        population[key + 1] += 2;
        population[key] -= 1;
        trace!(key, ?population, "length limit step");
    }

    Ok(())
}

/// Reassign lengths after the histogram has been repaired.
///
/// Symbols keep their relative order from `lengths.pairs` (ascending by
/// original length, then symbol) and are dealt into the repaired buckets
/// from shortest to longest. Each band is then sorted by symbol. The
/// returned lists are indexed by `length - 1`.
pub(crate) fn distribute(lengths: &CodeLengths, population: &[usize]) -> Vec<Vec<i32>> {
    let mut lists: Vec<Vec<i32>> = population.iter().map(|&n| Vec::with_capacity(n)).collect();
    let mut band = 0;
    for &(_, symbol) in &lengths.pairs {
        while band < lists.len() && lists[band].len() == population[band] {
            band += 1;
        }
        debug_assert!(band < lists.len(), "population smaller than symbol count");
        lists[band].push(symbol);
    }
    for list in &mut lists {
        list.sort_unstable();
    }
    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit_unchanged() {
        let mut population = vec![1, 1, 2];
        limit_lengths(&mut population, 3).unwrap();
        assert_eq!(population, vec![1, 1, 2]);

        limit_lengths(&mut population, 10).unwrap();
        assert_eq!(population, vec![1, 1, 2]);
    }

    #[test]
    fn test_fibonacci_chain_limited() {
        let mut population = vec![1, 1, 1, 1, 1, 2];
        limit_lengths(&mut population, 4).unwrap();
        assert_eq!(population, vec![1, 0, 2, 4]);
        assert_eq!(population.iter().sum::<usize>(), 7);
    }

    #[test]
    fn test_kraft_sum_preserved() {
        let mut population = vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
        limit_lengths(&mut population, 5).unwrap();
        assert!(population.len() <= 5);
        let kraft: u64 = population
            .iter()
            .enumerate()
            .map(|(i, &n)| (n as u64) << (population.len() - 1 - i))
            .sum();
        assert_eq!(kraft, 1 << population.len());
        assert_eq!(population.iter().sum::<usize>(), 11);
    }

    #[test]
    fn test_trailing_empty_buckets_dropped() {
        let mut population = vec![0, 4, 0, 0];
        limit_lengths(&mut population, 2).unwrap();
        assert_eq!(population, vec![0, 4]);
    }

    #[test]
    fn test_infeasible_limit() {
        // Four symbols cannot fit in one-bit codes
        let mut population = vec![0, 4];
        assert!(matches!(
            limit_lengths(&mut population, 1),
            Err(HuffbitError::LimitTooSmall {
                limit: 1,
                symbols: 4
            })
        ));

        // Five symbols cannot fit in two-bit codes
        let mut population = vec![1, 1, 1, 2];
        assert!(matches!(
            limit_lengths(&mut population, 2),
            Err(HuffbitError::LimitTooSmall { .. })
        ));
    }

    #[test]
    fn test_odd_top_bucket_rejected() {
        let mut population = vec![1, 0, 1];
        assert!(limit_lengths(&mut population, 2).is_err());
    }

    #[test]
    fn test_distribute_sorts_bands() {
        let lengths = CodeLengths {
            pairs: vec![(1, 6), (2, 5), (3, 4), (4, 3), (5, 2), (6, 0), (6, 1)],
            population: vec![1, 1, 1, 1, 1, 2],
        };
        let lists = distribute(&lengths, &[1, 0, 2, 4]);
        assert_eq!(lists, vec![vec![6], vec![], vec![4, 5], vec![0, 1, 2, 3]]);
    }
}
