// Complete Iterator Pipelines Walkthrough
// Lazy combinators: filter, map, fold, search, dedup, ordering, aggregation

use colored::Colorize;
use itertools::Itertools;
use std::collections::HashSet;

// =============================================================================
// Pipeline helpers
// =============================================================================

/// Arithmetic mean, or None for an empty slice.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}

/// Keep the even numbers and double them.
pub fn evens_doubled(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .filter(|n| *n % 2 == 0)
        .map(|n| n * 2)
        .collect()
}

/// Square the odd numbers and keep squares above `floor`, sorted.
pub fn odd_squares_over(values: &[i64], floor: i64) -> Vec<i64> {
    values
        .iter()
        .filter(|n| *n % 2 == 1)
        .map(|n| n * n)
        .filter(|square| *square > floor)
        .sorted()
        .collect()
}

fn heading(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn main() {
    println!("{}", "=== Iterator Pipelines ===".bold().cyan());

    let numbers: Vec<i64> = (1..=10).collect();
    let names = vec!["Alice", "Bob", "Charlie", "David", "Eve"];

    heading("Filter");
    let evens: Vec<i64> = numbers.iter().filter(|n| *n % 2 == 0).copied().collect();
    println!("Even numbers: {:?}", evens); // [2, 4, 6, 8, 10]

    heading("Map");
    let doubled: Vec<i64> = numbers.iter().map(|n| n * 2).collect();
    println!("Doubled: {:?}", doubled);
    let upper_names: Vec<String> = names.iter().map(|name| name.to_uppercase()).collect();
    println!("Upper names: {:?}", upper_names);
    println!("Evens doubled: {:?}", evens_doubled(&numbers)); // [4, 8, 12, 16, 20]

    heading("For Each");
    print!("Names: ");
    names.iter().for_each(|name| print!("{} ", name));
    println!();

    heading("Fold");
    let sum = numbers.iter().fold(0, |acc, n| acc + n);
    println!("Sum: {}", sum); // 55
    let max_by_fold = numbers.iter().fold(i64::MIN, |acc, n| acc.max(*n));
    println!("Max via fold: {}", max_by_fold); // 10

    heading("Count");
    let over_five = numbers.iter().filter(|n| **n > 5).count();
    println!("Numbers > 5: {}", over_five); // 5

    heading("Match Predicates");
    println!("any even: {}", numbers.iter().any(|n| n % 2 == 0)); // true
    println!("all positive: {}", numbers.iter().all(|n| *n > 0)); // true
    println!("none negative: {}", !numbers.iter().any(|n| *n < 0)); // true

    heading("Find");
    let first_over_five = numbers.iter().find(|n| **n > 5);
    println!("First > 5: {:?}", first_over_five); // Some(6)
    let a_name = names.iter().find(|name| name.starts_with('A'));
    println!("Name starting with A: {:?}", a_name); // Some("Alice")
    println!(
        "Position of 7: {:?}",
        numbers.iter().position(|n| *n == 7)
    ); // Some(6)

    heading("Distinct");
    let with_duplicates = vec![1, 2, 2, 3, 3, 3, 4, 4, 5];
    let unique: Vec<i64> = with_duplicates.iter().copied().unique().collect();
    println!("Unique: {:?}", unique); // [1, 2, 3, 4, 5]

    heading("Sorted");
    let shuffled = vec!["Eve", "Charlie", "Alice", "David", "Bob"];
    let sorted_names: Vec<&str> = shuffled.iter().copied().sorted().collect();
    println!("Sorted names: {:?}", sorted_names);
    let by_length: Vec<&str> = names.iter().copied().sorted_by_key(|name| name.len()).collect();
    println!("Sorted by length: {:?}", by_length); // [Bob, Eve, Alice, David, Charlie]

    heading("Limit and Skip");
    let first_three: Vec<i64> = numbers.iter().copied().take(3).collect();
    println!("First 3: {:?}", first_three); // [1, 2, 3]
    let after_three: Vec<i64> = numbers.iter().copied().skip(3).collect();
    println!("After skipping 3: {:?}", after_three); // [4..10]

    heading("Chained Pipeline");
    // odd numbers -> squared -> keep > 10 -> sorted
    let complex = odd_squares_over(&numbers, 10);
    println!("Odd squares > 10: {:?}", complex); // [25, 49, 81]

    heading("Aggregation");
    println!("max: {:?}", numbers.iter().max()); // Some(10)
    println!("min: {:?}", numbers.iter().min()); // Some(1)
    println!("sum: {}", numbers.iter().sum::<i64>()); // 55
    println!("mean: {:?}", mean(&numbers)); // Some(5.5)

    heading("Partition");
    let (evens, odds): (Vec<i64>, Vec<i64>) = numbers.iter().partition(|n| *n % 2 == 0);
    println!("Even: {:?}", evens);
    println!("Odd: {:?}", odds);

    heading("Collect Into a Set");
    let number_set: HashSet<i64> = with_duplicates.iter().copied().collect();
    println!("Set size from {} items: {}", with_duplicates.len(), number_set.len());
    println!(
        "{}",
        format!("joined unique: {}", unique.iter().join(", ")).green()
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
        assert_eq!(mean(&[7]), Some(7.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_evens_doubled() {
        assert_eq!(evens_doubled(&[1, 2, 3, 4, 5]), vec![4, 8]);
        assert_eq!(evens_doubled(&[1, 3, 5]), Vec::<i64>::new());
    }

    #[test]
    fn test_odd_squares_over() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(odd_squares_over(&numbers, 10), vec![25, 49, 81]);
        assert_eq!(odd_squares_over(&numbers, 100), Vec::<i64>::new());
    }

    #[test]
    fn test_filter_and_count() {
        let numbers: Vec<i64> = (1..=10).collect();
        let evens: Vec<i64> = numbers.iter().filter(|n| *n % 2 == 0).copied().collect();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
        assert_eq!(numbers.iter().filter(|n| **n > 5).count(), 5);
    }

    #[test]
    fn test_fold_matches_sum() {
        let numbers: Vec<i64> = (1..=10).collect();
        let folded = numbers.iter().fold(0, |acc, n| acc + n);
        assert_eq!(folded, numbers.iter().sum::<i64>());
        assert_eq!(folded, 55);
    }

    #[test]
    fn test_match_predicates() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert!(numbers.iter().any(|n| n % 2 == 0));
        assert!(numbers.iter().all(|n| *n > 0));
        assert!(!numbers.iter().any(|n| *n < 0));
    }

    #[test]
    fn test_find_and_position() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(numbers.iter().find(|n| **n > 5), Some(&6));
        assert_eq!(numbers.iter().position(|n| *n == 7), Some(6));
        assert_eq!(numbers.iter().find(|n| **n > 100), None);
    }

    #[test]
    fn test_unique_preserves_first_occurrence_order() {
        let unique: Vec<i64> = [3, 1, 3, 2, 1].iter().copied().unique().collect();
        assert_eq!(unique, vec![3, 1, 2]);
    }

    #[test]
    fn test_sorted_by_key_is_stable() {
        let names = ["Alice", "Bob", "Charlie", "David", "Eve"];
        let by_length: Vec<&str> = names.iter().copied().sorted_by_key(|n| n.len()).collect();
        assert_eq!(by_length, vec!["Bob", "Eve", "Alice", "David", "Charlie"]);
    }

    #[test]
    fn test_take_and_skip() {
        let numbers: Vec<i64> = (1..=10).collect();
        let first: Vec<i64> = numbers.iter().copied().take(3).collect();
        let rest: Vec<i64> = numbers.iter().copied().skip(3).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(rest, vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_partition() {
        let numbers: Vec<i64> = (1..=10).collect();
        let (evens, odds): (Vec<i64>, Vec<i64>) = numbers.iter().partition(|n| *n % 2 == 0);
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
        assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_collect_into_set_drops_duplicates() {
        let set: HashSet<i64> = [1, 2, 2, 3, 3, 3].iter().copied().collect();
        assert_eq!(set.len(), 3);
    }
}
