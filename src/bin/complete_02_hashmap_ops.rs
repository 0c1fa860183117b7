// Complete HashMap Operations Walkthrough
// Key-value storage with a mixed-type value enum

use colored::Colorize;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Mixed-type values
// =============================================================================

/// A profile field holds either text or a number. Cross-variant
/// comparison is always false.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Whether any stored value compares equal to `target`.
pub fn contains_value(map: &HashMap<String, FieldValue>, target: &FieldValue) -> bool {
    map.values().any(|value| value == target)
}

fn heading(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn main() {
    println!("{}", "=== HashMap Operations ===".bold().cyan());

    // Create
    let mut person: HashMap<String, FieldValue> = HashMap::new();
    person.insert("name".to_string(), FieldValue::text("Alice"));
    person.insert("age".to_string(), FieldValue::Number(30));

    heading("Access");
    println!("name: {:?}", person.get("name"));
    // Default when the key is missing
    let email = person
        .get("email")
        .cloned()
        .unwrap_or_else(|| FieldValue::text("Not Found!"));
    println!("email (with default): {}", email);

    heading("Modify");
    // insert on an existing key overwrites and returns the old value
    let previous = person.insert("age".to_string(), FieldValue::Number(31));
    println!("Overwrote age, previous: {:?}", previous);

    heading("Add");
    person.insert("email".to_string(), FieldValue::text("alice@example.com"));
    println!("After adding email: {} entries", person.len());

    heading("Insert If Absent");
    // entry API: only fills the slot when nothing is there yet
    person
        .entry("city".to_string())
        .or_insert_with(|| FieldValue::text("Oslo"));
    person
        .entry("name".to_string())
        .or_insert_with(|| FieldValue::text("overwritten?"));
    println!("city: {:?}", person.get("city")); // Oslo
    println!("name unchanged: {:?}", person.get("name")); // still Alice

    heading("Remove");
    person.remove("age");
    person.remove("city");
    println!("After removals: {} entries", person.len());

    heading("Check");
    if person.contains_key("email") {
        println!("{}", "yes, email key exists".green());
    }
    if contains_value(&person, &FieldValue::text("Alice")) {
        println!("{}", "yes, value \"Alice\" exists".green());
    }

    heading("Keys, Values, Entries");
    println!("keys: {:?}", person.keys().collect::<Vec<_>>());
    println!("values: {:?}", person.values().collect::<Vec<_>>());
    for (key, value) in &person {
        println!("  {}: {}", key, value);
    }

    heading("Build by Transformation");
    let squares: HashMap<i32, i32> = (0..5).map(|x| (x, x * x)).collect();
    let mut pairs: Vec<_> = squares.iter().collect();
    pairs.sort();
    println!("Squares: {:?}", pairs);

    heading("Insertion Order with IndexMap");
    // HashMap iteration order is arbitrary; IndexMap keeps insertion order
    let mut profile: IndexMap<&str, FieldValue> = IndexMap::new();
    profile.insert("name", FieldValue::text("Bob"));
    profile.insert("age", FieldValue::Number(25));
    profile.insert("email", FieldValue::text("bob@example.com"));
    for (key, value) in &profile {
        println!("  {}: {}", key, value);
    }

    heading("Update Scenario");
    let mut record: HashMap<String, FieldValue> = HashMap::new();
    record.insert("name".to_string(), FieldValue::text("john"));
    record.insert("age".to_string(), FieldValue::Number(32));
    record.insert("name".to_string(), FieldValue::text("John"));
    record.remove("age");
    println!("Final record: {:?}", record);
    println!(
        "{}",
        format!("exactly one entry left: {}", record.len() == 1).green()
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, FieldValue> {
        let mut map = HashMap::new();
        map.insert("name".to_string(), FieldValue::text("Alice"));
        map.insert("age".to_string(), FieldValue::Number(30));
        map
    }

    #[test]
    fn test_get_present_and_missing() {
        let map = sample();
        assert_eq!(map.get("name"), Some(&FieldValue::text("Alice")));
        assert_eq!(map.get("email"), None);
    }

    #[test]
    fn test_get_with_default() {
        let map = sample();
        let email = map
            .get("email")
            .cloned()
            .unwrap_or_else(|| FieldValue::text("Not Found!"));
        assert_eq!(email, FieldValue::text("Not Found!"));
    }

    #[test]
    fn test_overwrite_returns_previous() {
        let mut map = sample();
        let previous = map.insert("age".to_string(), FieldValue::Number(31));
        assert_eq!(previous, Some(FieldValue::Number(30)));
        assert_eq!(map.get("age"), Some(&FieldValue::Number(31)));
    }

    #[test]
    fn test_entry_only_fills_empty_slot() {
        let mut map = sample();
        map.entry("city".to_string())
            .or_insert_with(|| FieldValue::text("Oslo"));
        map.entry("name".to_string())
            .or_insert_with(|| FieldValue::text("other"));
        assert_eq!(map.get("city"), Some(&FieldValue::text("Oslo")));
        assert_eq!(map.get("name"), Some(&FieldValue::text("Alice")));
    }

    #[test]
    fn test_remove() {
        let mut map = sample();
        assert_eq!(map.remove("age"), Some(FieldValue::Number(30)));
        assert_eq!(map.remove("age"), None);
        assert!(!map.contains_key("age"));
    }

    #[test]
    fn test_contains_value() {
        let map = sample();
        assert!(contains_value(&map, &FieldValue::text("Alice")));
        assert!(contains_value(&map, &FieldValue::Number(30)));
        assert!(!contains_value(&map, &FieldValue::text("Bob")));
    }

    #[test]
    fn test_cross_variant_never_equal() {
        // Text("30") and Number(30) are different kinds of value
        assert_ne!(FieldValue::text("30"), FieldValue::Number(30));
    }

    #[test]
    fn test_update_scenario() {
        let mut record: HashMap<String, FieldValue> = HashMap::new();
        record.insert("name".to_string(), FieldValue::text("john"));
        record.insert("age".to_string(), FieldValue::Number(32));
        record.insert("name".to_string(), FieldValue::text("John"));
        record.remove("age");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&FieldValue::text("John")));
    }

    #[test]
    fn test_squares_map() {
        let squares: HashMap<i32, i32> = (0..5).map(|x| (x, x * x)).collect();
        assert_eq!(squares.len(), 5);
        assert_eq!(squares.get(&3), Some(&9));
        assert_eq!(squares.get(&0), Some(&0));
    }

    #[test]
    fn test_indexmap_keeps_insertion_order() {
        let mut profile: IndexMap<&str, FieldValue> = IndexMap::new();
        profile.insert("name", FieldValue::text("Bob"));
        profile.insert("age", FieldValue::Number(25));
        profile.insert("email", FieldValue::text("bob@example.com"));

        let keys: Vec<_> = profile.keys().copied().collect();
        assert_eq!(keys, vec!["name", "age", "email"]);
    }
}
