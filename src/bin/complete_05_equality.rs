// Complete Equality and Hashing Walkthrough
// Identity comparison vs content comparison, and the equals/hash contract

use colored::Colorize;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use thiserror::Error;

// =============================================================================
// Identity-compared record
// =============================================================================

/// A record with no equality opt-in. Comparison means pointer identity
/// (`std::ptr::eq` / `Rc::ptr_eq`); two instances with identical fields
/// are distinct values.
#[derive(Debug)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

// =============================================================================
// Content-compared record
// =============================================================================

/// The same record shape with the equality capability opted in:
/// PartialEq + Eq + Hash as an explicit pair, so the type is usable as a
/// HashMap/HashSet key.
#[derive(Debug, Clone)]
pub struct CatalogedBook {
    pub title: String,
    pub author: String,
}

impl CatalogedBook {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    /// Deterministic content fingerprint: fold per-field hashes with a
    /// small seed and prime multiplier. Any combiner works as long as
    /// equal records produce equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut result: u64 = 17;
        for field_hash in [hash_one(&self.title), hash_one(&self.author)] {
            result = result.wrapping_mul(31).wrapping_add(field_hash);
        }
        result
    }
}

impl PartialEq for CatalogedBook {
    fn eq(&self, other: &Self) -> bool {
        // Identity short-circuit: same allocation is trivially equal
        if std::ptr::eq(self, other) {
            return true;
        }
        // Field-by-field content comparison; strings compare by content
        self.title == other.title && self.author == other.author
    }
}

impl Eq for CatalogedBook {}

impl Hash for CatalogedBook {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Every field that participates in eq() must feed the hasher,
        // so equal records hash equal under any hasher
        self.title.hash(state);
        self.author.hash(state);
    }
}

/// Content comparison with a possibly-absent right-hand side: absent is
/// simply not equal, never a fault.
pub fn content_equals(book: &CatalogedBook, other: Option<&CatalogedBook>) -> bool {
    match other {
        Some(other) => book == other,
        None => false,
    }
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Mixed-type values: different kinds never compare equal
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

// =============================================================================
// Lookup through an absent reference is a reported fault
// =============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum LookupError {
    #[error("no book registered under id {0}")]
    MissingBook(u32),
}

#[derive(Default)]
pub struct Shelf {
    books: HashMap<u32, CatalogedBook>,
}

impl Shelf {
    pub fn add(&mut self, id: u32, book: CatalogedBook) {
        self.books.insert(id, book);
    }

    /// Describe the book registered under `id`. Looking up an id nobody
    /// registered is the caller's defect; it surfaces as an error rather
    /// than a crash.
    pub fn describe(&self, id: u32) -> Result<String, LookupError> {
        let book = self.books.get(&id).ok_or(LookupError::MissingBook(id))?;
        Ok(format!("{} by {}", book.title, book.author))
    }
}

fn heading(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn main() {
    println!("{}", "=== Equality vs Identity ===".bold().cyan());

    heading("Identity Comparison");
    let book1 = Rc::new(Book::new("1984", "Orwell"));
    let book2 = Rc::new(Book::new("1984", "Orwell"));
    let book3 = Rc::clone(&book1); // another handle to the same instance

    println!("book1 same instance as book2: {}", Rc::ptr_eq(&book1, &book2)); // false
    println!("book1 same instance as book3: {}", Rc::ptr_eq(&book1, &book3)); // true
    // Book deliberately has no PartialEq: with identical fields the two
    // instances are still distinct, and `book1 == book2` would not compile

    heading("Content Comparison");
    let entry1 = CatalogedBook::new("1984", "Orwell");
    let entry2 = CatalogedBook::new("1984", "Orwell");
    let entry3 = CatalogedBook::new("Brave New World", "Huxley");

    println!("same instance: {}", std::ptr::eq(&entry1, &entry2)); // false
    println!("entry1 == entry2: {}", entry1 == entry2); // true, same content
    println!("entry1 == entry3: {}", entry1 == entry3); // false
    let same = &entry1;
    println!("entry1 == entry1: {}", entry1 == *same); // true, reflexive

    heading("Strings Compare by Content");
    let s1 = String::from("hello");
    let s2 = String::from("hello");
    println!("same buffer: {}", s1.as_ptr() == s2.as_ptr()); // false
    println!("s1 == s2: {}", s1 == s2); // true

    heading("Absent Values");
    let nothing: Option<&CatalogedBook> = None;
    println!(
        "content_equals(entry1, None): {}",
        content_equals(&entry1, nothing)
    ); // false, no fault
    println!(
        "content_equals(entry1, Some(entry2)): {}",
        content_equals(&entry1, Some(&entry2))
    ); // true

    heading("Different Kinds of Value");
    let text = FieldValue::Text("32".to_string());
    let number = FieldValue::Number(32);
    println!("Text(\"32\") == Number(32): {}", text == number); // false

    heading("Hash Consistency");
    println!("fingerprint(entry1): {:#018x}", entry1.fingerprint());
    println!("fingerprint(entry2): {:#018x}", entry2.fingerprint());
    println!("fingerprint(entry3): {:#018x}", entry3.fingerprint());
    let consistent = entry1.fingerprint() == entry2.fingerprint();
    println!(
        "{}",
        format!("equal content gives equal fingerprints: {}", consistent).green()
    );
    println!(
        "hash(entry1) == hash(entry2): {}",
        hash_one(&entry1) == hash_one(&entry2)
    ); // true

    heading("Equal Keys Collapse in Collections");
    let mut shelf_set: HashSet<CatalogedBook> = HashSet::new();
    shelf_set.insert(entry1.clone());
    shelf_set.insert(entry2.clone()); // equal to entry1, no new entry
    shelf_set.insert(entry3.clone());
    println!("Inserted 3 books, set holds {}", shelf_set.len()); // 2

    let mut loans: HashMap<CatalogedBook, &str> = HashMap::new();
    loans.insert(entry1.clone(), "Alice");
    loans.insert(entry2.clone(), "Bob"); // overwrites Alice's loan
    println!("Loan for entry1: {:?}", loans.get(&entry1)); // Some("Bob")

    heading("Absent Receiver Fault");
    let mut shelf = Shelf::default();
    shelf.add(1, entry1.clone());
    match shelf.describe(1) {
        Ok(line) => println!("{}", line.green()),
        Err(err) => println!("{}", format!("fault: {}", err).red()),
    }
    // Id 42 was never registered; the fault is caught and reported
    match shelf.describe(42) {
        Ok(line) => println!("{}", line.green()),
        Err(err) => println!("{}", format!("fault: {}", err).red()),
    }
}

// =============================================================================
// Tests
// =============================================================================
