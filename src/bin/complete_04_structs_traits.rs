// Complete Structs and Traits Walkthrough
// Constructors, accessors, trait polymorphism, and Display rendering

use colored::Colorize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// A record with a constructor and accessors
// =============================================================================

#[derive(Debug)]
pub struct Dog {
    name: String,
    age: u32,
}

impl Dog {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

// =============================================================================
// Polymorphism through a trait with a provided method
// =============================================================================

pub trait Speak {
    fn name(&self) -> &str;

    /// Sound used when the caller doesn't supply one.
    fn fallback_sound(&self) -> &str {
        "woof"
    }

    fn speak(&self, sound: Option<&str>) -> String {
        format!("{} says {}", self.name(), sound.unwrap_or(self.fallback_sound()))
    }
}

impl Speak for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A young dog shares the grown-up behavior but yips by default.
#[derive(Debug)]
pub struct Puppy {
    dog: Dog,
}

impl Puppy {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            dog: Dog::new(name, age),
        }
    }
}

impl Speak for Puppy {
    fn name(&self) -> &str {
        self.dog.name()
    }

    fn fallback_sound(&self) -> &str {
        "yip"
    }
}

// =============================================================================
// Constructed-instance counting
// =============================================================================

static COUNTERS_CREATED: AtomicUsize = AtomicUsize::new(0);

pub struct Counter;

impl Counter {
    pub fn new() -> Self {
        COUNTERS_CREATED.fetch_add(1, Ordering::Relaxed);
        Self
    }

    pub fn created() -> usize {
        COUNTERS_CREATED.load(Ordering::Relaxed)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Human-readable rendering
// =============================================================================

pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({})", self.name)
    }
}

fn main() {
    println!("{}", "=== Structs and Traits ===".bold().cyan());

    let fido = Dog::new("Fido", 5);
    println!("Name: {}", fido.name()); // Fido
    println!("Age: {}", fido.age()); // 5
    println!("{}", fido.speak(Some("woof"))); // Fido says woof

    println!("\n{}", "=== Trait Polymorphism ===".bold().cyan());
    let rex = Puppy::new("Rex", 1);
    println!("{}", rex.speak(Some("yip"))); // Rex says yip
    println!("{}", rex.speak(None)); // Rex says yip (fallback)
    println!("{}", fido.speak(None)); // Fido says woof (fallback)

    // The same call works through a trait object
    let animals: Vec<Box<dyn Speak>> = vec![Box::new(Dog::new("Bella", 3)), Box::new(Puppy::new("Milo", 1))];
    for animal in &animals {
        println!("{}", animal.speak(None));
    }

    println!("\n{}", "=== Instance Counting ===".bold().cyan());
    let _c1 = Counter::new();
    let _c2 = Counter::new();
    println!("Counters created: {}", Counter::created()); // 2

    println!("\n{}", "=== Display Rendering ===".bold().cyan());
    let person = Person::new("Nick");
    println!("{}", person); // Person(Nick)
    println!("{}", "done".green());
}

// =============================================================================
// Tests
// =============================================================================
