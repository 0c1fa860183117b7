// Complete String Operations Walkthrough
// Owned vs borrowed strings, searching, slicing, and in-place editing

use colored::Colorize;
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Helpers
// =============================================================================

/// Uppercase the first grapheme, lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + &graphemes.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Reverse by grapheme cluster so combined characters stay intact.
pub fn reverse(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// Count non-overlapping occurrences of `target`. An empty needle
/// matches nothing.
pub fn count_occurrences(text: &str, target: &str) -> usize {
    if target.is_empty() {
        return 0;
    }
    text.matches(target).count()
}

/// Concatenate `count` copies of `text`.
pub fn repeat_string(text: &str, count: usize) -> String {
    std::iter::repeat(text).take(count).collect()
}

/// True when the string is non-empty and every char is an ASCII digit.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// True when the string is non-empty and every char is alphabetic.
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// True when the string is non-empty and every char is alphanumeric.
pub fn is_alnum(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

fn heading(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn main() {
    println!("{}", "=== String Operations ===".bold().cyan());

    // Concatenation
    let text = String::from("Hello ") + "World";
    let name = "Alice";
    let message = format!("Hello {}!", name);
    println!("Concatenated: {}", text);
    println!("Formatted: {}", message);

    heading("Case");
    println!("upper: {}", text.to_uppercase()); // HELLO WORLD
    println!("lower: {}", text.to_lowercase()); // hello world
    println!("capitalize: {}", capitalize(&text)); // Hello world

    heading("Searching");
    println!("find(\"World\"): {:?}", text.find("World")); // Some(6)
    println!("find(\"Python\"): {:?}", text.find("Python")); // None

    heading("Replacement");
    println!("replace World->Rust: {}", text.replace("World", "Rust"));
    println!("replace all l->L: {}", text.replace('l', "L")); // HeLLo WorLd
    println!("replace first l->L: {}", text.replacen('l', "L", 1)); // HeLlo World

    heading("Split and Join");
    let words: Vec<&str> = text.split(' ').collect();
    println!("split: {:?}", words); // ["Hello", "World"]
    let rejoined = words.join(" ");
    println!("rejoined: {}", rejoined);
    println!(
        "{}",
        format!("round-trips: {}", rejoined == text).green()
    );
    let csv_data = "apple,banana,cherry";
    let fruits: Vec<&str> = csv_data.split(',').collect();
    println!("csv split: {:?}", fruits);

    heading("Trim");
    let spaced = "  Hello World  ";
    println!("trimmed: {:?}", spaced.trim());

    heading("Slicing");
    println!("text[0..5]: {}", &text[0..5]); // Hello
    println!("text[6..]: {}", &text[6..]); // World
    println!("last 5 bytes: {}", &text[text.len() - 5..]); // World
    println!("reverse: {}", reverse(&text)); // dlroW olleH

    heading("Length and Membership");
    println!("len: {}", text.len()); // 11
    println!("contains \"World\": {}", text.contains("World")); // true
    println!("contains \"Python\": {}", !text.contains("Python")); // true

    heading("Formatting Multiple Values");
    let person_name = "Bob";
    let person_age = 30;
    println!("{}", format!("Name: {}, Age: {}", person_name, person_age));

    heading("Emptiness");
    let empty = "";
    println!("len == 0: {}", empty.len() == 0); // true
    println!("is_empty: {}", empty.is_empty()); // true

    heading("First Character");
    println!("first char: {:?}", text.chars().next()); // Some('H')

    heading("Builder-Style Editing");
    // An owned String is the incremental builder; edits happen in place
    let mut builder = String::new();
    builder.push_str("Hello");
    builder.push(' ');
    builder.push_str("World");
    println!("Built: {}", builder); // Hello World

    let mut line = String::from("Rust Programming");
    println!("Original: {}", line);

    line.push_str(" Language"); // append
    println!("After push_str: {}", line); // Rust Programming Language

    line.insert_str(5, "Systems "); // insert at byte offset
    println!("After insert_str: {}", line); // Rust Systems Programming Language

    line.replace_range(5..13, ""); // delete a range
    println!("After delete: {}", line); // Rust Programming Language

    line.pop(); // drop the last char
    println!("After pop: {}", line); // Rust Programming Languag

    // Replace a substring via its located range
    if let Some(start) = line.find("Programming") {
        line.replace_range(start..start + "Programming".len(), "Coding");
    }
    println!("After replace: {}", line); // Rust Coding Languag

    println!("Reversed: {}", reverse(&line)); // gaugnaL gnidoC tsuR

    line.replace_range(0..1, "r"); // swap a single char
    println!("After replace_range(0..1): {}", line); // rust Coding Languag

    line.truncate(4);
    println!("After truncate(4): {}", line); // rust

    heading("Repeat");
    println!("repeat_string(\"ab\", 3): {}", repeat_string("ab", 3)); // ababab

    heading("Character Classes");
    for sample in ["12345", "abcDEF", "abc123", "abc 123"] {
        println!(
            "  {:9} digits:{:5} alpha:{:5} alnum:{}",
            format!("{:?}", sample),
            is_digits(sample),
            is_alpha(sample),
            is_alnum(sample)
        );
    }

    heading("Count Occurrences");
    println!(
        "\"l\" in \"{}\": {}",
        text,
        count_occurrences(&text, "l")
    ); // 3
}

// =============================================================================
// Tests
// =============================================================================
