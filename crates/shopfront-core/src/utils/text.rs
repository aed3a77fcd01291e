//! String helpers.

use std::collections::BTreeMap;

/// Reverses by Unicode scalar value.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Case-insensitive palindrome check that ignores spaces.
///
/// ```rust
/// use shopfront_core::utils::text::is_palindrome;
///
/// assert!(is_palindrome("Never odd or even"));
/// assert!(!is_palindrome("shopfront"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Counts ASCII vowels, either case.
pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|c| "aeiouAEIOU".contains(*c)).count()
}

/// Word counts of lowercased, whitespace-separated words with surrounding
/// `.,!?;:` stripped. Words that are only punctuation are dropped.
pub fn word_frequency(text: &str) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();

    for word in text.to_lowercase().split_whitespace() {
        let word = word.trim_matches(|c| ".,!?;:".contains(c));
        if !word.is_empty() {
            *frequency.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    frequency
}

/// Formats an amount as `"{currency} 1,234.57"`: two decimals, comma
/// thousands separators.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{} {}{}.{}", currency, sign, grouped, frac)
}
