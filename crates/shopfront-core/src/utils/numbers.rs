//! List helpers over integer slices.

pub fn filter_even(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn filter_odd(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 != 0).collect()
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn calculate_average(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().map(|&n| n as f64).sum::<f64>() / numbers.len() as f64
}

pub fn find_max(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().max()
}

pub fn find_min(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().min()
}

pub fn sort_descending(numbers: &[i64]) -> Vec<i64> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
