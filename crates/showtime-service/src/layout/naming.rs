//! Row labels derived from the layout's naming scheme.

/// Label for the `index`-th seat-bearing row (zero based).
pub fn row_label(index: usize, row_naming: &str, custom_names: &[String]) -> String {
    match row_naming {
        "numeric" => (index + 1).to_string(),
        "custom" => custom_names
            .get(index)
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| alphabetic(index)),
        _ => alphabetic(index),
    }
}

/// `A`..`Z`, then `AA`, `AB`, ...
pub fn alphabetic(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}
