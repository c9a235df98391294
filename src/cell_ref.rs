//! Column labels, cell keys and Excel-style cell references.

use crate::error::{GridError, Result};
use crate::types::CellInterface;

/// Convert a 0-indexed column number to its label: 0 → "A", 25 → "Z", 26 → "AA".
pub fn number_to_alphabet(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index;
    loop {
        // n % 26 < 26, so the byte stays within 'A'..='Z'
        let letter = b'A' + u8::try_from(n % 26).unwrap_or(0);
        label.push(letter);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Inverse of [`number_to_alphabet`]. Case-insensitive; `None` for empty or
/// non-alphabetic input.
pub fn alphabet_to_number(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut col: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let upper = ch.to_ascii_uppercase();
        let digit = (upper as usize) - ('A' as usize) + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }
    Some(col - 1)
}

/// Parse a cell reference like "B3" (or "$B$3") into a 0-indexed cell.
pub fn parse_cell_ref(cell_ref: &str) -> Result<CellInterface> {
    let trimmed = cell_ref.trim();
    let cleaned: String = trimmed.chars().filter(|ch| *ch != '$').collect();
    let split = cleaned
        .find(|ch: char| ch.is_ascii_digit())
        .ok_or_else(|| GridError::CellRef(trimmed.to_string()))?;
    let (letters, digits) = cleaned.split_at(split);

    let column_index =
        alphabet_to_number(letters).ok_or_else(|| GridError::CellRef(trimmed.to_string()))?;
    let row: usize = digits
        .parse()
        .map_err(|_| GridError::CellRef(trimmed.to_string()))?;
    let row_index = row
        .checked_sub(1)
        .ok_or_else(|| GridError::CellRef(trimmed.to_string()))?;

    Ok(CellInterface::new(row_index, column_index))
}

/// Format a cell as an Excel-style reference ("A1")
pub fn format_cell_ref(cell: CellInterface) -> String {
    format!("{}{}", number_to_alphabet(cell.column_index), cell.row_index + 1)
}

/// Stable render key for a cell: `"row:col"`
pub fn item_key(cell: CellInterface) -> String {
    format!("{}:{}", cell.row_index, cell.column_index)
}

/// Set identifier for a cell: `"row,col"`
pub fn cell_identifier(row_index: usize, column_index: usize) -> String {
    format!("{row_index},{column_index}")
}

/// True for a missing or empty cell value
pub fn is_null(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_alphabet() {
        assert_eq!(number_to_alphabet(0), "A");
        assert_eq!(number_to_alphabet(25), "Z");
        assert_eq!(number_to_alphabet(26), "AA");
        assert_eq!(number_to_alphabet(27), "AB");
        assert_eq!(number_to_alphabet(701), "ZZ");
        assert_eq!(number_to_alphabet(702), "AAA");
    }

    #[test]
    fn test_alphabet_to_number() {
        assert_eq!(alphabet_to_number("A"), Some(0));
        assert_eq!(alphabet_to_number("z"), Some(25));
        assert_eq!(alphabet_to_number("AA"), Some(26));
        assert_eq!(alphabet_to_number("AAA"), Some(702));
        assert_eq!(alphabet_to_number(""), None);
        assert_eq!(alphabet_to_number("A1"), None);
    }

    #[test]
    fn test_label_round_trip_near_boundaries() {
        for n in [0, 25, 26, 51, 52, 675, 676, 701, 702, 18_277] {
            assert_eq!(alphabet_to_number(&number_to_alphabet(n)), Some(n));
        }
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1").unwrap(), CellInterface::new(0, 0));
        assert_eq!(parse_cell_ref("B3").unwrap(), CellInterface::new(2, 1));
        assert_eq!(parse_cell_ref("$AA$10").unwrap(), CellInterface::new(9, 26));
    }

    #[test]
    fn test_parse_cell_ref_rejects_garbage() {
        assert!(parse_cell_ref("").is_err());
        assert!(parse_cell_ref("A").is_err());
        assert!(parse_cell_ref("12").is_err());
        assert!(parse_cell_ref("A0").is_err());
        assert!(parse_cell_ref("A1B").is_err());
    }

    #[test]
    fn test_keys() {
        let cell = CellInterface::new(4, 2);
        assert_eq!(item_key(cell), "4:2");
        assert_eq!(cell_identifier(4, 2), "4,2");
        assert_eq!(format_cell_ref(cell), "C5");
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(None));
        assert!(is_null(Some("")));
        assert!(!is_null(Some("0")));
    }
}
