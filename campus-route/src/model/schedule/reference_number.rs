//! normalization of course reference numbers (CRNs).
//!
//! spreadsheets hand back the same reference number as `12345`, `12345.0` or
//! `1.2345E4` depending on cell formatting. every reference number, whether parsed
//! from the schedule or typed in by a user, passes through [`normalize`] so that
//! lookups compare like with like.
use crate::model::parser::CellValue;

/// normalizes a reference-number cell. numeric cells are truncated to an integer;
/// text cells are trimmed. a trailing `.0`, `.00`, ... remnant is removed in both
/// cases. empty cells and non-finite numbers yield None.
pub fn normalize(cell: &CellValue) -> Option<String> {
    let text = match cell {
        CellValue::Empty => return None,
        CellValue::Number(n) if !n.is_finite() => {
            log::debug!("ignoring non-finite reference number {n}");
            return None;
        }
        CellValue::Number(n) => format!("{}", n.trunc() as i64),
        CellValue::Text(t) => t.trim().to_string(),
    };
    let stripped = strip_zero_fraction(&text);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// normalizes user-entered reference text with the same rules as schedule cells.
pub fn normalize_text(text: &str) -> Option<String> {
    normalize(&CellValue::Text(text.to_string()))
}

/// splits a user-entered list on commas, semicolons and whitespace, normalizes each
/// entry and drops blanks and repeats while keeping first-seen order.
pub fn parse_reference_list(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter_map(normalize_text)
        .filter(|reference| seen.insert(reference.clone()))
        .collect()
}

fn strip_zero_fraction(text: &str) -> &str {
    match text.rsplit_once('.') {
        Some((whole, fraction))
            if !whole.is_empty() && !fraction.is_empty() && fraction.chars().all(|c| c == '0') =>
        {
            whole
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_invariant() {
        let expected = Some(String::from("12345"));
        assert_eq!(normalize(&CellValue::Text("12345".into())), expected);
        assert_eq!(normalize(&CellValue::Number(12345.0)), expected);
        assert_eq!(normalize(&CellValue::Text("12345.0".into())), expected);
        assert_eq!(normalize(&CellValue::Text(" 12345.000 ".into())), expected);
        assert_eq!(normalize(&CellValue::Number(1.2345e4)), expected);
        assert_eq!(normalize_text("12345.0"), expected);
    }

    #[test]
    fn test_numeric_cells_truncate() {
        assert_eq!(
            normalize(&CellValue::Number(61234.9)),
            Some(String::from("61234"))
        );
    }

    #[test]
    fn test_idempotent() {
        for raw in ["12345", "12345.0", "ABC-1", "00123", "7.5"] {
            let once = normalize_text(raw).expect("non-blank reference");
            let twice = normalize_text(&once).expect("non-blank reference");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_text_keeps_non_zero_fraction_and_leading_zeros() {
        assert_eq!(normalize_text("7.5"), Some(String::from("7.5")));
        assert_eq!(normalize_text("00123"), Some(String::from("00123")));
    }

    #[test]
    fn test_blank_and_non_finite() {
        assert_eq!(normalize(&CellValue::Empty), None);
        assert_eq!(normalize(&CellValue::Text("   ".into())), None);
        assert_eq!(normalize(&CellValue::Number(f64::NAN)), None);
    }

    #[test]
    fn test_parse_reference_list() {
        let refs = parse_reference_list(" 61234, 61235.0;61236  61234 ,, ");
        assert_eq!(refs, vec!["61234", "61235", "61236"]);
        assert!(parse_reference_list(" , ").is_empty());
    }
}
