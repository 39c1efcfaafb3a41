use crate::ranges::{IdRange, RangeError, digit_count, parse_ranges};

#[test]
fn test_digit_count_small_values() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(1), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(123_123), 6);
}

#[test]
fn test_digit_count_exact_at_powers_of_ten() {
    for exponent in 1..20 {
        let power = 10_u64.pow(exponent);
        assert_eq!(digit_count(power - 1), exponent);
        assert_eq!(digit_count(power), exponent + 1);
    }
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn test_parse_single_range() {
    let result = parse_ranges("1000-1212");
    assert_eq!(result, Ok(vec![IdRange::new(1000, 1212)]));
}

#[test]
fn test_parse_ignores_surrounding_whitespace() {
    let result = parse_ranges("  11-22,95-115\n");
    assert_eq!(
        result,
        Ok(vec![IdRange::new(11, 22), IdRange::new(95, 115)])
    );
}

#[test]
fn test_parse_tolerates_wrapped_lines() {
    let result = parse_ranges("11-22,\n95-115");
    assert_eq!(
        result,
        Ok(vec![IdRange::new(11, 22), IdRange::new(95, 115)])
    );
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_ranges(""), Err(RangeError::EmptyInput));
    assert_eq!(parse_ranges("  \n"), Err(RangeError::EmptyInput));
}

#[test]
fn test_parse_rejects_missing_separator() {
    let result = parse_ranges("11-22,9599");
    assert_eq!(result, Err(RangeError::InvalidFormat("9599".to_string())));
}

#[test]
fn test_parse_rejects_extra_separator() {
    let result = parse_ranges("1-2-3");
    assert_eq!(result, Err(RangeError::InvalidFormat("1-2-3".to_string())));
}

#[test]
fn test_parse_rejects_missing_bound() {
    assert_eq!(
        parse_ranges("-5"),
        Err(RangeError::InvalidFormat("-5".to_string()))
    );
    assert_eq!(
        parse_ranges("11-22,"),
        Err(RangeError::InvalidFormat(String::new()))
    );
}

#[test]
fn test_parse_rejects_non_numeric_bound() {
    let result = parse_ranges("12-ab");
    assert_eq!(
        result,
        Err(RangeError::InvalidNumber {
            token: "12-ab".to_string(),
            value: "ab".to_string(),
        })
    );
}

#[test]
fn test_error_message_names_token() {
    let result = parse_ranges("5x5");
    assert!(result.is_err());
    if let Err(err) = result {
        assert!(err.to_string().contains("5x5"));
    }
}

#[test]
fn test_range_len_and_empty() {
    assert_eq!(IdRange::new(5, 5).len(), 1);
    assert_eq!(IdRange::new(11, 22).len(), 12);
    assert!(IdRange::new(10, 9).is_empty());
    assert_eq!(IdRange::new(10, 9).len(), 0);
}

#[test]
fn test_range_display() {
    assert_eq!(IdRange::new(95, 115).to_string(), "95-115");
}

#[test]
fn test_split_by_digit_count_within_band() {
    let segments = IdRange::new(11, 22).split_by_digit_count();
    assert_eq!(segments, vec![(2, IdRange::new(11, 22))]);
}

#[test]
fn test_split_by_digit_count_across_bands() {
    let segments = IdRange::new(5, 1234).split_by_digit_count();
    assert_eq!(
        segments,
        vec![
            (1, IdRange::new(5, 9)),
            (2, IdRange::new(10, 99)),
            (3, IdRange::new(100, 999)),
            (4, IdRange::new(1000, 1234)),
        ]
    );
}

#[test]
fn test_split_by_digit_count_top_band() {
    let start = 10_u64.pow(19) - 1;
    let segments = IdRange::new(start, u64::MAX).split_by_digit_count();
    assert_eq!(
        segments,
        vec![
            (19, IdRange::new(start, start)),
            (20, IdRange::new(start + 1, u64::MAX)),
        ]
    );
}

#[test]
fn test_split_empty_range() {
    assert!(IdRange::new(7, 3).split_by_digit_count().is_empty());
}
