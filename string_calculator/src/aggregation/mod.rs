//! Summation with range clipping
//!
//! Numbers above the configured maximum, including integers too large for
//! `i64`, are silently excluded from the sum. Callers validate
//! non-negativity first; negative input contributes nothing.

use crate::numeric::Number;
use serde::Serialize;

/// Outcome of summing a validated number list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub sum: u64,
    /// Values that contributed to `sum`, in encounter order
    pub included: Vec<i64>,
    /// Values above the maximum, in encounter order
    pub dropped: Vec<i64>,
}

impl Aggregate {
    pub fn has_dropped(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Sum the numbers that are `<= max_value`
pub fn aggregate(numbers: &[Number], max_value: i64) -> Aggregate {
    let mut result = Aggregate::default();

    for number in numbers {
        if number.saturated || number.value > max_value {
            result.dropped.push(number.value);
            continue;
        }

        let Ok(value) = u64::try_from(number.value) else {
            continue;
        };

        result.sum = result.sum.saturating_add(value);
        result.included.push(number.value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    fn numbers(values: &[i64]) -> Vec<Number> {
        values.iter().map(|v| Number::new(*v, Span::dummy())).collect()
    }

    #[test]
    fn test_sum_within_limit() {
        let result = aggregate(&numbers(&[1, 2, 3]), 1000);
        assert_eq!(result.sum, 6);
        assert_eq!(result.included, vec![1, 2, 3]);
        assert!(!result.has_dropped());
    }

    #[test]
    fn test_maximum_is_inclusive() {
        assert_eq!(aggregate(&numbers(&[1000, 2]), 1000).sum, 1002);
    }

    #[test]
    fn test_values_above_maximum_are_dropped() {
        let result = aggregate(&numbers(&[1001, 2, 5000]), 1000);
        assert_eq!(result.sum, 2);
        assert_eq!(result.dropped, vec![1001, 5000]);
        assert!(result.has_dropped());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[], 1000), Aggregate::default());
    }

    #[test]
    fn test_saturated_values_are_dropped_under_any_maximum() {
        let token = crate::tokens::Token::new("99999999999999999999".to_string(), Span::dummy());
        let huge = crate::numeric::convert_token(&token).unwrap();

        let result = aggregate(&[Number::new(1, Span::dummy()), huge], i64::MAX);
        assert_eq!(result.sum, 1);
        assert_eq!(result.dropped, vec![i64::MAX]);
    }

    #[test]
    fn test_unvalidated_negatives_add_nothing() {
        let result = aggregate(&numbers(&[-5, 3]), 1000);
        assert_eq!(result.sum, 3);
        assert_eq!(result.included, vec![3]);
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn test_custom_maximum() {
        assert_eq!(aggregate(&numbers(&[10, 11]), 10).sum, 10);
    }
}
