/// 平方運算元的上限，超過時 `x * x` 會溢位 `i64`
pub const MAX_SQUARE_OPERAND: i64 = 3_037_000_499;

/// `start..=end` 每個整數的平方；`start > end` 時為空
///
/// 任一項溢位 `i64` 時回傳 `None`。
pub fn squares(start: i64, end: i64) -> Option<Vec<i64>> {
    (start..=end).map(|x| x.checked_mul(x)).collect()
}

pub fn doubled(numbers: &[i64]) -> Option<Vec<i64>> {
    numbers.iter().map(|n| n.checked_mul(2)).collect()
}

pub fn evens(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn sum(numbers: &[i64]) -> Option<i64> {
    numbers.iter().try_fold(0i64, |acc, n| acc.checked_add(*n))
}

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_one_to_five() {
        assert_eq!(squares(1, 5), Some(vec![1, 4, 9, 16, 25]));
    }

    #[test]
    fn test_squares_edge_ranges() {
        assert_eq!(squares(3, 3), Some(vec![9]));
        assert_eq!(squares(5, 1), Some(vec![]));
        assert_eq!(squares(-2, 1), Some(vec![4, 1, 0, 1]));
        assert_eq!(
            squares(MAX_SQUARE_OPERAND, MAX_SQUARE_OPERAND),
            Some(vec![9_223_372_030_926_249_001])
        );
    }

    #[test]
    fn test_overflow_yields_none() {
        assert_eq!(squares(MAX_SQUARE_OPERAND + 1, MAX_SQUARE_OPERAND + 1), None);
        assert_eq!(squares(i64::MIN, i64::MIN), None);
        assert_eq!(doubled(&[1, i64::MAX]), None);
        assert_eq!(sum(&[i64::MAX, 1]), None);
        assert_eq!(sum(&[i64::MAX, 1, -1]), None);
    }

    #[test]
    fn test_map_filter_reduce() {
        let numbers = [1, 2, 3, 4, 5];
        assert_eq!(doubled(&numbers), Some(vec![2, 4, 6, 8, 10]));
        assert_eq!(evens(&numbers), vec![2, 4]);
        assert_eq!(sum(&numbers), Some(15));
        assert_eq!(sum(&[]), Some(0));
        assert_eq!(evens(&[-4, -3, 0]), vec![-4, 0]);
    }

    #[test]
    fn test_greet_and_add() {
        assert_eq!(greet("World"), "Hello, World!");
        assert_eq!(add(2, 3), 5);
    }
}
