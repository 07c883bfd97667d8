/// 最長可用 `u64` 完整表示的數列長度 (第 94 項會溢位)
pub const MAX_SEQUENCE_LENGTH: i64 = 93;

/// 以兩個 1 起始的加法遞迴數列 (斐波那契)
///
/// 迭代器本身是無限的，直到下一項無法以 `u64` 表示為止。
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    current: Option<u64>,
    next: Option<u64>,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SequenceGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current?;
        self.current = self.next;
        self.next = match self.next {
            Some(next) => term.checked_add(next),
            None => None,
        };
        Some(term)
    }
}

/// 產生長度為 `n` 的數列；`n <= 0` 時回傳空數列
pub fn generate(n: i64) -> Vec<u64> {
    if n <= 0 {
        return Vec::new();
    }
    let len = usize::try_from(n).unwrap_or(usize::MAX);
    SequenceGenerator::new().take(len).collect()
}
