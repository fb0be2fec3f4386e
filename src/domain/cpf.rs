//! CPF 檢查碼驗證
//!
//! 純函式，無 I/O、無共享狀態，可任意並行呼叫。

/// 正規化後的 CPF 長度
pub const CPF_LENGTH: usize = 11;

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// 驗證結果分類，失敗時保留原因供日誌使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// 輸入為空或缺失
    Missing,
    /// 長度不是 11 或含非數字字元
    Malformed,
    /// 格式正確但檢查碼不符
    ChecksumMismatch,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// 驗證 CPF，任何不合法輸入都回傳 `false`
pub fn validate(candidate: Option<&str>) -> bool {
    verify(candidate).is_valid()
}

/// 驗證 CPF 並回傳失敗原因
pub fn verify(candidate: Option<&str>) -> Verdict {
    let candidate = match candidate {
        Some(c) if !c.is_empty() => c,
        _ => return Verdict::Missing,
    };

    let Some(digits) = normalize(candidate) else {
        return Verdict::Malformed;
    };

    let mut base = [0u32; 9];
    base.copy_from_slice(&digits[..9]);

    let (first, second) = check_digits(&base);
    if digits[9] == first && digits[10] == second {
        Verdict::Valid
    } else {
        Verdict::ChecksumMismatch
    }
}

/// 移除 `.` 與 `-`，並逐字元轉為數字
///
/// 不做整數解析，前導零會被保留。
pub fn normalize(candidate: &str) -> Option<[u32; CPF_LENGTH]> {
    let mut digits = [0u32; CPF_LENGTH];
    let mut len = 0;

    for c in candidate.chars().filter(|c| *c != '.' && *c != '-') {
        if len == CPF_LENGTH {
            return None;
        }
        digits[len] = c.to_digit(10)?;
        len += 1;
    }

    (len == CPF_LENGTH).then_some(digits)
}

/// 由前 9 碼計算兩個檢查碼
pub fn check_digits(base: &[u32; 9]) -> (u32, u32) {
    let first = check_digit(base, &FIRST_WEIGHTS);

    let mut base10 = [0u32; 10];
    base10[..9].copy_from_slice(base);
    base10[9] = first;
    let second = check_digit(&base10, &SECOND_WEIGHTS);

    (first, second)
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_formatted() {
        assert!(validate(Some("111.444.777-35")));
        assert!(validate(Some("11144477735")));
    }

    #[test]
    fn test_known_invalid_check_digits() {
        assert!(!validate(Some("111.444.777-36")));
        assert_eq!(verify(Some("111.444.777-36")), Verdict::ChecksumMismatch);
    }

    #[test]
    fn test_missing_input() {
        assert!(!validate(None));
        assert!(!validate(Some("")));
        assert_eq!(verify(None), Verdict::Missing);
        assert_eq!(verify(Some("")), Verdict::Missing);
    }

    #[test]
    fn test_wrong_length_after_normalization() {
        assert_eq!(verify(Some("1114447773")), Verdict::Malformed);
        assert_eq!(verify(Some("111444777350")), Verdict::Malformed);
        assert_eq!(verify(Some("...---")), Verdict::Malformed);
        assert_eq!(verify(Some("111.444.777-3")), Verdict::Malformed);
    }

    #[test]
    fn test_non_digit_characters() {
        assert_eq!(verify(Some("1114447773a")), Verdict::Malformed);
        assert_eq!(verify(Some("111 444 777 35")), Verdict::Malformed);
        assert_eq!(verify(Some("111/444/777/35")), Verdict::Malformed);
        assert_eq!(verify(Some("+1144477735")), Verdict::Malformed);
        // 非 ASCII 數字也不接受
        assert_eq!(verify(Some("١١١٤٤٤٧٧٧٣٥")), Verdict::Malformed);
    }

    #[test]
    fn test_reference_computation_for_sequential_base() {
        // 210 % 11 = 1 → 0；1234567890 → 255 % 11 = 2 → 9
        assert_eq!(check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), (0, 9));
        assert!(validate(Some("12345678909")));
        assert!(validate(Some("123.456.789-09")));
        assert!(!validate(Some("12345678900")));
        assert_eq!(verify(Some("12345678900")), Verdict::ChecksumMismatch);
    }

    #[test]
    fn test_repeated_digits_are_not_blacklisted() {
        assert!(validate(Some("00000000000")));
        assert!(validate(Some("11111111111")));
        assert!(validate(Some("000.000.000-00")));
    }

    #[test]
    fn test_leading_zeros_preserved() {
        // 156 % 11 = 2 → 9；210 % 11 = 1 → 0
        assert_eq!(check_digits(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), (9, 0));
        assert!(validate(Some("012.345.678-90")));
        assert!(!validate(Some("12.345.678-90")));
    }

    #[test]
    fn test_punctuation_anywhere_is_stripped() {
        assert!(validate(Some("-1-1-1-4-4-4-7-7-7-3-5-")));
        assert!(validate(Some("11144477735...")));
    }

    #[test]
    fn test_validate_is_idempotent() {
        for input in ["111.444.777-35", "111.444.777-36", "", "abc"] {
            assert_eq!(validate(Some(input)), validate(Some(input)));
        }
    }
}
