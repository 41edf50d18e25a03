//! 文字列類似度
//!
//! - `partial_ratio`: 短い方の文字列を長い方の同じ長さの区間に当てはめ、
//!   最も一致する区間の類似度を 0-100 で返す
//! - `ratio`: 文字列全体の類似度 (0.0-1.0)

use strsim::normalized_levenshtein;

/// 部分一致スコア (0-100)
///
/// 完全一致・包含は100、共通部分のない文字列は0付近。
/// 入力はケースフォールド済みであること。
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, width) = if a_len <= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if width == 0 {
        return 0;
    }
    if longer.contains(shorter) {
        return 100;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    let best = long_chars
        .windows(width)
        .map(|w| {
            let window: String = w.iter().collect();
            normalized_levenshtein(shorter, &window)
        })
        .fold(0.0_f64, f64::max);

    to_score(best)
}

/// 全体類似度 (0.0-1.0)
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// 0.0-1.0 を 0-100 の整数スコアに変換
fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(partial_ratio("scb", "scb"), 100);
        assert_eq!(partial_ratio("กองทัพเรือ", "กองทัพเรือ"), 100);
    }

    #[test]
    fn test_containment() {
        assert_eq!(partial_ratio("bangkok bank", "bangkok bank branch 5"), 100);
        assert_eq!(partial_ratio("bangkok bank branch 5", "bangkok bank"), 100);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(partial_ratio("xyz123", "scb"), 0);
        assert!(partial_ratio("xyz123", "krungthai") < 20);
    }

    #[test]
    fn test_degrades_with_edits() {
        let one = partial_ratio("krungthai", "krungthal bank");
        let two = partial_ratio("krungthai", "krumgthal bank");
        assert_eq!(one, 89);
        assert_eq!(two, 78);
    }

    #[test]
    fn test_empty() {
        assert_eq!(partial_ratio("", "scb"), 0);
        assert_eq!(partial_ratio("", ""), 0);
    }

    #[test]
    fn test_ratio() {
        assert!((ratio("scb", "scb") - 1.0).abs() < 0.001);
        assert!(ratio("scb", "scb tech x") < 0.5);
    }

    #[test]
    fn test_to_score() {
        assert_eq!(to_score(1.0), 100);
        assert_eq!(to_score(0.596), 60);
        assert_eq!(to_score(0.0), 0);
    }
}
