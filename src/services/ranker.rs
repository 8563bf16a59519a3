//! 联想词排序 - 业务能力层
//!
//! 纯函数：从联想词集合中选出最长和最短的一条。长度按字符数计算。

/// 返回 (最长, 最短)
///
/// - 空集合返回 `("", "")`
/// - 长度相同时取最先出现的一条
/// - 只有一条时最长和最短都是它
pub fn rank(suggestions: &[String]) -> (String, String) {
    let Some(first) = suggestions.first() else {
        return (String::new(), String::new());
    };

    let mut longest = first;
    let mut shortest = first;

    for candidate in &suggestions[1..] {
        let len = char_len(candidate);
        if len > char_len(longest) {
            longest = candidate;
        }
        if len < char_len(shortest) {
            shortest = candidate;
        }
    }

    (longest.clone(), shortest.clone())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_picks_extremes() {
        let suggestions = set(&["pizza hut", "pizza near me", "pizza dough recipe"]);
        assert_eq!(
            rank(&suggestions),
            ("pizza dough recipe".to_string(), "pizza hut".to_string())
        );
    }

    #[test]
    fn test_rank_empty_set() {
        assert_eq!(rank(&[]), (String::new(), String::new()));
    }

    #[test]
    fn test_rank_single_element() {
        let suggestions = set(&["sushi"]);
        assert_eq!(rank(&suggestions), ("sushi".to_string(), "sushi".to_string()));
    }

    #[test]
    fn test_rank_ties_keep_first_occurrence() {
        let suggestions = set(&["abc", "xyz", "a", "b", "defg", "hijk"]);
        let (longest, shortest) = rank(&suggestions);
        assert_eq!(longest, "defg");
        assert_eq!(shortest, "a");

        let all_equal = set(&["one", "two", "six"]);
        assert_eq!(rank(&all_equal), ("one".to_string(), "one".to_string()));
    }

    #[test]
    fn test_rank_counts_chars_not_bytes() {
        // "拉面" 是 6 个字节但只有 2 个字符
        let suggestions = set(&["拉面", "ramen"]);
        let (longest, shortest) = rank(&suggestions);
        assert_eq!(longest, "ramen");
        assert_eq!(shortest, "拉面");
    }

    #[test]
    fn test_rank_is_deterministic() {
        let suggestions = set(&["ramen near me", "ramen", "ramen noodles recipe", "ramen bowl"]);
        let first = rank(&suggestions);
        for _ in 0..10 {
            assert_eq!(rank(&suggestions), first);
        }
        assert!(first.0.chars().count() >= first.1.chars().count());
    }
}
