//! English ordinal labels for leaderboard positions.
//!
//! - `1` → "1st", `2` → "2nd", `3` → "3rd", `4` → "4th"
//! - `11`, `12`, `13` (and anything ending in 11..=19) → "th"
//! - `21` → "21st", `101` → "101st", `111` → "111th"

/// Suffix for `n`, without the number.
pub fn ordinal_suffix(n: usize) -> &'static str {
    if (11..=19).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Number followed by its suffix, e.g. `ordinal(22) == "22nd"`.
pub fn ordinal(n: usize) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_four() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
    }

    #[test]
    fn teens_always_take_th() {
        for n in 11..=19 {
            assert_eq!(ordinal_suffix(n), "th", "{n}");
        }
    }

    #[test]
    fn twenties_follow_last_digit() {
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(24), "24th");
    }

    #[test]
    fn hundreds_use_last_two_digits() {
        assert_eq!(ordinal(100), "100th");
        assert_eq!(ordinal(101), "101st");
        assert_eq!(ordinal(102), "102nd");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(113), "113th");
        assert_eq!(ordinal(121), "121st");
    }

    #[test]
    fn zero_takes_th() {
        assert_eq!(ordinal(0), "0th");
    }
}
