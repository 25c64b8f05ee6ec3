//! Greedy word-wrap by character count.
//!
//! Breaks only at whitespace and never splits a word: a word longer than the
//! column width gets a line of its own and overflows. A blank source line wraps to
//! a single empty sub-line so paragraph breaks keep their vertical slot.

/// Wraps one source line into sub-lines of at most `columns` characters.
///
/// Runs of whitespace collapse to a single space. Always returns at least one
/// sub-line.
pub fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= columns {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    // Also covers blank lines: `current` is empty and `lines` is empty.
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps every source line of `text` in order.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| wrap_line(line, columns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        assert_eq!(wrap_line("Dear Hiring Manager,", 90), vec!["Dear Hiring Manager,"]);
    }

    #[test]
    fn test_blank_line_keeps_one_slot() {
        assert_eq!(wrap_line("", 90), vec![String::new()]);
        assert_eq!(wrap_line("   \t ", 90), vec![String::new()]);
    }

    #[test]
    fn test_wraps_at_whitespace_within_width() {
        let lines = wrap_line("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 7));
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        assert_eq!(wrap_line("abc def", 7), vec!["abc def"]);
        assert_eq!(wrap_line("abc defg", 7), vec!["abc", "defg"]);
    }

    #[test]
    fn test_long_word_is_not_split() {
        let lines = wrap_line("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // "é" is two bytes; five of them still fit in five columns.
        assert_eq!(wrap_line("ééééé ü", 5), vec!["ééééé", "ü"]);
    }

    #[test]
    fn test_wrap_text_preserves_paragraph_breaks() {
        let text = "Dear Sir,\n\nI am writing to apply.\n\nRegards";
        let lines = wrap_text(text, 90);
        assert_eq!(
            lines,
            vec!["Dear Sir,", "", "I am writing to apply.", "", "Regards"]
        );
    }

    #[test]
    fn test_wrap_text_empty_has_no_lines() {
        assert!(wrap_text("", 90).is_empty());
    }
}
