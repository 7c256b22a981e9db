//! Shared utility functions

/// Mask a scanned identifier for on-screen display, keeping only the last
/// four characters visible.
///
/// Card numbers are personal data: the status bar and toasts show
/// `•••• 1234`-style strings, full identifiers only ever reach the debug log.
/// Identifiers of four characters or fewer are masked entirely.
pub fn mask_id(id: &str) -> String {
    let total = id.chars().count();
    if total <= 4 {
        return "••••".to_string();
    }
    let tail: String = id.chars().skip(total - 4).collect();
    format!("•••• {tail}")
}

/// Format a count with a singular/plural noun: "1 record", "42 records".
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_last_four() {
        assert_eq!(mask_id("123456789"), "•••• 6789");
    }

    #[test]
    fn mask_hides_short_ids_entirely() {
        assert_eq!(mask_id("1234"), "••••");
        assert_eq!(mask_id("7"), "••••");
        assert_eq!(mask_id(""), "••••");
    }

    #[test]
    fn mask_respects_char_boundaries() {
        // Not scanner-realistic, but must not panic on multibyte input
        assert_eq!(mask_id("été-0042"), "•••• 0042");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0, "record"), "0 records");
        assert_eq!(count_label(1, "record"), "1 record");
        assert_eq!(count_label(2, "record"), "2 records");
    }
}
