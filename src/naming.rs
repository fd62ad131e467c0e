//! Output filename derivation for exported pages.
//!
//! A page's image is named after its title with every space turned into a
//! dash. Nothing else is touched:
//! - `"Page One"` → `Page-One.png`
//! - `"Cover"` → `Cover.png`
//! - `"a/b \"c\""` → `a/b-"c".png`

/// Extension appended to every exported page.
pub const OUTPUT_EXTENSION: &str = "png";

/// Replace each space in a page name with a dash.
pub fn dashed_name(page_name: &str) -> String {
    page_name.replace(' ', "-")
}

/// Output file name for a page, e.g. `Page-One.png`.
pub fn output_file_name(page_name: &str) -> String {
    format!("{}.{}", dashed_name(page_name), OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_dashes() {
        assert_eq!(output_file_name("Page One"), "Page-One.png");
        assert_eq!(output_file_name("Page Two"), "Page-Two.png");
    }

    #[test]
    fn single_word_unchanged() {
        assert_eq!(output_file_name("Cover"), "Cover.png");
    }

    #[test]
    fn every_space_replaced() {
        assert_eq!(dashed_name("  a  b "), "--a--b-");
    }

    #[test]
    fn unsafe_characters_pass_through() {
        assert_eq!(output_file_name("a/b 'c'"), "a/b-'c'.png");
        assert_eq!(output_file_name("tab\there"), "tab\there.png");
    }

    #[test]
    fn empty_name() {
        assert_eq!(output_file_name(""), ".png");
    }
}
