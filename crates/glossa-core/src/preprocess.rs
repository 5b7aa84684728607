use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // A query is a single word or phrase, never multi-line
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_flattens_newlines() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  ephemeral \n"), "ephemeral");
        assert_eq!(p.process("break\r\na leg"), "break a leg");
    }

    #[test]
    fn empty_stays_empty() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("   "), "");
    }
}
