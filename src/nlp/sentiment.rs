use super::Lexicon;

/// Score returned when the text carries no sentiment words at all.
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Share of positive words among the sentiment words present in `text`.
///
/// Each lexicon word counts once, by case-insensitive substring presence.
/// Returns a value in [0, 1]; [`NEUTRAL_SENTIMENT`] when nothing matches.
pub fn analyze_sentiment(text: &str, lexicon: &Lexicon) -> f64 {
    let text_lower = text.to_lowercase();
    let count = |words: &[&str]| words.iter().filter(|w| text_lower.contains(**w)).count();

    let positive = count(lexicon.positive_words);
    let negative = count(lexicon.negative_words);
    let total = positive + negative;

    if total == 0 {
        return NEUTRAL_SENTIMENT;
    }
    positive as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Language;

    #[test]
    fn test_sentiment_neutral() {
        let lex = Language::English.lexicon();
        assert_eq!(analyze_sentiment("The sky is blue", lex), NEUTRAL_SENTIMENT);
        assert_eq!(analyze_sentiment("", lex), NEUTRAL_SENTIMENT);
    }

    #[test]
    fn test_sentiment_positive_and_negative() {
        let lex = Language::English.lexicon();
        assert_eq!(analyze_sentiment("Excellent and effective rollout", lex), 1.0);
        assert_eq!(analyze_sentiment("A bad error", lex), 0.0);
        // success vs problem
        assert_eq!(analyze_sentiment("Success despite one PROBLEM", lex), 0.5);
    }

    #[test]
    fn test_sentiment_words_counted_once() {
        let lex = Language::English.lexicon();
        // good x3, risk x1 -> 1 / 2
        assert_eq!(analyze_sentiment("good good good risk", lex), 0.5);
    }

    #[test]
    fn test_sentiment_russian() {
        let lex = Language::Russian.lexicon();
        let score = analyze_sentiment("Отлично, но есть риск и ошибка", lex);
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }
}
