//! TF-IDF vector space over recipe ingredient lists
//!
//! The vocabulary and IDF weights are fixed when the ranker is built from the corpus.
//! Keyword phrases are embedded with the same vocabulary and compared to every recipe
//! by cosine similarity.

use std::collections::{HashMap, HashSet};

/// English stop words excluded from the vocabulary
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Sparse vector as (dimension, weight) pairs, sorted by dimension
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    /// term → dimension index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
    /// Unit-length TF-IDF vector per document, in corpus order
    documents: Vec<SparseVector>,
}

impl SimilarityRanker {
    /// Builds the vocabulary and IDF weights from the given documents
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = documents.into_iter().map(tokenize).collect();
        let n = tokenized.len() as f64;

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.to_string()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_freq[idx] += 1;
            }
        }

        // Smoothed IDF, as if one extra document contained every term
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut ranker = Self {
            vocabulary,
            idf,
            documents: Vec::with_capacity(tokenized.len()),
        };
        ranker.documents = tokenized.iter().map(|t| ranker.vectorize(t)).collect();

        tracing::debug!(
            documents = ranker.documents.len(),
            vocabulary = ranker.vocabulary.len(),
            "Built TF-IDF model"
        );

        ranker
    }

    /// Number of terms in the fixed vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Embeds text into the vector space; out-of-vocabulary terms are dropped
    pub fn embed(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    /// Cosine similarity of every document to the query, in corpus order
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query: HashMap<usize, f64> = self.embed(query).into_iter().collect();

        self.documents
            .iter()
            .map(|doc| {
                let dot = doc
                    .iter()
                    .filter_map(|(idx, weight)| query.get(idx).map(|q| q * weight))
                    .fold(0.0_f64, |acc, x| acc + x);
                // Both sides are unit length; clamp away rounding noise
                dot.clamp(0.0, 1.0)
            })
            .collect()
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        vector.sort_unstable_by_key(|&(idx, _)| idx);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }
}

/// Lower-cases and splits on non-word characters, keeping tokens of two or more
/// characters that are not stop words
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() >= 2)
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(
            tokenize("Rice, a pinch of Salt and 2 green-chillies"),
            vec!["rice", "pinch", "salt", "green", "chillies"]
        );
    }

    #[test]
    fn test_tokenize_uses_full_english_stop_list() {
        assert_eq!(tokenize("full fat milk"), vec!["fat", "milk"]);
        assert_eq!(tokenize("thick top side made"), Vec::<String>::new());
        assert_eq!(tokenize("just did"), vec!["just", "did"]);
    }

    #[test]
    fn test_stop_words_do_not_dilute_scores() {
        let ranker = SimilarityRanker::fit(["rice, sugar, ghee, cardamom", "rice, full fat milk"]);
        let scores = ranker.scores("protein rice dal curry energy");
        assert!(scores[1] > scores[0]);
        assert!((scores[1] - 0.44944).abs() < 1e-4);
        assert!((scores[0] - 0.37997).abs() < 1e-4);
    }

    #[test]
    fn test_identical_text_scores_one() {
        let ranker = SimilarityRanker::fit([
            "sweet fruity colorful fresh light",
            "rice, dal, ghee",
            "mango, sugar, milk",
        ]);
        let scores = ranker.scores("sweet fruity colorful fresh light");
        assert!((scores[0] - 1.0).abs() < EPSILON);
        assert!(scores[0] >= scores[1] && scores[0] >= scores[2]);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let ranker = SimilarityRanker::fit(["rice, dal", "paneer, peas"]);
        assert_eq!(ranker.scores("sweet fruity"), vec![0.0, 0.0]);
    }

    #[test]
    fn test_scores_within_unit_range() {
        let ranker = SimilarityRanker::fit([
            "rice, rice, rice, dal",
            "dal, curry leaves, rice flour",
            "milk, sugar, cardamom",
            "",
        ]);
        for score in ranker.scores("protein rice dal curry energy") {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let ranker = SimilarityRanker::fit(["", "rice"]);
        let scores = ranker.scores("rice");
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_vocabulary_terms_ignored() {
        let ranker = SimilarityRanker::fit(["rice, dal", "milk"]);
        assert_eq!(ranker.embed("quinoa kale"), Vec::new());
        assert_eq!(ranker.embed("rice quinoa"), ranker.embed("rice"));
    }

    #[test]
    fn test_smoothed_idf() {
        let ranker = SimilarityRanker::fit(["rice dal", "rice"]);
        let rice = ranker.vocabulary["rice"];
        let dal = ranker.vocabulary["dal"];
        assert!((ranker.idf[rice] - 1.0).abs() < EPSILON);
        assert!((ranker.idf[dal] - (1.5f64.ln() + 1.0)).abs() < EPSILON);
        assert_eq!(ranker.vocabulary_len(), 2);
    }
}
