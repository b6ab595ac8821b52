use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{BenchError, Result};

/// One (text, pattern) configuration to be timed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub text_label: String,
    pub text: String,
    pub pattern_label: String,
    pub pattern: String,
}

impl BenchmarkCase {
    pub fn new(
        text_label: impl Into<String>,
        text: impl Into<String>,
        pattern_label: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            text_label: text_label.into(),
            text: text.into(),
            pattern_label: pattern_label.into(),
            pattern: pattern.into(),
        }
    }

    /// `"<text label> / <pattern label>"`
    pub fn id(&self) -> String {
        format!("{} / {}", self.text_label, self.pattern_label)
    }
}

/// On-disk corpus layout:
///
/// ```toml
/// [[texts]]
/// label = "Article 1"
/// content = "..."
///
/// [[texts.patterns]]
/// label = "existing"
/// content = "..."
/// ```
#[derive(Debug, Deserialize)]
struct CorpusFile {
    texts: Vec<TextEntry>,
}

#[derive(Debug, Deserialize)]
struct TextEntry {
    label: String,
    content: String,
    #[serde(default)]
    patterns: Vec<PatternEntry>,
}

#[derive(Debug, Deserialize)]
struct PatternEntry {
    label: String,
    content: String,
}

pub fn parse_corpus(source: &str, origin: &Path) -> Result<Vec<BenchmarkCase>> {
    let file: CorpusFile = toml::from_str(source).map_err(|e| BenchError::Corpus {
        path: origin.to_path_buf(),
        source: e,
    })?;

    let cases: Vec<BenchmarkCase> = file
        .texts
        .into_iter()
        .flat_map(|text| {
            let TextEntry {
                label,
                content,
                patterns,
            } = text;
            patterns.into_iter().map(move |pattern| {
                BenchmarkCase::new(label.clone(), content.clone(), pattern.label, pattern.content)
            })
        })
        .collect();

    if cases.is_empty() {
        return Err(BenchError::Configuration(format!(
            "corpus {} defines no (text, pattern) pairs",
            origin.display()
        )));
    }

    Ok(cases)
}

pub fn load_corpus(path: &Path) -> Result<Vec<BenchmarkCase>> {
    let source = fs::read_to_string(path).map_err(|e| BenchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_corpus(&source, path)
}

const ARTICLE_1: &str = "
Штучний інтелект (ШІ) трансформує галузі по всьому світу. Від охорони здоров’я до фінансів, системи ШІ покращують ефективність і прийняття рішень. Машинне навчання, підмножина ШІ, дозволяє системам навчатися з даних і вдосконалюватися з часом.
";

const ARTICLE_2: &str = "
Квантові обчислення — це нова галузь, яка використовує квантову механіку для виконання складних обчислень. На відміну від класичних комп’ютерів, квантові комп’ютери використовують кубіти, які можуть існувати в кількох станах одночасно, що забезпечує швидшу обробку для певних задач.
";

/// Two short articles, each searched for a substring it contains and one it
/// does not.
pub fn default_corpus() -> Vec<BenchmarkCase> {
    vec![
        BenchmarkCase::new("Article 1", ARTICLE_1, "existing", "системи ШІ"),
        BenchmarkCase::new("Article 1", ARTICLE_1, "fictional", "вигаданий"),
        BenchmarkCase::new("Article 2", ARTICLE_2, "existing", "квантові комп’ютери"),
        BenchmarkCase::new("Article 2", ARTICLE_2, "fictional", "вигаданий"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corpus_shape() {
        let corpus = default_corpus();
        assert_eq!(corpus.len(), 4);
        for case in &corpus {
            let present = case.text.contains(&case.pattern);
            assert_eq!(present, case.pattern_label == "existing", "{}", case.id());
        }
    }

    #[test]
    fn parse_nested_patterns() {
        let src = r#"
            [[texts]]
            label = "dna"
            content = "ACGTACGT"

            [[texts.patterns]]
            label = "short"
            content = "GTA"

            [[texts.patterns]]
            label = "absent"
            content = "TTT"

            [[texts]]
            label = "lorem"
            content = "lorem ipsum"

            [[texts.patterns]]
            label = "word"
            content = "ipsum"
        "#;
        let cases = parse_corpus(src, Path::new("inline.toml")).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0], BenchmarkCase::new("dna", "ACGTACGT", "short", "GTA"));
        assert_eq!(cases[1].id(), "dna / absent");
        assert_eq!(cases[2].text, "lorem ipsum");
    }

    #[test]
    fn empty_corpus_is_configuration_error() {
        let src = r#"
            [[texts]]
            label = "lonely"
            content = "no patterns here"
        "#;
        let err = parse_corpus(src, Path::new("empty.toml")).unwrap_err();
        assert!(matches!(err, BenchError::Configuration(_)));
    }

    #[test]
    fn malformed_corpus_reports_path() {
        let err = parse_corpus("texts = 3", Path::new("bad.toml")).unwrap_err();
        match err {
            BenchError::Corpus { path, .. } => assert_eq!(path, Path::new("bad.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
