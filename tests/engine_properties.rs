//! Engine-level properties over hand-picked and seeded synthetic texts.
//!
//! Covered:
//! - totality on empty / whitespace / symbol-only input
//! - score bounds and label agreement over random texts
//! - determinism (same input, same output)
//! - method exclusivity
//! - sharing one analyzer across threads

use std::sync::Arc;
use std::thread;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use text_sentiment_analyzer::{
    AnalysisRequest, AnalyzeError, Analyzer, Emotion, Method, SentimentLabel,
};

const WORDS: &[&str] = &[
    "good", "bad", "terrible", "great", "not", "very", "love", "hate", "the", "product",
    "is", "was", "scared", "wow", "happy", "sad", "angry", "and", "but", "never", "amazing",
    "awful", "I", "it", "works", "broken", "!", ",", ".", "?", "don't", "can't", "3.5",
    "well-made", "😀", "ÉTÉ",
];

fn analyzer() -> Analyzer {
    Analyzer::with_embedded().expect("embedded resources")
}

fn random_text(rng: &mut StdRng) -> String {
    let n = rng.random_range(0..25);
    let mut words: Vec<&str> = (0..n)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect();
    words.shuffle(rng);
    words.join(" ")
}

#[test]
fn degenerate_inputs_are_total() {
    let a = analyzer();
    for text in ["", "   ", "\n\t", "!!! ??? ...", "....", "🙂🙂🙂"] {
        let r = a.analyze(text, "both").expect("valid method");
        let s = r.statistics();
        assert_eq!(s.filtered_words, 0, "{text:?}");
        assert_eq!(s.avg_word_length, 0.0, "{text:?}");
        assert!(s.sentences >= 1, "{text:?}");
        assert!(r.vader().is_some() && r.textblob().is_some());
        assert_eq!(r.emotions().iter().count(), Emotion::ALL.len());
    }
}

#[test]
fn empty_text_scores_neutral() {
    let r = analyzer().analyze_with("", Method::Both);
    let v = r.vader().unwrap();
    assert_eq!(v.compound, 0.0);
    assert_eq!(v.sentiment, SentimentLabel::Neutral);
    let t = r.textblob().unwrap();
    assert_eq!((t.polarity, t.subjectivity), (0.0, 0.0));
    assert_eq!(t.sentiment, SentimentLabel::Neutral);
    assert_eq!(r.statistics().total_words, 0);
    assert_eq!(r.statistics().sentences, 1);
}

#[test]
fn synthetic_texts_stay_in_bounds_and_labels_agree() {
    let a = analyzer();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let text = random_text(&mut rng);
        let r = a.analyze_with(&text, Method::Both);

        let v = r.vader().unwrap();
        assert!((-1.0..=1.0).contains(&v.compound), "{text:?}: {v:?}");
        for part in [v.positive, v.neutral, v.negative] {
            assert!((0.0..=1.0).contains(&part), "{text:?}: {v:?}");
        }
        assert_eq!(v.sentiment, SentimentLabel::from_compound(v.compound));
        if v.positive == 0.0 && v.negative == 0.0 {
            assert_eq!(v.compound, 0.0, "{text:?}: {v:?}");
            assert_eq!(v.sentiment, SentimentLabel::Neutral, "{text:?}");
        }

        let t = r.textblob().unwrap();
        assert!((-1.0..=1.0).contains(&t.polarity), "{text:?}: {t:?}");
        assert!((0.0..=1.0).contains(&t.subjectivity), "{text:?}: {t:?}");
        assert_eq!(t.sentiment, SentimentLabel::from_polarity(t.polarity));

        let s = r.statistics();
        assert!(s.filtered_words <= s.total_words, "{text:?}: {s:?}");
        assert!(s.avg_word_length >= 0.0);
    }
}

#[test]
fn neutral_sentences_stay_neutral_whatever_the_punctuation() {
    const NEUTRAL: &[&str] = &[
        "the", "meeting", "is", "at", "noon", "what", "time", "it", "train", "leaves",
        "on", "Tuesday", "report",
    ];
    const ENDINGS: &[&str] = &["!", "!!", "!!!!", "?", "??", "?!?", "."];

    let a = analyzer();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.random_range(1..8);
        let body: Vec<&str> = (0..n)
            .map(|_| NEUTRAL[rng.random_range(0..NEUTRAL.len())])
            .collect();
        let text = format!(
            "{}{}",
            body.join(" "),
            ENDINGS[rng.random_range(0..ENDINGS.len())]
        );

        let v = *a.analyze_with(&text, Method::Vader).vader().unwrap();
        assert_eq!(v.compound, 0.0, "{text:?}: {v:?}");
        assert_eq!(v.sentiment, SentimentLabel::Neutral, "{text:?}");
    }
}

#[test]
fn analysis_is_deterministic() {
    let a = analyzer();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let text = random_text(&mut rng);
        assert_eq!(
            a.analyze_with(&text, Method::Both),
            a.analyze_with(&text, Method::Both),
            "{text:?}"
        );
    }

    let other = analyzer();
    let text = "Not very good, but the support was wonderful!";
    assert_eq!(
        a.analyze_with(text, Method::Both),
        other.analyze_with(text, Method::Both)
    );
}

#[test]
fn end_to_end_positive_review() {
    let text = "I love this, it is great and amazing";
    let r = analyzer().analyze(text, "both").unwrap();

    assert_eq!(r.vader().unwrap().sentiment, SentimentLabel::Positive);
    assert_eq!(r.textblob().unwrap().sentiment, SentimentLabel::Positive);
    assert_eq!(r.emotions().joy(), 3);
    assert_eq!(r.emotions().get(Emotion::Sadness), 0);

    let s = r.statistics();
    assert_eq!(s.total_words, 9);
    assert_eq!(s.filtered_words, 3);
    assert_eq!(s.sentences, 1);
    assert!((s.avg_word_length - 16.0 / 3.0).abs() < 1e-9);
}

#[test]
fn clearly_negative_text_is_negative_for_both_methods() {
    let r = analyzer().analyze_with(
        "This is terrible. I hate it and the quality is awful.",
        Method::Both,
    );
    assert_eq!(r.vader().unwrap().sentiment, SentimentLabel::Negative);
    assert_eq!(r.textblob().unwrap().sentiment, SentimentLabel::Negative);
    assert!(r.emotions().get(Emotion::Anger) >= 3);
}

#[test]
fn each_method_produces_only_its_scores() {
    let a = analyzer();
    for m in Method::ALL {
        let r = a.aggregate(&AnalysisRequest::new("solid, reliable tool", m));
        assert_eq!(r.vader().is_some(), m.runs_vader(), "{m}");
        assert_eq!(r.textblob().is_some(), m.runs_textblob(), "{m}");
    }
}

#[test]
fn unknown_method_names_fail() {
    let a = analyzer();
    for bad in ["", "vader,textblob", "bert", "tb"] {
        match a.analyze("text", bad) {
            Err(AnalyzeError::InvalidArgument(got)) => assert_eq!(got, bad),
            other => panic!("expected InvalidArgument for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn one_analyzer_serves_many_threads() {
    let a = Arc::new(analyzer());
    let expected = a.analyze_with("Wow, what a wonderful surprise!", Method::Both);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let a = Arc::clone(&a);
            thread::spawn(move || {
                (0..20)
                    .map(|_| a.analyze_with("Wow, what a wonderful surprise!", Method::Both))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        for r in h.join().expect("worker panicked") {
            assert_eq!(r, expected);
        }
    }
}
