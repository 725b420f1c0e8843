// src/samples.rs
//! Canned texts for the interactive `sample` command and the demo binary.

use std::str::FromStr;

pub const SAMPLE_POSITIVE: &str = "I absolutely love this product! It's amazing and works perfectly. The quality is outstanding and I would definitely recommend it to everyone.";
pub const SAMPLE_NEGATIVE: &str = "This is the worst product I've ever used. It's completely broken and doesn't work at all. The quality is terrible and I'm very disappointed.";
pub const SAMPLE_NEUTRAL: &str = "The product arrived on time. It seems to work as described. The packaging was adequate. I haven't used it extensively yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Positive,
    Negative,
    Neutral,
}

impl SampleKind {
    pub fn text(&self) -> &'static str {
        match self {
            SampleKind::Positive => SAMPLE_POSITIVE,
            SampleKind::Negative => SAMPLE_NEGATIVE,
            SampleKind::Neutral => SAMPLE_NEUTRAL,
        }
    }
}

impl FromStr for SampleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SampleKind::Positive),
            "negative" => Ok(SampleKind::Negative),
            "neutral" => Ok(SampleKind::Neutral),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DemoText {
    pub category: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

pub const DEMO_TEXTS: [DemoText; 6] = [
    DemoText {
        category: "POSITIVE SENTIMENT",
        description: "Highly positive product review",
        text: "I absolutely love this product! It's amazing and works perfectly. The quality is outstanding and I would definitely recommend it to everyone. This is the best purchase I've ever made!",
    },
    DemoText {
        category: "NEGATIVE SENTIMENT",
        description: "Highly negative product review",
        text: "This is the worst product I've ever used. It's completely broken and doesn't work at all. The quality is terrible and I'm very disappointed. I would never recommend this to anyone.",
    },
    DemoText {
        category: "NEUTRAL SENTIMENT",
        description: "Neutral product review",
        text: "The product arrived on time. It seems to work as described. The packaging was adequate. I haven't used it extensively yet, so I can't give a full opinion.",
    },
    DemoText {
        category: "MIXED SENTIMENT",
        description: "Mixed sentiment with both positive and negative aspects",
        text: "The product has some good features but also several problems. I like the design but the performance is disappointing. It's okay for basic use but not worth the price.",
    },
    DemoText {
        category: "SOCIAL MEDIA TEXT",
        description: "Social media post with emojis and hashtags",
        text: "OMG! Just got my new phone and it's 🔥🔥🔥! The camera is insane and the battery life is amazing. Can't believe how fast it is! #loveit #newphone",
    },
    DemoText {
        category: "FORMAL BUSINESS TEXT",
        description: "Formal business communication",
        text: "The quarterly report indicates satisfactory performance with room for improvement. Revenue targets were met, however, operational costs exceeded projections. Strategic adjustments are recommended.",
    },
];

/// Text used by the quick functionality check.
pub const QUICK_CHECK_TEXT: &str = "This is a test of the sentiment analysis tool.";
