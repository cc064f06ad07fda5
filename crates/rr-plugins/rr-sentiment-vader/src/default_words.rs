//! Built-in word lists.
//!
//! Valences use the VADER rating scale, `-4.0` (most negative) to `4.0`
//! (most positive), and lean towards vocabulary that shows up in service
//! reviews.

pub(crate) const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("affordable", 1.1),
    ("amazing", 2.8),
    ("attentive", 1.6),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("clean", 1.7),
    ("comfortable", 1.5),
    ("cool", 1.3),
    ("courteous", 1.9),
    ("delicious", 2.7),
    ("delightful", 2.8),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exceptional", 2.3),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("kind", 2.4),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("polite", 1.8),
    ("professional", 1.9),
    ("quick", 1.0),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("reliable", 1.4),
    ("satisfied", 1.8),
    ("smile", 1.5),
    ("super", 2.9),
    ("superb", 3.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("welcome", 2.0),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yummy", 2.4),
    // Negative
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("avoid", -1.2),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.6),
    ("careless", -1.5),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("crap", -1.6),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disgusting", -2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("ignored", -1.6),
    ("lazy", -1.4),
    ("lost", -1.3),
    ("mediocre", -0.3),
    ("meh", -0.3),
    ("mess", -1.5),
    ("nasty", -2.6),
    ("overpriced", -1.1),
    ("pathetic", -2.3),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("ridiculous", -1.5),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.7),
    ("slow", -0.6),
    ("sorry", -0.3),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("unacceptable", -2.0),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("unprofessional", -1.9),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that raise the intensity of the sentiment word they precede.
pub(crate) const INCREASERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fabulously",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

/// Words that soften the sentiment word they precede.
pub(crate) const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint",
    "arent",
    "cannot",
    "cant",
    "couldnt",
    "darent",
    "didnt",
    "doesnt",
    "dont",
    "hadnt",
    "hasnt",
    "havent",
    "isnt",
    "mightnt",
    "mustnt",
    "neither",
    "never",
    "no",
    "nobody",
    "none",
    "nope",
    "nor",
    "not",
    "nothing",
    "nowhere",
    "rarely",
    "seldom",
    "shant",
    "shouldnt",
    "wasnt",
    "werent",
    "without",
    "wont",
    "wouldnt",
];
