//! Built-in word valences, negators and intensifiers.

/// Word valences on a `-3..=3` scale.
pub const BUILTIN_VALENCES: &[(&str, i32)] = &[
    // strongly negative
    ("abysmal", -3),
    ("appalling", -3),
    ("atrocious", -3),
    ("awful", -3),
    ("disgusting", -3),
    ("dreadful", -3),
    ("hate", -3),
    ("hated", -3),
    ("hateful", -3),
    ("horrible", -3),
    ("horrific", -3),
    ("loathe", -3),
    ("miserable", -3),
    ("nightmare", -3),
    ("pathetic", -3),
    ("repulsive", -3),
    ("revolting", -3),
    ("terrible", -3),
    ("vile", -3),
    ("worst", -3),
    // negative
    ("angry", -2),
    ("annoying", -2),
    ("bad", -2),
    ("boring", -2),
    ("broken", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("dirty", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("gross", -2),
    ("poor", -2),
    ("rude", -2),
    ("sad", -2),
    ("stupid", -2),
    ("ugly", -2),
    ("unhappy", -2),
    ("useless", -2),
    ("worse", -2),
    ("wrong", -2),
    // mildly negative
    ("bland", -1),
    ("dull", -1),
    ("late", -1),
    ("meh", -1),
    ("mediocre", -1),
    ("messy", -1),
    ("noisy", -1),
    ("slow", -1),
    ("tired", -1),
    ("weird", -1),
    // mildly positive
    ("decent", 1),
    ("fair", 1),
    ("fine", 1),
    ("okay", 1),
    ("ok", 1),
    ("pleasant", 1),
    ("solid", 1),
    // positive
    ("beautiful", 2),
    ("better", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("fun", 2),
    ("glad", 2),
    ("good", 2),
    ("great", 2),
    ("happy", 2),
    ("like", 2),
    ("liked", 2),
    ("lovely", 2),
    ("nice", 2),
    ("recommend", 2),
    ("success", 2),
    ("tasty", 2),
    ("win", 2),
    // strongly positive
    ("amazing", 3),
    ("awesome", 3),
    ("best", 3),
    ("brilliant", 3),
    ("delightful", 3),
    ("excellent", 3),
    ("fantastic", 3),
    ("flawless", 3),
    ("incredible", 3),
    ("love", 3),
    ("loved", 3),
    ("magnificent", 3),
    ("outstanding", 3),
    ("perfect", 3),
    ("superb", 3),
    ("wonderful", 3),
];

/// Tokens that flip the sign of the next scored word.
pub const NEGATORS: &[&str] = &[
    "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "nowhere",
];

/// Tokens that raise the magnitude of the next scored word by one.
pub const INTENSIFIERS: &[&str] = &[
    "extremely",
    "incredibly",
    "really",
    "so",
    "too",
    "totally",
    "truly",
    "very",
];

/// Whether `token` negates what follows (`not`, `never`, `isn't`, ...).
#[must_use]
pub fn is_negator(token: &str) -> bool {
    token.ends_with("n't") || NEGATORS.contains(&token)
}

/// Whether `token` intensifies what follows.
#[must_use]
pub fn is_intensifier(token: &str) -> bool {
    INTENSIFIERS.contains(&token)
}
