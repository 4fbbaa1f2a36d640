//! English singular/plural inflection.
//!
//! Rule tables in the usual Rails order: uncountable words, then irregular
//! words, then suffix rules (first match wins). Compound names such as
//! `blog_post` inflect only their last word.

use construct_core::application::ports::Inflector;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
    "metadata",
];

// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("move", "moves"),
    ("sex", "sexes"),
    ("zombie", "zombies"),
];

// (suffix, replacement); the suffix is cut off and the replacement appended.
const PLURAL: &[(&str, &str)] = &[
    ("quiz", "quizzes"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("index", "indices"),
    ("alias", "aliases"),
    ("status", "statuses"),
    ("octopus", "octopi"),
    ("virus", "viri"),
    ("axis", "axes"),
    ("crisis", "crises"),
    ("bus", "buses"),
    ("buffalo", "buffaloes"),
    ("tomato", "tomatoes"),
    ("potato", "potatoes"),
    ("hive", "hives"),
    ("lf", "lves"),
    ("rf", "rves"),
    ("fe", "ves"),
    ("sh", "shes"),
    ("ch", "ches"),
    ("ss", "sses"),
    ("x", "xes"),
    ("s", "s"),
];

const SINGULAR: &[(&str, &str)] = &[
    ("quizzes", "quiz"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("indices", "index"),
    ("aliases", "alias"),
    ("statuses", "status"),
    ("octopi", "octopus"),
    ("viri", "virus"),
    ("axes", "axis"),
    ("crises", "crisis"),
    ("buses", "bus"),
    ("shoes", "shoe"),
    ("movies", "movie"),
    ("hives", "hive"),
    ("oes", "o"),
    ("lves", "lf"),
    ("rves", "rf"),
    ("ives", "ife"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("sses", "ss"),
    ("xes", "x"),
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("s", ""),
];

/// Rule-based English [`Inflector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    pub fn new() -> Self {
        Self
    }
}

impl Inflector for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        inflect_last_word(word, |w| {
            if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == w) {
                return (*singular).to_string();
            }
            if let Some(stem) = y_plural_stem(w) {
                return format!("{stem}y");
            }
            apply_suffix_rules(w, SINGULAR)
        })
    }

    fn pluralize(&self, word: &str) -> String {
        inflect_last_word(word, |w| {
            if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == w) {
                return (*plural).to_string();
            }
            if IRREGULAR.iter().any(|(_, p)| *p == w) {
                return w.to_string();
            }
            if let Some(stem) = consonant_y_stem(w) {
                return format!("{stem}ies");
            }
            let plural = apply_suffix_rules(w, PLURAL);
            if plural == w && !w.ends_with('s') {
                format!("{w}s")
            } else {
                plural
            }
        })
    }
}

fn inflect_last_word(word: &str, inflect: impl Fn(&str) -> String) -> String {
    let split = word.rfind(['_', '-', ' ']).map_or(0, |i| i + 1);
    let (head, last) = word.split_at(split);

    if last.is_empty() || UNCOUNTABLE.contains(&last.to_lowercase().as_str()) {
        return word.to_string();
    }

    format!("{head}{}", inflect(last))
}

fn apply_suffix_rules(word: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .find_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .map(|stem| format!("{stem}{replacement}"))
        })
        .unwrap_or_else(|| word.to_string())
}

// `category` -> `categor`. A vowel before the `y` keeps it (`day`), except after `qu`.
fn consonant_y_stem(word: &str) -> Option<&str> {
    let stem = word.strip_suffix('y')?;
    let before = stem.chars().last()?;
    if !"aeiou".contains(before) || stem.ends_with("qu") {
        Some(stem)
    } else {
        None
    }
}

// `categories` -> `categor`. `movies` goes through the suffix table instead.
fn y_plural_stem(word: &str) -> Option<&str> {
    if word == "movies" {
        return None;
    }
    let stem = word.strip_suffix("ies")?;
    (!stem.is_empty()).then_some(stem)
}
