//! Built-in survey: the irregular-verbs familiarity pretest.
//!
//! The word list intentionally contains repeated entries; the second
//! presentation of a word probes how consistently it is rated.

use crate::model::{SurveyDef, WordList};

/// Instructional text shown before the first word of the built-in survey.
pub const BUILTIN_INSTRUCTIONS: &str = "\
Hello, and thank you for taking part in this pretest.

You will be shown a series of English words, one at a time. For each word,
please rate how familiar it feels to you on a scale from 1 to 7:

    1 = I do not know this word at all
    7 = I know this word extremely well

There are no right or wrong answers; go with your first impression. Some
words appear more than once — that is intentional, so please rate each
presentation on its own. The whole run takes about ten minutes.";

/// The irregular-verb word pool, in presentation order, repeats included.
const IRREGULAR_VERBS: &[&str] = &[
    "forgot", "blew", "shook", "dealt", "kept", "sent", "write", "freeze",
    "spoke", "lay", "heard", "understood", "fight", "drank", "steal", "built",
    "chose", "bring", "wore", "swam", "lost", "forbade", "teach", "threw",
    "leave", "sold", "took", "overcame", "flew", "know", "swore", "found",
    "hung", "held", "rode", "speak", "spun", "grow", "sang", "rang",
    "struck", "sleep", "find", "give", "forgive", "left", "bought", "spend",
    "bend", "paid", "came", "swim", "began", "told", "swept", "drive",
    "hear", "spun", "feel", "wore", "made", "fought", "run", "taught",
    "threw", "stick", "broke", "choose", "understood", "felt", "shoot", "knew",
    "grew", "thought", "drew", "gave", "said", "took", "tear", "catch",
    "forget", "became", "paid", "spilt", "bent", "kept", "come", "tell",
    "buy", "caught", "began", "mistake", "dealt", "blew", "drank", "became",
    "build", "drive", "learn", "made", "shake", "sank", "see", "ring",
    "sell", "mean", "rode", "lent", "ran", "lose", "meant", "pay",
    "sent", "sank", "shoot", "learnt", "sang", "saw", "mistook", "sat",
    "sing", "break", "bring", "sit", "spilt", "shook", "slid", "spent",
    "wake", "think", "slide", "sweep", "tore", "woke", "wrote", "lay",
    "leave", "spin", "say", "lend", "stick", "freeze", "hold", "hang",
    "steal", "ride", "understand", "wear", "overcome", "seek", "swing", "teach",
    "stand", "sought", "stood", "swung", "sink", "forgive", "feed", "send",
];

impl SurveyDef {
    /// The compiled-in default survey, used when no survey file is given.
    pub fn builtin() -> Self {
        SurveyDef {
            id: "irregular-verbs".into(),
            name: "English Vocabulary Familiarity Rating".into(),
            instructions: BUILTIN_INSTRUCTIONS.into(),
            words: WordList::new(IRREGULAR_VERBS.iter().copied()),
        }
    }
}
