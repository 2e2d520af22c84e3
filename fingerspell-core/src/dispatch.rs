//! First-match letter dispatch over an ordered set of classifiers.

use crate::classifier::{LetterA, LetterB, LetterClassifier};
use crate::features::FeatureSet;

/// Capacity of a dispatcher, one slot per letter of the alphabet
pub const MAX_LETTERS: usize = 26;

/// Built-in letters in priority order
pub const REFERENCE_ALPHABET: [&dyn LetterClassifier; 2] = [&LetterA, &LetterB];

const _: () = assert!(REFERENCE_ALPHABET.len() <= MAX_LETTERS);

fn first_match<'a, I>(classifiers: I, features: &FeatureSet) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a dyn LetterClassifier>,
{
    let letter = classifiers
        .into_iter()
        .find(|classifier| classifier.matches(features))
        .map(|classifier| classifier.letter());

    if let Some(letter) = letter {
        log::trace!("{} hand matched letter {}", features.handedness, letter);
    }
    letter
}

/// Letter for this frame using the built-in alphabet, or `""` when nothing matches
pub fn letter_detected(features: &FeatureSet) -> &'static str {
    first_match(REFERENCE_ALPHABET, features).unwrap_or("")
}

/// Evaluates registered classifiers in registration order; the first match wins.
///
/// When two classifiers both accept a frame the earlier one is reported, so
/// overlapping letters need to be registered most specific first.
pub struct Dispatcher<'a> {
    classifiers: heapless::Vec<&'a dyn LetterClassifier, MAX_LETTERS>,
}

impl<'a> Dispatcher<'a> {
    pub fn new() -> Self {
        Self {
            classifiers: heapless::Vec::new(),
        }
    }

    /// Append a classifier with the lowest priority so far.
    /// Hands the classifier back when the dispatcher is full.
    pub fn register(
        &mut self,
        classifier: &'a dyn LetterClassifier,
    ) -> Result<(), &'a dyn LetterClassifier> {
        self.classifiers.push(classifier)
    }

    pub fn classify(&self, features: &FeatureSet) -> Option<&'static str> {
        first_match(self.classifiers.iter().copied(), features)
    }

    /// Same as [`Dispatcher::classify`] with `""` standing for no letter
    pub fn letter_detected(&self, features: &FeatureSet) -> &'static str {
        self.classify(features).unwrap_or("")
    }

    pub fn letters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classifiers.iter().map(|classifier| classifier.letter())
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

impl Dispatcher<'static> {
    /// Dispatcher over the built-in alphabet (A, then B)
    pub fn reference() -> Self {
        let mut dispatcher = Self::new();
        for classifier in REFERENCE_ALPHABET {
            if let Err(rejected) = dispatcher.register(classifier) {
                log::error!("No room for letter {} in the reference dispatcher", rejected.letter());
            }
        }
        dispatcher
    }
}

impl Default for Dispatcher<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.letters()).finish()
    }
}
