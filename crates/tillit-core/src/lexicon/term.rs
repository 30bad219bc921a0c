use regex::Regex;

use crate::errors::LexiconError;

/// Which side of a pair, if any, embeds the other ("responsible" inside
/// "not responsible").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Disjoint,
    PositiveInNegative,
    NegativeInPositive,
}

/// Which terms of a pair occur in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    pub positive: bool,
    pub negative: bool,
}

impl Presence {
    pub fn any(&self) -> bool {
        self.positive || self.negative
    }

    /// One text carries one term and the other text carries its opposite.
    pub fn opposes(&self, other: &Presence) -> bool {
        (self.positive && other.negative) || (self.negative && other.positive)
    }
}

/// A compiled opposite-term pair.
#[derive(Debug, Clone)]
pub struct OppositePair {
    positive: String,
    negative: String,
    positive_re: Regex,
    negative_re: Regex,
    nesting: Nesting,
}

impl OppositePair {
    pub(crate) fn compile(
        index: usize,
        positive: &str,
        negative: &str,
    ) -> Result<Self, LexiconError> {
        let positive = positive.trim().to_lowercase();
        let negative = negative.trim().to_lowercase();
        if positive.is_empty() || negative.is_empty() {
            return Err(LexiconError::EmptyTerm { index });
        }
        if positive == negative {
            return Err(LexiconError::IdenticalTerms {
                index,
                term: positive,
            });
        }
        let positive_re = term_regex(index, &positive)?;
        let negative_re = term_regex(index, &negative)?;
        let nesting = if positive_re.is_match(&negative) {
            Nesting::PositiveInNegative
        } else if negative_re.is_match(&positive) {
            Nesting::NegativeInPositive
        } else {
            Nesting::Disjoint
        };
        Ok(Self {
            positive,
            negative,
            positive_re,
            negative_re,
            nesting,
        })
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    pub fn negative(&self) -> &str {
        &self.negative
    }

    /// Term occurrences in `text`. A term occurring only inside its own
    /// opposite phrase does not count.
    pub fn presence(&self, text: &str) -> Presence {
        match self.nesting {
            Nesting::Disjoint => Presence {
                positive: self.positive_re.is_match(text),
                negative: self.negative_re.is_match(text),
            },
            Nesting::PositiveInNegative => {
                let negative = self.negative_re.is_match(text);
                let masked = self.negative_re.replace_all(text, " ");
                Presence {
                    positive: self.positive_re.is_match(&masked),
                    negative,
                }
            }
            Nesting::NegativeInPositive => {
                let positive = self.positive_re.is_match(text);
                let masked = self.positive_re.replace_all(text, " ");
                Presence {
                    positive,
                    negative: self.negative_re.is_match(&masked),
                }
            }
        }
    }

    /// One term appears in `a` and the opposite term in `b`, or vice versa.
    pub fn is_split(&self, a: &str, b: &str) -> bool {
        self.presence(a).opposes(&self.presence(b))
    }
}

/// Case-insensitive whole-term matcher. Boundaries are any non-alphanumeric
/// character, so terms like "100%" match without `\b` semantics.
fn term_regex(index: usize, term: &str) -> Result<Regex, LexiconError> {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let pattern = format!(r"(?i)(?:^|[^\p{{L}}\p{{N}}]){body}(?:$|[^\p{{L}}\p{{N}}])");
    Regex::new(&pattern).map_err(|e| LexiconError::Pattern {
        index,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(p: &str, n: &str) -> OppositePair {
        OppositePair::compile(0, p, n).unwrap()
    }

    #[test]
    fn nested_positive_is_masked() {
        let p = pair("responsible", "not responsible");
        let presence = p.presence("We are not responsible for this");
        assert!(presence.negative);
        assert!(!presence.positive);
        assert!(!p.is_split("not responsible", "Not Responsible"));
        assert!(p.is_split("they are responsible", "we are not responsible"));
    }

    #[test]
    fn prefix_words_do_not_match() {
        let p = pair("legal", "illegal");
        let presence = p.presence("This fee is illegal");
        assert!(presence.negative);
        assert!(!presence.positive);
    }

    #[test]
    fn percent_terms_match_on_boundaries() {
        let p = pair("100%", "0%");
        assert!(p.presence("we are 100% sure").positive);
        assert!(!p.presence("we are 100% sure").negative);
        assert!(p.presence("a 0% chance").negative);
    }
}
