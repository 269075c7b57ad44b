//! Suffix-stripping stemmers.
//!
//! [`porter_stem`] is the classical Porter (1980) algorithm as published in the
//! reference implementation, including its `bli -> ble` and `logi -> log`
//! departures from the paper. The Snowball English stemmer is available
//! through [`StemmerKind::Snowball`].

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StemmerKind {
    #[default]
    Porter,
    Snowball,
}

impl std::str::FromStr for StemmerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "porter" => Ok(StemmerKind::Porter),
            "snowball" | "porter2" => Ok(StemmerKind::Snowball),
            other => Err(format!("unknown stemmer '{other}' (expected porter or snowball)")),
        }
    }
}

impl TryFrom<String> for StemmerKind {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> { s.parse() }
}

pub enum TermStemmer {
    Porter,
    Snowball(Stemmer),
}

impl TermStemmer {
    pub fn new(kind: StemmerKind) -> Self {
        match kind {
            StemmerKind::Porter => TermStemmer::Porter,
            StemmerKind::Snowball => TermStemmer::Snowball(Stemmer::create(Algorithm::English)),
        }
    }

    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            TermStemmer::Porter => porter_stem(word),
            TermStemmer::Snowball(s) => s.stem(word),
        }
    }
}

/// Stem a lowercase word with the classical Porter algorithm.
///
/// Words of two characters or fewer are returned unchanged, as are words with
/// non-ASCII characters, which the normalizer never produces.
pub fn porter_stem(word: &str) -> Cow<'_, str> {
    if word.len() <= 2 || !word.is_ascii() {
        return Cow::Borrowed(word);
    }
    let mut p = Porter::new(word);
    p.run();
    let out = &p.b[..=p.k as usize];
    if out == word.as_bytes() {
        Cow::Borrowed(word)
    } else {
        // only ASCII bytes are ever written
        Cow::Owned(out.iter().map(|&c| c as char).collect())
    }
}

/// Working buffer. `k` is the index of the last live byte and `j` the index
/// just before a matched suffix; both may be -1 once a suffix covers the word.
struct Porter {
    b: Vec<u8>,
    k: isize,
    j: isize,
}

impl Porter {
    fn new(word: &str) -> Self {
        let b = word.as_bytes().to_vec();
        let k = b.len() as isize - 1;
        Self { b, k, j: 0 }
    }

    fn at(&self, i: isize) -> u8 { self.b[i as usize] }

    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in b[0..=j].
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j { return n; }
            if !self.cons(i) { break; }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j { return n; }
                if self.cons(i) { break; }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j { return n; }
                if !self.cons(i) { break; }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    fn double_c(&self, j: isize) -> bool {
        j >= 1 && self.at(j) == self.at(j - 1) && self.cons(j)
    }

    /// consonant-vowel-consonant ending at i, last consonant not w, x or y
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), b'w' | b'x' | b'y')
    }

    fn ends(&mut self, s: &str) -> bool {
        let s = s.as_bytes();
        let len = s.len() as isize;
        if len > self.k + 1 { return false; }
        let start = (self.k - len + 1) as usize;
        if &self.b[start..=self.k as usize] != s { return false; }
        self.j = self.k - len;
        true
    }

    fn set_to(&mut self, s: &str) {
        self.b.truncate((self.j + 1) as usize);
        self.b.extend_from_slice(s.as_bytes());
        self.k = self.b.len() as isize - 1;
    }

    fn replace_if_measured(&mut self, s: &str) {
        if self.m() > 0 { self.set_to(s); }
    }

    /// Try each (suffix, replacement) in order; the first suffix that matches
    /// stops the search whether or not the replacement fires.
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, rep) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(rep);
                return;
            }
        }
    }

    fn run(&mut self) {
        self.step1ab();
        if self.k > 0 {
            self.step1c();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
        }
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }
        if self.ends("eed") {
            if self.m() > 0 { self.k -= 1; }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_c(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), b'l' | b's' | b'z') {
                    self.k += 1;
                }
            } else {
                self.j = self.k;
                if self.m() == 1 && self.cvc(self.k) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffixes to single ones.
    fn step2(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k - 1) {
            b'a' => &[("ational", "ate"), ("tional", "tion")],
            b'c' => &[("enci", "ence"), ("anci", "ance")],
            b'e' => &[("izer", "ize")],
            b'l' => &[("bli", "ble"), ("alli", "al"), ("entli", "ent"), ("eli", "e"), ("ousli", "ous")],
            b'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            b's' => &[("alism", "al"), ("iveness", "ive"), ("fulness", "ful"), ("ousness", "ous")],
            b't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            b'g' => &[("logi", "log")],
            _ => return,
        };
        self.replace_first(rules);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k) {
            b'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            b'i' => &[("iciti", "ic")],
            b'l' => &[("ical", "ic"), ("ful", "")],
            b's' => &[("ness", "")],
            _ => return,
        };
        self.replace_first(rules);
    }

    /// Drop -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        let matched = match self.at(self.k - 1) {
            b'a' => self.ends("al"),
            b'c' => self.ends("ance") || self.ends("ence"),
            b'e' => self.ends("er"),
            b'i' => self.ends("ic"),
            b'l' => self.ends("able") || self.ends("ible"),
            b'n' => self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent"),
            b'o' => {
                (self.ends("ion") && self.j >= 0 && matches!(self.at(self.j), b's' | b't'))
                    || self.ends("ou")
            }
            b's' => self.ends("ism"),
            b't' => self.ends("ate") || self.ends("iti"),
            b'u' => self.ends("ous"),
            b'v' => self.ends("ive"),
            b'z' => self.ends("ize"),
            _ => false,
        };
        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Final -e and -ll.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_c(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_pass_through() {
        assert_eq!(porter_stem("as"), "as");
        assert_eq!(porter_stem("a"), "a");
        assert_eq!(porter_stem(""), "");
    }

    #[test]
    fn snowball_is_selectable() {
        let s = TermStemmer::new(StemmerKind::Snowball);
        assert_eq!(s.stem("running"), "run");
    }

    #[test]
    fn parses_kind() {
        assert_eq!("Porter".parse::<StemmerKind>().unwrap(), StemmerKind::Porter);
        assert_eq!("snowball".parse::<StemmerKind>().unwrap(), StemmerKind::Snowball);
        assert_eq!("porter2".parse::<StemmerKind>().unwrap(), StemmerKind::Snowball);
        assert!("lancaster".parse::<StemmerKind>().is_err());
    }

    #[test]
    fn serde_names_match_parser() {
        for name in ["porter", "snowball", "porter2", "Snowball"] {
            let from_json: StemmerKind = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(from_json, name.parse::<StemmerKind>().unwrap(), "{name}");
        }
        assert!(serde_json::from_str::<StemmerKind>("\"lancaster\"").is_err());
        assert_eq!(serde_json::to_string(&StemmerKind::Snowball).unwrap(), "\"snowball\"");
    }
}
