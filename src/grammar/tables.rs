use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::FrontendError;

use super::follow::FOLLOW_SETS;

lazy_static! {
    static ref RULE_LINE: Regex = Regex::new(r"^(\d+)\t(\S+) ⟶ (.+)$").unwrap();
}

/// The loaded grammar: production texts, the PREDICT table and the FOLLOW
/// sets. Built once by [`GrammarTables::load`] before parsing begins and
/// read-only afterward; the parser takes it by reference and cannot run
/// without one.
pub struct GrammarTables {
    rules: Vec<String>,
    predict: HashMap<String, HashMap<String, Vec<String>>>,
    follow: HashMap<&'static str, &'static [&'static str]>,
}

impl GrammarTables {
    /// Loads the line-aligned rule/predict resource pair.
    ///
    /// Each rule line reads `<index>\t<LHS> ⟶ <rhs symbols>` with 1-based
    /// indices in file order; the predict line of the same position lists
    /// the terminals for which that production is the PREDICT entry of its
    /// left-hand side, comma-separated.
    pub fn load(rules_text: &str, predict_text: &str) -> Result<Self, FrontendError> {
        if rules_text.lines().count() != predict_text.lines().count() {
            return Err(FrontendError::MisalignedTables);
        }

        let mut rules = Vec::new();
        let mut predict: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        for (offset, (rule_line, predict_line)) in
            rules_text.lines().zip(predict_text.lines()).enumerate()
        {
            let line = offset + 1;
            let caps = RULE_LINE
                .captures(rule_line)
                .ok_or(FrontendError::MalformedRule { line })?;
            let index: usize = caps[1]
                .parse()
                .map_err(|_| FrontendError::MalformedRule { line })?;
            if index != line {
                return Err(FrontendError::MalformedRule { line });
            }
            let lhs = caps[2].to_string();
            let rhs: Vec<String> = caps[3].split_whitespace().map(str::to_string).collect();
            if rhs.is_empty() {
                return Err(FrontendError::MalformedRule { line });
            }

            // Terminals are separated by `, `; `,` itself is a terminal,
            // so splitting on the bare comma would shred it.
            let entries = predict.entry(lhs.clone()).or_default();
            for terminal in predict_line.trim().split(", ") {
                if terminal.is_empty() {
                    return Err(FrontendError::MalformedPredict { line });
                }
                entries.insert(terminal.to_string(), rhs.clone());
            }
            rules.push(format!("{} ⟶ {}", lhs, rhs.join(" ")));
        }
        if rules.is_empty() {
            return Err(FrontendError::EmptyTables);
        }

        Ok(GrammarTables {
            rules,
            predict,
            follow: FOLLOW_SETS.clone(),
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Production text for rule `index` (1-based). Diagnostic use only.
    pub fn rule_text(&self, index: usize) -> Option<&str> {
        let offset = index.checked_sub(1)?;
        self.rules.get(offset).map(String::as_str)
    }

    /// The right-hand side to expand `nonterminal` with under `terminal`,
    /// if the PREDICT table has an entry.
    pub fn predict_entry(&self, nonterminal: &str, terminal: &str) -> Option<&[String]> {
        self.predict.get(nonterminal)?.get(terminal).map(Vec::as_slice)
    }

    /// A symbol is terminal exactly when it has no FOLLOW entry.
    pub fn is_terminal(&self, symbol: &str) -> bool {
        !self.follow.contains_key(symbol)
    }

    pub fn follow_contains(&self, nonterminal: &str, terminal: &str) -> bool {
        self.follow
            .get(nonterminal)
            .map_or(false, |set| set.contains(&terminal))
    }
}
