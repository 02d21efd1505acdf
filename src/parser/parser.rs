use crate::errors::errors::{ErrorLog, FrontendError, SyntaxError};
use crate::grammar::tables::GrammarTables;
use crate::grammar::{END_MARKER, EPSILON, START_SYMBOL};
use crate::scanner::scanner::{NextToken, Scanner};

use super::classify::{leaf_text, terminal_class};
use super::tree::TreeNode;

/// Expansion depth at which a run is aborted instead of risking stack
/// exhaustion on pathologically nested input. Each level costs one
/// `expand` frame, so the limit must stay far below what a 2 MiB thread
/// stack can hold; 256 levels still covers ~40 levels of expression
/// nesting.
const MAX_EXPANSION_DEPTH: usize = 256;

/// What a run produced: the parse tree (partial on the fatal paths), the
/// syntax error log, and the fatal condition if one ended the run early.
pub struct ParseOutcome {
    pub tree: TreeNode,
    pub errors: ErrorLog<SyntaxError>,
    pub fatal: Option<FrontendError>,
}

/// How one nonterminal expansion ended.
enum Expansion {
    /// The nonterminal's finished subtree, ready to attach.
    Subtree(TreeNode),
    /// FOLLOW-based synchronization: nothing to attach, lookahead intact.
    Synced,
    /// Fatal interruption; carries the partial node of each unwinding
    /// frame so the flushed tree keeps everything matched so far.
    Halted(Option<TreeNode>),
}

/// The predictive parser.
///
/// Drives the scanner one token at a time (pull model), keeps a single
/// lookahead terminal, and walks the grammar through the PREDICT table.
/// Every mismatch is recovered locally except end-of-input starvation,
/// which halts the run after recording `Unexpected EOF`.
pub struct Parser<'t> {
    scanner: Scanner,
    tables: &'t GrammarTables,
    /// Grammar terminal the current token maps to, or the end marker.
    lookahead: String,
    /// Printable leaf form of the current token.
    leaf: String,
    /// Line of the current token; syntax errors are logged against it.
    line: u32,
    errors: ErrorLog<SyntaxError>,
    fatal: Option<FrontendError>,
}

impl<'t> Parser<'t> {
    pub fn new(scanner: Scanner, tables: &'t GrammarTables) -> Self {
        Parser {
            scanner,
            tables,
            lookahead: String::new(),
            leaf: String::new(),
            line: 0,
            errors: ErrorLog::new(),
            fatal: None,
        }
    }

    /// Parses the whole input.
    ///
    /// Primes the lookahead, expands the start symbol, and attaches the
    /// end-marker leaf under the root unless the run was halted. The
    /// scanner is handed back so its collected listing, identifier table
    /// and lexical error log can be reported.
    pub fn parse(mut self) -> (ParseOutcome, Scanner) {
        self.advance();
        let expansion = self.expand(START_SYMBOL, 0);
        let mut tree = match expansion {
            Expansion::Subtree(node) => node,
            Expansion::Synced => TreeNode::new(START_SYMBOL),
            Expansion::Halted(partial) => partial.unwrap_or_else(|| TreeNode::new(START_SYMBOL)),
        };
        if self.fatal.is_none() {
            tree.push(TreeNode::new(END_MARKER));
        }
        (
            ParseOutcome {
                tree,
                errors: self.errors,
                fatal: self.fatal,
            },
            self.scanner,
        )
    }

    /// Refreshes the lookahead from the scanner.
    fn advance(&mut self) {
        match self.scanner.next_token() {
            NextToken::Token(token) => {
                self.line = token.line;
                self.lookahead = terminal_class(&token);
                self.leaf = leaf_text(&token);
            }
            NextToken::EndOfInput => {
                self.lookahead = END_MARKER.to_string();
                self.leaf = END_MARKER.to_string();
            }
        }
    }

    /// Expands one nonterminal under the current lookahead.
    ///
    /// On a PREDICT miss the three recovery tiers apply in order: if the
    /// lookahead is in FOLLOW of the nonterminal the whole expansion is
    /// abandoned without consuming input; at the end marker the run halts
    /// with `Unexpected EOF`; otherwise the lookahead is reported illegal,
    /// discarded, and the same nonterminal is retried. Inside a successful
    /// expansion a mismatched terminal is reported missing and skipped
    /// without resynchronizing.
    fn expand(&mut self, symbol: &str, depth: usize) -> Expansion {
        if depth >= MAX_EXPANSION_DEPTH {
            self.fatal = Some(FrontendError::DepthLimitExceeded);
            return Expansion::Halted(None);
        }
        let tables = self.tables;
        let rhs = loop {
            if let Some(rhs) = tables.predict_entry(symbol, &self.lookahead) {
                break rhs;
            }
            if tables.follow_contains(symbol, &self.lookahead) {
                self.errors
                    .log(self.line, SyntaxError::Missing(symbol.to_string()));
                return Expansion::Synced;
            }
            if self.lookahead == END_MARKER {
                self.errors.log(self.line, SyntaxError::UnexpectedEof);
                self.fatal = Some(FrontendError::UnexpectedEof);
                return Expansion::Halted(None);
            }
            self.errors
                .log(self.line, SyntaxError::Illegal(self.lookahead.clone()));
            self.advance();
        };

        let mut node = TreeNode::new(symbol);
        if rhs.len() == 1 && rhs[0] == EPSILON {
            node.push(TreeNode::new("epsilon"));
            return Expansion::Subtree(node);
        }
        for grammar_symbol in rhs {
            if !tables.is_terminal(grammar_symbol) {
                match self.expand(grammar_symbol, depth + 1) {
                    Expansion::Subtree(child) => node.push(child),
                    Expansion::Synced => {}
                    Expansion::Halted(partial) => {
                        if let Some(child) = partial {
                            node.push(child);
                        }
                        return Expansion::Halted(Some(node));
                    }
                }
            } else if self.lookahead == *grammar_symbol {
                node.push(TreeNode::new(self.leaf.clone()));
                if self.lookahead != END_MARKER {
                    self.advance();
                }
            } else {
                self.errors
                    .log(self.line, SyntaxError::Missing(grammar_symbol.clone()));
            }
        }
        Expansion::Subtree(node)
    }
}
