use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

use crate::{
    ast::ast::{Constant, Link, Node},
    errors::errors::{Error, ErrorImpl, ErrorPosition},
    get_line_at_position,
    parser::parser::parse_region,
    Location, MK_LINK, MK_RULE,
};

use super::{
    indentation::{indent, IndentTracker},
    literals::{decode_string, find_string_end, parse_number},
    tokens::{Internal, Token, INFIX_KEYWORDS},
};

/// Parentheses and indented blocks nest by recursion; past this depth the
/// parse fails instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A rule handler either produces an item, produces nothing (the scanner
/// keeps going) or fails the whole parse.
pub type RuleHandler = fn(&mut Lexer, &Lexeme) -> Result<Option<Token>, Error>;

pub struct Rule {
    line_start: bool,
    regex: Regex,
    handler: RuleHandler,
}

lazy_static! {
    /// Tried in order; the first rule whose line-start flag equals the
    /// scanner's and whose pattern matches wins.
    static ref RULES: Vec<Rule> = vec![
        MK_RULE!(true, r" *", indent),
        MK_RULE!(false, r"[^\S\n]+|\s*#[^\n]*", skip_handler),
        MK_RULE!(
            false,
            r"(?i:[+-]?(?:0b[01]+|0o[0-7]+|0x[0-9a-f]+|[0-9]+(?:\.[0-9]+)?(?:e[+-]?[0-9]+)?j?))",
            number_handler
        ),
        MK_RULE!(false, r#"([br]*)('''|"""|"|')"#, string_handler),
        MK_RULE!(
            false,
            r"(\w+'*)|(\*+):|([!$%&*+\-./:<=>?@\\^|~;]+|,+)|\s*(\n)|`(\w+'*)`",
            link_handler
        ),
        MK_RULE!(false, r"\(", open_region_handler),
        MK_RULE!(false, r"\)|$", end_handler),
        MK_RULE!(false, r#"['"]"#, string_error_handler),
        MK_RULE!(false, r"(?s:.)", error_handler),
    ];
}

/// A successful rule match, with offsets translated back into the buffer.
pub struct Lexeme<'a> {
    captures: Captures<'a>,
    start: usize,
}

impl<'a> Lexeme<'a> {
    pub fn text(&self) -> &'a str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.text().len()
    }

    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    pub fn group_end(&self, index: usize) -> Option<usize> {
        self.captures.get(index).map(|m| self.start + m.end())
    }
}

/// Parse session state: the cursor, the indentation stack and the pushback
/// queue. Nothing here is shared between sessions.
pub struct Lexer {
    source: Rc<str>,
    pub(crate) offset: usize,
    line_start: bool,
    file: Rc<String>,
    pub(crate) indentation: IndentTracker,
    queue: VecDeque<Token>,
    line_cache: Option<(usize, Rc<str>)>,
    depth: usize,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<string>"))
        };

        Lexer {
            source: Rc::from(source),
            offset: 0,
            line_start: true,
            file: file_name,
            indentation: IndentTracker::default(),
            queue: VecDeque::new(),
            line_cache: None,
            depth: 0,
        }
    }

    /// Pulls the next item, serving pushed-back items first.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Ok(token);
            }

            let source = Rc::clone(&self.source);
            let remaining = &source[self.offset..];
            let found = RULES
                .iter()
                .filter(|rule| rule.line_start == self.line_start)
                .find_map(|rule| rule.regex.captures(remaining).map(|captures| (rule, captures)));

            // The catch-all rules cover every character and the end of input,
            // so this only fails if the table itself is broken.
            let Some((rule, captures)) = found else {
                return Err(self.error(
                    ErrorImpl::InvalidInput {
                        token: remaining.chars().take(1).collect(),
                    },
                    self.offset,
                ));
            };

            let lexeme = Lexeme {
                captures,
                start: self.offset,
            };
            self.offset = lexeme.end();
            self.line_start = lexeme.text().ends_with('\n');

            if let Some(token) = (rule.handler)(self, &lexeme)? {
                trace!(offset = lexeme.start(), token = %token, "scanned");
                return Ok(token);
            }
        }
    }

    /// Puts an item back so that the next request returns it.
    pub fn push_front(&mut self, token: Token) {
        self.queue.push_front(token);
    }

    /// Counts one more open region. `opened_at` is the offset of whatever
    /// opened it, reported if the limit is exceeded.
    pub fn enter_region(&mut self, opened_at: usize) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::TooDeeplyNested, opened_at));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_region(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Builds a location, sharing the line text between tokens on the same line.
    pub fn location(&mut self, start: usize, end: usize) -> Location {
        let line_begin = self.source[..start].rfind('\n').map_or(0, |i| i + 1);

        let first_line = match &self.line_cache {
            Some((cached, line)) if *cached == line_begin => Rc::clone(line),
            _ => {
                let line_end = self.source[line_begin..]
                    .find('\n')
                    .map_or(self.source.len(), |i| line_begin + i);
                let line: Rc<str> = Rc::from(&self.source[line_begin..line_end]);
                self.line_cache = Some((line_begin, Rc::clone(&line)));
                line
            }
        };

        Location {
            start,
            end,
            file: Rc::clone(&self.file),
            first_line,
        }
    }

    /// Resolves `at` to line and column and wraps `error_impl` with it.
    pub fn error(&self, error_impl: ErrorImpl, at: usize) -> Error {
        let (line, text, column) = get_line_at_position(&self.source, at);

        Error::new(
            error_impl,
            ErrorPosition {
                file: Rc::clone(&self.file),
                offset: at,
                line,
                column,
                text,
            },
        )
    }

    /// The failure for a structural marker its region did not accept.
    pub fn unexpected(&self, marker: &Internal) -> Error {
        let error_impl = if !marker.value.is_empty() {
            ErrorImpl::UnexpectedBlockDelimiter {
                token: marker.value.clone(),
            }
        } else if self.at_eof() {
            ErrorImpl::UnexpectedEof
        } else {
            ErrorImpl::UnexpectedDedent
        };

        self.error(error_impl, marker.start)
    }
}

fn skip_handler(_lexer: &mut Lexer, _lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    Ok(None)
}

fn number_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    let value = parse_number(lexeme.text()).map_err(|message| {
        lexer.error(
            ErrorImpl::InvalidLiteral {
                token: lexeme.text().to_string(),
                message,
            },
            lexeme.start(),
        )
    })?;

    let location = lexer.location(lexeme.start(), lexer.offset);
    Ok(Some(Token::Node(Node::Constant(Constant::new(value, location)))))
}

fn string_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    let prefix = lexeme.group(1).unwrap_or("");
    let quote = lexeme.group(2).unwrap_or("\"");
    let quote_start = lexeme.start() + prefix.len();

    // An unclosed triple quote is read again as an empty single-quoted string.
    let mut delimiter = quote;
    let mut body_start = lexeme.end();
    let mut body_end = find_string_end(lexer.source(), body_start, delimiter);
    if body_end.is_none() && quote.len() == 3 {
        delimiter = &quote[..1];
        body_start = quote_start + 1;
        body_end = find_string_end(lexer.source(), body_start, delimiter);
    }

    let Some(body_end) = body_end else {
        return Err(lexer.error(ErrorImpl::UnterminatedString, quote_start));
    };
    lexer.offset = body_end + delimiter.len();

    let body = &lexer.source()[body_start..body_end];
    let value = decode_string(prefix, body).map_err(|message| {
        lexer.error(
            ErrorImpl::InvalidLiteral {
                token: lexer.source()[lexeme.start()..body_end + delimiter.len()].to_string(),
                message,
            },
            lexeme.start(),
        )
    })?;

    let location = lexer.location(lexeme.start(), lexer.offset);
    Ok(Some(Token::Node(Node::Constant(Constant::new(value, location)))))
}

fn link_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    let (name, infix) = if let Some(word) = lexeme.group(1) {
        (word, INFIX_KEYWORDS.contains(word))
    } else if let Some(stars) = lexeme.group(2) {
        // The colon is left for the keyword-argument operator.
        lexer.offset = lexeme.group_end(2).unwrap_or(lexer.offset);
        (stars, false)
    } else if let Some(symbol) = lexeme.group(3) {
        (symbol, true)
    } else if lexeme.group(4).is_some() {
        ("\n", true)
    } else {
        (lexeme.group(5).unwrap_or(""), true)
    };

    let location = lexer.location(lexeme.start(), lexer.offset);
    Ok(Some(Token::Node(MK_LINK!(name, infix, location))))
}

fn open_region_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    let region = parse_region(lexer, lexeme.start(), lexeme.end(), &[")"], false)?;
    Ok(Some(Token::Node(region)))
}

fn end_handler(_lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    Ok(Some(Token::Internal(Internal::new(lexeme.text(), lexeme.start()))))
}

fn string_error_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    Err(lexer.error(ErrorImpl::UnterminatedString, lexeme.start()))
}

fn error_handler(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    Err(lexer.error(
        ErrorImpl::InvalidInput {
            token: lexeme.text().to_string(),
        },
        lexeme.start(),
    ))
}
