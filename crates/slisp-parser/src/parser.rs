//! Recursive-descent parser: token cursor, nesting limit, expression builder.

use slisp_lexer::{classify, Lexer, Token, TokenKind};
use slisp_types::{Expression, InterpreterConfig, ParseError, Span};

/// The slisp parser.
///
/// Consumes a token stream and builds exactly one expression tree.
pub struct Parser {
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    max_depth: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, config: &InterpreterConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Fails if the stream is empty, unbalanced, holds an invalid token, or
    /// has anything left over after the first complete expression.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        let expr = self.parse_expression()?;
        match self.tokens.get(self.pos) {
            None => Ok(expr),
            Some(token) if token.kind == TokenKind::Close => {
                Err(ParseError::UnmatchedClose { span: token.span })
            }
            Some(token) => Err(ParseError::TrailingInput { span: token.span }),
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn end_span(&self) -> Span {
        self.tokens.last().map(|t| t.span).unwrap_or_default()
    }

    // ── Expressions ───────────────────────────────────────────────────────────

    /// Parse one expression starting at the cursor and leave the cursor just
    /// past it.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let token = self.advance().ok_or(ParseError::UnexpectedEof {
            span: self.end_span(),
        })?;

        match token.kind {
            TokenKind::Close => Err(ParseError::UnmatchedClose { span: token.span }),
            TokenKind::Word(text) => leaf(text, token.span),
            TokenKind::Open => {
                self.depth += 1;
                if self.depth > self.max_depth {
                    return Err(ParseError::TooDeep {
                        limit: self.max_depth,
                        span: token.span,
                    });
                }
                let expr = self.parse_application(token.span);
                self.depth -= 1;
                expr
            }
        }
    }

    /// Parse `operator operand* )` after an opening parenthesis.
    fn parse_application(&mut self, open: Span) -> Result<Expression, ParseError> {
        let mut expr = match self.advance() {
            Some(Token {
                kind: TokenKind::Word(text),
                span,
            }) => leaf(text, span)?,
            Some(token) => return Err(ParseError::MissingOperator { span: token.span }),
            None => return Err(ParseError::UnexpectedEof { span: open }),
        };

        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof { span: open }),
                Some(token) if token.kind == TokenKind::Close => {
                    self.pos += 1;
                    return Ok(expr);
                }
                Some(_) => expr.tail.push(self.parse_expression()?),
            }
        }
    }
}

fn leaf(text: String, span: Span) -> Result<Expression, ParseError> {
    classify(&text)
        .map(Expression::new)
        .ok_or(ParseError::InvalidToken { token: text, span })
}

/// Parse one expression from `tokens` starting at `*position`, advancing
/// `*position` past the consumed tokens on success.
pub fn parse_expression(tokens: &[Token], position: &mut usize) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(tokens.to_vec(), &InterpreterConfig::default());
    parser.pos = *position;
    let expr = parser.parse_expression()?;
    *position = parser.pos;
    Ok(expr)
}

/// Tokenize and parse `source` as exactly one expression.
pub fn parse_source(source: &str, config: &InterpreterConfig) -> Result<Expression, ParseError> {
    Parser::new(Lexer::new(source).lex(), config).parse()
}
