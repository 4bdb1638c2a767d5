use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// This enum is the closed set of token types the language knows about. The
/// character-level classification is derived with `logos`; the [`Scanner`]
/// turns the raw kinds into [`Token`]s carrying line, lexeme and literal.
///
/// [`Scanner`]: crate::interpreter::scanner::Scanner
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = ScanExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens, such as `"hello"`. May span several lines.
    #[regex(r#""[^"]*""#, count_newlines, allow_greedy = true)]
    String,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// A string that runs into the end of input. Never handed to the parser;
    /// the scanner reports it as a lexical error.
    #[regex(r#""[^"]*"#, count_newlines, allow_greedy = true)]
    UnterminatedString,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,

    /// End of input. Appended by the scanner, never matched.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the keywords a statement can start with.
    ///
    /// The parser uses this set as a recovery point after a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Semicolon => ";",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Number => "number",
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::Fun => "fun",
            Self::For => "for",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            Self::UnterminatedString => "unterminated string",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
            Self::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct ScanExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for ScanExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Advances the line counter past newlines embedded in a string literal.
fn count_newlines(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// The literal value attached to number and string tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal, always stored as a double.
    Number(f64),
    /// A string literal without its surrounding quotes.
    String(String),
}

/// An immutable lexical unit.
///
/// Produced by the [`Scanner`] and consumed by the parser. Tokens are also
/// stored in the AST wherever a node needs a source location for error
/// reporting (operators, variable names).
///
/// [`Scanner`]: crate::interpreter::scanner::Scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token type.
    pub kind:    TokenKind,
    /// The 1-based source line the token ends on.
    pub line:    usize,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The literal value for number and string tokens.
    pub literal: Option<Literal>,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Plus, 3, "+", None);
    /// assert_eq!(token.line, 3);
    /// assert_eq!(token.to_string(), "+");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind,
               line: usize,
               lexeme: impl Into<String>,
               literal: Option<Literal>)
               -> Self {
        debug_assert!(line >= 1, "token lines are 1-based");
        Self { kind,
               line,
               lexeme: lexeme.into(),
               literal }
    }

    /// Creates the end-of-input token for the given final line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, line, "", None)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
