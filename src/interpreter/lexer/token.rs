use std::{fmt, sync::Arc};

/// Classifies a [`Token`].
///
/// The set is closed: every kind the tokenizer can emit, plus [`Apply`], which
/// only the tree builder produces when it folds a callee and its argument
/// group into a function application.
///
/// [`Apply`]: TokenKind::Apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Exactly one terminates a successful token stream.
    Eof,
    /// A lexical failure. The token text carries the message.
    Error,
    /// `;`, or a line break promoted to a statement boundary.
    Separator,
    /// Names, including the reserved words `true`, `false` and `nil`.
    Ident,
    /// Integer or decimal literal.
    Number,
    /// `"..."` with backslash escapes.
    DoubleQuoteString,
    /// `'...'` with backslash escapes.
    SingleQuoteString,
    /// `` `...` `` raw, may span lines.
    BacktickString,
    /// `# ...` up to the end of the line.
    HashComment,
    /// `// ...` up to the end of the line.
    SlashComment,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `!`
    Not,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `%`
    Modulo,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `>>`
    Pipe,
    /// `=` or `:=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModuloAssign,
    /// `fn`
    Function,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// Function application, synthesized by the tree builder.
    Apply,
}

impl TokenKind {
    /// Returns `true` for the two comment flavors.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::HashComment | Self::SlashComment)
    }

    /// Returns `true` for the three string literal flavors.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self,
                 Self::DoubleQuoteString | Self::SingleQuoteString | Self::BacktickString)
    }

    /// Returns `true` when a line break directly after a token of this kind
    /// ends the statement.
    ///
    /// ```
    /// use meh::interpreter::lexer::token::TokenKind;
    ///
    /// assert!(TokenKind::Ident.ends_statement());
    /// assert!(TokenKind::RightParen.ends_statement());
    /// assert!(!TokenKind::Plus.ends_statement());
    /// ```
    #[must_use]
    pub const fn ends_statement(self) -> bool {
        matches!(self,
                 Self::Ident
                 | Self::Number
                 | Self::DoubleQuoteString
                 | Self::SingleQuoteString
                 | Self::BacktickString
                 | Self::RightParen
                 | Self::RightBrace
                 | Self::Break
                 | Self::Continue
                 | Self::Return)
    }

    /// Returns `true` for tokens that are complete expressions on their own.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self,
                 Self::Ident
                 | Self::Number
                 | Self::DoubleQuoteString
                 | Self::SingleQuoteString
                 | Self::BacktickString
                 | Self::Break
                 | Self::Continue)
    }

    /// Maps a compound assignment to the arithmetic operator it applies.
    #[must_use]
    pub const fn compound_operator(self) -> Option<Self> {
        match self {
            Self::PlusAssign => Some(Self::Plus),
            Self::MinusAssign => Some(Self::Minus),
            Self::MultAssign => Some(Self::Mult),
            Self::DivAssign => Some(Self::Div),
            Self::ModuloAssign => Some(Self::Modulo),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A location in a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Name of the input, such as a file path or `stdin`.
    pub source: Arc<str>,
    /// 1-based line.
    pub line:   usize,
    /// 1-based column, with tabs expanded to the next tab stop.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}

/// A classified lexical unit with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The matched source text, or the message of an [`TokenKind::Error`].
    pub text:     String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Returns the same token with a different kind and text.
    ///
    /// Used when the tree builder rewrites a node but wants diagnostics to keep
    /// pointing at the same source location.
    #[must_use]
    pub fn rekind(&self, kind: TokenKind, text: &str) -> Self {
        Self { kind,
               text: text.to_string(),
               position: self.position.clone() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.text, self.position)
    }
}
