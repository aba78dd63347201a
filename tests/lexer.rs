use std::io::{self, Read};

use meh::interpreter::lexer::{
    token::{Token, TokenKind},
    tokenize,
};
use pretty_assertions::assert_eq;

fn lex(source: &str) -> Vec<Token> {
    tokenize("test", source.as_bytes())
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex(source).into_iter().map(|t| t.text).collect()
}

fn positions(source: &str) -> Vec<(usize, usize)> {
    lex(source).into_iter()
               .map(|t| (t.position.line, t.position.column))
               .collect()
}

#[test]
fn semicolon_is_not_doubled_by_the_following_newline() {
    use TokenKind::{Eof, Ident, Separator};

    assert_eq!(kinds("a;\nb"), [Ident, Separator, Ident, Eof]);
    assert_eq!(texts("a;\nb"), ["a", ";", "b", ""]);
}

#[test]
fn newline_after_an_identifier_ends_the_statement() {
    use TokenKind::{Eof, Ident, Separator};

    assert_eq!(kinds("x\n"), [Ident, Separator, Eof]);
}

#[test]
fn newline_after_an_operator_continues_the_statement() {
    use TokenKind::{Eof, Ident, Plus};

    assert_eq!(kinds("a +\nb"), [Ident, Plus, Ident, Eof]);
}

#[test]
fn newline_after_closers_and_keywords_ends_the_statement() {
    use TokenKind::{Break, Eof, LeftBrace, LeftParen, Return, RightBrace, RightParen, Separator};

    assert_eq!(kinds("()\n{}\nbreak\nreturn\n"),
               [LeftParen,
                RightParen,
                Separator,
                LeftBrace,
                RightBrace,
                Separator,
                Break,
                Separator,
                Return,
                Separator,
                Eof]);
}

#[test]
fn leading_comment_does_not_produce_a_separator() {
    use TokenKind::{Eof, HashComment, Ident};

    assert_eq!(kinds("#comment\nx"), [HashComment, Ident, Eof]);
    assert_eq!(texts("#comment\nx"), ["#comment", "x", ""]);
}

#[test]
fn trailing_comment_keeps_the_line_break() {
    use TokenKind::{Assign, Eof, Ident, Number, Separator, SlashComment};

    assert_eq!(kinds("x = 1 // note\ny"),
               [Ident, Assign, Number, SlashComment, Separator, Ident, Eof]);
}

#[test]
fn keywords_and_reserved_names() {
    use TokenKind::{Break, Continue, Eof, Function, Ident, Return};

    assert_eq!(kinds("fn return break continue true nil fnord"),
               [Function, Return, Break, Continue, Ident, Ident, Ident, Eof]);
}

#[test]
fn two_rune_operators_win_over_one_rune_operators() {
    use TokenKind::{
        And, Assign, DivAssign, Eof, Equal, GreaterOrEqual, LessOrEqual, MinusAssign,
        ModuloAssign, MultAssign, NotEqual, Or, Pipe, PlusAssign,
    };

    assert_eq!(kinds("== != <= >= && || >> += -= *= /= %= :="),
               [Equal,
                NotEqual,
                LessOrEqual,
                GreaterOrEqual,
                And,
                Or,
                Pipe,
                PlusAssign,
                MinusAssign,
                MultAssign,
                DivAssign,
                ModuloAssign,
                Assign,
                Eof]);
}

#[test]
fn one_rune_operators() {
    use TokenKind::{Comma, Div, Eof, Greater, Less, Minus, Modulo, Mult, Not, Plus};

    assert_eq!(kinds("+ - * / % < > ! ,"),
               [Plus, Minus, Mult, Div, Modulo, Less, Greater, Not, Comma, Eof]);
}

#[test]
fn numbers_take_at_most_one_decimal_point() {
    use TokenKind::{Eof, Number};

    assert_eq!(kinds("12 3.25 4."), [Number, Number, Number, Eof]);
    assert_eq!(texts("12 3.25 4."), ["12", "3.25", "4.", ""]);
}

#[test]
fn malformed_numbers_are_lexical_errors() {
    for source in ["1.2.3", "12ab", "3_000"] {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source}");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].text, "malformed number");
    }
}

#[test]
fn string_flavors() {
    use TokenKind::{BacktickString, DoubleQuoteString, Eof, SingleQuoteString};

    let source = r#""a \"b\"" 'c\'d' `e\f`"#;

    assert_eq!(kinds(source),
               [DoubleQuoteString, SingleQuoteString, BacktickString, Eof]);
    assert_eq!(texts(source), [r#""a \"b\"""#, r"'c\'d'", r"`e\f`", ""]);
}

#[test]
fn only_backtick_strings_span_lines() {
    use TokenKind::{BacktickString, Eof, Ident};

    assert_eq!(kinds("`a\nb` c"), [BacktickString, Ident, Eof]);
    assert_eq!(positions("`a\nb` c"), [(1, 1), (2, 4), (2, 5)]);

    let tokens = lex("\"a\nb\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, "unclosed double quote string");
}

#[test]
fn unterminated_strings_stop_the_stream() {
    let tokens = lex("x = 'abc");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Ident, TokenKind::Assign, TokenKind::Error]);
    assert_eq!(tokens[2].text, "unclosed single quote string");
    assert_eq!((tokens[2].position.line, tokens[2].position.column), (1, 5));
}

#[test]
fn unrecognized_rune_is_reported_where_it_occurs() {
    let tokens = lex("a\n  @ b");

    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Error));
    let error = &tokens[tokens.len() - 1];
    assert_eq!(error.text, "unrecognized rune");
    assert_eq!((error.position.line, error.position.column), (2, 3));
}

#[test]
fn tabs_advance_to_the_next_tab_stop() {
    assert_eq!(positions("a\tb"), [(1, 1), (1, 5), (1, 6)]);
    assert_eq!(positions("abcd\te"), [(1, 1), (1, 9), (1, 10)]);
    assert_eq!(positions("\n\tx"), [(2, 5), (2, 6)]);
}

#[test]
fn every_line_break_style_resets_the_column() {
    use TokenKind::{Eof, Ident, Separator};

    assert_eq!(kinds("a\r\nb\rc\x0Bd\x0Ce"),
               [Ident, Separator, Ident, Separator, Ident, Separator, Ident, Separator, Ident, Eof]);
    assert_eq!(positions("a\r\nb\rc"), [(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
}

#[test]
fn positions_carry_the_source_name() {
    let tokens = tokenize("script.meh", "x".as_bytes());

    assert_eq!(tokens[0].position.to_string(), "script.meh:1:1");
}

#[test]
fn exactly_one_eof_terminates_the_stream() {
    for source in ["", "\n\n", "a b c", "{ ( ) }"] {
        let tokens = lex(source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1, "{source:?}");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("boom"))
    }
}

#[test]
fn read_failure_is_a_lexical_error() {
    let tokens = tokenize("broken", FailingReader);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, "failed to scan next rune: boom");
}
