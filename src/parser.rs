pub mod error;

pub use self::error::{ParseError, ParseResult};

use crate::ast::{FunctionDef, Integer, Node};
use crate::lexer::{Token, TokenKind};

pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses exactly one definition; anything after its `end` is an error.
    pub fn parse(mut self) -> ParseResult<FunctionDef> {
        let def = self.parse_def()?;
        if let Some(token) = self.current() {
            return Err(ParseError::TrailingTokens {
                found: token.kind,
                line: token.span.line,
                column: token.span.column,
            });
        }
        Ok(def)
    }

    fn parse_def(&mut self) -> ParseResult<FunctionDef> {
        self.consume(TokenKind::Def)?;
        let name = self.consume(TokenKind::Identifier)?.text.to_string();
        let params = self.parse_params()?;
        let body = self.parse_expr()?;
        self.consume(TokenKind::End)?;
        Ok(FunctionDef::new(name, params, body))
    }

    fn parse_params(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();
        self.consume(TokenKind::OParen)?;
        if !self.peek(TokenKind::CParen, 0) {
            params.push(self.consume(TokenKind::Identifier)?.text.to_string());
            while self.peek(TokenKind::Comma, 0) {
                self.consume(TokenKind::Comma)?;
                params.push(self.consume(TokenKind::Identifier)?.text.to_string());
            }
        }
        self.consume(TokenKind::CParen)?;
        Ok(params)
    }

    fn parse_expr(&mut self) -> ParseResult<Node> {
        if self.peek(TokenKind::Integer, 0) {
            self.parse_integer()
        } else if self.peek(TokenKind::Identifier, 0) && self.peek(TokenKind::OParen, 1) {
            self.parse_call()
        } else {
            self.parse_var_ref()
        }
    }

    fn parse_call(&mut self) -> ParseResult<Node> {
        let callee = self.consume(TokenKind::Identifier)?.text.to_string();
        let args = self.parse_args()?;
        Ok(Node::Call { callee, args })
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Node>> {
        let mut args = Vec::new();
        self.consume(TokenKind::OParen)?;
        if !self.peek(TokenKind::CParen, 0) {
            args.push(self.parse_expr()?);
            while self.peek(TokenKind::Comma, 0) {
                self.consume(TokenKind::Comma)?;
                args.push(self.parse_expr()?);
            }
        }
        self.consume(TokenKind::CParen)?;
        Ok(args)
    }

    fn parse_integer(&mut self) -> ParseResult<Node> {
        let token = self.consume(TokenKind::Integer)?;
        Ok(Node::IntLiteral(Integer::from_digits(token.text)))
    }

    fn parse_var_ref(&mut self) -> ParseResult<Node> {
        let name = self.consume(TokenKind::Identifier)?.text.to_string();
        Ok(Node::VarRef(name))
    }

    fn consume(&mut self, expected: TokenKind) -> ParseResult<Token<'a>> {
        let Some(token) = self.current() else {
            return Err(ParseError::UnexpectedEnd { expected });
        };
        if token.kind != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                text: token.text.to_string(),
                line: token.span.line,
                column: token.span.column,
            });
        }
        let token = token.clone();
        self.position += 1;
        Ok(token)
    }

    fn peek(&self, expected: TokenKind, offset: usize) -> bool {
        self.tokens
            .get(self.position + offset)
            .is_some_and(|token| token.kind == expected)
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.position)
    }
}

pub fn parse_tokens(tokens: Vec<Token<'_>>) -> ParseResult<FunctionDef> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use indoc::indoc;

    fn parse(input: &str) -> ParseResult<FunctionDef> {
        parse_tokens(tokenize(input).expect("tokenize failed"))
    }

    fn var(name: &str) -> Node {
        Node::VarRef(name.to_string())
    }

    #[test]
    fn parses_simple_program() {
        let input = indoc! {"
            def f(x,y)
              add(x, y)
            end
        "};
        let def = parse(input).expect("parse failed");

        let expected = FunctionDef::new(
            "f",
            vec!["x".to_string(), "y".to_string()],
            Node::Call {
                callee: "add".to_string(),
                args: vec![var("x"), var("y")],
            },
        );
        assert_eq!(def, expected);
    }

    #[test]
    fn parses_zero_params_with_integer_body() {
        let def = parse("def k() 7 end").expect("parse failed");
        assert_eq!(
            def,
            FunctionDef::new("k", vec![], Node::IntLiteral(Integer::from(7_i64)))
        );
    }

    #[test]
    fn parses_nested_calls_in_source_order() {
        let def = parse("def f(a,b) g(h(), 1, g(b, a)) end").expect("parse failed");
        assert_eq!(
            *def.body,
            Node::Call {
                callee: "g".to_string(),
                args: vec![
                    Node::Call {
                        callee: "h".to_string(),
                        args: vec![],
                    },
                    Node::IntLiteral(Integer::from(1_i64)),
                    Node::Call {
                        callee: "g".to_string(),
                        args: vec![var("b"), var("a")],
                    },
                ],
            }
        );
    }

    #[test]
    fn identifier_without_paren_is_var_ref() {
        let def = parse("def f(x) x end").expect("parse failed");
        assert_eq!(*def.body, var("x"));
    }

    #[test]
    fn parsing_is_deterministic() {
        let tokens = tokenize("def f(x) g(x, 3) end").expect("tokenize failed");
        let first = parse_tokens(tokens.clone()).expect("first parse");
        let second = parse_tokens(tokens).expect("second parse");
        assert_eq!(first, second);
    }

    #[test]
    fn reports_expected_and_found_kinds() {
        let err = parse("def f(x) x x").expect_err("expected parse failure");
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::End,
                found: TokenKind::Identifier,
                text: "x".to_string(),
                line: 1,
                column: 11,
            }
        );
        assert!(
            err.to_string()
                .starts_with("Expected token type end but got identifier")
        );
    }

    #[test]
    fn errors_when_tokens_run_out() {
        let err = parse("def f(x) x").expect_err("expected parse failure");
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                expected: TokenKind::End
            }
        );

        let err = parse("").expect_err("expected parse failure");
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                expected: TokenKind::Def
            }
        );
    }

    #[test]
    fn rejects_trailing_comma_in_params() {
        let err = parse("def f(x,) x end").expect_err("expected parse failure");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::CParen,
                ..
            }
        ));
    }

    #[test]
    fn rejects_trailing_comma_in_args() {
        let err = parse("def f(x) g(x,) end").expect_err("expected parse failure");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::CParen,
                ..
            }
        ));
    }

    #[test]
    fn rejects_missing_body() {
        let err = parse("def f(x) end").expect_err("expected parse failure");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::End,
                ..
            }
        ));
    }

    #[test]
    fn rejects_second_definition() {
        let err = parse("def f() 1 end def g() 2 end").expect_err("expected parse failure");
        assert_eq!(
            err,
            ParseError::TrailingTokens {
                found: TokenKind::Def,
                line: 1,
                column: 14,
            }
        );
    }

    #[test]
    fn keeps_integers_wider_than_64_bits() {
        let def = parse("def f(x) g(x, 12345678901234567890123) end").expect("parse failed");
        assert_eq!(
            *def.body,
            Node::Call {
                callee: "g".to_string(),
                args: vec![
                    var("x"),
                    Node::IntLiteral(Integer::from_digits("12345678901234567890123")),
                ],
            }
        );
    }
}
