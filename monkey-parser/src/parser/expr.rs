use super::*;
use crate::ast::Expr;

impl<'a, T: TokenStream> Parser<'a, T> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = Precedence::Lowest`.
    pub fn parse_expr(&mut self) -> Option<Expr> {
        self.parse_expr_bp(Precedence::Lowest)
    }

    /// Parses an expression with the specified minimum binding power.
    ///
    /// The loop only continues while the lookahead binds *strictly* tighter
    /// than `min_bp`, which is what makes every binary operator level
    /// left-associative. The trailing statement terminator is left for the
    /// caller to consume.
    fn parse_expr_bp(&mut self, min_bp: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && min_bp < self.peek.precedence() {
            self.next();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches on `current` to the prefix rule that starts an expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match &self.current {
            Token::Ident(name) => Some(Expr::Identifier(name.clone())),
            Token::Int(literal) => match literal.parse::<i64>() {
                Ok(value) => Some(Expr::IntegerLit(value)),
                Err(_) => {
                    let message = format!("could not parse `{}` as integer", literal);
                    self.error(message);
                    None
                }
            },
            Token::True => Some(Expr::BoolLit(true)),
            Token::False => Some(Expr::BoolLit(false)),
            Token::Bang | Token::Minus => self.parse_prefix_expr(),
            Token::LParen => self.parse_grouped_expr(),
            Token::If => self.parse_if_expr(),
            Token::Function => self.parse_function_lit(),
            token => {
                let message = format!("unexpected token `{}`", token);
                self.error(message);
                None
            }
        }
    }

    /// Dispatches on `current` to the infix rule that continues `left`.
    /// Only tokens with a binding power above `Lowest` ever reach this point.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current {
            Token::LParen => self.parse_call_expr(left),
            _ => self.parse_binary_expr(left),
        }
    }

    /* Expressions.Operators */
    /// Parses a prefix operator expression (`!x`, `-x`). The operand binds at
    /// `Prefix` level, tighter than any binary operator.
    fn parse_prefix_expr(&mut self) -> Option<Expr> {
        let op = self.current.clone();
        self.next();
        let right = self.parse_expr_bp(Precedence::Prefix)?;

        Some(Expr::Prefix {
            op,
            right: Box::new(right),
        })
    }

    /// Parses a binary operator expression. The right operand is parsed at
    /// the operator's own binding power, so `*` binds tighter than `+` and
    /// equal levels resolve left-to-right.
    fn parse_binary_expr(&mut self, left: Expr) -> Option<Expr> {
        let op = self.current.clone();
        self.next();
        let right = self.parse_expr_bp(op.precedence())?;

        Some(Expr::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /* Expressions.Grouping */
    /// Parses a parenthesized expression. Parentheses produce no node of
    /// their own; the inner expression is returned directly.
    fn parse_grouped_expr(&mut self) -> Option<Expr> {
        self.next();
        let expr = self.parse_expr()?;

        if !self.expect_peek(Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /* Expressions.If */
    fn parse_if_expr(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        self.next();
        let condition = self.parse_expr()?;

        if !self.expect_peek(Token::RParen) {
            return None;
        }
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(&Token::Else) {
            self.next();
            if !self.expect_peek(Token::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /* Expressions.Function */
    fn parse_function_lit(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::Function { params, body })
    }

    /// Parses a comma-separated (possibly empty) parameter list, terminated
    /// by `)`. Parameters are bare identifiers in declaration order.
    fn parse_function_params(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next();
            return Some(params);
        }

        self.next();
        params.push(self.parse_param()?);

        while self.peek_is(&Token::Comma) {
            self.next();
            self.next();
            params.push(self.parse_param()?);
        }

        if !self.expect_peek(Token::RParen) {
            return None;
        }

        Some(params)
    }

    fn parse_param(&mut self) -> Option<String> {
        match &self.current {
            Token::Ident(name) => Some(name.clone()),
            token => {
                let message = format!("expected parameter name, found `{}`", token);
                self.error(message);
                None
            }
        }
    }

    /* Expressions.Call */
    /// Infix rule bound to `(`: parses the argument list of a call to the
    /// already-parsed `callee`.
    fn parse_call_expr(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_call_args()?;

        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// Parses a comma-separated (possibly empty) argument list, each argument
    /// at `Lowest` binding power, terminated by `)`.
    fn parse_call_args(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next();
            return Some(args);
        }

        self.next();
        args.push(self.parse_expr()?);

        while self.peek_is(&Token::Comma) {
            self.next();
            self.next();
            args.push(self.parse_expr()?);
        }

        if !self.expect_peek(Token::RParen) {
            return None;
        }

        Some(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;
    use insta::assert_debug_snapshot;

    fn expr(source: &str) -> Expr {
        let source = source.into();
        let ast = Parser::new(&source).parse_expr();
        assert!(source.has_no_errors(), "errors: {}", source.errors);
        ast.expect("expression should parse")
    }

    /// Parses a whole program and renders it back as canonical text.
    fn parenthesize(source: &str) -> String {
        let source = source.into();
        let root = Parser::new(&source).parse_program();
        assert!(source.has_no_errors(), "errors: {}", source.errors);
        root.to_string()
    }

    #[test]
    fn test_literal() {
        assert_debug_snapshot!(expr("true"), @r###"
BoolLit(
    true,
)
"###);
        assert_debug_snapshot!(expr("5"), @r###"
IntegerLit(
    5,
)
"###);
        assert_eq!(expr("false"), Expr::BoolLit(false));
        assert_eq!(expr("9223372036854775807"), Expr::IntegerLit(i64::MAX));
    }

    #[test]
    fn test_identifier() {
        assert_eq!(expr("foobar"), Expr::Identifier("foobar".to_string()));
    }

    #[test]
    fn test_integer_overflow_is_a_literal_error() {
        let source: monkey_source::Source = "9223372036854775808".into();
        let ast = Parser::new(&source).parse_expr();

        assert_eq!(ast, None);
        assert_eq!(
            source.errors.messages(),
            vec!["could not parse `9223372036854775808` as integer".to_string()]
        );
    }

    #[test]
    fn test_prefix_expr() {
        assert_debug_snapshot!(expr("!true"), @r###"
Prefix {
    op: Bang,
    right: BoolLit(
        true,
    ),
}
"###);
        assert_eq!(
            expr("-15"),
            Expr::Prefix {
                op: Token::Minus,
                right: Box::new(Expr::IntegerLit(15)),
            }
        );
    }

    #[test]
    fn test_binary_expr() {
        assert_debug_snapshot!(expr("1 + 1"), @r###"
Infix {
    left: IntegerLit(
        1,
    ),
    op: Plus,
    right: IntegerLit(
        1,
    ),
}
"###);

        for op in &[
            Token::Plus,
            Token::Minus,
            Token::Asterisk,
            Token::Slash,
            Token::Lt,
            Token::Gt,
            Token::Eq,
            Token::NotEq,
        ] {
            let source = format!("5 {} 3", op);
            assert_eq!(
                expr(&source),
                Expr::Infix {
                    left: Box::new(Expr::IntegerLit(5)),
                    op: op.clone(),
                    right: Box::new(Expr::IntegerLit(3)),
                }
            );
        }
    }

    #[test]
    fn test_precedence() {
        let testcases = [
            ("5 + 5 * 2", "(5 + (5 * 2))"),
            ("a - b - c", "((a - b) - c)"),
            ("-a * b", "(-a * b)"),
            ("a + b + c", "((a + b) + c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 + 4; -5 * 5", "(3 + 4)(-5 * 5)"),
        ];

        for (source, expected) in &testcases {
            assert_eq!(parenthesize(source), *expected, "source: {}", source);
        }
    }

    #[test]
    fn test_grouped_expr() {
        // Parentheses shape the tree but produce no node of their own.
        let testcases = [
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "-(5 + 5)"),
            ("!(true == true)", "!(true == true)"),
            ("(foobar)", "foobar"),
        ];

        for (source, expected) in &testcases {
            assert_eq!(parenthesize(source), *expected, "source: {}", source);
        }

        assert_eq!(expr("(5 + 5)"), expr("5 + 5"));
    }

    #[test]
    fn test_unterminated_group() {
        let source: monkey_source::Source = "(5 + 5".into();
        let ast = Parser::new(&source).parse_expr();

        assert_eq!(ast, None);
        assert_eq!(
            source.errors.messages(),
            vec!["expected `)`, found `<eof>`".to_string()]
        );
    }

    #[test]
    fn test_if_expr() {
        assert_eq!(
            expr("if (x < y) { x }"),
            Expr::If {
                condition: Box::new(Expr::Infix {
                    left: Box::new(Expr::Identifier("x".to_string())),
                    op: Token::Lt,
                    right: Box::new(Expr::Identifier("y".to_string())),
                }),
                consequence: vec![Stmt::ExprStmt(Expr::Identifier("x".to_string()))],
                alternative: None,
            }
        );
    }

    #[test]
    fn test_if_else_expr() {
        let ast = expr("if (x < y) { x } else { y }");
        assert_eq!(
            ast,
            Expr::If {
                condition: Box::new(Expr::Infix {
                    left: Box::new(Expr::Identifier("x".to_string())),
                    op: Token::Lt,
                    right: Box::new(Expr::Identifier("y".to_string())),
                }),
                consequence: vec![Stmt::ExprStmt(Expr::Identifier("x".to_string()))],
                alternative: Some(vec![Stmt::ExprStmt(Expr::Identifier("y".to_string()))]),
            }
        );
    }

    #[test]
    fn test_if_missing_paren_is_an_error() {
        let source: monkey_source::Source = "if x < y { x }".into();
        Parser::new(&source).parse_program();

        assert_eq!(
            source.errors.messages(),
            vec!["expected `(`, found `x`".to_string()]
        );
    }

    #[test]
    fn test_function_lit() {
        assert_eq!(
            expr("fn(x, y) { x + y; }"),
            Expr::Function {
                params: vec!["x".to_string(), "y".to_string()],
                body: vec![Stmt::ExprStmt(Expr::Infix {
                    left: Box::new(Expr::Identifier("x".to_string())),
                    op: Token::Plus,
                    right: Box::new(Expr::Identifier("y".to_string())),
                })],
            }
        );
    }

    #[test]
    fn test_function_params() {
        let testcases: [(&str, &[&str]); 3] = [
            ("fn() {}", &[]),
            ("fn(x) {}", &["x"]),
            ("fn(x, y, z) {}", &["x", "y", "z"]),
        ];

        for (source, expected) in &testcases {
            match expr(source) {
                Expr::Function { params, .. } => {
                    assert_eq!(params, *expected, "source: {}", source)
                }
                other => panic!("expected a function literal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_call_expr() {
        assert_debug_snapshot!(expr("add(1, bar)"), @r###"
Call {
    callee: Identifier(
        "add",
    ),
    args: [
        IntegerLit(
            1,
        ),
        Identifier(
            "bar",
        ),
    ],
}
"###);
        assert_eq!(
            expr("add()"),
            Expr::Call {
                callee: Box::new(Expr::Identifier("add".to_string())),
                args: vec![],
            }
        );
    }

    #[test]
    fn test_call_with_expression_args() {
        assert_eq!(
            expr("add(1, 2 + 3, 4 * 5)"),
            Expr::Call {
                callee: Box::new(Expr::Identifier("add".to_string())),
                args: vec![
                    Expr::IntegerLit(1),
                    Expr::Infix {
                        left: Box::new(Expr::IntegerLit(2)),
                        op: Token::Plus,
                        right: Box::new(Expr::IntegerLit(3)),
                    },
                    Expr::Infix {
                        left: Box::new(Expr::IntegerLit(4)),
                        op: Token::Asterisk,
                        right: Box::new(Expr::IntegerLit(5)),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_call_binds_tighter_than_operators() {
        let testcases = [
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
            ("-add(1)", "-add(1)"),
        ];

        for (source, expected) in &testcases {
            assert_eq!(parenthesize(source), *expected, "source: {}", source);
        }
    }
}
