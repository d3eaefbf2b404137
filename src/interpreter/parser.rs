use crate::{
    ast::{AssignOp, BinaryOperator, Expr, PostfixOperator, Stmt, UnaryOperator},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
    value::Number,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser that turns one tokenized line into a statement.
///
/// The parser keeps a single index into the token list: one token of
/// lookahead, no backtracking. A token consumed by a successful match stays
/// consumed. The grammar, from loosest to tightest binding:
///
/// ```text
/// statement      := IDENT assign-op expression EOF
/// assign-op      := '=' | '+=' | '-=' | '*=' | '/=' | '%=' | '^='
/// expression     := additive
/// additive       := multiplicative (('+' | '-') multiplicative)*
/// multiplicative := unary-or-power (('*' | '/' | '%') unary-or-power)*
/// unary-or-power := ('++' | '--' | '+' | '-') unary-or-power
///                 | postfix ('^' unary-or-power)?
/// postfix        := primary ('++' | '--')?
/// primary        := NUMBER | IDENT | '(' expression ')'
/// ```
///
/// `^` is right-associative and binds tighter than the prefix operators, so
/// `-2^2` parses as `-(2^2)` and `2^3^2` as `2^(3^2)`.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the `Eof`-terminated token list produced by
    /// [`tokenize`].
    ///
    /// [`tokenize`]: crate::interpreter::lexer::tokenize
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            position: tokens.last().map_or(0, |token| token.position),
        };
        Self {
            tokens,
            current: 0,
            eof,
        }
    }

    /// Parses the whole token sequence as one assignment statement.
    ///
    /// Fails if the grammar is violated anywhere, including trailing tokens
    /// after a syntactically complete expression.
    ///
    /// # Errors
    /// Returns a [`ParseError`] carrying the offending token's position; see
    /// the error type for the full set of conditions and codes.
    ///
    /// # Example
    /// ```
    /// use calcscript::{
    ///     ast::{AssignOp, Stmt},
    ///     interpreter::{lexer::tokenize, parser::Parser},
    /// };
    ///
    /// let tokens = tokenize("total += 2 * (3 + 4)").unwrap();
    /// let stmt = Parser::new(&tokens).parse_statement().unwrap();
    ///
    /// let Stmt::Assignment { name, op, .. } = stmt;
    /// assert_eq!(name, "total");
    /// assert_eq!(op, AssignOp::AddAssign);
    /// ```
    pub fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let name = match self.peek() {
            token if token.kind == TokenKind::Ident => token.lexeme.clone(),
            token => {
                return Err(ParseError::ExpectedIdentifier {
                    position: token.position,
                });
            }
        };
        self.advance();

        let op = self.parse_assign_op()?;
        let expr = self.expression()?;

        let trailing = self.peek();
        if trailing.kind != TokenKind::Eof {
            return Err(ParseError::UnexpectedTokenAfterExpression {
                lexeme: trailing.lexeme.clone(),
                position: trailing.position,
            });
        }

        Ok(Stmt::Assignment { name, op, expr })
    }

    fn parse_assign_op(&mut self) -> ParseResult<AssignOp> {
        let op = match self.peek().kind {
            TokenKind::Equal => AssignOp::Assign,
            TokenKind::PlusEqual => AssignOp::AddAssign,
            TokenKind::MinusEqual => AssignOp::SubAssign,
            TokenKind::StarEqual => AssignOp::MulAssign,
            TokenKind::SlashEqual => AssignOp::DivAssign,
            TokenKind::PercentEqual => AssignOp::ModAssign,
            TokenKind::CaretEqual => AssignOp::PowAssign,
            _ => {
                return Err(ParseError::ExpectedAssignOp {
                    position: self.peek().position,
                });
            }
        };
        self.advance();
        Ok(op)
    }

    fn expression(&mut self) -> ParseResult<Expr> {
        self.additive()
    }

    /// `additive := multiplicative (('+' | '-') multiplicative)*`, left-assoc.
    fn additive(&mut self) -> ParseResult<Expr> {
        let mut expr = self.multiplicative()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance();

            let right = self.multiplicative()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `multiplicative := unary-or-power (('*' | '/' | '%') unary-or-power)*`,
    /// left-assoc.
    fn multiplicative(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary_or_power()?;

        while matches!(
            self.peek().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let (kind, lexeme, position) = {
                let token = self.peek();
                (token.kind, token.lexeme.clone(), token.position)
            };
            self.advance();

            let op = match kind {
                TokenKind::Star => BinaryOperator::Mul,
                TokenKind::Slash => BinaryOperator::Div,
                TokenKind::Percent => BinaryOperator::Mod,
                // Defensive; the loop guard admits only the three kinds above.
                _ => {
                    return Err(ParseError::InvalidMultiplicativeOperator { lexeme, position });
                }
            };

            let right = self.unary_or_power()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Prefix operators wrap the entire following unary-or-power parse, and
    /// `^` recurses on its right side for right-associativity.
    fn unary_or_power(&mut self) -> ParseResult<Expr> {
        let prefix = match self.peek().kind {
            TokenKind::PlusPlus => Some(UnaryOperator::PreIncrement),
            TokenKind::MinusMinus => Some(UnaryOperator::PreDecrement),
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Minus => Some(UnaryOperator::Minus),
            _ => None,
        };
        if let Some(op) = prefix {
            self.advance();
            let expr = self.unary_or_power()?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(expr),
            });
        }

        let mut expr = self.postfix()?;

        if self.peek().kind == TokenKind::Caret {
            self.advance();
            let right = self.unary_or_power()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOperator::Pow,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// `postfix := primary ('++' | '--')?` — at most one postfix operator.
    fn postfix(&mut self) -> ParseResult<Expr> {
        let expr = self.primary()?;

        let op = match self.peek().kind {
            TokenKind::PlusPlus => Some(PostfixOperator::PostIncrement),
            TokenKind::MinusMinus => Some(PostfixOperator::PostDecrement),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            return Ok(Expr::Postfix {
                op,
                expr: Box::new(expr),
            });
        }

        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        match self.peek().kind {
            TokenKind::Number => {
                let (lexeme, position) = {
                    let token = self.peek();
                    (token.lexeme.clone(), token.position)
                };
                self.advance();

                let value = if lexeme.contains('.') {
                    lexeme.parse::<f64>().ok().map(Number::Real)
                } else {
                    lexeme.parse::<i64>().ok().map(Number::Integer)
                };
                match value {
                    Some(number) => Ok(Expr::Literal(number)),
                    // Defensive; the lexer validated the literal already.
                    None => Err(ParseError::InvalidNumberToken { lexeme, position }),
                }
            }

            TokenKind::Ident => {
                let name = self.peek().lexeme.clone();
                self.advance();
                Ok(Expr::Variable(name))
            }

            TokenKind::LParen => {
                self.advance();
                let expr = self.expression()?;

                if self.peek().kind != TokenKind::RParen {
                    return Err(ParseError::ExpectedClosingParen {
                        position: self.peek().position,
                    });
                }
                self.advance();
                Ok(expr)
            }

            _ => Err(ParseError::ExpectedExpression {
                position: self.peek().position,
            }),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::{
        ast::{AssignOp, BinaryOperator, Expr, PostfixOperator, Stmt, UnaryOperator},
        error::ParseError,
        interpreter::lexer::tokenize,
        value::Number,
    };

    fn parse(line: &str) -> Result<Stmt, ParseError> {
        let tokens = tokenize(line)?;
        Parser::new(&tokens).parse_statement()
    }

    fn parse_expr(line: &str) -> Expr {
        let Stmt::Assignment { expr, .. } = parse(line).expect("line should parse");
        expr
    }

    fn literal(n: i64) -> Box<Expr> {
        Box::new(Expr::Literal(Number::Integer(n)))
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            parse_expr("x = 2 + 3 * 4"),
            Expr::Binary {
                left: literal(2),
                op: BinaryOperator::Add,
                right: Box::new(Expr::Binary {
                    left: literal(3),
                    op: BinaryOperator::Mul,
                    right: literal(4),
                }),
            }
        );
    }

    #[test]
    fn parentheses_reset_precedence() {
        assert_eq!(
            parse_expr("x = (2 + 3) * 4"),
            Expr::Binary {
                left: Box::new(Expr::Binary {
                    left: literal(2),
                    op: BinaryOperator::Add,
                    right: literal(3),
                }),
                op: BinaryOperator::Mul,
                right: literal(4),
            }
        );
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(
            parse_expr("x = 2 ^ 3 ^ 2"),
            Expr::Binary {
                left: literal(2),
                op: BinaryOperator::Pow,
                right: Box::new(Expr::Binary {
                    left: literal(3),
                    op: BinaryOperator::Pow,
                    right: literal(2),
                }),
            }
        );
    }

    #[test]
    fn prefix_minus_wraps_the_power_parse() {
        assert_eq!(
            parse_expr("x = -2 ^ 2"),
            Expr::Unary {
                op: UnaryOperator::Minus,
                expr: Box::new(Expr::Binary {
                    left: literal(2),
                    op: BinaryOperator::Pow,
                    right: literal(2),
                }),
            }
        );
    }

    #[test]
    fn postfix_binds_tighter_than_prefix() {
        assert_eq!(
            parse_expr("x = ++i--"),
            Expr::Unary {
                op: UnaryOperator::PreIncrement,
                expr: Box::new(Expr::Postfix {
                    op: PostfixOperator::PostDecrement,
                    expr: Box::new(Expr::Variable("i".to_string())),
                }),
            }
        );
    }

    #[test]
    fn all_assignment_operators_are_recognized() {
        for (line, expected) in [
            ("x = 1", AssignOp::Assign),
            ("x += 1", AssignOp::AddAssign),
            ("x -= 1", AssignOp::SubAssign),
            ("x *= 1", AssignOp::MulAssign),
            ("x /= 1", AssignOp::DivAssign),
            ("x %= 1", AssignOp::ModAssign),
            ("x ^= 1", AssignOp::PowAssign),
        ] {
            let Stmt::Assignment { op, .. } = parse(line).expect("line should parse");
            assert_eq!(op, expected, "line: {line}");
        }
    }

    #[test]
    fn literal_kind_follows_the_decimal_point() {
        assert_eq!(parse_expr("x = 8"), Expr::Literal(Number::Integer(8)));
        assert_eq!(parse_expr("x = 8.0"), Expr::Literal(Number::Real(8.0)));
    }

    #[test]
    fn missing_identifier_is_rejected() {
        assert_eq!(
            parse("= 5"),
            Err(ParseError::ExpectedIdentifier { position: 0 })
        );
    }

    #[test]
    fn missing_assign_op_is_rejected() {
        assert_eq!(
            parse("x 5"),
            Err(ParseError::ExpectedAssignOp { position: 2 })
        );
    }

    #[test]
    fn unclosed_parenthesis_is_rejected() {
        assert_eq!(
            parse("x = (1 + 2"),
            Err(ParseError::ExpectedClosingParen { position: 10 })
        );
    }

    #[test]
    fn empty_group_is_rejected() {
        assert_eq!(
            parse("x = ()"),
            Err(ParseError::ExpectedExpression { position: 5 })
        );
    }

    #[test]
    fn invalid_expression_start_is_rejected() {
        assert_eq!(
            parse("x = * 7"),
            Err(ParseError::ExpectedExpression { position: 4 })
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(
            parse("x = 1 2"),
            Err(ParseError::UnexpectedTokenAfterExpression {
                lexeme: "2".to_string(),
                position: 6,
            })
        );
    }
}
