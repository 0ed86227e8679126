use super::*;
use crate::ast::Stmt;

impl<'a, T: TokenStream> Parser<'a, T> {
    /// Parses a single statement, dispatching on the current token.
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current {
            Token::Let => self.parse_let_stmt(),
            Token::Return => self.parse_return_stmt(),
            Token::LBrace => Some(Stmt::Block(self.parse_block())),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses `let <ident> = <expr>` with an optional trailing `;`.
    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        let ident = match &self.peek {
            Token::Ident(name) => name.clone(),
            _ => {
                self.error(ERR_EXPECTED_IDENTIFIER);
                return None;
            }
        };
        self.next();

        if !self.peek_is(&Token::Assign) {
            self.error(ERR_EXPECTED_ASSIGNMENT);
            return None;
        }
        self.next();

        // Advance onto the first token of the value expression.
        self.next();
        let value = self.parse_expr()?;

        if self.peek_is(&Token::Semicolon) {
            self.next();
        }

        Some(Stmt::Let { ident, value })
    }

    /// Parses `return <expr>` with an optional trailing `;`.
    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        self.next();
        let value = self.parse_expr()?;

        if self.peek_is(&Token::Semicolon) {
            self.next();
        }

        Some(Stmt::ReturnStmt(value))
    }

    /// Parses a bare expression in statement position, with an optional
    /// trailing `;`.
    fn parse_expr_stmt(&mut self) -> Option<Stmt> {
        let expr = self.parse_expr()?;

        if self.peek_is(&Token::Semicolon) {
            self.next();
        }

        Some(Stmt::ExprStmt(expr))
    }

    /// Parses statements until `}` or end of input, starting with `current`
    /// on the opening `{`. Statements that fail to parse are skipped, not
    /// added; the block itself always materializes.
    pub(crate) fn parse_block(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        self.next();

        while self.current != Token::RBrace && self.current != Token::Eof {
            match self.parse_stmt() {
                Some(stmt) => {
                    statements.push(stmt);
                    self.next();
                }
                None => self.synchronize(),
            }
        }

        statements
    }
}
