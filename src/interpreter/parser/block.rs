use crate::{
    ast::Stmt,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the statements of a block after its opening brace.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// A syntax error inside the block is recorded and the parser resumes at
    /// the next statement of the same block, so one bad line does not hide
    /// the errors that follow it.
    ///
    /// # Returns
    /// The statements that parsed successfully.
    ///
    /// # Errors
    /// `Expect '}' after block.` if the input ends before the closing brace.
    pub(super) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration_with_recovery() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
