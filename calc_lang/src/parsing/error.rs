#[derive(Debug, PartialEq, Eq)]
pub struct ParseOperatorError {
    pub symbol: String,
}

impl std::fmt::Display for ParseOperatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown operator symbol `{}`", self.symbol)
    }
}

impl std::error::Error for ParseOperatorError {}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownLexeme {
    pub lexeme: String,
}

impl std::fmt::Display for UnknownLexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expected an operand or an operator, got `{}`", self.lexeme)
    }
}

impl std::error::Error for UnknownLexeme {}
