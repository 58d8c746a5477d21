//! Field expression parser
//!
//! A recursive descent parser for user-typed arithmetic expressions with
//! proper operator precedence. Constructs outside the arithmetic subset are
//! recognized and rejected with [`FormulaError::DisallowedOperation`] so the
//! caller can tell "not allowed" apart from "not a formula".

use crate::ast::{BinaryOperator, FieldExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};

/// Parse an expression string into an AST
///
/// # Example
/// ```rust
/// use meshpost_formula::parse_expression;
///
/// let ast = parse_expression("1+2").unwrap();
/// let ast = parse_expression("(P1 - P3) / 2").unwrap();
/// let ast = parse_expression("sqrt(x^2 + y^2)").unwrap();
/// ```
pub fn parse_expression(expression: &str) -> FormulaResult<FieldExpr> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(FormulaError::Syntax("Expression is empty".into()));
    }

    let mut parser = ExprParser::new(expression)?;
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(FormulaError::Syntax(format!(
            "Unexpected input after expression: '{}'",
            &parser.input[parser.token_start..]
        )));
    }

    Ok(expr)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    // Literals and names
    Number(f64),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Comma,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

/// Expression parser
struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
    /// Byte offset where the current token started (for error reporting)
    token_start: usize,
    current_token: Option<Token>,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            token_start: 0,
            current_token: None,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.skip_whitespace();
        self.token_start = self.pos;
        self.current_token = Some(self.scan_token()?);
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        if self.is_at_end() {
            return Ok(Token::Eof);
        }

        let c = self.peek_char().unwrap();

        // Single-character tokens
        match c {
            '+' => {
                self.advance();
                return Ok(Token::Plus);
            }
            '-' => {
                self.advance();
                return Ok(Token::Minus);
            }
            '*' => {
                self.advance();
                // '**' power spelling is accepted alongside '^'
                if self.peek_char() == Some('*') {
                    self.advance();
                    return Ok(Token::Caret);
                }
                return Ok(Token::Star);
            }
            '/' => {
                self.advance();
                return Ok(Token::Slash);
            }
            '^' => {
                self.advance();
                return Ok(Token::Caret);
            }
            ',' => {
                self.advance();
                return Ok(Token::Comma);
            }
            '(' => {
                self.advance();
                return Ok(Token::LeftParen);
            }
            ')' => {
                self.advance();
                return Ok(Token::RightParen);
            }
            _ => {}
        }

        // Number
        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            return self.scan_number();
        }

        // Identifier (field or function name)
        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_identifier();
        }

        // Everything else the source language would have accepted is outside
        // the arithmetic allow-list and rejected as such.
        if let Some(construct) = disallowed_construct(c) {
            return Err(FormulaError::DisallowedOperation(construct.to_string()));
        }

        Err(FormulaError::Syntax(format!("Unexpected character '{c}'")))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent part
        if self.peek_char().map_or(false, |c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().map_or(false, |c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // A bare exponent marker ("1e", "2e+") reaches here; it must fail,
        // not quietly become a value
        let num_str = &self.input[start..self.pos];
        let num: f64 = num_str
            .parse()
            .map_err(|_| FormulaError::Syntax(format!("Invalid number '{num_str}'")))?;
        Ok(Token::Number(num))
    }

    fn scan_identifier(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        let text = &self.input[start..self.pos];

        // Keyword operators are control flow, not arithmetic
        if KEYWORDS.contains(&text) {
            return Err(FormulaError::DisallowedOperation(format!(
                "keyword '{text}'"
            )));
        }

        Ok(Token::Identifier(text.to_string()))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn current_token(&self) -> &Token {
        self.current_token.as_ref().unwrap_or(&Token::Eof)
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = self.current_token.take().unwrap_or(Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(FormulaError::Syntax(format!(
                "Expected {:?}, got {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Exponentiation: ^ (right associative)
    // 4. Unary: -
    // 5. Primary: literals, field references, function calls, parentheses
    //
    // Unary minus binding tighter than ^ follows spreadsheet convention:
    // -x^2 is (-x)^2. Write -(x^2) for the other reading.

    fn parse_expression(&mut self) -> FormulaResult<FieldExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<FieldExpr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = FieldExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<FieldExpr> {
        let mut left = self.parse_exponent()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_exponent()?;
            left = FieldExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_exponent(&mut self) -> FormulaResult<FieldExpr> {
        let left = self.parse_unary()?;

        if matches!(self.current_token(), Token::Caret) {
            self.consume()?;
            let right = self.parse_exponent()?; // Right associative
            return Ok(FieldExpr::BinaryOp {
                op: BinaryOperator::Power,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> FormulaResult<FieldExpr> {
        // Prefix unary minus
        if matches!(self.current_token(), Token::Minus) {
            self.consume()?;
            let operand = self.parse_unary()?;
            return Ok(FieldExpr::UnaryOp {
                op: UnaryOperator::Negate,
                operand: Box::new(operand),
            });
        }

        // Prefix plus (no-op)
        if matches!(self.current_token(), Token::Plus) {
            self.consume()?;
            return self.parse_unary();
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> FormulaResult<FieldExpr> {
        match self.current_token().clone() {
            Token::Number(n) => {
                self.consume()?;
                Ok(FieldExpr::Number(n))
            }

            Token::LeftParen => {
                self.consume()?;
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                Ok(expr)
            }

            Token::Identifier(name) => {
                self.consume()?;
                // Followed by '(' it is a function call, otherwise a field
                if matches!(self.current_token(), Token::LeftParen) {
                    self.parse_function_call(name)
                } else {
                    Ok(FieldExpr::FieldRef(name))
                }
            }

            _ => Err(FormulaError::Syntax(format!(
                "Unexpected token: {:?}",
                self.current_token()
            ))),
        }
    }

    fn parse_function_call(&mut self, name: String) -> FormulaResult<FieldExpr> {
        self.expect(&Token::LeftParen)?;

        let mut args = Vec::new();

        // Parse arguments
        if !matches!(self.current_token(), Token::RightParen) {
            args.push(self.parse_expression()?);

            while matches!(self.current_token(), Token::Comma) {
                self.consume()?;
                args.push(self.parse_expression()?);
            }
        }

        self.expect(&Token::RightParen)?;

        Ok(FieldExpr::Function {
            name: name.to_lowercase(),
            args,
        })
    }
}

/// Keyword operators and statement keywords, rejected as control-flow
/// constructs rather than treated as field names.
const KEYWORDS: &[&str] = &[
    "and", "or", "not", "if", "else", "elif", "for", "while", "in", "is", "lambda", "def",
    "import", "return",
];

/// Map a character opening a forbidden construct to its name.
///
/// These are all things a general-purpose expression language would accept;
/// naming them keeps the "not allowed" rejection distinguishable from a plain
/// syntax error.
fn disallowed_construct(c: char) -> Option<&'static str> {
    match c {
        '=' => Some("assignment or comparison"),
        '<' | '>' => Some("comparison"),
        '!' => Some("comparison or statement syntax"),
        '&' | '|' => Some("logical operator"),
        '%' => Some("modulo operator"),
        '"' | '\'' => Some("string literal"),
        '[' | ']' => Some("indexing"),
        '{' | '}' => Some("block or collection literal"),
        '.' => Some("member access"),
        ';' => Some("statement sequence"),
        ':' => Some("slicing or statement syntax"),
        '@' => Some("decorator or matrix operator"),
        '#' => Some("comment"),
        '$' | '?' | '~' | '\\' | '`' => Some("non-arithmetic operator"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        let ast = parse_expression("42").unwrap();
        assert_eq!(ast, FieldExpr::Number(42.0));

        let ast = parse_expression("3.14").unwrap();
        assert_eq!(ast, FieldExpr::Number(3.14));

        let ast = parse_expression("1e10").unwrap();
        assert_eq!(ast, FieldExpr::Number(1e10));

        let ast = parse_expression(".5").unwrap();
        assert_eq!(ast, FieldExpr::Number(0.5));
    }

    #[test]
    fn test_parse_field_reference() {
        let ast = parse_expression("Von").unwrap();
        assert_eq!(ast, FieldExpr::FieldRef("Von".into()));

        let ast = parse_expression("sx").unwrap();
        assert_eq!(ast, FieldExpr::FieldRef("sx".into()));
    }

    #[test]
    fn test_parse_arithmetic_precedence() {
        let ast = parse_expression("1+2*3").unwrap();
        // Should parse as 1+(2*3) due to precedence
        if let FieldExpr::BinaryOp { op, left, right } = ast {
            assert_eq!(op, BinaryOperator::Add);
            assert_eq!(*left, FieldExpr::Number(1.0));
            assert!(matches!(
                *right,
                FieldExpr::BinaryOp {
                    op: BinaryOperator::Multiply,
                    ..
                }
            ));
        } else {
            panic!("Expected BinaryOp");
        }
    }

    #[test]
    fn test_parse_parentheses() {
        let ast = parse_expression("(1+2)*3").unwrap();
        if let FieldExpr::BinaryOp { op, left, right } = ast {
            assert_eq!(op, BinaryOperator::Multiply);
            assert!(matches!(
                *left,
                FieldExpr::BinaryOp {
                    op: BinaryOperator::Add,
                    ..
                }
            ));
            assert_eq!(*right, FieldExpr::Number(3.0));
        } else {
            panic!("Expected BinaryOp");
        }
    }

    #[test]
    fn test_parse_power_right_associative() {
        // 2^3^2 parses as 2^(3^2)
        let ast = parse_expression("2^3^2").unwrap();
        if let FieldExpr::BinaryOp { op, left, right } = ast {
            assert_eq!(op, BinaryOperator::Power);
            assert_eq!(*left, FieldExpr::Number(2.0));
            assert!(matches!(
                *right,
                FieldExpr::BinaryOp {
                    op: BinaryOperator::Power,
                    ..
                }
            ));
        } else {
            panic!("Expected BinaryOp");
        }
    }

    #[test]
    fn test_parse_double_star_power() {
        assert_eq!(
            parse_expression("x**2").unwrap(),
            parse_expression("x^2").unwrap()
        );
    }

    #[test]
    fn test_parse_unary_minus() {
        let ast = parse_expression("-P1").unwrap();
        assert!(matches!(
            ast,
            FieldExpr::UnaryOp {
                op: UnaryOperator::Negate,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_function_call() {
        let ast = parse_expression("sqrt(x)").unwrap();
        if let FieldExpr::Function { name, args } = ast {
            assert_eq!(name, "sqrt");
            assert_eq!(args.len(), 1);
        } else {
            panic!("Expected Function");
        }

        let ast = parse_expression("MAX(P1, P2)").unwrap();
        if let FieldExpr::Function { name, args } = ast {
            // Names are folded to lowercase; the registry is case-insensitive
            assert_eq!(name, "max");
            assert_eq!(args.len(), 2);
        } else {
            panic!("Expected Function");
        }
    }

    #[test]
    fn test_parse_nested_expression() {
        let ast = parse_expression("sqrt(sx^2 + sy^2 + sz^2) / (2 * Von)").unwrap();
        assert!(matches!(
            ast,
            FieldExpr::BinaryOp {
                op: BinaryOperator::Divide,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_number_is_syntax_error() {
        // A dangling exponent marker must not be coerced to a value
        for expr in ["1e", "1.5e", "2e+", "3E-", "1e * P1"] {
            match parse_expression(expr) {
                Err(FormulaError::Syntax(msg)) => {
                    assert!(msg.contains("Invalid number"), "{expr}: got '{msg}'")
                }
                other => panic!("{expr}: expected Syntax error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_power() {
        // -x^2 parses as (-x)^2, matching spreadsheet convention
        let ast = parse_expression("-x^2").unwrap();
        if let FieldExpr::BinaryOp { op, left, right } = ast {
            assert_eq!(op, BinaryOperator::Power);
            assert!(matches!(
                *left,
                FieldExpr::UnaryOp {
                    op: UnaryOperator::Negate,
                    ..
                }
            ));
            assert_eq!(*right, FieldExpr::Number(2.0));
        } else {
            panic!("Expected BinaryOp");
        }
    }

    #[test]
    fn test_empty_expression_is_syntax_error() {
        assert!(matches!(
            parse_expression("   "),
            Err(FormulaError::Syntax(_))
        ));
    }

    #[test]
    fn test_trailing_garbage_is_syntax_error() {
        assert!(matches!(
            parse_expression("1 + 2 3"),
            Err(FormulaError::Syntax(_))
        ));
    }

    #[test]
    fn test_unbalanced_parens_is_syntax_error() {
        assert!(matches!(
            parse_expression("(1 + 2"),
            Err(FormulaError::Syntax(_))
        ));
    }

    #[test]
    fn test_disallowed_constructs() {
        for (expr, needle) in [
            ("x = 1", "assignment"),
            ("P1 < P2", "comparison"),
            ("a and b", "keyword"),
            ("x if y else z", "keyword"),
            ("lambda n: n", "keyword"),
            ("\"text\"", "string"),
            ("x[0]", "indexing"),
            ("obj.attr", "member access"),
            ("x; y", "statement"),
            ("x % 2", "modulo"),
        ] {
            match parse_expression(expr) {
                Err(FormulaError::DisallowedOperation(msg)) => {
                    assert!(msg.contains(needle), "{expr}: got '{msg}'")
                }
                other => panic!("{expr}: expected DisallowedOperation, got {other:?}"),
            }
        }
    }
}
