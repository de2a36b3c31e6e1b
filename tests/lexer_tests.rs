use tl13c::errors::Tl13Error;
use tl13c::lexer::scan;
use tl13c::token::Token;
use tl13c::LineNumber;

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_source(source: &str) -> Vec<(Token, usize)> {
        let mut state = LineNumber::default();
        scan(&mut state, source).expect("scan failed")
    }

    #[test]
    fn test_keywords() {
        let tokens = scan_source("if then else while do begin end int bool true false div mod");
        let expected = [
            Token::If,
            Token::Then,
            Token::Else,
            Token::While,
            Token::Do,
            Token::Begin,
            Token::End,
            Token::Int,
            Token::Bool,
            Token::True,
            Token::False,
            Token::Div,
            Token::Mod,
        ];
        assert_eq!(tokens.len(), expected.len());
        for (found, expected) in tokens.iter().zip(expected.iter()) {
            assert_eq!(&found.0, expected);
        }
    }

    #[test]
    fn test_io_keywords_both_spellings() {
        let tokens = scan_source("writeInt writeint readInt readint");
        assert_eq!(tokens[0].0, Token::WriteInt);
        assert_eq!(tokens[1].0, Token::WriteInt);
        assert_eq!(tokens[2].0, Token::ReadInt);
        assert_eq!(tokens[3].0, Token::ReadInt);
    }

    #[test]
    fn test_identifier_payload() {
        let tokens = scan_source("counter _tmp x2");
        match &tokens[0].0 {
            Token::Ident(name) => assert_eq!(name, "counter"),
            other => panic!("expected identifier, got {:?}", other),
        }
        match &tokens[1].0 {
            Token::Ident(name) => assert_eq!(name, "_tmp"),
            other => panic!("expected identifier, got {:?}", other),
        }
        match &tokens[2].0 {
            Token::Ident(name) => assert_eq!(name, "x2"),
            other => panic!("expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_operators_and_punctuation() {
        let tokens = scan_source(":= : ; ( ) + - * = != < > <= >=");
        let expected = [
            Token::Assign,
            Token::Colon,
            Token::Semicolon,
            Token::LParen,
            Token::RParen,
            Token::Plus,
            Token::Minus,
            Token::Multiply,
            Token::Equal,
            Token::NotEqual,
            Token::LessThan,
            Token::GreaterThan,
            Token::LessThanEqual,
            Token::GreaterThanEqual,
        ];
        assert_eq!(tokens.len(), expected.len());
        for (found, expected) in tokens.iter().zip(expected.iter()) {
            assert_eq!(&found.0, expected);
        }
    }

    #[test]
    fn test_assignment_statement() {
        let tokens = scan_source("x := 42;");
        assert_eq!(tokens[0].0, Token::Ident(String::new()));
        assert_eq!(tokens[1].0, Token::Assign);
        match tokens[2].0 {
            Token::Number(value) => assert_eq!(value, 42),
            ref other => panic!("expected number, got {:?}", other),
        }
        assert_eq!(tokens[3].0, Token::Semicolon);
    }

    #[test]
    fn test_number_zero() {
        let tokens = scan_source("0");
        match tokens[0].0 {
            Token::Number(value) => assert_eq!(value, 0),
            ref other => panic!("expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_number_with_leading_zero_rejected() {
        let mut state = LineNumber::default();
        let result = scan(&mut state, "x := 007;");
        assert!(matches!(
            result,
            Err(Tl13Error::InvalidNumber { ref number, line: 1 }) if number == "007"
        ));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = scan_source("x := 1;\ny := 2;\n\nz := 3;");
        assert_eq!(tokens[0].1, 1);
        assert_eq!(tokens[4].1, 2);
        assert_eq!(tokens[8].1, 4);
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = scan_source("{ setup } x := { inline } 1;");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].0, Token::Ident(String::new()));
        assert_eq!(tokens[1].0, Token::Assign);
    }

    #[test]
    fn test_multiline_comment_counts_lines() {
        let tokens = scan_source("{ first\nsecond\nthird }\nx := 1;");
        assert_eq!(tokens[0].1, 4);
    }

    #[test]
    fn test_unterminated_comment() {
        let mut state = LineNumber::default();
        let result = scan(&mut state, "x := 1; { never closed");
        assert!(matches!(
            result,
            Err(Tl13Error::UnterminatedComment { line: 1 })
        ));
    }

    #[test]
    fn test_unknown_token() {
        let mut state = LineNumber::default();
        let result = scan(&mut state, "x := 1 & 2;");
        assert!(matches!(
            result,
            Err(Tl13Error::UnknownToken { token: '&', line: 1 })
        ));
    }

    #[test]
    fn test_bang_without_equal_is_rejected() {
        let mut state = LineNumber::default();
        let result = scan(&mut state, "x ! y");
        assert!(matches!(
            result,
            Err(Tl13Error::UnknownToken { token: '!', line: 1 })
        ));
    }

    #[test]
    fn test_empty_input() {
        let tokens = scan_source("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_small_program() {
        let tokens = scan_source("x : int;\nx := readInt();\nwriteInt(x * 2);\n");
        let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
        let expected = [
            Token::Ident(String::new()),
            Token::Colon,
            Token::Int,
            Token::Semicolon,
            Token::Ident(String::new()),
            Token::Assign,
            Token::ReadInt,
            Token::LParen,
            Token::RParen,
            Token::Semicolon,
            Token::WriteInt,
            Token::LParen,
            Token::Ident(String::new()),
            Token::Multiply,
            Token::Number(0),
            Token::RParen,
            Token::Semicolon,
        ];
        assert_eq!(kinds.len(), expected.len());
        for (found, expected) in kinds.iter().zip(expected.iter()) {
            assert_eq!(found, expected);
        }
    }
}
