use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Tl13Error {
    // File and I/O errors
    FileReadError(String),
    FileWriteError(String),
    IoError(io::Error),

    // Lexical analysis errors
    LexerError {
        message: String,
        line: usize,
    },
    UnknownToken {
        token: char,
        line: usize,
    },
    UnterminatedComment {
        line: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    UnexpectedToken {
        token: String,
        line: usize,
    },

    // Translation errors
    TypeMismatch {
        expected: String,
        found: String,
        context: String,
    },
    CodeGenError {
        message: String,
    },

    // Compilation pipeline errors
    CompilationError {
        stage: String,
        message: String,
    },

    // Generic errors
    GenericError(String),
}

impl Tl13Error {
    /// Create a lexer error with line information
    pub fn lexer_error(message: impl Into<String>, line: usize) -> Self {
        Tl13Error::LexerError {
            message: message.into(),
            line,
        }
    }

    /// Create a syntax error
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        Tl13Error::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Create a type mismatch error; `context` names the construct that
    /// required the type (an operator, a condition, an assignment target).
    pub fn type_mismatch(
        expected: impl Into<String>,
        found: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Tl13Error::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
            context: context.into(),
        }
    }

    /// Create a code generation error
    pub fn codegen_error(message: impl Into<String>) -> Self {
        Tl13Error::CodeGenError {
            message: message.into(),
        }
    }

    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Tl13Error::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Tl13Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tl13Error::FileReadError(msg) => write!(f, "File read error: {}", msg),
            Tl13Error::FileWriteError(msg) => write!(f, "File write error: {}", msg),
            Tl13Error::IoError(err) => write!(f, "I/O error: {}", err),

            Tl13Error::LexerError { message, line } => {
                write!(f, "Lexer error at line {}: {}", line, message)
            }
            Tl13Error::UnknownToken { token, line } => {
                write!(f, "Unknown token '{}' at line {}", token, line)
            }
            Tl13Error::UnterminatedComment { line } => {
                write!(f, "Unterminated comment at line {}", line)
            }
            Tl13Error::InvalidNumber { number, line } => {
                write!(f, "Invalid number '{}' at line {}", number, line)
            }

            Tl13Error::SyntaxError {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Syntax error at line {}: expected '{}', found '{}'",
                    line, expected, found
                )
            }
            Tl13Error::UnexpectedToken { token, line } => {
                write!(f, "Unexpected token '{}' at line {}", token, line)
            }

            Tl13Error::TypeMismatch {
                expected,
                found,
                context,
            } => {
                write!(
                    f,
                    "Type mismatch: {} requires {} but found {}",
                    context, expected, found
                )
            }
            Tl13Error::CodeGenError { message } => {
                write!(f, "Code generation error: {}", message)
            }

            Tl13Error::CompilationError { stage, message } => {
                write!(f, "Compilation error in {}: {}", stage, message)
            }

            Tl13Error::GenericError(msg) => {
                write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Tl13Error {}

// Conversion implementations for common error types
impl From<io::Error> for Tl13Error {
    fn from(err: io::Error) -> Self {
        Tl13Error::IoError(err)
    }
}

impl From<String> for Tl13Error {
    fn from(err: String) -> Self {
        Tl13Error::GenericError(err)
    }
}

impl From<&str> for Tl13Error {
    fn from(err: &str) -> Self {
        Tl13Error::GenericError(err.to_string())
    }
}

// Type alias for Result with Tl13Error
pub type Tl13Result<T> = Result<T, Tl13Error>;
