use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod block;
pub mod codegen;
pub mod config;
pub mod decl;
pub mod errors;
pub mod expression;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod program;
pub mod statement;
pub mod symboltable;
pub mod token;
pub mod types;
pub mod visiters;

pub const VERSION: &str = "0.1.0";

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::errors::{Tl13Error, Tl13Result};

pub fn read(filename: &Path) -> Tl13Result<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) => {
            if !ext.eq("tl13") {
                return Err(Tl13Error::FileReadError(
                    "File must have a .tl13 extension".to_string(),
                ));
            }
        }
        None => {
            return Err(Tl13Error::FileReadError(
                "File must have a .tl13 extension".to_string(),
            ));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
