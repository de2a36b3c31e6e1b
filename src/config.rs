// Code emission constants
pub mod emission {
    pub const INDENT: &str = "    ";

    pub const PREAMBLE: &str =
        "#include <stdio.h>\n#include <stdlib.h>\n#include <stdbool.h>\n\nint main(void) {\n";
    pub const POSTAMBLE: &str = "}\n";
}

// Identifier renaming for the C target
pub mod c {
    use lazy_static::lazy_static;
    use std::collections::{HashMap, HashSet};

    lazy_static! {
        // C keywords, plus the library names the emitted program
        // references; a TL13 variable with one of these names must not
        // reach the output unchanged.
        pub static ref RESERVED_IDENTIFIERS: HashSet<String> = [
            "auto", "break", "case", "char", "const", "continue", "default", "do",
            "double", "else", "enum", "extern", "float", "for", "goto", "if",
            "inline", "int", "long", "register", "restrict", "return", "short",
            "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
            "unsigned", "void", "volatile", "while",
            "bool", "true", "false",
            "main", "printf", "scanf", "fprintf", "stderr", "exit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
    }

    pub fn rename_identifier(
        name: &str,
        mapped_identifiers: &mut HashMap<String, String>,
    ) -> String {
        let renamed = if RESERVED_IDENTIFIERS.contains(name) {
            format!("_{}", name)
        } else {
            name.to_string()
        };
        mapped_identifiers.insert(name.to_string(), renamed.clone());
        renamed
    }

    pub fn get_renamed_identifier(
        original: &str,
        mapped_identifiers: &HashMap<String, String>,
    ) -> String {
        mapped_identifiers
            .get(original)
            .cloned()
            .unwrap_or_else(|| original.to_string())
    }
}
