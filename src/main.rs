use clap::Parser;
use std::{fs, path::PathBuf, process::Command, time::Instant};
use tl13c::codegen::CCodeGenerator;
use tl13c::errors::{Tl13Error, Tl13Result};
use tl13c::lexer::scan;
use tl13c::read;
use tl13c::symboltable::SymbolTable;
use tl13c::token::Token;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "TL13 compiler that generates C source",
    long_about = "TL13 compiler that generates C source.\n\
                 This compiler takes TL13 source code and translates it to an\n\
                 equivalent C program. It performs lexical analysis, parsing,\n\
                 and a single type-checking translation pass.\n\
                 \n\
                 Example usage:\n\
                 tl13c input.tl13                  # Translate to input.c\n\
                 tl13c input.tl13 -o output.c      # Specify output file\n\
                 tl13c input.tl13 --print-c        # Print the generated C\n\
                 tl13c input.tl13 --show-ast       # Display abstract syntax tree\n\
                 tl13c input.tl13 --dump-symbols   # Display the symbol table\n\
                 tl13c input.tl13 --cc             # Build the C output with cc"
)]
struct Cli {
    // The path to the file to compile
    path: PathBuf,

    // Output file path (defaults to input file with .c extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Print generated C code
    #[arg(short = 'c', long)]
    print_c: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show compilation timing
    #[arg(short, long)]
    timing: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Show the symbol table after translation
    #[arg(long)]
    dump_symbols: bool,

    // Run the system C compiler on the generated file
    #[arg(long)]
    cc: bool,
}

// Compilation statistics for performance analysis
#[derive(Debug)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    codegen_time: f64,
    cc_time: f64,
    total_time: f64,
    token_count: usize,
    emitted_lines: usize,
}

impl CompilationStats {
    fn new() -> Self {
        Self {
            lexer_time: 0.0,
            parser_time: 0.0,
            codegen_time: 0.0,
            cc_time: 0.0,
            total_time: 0.0,
            token_count: 0,
            emitted_lines: 0,
        }
    }
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Generate output file path from input path if not specified
fn determine_output_path(input_path: &PathBuf, output: &Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => {
            let basename = input_path.file_stem().unwrap_or_default();
            let mut path = PathBuf::from(basename);
            path.set_extension("c");
            path
        }
    }
}

// Perform lexical analysis phase
fn lexical_analysis(
    bytes: &str,
    stats: &mut CompilationStats,
    verbose: bool,
) -> Tl13Result<Vec<(Token, usize)>> {
    let lexer_start = Instant::now();
    let mut state = tl13c::LineNumber::default();
    let tokens = scan(&mut state, bytes)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }

    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(
    tokens: &[(Token, usize)],
    stats: &mut CompilationStats,
    verbose: bool,
) -> Tl13Result<Option<Box<dyn tl13c::ast::Node>>> {
    let parser_start = Instant::now();
    let mut parser = tl13c::parser::Parser::new(tokens);
    let ast = parser.parse()?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
    }

    Ok(ast)
}

// Run the system C compiler on the generated output
fn compile_with_cc(c_file: &PathBuf, verbose: bool) -> Tl13Result<f64> {
    let start_time = Instant::now();
    let exe_file = c_file.with_extension("");

    let output = Command::new("cc")
        .arg("-o")
        .arg(&exe_file)
        .arg(c_file)
        .output()
        .map_err(|e| Tl13Error::compilation_error("cc", format!("Failed to invoke cc: {}", e)))?;

    if !output.status.success() {
        return Err(Tl13Error::compilation_error(
            "cc",
            format!(
                "C compiler failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ),
        ));
    }

    let cc_time = start_time.elapsed().as_secs_f64();
    if verbose {
        println!("Executable created: {}", exe_file.display());
    }
    Ok(cc_time)
}

// Print detailed compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\nCompilation Statistics:");
    println!("  Lexical Analysis: {:>8.3}s", stats.lexer_time);
    println!("  Parsing:          {:>8.3}s", stats.parser_time);
    println!("  Translation:      {:>8.3}s", stats.codegen_time);
    println!("  C Compilation:    {:>8.3}s", stats.cc_time);
    println!("  Total Time:       {:>8.3}s", stats.total_time);
    println!("\nCode Metrics:");
    println!("  Tokens:           {}", stats.token_count);
    println!("  Emitted C lines:  {}", stats.emitted_lines);
}

fn main() {
    let args = Cli::parse();
    let start_time = Instant::now();
    let mut stats = CompilationStats::new();

    // Validate input file exists
    if !args.path.exists() {
        fatal(&format!(
            "Input file does not exist: {}",
            args.path.display()
        ));
    }

    // Read input file
    let source_str = match read(&args.path) {
        Ok(source) => source,
        Err(e) => fatal(&format!("{}", e)),
    };
    if args.verbose {
        println!("Read {} bytes from input file", source_str.len());
    }

    // Lexical analysis
    let tokens = match lexical_analysis(&source_str, &mut stats, args.verbose) {
        Ok(tokens) => tokens,
        Err(e) => fatal(&format!("{}", e)),
    };

    // Parsing
    let ast = match parsing_phase(&tokens, &mut stats, args.verbose) {
        Ok(ast) => ast,
        Err(e) => fatal(&format!("{}", e)),
    };

    // Show AST if requested
    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        if let Some(ref ast) = ast {
            ast.print(0);
        } else {
            println!("  (empty)");
        }
    }

    // Translation
    let codegen_start = Instant::now();
    let mut generator = CCodeGenerator::new(SymbolTable::new());
    let result = generator.generate_code(ast);
    stats.codegen_time = codegen_start.elapsed().as_secs_f64();

    // Warnings and reported shape errors go to stderr, never into the
    // generated code stream.
    for diagnostic in generator.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    // Whatever was emitted before a fatal error is still flushed; the
    // output stream is not transactional.
    let output = generator.get_output();
    stats.emitted_lines = output.lines().count();
    let output_path = determine_output_path(&args.path, &args.output);
    if let Err(e) = fs::write(&output_path, &output) {
        fatal(&format!(
            "Failed to write output file '{}': {}",
            output_path.display(),
            e
        ));
    }

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if args.verbose {
        println!("Translation completed in {:.3}s", stats.codegen_time);
        println!("C output written to: {}", output_path.display());
    }

    if args.print_c {
        println!("{}", output);
    }

    if args.dump_symbols {
        generator.symbol_table().print_symbols();
    }

    // Build the generated C unless translation-only output was requested
    if args.cc {
        match compile_with_cc(&output_path, args.verbose) {
            Ok(cc_time) => stats.cc_time = cc_time,
            Err(e) => fatal(&format!("{}", e)),
        }
    }

    stats.total_time = start_time.elapsed().as_secs_f64();

    // Print timing information if requested
    if args.timing {
        print_stats(&stats);
    }

    if args.verbose {
        println!("Compilation successful!");
    }
}
