//! HDL converter driver
//!
//! Loads a stored AST (the serde JSON of a `Context`) and prints the
//! interchange document exporters consume.

use clap::{Parser, Subcommand};
use hdlconv_ast::{symbol_type_name, Context, DocumentOptions, FunctionShape};
use hdlconv_common::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hdlconv")]
#[command(about = "HDL AST interchange tool")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the interchange document of a stored AST
    Dump {
        /// Stored AST (JSON)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Function document shape: complete or legacy
        #[arg(long, default_value_t = FunctionShape::Complete)]
        shape: FunctionShape,

        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Print the name of a raw symbol type tag
    Symbol {
        /// Raw tag value from the lexer tables
        #[arg(allow_negative_numbers = true)]
        raw: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::init();
    }

    match cli.command {
        Commands::Dump { input, output, shape, compact } => {
            if let Err(e) = dump_command(&input, output.as_deref(), shape, !compact) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Symbol { raw } => {
            println!("{}", symbol_type_name(raw));
        }
    }
}

/// Read a stored AST from disk
fn load_context(input_path: &Path) -> Result<Context> {
    let text = fs::read_to_string(input_path)?;
    let context: Context = serde_json::from_str(&text)?;
    log::info!(
        "loaded {} with {} functions",
        input_path.display(),
        context.functions.len()
    );
    Ok(context)
}

fn render_document(input_path: &Path, shape: FunctionShape, pretty: bool) -> Result<String> {
    let context = load_context(input_path)?;
    context.to_json_string(&DocumentOptions::new(shape), pretty)
}

fn dump_command(
    input_path: &Path,
    output_path: Option<&Path>,
    shape: FunctionShape,
    pretty: bool,
) -> Result<()> {
    let text = render_document(input_path, shape, pretty)?;

    if let Some(path) = output_path {
        fs::write(path, text + "\n")?;
        log::info!("document written to {}", path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hdlconv_ast::{Expr, Function, Statement, Variable};
    use hdlconv_common::{HdlError, Language};

    fn write_context(dir: &Path) -> PathBuf {
        let mut builder = Function::builder(
            "parity",
            false,
            Some(Expr::id("bit")),
            vec![Variable::new("v", Expr::id("bit_vector"))],
        );
        builder.add_statement(Statement::Return(Some(Expr::id("v"))));

        let mut ctx = Context::new(Language::Vhdl);
        ctx.add_function(builder.build());

        let path = dir.join("ast.json");
        fs::write(&path, serde_json::to_string(&ctx).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dump_complete_shape() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_context(dir.path());
        let output = dir.path().join("doc.json");

        dump_command(&input, Some(output.as_path()), FunctionShape::Complete, true).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc["language"], "vhdl");
        assert_eq!(doc["functions"][0]["name"], "parity");
        assert_eq!(doc["functions"][0]["body"][0]["type"], "RETURN");
    }

    #[test]
    fn test_dump_legacy_shape_is_compact() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_context(dir.path());

        let text = render_document(&input, FunctionShape::Legacy, false).unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains("\"body\""));
        assert!(text.contains("\"returnType\":{\"literal\""));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_context(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(HdlError::Io { .. })));
    }

    #[test]
    fn test_malformed_input_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"language\": \"vhdl\", \"functions\": [").unwrap();
        let result = load_context(&path);
        assert!(matches!(result, Err(HdlError::Json { .. })));
    }

    #[test]
    fn test_shape_flag_parsing() {
        let cli = Cli::try_parse_from(["hdlconv", "dump", "in.json", "--shape", "legacy"]).unwrap();
        match cli.command {
            Commands::Dump { shape, compact, .. } => {
                assert_eq!(shape, FunctionShape::Legacy);
                assert!(!compact);
            }
            Commands::Symbol { .. } => panic!("Expected dump command"),
        }

        assert!(Cli::try_parse_from(["hdlconv", "dump", "in.json", "--shape", "flat"]).is_err());
    }

    #[test]
    fn test_symbol_command_accepts_negative_tags() {
        let cli = Cli::try_parse_from(["hdlconv", "symbol", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Symbol { raw: -1 }));
    }
}
