use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "The lexer of the Zirco compiler")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    #[arg(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the token stream of a program
    Lex { file: String },
    /// Check a program for lexical errors
    Check { file: String },
}

impl Operation {
    pub fn file(&self) -> &str {
        match self {
            Operation::Lex { file } | Operation::Check { file } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_defaults_to_warnings() {
        let options = Options::parse_from(["zrc", "check", "main.zr"]);

        assert_eq!(options.verbose, 1);
        assert_eq!(options.operation.file(), "main.zr");
    }

    #[test]
    fn lex_takes_a_file() {
        let options = Options::parse_from(["zrc", "-v", "4", "lex", "main.zr"]);

        assert_eq!(options.verbose, 4);
        assert!(matches!(options.operation, Operation::Lex { .. }));
    }
}
