//! shunt - a shunting-yard expression calculator
//!
//! Usage:
//!   shunt               Start interactive REPL
//!   shunt -c "expr"     Evaluate a single expression
//!   shunt calc.shunt    Evaluate a script file

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shunt::display::{format_number, format_tokens};
use shunt::{eval, lex, parse, substitute, Error};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
struct CliArgs {
    command: Option<String>,
    script: Option<String>,
    vars: Vec<(String, f64)>,
    trace: bool,
    help: bool,
    version: bool,
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        command: None,
        script: None,
        vars: Vec::new(),
        trace: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "-v" | "--var" => {
                let binding = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires name=value", args[i]))?;
                cli.vars.push(parse_binding(binding)?);
                i += 1;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
                return Err("-c requires an expression".to_string());
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                if path.starts_with('-') {
                    return Err(format!("unknown option '{}'", path));
                }
                cli.script = Some(path.to_string());
            }
        }
        i += 1;
    }

    Ok(cli)
}

/// Parse a `name=value` variable binding from the command line
fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("invalid binding '{}', expected name=value", text))?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(format!("invalid variable name '{}'", name));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid numeric value in '{}'", text))?;
    Ok((name.to_string(), value))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `name = expr` with an identifier on the left is an assignment
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (lhs, rhs) = line.split_once('=')?;
    let name = lhs.trim();
    if is_identifier(name) {
        Some((name, rhs))
    } else {
        None
    }
}

/// Variable bindings and options shared by the REPL, -c, and scripts
struct Session {
    vars: Vec<(String, f64)>,
    trace: bool,
}

impl Session {
    fn new(vars: Vec<(String, f64)>, trace: bool) -> Self {
        Session { vars, trace }
    }

    /// Bind a variable. Re-assignment updates in place, so substitution
    /// order stays the order of first assignment.
    fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.vars.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.vars.push((name.to_string(), value));
        }
    }

    /// Execute one line. Assignments update the session and yield no
    /// value; blank lines and `#` comments are skipped.
    fn execute(&mut self, line: &str) -> Result<Option<f64>, Error> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if let Some((name, rhs)) = split_assignment(line) {
            let value = self.evaluate(rhs)?;
            self.set(name, value);
            return Ok(None);
        }
        self.evaluate(line).map(Some)
    }

    fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        let bindings: Vec<(&str, f64)> =
            self.vars.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        let text = substitute(expression, &bindings);
        let tokens = lex(&text);
        if self.trace {
            eprintln!("tokens:  {}", format_tokens(&tokens));
        }
        let postfix = parse(tokens)?;
        if self.trace {
            eprintln!("postfix: {}", format_tokens(&postfix));
        }
        eval(&postfix)
    }
}

fn print_help() {
    println!(
        r#"shunt {} - a shunting-yard expression calculator

USAGE:
    shunt                        Start interactive REPL
    shunt -c <expression>        Evaluate a single expression
    shunt <script>               Evaluate a script file line by line
    shunt --help                 Show this help message
    shunt --version              Show version

OPTIONS:
    -v, --var name=value         Bind a variable (repeatable)
    --trace                      Print token and postfix sequences to stderr

EXPRESSIONS:
    Numbers, bound variables, the operators + - * / ^, and parentheses.
    Unary minus negates: -5+3 is -2, and 3--5 is 8.
    ^ binds tightest, then unary minus, then * /, then + -.
    Equal precedence groups left to right: 2-3-4 is (2-3)-4.

SCRIPTS AND THE REPL:
    expr                         Evaluate and print the result
    name = expr                  Bind a variable for later lines
    # comment                    Ignored
    vars                         List current bindings (REPL only)
    exit                         Quit (REPL only)
"#,
        VERSION
    );
}

fn print_version() {
    println!("shunt {}", VERSION);
}

/// Evaluate a single expression passed with -c
fn execute_command(session: &mut Session, cmd: &str) -> ExitCode {
    match session.execute(cmd) {
        Ok(Some(value)) => {
            println!("{}", format_number(value));
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shunt: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a script file line by line
fn execute_script(session: &mut Session, path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("shunt: error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    for (line_num, line) in content.lines().enumerate() {
        match session.execute(line) {
            Ok(Some(value)) => println!("{}", format_number(value)),
            Ok(None) => {}
            Err(e) => {
                eprintln!("shunt: error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_repl(session: &mut Session) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history_path = env::var_os("HOME").map(|home| PathBuf::from(home).join(".shunt_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!("shunt {} - infix expression calculator", VERSION);
    println!("Type an expression, 'name = expr' to bind a variable, 'exit' or Ctrl-D to quit.");

    loop {
        match rl.readline("shunt> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "exit" | "quit" => break,
                    "help" => {
                        print_help();
                        continue;
                    }
                    "vars" => {
                        for (name, value) in &session.vars {
                            println!("{} = {}", name, format_number(*value));
                        }
                        continue;
                    }
                    _ => {}
                }

                match session.execute(trimmed) {
                    Ok(Some(value)) => println!("{}", format_number(value)),
                    Ok(None) => {}
                    Err(e) => eprintln!("shunt: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("shunt: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let mut session = Session::new(cli.vars, cli.trace);

    if let Some(cmd) = cli.command {
        return execute_command(&mut session, &cmd);
    }

    if let Some(script) = cli.script {
        return execute_script(&mut session, &script);
    }

    match run_repl(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
