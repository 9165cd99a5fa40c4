// Command-line interface for the svx toolchain.
//
// Two primary tools:
//   svx lint [--rules a,b] [--rule-config rule=key=value,...] [--autofix]
//            [--json] <files>...
//   svx format [--inplace] <file>
//
// Exit codes: 0 no findings, 1 findings present, 2 internal error.

mod scanner;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, ValueHint};
use tracing::warn;

use svx_analysis::linter::{statuses_to_json, Linter};
use svx_analysis::violation::LintViolation;
use svx_config::{Loader, SvxConfig};
use svx_format::formatter::render_line;
use svx_format::{PartitionPolicy, PreFormatToken, UnwrappedLine};
use svx_syntax::line_column::LineColumnMap;
use svx_syntax::token::Token;

fn build_cli() -> Command {
    Command::new("svx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lint and format SystemVerilog sources")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("lint")
                .about("Check files against the enabled style rules")
                .arg(
                    Arg::new("files")
                        .help("Files to check")
                        .required(true)
                        .num_args(1..)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rules")
                        .long("rules")
                        .help("Comma-separated rule names (default: configured rules)"),
                )
                .arg(
                    Arg::new("rule-config")
                        .long("rule-config")
                        .help("Per-rule configuration, e.g. undersized-binary-literal=hex=true")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("autofix")
                        .long("autofix")
                        .help("Apply each violation's first autofix in place")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Reformat a file")
                .arg(
                    Arg::new("file")
                        .help("File to format")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("inplace")
                        .long("inplace")
                        .help("Rewrite the file instead of printing to stdout")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let config = match load_config(matches.get_one::<String>("config")) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("svx: {message}");
            return ExitCode::from(2);
        }
    };

    let code = match matches.subcommand() {
        Some(("lint", sub)) => {
            let files: Vec<PathBuf> = sub
                .get_many::<String>("files")
                .unwrap()
                .map(PathBuf::from)
                .collect();
            run_lint(
                &files,
                &config,
                sub.get_one::<String>("rules").map(String::as_str),
                sub.get_many::<String>("rule-config")
                    .map(|values| values.map(String::as_str).collect())
                    .unwrap_or_default(),
                sub.get_flag("autofix"),
                sub.get_flag("json"),
            )
        }
        Some(("format", sub)) => run_format(
            Path::new(sub.get_one::<String>("file").unwrap()),
            sub.get_flag("inplace"),
        ),
        _ => unreachable!("subcommand required"),
    };
    ExitCode::from(code)
}

fn load_config(user_file: Option<&String>) -> Result<SvxConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = user_file {
        loader = loader.with_user_file(Path::new(path));
    }
    loader
        .load()
        .map_err(|error| format!("configuration error: {error}"))
}

fn run_lint(
    files: &[PathBuf],
    config: &SvxConfig,
    rules_override: Option<&str>,
    rule_configs: Vec<&str>,
    autofix: bool,
    json: bool,
) -> u8 {
    let selected: Vec<String> = match rules_override {
        Some(names) => names.split(',').map(|name| name.trim().to_string()).collect(),
        None => config.lint.rules.clone(),
    };

    let mut total_findings = 0usize;
    let mut json_reports = Vec::new();

    for file in files {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("svx: cannot read {}: {error}", file.display());
                return 2;
            }
        };

        let mut linter = Linter::new();
        for name in &selected {
            let configuration = rule_configs
                .iter()
                .find_map(|entry| {
                    entry
                        .split_once('=')
                        .filter(|(rule, _)| *rule == name.as_str())
                        .map(|(_, configuration)| configuration)
                })
                .unwrap_or_else(|| config.lint.configuration_for(name));
            if let Err(error) = linter.add_rule_by_name(name, configuration) {
                // Configuration errors skip the rule; analysis continues.
                warn!(rule = name.as_str(), %error, "skipping rule");
            }
        }

        let tokens = scanner::scan(&source);
        let tree = scanner::build_syntax_tree(&tokens);
        let statuses = match linter.lint(&source, &tokens, Some(&tree), None) {
            Ok(statuses) => statuses,
            Err(error) => {
                eprintln!("svx: {}: {error}", file.display());
                return 2;
            }
        };

        let violations: Vec<&LintViolation> = statuses
            .iter()
            .flat_map(|status| status.violations.iter())
            .collect();
        total_findings += violations.len();

        if json {
            json_reports.push(statuses_to_json(
                &statuses,
                &file.display().to_string(),
                &source,
            ));
        } else {
            print_text_report(file, &source, &statuses);
        }

        if autofix && !violations.is_empty() {
            match apply_first_fixes(&source, &violations) {
                Some(fixed) if fixed != source => {
                    if let Err(error) = fs::write(file, fixed) {
                        eprintln!("svx: cannot write {}: {error}", file.display());
                        return 2;
                    }
                }
                _ => {}
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Array(json_reports))
                .expect("report serializes")
        );
    }

    if total_findings > 0 {
        1
    } else {
        0
    }
}

fn print_text_report(
    file: &Path,
    source: &str,
    statuses: &[svx_analysis::rule::LintRuleStatus],
) {
    let map = LineColumnMap::new(source);
    for status in statuses {
        for violation in &status.violations {
            let position = map.position(violation.token.span.start);
            println!(
                "{}:{}:{}: {} [{}]",
                file.display(),
                position.line + 1,
                position.column + 1,
                violation.message,
                status.descriptor.name
            );
        }
    }
}

/// Applies the first autofix of each violation. Fixes whose edits overlap
/// an already-applied fix are dropped.
fn apply_first_fixes(source: &str, violations: &[&LintViolation]) -> Option<String> {
    let mut edits: Vec<svx_analysis::violation::Edit> = Vec::new();
    for violation in violations {
        if let Some(fix) = violation.autofixes.first() {
            let overlaps = fix.edits().iter().any(|candidate| {
                edits
                    .iter()
                    .any(|applied| candidate.start < applied.end && applied.start < candidate.end)
            });
            if !overlaps {
                edits.extend(fix.edits().iter().cloned());
            }
        }
    }
    if edits.is_empty() {
        return None;
    }
    edits.sort();
    let mut result = source.to_string();
    for edit in edits.iter().rev() {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }
    Some(result)
}

fn run_format(file: &Path, inplace: bool) -> u8 {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("svx: cannot read {}: {error}", file.display());
            return 2;
        }
    };

    let tokens = scanner::scan(&source);
    let formatted = preserve_format(&source, &tokens);

    if inplace {
        if formatted != source {
            if let Err(error) = fs::write(file, formatted) {
                eprintln!("svx: cannot write {}: {error}", file.display());
                return 2;
            }
        }
    } else {
        print!("{formatted}");
    }
    0
}

/// Line-preserving formatting: each source line becomes one unwrapped
/// line with its original indentation and inner spacing. Trailing
/// whitespace does not survive rendering and runs of blank lines
/// collapse to one.
fn preserve_format(source: &str, tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let map = LineColumnMap::new(source);
    let ftokens: Vec<PreFormatToken> = tokens.iter().cloned().map(PreFormatToken::new).collect();

    let mut lines: Vec<UnwrappedLine> = Vec::new();
    let mut current_line = map.position(tokens[0].span.start).line;
    let mut start = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        let line = map.position(token.span.start).line;
        if line != current_line {
            lines.push(preserved_line(start..index, &ftokens, &map));
            current_line = line;
            start = index;
        }
    }
    lines.push(preserved_line(start..tokens.len(), &ftokens, &map));

    let mut output = String::new();
    let mut previous_end_line: Option<usize> = None;
    for line in &lines {
        let first = &ftokens[line.tokens.start];
        let last = &ftokens[line.tokens.end - 1];
        let start_line = map.position(first.token.span.start).line;
        if let Some(previous) = previous_end_line {
            if start_line > previous + 1 {
                output.push('\n');
            }
        }
        output.push_str(&render_line(line, &ftokens, source));
        output.push('\n');
        previous_end_line = Some(map.position(last.token.span.end).line);
    }
    output
}

fn preserved_line(
    tokens: std::ops::Range<usize>,
    ftokens: &[PreFormatToken],
    map: &LineColumnMap,
) -> UnwrappedLine {
    let first = &ftokens[tokens.start];
    let indentation = map.position(first.token.span.start).column;
    UnwrappedLine::new(indentation, tokens, PartitionPolicy::Preserve)
}
