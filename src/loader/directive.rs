//! Line-level directive decoding.

use std::str::FromStr;

use crate::dispatching::Algorithm;
use crate::error::ConfigErrorKind;
use crate::models::{Process, Tick};

/// One decoded workload line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive {
    /// `processcount <N>`, advisory.
    ProcessCount(usize),
    /// `runfor <ticks>`.
    RunFor(Tick),
    /// `use <algorithm>`.
    Use(Algorithm),
    /// `process name <name> arrival <int> burst <int> [priority <int>]`.
    Process(Process),
    /// `end`.
    End,
}

impl Directive {
    /// Decodes one line. Blank lines and `#` comments yield `None`.
    ///
    /// Directive words and keys are case-insensitive; values are not,
    /// except the algorithm name.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, ConfigErrorKind> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };

        let directive = match word.to_ascii_lowercase().as_str() {
            "processcount" => {
                let n = parse_int("processcount", required(&mut tokens, "processcount", "count")?)?;
                Directive::ProcessCount(n)
            }
            "runfor" => {
                let ticks = parse_int("runfor", required(&mut tokens, "runfor", "ticks")?)?;
                Directive::RunFor(ticks)
            }
            "use" => {
                let name = required(&mut tokens, "use", "algorithm")?;
                Directive::Use(name.parse()?)
            }
            "process" => Directive::Process(parse_process(&mut tokens)?),
            "end" => Directive::End,
            _ => return Err(ConfigErrorKind::UnknownDirective(word.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(ConfigErrorKind::TrailingToken {
                directive: directive.keyword(),
                token: extra.to_string(),
            }),
            None => Ok(Some(directive)),
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Directive::ProcessCount(_) => "processcount",
            Directive::RunFor(_) => "runfor",
            Directive::Use(_) => "use",
            Directive::Process(_) => "process",
            Directive::End => "end",
        }
    }
}

const PROCESS_KEYS: [&str; 4] = ["name", "arrival", "burst", "priority"];

/// Decodes the key/value pairs of a `process` directive. Consumes every token.
fn parse_process<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Process, ConfigErrorKind> {
    let mut values: [Option<&str>; 4] = [None; 4];

    while let Some(raw_key) = tokens.next() {
        let lower = raw_key.to_ascii_lowercase();
        let Some(slot) = PROCESS_KEYS.iter().position(|k| *k == lower) else {
            return Err(ConfigErrorKind::UnknownKey {
                key: raw_key.to_string(),
            });
        };
        if values[slot].is_some() {
            return Err(ConfigErrorKind::DuplicateKey { key: lower });
        }
        values[slot] = Some(required(tokens, "process", PROCESS_KEYS[slot])?);
    }

    let [name, arrival, burst, priority] = values;
    let missing = |argument| ConfigErrorKind::MissingArgument {
        directive: "process",
        argument,
    };

    let name = name.ok_or_else(|| missing("name"))?;
    let arrival = parse_int("arrival", arrival.ok_or_else(|| missing("arrival"))?)?;
    let burst = parse_int("burst", burst.ok_or_else(|| missing("burst"))?)?;
    let priority = priority.map(|v| parse_int("priority", v)).transpose()?;

    Ok(Process::new(name, arrival, burst).with_priority(priority.unwrap_or(0)))
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    directive: &'static str,
    argument: &'static str,
) -> Result<&'a str, ConfigErrorKind> {
    tokens
        .next()
        .ok_or(ConfigErrorKind::MissingArgument { directive, argument })
}

fn parse_int<T: FromStr>(field: &'static str, value: &str) -> Result<T, ConfigErrorKind> {
    value.parse().map_err(|_| ConfigErrorKind::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::UnknownAlgorithm;

    fn parse(line: &str) -> Result<Option<Directive>, ConfigErrorKind> {
        Directive::parse(line)
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t"), Ok(None));
        assert_eq!(parse("# processcount 3"), Ok(None));
        assert_eq!(parse("  #indented comment"), Ok(None));
    }

    #[test]
    fn test_simple_directives() {
        assert_eq!(parse("processcount 2"), Ok(Some(Directive::ProcessCount(2))));
        assert_eq!(parse("runfor 20"), Ok(Some(Directive::RunFor(20))));
        assert_eq!(parse("use sjf"), Ok(Some(Directive::Use(Algorithm::Sjf))));
        assert_eq!(parse("end"), Ok(Some(Directive::End)));
        assert_eq!(parse("RunFor 5"), Ok(Some(Directive::RunFor(5))));
        assert_eq!(parse("USE FCFS"), Ok(Some(Directive::Use(Algorithm::Fcfs))));
    }

    #[test]
    fn test_process_directive() {
        let d = parse("process name P1 arrival 0 burst 5").unwrap();
        assert_eq!(d, Some(Directive::Process(Process::new("P1", 0, 5))));

        let d = parse("process name P2 arrival 2 burst 2 priority 1").unwrap();
        assert_eq!(
            d,
            Some(Directive::Process(Process::new("P2", 2, 2).with_priority(1)))
        );
    }

    #[test]
    fn test_process_keys_any_order() {
        let d = parse("process burst 3 priority -2 name Job arrival 7").unwrap();
        assert_eq!(
            d,
            Some(Directive::Process(Process::new("Job", 7, 3).with_priority(-2)))
        );
    }

    #[test]
    fn test_process_name_keeps_case() {
        let Some(Directive::Process(p)) = parse("process name MiXeD arrival 0 burst 1").unwrap()
        else {
            panic!("expected process directive");
        };
        assert_eq!(p.name, "MiXeD");
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            parse("runfor"),
            Err(ConfigErrorKind::MissingArgument {
                directive: "runfor",
                argument: "ticks"
            })
        );
        assert_eq!(
            parse("process name P1 arrival 0"),
            Err(ConfigErrorKind::MissingArgument {
                directive: "process",
                argument: "burst"
            })
        );
        assert_eq!(
            parse("process name P1 arrival 0 burst"),
            Err(ConfigErrorKind::MissingArgument {
                directive: "process",
                argument: "burst"
            })
        );
        assert_eq!(
            parse("process arrival 0 burst 2"),
            Err(ConfigErrorKind::MissingArgument {
                directive: "process",
                argument: "name"
            })
        );
    }

    #[test]
    fn test_invalid_integers() {
        assert_eq!(
            parse("runfor ten"),
            Err(ConfigErrorKind::InvalidInteger {
                field: "runfor",
                value: "ten".into()
            })
        );
        assert_eq!(
            parse("process name P1 arrival -1 burst 2"),
            Err(ConfigErrorKind::InvalidInteger {
                field: "arrival",
                value: "-1".into()
            })
        );
        assert_eq!(
            parse("process name P1 arrival 0 burst 2 priority high"),
            Err(ConfigErrorKind::InvalidInteger {
                field: "priority",
                value: "high".into()
            })
        );
    }

    #[test]
    fn test_unsupported_algorithm() {
        assert_eq!(
            parse("use rr"),
            Err(ConfigErrorKind::UnsupportedAlgorithm(UnknownAlgorithm("rr".into())))
        );
    }

    #[test]
    fn test_unknown_directive() {
        assert_eq!(
            parse("quantum 2"),
            Err(ConfigErrorKind::UnknownDirective("quantum".into()))
        );
    }

    #[test]
    fn test_unknown_and_duplicate_keys() {
        assert_eq!(
            parse("process name P1 arrival 0 burst 2 deadline 9"),
            Err(ConfigErrorKind::UnknownKey {
                key: "deadline".into()
            })
        );
        assert_eq!(
            parse("process name P1 arrival 0 arrival 1 burst 2"),
            Err(ConfigErrorKind::DuplicateKey {
                key: "arrival".into()
            })
        );
    }

    #[test]
    fn test_trailing_token() {
        assert_eq!(
            parse("runfor 10 20"),
            Err(ConfigErrorKind::TrailingToken {
                directive: "runfor",
                token: "20".into()
            })
        );
        assert_eq!(
            parse("end now"),
            Err(ConfigErrorKind::TrailingToken {
                directive: "end",
                token: "now".into()
            })
        );
    }
}
