use std::str::FromStr;
use thiserror::Error;
use treeval_engine::search::Algorithm;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Build {
        depth: u32,
        widths: Vec<usize>,
        leaves: String,
    },
    Connect {
        source: String,
        target: String,
    },
    Disconnect {
        source: String,
        target: String,
    },
    Autowire,
    Set {
        id: String,
        value: String,
    },
    Run(Algorithm),
    Show {
        json: bool,
    },
    Clear,
    Reset,
    Help,
    Quit,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CommandParseError {
    #[error("no command submitted")]
    NoCommand,
    #[error("invalid command: '{0}'")]
    InvalidCommand(String),
    #[error("invalid command usage")]
    InvalidUsage,
    #[error("invalid argument: '{0}'")]
    InvalidArgument(String),
    #[error("expected value for parameter")]
    ExpectedValue,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Command, CommandParseError> {
        let mut args = s.split_whitespace();
        match args.next().ok_or(CommandParseError::NoCommand)? {
            "build" => Command::parse_build(args),
            "connect" => Command::parse_edge(args, true),
            "disconnect" => Command::parse_edge(args, false),
            "autowire" => Command::parse_bare(args, Command::Autowire),
            "set" => Command::parse_set(args),
            "run" => Command::parse_run(args),
            "show" => Command::parse_show(args),
            "clear" => Command::parse_bare(args, Command::Clear),
            "reset" => Command::parse_bare(args, Command::Reset),
            "help" => Command::parse_bare(args, Command::Help),
            "quit" => Command::parse_bare(args, Command::Quit),
            command => Err(CommandParseError::InvalidCommand(command.to_owned())),
        }
    }
}

impl Command {
    fn parse_bare<'a, I>(mut args: I, command: Command) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        if let Some(arg) = args.next() {
            return Err(CommandParseError::InvalidArgument(arg.to_owned()));
        }
        Ok(command)
    }

    fn parse_build<'a, I>(args: I) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut args = args.peekable();
        let mut depth = None;
        let mut widths = Vec::new();
        let mut leaves = None;

        while let Some(key) = args.next() {
            match key {
                "depth" => {
                    let value = args.next().ok_or(CommandParseError::ExpectedValue)?;
                    depth = Some(
                        value
                            .parse()
                            .map_err(|_| CommandParseError::InvalidArgument(value.to_owned()))?,
                    );
                }
                "widths" => {
                    let value = Self::take_csv(&mut args)?;
                    widths = value
                        .split(',')
                        .map(|w| {
                            w.trim()
                                .parse()
                                .map_err(|_| CommandParseError::InvalidArgument(w.trim().to_owned()))
                        })
                        .collect::<Result<_, _>>()?;
                }
                "leaves" => {
                    leaves = Some(Self::take_csv(&mut args)?);
                }
                key => return Err(CommandParseError::InvalidArgument(key.to_owned())),
            }
        }

        Ok(Command::Build {
            depth: depth.ok_or(CommandParseError::InvalidUsage)?,
            widths,
            leaves: leaves.ok_or(CommandParseError::InvalidUsage)?,
        })
    }

    /// Collects tokens up to the next keyword, so `leaves 3, 5, 2, 1` and
    /// `leaves 3,5,2,1` both work.
    fn take_csv<'a, I>(
        args: &mut std::iter::Peekable<I>,
    ) -> Result<String, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut parts = Vec::new();
        while let Some(&arg) = args.peek() {
            if matches!(arg, "depth" | "widths" | "leaves") {
                break;
            }
            parts.push(args.next().unwrap());
        }
        if parts.is_empty() {
            return Err(CommandParseError::ExpectedValue);
        }
        Ok(parts.join(" "))
    }

    fn parse_edge<'a, I>(mut args: I, connect: bool) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let source = args
            .next()
            .ok_or(CommandParseError::InvalidUsage)?
            .to_owned();
        let target = args
            .next()
            .ok_or(CommandParseError::InvalidUsage)?
            .to_owned();
        if let Some(arg) = args.next() {
            return Err(CommandParseError::InvalidArgument(arg.to_owned()));
        }
        Ok(if connect {
            Command::Connect { source, target }
        } else {
            Command::Disconnect { source, target }
        })
    }

    fn parse_set<'a, I>(mut args: I) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let id = args
            .next()
            .ok_or(CommandParseError::InvalidUsage)?
            .to_owned();
        let value = args
            .next()
            .ok_or(CommandParseError::ExpectedValue)?
            .to_owned();
        if let Some(arg) = args.next() {
            return Err(CommandParseError::InvalidArgument(arg.to_owned()));
        }
        Ok(Command::Set { id, value })
    }

    fn parse_run<'a, I>(mut args: I) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let algorithm = match args.next() {
            None => Algorithm::default(),
            Some(arg) => arg
                .parse()
                .map_err(|_| CommandParseError::InvalidArgument(arg.to_owned()))?,
        };
        if let Some(arg) = args.next() {
            return Err(CommandParseError::InvalidArgument(arg.to_owned()));
        }
        Ok(Command::Run(algorithm))
    }

    fn parse_show<'a, I>(mut args: I) -> Result<Command, CommandParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let json = match args.next() {
            None => false,
            Some("json") => true,
            Some(arg) => return Err(CommandParseError::InvalidArgument(arg.to_owned())),
        };
        if let Some(arg) = args.next() {
            return Err(CommandParseError::InvalidArgument(arg.to_owned()));
        }
        Ok(Command::Show { json })
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandParseError};
    use treeval_engine::search::Algorithm;

    #[test]
    fn parse_simple() {
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("clear".parse::<Command>(), Ok(Command::Clear));
        assert_eq!("autowire".parse::<Command>(), Ok(Command::Autowire));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show { json: false }));
        assert_eq!(
            "show json".parse::<Command>(),
            Ok(Command::Show { json: true })
        );
        assert_eq!(
            "clear now".parse::<Command>(),
            Err(CommandParseError::InvalidArgument("now".into()))
        );
        assert_eq!("".parse::<Command>(), Err(CommandParseError::NoCommand));
    }

    #[test]
    fn parse_build() {
        assert_eq!(
            "build depth 3 widths 2,4 leaves 1,2,3,4".parse::<Command>(),
            Ok(Command::Build {
                depth: 3,
                widths: vec![2, 4],
                leaves: "1,2,3,4".into()
            })
        );
        // spaced csv values survive until the engine-side parse
        assert_eq!(
            "build leaves 3, 5, 2, 1 depth 2".parse::<Command>(),
            Ok(Command::Build {
                depth: 2,
                widths: Vec::new(),
                leaves: "3, 5, 2, 1".into()
            })
        );
        assert_eq!(
            "build widths 2 leaves 1,2".parse::<Command>(),
            Err(CommandParseError::InvalidUsage)
        );
        assert_eq!(
            "build depth x leaves 1".parse::<Command>(),
            Err(CommandParseError::InvalidArgument("x".into()))
        );
    }

    #[test]
    fn parse_edges() {
        assert_eq!(
            "connect node-root node-0".parse::<Command>(),
            Ok(Command::Connect {
                source: "node-root".into(),
                target: "node-0".into()
            })
        );
        assert_eq!(
            "disconnect node-root node-0".parse::<Command>(),
            Ok(Command::Disconnect {
                source: "node-root".into(),
                target: "node-0".into()
            })
        );
        assert_eq!(
            "connect node-root".parse::<Command>(),
            Err(CommandParseError::InvalidUsage)
        );
    }

    #[test]
    fn parse_run() {
        assert_eq!(
            "run".parse::<Command>(),
            Ok(Command::Run(Algorithm::Minimax))
        );
        assert_eq!(
            "run alphabeta".parse::<Command>(),
            Ok(Command::Run(Algorithm::AlphaBeta))
        );
        assert_eq!(
            "run dfs".parse::<Command>(),
            Err(CommandParseError::InvalidArgument("dfs".into()))
        );
    }

    #[test]
    fn parse_set() {
        assert_eq!(
            "set node-4 12".parse::<Command>(),
            Ok(Command::Set {
                id: "node-4".into(),
                value: "12".into()
            })
        );
        assert_eq!(
            "set node-4".parse::<Command>(),
            Err(CommandParseError::ExpectedValue)
        );
    }
}
