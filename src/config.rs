pub const DEFAULT_START: &str = "you";
pub const DEFAULT_END: &str = "out";
pub const DEFAULT_SAMPLES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    /// Graph file, or `-` for stdin.
    pub input: String,
    pub start: String,
    pub end: String,
    pub command: String,
    pub samples: usize,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            input: String::from("-"),
            start: String::from(DEFAULT_START),
            end: String::from(DEFAULT_END),
            command: String::from("count"),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--input" | "-i" => {
                    config.input = iter
                        .next()
                        .ok_or_else(|| "--input requires a value".to_string())?
                        .to_string();
                }
                "--start" => {
                    config.start = iter
                        .next()
                        .ok_or_else(|| "--start requires a value".to_string())?
                        .to_string();
                }
                "--end" => {
                    config.end = iter
                        .next()
                        .ok_or_else(|| "--end requires a value".to_string())?
                        .to_string();
                }
                "--samples" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--samples requires a value".to_string())?;
                    config.samples = value
                        .parse::<usize>()
                        .map_err(|_| format!("--samples expects an integer, got {value}"))?;
                }
                "--command" => {
                    config.command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    config.command = arg.to_string();
                }
            }
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: pathgraph [--input PATH|-] [--start NODE] [--end NODE] [--samples N] \
         [--command count|naive|compare|levels|cycles|stats]\n"
    }
}
