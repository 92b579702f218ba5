use std::io::Write;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use reltime::shared::config::{Config, OutputFormat};
use reltime::{Clock, FixedClock, RelativeTimeFormatter, parse_timestamp};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct FormatArgs {
    /// Timestamps to format (RFC 3339, RFC 2822, ISO date-time or ISO date)
    pub timestamps: Vec<String>,

    /// Reference instant to format against instead of the current time
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Output format (defaults to `output` in the config file)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// A single line of `--output json`.
#[derive(Serialize, Debug, PartialEq)]
struct FormattedEntry<'a> {
    input: Option<&'a str>,
    relative: &'a str,
}

impl FormatArgs {
    pub fn run(&self, config: &Config) -> anyhow::Result<()> {
        let output = self.output.unwrap_or(config.output);

        let lines = match &self.now {
            Some(now) => {
                let now = parse_timestamp(now)
                    .with_context(|| format!("Invalid --now value: {now}"))?;
                self.render(&RelativeTimeFormatter::new(FixedClock(now)), output)?
            }
            None => self.render(&RelativeTimeFormatter::system(), output)?,
        };

        let mut stdout = std::io::stdout().lock();
        for line in lines {
            writeln!(stdout, "{line}")?;
        }
        Ok(())
    }

    /// Formats every timestamp into an output line. With no timestamps, emits
    /// the formatting of an absent input once.
    fn render<C: Clock>(
        &self,
        formatter: &RelativeTimeFormatter<C>,
        output: OutputFormat,
    ) -> anyhow::Result<Vec<String>> {
        if self.timestamps.is_empty() {
            let relative = formatter.format(None::<&str>);
            return Ok(vec![render_line(None, &relative, output)?]);
        }

        self.timestamps
            .iter()
            .map(|input| {
                let relative = formatter.format(Some(input));
                render_line(Some(input), &relative, output)
            })
            .collect()
    }
}

fn render_line(input: Option<&str>, relative: &str, output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(relative.to_string()),
        OutputFormat::Json => {
            let entry = FormattedEntry { input, relative };
            Ok(serde_json::to_string(&entry)?)
        }
    }
}
