mod cli;

use std::io::IsTerminal;
use std::io::Read;

use anyhow::Context;
use kids_txt::ParagraphWrap;
use kids_txt::Shorten;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub use cli::Cli;
pub use cli::Command;
pub use cli::IndentArgs;
pub use cli::InputArgs;
pub use cli::ShortenArgs;
pub use cli::UcfirstArgs;
pub use cli::WrapArgs;

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    init_tracing();
    let output = run_command(cli.command)?;
    println!("{output}");
    Ok(())
}

/// Apply `command` to its input text and return the transformed text.
pub fn run_command(command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Dedent(InputArgs { text }) => kids_txt::dedent(&resolve_input(text)?),
        Command::Indent(IndentArgs {
            prefix,
            first,
            input,
        }) => kids_txt::indent(&resolve_input(input.text)?, &prefix, first.as_deref()),
        Command::Wrap(WrapArgs {
            separator,
            width,
            input,
        }) => {
            let wrapper = ParagraphWrap::new(&separator)
                .with_context(|| format!("invalid paragraph separator {separator:?}"))?
                .with_width(width);
            wrapper.wrap(&resolve_input(input.text)?)
        }
        Command::Ucfirst(UcfirstArgs { allow_empty, input }) => {
            let text = resolve_input(input.text)?;
            if allow_empty {
                kids_txt::ucfirst_or_empty(&text)
            } else {
                kids_txt::ucfirst(&text)?
            }
        }
        Command::Shorten(ShortenArgs {
            length,
            index,
            token,
            token_length,
            input,
        }) => {
            let options = Shorten {
                index: index.and_then(|index| usize::try_from(index).ok()),
                token: &token,
                token_length,
            };
            kids_txt::shorten_with(&resolve_input(input.text)?, length, &options)
        }
    };
    Ok(output)
}

fn resolve_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        maybe_dash => {
            let force_stdin = matches!(maybe_dash.as_deref(), Some("-"));
            if std::io::stdin().is_terminal() && !force_stdin {
                anyhow::bail!(
                    "No text provided. Either pass it as an argument or pipe it into stdin."
                );
            }

            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            // Drop the newline a shell pipe appends.
            let trimmed_len = buffer
                .strip_suffix("\r\n")
                .or_else(|| buffer.strip_suffix('\n'))
                .map(str::len);
            if let Some(len) = trimmed_len {
                buffer.truncate(len);
            }
            debug!(bytes = buffer.len(), "read text from stdin");
            Ok(buffer)
        }
    }
}

fn init_tracing() {
    let default_level = "error";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
