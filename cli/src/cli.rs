use clap::Args;
use clap::Parser;
use clap::Subcommand;
use kids_txt::DEFAULT_INDENT_PREFIX;
use kids_txt::DEFAULT_PARAGRAPH_SEPARATOR;
use kids_txt::DEFAULT_SHORTEN_TOKEN;
use kids_txt::DEFAULT_WRAP_WIDTH;

/// Small text-formatting helpers.
///
/// Every command reads its text from the TEXT argument, or from stdin when
/// TEXT is omitted or `-`, and prints the result to stdout.
#[derive(Debug, Parser)]
#[command(version, bin_name = "kids-txt")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip the indentation shared by every line after the first.
    Dedent(InputArgs),

    /// Prefix every line, optionally with a distinct prefix for the first one.
    Indent(IndentArgs),

    /// Wrap each paragraph on its own and join them with single newlines.
    Wrap(WrapArgs),

    /// Uppercase the first character.
    Ucfirst(UcfirstArgs),

    /// Cut the text to a fixed length, splicing a marker into the gap.
    #[clap(visible_alias = "truncate")]
    Shorten(ShortenArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to transform. Read from stdin when omitted or `-`.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct IndentArgs {
    /// Prefix for every line.
    #[arg(long, default_value = DEFAULT_INDENT_PREFIX, allow_hyphen_values = true)]
    pub prefix: String,

    /// Prefix for the first line only. May be empty.
    #[arg(long, allow_hyphen_values = true)]
    pub first: Option<String>,

    #[clap(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// Regular expression separating paragraphs (default: a blank line).
    #[arg(
        long,
        value_name = "REGEX",
        default_value = DEFAULT_PARAGRAPH_SEPARATOR,
        hide_default_value = true
    )]
    pub separator: String,

    /// Column at which lines are wrapped.
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub width: usize,

    #[clap(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct UcfirstArgs {
    /// Print an empty line for empty input instead of failing.
    #[arg(long = "allow-empty", default_value_t = false)]
    pub allow_empty: bool,

    #[clap(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct ShortenArgs {
    /// Length of the result, in characters.
    #[arg(value_name = "LENGTH")]
    pub length: usize,

    /// Character offset where the cut starts. Negative values, like the
    /// default, place the cut near the end.
    #[arg(long, allow_negative_numbers = true)]
    pub index: Option<isize>,

    /// Marker spliced in place of the removed characters.
    #[arg(long, default_value = DEFAULT_SHORTEN_TOKEN, allow_hyphen_values = true)]
    pub token: String,

    /// Rendered length of the marker, when it differs from its character count.
    #[arg(long = "token-length")]
    pub token_length: Option<usize>,

    #[clap(flatten)]
    pub input: InputArgs,
}
