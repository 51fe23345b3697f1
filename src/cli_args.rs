use clap::Parser;
use clap_verbosity_flag::Verbosity;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum, PartialEq, Eq)]
pub(crate) enum ValueKind {
    #[default]
    Int,
    Float,
    Text,
}

/// Print the smallest & largest of some values
///
/// Finds both at once, taking the values 2 at a time, which needs at most ⌈3n/2⌉-2 comparisons.
/// Output is `key: MIN, and value: MAX`
///
/// `--by-digit PLACE` compares integers by only one decimal digit, e.g. `--by-digit 1` orders
/// `30 50 60 40 10 0` by the tens digit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Values to look at. If none are given, whitespace separated values are read from stdin
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// How to parse & order the values
    #[arg(short, long, value_enum, default_value_t)]
    pub kind: ValueKind,

    /// Compare integers by only this decimal digit (0 = units, 1 = tens, …)
    #[arg(short = 'd', long, value_name = "PLACE")]
    pub by_digit: Option<u32>,

    /// Print the result as JSON (`{"first":MIN,"second":MAX}`)
    #[arg(long)]
    pub json: bool,

    /// Also print how many comparisons were done
    #[arg(long)]
    pub count_comparisons: bool,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
