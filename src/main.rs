use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
#[allow(unused_imports)]
use log::{debug, info, trace, warn};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use generic_pairs::{max_comparisons, min_max_by};

mod cli_args;
use cli_args::ValueKind;

fn main() -> Result<()> {
    let args = cli_args::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.by_digit.is_some() && args.kind != ValueKind::Int {
        anyhow::bail!("--by-digit only works with --kind int");
    }

    let tokens = if args.values.is_empty() {
        debug!("No values on the command line, reading from stdin");
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Unable to read stdin")?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        args.values.clone()
    };
    debug!("Read {} values: {}", tokens.len(), tokens.iter().join(" "));

    let output = match (args.kind, args.by_digit) {
        (ValueKind::Int, Some(place)) => {
            let values = parse_all::<i64>(&tokens)?;
            run(
                &values,
                |a, b| decimal_digit(*a, place).cmp(&decimal_digit(*b, place)),
                &args,
            )?
        }
        (ValueKind::Int, None) => run(&parse_all::<i64>(&tokens)?, |a, b| a.cmp(b), &args)?,
        (ValueKind::Float, _) => {
            let values = parse_all::<f64>(&tokens)?
                .into_iter()
                .map(OrderedFloat)
                .collect::<Vec<_>>();
            if values.iter().any(|v| v.is_nan()) {
                warn!("Input includes NaN, which is ordered above every other value");
            }
            run(&values, |a, b| a.cmp(b), &args)?
        }
        (ValueKind::Text, _) => run(&tokens, |a, b| a.cmp(b), &args)?,
    };

    println!("{}", output);

    Ok(())
}

fn parse_all<T>(tokens: &[String]) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    tokens
        .iter()
        .map(|t| {
            t.parse::<T>()
                .with_context(|| format!("Unable to parse {:?}", t))
        })
        .collect()
}

/// The digit of `x` at this decimal place (0 = units). Keeps the sign of `x`.
fn decimal_digit(x: i64, place: u32) -> i64 {
    10_i64.checked_pow(place).map_or(0, |p| x / p % 10)
}

fn run<T>(
    values: &[T],
    mut cmp: impl FnMut(&T, &T) -> Ordering,
    args: &cli_args::Args,
) -> Result<String>
where
    T: Display + serde::Serialize,
{
    let mut comparisons = 0;
    let result = min_max_by(values, |a, b| {
        comparisons += 1;
        cmp(a, b)
    })
    .context("Need at least one value")?;
    info!(
        "Min & max of {} values found with {} comparisons",
        values.len(),
        comparisons
    );

    let mut output = if args.json {
        serde_json::to_string(&result)?
    } else {
        result.to_string()
    };
    if args.count_comparisons {
        output.push_str(&format!(
            "\ncomparisons: {} (at most {})",
            comparisons,
            max_comparisons(values.len())
        ));
    }
    Ok(output)
}
