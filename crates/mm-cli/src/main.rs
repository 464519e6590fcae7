use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use log::debug;
use mm_algebra::{render, Config, Matrix};

#[derive(Parser)]
#[command(author, version, about = "Interactive dense matrix multiplication")]
struct Args {
    /// Worker threads for parallel multiplication (default: CPU count)
    #[arg(long)]
    parallelism: Option<usize>,
    /// Minimal combined problem size at which multiplication parallelizes
    #[arg(long)]
    parallelize_order: Option<usize>,
    /// Decimal places used when printing the product
    #[arg(long)]
    decimals: Option<usize>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(value) = self.parallelism {
            config = config.with_max_parallelism(value);
        }
        if let Some(value) = self.parallelize_order {
            config = config.with_parallelize_order(value);
        }
        if let Some(value) = self.decimals {
            config = config.with_print_decimal_places(value);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    debug!(
        "config: parallelism={} parallelize_order={} decimals={}",
        config.max_parallelism(),
        config.parallelize_order(),
        config.print_decimal_places()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Please enter first matrix");
    let x = read_matrix(&mut input)?;
    println!();

    println!("Please enter second matrix");
    let y = read_matrix(&mut input)?;
    println!();

    // Format problems re-prompt above; shape errors are not caught here.
    let product = x.multiply_with(Some(&y), &config)?;
    println!("Matrix {} x {}:", product.rows(), product.cols());
    print!("{}", render::table(&product, &config));
    Ok(())
}

/// Read one matrix from `input`: rows count, columns count, then every
/// element in row-major order.
fn read_matrix<R: BufRead>(input: &mut R) -> anyhow::Result<Matrix> {
    let rows_count: usize = prompt_value(input, "rows count", |&v| v >= 1)?;
    let cols_count: usize = prompt_value(input, "columns count", |&v| v >= 1)?;

    let mut rows = Vec::with_capacity(rows_count);
    for i in 0..rows_count {
        let mut row = Vec::with_capacity(cols_count);
        for j in 0..cols_count {
            let label = format!("element ({},{})", i + 1, j + 1);
            let element: f64 = prompt_value(input, &label, |_| true)?;
            row.push(element);
        }
        rows.push(row);
    }
    Ok(Matrix::from_rows(Some(&rows))?)
}

/// Prompt for one value, re-prompting until a line parses and passes
/// `valid`. Running out of input is a hard error.
fn prompt_value<T, R>(input: &mut R, label: &str, valid: impl Fn(&T) -> bool) -> anyhow::Result<T>
where
    T: FromStr,
    R: BufRead,
{
    let mut message = format!("Enter {}: ", label);
    loop {
        print!("{}", message);
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            anyhow::bail!("input ended while reading {}", label);
        }

        match line.trim().parse::<T>() {
            Ok(value) if valid(&value) => return Ok(value),
            _ => message = format!("Enter correct value for {}: ", label),
        }
    }
}
