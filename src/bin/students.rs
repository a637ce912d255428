//! Student filter demo
//!
//! Usage: students [-n COUNT] [-k COURSE] [--threads N]
//!
//! Generates a synthetic student list and compares a sequential filter with
//! a partitioned parallel one. Values not passed as flags are prompted for;
//! an empty thread count answer selects the default of four workers.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use lockbench::config::StudentsArgs;
use lockbench::demos::{
    compare_filters, format_sample, generate_students, DEBTS_THRESHOLD, DEFAULT_FILTER_THREADS,
};
use lockbench::utils::{prompt, prompt_or_default};

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn value_or_prompt<T, R, W>(given: Option<T>, label: &str, input: &mut R, output: &mut W) -> Result<T>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    match given {
        Some(value) => Ok(value),
        None => Ok(prompt(label, input, output)?),
    }
}

fn run() -> Result<()> {
    let args = StudentsArgs::parse_args();
    setup_logging(args.verbose);

    println!("--- Students facing expulsion ---");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let count: usize = value_or_prompt(args.students, "Total number of students: ", &mut input, &mut output)?;
    let course_threshold: i32 = value_or_prompt(
        args.course_threshold,
        "Course threshold K (expelled if course > K): ",
        &mut input,
        &mut output,
    )?;
    let threads: usize = match args.threads {
        Some(threads) => threads,
        None => prompt_or_default(
            "Number of threads: ",
            DEFAULT_FILTER_THREADS,
            &mut input,
            &mut output,
        )?,
    };

    println!(
        "\nCondition: debts > {} and course > {}",
        DEBTS_THRESHOLD, course_threshold
    );
    println!("Total students: {}", count);
    println!("Threads: {}\n", threads.max(1));

    let mut rng = if args.seed == 0 {
        fastrand::Rng::new()
    } else {
        fastrand::Rng::with_seed(args.seed)
    };
    let students = generate_students(count, &mut rng);

    let report = compare_filters(&students, course_threshold, threads)?;

    println!("Sequential: {} us", report.sequential_us);
    println!("Parallel:   {} us", report.parallel_us);
    println!("Found (parallel):   {} students", report.parallel.len());
    println!("Found (sequential): {} students", report.sequential.len());

    if !report.parallel.is_empty() {
        println!("\nSample names:");
        print!("{}", format_sample(&report.parallel, args.sample));
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
