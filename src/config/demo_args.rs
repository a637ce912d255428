//! Command-line arguments for the demo binaries

use clap::Parser;

/// Sequential vs. parallel filter over a synthetic student dataset
///
/// Any value not given as a flag is asked for interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "students")]
#[command(version, about, long_about = None)]
pub struct StudentsArgs {
    /// Total number of students to generate
    #[arg(short = 'n', long = "students")]
    pub students: Option<usize>,

    /// Course threshold K: students above course K are candidates
    #[arg(short = 'k', long = "course-threshold")]
    pub course_threshold: Option<i32>,

    /// Worker threads for the parallel filter
    #[arg(long = "threads")]
    pub threads: Option<usize>,

    /// Seed for dataset generation (0 = random seed)
    #[arg(long = "seed", default_value_t = 0)]
    pub seed: u64,

    /// Names to print from the result
    #[arg(long = "sample", default_value_t = 10)]
    pub sample: usize,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Dining philosophers with a limited number of seats
#[derive(Parser, Debug, Clone)]
#[command(name = "philosophers")]
#[command(version, about, long_about = None)]
pub struct PhilosophersArgs {
    /// Think/eat cycles per philosopher
    #[arg(short = 'c', long = "cycles", default_value_t = 5)]
    pub cycles: u32,

    /// Shortest think time in milliseconds
    #[arg(long = "think-min-ms", default_value_t = 500)]
    pub think_min_ms: u64,

    /// Longest think time in milliseconds
    #[arg(long = "think-max-ms", default_value_t = 1500)]
    pub think_max_ms: u64,

    /// Shortest meal in milliseconds
    #[arg(long = "eat-min-ms", default_value_t = 100)]
    pub eat_min_ms: u64,

    /// Longest meal in milliseconds
    #[arg(long = "eat-max-ms", default_value_t = 300)]
    pub eat_max_ms: u64,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl StudentsArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl PhilosophersArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.think_min_ms > self.think_max_ms {
            return Err("--think-min-ms must not exceed --think-max-ms".to_string());
        }
        if self.eat_min_ms > self.eat_max_ms {
            return Err("--eat-min-ms must not exceed --eat-max-ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_students_defaults_prompt_for_everything() {
        let args = StudentsArgs::parse_from(["students"]);
        assert_eq!(args.students, None);
        assert_eq!(args.course_threshold, None);
        assert_eq!(args.threads, None);
        assert_eq!(args.sample, 10);
    }

    #[test]
    fn test_students_flags() {
        let args = StudentsArgs::parse_from(["students", "-n", "1000", "-k", "3", "--threads", "8"]);
        assert_eq!(args.students, Some(1000));
        assert_eq!(args.course_threshold, Some(3));
        assert_eq!(args.threads, Some(8));
    }

    #[test]
    fn test_philosophers_defaults() {
        let args = PhilosophersArgs::parse_from(["philosophers"]);
        assert_eq!(args.cycles, 5);
        assert_eq!((args.think_min_ms, args.think_max_ms), (500, 1500));
        assert_eq!((args.eat_min_ms, args.eat_max_ms), (100, 300));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_philosophers_inverted_range() {
        let args = PhilosophersArgs::parse_from(["philosophers", "--eat-min-ms", "50", "--eat-max-ms", "10"]);
        assert!(args.validate().is_err());
    }
}
