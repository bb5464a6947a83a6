use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

use pwd_recon::export::{write_analysis, write_wordlist};
use pwd_recon::{GenerationOptions, PersonalFacts, analyze_password, generate_wordlist};

#[derive(Debug, Parser)]
#[command(name = "pwd-recon")]
#[command(about = "Password strength analysis and targeted wordlist generation for authorized testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze the strength of a password
    Analyze(AnalyzeArgs),

    /// Generate a targeted wordlist from personal facts
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Password to analyze
    password: String,

    /// Write a redacted JSON report instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the JSON report to this file
    #[arg(short, long, requires = "json")]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    surname: Option<String>,

    #[arg(long)]
    nickname: Option<String>,

    #[arg(long)]
    birth_year: Option<String>,

    #[arg(long)]
    pet: Option<String>,

    #[arg(long)]
    company: Option<String>,

    /// Comma separated extra words
    #[arg(long)]
    custom_words: Option<String>,

    /// Skip leetspeak variants
    #[arg(long, default_value_t = false)]
    no_leetspeak: bool,

    /// Skip year prefixes and suffixes
    #[arg(long, default_value_t = false)]
    no_years: bool,

    /// Skip common suffixes such as "!" or "123"
    #[arg(long, default_value_t = false)]
    no_suffixes: bool,

    /// Skip reversed words
    #[arg(long, default_value_t = false)]
    no_reverse: bool,

    /// Skip pairwise combinations of words
    #[arg(long, default_value_t = false)]
    no_combinations: bool,

    #[arg(long, default_value_t = 4)]
    min_length: usize,

    #[arg(long, default_value_t = 20)]
    max_length: usize,

    /// Write the wordlist to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the comment header
    #[arg(long, default_value_t = false)]
    no_header: bool,
}

impl From<&GenerateArgs> for PersonalFacts {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            name: args.name.clone(),
            surname: args.surname.clone(),
            nickname: args.nickname.clone(),
            birth_year: args.birth_year.clone(),
            pet: args.pet.clone(),
            company: args.company.clone(),
            custom_words: args.custom_words.clone(),
        }
    }
}

impl From<&GenerateArgs> for GenerationOptions {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            include_leetspeak: !args.no_leetspeak,
            include_years: !args.no_years,
            include_common_suffixes: !args.no_suffixes,
            include_reverse: !args.no_reverse,
            include_combinations: !args.no_combinations,
            min_length: args.min_length,
            max_length: args.max_length,
        }
    }
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let password = SecretString::new(args.password.into());
    let Some(report) = analyze_password(&password) else {
        println!("Nothing to analyze: the password is empty");
        return Ok(());
    };

    if args.json {
        match args.output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_analysis(&mut BufWriter::new(file), &report, &password)?;
                println!("Analysis written to {}", path.display());
            }
            None => {
                write_analysis(&mut io::stdout().lock(), &report, &password)?;
                println!();
            }
        }
        return Ok(());
    }

    println!(
        "Password strength: {} (score: {}/4)",
        report.strength(),
        report.score.value()
    );
    println!("Entropy: {:.1} bits", report.entropy);
    println!("Estimated crack time: {}", report.crack_time);
    if !report.patterns.is_empty() {
        println!("Patterns: {}", report.patterns.join(", "));
    }
    if let Some(warning) = &report.warning {
        println!("Warning: {}", warning);
    }
    for suggestion in &report.suggestions {
        println!("- {}", suggestion);
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let facts = PersonalFacts::from(&args);
    let options = GenerationOptions::from(&args);
    if let Err(warning) = options.validate() {
        eprintln!("Warning: {}", warning);
    }

    let words = generate_wordlist(&facts, &options);
    let include_header = !args.no_header;

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_wordlist(&mut BufWriter::new(file), &words, include_header)?;
            eprintln!("{} words written to {}", words.len(), path.display());
        }
        None => {
            write_wordlist(&mut io::stdout().lock(), &words, include_header)?;
            println!();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => analyze(args),
        Command::Generate(args) => generate(args),
    }
}
