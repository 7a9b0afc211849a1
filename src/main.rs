use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use sudanorm::{BatchProcessor, NormalizeConfig, Normalizer, UnicodeForm};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sudanorm")]
#[command(about = "Batch normalizer for Sudanese-Arabic text corpora")]
#[command(version)]
struct Args {
    /// Directory of raw corpus files (.txt, .text, .md, .csv)
    #[arg(short, long, default_value = "raw-text")]
    input: PathBuf,

    /// Directory for normalized output files
    #[arg(short, long, default_value = "normalized-text")]
    output: PathBuf,

    /// Keep diacritical marks (tashkeel)
    #[arg(long)]
    keep_diacritics: bool,

    /// Keep shadda even when other diacritics are removed
    #[arg(long)]
    keep_shadda: bool,

    /// Keep hashtags instead of removing them
    #[arg(long)]
    keep_hashtags: bool,

    /// Remove Latin letters; also converts Arabic-Indic numerals
    #[arg(long)]
    remove_latin: bool,

    /// Convert Arabic-Indic numerals to Western digits
    #[arg(long)]
    normalize_numbers: bool,

    /// Remove all digits
    #[arg(long)]
    remove_numbers: bool,

    /// Maximum allowed run of a repeated character
    #[arg(long, default_value_t = 2)]
    max_repeat: usize,

    /// Keep HTML tags and entities untouched
    #[arg(long)]
    keep_html: bool,

    /// Keep characters outside the Arabic/ASCII keep policy
    #[arg(long)]
    keep_special_chars: bool,

    /// Keep tatweel (decorative elongation)
    #[arg(long)]
    keep_tatweel: bool,

    /// Keep Arabic punctuation when removing special characters
    #[arg(long)]
    preserve_arabic_punct: bool,

    /// Drop normalized texts shorter than this many characters
    #[arg(long, default_value_t = 0)]
    min_length: usize,

    /// Truncate normalized texts to this many characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Write the run report as JSON to this file
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Unicode normalization form: nfc, nfd, nfkc or nfkd
    #[arg(long, default_value = "nfkc")]
    unicode_form: UnicodeForm,
}

impl Args {
    fn to_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            unicode_form: self.unicode_form,
            remove_diacritics: !self.keep_diacritics,
            keep_shadda: self.keep_shadda,
            remove_hashtags: !self.keep_hashtags,
            remove_latin_chars: self.remove_latin,
            // Removing Latin text leaves numeric debris behind, so the
            // original batch tool couples these to --remove-latin
            normalize_numbers: self.normalize_numbers || self.remove_latin,
            remove_numbers: self.remove_numbers,
            max_char_repeat: self.max_repeat,
            remove_html_tags: !self.keep_html,
            remove_special_chars: !self.keep_special_chars,
            remove_tatweel: !self.keep_tatweel,
            preserve_arabic_punctuation: self.preserve_arabic_punct,
            min_length: self.min_length,
            max_length: self.max_length,
            ..NormalizeConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    info!(?args, "parsed CLI arguments");

    if !args.input.is_dir() {
        anyhow::bail!(
            "input directory does not exist: {}",
            args.input.display()
        );
    }

    let processor = BatchProcessor::new(Normalizer::new(args.to_config()));
    let files = processor.collect_files(&args.input)?;
    println!(
        "sudanorm v{} - found {} text files in {}",
        env!("CARGO_PKG_VERSION"),
        files.len(),
        args.input.display()
    );

    let bar = if args.no_progress || files.is_empty() {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ({eta}) {msg}")?,
        );
        bar
    };

    let report = processor.run(&args.input, &args.output, |path| {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            bar.set_message(name.to_string());
        }
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    println!("Processed {}/{} files in {:.2}s", report.files_processed, report.files_found, report.elapsed_secs);
    println!(
        "Chars: {} -> {} ({:.1}% removed)",
        report.total_original_chars,
        report.total_normalized_chars,
        report.compression_ratio() * 100.0
    );
    println!(
        "Words: {} -> {}",
        report.total_original_words, report.total_normalized_words
    );
    if report.files_failed > 0 {
        println!("Failed files: {}", report.files_failed);
        for (path, message) in &report.errors {
            println!("  {}: {}", path.display(), message);
        }
    }

    if let Some(stats_out) = &args.stats_out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(stats_out, json)?;
        info!(path = %stats_out.display(), "run report written");
    }

    if report.files_failed > 0 && report.files_processed == 0 {
        anyhow::bail!("every file failed; see report above");
    }
    Ok(())
}
