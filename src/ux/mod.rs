use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::form::{Field, BENEFIT_ANGLES, TITLE_STYLES, TONES};
use crate::prompt::Template;

pub fn print_catalog() {
    println!("{}", "Title styles:".bold());
    for s in TITLE_STYLES {
        println!("  - {s}");
    }
    println!("{}", "Tones:".bold());
    for t in TONES {
        println!("  - {t}");
    }
    println!("{}", "Benefit angles:".bold());
    for a in BENEFIT_ANGLES {
        println!("  - {a}");
    }
}

/// The persistent notice shown while the form is incomplete.
pub fn print_incomplete(tpl: &Template, missing: &[Field]) {
    eprintln!("{}", tpl.incomplete_notice.yellow().bold());
    for f in missing {
        eprintln!("  {} {}", "•".yellow(), f.name());
    }
}

pub fn print_failure(tpl: &Template) {
    eprintln!("{}", tpl.failure_notice.red().bold());
}

/// Header on stderr, text on stdout untouched so it can be piped.
pub fn print_result(text: &str) -> io::Result<()> {
    eprintln!("{}", "━━━━━━━━━━━━━━━━━━━━━━ Prompt ━━━━━━━━━━━━━━━━━━━━━━".bold());
    write_result(&mut io::stdout().lock(), text)
}

/// Writes `text` as is, ending it with a newline only if it lacks one.
fn write_result<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
