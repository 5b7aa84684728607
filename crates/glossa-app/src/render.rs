use std::io::Write;
use std::time::Duration;

use glossa_config::reveal::RevealConfig;
use glossa_core::reveal::{FieldCategory, RevealController};
use tokio::time::sleep;

pub fn show_welcome() {
    println!("glossa: type a word or phrase and press Enter. Ctrl+C quits.");
}

pub fn show_loading() {
    println!();
    println!("Looking up...");
}

/// EmptyResponse and service failures render identically.
pub fn show_error() {
    println!("Something went wrong. Try again.");
}

/// Staged reveal of the controller's current explanation: the headword types
/// out character by character, then the remaining fields appear on their
/// fixed delay schedule.
pub async fn reveal(controller: &mut RevealController, reveal: &RevealConfig) -> anyhow::Result<()> {
    let Some(parsed) = controller.explanation().cloned() else {
        return Ok(());
    };
    let mut stdout = std::io::stdout();

    loop {
        let more = controller.advance_typing();
        write!(stdout, "\r{}", controller.typed_headword())?;
        stdout.flush()?;
        if !more {
            break;
        }
        sleep(Duration::from_millis(reveal.headword_type_ms)).await;
    }
    sleep(Duration::from_millis(reveal.typing_hold_ms)).await;
    controller.finish_typing();

    if !parsed.pronunciation.is_empty() {
        write!(stdout, "  {}", parsed.pronunciation)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    // Delays are measured from the end of headword typing
    let mut elapsed = Duration::ZERO;
    for category in FieldCategory::ORDERED {
        let at = category.reveal_delay();
        sleep(at - elapsed).await;
        elapsed = at;

        match category {
            FieldCategory::Definition => {
                if !parsed.definition.is_empty() {
                    type_text(&mut stdout, &parsed.definition, reveal.body_type_ms).await?;
                }
            }
            FieldCategory::Examples => {
                for example in &parsed.examples {
                    writeln!(stdout, "  {example}")?;
                }
            }
            FieldCategory::Synonyms => {
                if !parsed.synonyms.is_empty() {
                    writeln!(stdout, "Synonyms: {}", parsed.synonyms.join(", "))?;
                }
            }
            FieldCategory::Antonyms => {
                if !parsed.antonyms.is_empty() {
                    writeln!(stdout, "Antonyms: {}", parsed.antonyms.join(", "))?;
                }
            }
            FieldCategory::Translation => {
                if !parsed.translation.is_empty() {
                    writeln!(stdout, "Перевод: {}", parsed.translation)?;
                }
            }
            FieldCategory::Idioms => {
                if !parsed.idioms.is_empty() {
                    writeln!(stdout, "Idioms: {}", parsed.idioms)?;
                }
            }
        }
        stdout.flush()?;
    }

    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

async fn type_text(
    stdout: &mut std::io::Stdout,
    text: &str,
    interval_ms: u64,
) -> anyhow::Result<()> {
    for ch in text.chars() {
        write!(stdout, "{ch}")?;
        stdout.flush()?;
        sleep(Duration::from_millis(interval_ms)).await;
    }
    writeln!(stdout)?;
    Ok(())
}
