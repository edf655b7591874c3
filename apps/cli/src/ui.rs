//! Terminal front end — renders the four screens and drives the wizard
//! loop.
//!
//! Screens read and mutate the [`Session`] they are handed; this module
//! owns stdout and stdin, nothing else does. Reaching end-of-input on
//! stdin quits the wizard cleanly.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::api::ResumeApi;
use crate::export::Exporter;
use crate::models::profile::ApplicantProfile;
use crate::render::document::render_document;
use crate::wizard::ops;
use crate::wizard::screen::Screen;
use crate::wizard::session::Session;

enum StepOutcome {
    Continue,
    Quit,
}

pub struct WizardUi {
    api: Arc<dyn ResumeApi>,
    exporter: Exporter,
}

impl WizardUi {
    pub fn new(api: Arc<dyn ResumeApi>, exporter: Exporter) -> Self {
        Self { api, exporter }
    }

    /// Runs the wizard until the user quits or stdin closes.
    pub async fn run(&self, mut session: Session) -> Result<()> {
        loop {
            let outcome = match session.screen {
                Screen::Landing => self.landing(&mut session)?,
                Screen::QuestionIntake => self.question_intake(&mut session).await?,
                Screen::AnswerCollection => self.answer_collection(&mut session)?,
                Screen::ResumeGeneration => self.resume_generation(&mut session).await?,
            };
            if let StepOutcome::Quit = outcome {
                println!("Goodbye.");
                return Ok(());
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Screens
    // ────────────────────────────────────────────────────────────────────

    fn landing(&self, session: &mut Session) -> Result<StepOutcome> {
        println!();
        println!("AI Résumé Generator");
        println!("Turn your answers into a professional, AI-optimized résumé");
        println!("in minutes.");
        println!();
        println!("  * Fast          - generated in minutes from your answers");
        println!("  * Professional  - clean format that passes screening software");
        println!("  * Exportable    - saved as HTML and converted to PDF");
        println!();
        loop {
            let Some(choice) = prompt_choice("[Enter] start, [q]uit: ")? else {
                return Ok(StepOutcome::Quit);
            };
            match choice.as_str() {
                "" => {
                    session.goto(Screen::QuestionIntake);
                    return Ok(StepOutcome::Continue);
                }
                "q" => return Ok(StepOutcome::Quit),
                _ => {}
            }
        }
    }

    async fn question_intake(&self, session: &mut Session) -> Result<StepOutcome> {
        heading(session);
        loop {
            let hint = if session.area.is_empty() {
                "e.g. Backend Developer".to_string()
            } else {
                format!("Enter keeps \"{}\"", session.area)
            };
            let Some(input) = prompt_line(&format!("Target job area ({hint}; [b]ack, [q]uit): "))?
            else {
                return Ok(StepOutcome::Quit);
            };
            match parse_area_input(&input) {
                AreaInput::Back => {
                    session.goto(session.screen.back());
                    return Ok(StepOutcome::Continue);
                }
                AreaInput::Quit => return Ok(StepOutcome::Quit),
                AreaInput::Area(area) => session.area = area,
                AreaInput::KeepCurrent => {}
            }

            self.spin(
                "Generating questions with AI...",
                ops::fetch_questions(session, self.api.as_ref()),
            )
            .await;

            if let Some(error) = &session.error {
                println!("✗ {error}");
                let Some(choice) = prompt_choice("[r]etry, [b]ack, [q]uit: ")? else {
                    return Ok(StepOutcome::Quit);
                };
                match choice.as_str() {
                    "b" => {
                        session.goto(session.screen.back());
                        return Ok(StepOutcome::Continue);
                    }
                    "q" => return Ok(StepOutcome::Quit),
                    _ => continue,
                }
            }

            if !session.has_questions() {
                println!("No questions came back. Try a different area.");
                continue;
            }

            println!();
            println!("Questions for {}:", session.area);
            for (number, question) in session.questions.iter().enumerate() {
                println!("  {}. {}", number + 1, question);
            }
            println!();

            loop {
                let Some(choice) =
                    prompt_choice("[Enter] answer these questions, [r]egenerate, [b]ack, [q]uit: ")?
                else {
                    return Ok(StepOutcome::Quit);
                };
                match choice.as_str() {
                    "" => {
                        session.goto(Screen::AnswerCollection);
                        return Ok(StepOutcome::Continue);
                    }
                    "r" => break,
                    "b" => {
                        session.goto(session.screen.back());
                        return Ok(StepOutcome::Continue);
                    }
                    "q" => return Ok(StepOutcome::Quit),
                    _ => {}
                }
            }
        }
    }

    fn answer_collection(&self, session: &mut Session) -> Result<StepOutcome> {
        heading(session);

        if !session.has_questions() {
            println!("No questions loaded. Generate questions first.");
            loop {
                let Some(choice) = prompt_choice("[Enter] go to question intake, [q]uit: ")? else {
                    return Ok(StepOutcome::Quit);
                };
                match choice.as_str() {
                    "" => {
                        session.goto(Screen::QuestionIntake);
                        return Ok(StepOutcome::Continue);
                    }
                    "q" => return Ok(StepOutcome::Quit),
                    _ => {}
                }
            }
        }

        println!("Your details (Enter keeps the shown value):");
        let Some(name) = prompt_field("Name", &session.profile.name)? else {
            return Ok(StepOutcome::Quit);
        };
        session.profile.name = name;
        let Some(email) = prompt_field("Email", &session.profile.email)? else {
            return Ok(StepOutcome::Quit);
        };
        session.profile.email = email;
        let Some(phone) = prompt_field("Phone", &session.profile.phone)? else {
            return Ok(StepOutcome::Quit);
        };
        session.profile.phone = phone;
        let Some(city) = prompt_field("City", &session.profile.city)? else {
            return Ok(StepOutcome::Quit);
        };
        session.profile.city = city;
        let Some(links) = prompt_field(
            "Links, separated by spaces or commas",
            &session.profile.links_raw,
        )?
        else {
            return Ok(StepOutcome::Quit);
        };
        session.profile.links_raw = links;

        println!();
        println!("The interview (Enter skips a question):");
        for index in 0..session.questions.len() {
            println!("{}. {}", index + 1, session.questions[index]);
            if !session.answer(index).is_empty() {
                println!("   (current: {})", session.answer(index));
            }
            let Some(input) = prompt_line("   > ")? else {
                return Ok(StepOutcome::Quit);
            };
            if !input.is_empty() {
                session.set_answer(index, input);
            }
        }

        println!();
        loop {
            let Some(choice) = prompt_choice("[Enter] generate the résumé, [b]ack, [q]uit: ")?
            else {
                return Ok(StepOutcome::Quit);
            };
            match choice.as_str() {
                "" => {
                    ops::submit_answers(session);
                    return Ok(StepOutcome::Continue);
                }
                "b" => {
                    session.goto(session.screen.back());
                    return Ok(StepOutcome::Continue);
                }
                "q" => return Ok(StepOutcome::Quit),
                _ => {}
            }
        }
    }

    async fn resume_generation(&self, session: &mut Session) -> Result<StepOutcome> {
        heading(session);

        if session.pending_request.is_none() {
            println!("Nothing to generate yet. Answer the questions first.");
            loop {
                let Some(choice) = prompt_choice("[Enter] go to the answers, [q]uit: ")? else {
                    return Ok(StepOutcome::Quit);
                };
                match choice.as_str() {
                    "" => {
                        session.goto(Screen::AnswerCollection);
                        return Ok(StepOutcome::Continue);
                    }
                    "q" => return Ok(StepOutcome::Quit),
                    _ => {}
                }
            }
        }

        // Generation starts on entry; the original screen fired the same way.
        loop {
            self.spin(
                "Generating résumé with AI...",
                ops::fetch_resume(session, self.api.as_ref()),
            )
            .await;

            match &session.error {
                None => break,
                Some(error) => {
                    println!("✗ {error}");
                    let Some(choice) = prompt_choice("[r]etry, [b]ack, [q]uit: ")? else {
                        return Ok(StepOutcome::Quit);
                    };
                    match choice.as_str() {
                        "b" => {
                            session.goto(session.screen.back());
                            return Ok(StepOutcome::Continue);
                        }
                        "q" => return Ok(StepOutcome::Quit),
                        _ => {}
                    }
                }
            }
        }

        let markdown = session.resume_markdown.clone().unwrap_or_default();
        println!();
        if markdown.is_empty() {
            println!("The generator returned an empty document.");
        } else {
            println!("{}", "─".repeat(64));
            println!("{}", markdown.trim_end());
            println!("{}", "─".repeat(64));
        }
        println!();

        loop {
            let Some(choice) = prompt_choice(generation_menu(&markdown))? else {
                return Ok(StepOutcome::Quit);
            };
            match choice.as_str() {
                "e" if !markdown.is_empty() => self.export_document(&markdown, &session.profile),
                "" => {
                    session.goto(Screen::Landing);
                    return Ok(StepOutcome::Continue);
                }
                "b" => {
                    session.goto(session.screen.back());
                    return Ok(StepOutcome::Continue);
                }
                "q" => return Ok(StepOutcome::Quit),
                _ => {}
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Helpers
    // ────────────────────────────────────────────────────────────────────

    fn export_document(&self, markdown: &str, profile: &ApplicantProfile) {
        let document = render_document(markdown, profile);
        match self.exporter.export(&document) {
            Ok(outcome) => {
                println!("Saved {}", outcome.html_path.display());
                match outcome.pdf_path {
                    Some(pdf_path) => println!("Saved {}", pdf_path.display()),
                    None => {
                        println!("No PDF converter found; opening the document to print instead.");
                        if let Err(error) = Exporter::open(&outcome.html_path) {
                            warn!("Could not open the document: {error:#}");
                            println!(
                                "Open {} in a browser and print to PDF.",
                                outcome.html_path.display()
                            );
                        }
                    }
                }
            }
            Err(error) => {
                // The generated résumé is intact; this stays a notice.
                warn!("Export failed: {error:#}");
                println!("Export failed: {error:#}");
            }
        }
    }

    async fn spin<F>(&self, message: &str, task: F) -> F::Output
    where
        F: std::future::Future,
    {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        let output = task.await;
        spinner.finish_and_clear();
        output
    }
}

fn heading(session: &Session) {
    println!();
    println!(
        "─── {} · {} ───",
        session.screen.route(),
        session.screen.title()
    );
    println!();
}

/// Prompts and reads one trimmed line. `None` means stdin closed.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt_line`], lowercased for menu choices.
fn prompt_choice(prompt: &str) -> io::Result<Option<String>> {
    Ok(prompt_line(prompt)?.map(|input| input.to_lowercase()))
}

/// Field prompt where an empty input keeps the current value.
fn prompt_field(label: &str, current: &str) -> io::Result<Option<String>> {
    let prompt = if current.is_empty() {
        format!("  {label}: ")
    } else {
        format!("  {label} [{current}]: ")
    };
    Ok(prompt_line(&prompt)?.map(|input| {
        if input.is_empty() {
            current.to_string()
        } else {
            input
        }
    }))
}

/// What the area prompt read: a fresh area, keep-current on empty input,
/// or one of the menu sentinels.
enum AreaInput {
    Area(String),
    KeepCurrent,
    Back,
    Quit,
}

fn parse_area_input(input: &str) -> AreaInput {
    if input.eq_ignore_ascii_case("b") {
        return AreaInput::Back;
    }
    if input.eq_ignore_ascii_case("q") {
        return AreaInput::Quit;
    }
    if input.is_empty() {
        AreaInput::KeepCurrent
    } else {
        AreaInput::Area(input.to_string())
    }
}

/// Menu for the generated résumé; export only shows up once there is a
/// document to export.
fn generation_menu(markdown: &str) -> &'static str {
    if markdown.is_empty() {
        "[Enter] finish, [b]ack, [q]uit: "
    } else {
        "[e]xport, [Enter] finish, [b]ack, [q]uit: "
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_prompt_back_and_quit_sentinels() {
        assert!(matches!(parse_area_input("b"), AreaInput::Back));
        assert!(matches!(parse_area_input("B"), AreaInput::Back));
        assert!(matches!(parse_area_input("q"), AreaInput::Quit));
        assert!(matches!(parse_area_input(""), AreaInput::KeepCurrent));
    }

    #[test]
    fn test_area_prompt_passes_area_text_through() {
        assert!(matches!(
            parse_area_input("Backend Developer"),
            AreaInput::Area(area) if area == "Backend Developer"
        ));
        // Only the lone letter is a sentinel.
        assert!(matches!(parse_area_input("qa"), AreaInput::Area(_)));
    }

    #[test]
    fn test_export_offered_only_with_content() {
        assert!(!generation_menu("").contains("[e]xport"));
        assert!(generation_menu("# Résumé").contains("[e]xport"));
    }
}
