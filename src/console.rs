//! Interactive console surface. Owns stdin/stdout; everything that talks
//! to a backend goes through [`Assistant`].
//!
//! The session loop is iterative: "Restart" in the follow-up menu
//! continues the outer cycle rather than re-entering the loop recursively.

use std::io::{self, Write};

use crate::assistant::{process_framework_selection, Assistant};
use crate::config::Settings;
use crate::error::Error;
use crate::framework::{Framework, APP_NAME, INDUSTRY_EXAMPLES};

/// Run interactive sessions until the user exits (end of input).
pub async fn run(provider_name: &str, settings: &Settings) -> Result<(), Error> {
    let assistant = Assistant::new(provider_name, settings)?;

    'session: loop {
        print_welcome(&assistant);

        let Some(industry) = prompt_industry()? else {
            break;
        };
        if industry.is_empty() {
            println!("Industry is required. Please try again.");
            continue;
        }

        let Some(choice) = prompt_framework_choice()? else {
            break;
        };

        let (framework, prompt) = match process_framework_selection(&choice, &industry) {
            Ok(selection) => selection,
            Err(err) => {
                println!("\n{err}. Please choose a number between 1 and 5.");
                continue;
            }
        };

        println!("\nAnalyzing your selection...");
        let reply = match assistant.ask(&prompt).await {
            Ok(reply) => reply,
            // Failure text takes the place of the reply; the session goes on.
            Err(err) => err.to_string(),
        };
        display_response(&reply, &industry);

        // Comparison mode has no follow-up menu.
        let Some(framework) = framework else {
            continue;
        };

        loop {
            let Some(next) = read_line("\nWhat would you like to explore next?\n1. Implement in my factory\n2. See AI tools\n3. Restart\nChoice: ")?
            else {
                break 'session;
            };

            match next.as_str() {
                "1" => {
                    println!("\nGenerating custom implementation plan...");
                    match assistant.implementation_plan(framework, &industry).await {
                        Ok(plan) => display_section("CUSTOM IMPLEMENTATION ROADMAP", &plan),
                        Err(err) => println!("\n{err}"),
                    }
                    if pause_for_enter()?.is_none() {
                        break 'session;
                    }
                }
                "2" => {
                    println!("\nCurating AI solutions...");
                    match assistant.ai_toolkit(framework, &industry).await {
                        Ok(toolkit) => display_section("AI TOOLKIT FOR LEAN IMPLEMENTATION", &toolkit),
                        Err(err) => println!("\n{err}"),
                    }
                    if pause_for_enter()?.is_none() {
                        break 'session;
                    }
                }
                "3" => continue 'session,
                _ => println!("\nInvalid selection. Please choose a valid option."),
            }
        }
    }

    println!("\nThank you for using the {APP_NAME}!");
    Ok(())
}

fn print_welcome(assistant: &Assistant) {
    let divider = "=".repeat(60);
    println!("\n{divider}");
    println!("{APP_NAME} v{}", env!("CARGO_PKG_VERSION"));
    println!("Powered by: {}", assistant.provider_name());
    println!("{divider}");
    println!("I'm here to help optimize your factory floor decisions with");
    println!("AI-powered guidance on Lean manufacturing frameworks.");
}

fn prompt_industry() -> Result<Option<String>, Error> {
    println!("\nTo tailor this experience, what industry are you in?");
    println!("Examples: {}", INDUSTRY_EXAMPLES.join(", "));
    read_line("Your industry: ")
}

fn prompt_framework_choice() -> Result<Option<String>, Error> {
    println!("\nWhich Lean framework would you like to explore?");
    for (i, framework) in Framework::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, framework.label());
    }
    println!("5. Compare frameworks");
    read_line("Enter choice (1-5): ")
}

fn display_response(reply: &str, industry: &str) {
    let divider = "=".repeat(60);
    println!("\n{divider}");
    println!("YOUR {} LEAN ROADMAP", industry.to_uppercase());
    println!("{divider}");
    println!("{reply}");
}

fn display_section(title: &str, body: &str) {
    let divider = "=".repeat(60);
    println!("\n{divider}");
    println!("{title}");
    println!("{divider}");
    println!("{body}");
}

fn pause_for_enter() -> Result<Option<String>, Error> {
    read_line("\nPress Enter to continue...")
}

/// Prompt and read one trimmed line. `None` means end of input.
fn read_line(prompt: &str) -> Result<Option<String>, Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
