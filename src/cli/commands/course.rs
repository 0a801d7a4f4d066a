//! Course command handler
//!
//! Session course management: add, remove, list, clear. All input
//! validation happens here before anything reaches the calculator.

use crate::args::CourseSubcommand;
use crate::commands::{load_session, save_session};
use credit_bridge::config::Config;
use credit_bridge::info;
use std::io::{self, Write};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    match subcommand {
        CourseSubcommand::Add {
            name,
            credits,
            grade,
        } => handle_add(config, &name, credits, &grade),
        CourseSubcommand::Remove { id } => handle_remove(config, id),
        CourseSubcommand::List => handle_list(config),
        CourseSubcommand::Clear { yes } => handle_clear(config, yes),
    }
}

fn handle_add(config: &Config, name: &str, credits: u32, grade: &str) {
    let mut session = load_session(config);
    session.requirement = config.program.requirement;
    session.cost_per_credit = config.program.cost_per_credit;

    match session.add_course(name, credits, grade) {
        Ok(course) => {
            let line = format!(
                "✓ Added [{}] {} - {} credits - {} - {}",
                course.id,
                course.name,
                course.credits,
                course.display_grade,
                course.status_label()
            );
            info!("Course added: {} ({})", course.name, course.display_grade);
            if save_session(&session, config) {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_remove(config: &Config, id: u64) {
    let mut session = load_session(config);

    if session.remove_course(id) {
        if save_session(&session, config) {
            println!("✓ Course {id} removed");
        }
    } else {
        eprintln!("✗ No course with id {id} in the session");
        std::process::exit(1);
    }
}

fn handle_list(config: &Config) {
    let session = load_session(config);

    if session.courses.is_empty() {
        println!("No courses added yet");
        return;
    }

    println!("Courses ({}):", session.course_count());
    for course in &session.courses {
        println!(
            "  [{}] {} - {} credits - {} - {}",
            course.id,
            course.name,
            course.credits,
            course.display_grade,
            course.status_label()
        );
    }
}

fn handle_clear(config: &Config, yes: bool) {
    let mut session = load_session(config);

    if session.courses.is_empty() {
        println!("✓ Session has no courses");
        return;
    }

    if !yes {
        print!(
            "Are you sure you want to delete all {} courses? (y/n): ",
            session.course_count()
        );
        io::stdout().flush().ok();

        let mut response = String::new();
        io::stdin().read_line(&mut response).ok();

        if !response.trim().eq_ignore_ascii_case("y")
            && !response.trim().eq_ignore_ascii_case("yes")
        {
            println!("✗ Clear cancelled");
            return;
        }
    }

    session.clear();
    if save_session(&session, config) {
        println!("✓ All courses deleted");
    }
}
