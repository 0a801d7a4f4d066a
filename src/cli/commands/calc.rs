//! Calc command handler
//!
//! Loads the session, computes the equivalency summary and study plan, and
//! prints both.

use crate::commands::load_session;
use credit_bridge::config::Config;
use credit_bridge::core::report::format_currency;
use credit_bridge::info;

/// Run the calc command
pub fn run(config: &Config, verbose: bool) {
    let mut session = load_session(config);
    session.requirement = config.program.requirement;
    session.cost_per_credit = config.program.cost_per_credit;

    if session.courses.is_empty() {
        eprintln!("✗ No courses in the session. Add courses first with 'course add'.");
        std::process::exit(1);
    }

    let summary = session.summarize();
    let plan = session.study_plan(config.program.max_semester_credits);
    info!(
        "Calculated results for {} courses (requirement {})",
        session.course_count(),
        session.requirement
    );

    println!("=== Equivalency Results ===");
    println!("Total previous hours:  {}", summary.total_previous_credits);
    println!("Accepted hours:        {}", summary.accepted_credits);
    println!("Remaining hours:       {}", summary.remaining_credits);
    println!(
        "Estimated cost:        {}",
        format_currency(summary.estimated_cost)
    );

    if verbose {
        println!("\nCourses:");
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

    println!("\n=== Study Plan ===");
    if plan.is_empty() {
        println!("Congratulations! You have completed all academic requirements.");
        return;
    }

    println!("Expected semesters: {}", plan.len());
    for allocation in &plan {
        println!(
            "Semester {}: {} credits ({})",
            allocation.semester,
            allocation.credits,
            format_currency(allocation.cost)
        );
    }
}
