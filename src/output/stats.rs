//! Statistics reporting.

use console::style;

use crate::sync::{CourseStats, GlobalStats};

/// Print statistics for a single course.
pub fn print_course_stats(stats: &CourseStats) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", stats.course_name)).bold()
    );
    println!("  Folders extracted: {}", stats.folders_extracted);
    println!("  Files fetched:     {}", stats.files_fetched);
    println!("  Skipped:           {}", stats.items_skipped);
    println!("  Total:             {} downloaded", stats.total_downloaded());
}

/// Print global statistics across all courses.
pub fn print_global_stats(stats: &GlobalStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Courses processed: {}", stats.courses_processed);
    if stats.courses_failed > 0 {
        println!(
            "  Courses failed:    {}",
            style(stats.courses_failed).red()
        );
    }
    println!("  Folders extracted: {}", stats.folders_extracted);
    println!("  Files fetched:     {}", stats.files_fetched);
    println!("  Skipped:           {}", stats.items_skipped);
    println!("  Total:             {} downloaded", stats.total_downloaded());
    println!("{}", style("═".repeat(50)).dim());
}
