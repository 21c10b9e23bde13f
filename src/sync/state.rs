//! Sync statistics tracking.

/// Per-course sync statistics.
#[derive(Debug, Default)]
pub struct CourseStats {
    pub course_name: String,
    pub folders_extracted: u64,
    pub files_fetched: u64,
    pub items_skipped: u64,
}

impl CourseStats {
    /// Create empty statistics for a course.
    pub fn new(course_name: String) -> Self {
        Self {
            course_name,
            ..Default::default()
        }
    }

    /// Total number of items brought to disk.
    pub fn total_downloaded(&self) -> u64 {
        self.folders_extracted + self.files_fetched
    }
}

/// Global statistics across all courses.
#[derive(Debug, Default)]
pub struct GlobalStats {
    pub folders_extracted: u64,
    pub files_fetched: u64,
    pub items_skipped: u64,
    pub courses_processed: u64,
    pub courses_failed: u64,
}

impl GlobalStats {
    /// Add statistics from a synced course.
    pub fn add_course_stats(&mut self, stats: &CourseStats) {
        self.folders_extracted += stats.folders_extracted;
        self.files_fetched += stats.files_fetched;
        self.items_skipped += stats.items_skipped;
        self.courses_processed += 1;
    }

    /// Mark a course as failed.
    pub fn mark_course_failed(&mut self) {
        self.courses_failed += 1;
    }

    /// Total number of items brought to disk.
    pub fn total_downloaded(&self) -> u64 {
        self.folders_extracted + self.files_fetched
    }
}
