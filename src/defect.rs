//! The typed defect record and its log-line rendering.

/// A single defect extracted from a report, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    /// Free-text description of the defect.
    pub message: String,
    /// Short classification tag.
    pub category: String,
    /// Full source path resolved against the report's source directories.
    pub source_path: String,
    /// 1-based line within the source file.
    pub start_line: i32,
    /// The report's `startBytecode` offset, displayed in the column slot.
    pub start_column: i32,
    /// Raw severity rank; lower is more severe. Not range-checked here.
    pub priority: i32,
}

impl Defect {
    /// Whether this defect classifies as an error at the given threshold.
    pub fn is_error(&self, threshold: i32) -> bool {
        self.priority <= threshold
    }

    pub fn severity_label(&self, threshold: i32) -> &'static str {
        if self.is_error(threshold) {
            "ERROR"
        } else {
            "WARNING"
        }
    }

    /// One log line for this defect:
    /// `(SEVERITY) path:line:column [category] message`.
    pub fn log_entry(&self, threshold: i32) -> String {
        format!(
            "({}) {} [{}] {}",
            self.severity_label(threshold),
            self.source_identifier(),
            self.category,
            self.message
        )
    }

    fn source_identifier(&self) -> String {
        format!("{}:{}:{}", self.source_path, self.start_line, self.start_column)
    }
}
