use egui::Color32;

/// Result of one conversion attempt. Exactly one of these is produced per
/// Convert click and rendered once as a [`Notice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Carries the archive file name, e.g. "photos.zip".
    Success(String),
    NoFolderSelected,
    /// Carries the raw error text from the archive writer.
    ArchiveFailed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> Color32 {
        match self {
            Severity::Success => Color32::GREEN,
            Severity::Error => Color32::RED,
        }
    }
}

pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn from_outcome(outcome: OperationOutcome) -> Self {
        match outcome {
            OperationOutcome::Success(file_name) => Notice {
                title: "Convert to .zip Successfully - zipper".to_string(),
                message: format!("{file_name} Successfully Created"),
                severity: Severity::Success,
            },
            OperationOutcome::NoFolderSelected => Notice {
                title: "Please Enter Folder - zipper".to_string(),
                message: "Please Enter Folder".to_string(),
                severity: Severity::Error,
            },
            OperationOutcome::ArchiveFailed(error) => Notice {
                title: "Error - zipper".to_string(),
                message: error,
                severity: Severity::Error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_notice_names_the_archive() {
        let notice = Notice::from_outcome(OperationOutcome::Success("backup.zip".to_string()));
        assert_eq!(notice.message, "backup.zip Successfully Created");
        assert_eq!(notice.severity, Severity::Success);
    }

    #[test]
    fn missing_folder_notice_uses_fixed_message() {
        let notice = Notice::from_outcome(OperationOutcome::NoFolderSelected);
        assert_eq!(notice.message, "Please Enter Folder");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn failure_notice_carries_raw_error_text() {
        let notice = Notice::from_outcome(OperationOutcome::ArchiveFailed(
            "Permission denied (os error 13)".to_string(),
        ));
        assert_eq!(notice.title, "Error - zipper");
        assert_eq!(notice.message, "Permission denied (os error 13)");
        assert_eq!(notice.severity, Severity::Error);
    }
}
