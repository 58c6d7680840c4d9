use crate::archive;
use crate::models::OperationOutcome;
use std::path::{PathBuf, MAIN_SEPARATOR};
use tracing::{error, info};

/// Seam over the native directory dialog so the controller can be exercised
/// without a windowing system. `None` means the user cancelled.
pub trait FolderPicker {
    fn pick_folder(&self) -> Option<PathBuf>;
}

pub struct SystemFolderPicker;

impl FolderPicker for SystemFolderPicker {
    fn pick_folder(&self) -> Option<PathBuf> {
        rfd::FileDialog::new().pick_folder()
    }
}

/// Owns the two pieces of state behind the window: the selected folder path
/// and the archive name the entry field is bound to.
pub struct ConvertController {
    pub selected_folder: String,
    pub archive_name: String,
    output_dir: PathBuf,
}

impl Default for ConvertController {
    fn default() -> Self {
        Self {
            selected_folder: String::new(),
            archive_name: String::new(),
            // Archives land in the process working directory.
            output_dir: PathBuf::from("."),
        }
    }
}

impl ConvertController {
    pub fn select_folder(&mut self, picker: &dyn FolderPicker) {
        match picker.pick_folder() {
            Some(path) => {
                self.selected_folder = path.display().to_string();
                info!("Selected folder: {}", self.selected_folder);
            }
            None => {
                // Cancelling wipes any previous selection.
                self.selected_folder.clear();
                info!("Folder selection cancelled");
            }
        }
    }

    pub fn convert(&mut self) -> OperationOutcome {
        if self.archive_name.is_empty() {
            // Default to the last path segment; the bound entry field picks
            // this up on the next frame.
            self.archive_name = self
                .selected_folder
                .rsplit(MAIN_SEPARATOR)
                .next()
                .unwrap_or_default()
                .to_string();
        }

        if self.selected_folder.is_empty() {
            return OperationOutcome::NoFolderSelected;
        }

        let file_name = format!("{}.zip", self.archive_name);
        let dest = self.output_dir.join(&file_name);
        match archive::zip_directory(self.selected_folder.as_ref(), &dest) {
            Ok(()) => OperationOutcome::Success(file_name),
            Err(e) => {
                error!("Archive creation failed: {e}");
                OperationOutcome::ArchiveFailed(e.to_string())
            }
        }
    }
}
