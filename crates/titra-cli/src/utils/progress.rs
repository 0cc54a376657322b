use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use titra::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    /// Creates a handler drawing on stderr, or drawing nothing when `visible` is false.
    pub fn new(visible: bool) -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        });
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::ReadStart { total_files } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_files);
                    pb_guard.set_position(0);
                    pb_guard.set_message("Reading logs");
                }
                Progress::FileRead { path, .. } => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    pb_guard.set_message(name);
                    pb_guard.inc(1);
                }
                Progress::ReadFinish => {
                    pb_guard.set_position(pb_guard.length().unwrap_or(0));
                    pb_guard.set_message("Computing occupancy");
                }
                Progress::GroupsComputed { .. } => {
                    pb_guard.finish_and_clear();
                }
            }
        })
    }

    /// Removes the bar from the terminal, whether or not the run completed.
    pub fn finish(&self) {
        if let Ok(pb) = self.pb.lock() {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} files")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}
