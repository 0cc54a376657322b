use std::path::PathBuf;

/// Events emitted while a titration analysis runs.
#[derive(Debug, Clone)]
pub enum Progress {
    ReadStart { total_files: u64 },
    FileRead { path: PathBuf, samples: usize },
    ReadFinish,
    GroupsComputed { groups: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
