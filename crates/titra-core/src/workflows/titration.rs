use crate::core::io::cphlog::CphLogFile;
use crate::core::io::traits::SimulationLog;
use crate::core::stats::occupancy::exclusive_occupancy;
use crate::engine::aggregator::PhAggregator;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// One point of the titration curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitrationPoint {
    pub ph: f64,
    pub fraction: f64,
    pub std_error: f64,
    pub samples: usize,
}

/// Reads every log in `paths`, in order, and estimates the exclusive occupancy
/// at each distinct pH.
///
/// The first file that cannot be read or parsed aborts the run; no points are
/// returned for files processed before it. Points come back in ascending pH.
#[instrument(skip_all, name = "titration_workflow", fields(files = paths.len()))]
pub fn run<P: AsRef<Path>>(
    paths: &[P],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<TitrationPoint>, AnalysisError> {
    if paths.is_empty() {
        return Err(AnalysisError::NoInputs);
    }

    reporter.report(Progress::ReadStart {
        total_files: paths.len() as u64,
    });

    let mut aggregator = PhAggregator::new(config.grouping);
    for path in paths {
        let path = path.as_ref();
        debug!("Reading {:?}", path);

        let (header, table) = CphLogFile::read_from_path(path, &config.format).map_err(|e| {
            AnalysisError::File {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let non_binary = table.non_binary_count();
        if non_binary > 0 {
            warn!(
                "{:?}: {} of {} cycles have a site state other than 0 or 1.",
                path,
                non_binary,
                table.len()
            );
        }

        let samples = table.len();
        debug!("{:?}: pH {} with {} cycles.", path, header.label, samples);
        aggregator.add(&header, table);
        reporter.report(Progress::FileRead {
            path: path.to_path_buf(),
            samples,
        });
    }
    reporter.report(Progress::ReadFinish);

    let points = aggregator
        .into_groups()
        .map(|(_, group)| {
            exclusive_occupancy(group.samples())
                .map(|estimate| TitrationPoint {
                    ph: group.ph(),
                    fraction: estimate.fraction,
                    std_error: estimate.std_error,
                    samples: estimate.samples,
                })
                .map_err(|e| AnalysisError::Occupancy {
                    ph: group.ph(),
                    source: e,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    reporter.report(Progress::GroupsComputed {
        groups: points.len(),
    });
    info!(
        "Computed {} titration point(s) from {} file(s).",
        points.len(),
        paths.len()
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::cphlog::LogParseError;
    use crate::engine::config::{AnalysisConfigBuilder, GroupingStrategy};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::{TempDir, tempdir};

    fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_default(paths: &[PathBuf]) -> Result<Vec<TitrationPoint>, AnalysisError> {
        run(paths, &AnalysisConfig::default(), &ProgressReporter::new())
    }

    #[test]
    fn merges_same_ph_files_into_one_point() {
        let dir = tempdir().unwrap();
        let a = write_log(&dir, "a.log", "# pH 7.00 temp 300\n0 0 1\n1 1 0\n2 0 0\n");
        let b = write_log(&dir, "b.log", "# pH 7.00\n0 1 1\n1 0 1\n");

        let points = run_default(&[a, b]).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].ph, 7.0);
        assert_eq!(points[0].samples, 5);
        assert!((points[0].fraction - 0.6).abs() < 1e-12);
        assert!((points[0].std_error - 0.2191).abs() < 1e-4);
    }

    #[test]
    fn points_are_sorted_by_ph() {
        let dir = tempdir().unwrap();
        let high = write_log(&dir, "high.log", "# pH 9.5\n0 1 0\n");
        let low = write_log(&dir, "low.log", "# pH 2.0\n0 1 1\n");
        let mid = write_log(&dir, "mid.log", "# pH 5.0\n0 0 1\n");

        let points = run_default(&[high, low, mid]).unwrap();
        let phs: Vec<f64> = points.iter().map(|p| p.ph).collect();
        assert_eq!(phs, vec![2.0, 5.0, 9.5]);
    }

    #[test]
    fn first_failing_file_aborts_with_its_path() {
        let dir = tempdir().unwrap();
        let good = write_log(&dir, "good.log", "# pH 7.0\n0 1 0\n");
        let bad = write_log(&dir, "bad.log", "# temperature 300\n0 1 0\n");
        let empty = write_log(&dir, "empty.log", "# pH 4.0\n");

        let err = run_default(&[good, bad.clone(), empty]).unwrap_err();
        match err {
            AnalysisError::File { path, source } => {
                assert_eq!(path, bad);
                assert!(matches!(source, LogParseError::MissingHeaderField { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_table_is_fatal() {
        let dir = tempdir().unwrap();
        let empty = write_log(&dir, "empty.log", "# pH 4.0\n# no cycles\n");
        let err = run_default(&[empty]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::File {
                source: LogParseError::EmptyTable,
                ..
            }
        ));
        assert!(err.to_string().contains("empty.log"));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = run_default(&[dir.path().join("nope.log")]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::File {
                source: LogParseError::NotFound(_),
                ..
            }
        ));
    }

    #[test]
    fn no_inputs_is_an_error() {
        let paths: [PathBuf; 0] = [];
        assert!(matches!(run_default(&paths), Err(AnalysisError::NoInputs)));
    }

    #[test]
    fn label_grouping_splits_differently_written_ph() {
        let dir = tempdir().unwrap();
        let a = write_log(&dir, "a.log", "# pH 7.0\n0 0 1\n");
        let b = write_log(&dir, "b.log", "# pH 7.00\n0 1 1\n");
        let config = AnalysisConfigBuilder::new()
            .grouping(GroupingStrategy::Label)
            .build()
            .unwrap();

        let points = run(&[&a, &b], &config, &ProgressReporter::new()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].fraction, 1.0);
        assert_eq!(points[1].fraction, 0.0);
    }

    #[test]
    fn progress_events_follow_the_pipeline() {
        let dir = tempdir().unwrap();
        let a = write_log(&dir, "a.log", "# pH 6.0\n0 0 1\n1 1 1\n");
        let b = write_log(&dir, "b.log", "# pH 8.0\n0 1 0\n");

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        run(&[a, b], &AnalysisConfig::default(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], Progress::ReadStart { total_files: 2 }));
        assert!(matches!(events[1], Progress::FileRead { samples: 2, .. }));
        assert!(matches!(events[2], Progress::FileRead { samples: 1, .. }));
        assert!(matches!(events[3], Progress::ReadFinish));
        assert!(matches!(events[4], Progress::GroupsComputed { groups: 2 }));
    }
}
