use super::line_classifier::{classify_info_line, InfoField};
use crate::dependency_model::domain::{
    package_key, DependencyModel, DiagnosticsSink, Insertion, PackageInfo, UNDEFINED,
};
use std::mem;

/// Parser state while walking the info report.
///
/// A `Name` line always opens a new record; the record is only written to the
/// model when the next `Name` line or the end of input is reached.
#[derive(Debug)]
enum RecordState {
    /// No `Name` line seen yet. Fields found here are kept only for the
    /// end-of-input flush and dropped as soon as a `Name` line appears.
    NoPendingRecord { orphan: PackageInfo },
    AccumulatingRecord { name: String, info: PackageInfo },
}

impl Default for RecordState {
    fn default() -> Self {
        RecordState::NoPendingRecord {
            orphan: PackageInfo::default(),
        }
    }
}

impl RecordState {
    fn info_mut(&mut self) -> &mut PackageInfo {
        match self {
            RecordState::NoPendingRecord { orphan } => orphan,
            RecordState::AccumulatingRecord { info, .. } => info,
        }
    }
}

/// InfoFileParser service populating the model from a `yum info` capture
///
/// Recognized fields overwrite the record in progress (last write wins);
/// every other line is ignored.
pub struct InfoFileParser<D> {
    diagnostics: D,
}

impl<D: DiagnosticsSink> InfoFileParser<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    /// Parses the whole report content into `model`
    pub fn parse_str(&self, content: &str, model: &mut DependencyModel) {
        self.parse(content.lines(), model)
    }

    /// Parses a sequence of report lines into `model`
    pub fn parse<'a, I>(&self, lines: I, model: &mut DependencyModel)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = RecordState::default();

        for line in lines {
            let Some(info_line) = classify_info_line(line) else {
                continue;
            };
            let value = info_line.value.to_string();

            match info_line.field {
                InfoField::Name => {
                    self.diagnostics.debug(&format!("found package {}", value));
                    let previous = mem::replace(
                        &mut state,
                        RecordState::AccumulatingRecord {
                            name: value,
                            info: PackageInfo::default(),
                        },
                    );
                    if let RecordState::AccumulatingRecord { name, info } = previous {
                        self.flush(model, &name, info);
                    }
                }
                InfoField::Version => {
                    self.diagnostics
                        .debug(&format!("  found version {}", value));
                    state.info_mut().version = value;
                }
                InfoField::Release => {
                    self.diagnostics
                        .debug(&format!("  found release {}", value));
                    state.info_mut().release = value;
                }
                InfoField::Arch => {
                    self.diagnostics.debug(&format!("  found arch {}", value));
                    state.info_mut().arch = value;
                }
                InfoField::Repo => {
                    self.diagnostics.debug(&format!("  found repo {}", value));
                    state.info_mut().repository = value;
                }
                InfoField::Summary => {
                    self.diagnostics
                        .debug(&format!("  found summary {}", value));
                    state.info_mut().summary = value;
                }
            }
        }

        // The last record is flushed unconditionally, even without any Name line
        match state {
            RecordState::AccumulatingRecord { name, info } => self.flush(model, &name, info),
            RecordState::NoPendingRecord { orphan } => self.flush(model, UNDEFINED, orphan),
        }
    }

    fn flush(&self, model: &mut DependencyModel, name: &str, info: PackageInfo) {
        let key = package_key(name, &info.arch);
        self.diagnostics.debug(&format!("add_package {}", key));
        if model.add_package(&key, info) == Insertion::AlreadyPresent {
            self.diagnostics
                .warn(&format!("package {} already exists, ignored", key));
        }
    }
}
