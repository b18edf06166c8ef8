//! Step outcomes and the install report.

use std::fmt;

/// Pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Environment,
    Acquire,
    Directories,
    Config,
    Dependencies,
    ServiceProbe,
    SmokeTest,
    Daemon,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Environment,
        Step::Acquire,
        Step::Directories,
        Step::Config,
        Step::Dependencies,
        Step::ServiceProbe,
        Step::SmokeTest,
        Step::Daemon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::Environment => "environment check",
            Step::Acquire => "source acquisition",
            Step::Directories => "directory setup",
            Step::Config => "config setup",
            Step::Dependencies => "dependency installation",
            Step::ServiceProbe => "service probe",
            Step::SmokeTest => "installation test",
            Step::Daemon => "daemon launch",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single step.
///
/// `Fatal` is the only variant that stops the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    Skipped(String),
    Warning(String),
    Fatal(String),
}

impl StepOutcome {
    pub fn warning<S: Into<String>>(message: S) -> Self {
        StepOutcome::Warning(message.into())
    }

    pub fn fatal<S: Into<String>>(message: S) -> Self {
        StepOutcome::Fatal(message.into())
    }
}

/// Record of a completed (non-fatal) pipeline run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub steps: Vec<(Step, StepOutcome)>,
}

impl InstallReport {
    pub fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, outcome)| outcome)
    }

    /// Warnings collected across steps, in order.
    pub fn warnings(&self) -> Vec<(Step, &str)> {
        self.steps
            .iter()
            .filter_map(|(step, outcome)| match outcome {
                StepOutcome::Warning(message) => Some((*step, message.as_str())),
                _ => None,
            })
            .collect()
    }
}
