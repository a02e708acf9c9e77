use std::process::ExitCode;

/// Process exit status.
///
/// Errors (exit 2) never reach this type: they travel as `Err` up to
/// `main`, which maps them to [`ExitStatus::Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: the command ran and every requested gate passed.
    Success,
    /// 1: the command ran but a gate failed (`stats --min-coverage`).
    Failure,
    /// 2: invalid input or a failed write; nothing was modified.
    Error,
}

impl ExitStatus {
    /// Status for a command whose only gate is `passed`.
    pub fn gate(passed: bool) -> Self {
        if passed { Self::Success } else { Self::Failure }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
