use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationCode {
    EmptyName,
    NameTooLong,
    DuplicateName,
    CapacityReached,
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "EMPTY_NAME"),
            Self::NameTooLong => write!(f, "NAME_TOO_LONG"),
            Self::DuplicateName => write!(f, "DUPLICATE_NAME"),
            Self::CapacityReached => write!(f, "CAPACITY_REACHED"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCode {
    WrongPhase,
    NotEnoughEntries,
    NothingToReset,
}

impl fmt::Display for TransitionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase => write!(f, "WRONG_PHASE"),
            Self::NotEnoughEntries => write!(f, "NOT_ENOUGH_ENTRIES"),
            Self::NothingToReset => write!(f, "NOTHING_TO_RESET"),
        }
    }
}

/// Session operations that can be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    StartSpin,
    ConfirmElimination,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
            Self::StartSpin => write!(f, "start_spin"),
            Self::ConfirmElimination => write!(f, "confirm_elimination"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// Every variant is a local, recoverable rejection. Nothing here is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WheelError {
    Validation {
        code: ValidationCode,
    },
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    InvalidTransition {
        action: Action,
        phase: &'static str,
        code: TransitionCode,
    },
    InvalidConfig {
        field: &'static str,
    },
}

impl WheelError {
    pub(crate) fn validation(code: ValidationCode) -> Self {
        Self::Validation { code }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { code } => write!(f, "entry rejected: {code}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {index} (have {len} entries)")
            }
            Self::InvalidTransition {
                action,
                phase,
                code,
            } => write!(f, "cannot {action} while {phase}: {code}"),
            Self::InvalidConfig { field } => write!(f, "invalid wheel config: {field}"),
        }
    }
}

impl std::error::Error for WheelError {}
