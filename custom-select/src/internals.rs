//! Form value and validity of a single control.

/// Which validity constraints a control currently fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityFlags {
    pub value_missing: bool,
    pub custom_error: bool,
}

impl ValidityFlags {
    pub fn value_missing() -> Self {
        Self {
            value_missing: true,
            ..Default::default()
        }
    }

    /// True when no constraint fails.
    pub fn valid(&self) -> bool {
        !self.value_missing && !self.custom_error
    }
}

/// A validity failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityReport {
    pub message: String,
    /// Element the failure is anchored to, if any.
    pub anchor: Option<String>,
}

/// Reports kept per control; older ones are dropped first.
pub const MAX_REPORTS: usize = 16;

/// Per-control form state, the counterpart of the browser's `ElementInternals`.
///
/// Holds the value the owning form submits and the control's validity.
/// The most recent [`MAX_REPORTS`] reported failures are kept in order so
/// callers can surface them.
#[derive(Debug, Clone, Default)]
pub struct ElementInternals {
    form_value: Option<String>,
    validity: ValidityFlags,
    message: String,
    anchor: Option<String>,
    reports: Vec<ValidityReport>,
}

impl ElementInternals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_form_value(&mut self, value: Option<String>) {
        self.form_value = value;
    }

    pub fn form_value(&self) -> Option<&str> {
        self.form_value.as_deref()
    }

    /// Replace the validity state. Passing all-clear flags is the same as
    /// [`set_valid`](Self::set_valid).
    pub fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: impl Into<String>,
        anchor: Option<&str>,
    ) {
        if flags.valid() {
            self.set_valid();
            return;
        }
        self.validity = flags;
        self.message = message.into();
        self.anchor = anchor.map(str::to_string);
    }

    pub fn set_valid(&mut self) {
        self.validity = ValidityFlags::default();
        self.message.clear();
        self.anchor = None;
    }

    pub fn validity(&self) -> ValidityFlags {
        self.validity
    }

    pub fn validation_message(&self) -> &str {
        &self.message
    }

    pub fn validation_anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn check_validity(&self) -> bool {
        self.validity.valid()
    }

    /// Record a report when invalid. Returns the validity.
    pub fn report_validity(&mut self) -> bool {
        if self.validity.valid() {
            return true;
        }

        log::warn!(
            "[validity] {} (anchor: {})",
            self.message,
            self.anchor.as_deref().unwrap_or("none")
        );
        if self.reports.len() >= MAX_REPORTS {
            let excess = self.reports.len() + 1 - MAX_REPORTS;
            self.reports.drain(..excess);
        }
        self.reports.push(ValidityReport {
            message: self.message.clone(),
            anchor: self.anchor.clone(),
        });
        false
    }

    pub fn reports(&self) -> &[ValidityReport] {
        &self.reports
    }

    pub fn take_reports(&mut self) -> Vec<ValidityReport> {
        std::mem::take(&mut self.reports)
    }

    /// Form-associated controls always take part in constraint validation.
    pub fn will_validate(&self) -> bool {
        true
    }
}
