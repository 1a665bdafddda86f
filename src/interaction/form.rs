pub const SUBMIT_LABEL: &str = "Send Request";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your request has been sent. We'll be in touch soon.";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again or email us directly at hello@gratitude.food";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldValue<'a> {
    pub kind: FieldKind,
    pub required: bool,
    pub value: &'a str,
}

impl<'a> FieldValue<'a> {
    pub fn required_text(value: &'a str) -> Self {
        Self { kind: FieldKind::Text, required: true, value }
    }

    pub fn required_email(value: &'a str) -> Self {
        Self { kind: FieldKind::Email, required: true, value }
    }

    pub fn optional_text(value: &'a str) -> Self {
        Self { kind: FieldKind::Text, required: false, value }
    }

    pub fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        if self.required && trimmed.is_empty() {
            return false;
        }
        if self.kind == FieldKind::Email && !trimmed.is_empty() {
            return is_valid_email(trimmed);
        }
        true
    }
}

/// Matches the `^[^\s@]+@[^\s@]+\.[^\s@]+$` shape: one `@` splitting two
/// whitespace-free parts, and a dot somewhere strictly inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Per-field validation flags, `true` where the field failed.
pub fn validate(fields: &[FieldValue<'_>]) -> Vec<bool> {
    fields.iter().map(|f| !f.is_valid()).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitResult {
    Success,
    Error,
}

/// What the submit handler should do with a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; the network request should go out.
    Accepted,
    /// Validation failed; per-field flags, `true` = flag the field.
    Rejected(Vec<bool>),
    /// A submission is already in flight; the event is dropped.
    Ignored,
}

/// Contact form submission state machine, kept free of DOM and network
/// concerns so the submit cycle is testable on its own.
#[derive(Clone, Debug, Default)]
pub struct ContactFormMachine {
    phase: FormPhase,
    last_result: Option<SubmitResult>,
}

impl ContactFormMachine {
    /// Handles a submit event. A submit while one is in flight is ignored
    /// rather than queued; the disabled submit control makes this reachable
    /// only programmatically, but the machine guards it anyway.
    pub fn begin_submit(&mut self, fields: &[FieldValue<'_>]) -> SubmitOutcome {
        if self.phase == FormPhase::Submitting {
            return SubmitOutcome::Ignored;
        }
        let failed = validate(fields);
        if failed.iter().any(|&f| f) {
            self.last_result = Some(SubmitResult::Error);
            return SubmitOutcome::Rejected(failed);
        }
        self.phase = FormPhase::Submitting;
        self.last_result = None;
        SubmitOutcome::Accepted
    }

    /// Completes the in-flight submission. Always returns the machine to
    /// Idle, on success and failure alike.
    pub fn finish(&mut self, ok: bool) -> SubmitResult {
        let result = if ok { SubmitResult::Success } else { SubmitResult::Error };
        self.phase = FormPhase::Idle;
        self.last_result = Some(result);
        result
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn last_result(&self) -> Option<SubmitResult> {
        self.last_result
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_accepts_and_rejects() {
        assert!(is_valid_email("hello@gratitude.food"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaced out@mail.com"));
        assert!(!is_valid_email("trailing@dot."));
        assert!(!is_valid_email("leading@.dot"));
    }

    #[test]
    fn empty_required_field_rejects_without_sending() {
        let mut machine = ContactFormMachine::default();
        let fields = [
            FieldValue::required_text(""),
            FieldValue::required_email("hello@gratitude.food"),
        ];
        let outcome = machine.begin_submit(&fields);
        assert_eq!(outcome, SubmitOutcome::Rejected(vec![true, false]));
        assert!(!machine.is_submitting());
    }

    #[test]
    fn whitespace_only_required_field_rejects() {
        let fields = [FieldValue::required_text("   ")];
        assert_eq!(validate(&fields), vec![true]);
    }

    #[test]
    fn invalid_email_rejects() {
        let mut machine = ContactFormMachine::default();
        let fields = [
            FieldValue::required_text("Ada"),
            FieldValue::required_email("not-an-email"),
        ];
        let outcome = machine.begin_submit(&fields);
        assert_eq!(outcome, SubmitOutcome::Rejected(vec![false, true]));
        assert!(!machine.is_submitting());
    }

    #[test]
    fn optional_empty_field_passes() {
        let fields = [FieldValue::optional_text("")];
        assert_eq!(validate(&fields), vec![false]);
    }

    #[test]
    fn valid_fields_start_a_submission() {
        let mut machine = ContactFormMachine::default();
        let fields = [
            FieldValue::required_text("Ada"),
            FieldValue::required_email("ada@example.com"),
            FieldValue::optional_text(""),
            FieldValue::required_text("We need weekly produce deliveries."),
        ];
        assert_eq!(machine.begin_submit(&fields), SubmitOutcome::Accepted);
        assert!(machine.is_submitting());
        assert_eq!(machine.submit_label(), SUBMITTING_LABEL);
    }

    #[test]
    fn reentrant_submit_is_ignored_while_in_flight() {
        let mut machine = ContactFormMachine::default();
        let fields = [FieldValue::required_text("Ada")];
        assert_eq!(machine.begin_submit(&fields), SubmitOutcome::Accepted);
        assert_eq!(machine.begin_submit(&fields), SubmitOutcome::Ignored);
        // Even an invalid payload is dropped, not validated.
        let bad = [FieldValue::required_text("")];
        assert_eq!(machine.begin_submit(&bad), SubmitOutcome::Ignored);
    }

    #[test]
    fn finish_returns_to_idle_on_both_outcomes() {
        let fields = [FieldValue::required_text("Ada")];

        let mut machine = ContactFormMachine::default();
        machine.begin_submit(&fields);
        assert_eq!(machine.finish(true), SubmitResult::Success);
        assert!(!machine.is_submitting());
        assert_eq!(machine.submit_label(), SUBMIT_LABEL);
        assert_eq!(machine.last_result(), Some(SubmitResult::Success));

        let mut machine = ContactFormMachine::default();
        machine.begin_submit(&fields);
        assert_eq!(machine.finish(false), SubmitResult::Error);
        assert!(!machine.is_submitting());
        assert_eq!(machine.submit_label(), SUBMIT_LABEL);
        assert_eq!(machine.last_result(), Some(SubmitResult::Error));
    }

    #[test]
    fn next_submit_clears_previous_result() {
        let fields = [FieldValue::required_text("Ada")];
        let mut machine = ContactFormMachine::default();
        machine.begin_submit(&fields);
        machine.finish(false);
        assert_eq!(machine.begin_submit(&fields), SubmitOutcome::Accepted);
        assert_eq!(machine.last_result(), None);
    }
}
