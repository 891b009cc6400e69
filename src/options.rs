/// Settings shared by [`Matcher`](crate::Matcher), the scanner, and
/// [`RuleSet`](crate::RuleSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Compare token values ignoring ASCII case. Categories always compare
    /// exactly.
    pub ignore_case: bool,
    /// Let the scanner yield zero-length matches. Each one advances the scan
    /// by a single token.
    pub report_empty: bool,
}

impl MatchOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_case: false,
            report_empty: false,
        }
    }

    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[must_use]
    pub const fn with_report_empty(mut self, report_empty: bool) -> Self {
        self.report_empty = report_empty;
        self
    }
}
