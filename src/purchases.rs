//! Policy summaries and display helpers for the purchases and overview
//! screens.

use crate::data::{Policy, PolicyStatus};
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

const DISPLAY_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Coverage items shown before collapsing into "+N more".
pub const COVERAGE_PREVIEW: usize = 3;

/// Active policies renewing within this many days get a warning.
pub const RENEWAL_WARNING_DAYS: i64 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolicySummary {
    pub active: usize,
    pub pending: usize,
    pub expired: usize,
    /// Yearly premium across active policies.
    pub annual_premium: f64,
}

pub fn summarize(policies: &[Policy]) -> PolicySummary {
    policies
        .iter()
        .fold(PolicySummary::default(), |mut summary, policy| {
            match policy.status {
                PolicyStatus::Active => {
                    summary.active += 1;
                    summary.annual_premium += policy.price;
                }
                PolicyStatus::Pending => summary.pending += 1,
                PolicyStatus::Expired => summary.expired += 1,
            }
            summary
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyTab {
    #[default]
    All,
    Active,
    Pending,
    Expired,
}

impl PolicyTab {
    pub const ALL: [PolicyTab; 4] = [
        PolicyTab::All,
        PolicyTab::Active,
        PolicyTab::Pending,
        PolicyTab::Expired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PolicyTab::All => "All",
            PolicyTab::Active => "Active",
            PolicyTab::Pending => "Pending",
            PolicyTab::Expired => "Expired",
        }
    }

    pub fn admits(self, status: PolicyStatus) -> bool {
        match self {
            PolicyTab::All => true,
            PolicyTab::Active => status == PolicyStatus::Active,
            PolicyTab::Pending => status == PolicyStatus::Pending,
            PolicyTab::Expired => status == PolicyStatus::Expired,
        }
    }
}

pub fn policies_in_tab(policies: &[Policy], tab: PolicyTab) -> Vec<&Policy> {
    policies
        .iter()
        .filter(|policy| tab.admits(policy.status))
        .collect()
}

/// Days from `today` until the policy ends. Negative once it has lapsed.
pub fn days_remaining(policy: &Policy, today: Date) -> i64 {
    (policy.end_date - today).whole_days()
}

/// Share of the coverage period already elapsed, clamped to `0..=100`.
pub fn term_progress(policy: &Policy, today: Date) -> u8 {
    let total = (policy.end_date - policy.start_date).whole_days();
    if total <= 0 {
        return 100;
    }
    let elapsed = (today - policy.start_date).whole_days().clamp(0, total);
    ((elapsed * 100) / total) as u8
}

/// First few coverage items plus the count of the rest.
pub fn coverage_preview(policy: &Policy) -> (&[String], usize) {
    let shown = policy.coverage.len().min(COVERAGE_PREVIEW);
    (&policy.coverage[..shown], policy.coverage.len() - shown)
}

/// US dollar formatting with grouping, e.g. `$1,240.00`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Dates as `Jul 15, 2025`.
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(120.0), "$120.00");
        assert_eq!(format_currency(1240.0), "$1,240.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-5.5), "-$5.50");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(time::macros::date!(2025 - 07 - 15)),
            "Jul 15, 2025"
        );
        assert_eq!(format_date(time::macros::date!(2025 - 01 - 05)), "Jan 5, 2025");
    }
}
