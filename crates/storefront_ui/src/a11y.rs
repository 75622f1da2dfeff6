//! Development-time accessibility checks for icon-only controls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Accessibility problems detected while rendering a control.
pub enum AccessibilityIssue {
    /// The control shows only an icon and nothing names it for screen readers.
    #[error("{control} renders only an icon but has no accessible label; pass `aria_label`")]
    MissingIconLabel {
        /// Component name.
        control: &'static str,
    },
    /// The control was declared icon-only without an icon to show.
    #[error("{control} is declared icon-only but has no icon")]
    MissingIcon {
        /// Component name.
        control: &'static str,
    },
}

/// Checks that an icon-only control is named for assistive technology.
///
/// # Errors
///
/// Returns [`AccessibilityIssue::MissingIcon`] when no icon is present and
/// [`AccessibilityIssue::MissingIconLabel`] when the label is absent or blank.
pub fn audit_icon_only_control(
    control: &'static str,
    has_icon: bool,
    aria_label: Option<&str>,
) -> Result<(), AccessibilityIssue> {
    if !has_icon {
        return Err(AccessibilityIssue::MissingIcon { control });
    }
    match aria_label.map(str::trim) {
        Some(label) if !label.is_empty() => Ok(()),
        _ => Err(AccessibilityIssue::MissingIconLabel { control }),
    }
}

/// Logs an audit failure in debug builds; release builds stay silent.
pub(crate) fn report_issue(result: Result<(), AccessibilityIssue>) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(issue) = result {
        leptos::logging::warn!("storefront_ui accessibility: {issue}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labeled_icon_only_control_passes() {
        assert_eq!(audit_icon_only_control("Button", true, Some("Download")), Ok(()));
    }

    #[test]
    fn unlabeled_icon_only_control_is_flagged() {
        assert_eq!(
            audit_icon_only_control("Button", true, None),
            Err(AccessibilityIssue::MissingIconLabel { control: "Button" })
        );
        assert_eq!(
            audit_icon_only_control("IconTextButton", true, Some("  ")),
            Err(AccessibilityIssue::MissingIconLabel {
                control: "IconTextButton"
            })
        );
    }

    #[test]
    fn icon_only_control_without_icon_is_flagged() {
        assert_eq!(
            audit_icon_only_control("Button", false, Some("Download")),
            Err(AccessibilityIssue::MissingIcon { control: "Button" })
        );
    }

    #[test]
    fn issue_message_names_the_control() {
        let issue = AccessibilityIssue::MissingIconLabel { control: "Button" };
        assert!(issue.to_string().starts_with("Button renders only an icon"));
    }
}
