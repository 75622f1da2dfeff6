//! Storefront controls, overlay, typography, and layout primitives.
//!
//! Token enums map one-to-one onto the `data-ui-*` attribute values the
//! storefront stylesheet keys on. The free functions in this module hold the
//! behavioral rules of the controls so they stay testable without a DOM.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;

use crate::a11y::{audit_icon_only_control, report_issue};
use crate::{Icon, IconName, IconSize, Spinner};

mod controls;
mod data_display;
mod layout;
mod overlays;

pub use controls::{Button, IconTextButton, TextInput};
pub use data_display::{Badge, Heading, Panel, Text};
pub use layout::{Cluster, Stack};
pub use overlays::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual button variants.
pub enum ButtonVariant {
    /// Filled brand-colored call to action.
    #[default]
    Primary,
    /// Neutral bordered action.
    Secondary,
    /// Transparent text-only action.
    Ghost,
    /// Transparent action with a brand border.
    Outline,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    /// Every variant, in display order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Ghost,
        Self::Outline,
        Self::Danger,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Outline => "outline",
            Self::Danger => "danger",
        }
    }

    /// Parses a DOM token back into a variant.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Touch-optimized button sizes (36, 44, and 48 px tall).
pub enum ButtonSize {
    /// Compact button.
    Sm,
    /// Recommended default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Parses a DOM token back into a size.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }

    /// Nominal rendered height in CSS pixels.
    pub fn height_px(self) -> u16 {
        match self {
            Self::Sm => 36,
            Self::Md => 44,
            Self::Lg => 48,
        }
    }

    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button width behavior.
pub enum ButtonWidth {
    /// Shrink to content.
    #[default]
    Auto,
    /// Fill the container.
    Full,
}

impl ButtonWidth {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Full => "full",
        }
    }

    /// Parses a DOM token back into a width.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "auto" => Some(Self::Auto),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// HTML `type` attribute of a button.
pub enum ButtonType {
    /// Plain button.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Parses an HTML `type` value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "button" => Some(Self::Button),
            "submit" => Some(Self::Submit),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon-and-text button variants.
pub enum IconTextVariant {
    /// Filled button.
    #[default]
    Primary,
    /// White button with a brand border.
    Secondary,
    /// Transparent text button, medium size only.
    Tertiary,
}

impl IconTextVariant {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    /// Parses a DOM token back into a variant.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon-and-text button sizes.
pub enum IconTextSize {
    /// Square plus-icon button.
    Small,
    /// Plus icon followed by the label.
    #[default]
    Medium,
    /// Wide label-only button.
    Large,
}

impl IconTextSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Parses a DOM token back into a size.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What an [`IconTextButton`] shows for a given size.
pub enum IconTextContent {
    /// Only the plus icon.
    IconOnly,
    /// The plus icon followed by the label.
    IconAndLabel,
    /// Only the label.
    LabelOnly,
}

impl IconTextContent {
    /// Resolves the content layout for a button size.
    pub fn for_size(size: IconTextSize) -> Self {
        match size {
            IconTextSize::Small => Self::IconOnly,
            IconTextSize::Medium => Self::IconAndLabel,
            IconTextSize::Large => Self::LabelOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Caller-declared text input status.
pub enum InputStatus {
    /// Resting field.
    #[default]
    Default,
    /// Field drawn as focused even without DOM focus.
    Focus,
    /// Field receiving input.
    Typing,
    /// Field failed validation.
    Error,
    /// Field passed validation.
    Success,
    /// Field is not editable.
    Disabled,
}

impl InputStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Focus,
        Self::Typing,
        Self::Error,
        Self::Success,
        Self::Disabled,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Focus => "focus",
            Self::Typing => "typing",
            Self::Error => "error",
            Self::Success => "success",
            Self::Disabled => "disabled",
        }
    }

    /// Parses a DOM token back into a status.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resolved border/background tone of a text input.
pub enum FieldTone {
    /// Neutral border.
    Idle,
    /// Brand border while focused.
    Focused,
    /// Brand border while typing.
    Typing,
    /// Error border.
    Error,
    /// Neutral success border.
    Success,
    /// Muted, non-interactive field.
    Disabled,
}

impl FieldTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Focused => "focused",
            Self::Typing => "typing",
            Self::Error => "error",
            Self::Success => "success",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Modal dialog widths.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    #[default]
    Md,
    /// Wide dialog.
    Lg,
    /// Extra wide dialog.
    Xl,
    /// Full-screen sheet.
    Full,
}

impl ModalSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Full];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }

    /// Parses a DOM token back into a size.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Modal tone, which selects the action button variants.
pub enum ModalVariant {
    /// Neutral dialog.
    #[default]
    Default,
    /// Destructive confirmation.
    Danger,
    /// Completed-action notice.
    Success,
    /// Time-sensitive warning.
    Warning,
}

impl ModalVariant {
    /// Every variant, in display order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Danger, Self::Success, Self::Warning];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Parses a DOM token back into a variant.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == token)
    }

    /// Button variant used for the confirm action.
    pub fn confirm_button(self) -> ButtonVariant {
        match self {
            Self::Danger => ButtonVariant::Danger,
            Self::Default | Self::Success | Self::Warning => ButtonVariant::Primary,
        }
    }

    /// Button variant used for the cancel action.
    pub fn cancel_button(self) -> ButtonVariant {
        ButtonVariant::Secondary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Arrangement of the modal action buttons.
pub enum ButtonLayout {
    /// Side by side, cancel first.
    #[default]
    Horizontal,
    /// Stacked full-width, confirm first.
    Vertical,
}

impl ButtonLayout {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Parses a DOM token back into a layout.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One button in the modal action area.
pub enum ModalAction {
    /// Confirm button.
    Confirm,
    /// Cancel button.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What an overlay does with its focus/scroll/listener session after `open` changes.
pub enum OverlayTransition {
    /// Acquire the scroll lock, install the Escape listener, and move focus.
    Begin,
    /// Release everything the session holds.
    End,
    /// Leave the current session as is.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body copy.
    Body,
    /// Small secondary copy.
    Caption,
    /// Section heading.
    Title,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Brand accent text.
    Accent,
    /// Success tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
        }
    }
}

/// Whether a click on a control may reach its callback.
///
/// Disabled and loading controls swallow activation even if the native
/// `disabled` attribute was bypassed.
pub fn activation_allowed(disabled: bool, loading: bool) -> bool {
    !disabled && !loading
}

/// Whether an [`IconTextButton`] renders at all.
///
/// The tertiary variant only exists at the medium size.
pub fn icon_text_renders(variant: IconTextVariant, size: IconTextSize) -> bool {
    variant != IconTextVariant::Tertiary || size == IconTextSize::Medium
}

/// Accessible name for an [`IconTextButton`].
///
/// An explicit label always wins. Icon-only buttons fall back to their text
/// label since it is not rendered visibly.
pub fn icon_text_accessible_label(
    content: IconTextContent,
    label: &str,
    aria_label: Option<&str>,
) -> Option<String> {
    let explicit = aria_label.map(str::trim).filter(|value| !value.is_empty());
    match (explicit, content) {
        (Some(explicit), _) => Some(explicit.to_string()),
        (None, IconTextContent::IconOnly) => {
            let label = label.trim();
            (!label.is_empty()).then(|| label.to_string())
        }
        (None, _) => None,
    }
}

/// Resolves the tone a text input is drawn with.
///
/// Precedence: disabled, error, success, typing, then focus.
pub fn resolve_field_tone(disabled: bool, status: InputStatus, focused: bool) -> FieldTone {
    if disabled || status == InputStatus::Disabled {
        return FieldTone::Disabled;
    }
    match status {
        InputStatus::Error => FieldTone::Error,
        InputStatus::Success => FieldTone::Success,
        InputStatus::Typing => FieldTone::Typing,
        InputStatus::Focus => FieldTone::Focused,
        InputStatus::Default | InputStatus::Disabled if focused => FieldTone::Focused,
        InputStatus::Default | InputStatus::Disabled => FieldTone::Idle,
    }
}

/// Whether a text input shows its error message line.
pub fn should_show_error(status: InputStatus, message: Option<&str>) -> bool {
    status == InputStatus::Error && message.is_some_and(|message| !message.trim().is_empty())
}

/// Whether a document keydown should close an open overlay.
pub fn should_close_on_key(key: &str, close_on_escape: bool) -> bool {
    close_on_escape && key == "Escape"
}

/// Whether a click on the overlay backdrop should close it.
///
/// Clicks that bubble up from the dialog itself never count.
pub fn should_close_on_backdrop(target_is_backdrop: bool, close_on_backdrop_click: bool) -> bool {
    close_on_backdrop_click && target_is_backdrop
}

/// Session step for an overlay whose `open` flag is now `open`.
///
/// A closed overlay always ends its session, so nothing outlives the dialog.
pub fn overlay_transition(open: bool, has_session: bool) -> OverlayTransition {
    match (open, has_session) {
        (false, _) => OverlayTransition::End,
        (true, false) => OverlayTransition::Begin,
        (true, true) => OverlayTransition::Keep,
    }
}

/// Action buttons a modal renders, in DOM order.
pub fn modal_actions(
    layout: ButtonLayout,
    has_confirm: bool,
    has_cancel: bool,
    hide_actions: bool,
) -> Vec<ModalAction> {
    if hide_actions {
        return Vec::new();
    }
    let ordered = match layout {
        ButtonLayout::Vertical => [
            (ModalAction::Confirm, has_confirm),
            (ModalAction::Cancel, has_cancel),
        ],
        ButtonLayout::Horizontal => [
            (ModalAction::Cancel, has_cancel),
            (ModalAction::Confirm, has_confirm),
        ],
    };
    ordered
        .into_iter()
        .filter_map(|(action, present)| present.then_some(action))
        .collect()
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disabled_or_loading_controls_swallow_activation() {
        assert!(activation_allowed(false, false));
        assert!(!activation_allowed(true, false));
        assert!(!activation_allowed(false, true));
        assert!(!activation_allowed(true, true));
    }

    #[test]
    fn tertiary_icon_text_button_only_renders_at_medium() {
        assert!(icon_text_renders(IconTextVariant::Tertiary, IconTextSize::Medium));
        assert!(!icon_text_renders(IconTextVariant::Tertiary, IconTextSize::Small));
        assert!(!icon_text_renders(IconTextVariant::Tertiary, IconTextSize::Large));
        for size in IconTextSize::ALL {
            assert!(icon_text_renders(IconTextVariant::Primary, size));
            assert!(icon_text_renders(IconTextVariant::Secondary, size));
        }
    }

    #[test]
    fn icon_text_content_follows_size() {
        assert_eq!(IconTextContent::for_size(IconTextSize::Small), IconTextContent::IconOnly);
        assert_eq!(
            IconTextContent::for_size(IconTextSize::Medium),
            IconTextContent::IconAndLabel
        );
        assert_eq!(IconTextContent::for_size(IconTextSize::Large), IconTextContent::LabelOnly);
    }

    #[test]
    fn icon_only_label_falls_back_to_text_label() {
        assert_eq!(
            icon_text_accessible_label(IconTextContent::IconOnly, "Add item", None),
            Some("Add item".to_string())
        );
        assert_eq!(
            icon_text_accessible_label(IconTextContent::IconOnly, "Add item", Some("  ")),
            Some("Add item".to_string())
        );
        assert_eq!(
            icon_text_accessible_label(IconTextContent::IconOnly, "Add", Some("Add to cart")),
            Some("Add to cart".to_string())
        );
        assert_eq!(icon_text_accessible_label(IconTextContent::IconOnly, " ", None), None);
        assert_eq!(
            icon_text_accessible_label(IconTextContent::IconAndLabel, "Add item", None),
            None
        );
    }

    #[test]
    fn field_tone_precedence() {
        assert_eq!(
            resolve_field_tone(true, InputStatus::Error, true),
            FieldTone::Disabled
        );
        assert_eq!(
            resolve_field_tone(false, InputStatus::Disabled, false),
            FieldTone::Disabled
        );
        assert_eq!(resolve_field_tone(false, InputStatus::Error, true), FieldTone::Error);
        assert_eq!(
            resolve_field_tone(false, InputStatus::Success, true),
            FieldTone::Success
        );
        assert_eq!(resolve_field_tone(false, InputStatus::Typing, false), FieldTone::Typing);
        assert_eq!(resolve_field_tone(false, InputStatus::Focus, false), FieldTone::Focused);
        assert_eq!(
            resolve_field_tone(false, InputStatus::Default, true),
            FieldTone::Focused
        );
        assert_eq!(resolve_field_tone(false, InputStatus::Default, false), FieldTone::Idle);
    }

    #[test]
    fn error_line_requires_error_status_and_message() {
        assert!(should_show_error(InputStatus::Error, Some("Required")));
        assert!(!should_show_error(InputStatus::Error, Some("   ")));
        assert!(!should_show_error(InputStatus::Error, None));
        assert!(!should_show_error(InputStatus::Success, Some("Required")));
    }

    #[test]
    fn escape_closes_only_when_enabled() {
        assert!(should_close_on_key("Escape", true));
        assert!(!should_close_on_key("Escape", false));
        assert!(!should_close_on_key("Enter", true));
    }

    #[test]
    fn backdrop_closes_only_for_direct_hits_when_enabled() {
        assert!(should_close_on_backdrop(true, true));
        assert!(!should_close_on_backdrop(false, true));
        assert!(!should_close_on_backdrop(true, false));
    }

    #[test]
    fn closed_overlays_always_release_their_session() {
        assert_eq!(overlay_transition(false, true), OverlayTransition::End);
        assert_eq!(overlay_transition(false, false), OverlayTransition::End);
    }

    #[test]
    fn opening_starts_one_session() {
        assert_eq!(overlay_transition(true, false), OverlayTransition::Begin);
        assert_eq!(overlay_transition(true, true), OverlayTransition::Keep);
    }

    #[test]
    fn modal_action_order_depends_on_layout() {
        assert_eq!(
            modal_actions(ButtonLayout::Horizontal, true, true, false),
            vec![ModalAction::Cancel, ModalAction::Confirm]
        );
        assert_eq!(
            modal_actions(ButtonLayout::Vertical, true, true, false),
            vec![ModalAction::Confirm, ModalAction::Cancel]
        );
        assert_eq!(
            modal_actions(ButtonLayout::Vertical, false, true, false),
            vec![ModalAction::Cancel]
        );
        assert!(modal_actions(ButtonLayout::Horizontal, false, false, false).is_empty());
        assert!(modal_actions(ButtonLayout::Horizontal, true, true, true).is_empty());
    }

    #[test]
    fn only_danger_modals_use_a_danger_confirm_button() {
        for variant in ModalVariant::ALL {
            let expected = if variant == ModalVariant::Danger {
                ButtonVariant::Danger
            } else {
                ButtonVariant::Primary
            };
            assert_eq!(variant.confirm_button(), expected);
            assert_eq!(variant.cancel_button(), ButtonVariant::Secondary);
        }
    }

    #[test]
    fn tokens_parse_back() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_token(variant.token()), Some(variant));
        }
        for size in ModalSize::ALL {
            assert_eq!(ModalSize::from_token(size.token()), Some(size));
        }
        for status in InputStatus::ALL {
            assert_eq!(InputStatus::from_token(status.token()), Some(status));
        }
        assert_eq!(ButtonSize::from_token("xl"), None);
        assert_eq!(ButtonType::from_token("reset"), Some(ButtonType::Reset));
        assert_eq!(ButtonLayout::from_token("vertical"), Some(ButtonLayout::Vertical));
    }

    #[test]
    fn button_sizes_keep_touch_heights() {
        let heights: Vec<u16> = ButtonSize::ALL.into_iter().map(ButtonSize::height_px).collect();
        assert_eq!(heights, vec![36, 44, 48]);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn merge_layout_class_skips_empty_extras() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("flex-1")), "ui-button flex-1");
    }
}
