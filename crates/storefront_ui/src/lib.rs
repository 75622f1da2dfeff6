//! Presentational UI primitives for the mobile storefront.
//!
//! The crate owns the storefront's Leptos controls (`Button`, `IconTextButton`,
//! `TextInput`, `Modal`), a small icon set, and the stable `data-ui-*` DOM
//! contract consumed by the storefront CSS layers. Every control is a function
//! of its props; the only side effects are the modal's focus, scroll-lock, and
//! Escape-key handling, all released when the overlay closes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod a11y;
mod dom;
mod icon;
mod primitives;

pub use a11y::{audit_icon_only_control, AccessibilityIssue};
pub use icon::{Icon, IconName, IconSize, Spinner};
pub use primitives::{
    activation_allowed, icon_text_accessible_label, icon_text_renders, modal_actions,
    overlay_transition, resolve_field_tone, should_close_on_backdrop, should_close_on_key,
    should_show_error, Badge, Button, ButtonLayout, ButtonSize, ButtonType, ButtonVariant,
    ButtonWidth, Cluster, FieldTone, Heading, IconTextButton, IconTextContent, IconTextSize,
    IconTextVariant, InputStatus, LayoutAlign, LayoutGap, LayoutJustify, Modal, ModalAction,
    ModalSize, ModalVariant, OverlayTransition, Panel, Stack, Text, TextInput, TextRole, TextTone,
};

/// Convenience imports for crates composing the storefront primitives.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonLayout, ButtonSize, ButtonType, ButtonVariant, ButtonWidth, Cluster,
        Heading, Icon, IconName, IconSize, IconTextButton, IconTextSize, IconTextVariant,
        InputStatus, LayoutAlign, LayoutGap, LayoutJustify, Modal, ModalSize, ModalVariant, Panel,
        Spinner, Stack, Text, TextInput, TextRole, TextTone,
    };
}
