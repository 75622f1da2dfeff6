//! Centralized stroke icon set and loading spinner.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to storefront controls and stories.
pub enum IconName {
    /// Plus sign for add actions.
    Plus,
    /// Right arrow for forward navigation.
    ArrowRight,
    /// Download tray.
    Download,
    /// Circled info mark.
    Info,
    /// Warning triangle.
    Warning,
    /// Circled check mark.
    CheckCircle,
    /// Dismiss cross.
    Close,
    /// Person silhouette.
    User,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::ArrowRight => "arrow-right",
            Self::Download => "download",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::CheckCircle => "check-circle",
            Self::Close => "close",
            Self::User => "user",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Plus => &["M12 5V19M5 12H19"],
            Self::ArrowRight => &["M5 12H19M19 12L12 5M19 12L12 19"],
            Self::Download => &["M21 15V19A2 2 0 0119 21H5A2 2 0 013 19V15M7 10L12 15L17 10M12 15V3"],
            Self::Info => &[
                "M22 12A10 10 0 1 1 2 12A10 10 0 1 1 22 12Z",
                "M12 16V12M12 8H12.01",
            ],
            Self::Warning => &[
                "M10.29 3.86L1.82 18A2 2 0 003.54 21H20.46A2 2 0 0022.18 18L13.71 3.86A2 2 0 0010.29 3.86Z",
                "M12 9V13M12 17H12.01",
            ],
            Self::CheckCircle => &[
                "M22 11.08V12A10 10 0 1112 2A10 10 0 0122 11.08Z",
                "M9 11L12 14L22 4",
            ],
            Self::Close => &["M18 6L6 18M6 6L18 18"],
            Self::User => &[
                "M20 21V19A4 4 0 0016 15H8A4 4 0 004 19V21",
                "M16 7A4 4 0 118 7A4 4 0 0116 7Z",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon sizes.
pub enum IconSize {
    /// 12px, used inside small buttons.
    Xs,
    /// 16px, the default inline size.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 24px, used for dialog glyphs.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> u8 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative stroke icon. Always hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let px = size.px();
    let paths = icon
        .paths()
        .iter()
        .map(|d| {
            view! {
                <path
                    d=*d
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                ></path>
            }
        })
        .collect_view();

    view! {
        <svg
            class="ui-icon"
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {paths}
        </svg>
    }
}

#[component]
/// Indeterminate loading spinner.
pub fn Spinner(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-spinner"
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-size=size.token()
        >
            <circle data-ui-slot="track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                data-ui-slot="arc"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}
