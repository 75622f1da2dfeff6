use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

fn next_field_id() -> String {
    format!(
        "storefront-text-input-{}",
        NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed)
    )
}

#[component]
/// Storefront button with variant, size, width, loading, and icon slots.
///
/// Clicks reach `on_click` only while the button is neither disabled nor
/// loading. While loading, a spinner replaces the leading icon and the
/// trailing icon is hidden. Set `icon_only` when the label is meant for
/// screen readers only; such buttons must also carry `aria_label`.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonWidth::Auto)] width: ButtonWidth,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] icon_only: bool,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    if icon_only {
        let label = aria_label.get_untracked();
        report_issue(audit_icon_only_control(
            "Button",
            leading_icon.or(trailing_icon).is_some(),
            Some(label.as_str()),
        ));
    }

    let icon_size = size.icon_size();

    view! {
        <button
            type=button_type.token()
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || non_empty(aria_label.get())
            aria-busy=move || loading.get().then_some("true")
            disabled=move || disabled.get() || loading.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-width=width.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-loading=move || bool_token(loading.get())
            on:click=move |ev| {
                if !activation_allowed(disabled.get_untracked(), loading.get_untracked()) {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                if loading.get() {
                    Some(view! { <Spinner size=icon_size /> }.into_view())
                } else {
                    leading_icon.map(|icon| {
                        view! {
                            <span data-ui-slot="leading-icon">
                                <Icon icon=icon size=icon_size />
                            </span>
                        }
                        .into_view()
                    })
                }
            }}
            <span
                data-ui-slot={if icon_only { "sr-only" } else { "label" }}
                data-ui-state=move || {
                    if loading.get() {
                        "loading"
                    } else {
                        "idle"
                    }
                }
            >
                {children()}
            </span>
            {move || {
                if loading.get() {
                    return None;
                }
                trailing_icon.map(|icon| {
                    view! {
                        <span data-ui-slot="trailing-icon">
                            <Icon icon=icon size=icon_size />
                        </span>
                    }
                })
            }}
        </button>
    }
}

#[component]
/// Compact add-style button that pairs a plus icon with a text label.
///
/// Small buttons show the icon only, medium buttons show icon and label, and
/// large buttons show the label only. The tertiary variant exists only at the
/// medium size; other combinations render nothing.
pub fn IconTextButton(
    #[prop(default = IconTextVariant::Primary)] variant: IconTextVariant,
    #[prop(default = IconTextSize::Medium)] size: IconTextSize,
    #[prop(into)] label: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    if !icon_text_renders(variant, size) {
        return ().into_view();
    }

    let content = IconTextContent::for_size(size);
    let accessible_label = icon_text_accessible_label(content, &label, aria_label.as_deref());
    if content == IconTextContent::IconOnly {
        report_issue(audit_icon_only_control(
            "IconTextButton",
            true,
            accessible_label.as_deref(),
        ));
    }

    let body = match content {
        IconTextContent::IconOnly => view! { <Icon icon=IconName::Plus /> }.into_view(),
        IconTextContent::IconAndLabel => view! {
            <Icon icon=IconName::Plus />
            <span data-ui-slot="label">{label}</span>
        }
        .into_view(),
        IconTextContent::LabelOnly => view! { <span data-ui-slot="label">{label}</span> }.into_view(),
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-text-button", layout_class)
            aria-label=accessible_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-text-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if disabled.get() {
                    "disabled"
                } else {
                    "enabled"
                }
            }
            on:click=move |ev| {
                if !activation_allowed(disabled.get_untracked(), false) {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {body}
        </button>
    }
    .into_view()
}

#[component]
/// Labeled single-line text field with status-driven styling.
///
/// The field tracks its own focus. Its tone comes from
/// [`resolve_field_tone`], and the error line is shown only for the error
/// status with a non-empty message.
pub fn TextInput(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] status: MaybeSignal<InputStatus>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let focused = create_rw_signal(false);
    let label = label.and_then(non_empty);
    let input_id = id.unwrap_or_else(next_field_id);
    let error_id = format!("{input_id}-error");
    let described_by = error_id.clone();
    let message = error_message.filter(|message| !message.trim().is_empty());
    let has_message = message.is_some();
    let is_disabled = move || disabled.get() || status.get() == InputStatus::Disabled;
    let tone = move || resolve_field_tone(disabled.get(), status.get(), focused.get());

    view! {
        <div
            class=merge_layout_class("ui-text-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-status=move || status.get().token()
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=input_id.clone()>
                        {label}
                        {required.then(|| view! {
                            <span data-ui-slot="required-mark" aria-hidden="true">"*"</span>
                        })}
                    </label>
                }
            })}
            <div
                data-ui-slot="control"
                data-ui-tone=move || tone().token()
                data-ui-disabled=move || bool_token(is_disabled())
            >
                {icon.map(|icon| view! {
                    <span data-ui-slot="icon">
                        <Icon icon=icon size=IconSize::Lg />
                    </span>
                })}
                <input
                    id=input_id.clone()
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    aria-label=aria_label
                    aria-required=required.then_some("true")
                    aria-invalid=move || (status.get() == InputStatus::Error).then_some("true")
                    aria-describedby=move || {
                        (has_message && status.get() == InputStatus::Error)
                            .then(|| described_by.clone())
                    }
                    prop:value=move || value.get()
                    disabled=is_disabled
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                    on:focus=move |ev| {
                        focused.set(true);
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        focused.set(false);
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    }
                />
            </div>
            {move || {
                let message = message.as_deref();
                should_show_error(status.get(), message).then(|| {
                    view! {
                        <p id=error_id.clone() data-ui-slot="error" role="alert">
                            {message.unwrap_or_default().to_string()}
                        </p>
                    }
                })
            }}
        </div>
    }
}
