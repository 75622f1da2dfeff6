use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::dom::{focus_first_focusable, OverlaySession, OverlaySlot};

#[derive(Clone)]
struct ModalCopy {
    title: Option<String>,
    confirm_text: String,
    cancel_text: String,
    aria_label: Option<String>,
    aria_described_by: Option<String>,
}

#[component]
/// Dialog overlay with header, body, and confirm/cancel actions.
///
/// Nothing renders while `open` is false. A blank `title` renders no heading.
/// While open, document scrolling is locked, the first focusable element in
/// the dialog receives focus, and an Escape listener is installed when
/// `close_on_escape` is set. All three are released as soon as the modal
/// closes or unmounts.
///
/// The confirm button calls `on_confirm` when given and `on_close` otherwise.
/// Cancel does the same with `on_cancel`. Each action button appears only
/// when its callback is supplied.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(default = "확인".to_string(), into)] confirm_text: String,
    #[prop(default = "취소".to_string(), into)] cancel_text: String,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = ModalVariant::Default)] variant: ModalVariant,
    #[prop(default = true)] close_on_backdrop_click: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(default = true)] show_close_button: bool,
    #[prop(optional)] hide_actions: bool,
    #[prop(default = ButtonLayout::Horizontal)] button_layout: ButtonLayout,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_described_by: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let copy = store_value(ModalCopy {
        title: title.and_then(non_empty),
        confirm_text,
        cancel_text,
        aria_label: aria_label.and_then(non_empty),
        aria_described_by: aria_described_by.and_then(non_empty),
    });
    let dialog_ref = create_node_ref::<html::Div>();
    let session: OverlaySlot = Rc::new(RefCell::new(None));

    let effect_session = Rc::clone(&session);
    create_effect(move |_| {
        let has_session = effect_session.borrow().is_some();
        match overlay_transition(open.get(), has_session) {
            OverlayTransition::End => {
                effect_session.borrow_mut().take();
            }
            OverlayTransition::Keep => {}
            OverlayTransition::Begin => {
                *effect_session.borrow_mut() =
                    Some(OverlaySession::begin(close_on_escape, on_close));
                request_animation_frame(move || {
                    if let Some(dialog) = dialog_ref.get_untracked() {
                        focus_first_focusable(&dialog);
                    }
                });
            }
        }
    });
    on_cleanup(move || {
        session.borrow_mut().take();
    });

    let confirm = Callback::new(move |_: ()| match on_confirm {
        Some(on_confirm) => on_confirm.call(()),
        None => on_close.call(()),
    });
    let cancel = Callback::new(move |_: ()| match on_cancel {
        Some(on_cancel) => on_cancel.call(()),
        None => on_close.call(()),
    });
    let actions = modal_actions(
        button_layout,
        on_confirm.is_some(),
        on_cancel.is_some(),
        hide_actions,
    );
    let action_width = match button_layout {
        ButtonLayout::Vertical => ButtonWidth::Full,
        ButtonLayout::Horizontal => ButtonWidth::Auto,
    };
    let action_class = match button_layout {
        ButtonLayout::Vertical => None,
        ButtonLayout::Horizontal => Some("flex-1"),
    };
    let actions = store_value(actions);
    let children = store_value(children);

    let render_dialog = move || {
        let ModalCopy {
            title,
            confirm_text,
            cancel_text,
            aria_label,
            aria_described_by,
        } = copy.get_value();
        let has_header = title.is_some() || show_close_button;
        let dialog_label = aria_label.or_else(|| title.clone());

        let header = has_header.then(|| {
            view! {
                <div data-ui-slot="header">
                    {title.map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                    {show_close_button.then(|| view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            ui_slot="close"
                            aria_label="모달 닫기"
                            leading_icon=IconName::Close
                            icon_only=true
                            on_click=Callback::new(move |_| on_close.call(()))
                        >
                            "모달 닫기"
                        </Button>
                    })}
                </div>
            }
        });

        let action_buttons = actions
            .get_value()
            .into_iter()
            .map(|action| match action {
                ModalAction::Confirm => {
                    let text = confirm_text.clone();
                    view! {
                        <Button
                            variant=variant.confirm_button()
                            width=action_width
                            layout_class=action_class.unwrap_or("")
                            ui_slot="confirm"
                            on_click=Callback::new(move |_| confirm.call(()))
                        >
                            {text}
                        </Button>
                    }
                    .into_view()
                }
                ModalAction::Cancel => {
                    let text = cancel_text.clone();
                    view! {
                        <Button
                            variant=variant.cancel_button()
                            width=action_width
                            layout_class=action_class.unwrap_or("")
                            ui_slot="cancel"
                            on_click=Callback::new(move |_| cancel.call(()))
                        >
                            {text}
                        </Button>
                    }
                    .into_view()
                }
            })
            .collect::<Vec<_>>();
        let has_actions = !action_buttons.is_empty();

        view! {
            <div
                class=merge_layout_class("ui-modal-layer", layout_class)
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-variant=variant.token()
                data-ui-size=size.token()
            >
                <div data-ui-slot="backdrop" aria-hidden="true"></div>
                <div
                    data-ui-slot="positioner"
                    on:click=move |ev: MouseEvent| {
                        let target_is_backdrop = ev.target() == ev.current_target();
                        if should_close_on_backdrop(target_is_backdrop, close_on_backdrop_click) {
                            on_close.call(());
                        }
                    }
                >
                    <div
                        node_ref=dialog_ref
                        data-ui-slot="dialog"
                        data-ui-size=size.token()
                        role="dialog"
                        aria-modal="true"
                        aria-label=dialog_label
                        aria-describedby=aria_described_by
                    >
                        {header}
                        <div
                            data-ui-slot="body"
                            data-ui-header=bool_token(has_header)
                        >
                            {children.with_value(|children| children())}
                        </div>
                        {has_actions.then(|| view! {
                            <div data-ui-slot="actions" data-ui-layout=button_layout.token()>
                                {action_buttons}
                            </div>
                        })}
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            {render_dialog}
        </Show>
    }
}
