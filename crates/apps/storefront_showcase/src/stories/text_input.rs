use leptos::*;
use storefront_ui::prelude::*;

use super::StoryArgs;

pub(super) const COMPONENT: &str = "text-input";
pub(super) const STORIES: &[&str] = &[
    "default",
    "typing",
    "with-icon",
    "with-label",
    "error",
    "success",
    "disabled",
];

pub(super) fn render(story: &str, args: &StoryArgs) -> Option<View> {
    if !STORIES.contains(&story) {
        return None;
    }

    let value = create_rw_signal(String::new());
    let record = args.action::<()>("on_input");
    let on_input = Callback::new(move |ev: ev::Event| {
        value.set(event_target_value(&ev));
        record.call(());
    });
    let label = args.text("label");
    let placeholder = args.text("placeholder");
    let status = args.choice("status", InputStatus::from_token);
    let error_message = args.text("error_message");
    let required = args.flag("required");
    let disabled = args.flag("disabled");

    let field = if args.flag("with_icon") {
        view! {
            <TextInput
                label=label
                placeholder=placeholder
                status=status
                error_message=error_message
                required=required
                disabled=disabled
                icon=IconName::User
                value=value
                on_input=on_input
            />
        }
        .into_view()
    } else {
        view! {
            <TextInput
                label=label
                placeholder=placeholder
                status=status
                error_message=error_message
                required=required
                disabled=disabled
                value=value
                on_input=on_input
            />
        }
        .into_view()
    };

    Some(view! { <div data-ui-slot="field-frame">{field}</div> }.into_view())
}
