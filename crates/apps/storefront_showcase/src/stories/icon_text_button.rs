use leptos::ev::MouseEvent;
use leptos::*;
use storefront_ui::icon_text_renders;
use storefront_ui::prelude::*;

use super::StoryArgs;

pub(super) const COMPONENT: &str = "icon-text-button";
pub(super) const STORIES: &[&str] = &[
    "primary",
    "secondary",
    "tertiary",
    "small",
    "large",
    "disabled",
];

pub(super) fn render(story: &str, args: &StoryArgs) -> Option<View> {
    if !STORIES.contains(&story) {
        return None;
    }

    let variant = args.choice("variant", IconTextVariant::from_token);
    let size = args.choice("size", IconTextSize::from_token);
    if !icon_text_renders(variant, size) {
        return Some(
            view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    "Tertiary 변형은 Medium 크기에서만 렌더링됩니다."
                </Text>
            }
            .into_view(),
        );
    }

    Some(
        view! {
            <IconTextButton
                variant=variant
                size=size
                label=args.text("label")
                disabled=args.flag("disabled")
                on_click={args.action::<MouseEvent>("on_click")}
            />
        }
        .into_view(),
    )
}
