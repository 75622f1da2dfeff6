use leptos::ev::MouseEvent;
use leptos::*;
use storefront_ui::prelude::*;

use super::StoryArgs;

pub(super) const COMPONENT: &str = "button";
pub(super) const STORIES: &[&str] = &[
    "primary",
    "secondary",
    "ghost",
    "outline",
    "danger",
    "sizes",
    "states",
    "with-icons",
    "all-variants",
];

pub(super) fn render(story: &str, args: &StoryArgs) -> Option<View> {
    let rendered = match story {
        "primary" | "secondary" | "ghost" | "outline" | "danger" => controlled(args),
        "sizes" => sizes(),
        "states" => states(),
        "with-icons" => with_icons(args),
        "all-variants" => all_variants(),
        _ => return None,
    };
    Some(rendered)
}

fn controlled(args: &StoryArgs) -> View {
    let label = args.text("label");
    view! {
        <Button
            variant=args.choice("variant", ButtonVariant::from_token)
            size=args.choice("size", ButtonSize::from_token)
            width=args.choice("width", ButtonWidth::from_token)
            button_type=args.choice("button_type", ButtonType::from_token)
            disabled=args.flag("disabled")
            loading=args.flag("loading")
            on_click={args.action::<MouseEvent>("on_click")}
        >
            {label}
        </Button>
    }
    .into_view()
}

fn sizes() -> View {
    let rows = ButtonSize::ALL
        .into_iter()
        .map(|size| {
            let (name, note) = match size {
                ButtonSize::Sm => ("Small", ""),
                ButtonSize::Md => ("Medium", " - 권장"),
                ButtonSize::Lg => ("Large", ""),
            };
            view! {
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                    <Text role=TextRole::Caption>
                        {format!("{name} ({}px){note}", size.height_px())}
                    </Text>
                    <Button size=size>{format!("{name} Button")}</Button>
                </Stack>
            }
        })
        .collect_view();

    view! { <Stack gap=LayoutGap::Md align=LayoutAlign::Start>{rows}</Stack> }.into_view()
}

fn states() -> View {
    view! {
        <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"기본 상태"</Text>
                <Button>"확인"</Button>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"비활성화"</Text>
                <Button disabled=true>"확인"</Button>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"로딩 중"</Text>
                <Button loading=true>"처리중..."</Button>
            </Stack>
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Caption>"전체 너비"</Text>
                <Button width=ButtonWidth::Full>"전체 너비 버튼"</Button>
            </Stack>
        </Stack>
    }
    .into_view()
}

fn with_icons(args: &StoryArgs) -> View {
    let on_click = args.action::<MouseEvent>("on_click");
    view! {
        <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"왼쪽 아이콘"</Text>
                <Button leading_icon=IconName::Plus on_click=on_click>"추가하기"</Button>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"오른쪽 아이콘"</Text>
                <Button
                    variant=ButtonVariant::Outline
                    trailing_icon=IconName::ArrowRight
                    on_click=on_click
                >
                    "다음 단계"
                </Button>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Text role=TextRole::Caption>"아이콘만"</Text>
                <Button
                    variant=ButtonVariant::Ghost
                    leading_icon=IconName::Download
                    icon_only=true
                    aria_label="다운로드"
                    on_click=on_click
                >
                    "다운로드"
                </Button>
            </Stack>
        </Stack>
    }
    .into_view()
}

fn all_variants() -> View {
    let row = |disabled: bool| {
        ButtonVariant::ALL
            .into_iter()
            .map(|variant| {
                let name = match variant {
                    ButtonVariant::Primary => "Primary",
                    ButtonVariant::Secondary => "Secondary",
                    ButtonVariant::Ghost => "Ghost",
                    ButtonVariant::Outline => "Outline",
                    ButtonVariant::Danger => "Danger",
                };
                view! { <Button variant=variant disabled=disabled>{name}</Button> }
            })
            .collect_view()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Stack gap=LayoutGap::Sm>
                <Heading>"기본 상태"</Heading>
                <Cluster gap=LayoutGap::Sm>{row(false)}</Cluster>
            </Stack>
            <Stack gap=LayoutGap::Sm>
                <Heading>"비활성화 상태"</Heading>
                <Cluster gap=LayoutGap::Sm>{row(true)}</Cluster>
            </Stack>
        </Stack>
    }
    .into_view()
}
