use leptos::*;
use storefront_ui::prelude::*;

use super::StoryArgs;

pub(super) const COMPONENT: &str = "modal";
pub(super) const STORIES: &[&str] = &[
    "default",
    "confirmation",
    "success",
    "warning",
    "sizes",
    "vertical-buttons",
    "vertical-danger",
    "button-layouts",
    "real-world-examples",
    "complex-content",
    "interactive",
];

const REPORT_REASONS: [&str; 5] = [
    "허위 정보",
    "사기 의심",
    "부적절한 이미지",
    "금지된 상품",
    "기타",
];

#[derive(Debug, Clone, PartialEq)]
struct ModalSettings {
    title: String,
    size: ModalSize,
    variant: ModalVariant,
    close_on_backdrop_click: bool,
    close_on_escape: bool,
    show_close_button: bool,
    hide_actions: bool,
    confirm_text: String,
    cancel_text: String,
    button_layout: ButtonLayout,
}

impl ModalSettings {
    fn preset(title: &str, confirm_text: &str, cancel_text: &str) -> Self {
        Self {
            title: title.to_string(),
            size: ModalSize::Md,
            variant: ModalVariant::Default,
            close_on_backdrop_click: true,
            close_on_escape: true,
            show_close_button: true,
            hide_actions: false,
            confirm_text: confirm_text.to_string(),
            cancel_text: cancel_text.to_string(),
            button_layout: ButtonLayout::Horizontal,
        }
    }

    fn from_args(args: &StoryArgs) -> Self {
        Self {
            title: args.text("title"),
            size: args.choice("size", ModalSize::from_token),
            variant: args.choice("variant", ModalVariant::from_token),
            close_on_backdrop_click: args.flag("close_on_backdrop_click"),
            close_on_escape: args.flag("close_on_escape"),
            show_close_button: args.flag("show_close_button"),
            hide_actions: args.flag("hide_actions"),
            confirm_text: args.text("confirm_text"),
            cancel_text: args.text("cancel_text"),
            button_layout: args.choice("button_layout", ButtonLayout::from_token),
        }
    }

    fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    fn variant(mut self, variant: ModalVariant) -> Self {
        self.variant = variant;
        self
    }

    fn layout(mut self, button_layout: ButtonLayout) -> Self {
        self.button_layout = button_layout;
        self
    }
}

#[component]
/// Trigger button plus the modal it opens. Confirm and cancel record an
/// action under their log names and close the dialog.
fn ModalDemo(
    settings: ModalSettings,
    on_action: Callback<String>,
    #[prop(default = "모달 열기")] trigger_label: &'static str,
    #[prop(default = "on_confirm")] confirm_log: &'static str,
    #[prop(default = "on_cancel")] cancel_log: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let ModalSettings {
        title,
        size,
        variant,
        close_on_backdrop_click,
        close_on_escape,
        show_close_button,
        hide_actions,
        confirm_text,
        cancel_text,
        button_layout,
    } = settings;
    let close = Callback::new(move |_: ()| open.set(false));
    let confirm = Callback::new(move |_: ()| {
        on_action.call(confirm_log.to_string());
        open.set(false);
    });
    let cancel = Callback::new(move |_: ()| {
        on_action.call(cancel_log.to_string());
        open.set(false);
    });

    view! {
        <Button on_click=Callback::new(move |_| open.set(true))>{trigger_label}</Button>
        <Modal
            open=open
            on_close=close
            title=title
            size=size
            variant=variant
            close_on_backdrop_click=close_on_backdrop_click
            close_on_escape=close_on_escape
            show_close_button=show_close_button
            hide_actions=hide_actions
            confirm_text=confirm_text
            cancel_text=cancel_text
            button_layout=button_layout
            on_confirm=confirm
            on_cancel=cancel
        >
            {children()}
        </Modal>
    }
}

pub(super) fn render(story: &str, args: &StoryArgs) -> Option<View> {
    let on_action = args.recorder();
    let rendered = match story {
        "default" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <Text>"이것은 기본 모달입니다. 간단한 메시지나 알림을 표시할 때 사용합니다."</Text>
            </ModalDemo>
        }
        .into_view(),
        "confirmation" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <IconMessage
                    icon=IconName::Info
                    tone="accent"
                    headline="정말로 삭제하시겠습니까?"
                    detail="삭제된 데이터는 복구할 수 없습니다. 신중하게 결정해 주세요."
                />
            </ModalDemo>
        }
        .into_view(),
        "success" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                    <span data-ui-slot="status-glyph" data-ui-tone="success">
                        <Icon icon=IconName::CheckCircle size=IconSize::Lg />
                    </span>
                    <Text>"입찰이 성공적으로 완료되었습니다!"</Text>
                    <Text role=TextRole::Caption>"경매 결과는 이메일로 알려드리겠습니다."</Text>
                </Stack>
            </ModalDemo>
        }
        .into_view(),
        "warning" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <IconMessage
                    icon=IconName::Warning
                    tone="warning"
                    headline="시간이 3분 남았습니다!"
                    detail="경매가 곧 마감됩니다. 지금 입찰하지 않으면 기회를 놓칠 수 있습니다."
                />
            </ModalDemo>
        }
        .into_view(),
        "sizes" => sizes(on_action),
        "vertical-buttons" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <Text>
                    "시조님의 상점을 즐겨찾기하면 쿠폰을 드려요! 지금 즐겨찾기하고 쿠폰을 받으시겠어요?"
                </Text>
            </ModalDemo>
        }
        .into_view(),
        "vertical-danger" => view! {
            <ModalDemo settings=ModalSettings::from_args(args) on_action=on_action>
                <IconMessage
                    icon=IconName::Warning
                    tone="danger"
                    headline="정말로 계정을 삭제하시겠습니까?"
                    detail="이 작업은 되돌릴 수 없으며, 모든 데이터가 영구적으로 삭제됩니다."
                />
            </ModalDemo>
        }
        .into_view(),
        "button-layouts" => button_layouts(on_action),
        "real-world-examples" => real_world_examples(on_action),
        "complex-content" => complex_content(on_action),
        "interactive" => interactive(ModalSettings::from_args(args), on_action),
        _ => return None,
    };
    Some(rendered)
}

#[component]
fn IconMessage(
    icon: IconName,
    tone: &'static str,
    headline: &'static str,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Md align=LayoutAlign::Start>
            <span data-ui-slot="status-glyph" data-ui-tone=tone>
                <Icon icon=icon size=IconSize::Lg />
            </span>
            <Stack gap=LayoutGap::Sm>
                <Text>{headline}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{detail}</Text>
            </Stack>
        </Cluster>
    }
}

fn sizes(on_action: Callback<String>) -> View {
    let grid = [
        (ModalSize::Sm, "Small Modal", "작은 크기의 모달입니다."),
        (ModalSize::Md, "Medium Modal", "중간 크기의 모달입니다."),
        (ModalSize::Lg, "Large Modal", "큰 크기의 모달입니다."),
        (ModalSize::Xl, "Extra Large Modal", "매우 큰 크기의 모달입니다."),
    ]
    .into_iter()
    .map(|(size, title, body)| {
        view! {
            <ModalDemo
                settings=ModalSettings::preset(title, "확인", "취소").size(size)
                on_action=on_action
                trigger_label=title
            >
                <Text>{body}</Text>
            </ModalDemo>
        }
    })
    .collect_view();

    view! {
        <Stack gap=LayoutGap::Md>
            <Cluster gap=LayoutGap::Md>{grid}</Cluster>
            <ModalDemo
                settings=ModalSettings::preset("Full Screen Modal", "확인", "취소")
                    .size(ModalSize::Full)
                on_action=on_action
                trigger_label="Full Screen Modal"
            >
                <Stack gap=LayoutGap::Md>
                    <Text>"전체 화면 모달입니다."</Text>
                    <Text role=TextRole::Caption>
                        "모바일에서 복잡한 폼이나 많은 콘텐츠를 표시할 때 유용합니다."
                    </Text>
                </Stack>
            </ModalDemo>
        </Stack>
    }
    .into_view()
}

fn button_layouts(on_action: Callback<String>) -> View {
    view! {
        <Stack gap=LayoutGap::Md>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"가로 레이아웃 (기본)"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("가로 버튼 레이아웃", "확인", "취소")
                    on_action=on_action
                >
                    <Text>"버튼이 나란히 배치됩니다."</Text>
                </ModalDemo>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"세로 레이아웃"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("세로 버튼 레이아웃", "확인", "취소")
                        .layout(ButtonLayout::Vertical)
                    on_action=on_action
                >
                    <Text>"버튼이 세로로 배치되어 주요 액션이 강조됩니다."</Text>
                </ModalDemo>
            </Stack>
        </Stack>
    }
    .into_view()
}

fn real_world_examples(on_action: Callback<String>) -> View {
    view! {
        <Stack gap=LayoutGap::Lg>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"로그아웃 확인"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("로그아웃", "로그아웃", "취소")
                    on_action=on_action
                    confirm_log="로그아웃"
                    cancel_log="로그아웃 취소"
                >
                    <Text>"정말로 로그아웃 하시겠습니까?"</Text>
                </ModalDemo>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"입찰 확인"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("입찰 확인", "입찰하기", "취소")
                    on_action=on_action
                    confirm_log="입찰 진행"
                    cancel_log="입찰 취소"
                >
                    <Stack gap=LayoutGap::Sm>
                        <Panel ui_slot="bid-summary">
                            <Text role=TextRole::Caption tone=TextTone::Secondary>"입찰 금액"</Text>
                            <Heading tone=TextTone::Accent>"50,000원"</Heading>
                        </Panel>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "입찰 후에는 취소할 수 없습니다."
                        </Text>
                    </Stack>
                </ModalDemo>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"계정 삭제"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("계정 삭제", "영구 삭제", "취소")
                        .variant(ModalVariant::Danger)
                    on_action=on_action
                    confirm_log="계정 삭제"
                    cancel_log="삭제 취소"
                >
                    <IconMessage
                        icon=IconName::Warning
                        tone="danger"
                        headline="계정을 영구적으로 삭제하시겠습니까?"
                        detail="이 작업은 되돌릴 수 없으며, 모든 데이터가 완전히 삭제됩니다."
                    />
                </ModalDemo>
            </Stack>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Start>
                <Heading>"위치 권한 요청"</Heading>
                <ModalDemo
                    settings=ModalSettings::preset("위치 권한이 필요합니다", "권한 허용", "나중에")
                    on_action=on_action
                    confirm_log="위치 권한 허용"
                    cancel_log="권한 거부"
                >
                    <Cluster gap=LayoutGap::Md align=LayoutAlign::Start>
                        <Icon icon=IconName::Info size=IconSize::Lg />
                        <Stack gap=LayoutGap::Sm>
                            <Text>"주변 경매 정보를 제공하기 위해 위치 권한이 필요합니다."</Text>
                            <ul data-ui-slot="benefits">
                                <li>"내 주변 경매 찾기"</li>
                                <li>"거리 기반 배송비 계산"</li>
                                <li>"지역별 인기 상품 추천"</li>
                            </ul>
                        </Stack>
                    </Cluster>
                </ModalDemo>
            </Stack>
        </Stack>
    }
    .into_view()
}

fn complex_content(on_action: Callback<String>) -> View {
    view! {
        <ModalDemo
            settings=ModalSettings::preset("상품 신고하기", "신고하기", "취소").size(ModalSize::Lg)
            on_action=on_action
            confirm_log="신고 접수"
            cancel_log="신고 취소"
        >
            <Stack gap=LayoutGap::Md>
                <fieldset data-ui-slot="report-reasons">
                    <legend>"신고 사유를 선택해주세요"</legend>
                    {REPORT_REASONS
                        .iter()
                        .map(|reason| {
                            view! {
                                <label data-ui-slot="choice">
                                    <input type="radio" name="report-reason" value=*reason />
                                    <span>{*reason}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <label data-ui-slot="detail">
                    <span>"상세 내용 (선택사항)"</span>
                    <textarea rows="3" placeholder="신고 사유에 대해 자세히 설명해주세요."></textarea>
                </label>
                <Panel ui_slot="notice">
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "신고해주신 내용은 검토 후 24시간 내에 처리됩니다."
                    </Text>
                </Panel>
            </Stack>
        </ModalDemo>
    }
    .into_view()
}

fn interactive(settings: ModalSettings, recorder: Callback<String>) -> View {
    let result = create_rw_signal(None::<&'static str>);
    let on_action = Callback::new(move |name: String| {
        result.set(Some(match name.as_str() {
            "on_confirm" => "확인 버튼이 클릭되었습니다!",
            _ => "취소 버튼이 클릭되었습니다!",
        }));
        recorder.call(name);
    });

    view! {
        <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
            <ModalDemo settings=settings on_action=on_action>
                <Text>"버튼을 클릭하여 모달의 동작을 테스트해보세요."</Text>
            </ModalDemo>
            {move || {
                result
                    .get()
                    .map(|message| {
                        view! {
                            <Panel ui_slot="result">
                                <Text tone=TextTone::Accent>{format!("결과: {message}")}</Text>
                            </Panel>
                        }
                    })
            }}
        </Stack>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{builtin_catalog, ArgValue};

    #[test]
    fn settings_follow_story_presets_from_the_catalog() {
        let runtime = create_runtime();
        let catalog = builtin_catalog().expect("catalog");
        let story = catalog.find("modal--vertical-danger").expect("story");
        let args = StoryArgs::new(story.initial_args(), Callback::new(|_: String| {}));

        let settings = ModalSettings::from_args(&args);
        assert_eq!(settings.title, "계정 삭제");
        assert_eq!(settings.variant, ModalVariant::Danger);
        assert_eq!(settings.button_layout, ButtonLayout::Vertical);
        assert_eq!(settings.size, ModalSize::Md);
        assert!(settings.close_on_backdrop_click);
        assert!(settings.close_on_escape);
        assert!(settings.show_close_button);
        assert!(!settings.hide_actions);
        assert_eq!(settings.confirm_text, "계정 영구 삭제");
        assert_eq!(settings.cancel_text, "취소");
        runtime.dispose();
    }

    #[test]
    fn settings_fall_back_to_defaults_for_unknown_tokens() {
        let runtime = create_runtime();
        let mut values = BTreeMap::new();
        values.insert("size".to_string(), ArgValue::Text("huge".to_string()));
        values.insert("variant".to_string(), ArgValue::Bool(true));
        let args = StoryArgs::new(values, Callback::new(|_: String| {}));

        let settings = ModalSettings::from_args(&args);
        assert_eq!(settings.size, ModalSize::Md);
        assert_eq!(settings.variant, ModalVariant::Default);
        runtime.dispose();
    }

    #[test]
    fn preset_builders_override_single_fields() {
        let settings = ModalSettings::preset("계정 삭제", "영구 삭제", "취소")
            .variant(ModalVariant::Danger)
            .size(ModalSize::Full)
            .layout(ButtonLayout::Vertical);
        assert_eq!(
            settings,
            ModalSettings {
                title: "계정 삭제".to_string(),
                size: ModalSize::Full,
                variant: ModalVariant::Danger,
                close_on_backdrop_click: true,
                close_on_escape: true,
                show_close_button: true,
                hide_actions: false,
                confirm_text: "영구 삭제".to_string(),
                cancel_text: "취소".to_string(),
                button_layout: ButtonLayout::Vertical,
            }
        );
    }
}
