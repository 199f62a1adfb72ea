//! Static report content and its load-time validation.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub title: &'static str,
    pub description: &'static str,
    pub sub_description: Option<&'static str>,
    pub images: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub sub_description: Option<&'static str>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("section at position {0} has an empty id")]
    BlankId(usize),
    #[error("section id `{0}` is used more than once")]
    DuplicateId(&'static str),
    #[error("section `{0}` has no items")]
    NoItems(&'static str),
    #[error("item {item} of section `{section}` has no images")]
    NoImages { section: &'static str, item: usize },
}

/// Checks the invariants the scroll engine relies on: unique ids, at least
/// one item per section and at least one image per item.
pub fn validate(sections: Vec<Section>) -> Result<Vec<Section>, ContentError> {
    let mut seen = HashSet::new();
    for (position, section) in sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            return Err(ContentError::BlankId(position));
        }
        if !seen.insert(section.id) {
            return Err(ContentError::DuplicateId(section.id));
        }
        if section.items.is_empty() {
            return Err(ContentError::NoItems(section.id));
        }
        if let Some(item) = section.items.iter().position(|item| item.images.is_empty()) {
            return Err(ContentError::NoImages { section: section.id, item });
        }
    }
    Ok(sections)
}

pub fn load_report() -> Result<Vec<Section>, ContentError> {
    validate(report_sections())
}

const IMG_DASHBOARD: &str =
    "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=800";
const IMG_ANALYTICS: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800";
const IMG_PHONE: &str =
    "https://images.unsplash.com/photo-1512428559083-a4369020473a?auto=format&fit=crop&q=80&w=800";
const IMG_DESK: &str =
    "https://images.unsplash.com/photo-1454165833767-0266b196773f?auto=format&fit=crop&q=80&w=800";
const IMG_PAYMENT: &str =
    "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&q=80&w=800";
const IMG_CHAT: &str =
    "https://images.unsplash.com/photo-1531482615713-2afd69097998?auto=format&fit=crop&q=80&w=800";

pub fn report_sections() -> Vec<Section> {
    vec![
        Section {
            id: "uxui",
            title: "편리함 넘어 더 새롭고\n쾌적한 보험 경험",
            description: "복잡한 보험 가입 단계를 직관적으로 재구성하여, 누구나 쉽고 빠르게 가입할 수 있는 환경을 구축했습니다.",
            sub_description: Some("단순한 화면 개편을 넘어 사용자의 행동 패턴을 분석하여 최적화된 동선을 제공합니다."),
            items: vec![
                Item {
                    title: "편리함 넘어 더 새롭고\n쾌적한 보험 경험",
                    description: "복잡한 보험 가입 단계를 직관적으로 재구성하여, 누구나 쉽고 빠르게 가입할 수 있는 환경을 구축했습니다.",
                    sub_description: Some("단순한 화면 개편을 넘어 사용자의 행동 패턴을 분석하여 최적화된 동선을 제공합니다."),
                    images: vec![IMG_DASHBOARD, IMG_ANALYTICS],
                },
                Item {
                    title: "클릭 몇 번으로\n나에게 맞는 보험",
                    description: "가입 단계마다 꼭 필요한 정보만 묻도록 흐름을 다시 설계했습니다.",
                    sub_description: Some("이제 클릭 몇 번으로 나에게 맞는 보험을 확인하세요."),
                    images: vec![IMG_ANALYTICS, IMG_DASHBOARD],
                },
            ],
        },
        Section {
            id: "folder",
            title: "관심 상품을 한눈에,\n나만의 보험 대시보드",
            description: "여러 개의 보험 상품을 카테고리별로 분류하여 복잡한 보장 내용을 명확하게 정리해 드립니다.",
            sub_description: Some("관심 상품 비교부터 가입 현황까지, 파편화된 정보를 한곳에 모아 관리할 수 있는 개인화 폴더 기능을 도입했습니다."),
            items: vec![
                Item {
                    title: "관심 상품을 한눈에,\n나만의 보험 대시보드",
                    description: "여러 개의 보험 상품을 카테고리별로 분류하여 복잡한 보장 내용을 명확하게 정리해 드립니다.",
                    sub_description: None,
                    images: vec![IMG_PHONE, IMG_DESK],
                },
                Item {
                    title: "파편화된 정보를\n한곳에 모아",
                    description: "관심 상품 비교부터 가입 현황까지 하나의 폴더에서 관리합니다.",
                    sub_description: Some("관심 상품 비교부터 가입 현황까지, 파편화된 정보를 한곳에 모아 관리할 수 있는 개인화 폴더 기능을 도입했습니다."),
                    images: vec![IMG_PHONE, IMG_DESK, IMG_PAYMENT],
                },
                Item {
                    title: "가입 현황까지\n끊김 없이",
                    description: "결제와 가입 현황 확인을 한 화면 흐름으로 연결했습니다.",
                    sub_description: None,
                    images: vec![IMG_PAYMENT],
                },
            ],
        },
        Section {
            id: "smart",
            title: "실시간 상담과\n스마트한 보장 분석",
            description: "AI 기반의 챗봇이 24시간 대기하며 궁금한 보험 용어나 가입 조건을 설명해 드립니다.",
            sub_description: Some("보낸 메시지를 수정하거나 삭제하는 것처럼, 내 보장 분석 결과를 실시간으로 조정하며 시뮬레이션해 볼 수 있습니다."),
            items: vec![Item {
                title: "실시간 상담과\n스마트한 보장 분석",
                description: "AI 기반의 챗봇이 24시간 대기하며 궁금한 보험 용어나 가입 조건을 설명해 드립니다.",
                sub_description: Some("보낸 메시지를 수정하거나 삭제하는 것처럼, 내 보장 분석 결과를 실시간으로 조정하며 시뮬레이션해 볼 수 있습니다."),
                images: vec![IMG_CHAT],
            }],
        },
    ]
}

/// Plain-text digest of the report, used as context for the summary service.
pub fn report_context(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let mut text = format!("{}: {}", section.title.replace('\n', " "), section.description);
            if let Some(sub) = section.sub_description {
                text.push(' ');
                text.push_str(sub);
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(images: Vec<&'static str>) -> Item {
        Item { title: "t", description: "d", sub_description: None, images }
    }

    fn section(id: &'static str, items: Vec<Item>) -> Section {
        Section { id, title: "t", description: "d", sub_description: None, items }
    }

    #[test]
    fn bundled_report_is_valid() {
        let sections = load_report().expect("bundled content must validate");
        let counts: Vec<usize> = sections.iter().map(|s| s.items.len()).collect();
        assert_eq!(counts, vec![2, 3, 1]);
    }

    #[test]
    fn item_without_images_is_rejected() {
        let sections = vec![section("a", vec![item(vec!["x"]), item(vec![])])];
        assert_eq!(
            validate(sections),
            Err(ContentError::NoImages { section: "a", item: 1 })
        );
    }

    #[test]
    fn section_without_items_is_rejected() {
        let sections = vec![section("empty", vec![])];
        assert_eq!(validate(sections), Err(ContentError::NoItems("empty")));
    }

    #[test]
    fn duplicate_and_blank_ids_are_rejected() {
        let dup = vec![section("a", vec![item(vec!["x"])]), section("a", vec![item(vec!["y"])])];
        assert_eq!(validate(dup), Err(ContentError::DuplicateId("a")));

        let blank = vec![section("a", vec![item(vec!["x"])]), section(" ", vec![item(vec!["y"])])];
        assert_eq!(validate(blank), Err(ContentError::BlankId(1)));
    }

    #[test]
    fn context_flattens_titles() {
        let sections = vec![Section {
            id: "a",
            title: "line one\nline two",
            description: "desc",
            sub_description: Some("more"),
            items: vec![item(vec!["x"])],
        }];
        assert_eq!(report_context(&sections), "line one line two: desc more");
    }
}
