//! Onboarding item catalog.
//!
//! Each item is a symbol the user picks once; its descriptor is the
//! emotional need the prompt builder reads into that choice.

use serde::Serialize;

/// Number of items a user confirms during onboarding.
pub const REQUIRED_ITEM_COUNT: usize = 3;

/// A selectable onboarding item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub descriptor: &'static str,
}

pub const ONBOARDING_ITEMS: [OnboardingItem; 6] = [
    OnboardingItem {
        id: "lantern",
        name: "小油灯",
        description: "渴望指引",
        descriptor: "安全感/指引",
    },
    OnboardingItem {
        id: "radio",
        name: "老式收音机",
        description: "怀旧声音",
        descriptor: "怀旧/声音敏感",
    },
    OnboardingItem {
        id: "pillow",
        name: "柔软枕头",
        description: "极度疲惫",
        descriptor: "疲惫/渴望包围",
    },
    OnboardingItem {
        id: "telescope",
        name: "望远镜",
        description: "探索欲",
        descriptor: "好奇/探索欲",
    },
    OnboardingItem {
        id: "flower",
        name: "小花盆",
        description: "生命力",
        descriptor: "生命力/自然感知",
    },
    OnboardingItem {
        id: "journal",
        name: "手账本",
        description: "秩序感",
        descriptor: "秩序感/反思",
    },
];

pub fn find_item(tag: &str) -> Option<&'static OnboardingItem> {
    ONBOARDING_ITEMS.iter().find(|item| item.id == tag)
}

/// Descriptor for a known tag, `None` for anything else.
pub fn descriptor_for(tag: &str) -> Option<&'static str> {
    find_item(tag).map(|item| item.descriptor)
}
