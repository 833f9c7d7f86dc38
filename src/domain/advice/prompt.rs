//! Prompt construction.
//!
//! The prompt is a pure function of the chosen items, today's interaction
//! and the time of day. Sampling variety comes from the provider seed, not
//! from the text.

use crate::domain::checkin::{descriptor_for, InteractionPayload};
use crate::domain::foundation::TimeOfDay;

const DESCRIPTOR_SEPARATOR: &str = "、";

/// Maps each tag to its descriptor, passing unknown tags through.
pub fn describe_items(items: &[String]) -> String {
    items
        .iter()
        .map(|tag| descriptor_for(tag).unwrap_or(tag.as_str()))
        .collect::<Vec<_>>()
        .join(DESCRIPTOR_SEPARATOR)
}

/// One line summarising the interaction, empty for unknown payloads.
pub fn interaction_context(interaction: &InteractionPayload) -> String {
    match interaction {
        InteractionPayload::Slider { value, .. } => {
            let label = interaction.slider_label().unwrap_or_default();
            format!("用户当前状态：{}{}%", label, value)
        }
        InteractionPayload::Choice { choice, .. } => format!("用户选择了：{}", choice),
        InteractionPayload::Senses { sense, choice } => {
            format!("用户感知偏好：{} - {}", sense, choice)
        }
        InteractionPayload::Unknown => String::new(),
    }
}

pub fn build_prompt(
    items: &[String],
    interaction: &InteractionPayload,
    time_of_day: TimeOfDay,
) -> String {
    format!(
        r#"你是一位专业的心理健康引导师。请根据以下信息，生成3条个性化的心理调适建议。

用户长期偏好（通过选择物品体现）：{descriptors}

{context}

当前时间：{time_of_day}

要求：
1. 输出必须是合法的JSON格式，包含三个字段：physical（身体层建议）、sensory（感官层建议）、awareness（意识层建议）
2. 建议要贴合用户的隐含情感需求，不要直接解释物品的象征意义
3. 语言要温柔、诗意、不评判，像一位沉默的管家在说话
4. 每条建议控制在50字以内
5. 避免使用"你应该"等指令性词汇

示例输出格式：
{{
  "physical": "摸摸左手的指尖，像第一次发现它那样。",
  "sensory": "空气里有没有一丝熟悉的味道，悄悄记住它。",
  "awareness": "此刻的呼吸，比昨天的更深了一点。"
}}"#,
        descriptors = describe_items(items),
        context = interaction_context(interaction),
        time_of_day = time_of_day,
    )
}
