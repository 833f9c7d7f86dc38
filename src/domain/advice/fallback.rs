//! Canned advice used whenever generation fails.

use super::Advice;

const FALLBACK_POOL: [(&str, &str, &str); 3] = [
    (
        "转转肩膀，让骨头自己找到舒服的角度。",
        "听一听环境里最微弱的声音，它在说什么。",
        "这个瞬间，和宇宙的其他角落一样珍贵。",
    ),
    (
        "闭眼三秒，睁眼时像第一次看见这个空间。",
        "指尖划过桌面，感受那些看不见的纹理。",
        "情绪像云，来了也会走，天空始终在那里。",
    ),
    (
        "深呼吸，让空气抵达平时忽略的身体角落。",
        "有没有一束光，悄悄落在某个物体上？",
        "此刻的你，值得被温柔对待。",
    ),
];

pub fn fallback_pool() -> Vec<Advice> {
    FALLBACK_POOL
        .iter()
        .map(|(physical, sensory, awareness)| Advice::new(*physical, *sensory, *awareness))
        .collect()
}

/// Picks one pool entry; `pick(n)` returns an index in `0..n`.
///
/// Out-of-range picks wrap instead of panicking.
pub fn pick_fallback(pick: impl FnOnce(usize) -> usize) -> Advice {
    let index = pick(FALLBACK_POOL.len()) % FALLBACK_POOL.len();
    let (physical, sensory, awareness) = FALLBACK_POOL[index];
    Advice::new(physical, sensory, awareness)
}
