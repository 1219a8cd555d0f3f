//! Built-in word lists for text analysis.
//!
//! Positive and negative sentiment words, stop words, and the segmentation
//! vocabulary used to split runs of CJK ideographs into words. All entries are
//! lowercase; CJK entries double as segmentation vocabulary.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that contribute +1 to the sentiment tally.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "好", "棒", "优秀", "喜欢", "满意", "good", "great", "excellent", "love", "amazing",
    ]
    .into_iter()
    .collect()
});

/// Words that contribute -1 to the sentiment tally.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "坏",
        "差",
        "糟糕",
        "讨厌",
        "失望",
        "bad",
        "terrible",
        "awful",
        "hate",
        "disappointed",
    ]
    .into_iter()
    .collect()
});

/// Function words excluded from keyword ranking.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "的", "了", "在", "是", "我", "你", "他", "她", "它", "the", "a", "an", "and", "or",
        "but", "in", "on", "at", "to", "for", "of", "with", "by",
    ]
    .into_iter()
    .collect()
});

/// Multi-character CJK words recognized by the segmenter.
///
/// Sentiment and stop words are added to this set when a lexicon is built.
/// Entries must not fuse a sentiment word with its neighbours (no "很好").
pub static SEGMENT_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "这个", "那个", "一个", "另一个", "这些", "那些", "我们", "你们", "他们", "她们",
        "什么", "没有", "可以", "因为", "所以", "但是", "如果", "已经", "时候", "今天",
        "明天", "昨天", "天气", "产品", "质量", "价格", "服务", "态度", "公司", "用户",
        "体验", "问题", "分析", "数据", "文本", "测试", "中文", "英文", "系统", "功能",
        "快递", "包装", "购买", "推荐", "朋友", "工作", "学习", "时间", "世界", "中国",
        "东西", "感觉", "觉得", "真的", "还是", "需要", "知道", "联系", "访问", "网站",
        "邮箱", "电话", "地址", "非常", "特别", "比较", "一点", "一些", "大家", "客户",
        "情感", "关键词", "实体", "语言", "相似度", "句子", "文章", "内容", "信息", "结果",
    ]
    .into_iter()
    .collect()
});
