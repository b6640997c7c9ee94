//! UI strings
//!
//! Every user-facing label lives here, keyed by `StringId`. Templates use
//! `{{count}}` and `{{total}}` placeholders filled in by `format`.
//!
//! macroquad's built-in font only covers Latin glyphs, so `En` is the
//! default; the other tables render correctly once a CJK font is loaded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    #[default]
    En,
    Ja,
}

impl Language {
    /// Short tag shown on the language toggle
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// The language after this one, wrapping around
    pub fn next(self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Ja,
            Language::Ja => Language::Zh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringId {
    Title,
    Subtitle,
    Placeholder,
    Submit,
    Clear,
    ClearConfirm,
    Confirm,
    Cancel,
    PaperTitle,
    PaperSubtitle,
    DailyLimit,
    TodayCount,
    TotalCount,
    NoWishes,
    StarModalTitle,
    Delete,
    Close,
    WishList,
    HintKnot,
    HintWrap,
    HintInflate,
    HintCollect,
    ColorRed,
    ColorOrange,
    ColorYellow,
    ColorGreen,
    ColorBlue,
    ColorIndigo,
    ColorViolet,
}

/// Raw (unformatted) text for a string in a language
pub fn text(lang: Language, id: StringId) -> &'static str {
    match lang {
        Language::Zh => zh(id),
        Language::En => en(id),
        Language::Ja => ja(id),
    }
}

/// Text with `{{count}}` and `{{total}}` substituted
pub fn format(lang: Language, id: StringId, count: usize, total: usize) -> String {
    text(lang, id)
        .replace("{{count}}", &count.to_string())
        .replace("{{total}}", &total.to_string())
}

fn zh(id: StringId) -> &'static str {
    use StringId::*;
    match id {
        Title => "星语瓶",
        Subtitle => "把愿望折进星星里",
        Placeholder => "输入你的愿望...",
        Submit => "放入瓶中",
        Clear => "清空",
        ClearConfirm => "确定要清空所有星星吗？此操作不可撤销。",
        Confirm => "确定",
        Cancel => "取消",
        PaperTitle => "折纸 · 愿望清单",
        PaperSubtitle => "这些都是你折进星星里的话",
        DailyLimit => "每日最多可以折 8 颗星星",
        TodayCount => "今天已折星星：{{count}}/{{total}}",
        TotalCount => "至今一共折了 {{count}} 颗许愿星星",
        NoWishes => "还没有任何愿望，先写一条试试吧。",
        StarModalTitle => "一颗幸运星",
        Delete => "删除",
        Close => "关闭",
        WishList => "愿望",
        HintKnot => "↑ 向上滑动打结",
        HintWrap => "连续点击缠绕 (3次)",
        HintInflate => "长按让星星变立体",
        HintCollect => "放入瓶中...",
        ColorRed => "红",
        ColorOrange => "橙",
        ColorYellow => "黄",
        ColorGreen => "绿",
        ColorBlue => "蓝",
        ColorIndigo => "靛",
        ColorViolet => "紫",
    }
}

fn en(id: StringId) -> &'static str {
    use StringId::*;
    match id {
        Title => "Star Jar",
        Subtitle => "Fold your wishes into stars",
        Placeholder => "Type your wish...",
        Submit => "Put in Jar",
        Clear => "Clear",
        ClearConfirm => "Are you sure you want to clear all stars? This cannot be undone.",
        Confirm => "Confirm",
        Cancel => "Cancel",
        PaperTitle => "Origami · Wish List",
        PaperSubtitle => "Wishes you folded into stars",
        DailyLimit => "Max 8 stars per day",
        TodayCount => "Today: {{count}}/{{total}}",
        TotalCount => "Total stars folded: {{count}}",
        NoWishes => "No wishes yet. Try writing one!",
        StarModalTitle => "A Lucky Star",
        Delete => "Delete",
        Close => "Close",
        WishList => "Wishes",
        HintKnot => "Swipe up to tie the knot",
        HintWrap => "Tap to wrap (3 times)",
        HintInflate => "Press and hold to puff the star",
        HintCollect => "Into the jar...",
        ColorRed => "Red",
        ColorOrange => "Orange",
        ColorYellow => "Yellow",
        ColorGreen => "Green",
        ColorBlue => "Blue",
        ColorIndigo => "Indigo",
        ColorViolet => "Violet",
    }
}

fn ja(id: StringId) -> &'static str {
    use StringId::*;
    match id {
        Title => "星の瓶",
        Subtitle => "願いを星に折り込む",
        Placeholder => "願い事を入力...",
        Submit => "瓶に入れる",
        Clear => "クリア",
        ClearConfirm => "すべての星を削除してもよろしいですか？この操作は取り消せません。",
        Confirm => "OK",
        Cancel => "キャンセル",
        PaperTitle => "折り紙 · 願い事リスト",
        PaperSubtitle => "あなたが星に込めた願い",
        DailyLimit => "1日最大8個まで",
        TodayCount => "今日：{{count}}/{{total}}",
        TotalCount => "これまでに折った星：{{count}}個",
        NoWishes => "まだ願い事がありません。書いてみましょう！",
        StarModalTitle => "ラッキースター",
        Delete => "削除",
        Close => "閉じる",
        WishList => "願い",
        HintKnot => "↑ 上にスワイプして結ぶ",
        HintWrap => "タップして巻く (3回)",
        HintInflate => "長押しで星をふくらませる",
        HintCollect => "瓶の中へ...",
        ColorRed => "赤",
        ColorOrange => "オレンジ",
        ColorYellow => "黄",
        ColorGreen => "緑",
        ColorBlue => "青",
        ColorIndigo => "藍",
        ColorViolet => "紫",
    }
}
