//! Static descriptive text shown next to numbers in reports.

use numerology_engine::CoreNumber;

/// One-line description of a number, for 1-9 and the master numbers 11, 22, 33.
#[must_use]
pub fn number_overview(n: u32) -> Option<&'static str> {
    let text = match n {
        1 => "自立、意志強くリーダー、孤立や我が優先傾向",
        2 => "協力と調和、他人思いでパートナー、過度な依存に注意",
        3 => "創造性、情熱と表現力が特徴、楽観的過ぎて現実逃避傾向",
        4 => "実務と秩序、安定と努力家、変化を嫌う保守性あり",
        5 => "自由と変化、好奇心旺盛で適応力、過度な自由欲求で無責任",
        6 => "調和と家族愛、親切で責任感、過保護で自己犠牲傾向",
        7 => "探求と内省、深遠な思索家、内向的で社交的に苦手",
        8 => "権力と物質、指導力と企業家精神、支配欲や材料主義的",
        9 => "完結と人道、広い視野と理想主義、理想高すぎて現実見失う",
        11 => "直観と啓示、霊的な視野とリーダーシップ、神経質で不安定",
        22 => "建設と大規模計画、実行力と革新、オーバーワークと焦燥感",
        33 => "教師と無私無欲、愛と調和の象徴、過度の献身と自己忘却傾向",
        _ => return None,
    };
    Some(text)
}

/// Display label for a core number.
#[must_use]
pub fn core_label(number: CoreNumber) -> &'static str {
    match number {
        CoreNumber::LifePath => "ライフパス",
        CoreNumber::Destiny => "ディスティニー",
        CoreNumber::Soul => "ソウル",
        CoreNumber::Personality => "パーソナリティ",
        CoreNumber::Maturity => "マチュリティ",
        CoreNumber::Birthday => "バースデー",
        CoreNumber::Challenge => "チャレンジ",
    }
}

/// What a core number speaks to.
#[must_use]
pub fn core_meaning(number: CoreNumber) -> &'static str {
    match number {
        CoreNumber::LifePath => "生き様",
        CoreNumber::Destiny => "社会的位置",
        CoreNumber::Soul => "幸福感",
        CoreNumber::Personality => "客観的印象",
        CoreNumber::Maturity => "人生の目標",
        CoreNumber::Birthday => "天性",
        CoreNumber::Challenge => "人生の課題",
    }
}

/// 厄年 label for a personal-year age.
///
/// Ages in the series are full years (満年齢); the traditional table counts
/// 数え年, one higher. Men: 25, 42, 61. Women: 19, 33, 37, 61. The years on
/// either side are 前厄 and 後厄.
#[must_use]
pub fn unlucky_year_label(age: u32) -> Option<&'static str> {
    let label = match age.saturating_add(1) {
        18 => "前厄(女)",
        19 => "本厄(女)",
        20 => "後厄(女)",
        24 => "前厄(男)",
        25 => "本厄(男)",
        26 => "後厄(男)",
        32 => "前厄(女)",
        33 => "大厄(女)",
        34 => "後厄(女)",
        36 => "前厄(女)",
        37 => "本厄(女)",
        38 => "後厄(女)",
        41 => "前厄(男)",
        42 => "大厄(男)",
        43 => "後厄(男)",
        60 => "前厄",
        61 => "本厄",
        62 => "後厄",
        _ => return None,
    };
    Some(label)
}
