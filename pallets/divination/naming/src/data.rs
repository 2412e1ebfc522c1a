//! # 默认参考数据
//!
//! 常用取名字库（50 字）与寓意分类目录（8 类）。
//!
//! 引擎只通过 [`NamingTables`] 引用这些表，调用方可以换成自己的字库。

use crate::types::{Character, GenderAffinity, MeaningCategory, NamingTables, WuXing};

const fn ch(
    glyph: &'static str,
    pinyin: &'static str,
    meaning: &'static str,
    element: WuXing,
    gender: GenderAffinity,
    strokes: u8,
    tags: &'static [&'static str],
) -> Character {
    Character { glyph, pinyin, meaning, element, gender, strokes, tags }
}

/// 常用取名汉字库
pub static CHARACTERS: [Character; 50] = [
    // 男性常用字
    ch("伟", "wěi", "伟大、宏伟", WuXing::Tu, GenderAffinity::Male, 11, &["伟大", "宏伟", "卓越"]),
    ch("强", "qiáng", "强壮、坚强", WuXing::Mu, GenderAffinity::Male, 12, &["强壮", "坚强", "有力"]),
    ch("军", "jūn", "军队、军人", WuXing::Mu, GenderAffinity::Male, 6, &["军人", "勇敢", "正义"]),
    ch("华", "huá", "华丽、中华", WuXing::Shui, GenderAffinity::Neutral, 14, &["华丽", "繁荣", "精华"]),
    ch("明", "míng", "光明、聪明", WuXing::Huo, GenderAffinity::Neutral, 8, &["光明", "聪明", "清楚"]),
    ch("志", "zhì", "志向、意志", WuXing::Huo, GenderAffinity::Male, 7, &["志向", "意志", "理想"]),
    ch("勇", "yǒng", "勇敢、勇气", WuXing::Tu, GenderAffinity::Male, 9, &["勇敢", "勇气", "无畏"]),
    ch("智", "zhì", "智慧、聪明", WuXing::Huo, GenderAffinity::Neutral, 12, &["智慧", "聪明", "才智"]),
    ch("文", "wén", "文化、文雅", WuXing::Shui, GenderAffinity::Neutral, 4, &["文化", "文雅", "学问"]),
    ch("武", "wǔ", "武艺、武力", WuXing::Shui, GenderAffinity::Male, 8, &["武艺", "武力", "勇武"]),
    // 女性常用字
    ch("美", "měi", "美丽、美好", WuXing::Shui, GenderAffinity::Female, 9, &["美丽", "美好", "优美"]),
    ch("丽", "lì", "美丽、华丽", WuXing::Huo, GenderAffinity::Female, 7, &["美丽", "华丽", "秀丽"]),
    ch("雅", "yǎ", "优雅、雅致", WuXing::Mu, GenderAffinity::Female, 12, &["优雅", "雅致", "高雅"]),
    ch("静", "jìng", "安静、宁静", WuXing::Jin, GenderAffinity::Female, 16, &["安静", "宁静", "平静"]),
    ch("慧", "huì", "智慧、聪慧", WuXing::Shui, GenderAffinity::Female, 15, &["智慧", "聪慧", "贤慧"]),
    ch("婷", "tíng", "美好、婷婷", WuXing::Huo, GenderAffinity::Female, 12, &["美好", "婷婷", "秀美"]),
    ch("怡", "yí", "愉快、和悦", WuXing::Tu, GenderAffinity::Female, 9, &["愉快", "和悦", "舒适"]),
    ch("欣", "xīn", "欣喜、欣然", WuXing::Mu, GenderAffinity::Female, 8, &["欣喜", "欣然", "快乐"]),
    ch("琳", "lín", "美玉、琳琅", WuXing::Mu, GenderAffinity::Female, 13, &["美玉", "琳琅", "珍贵"]),
    ch("瑶", "yáo", "美玉、瑶池", WuXing::Huo, GenderAffinity::Female, 15, &["美玉", "瑶池", "珍贵"]),
    // 中性字
    ch("安", "ān", "安全、平安", WuXing::Tu, GenderAffinity::Neutral, 6, &["安全", "平安", "安定"]),
    ch("乐", "lè", "快乐、音乐", WuXing::Huo, GenderAffinity::Neutral, 5, &["快乐", "音乐", "欢乐"]),
    ch("和", "hé", "和谐、和平", WuXing::Shui, GenderAffinity::Neutral, 8, &["和谐", "和平", "温和"]),
    ch("康", "kāng", "健康、康宁", WuXing::Mu, GenderAffinity::Neutral, 11, &["健康", "康宁", "安康"]),
    ch("宁", "níng", "宁静、安宁", WuXing::Huo, GenderAffinity::Neutral, 5, &["宁静", "安宁", "平宁"]),
    ch("福", "fú", "福气、幸福", WuXing::Shui, GenderAffinity::Neutral, 13, &["福气", "幸福", "福泽"]),
    ch("祥", "xiáng", "吉祥、祥和", WuXing::Jin, GenderAffinity::Neutral, 11, &["吉祥", "祥和", "瑞祥"]),
    ch("瑞", "ruì", "吉祥、瑞气", WuXing::Jin, GenderAffinity::Neutral, 14, &["吉祥", "瑞气", "祥瑞"]),
    ch("嘉", "jiā", "美好、嘉奖", WuXing::Mu, GenderAffinity::Neutral, 14, &["美好", "嘉奖", "优秀"]),
    ch("诚", "chéng", "诚实、真诚", WuXing::Jin, GenderAffinity::Neutral, 14, &["诚实", "真诚", "诚信"]),
    // 自然意象
    ch("天", "tiān", "天空、天然", WuXing::Huo, GenderAffinity::Neutral, 4, &["天空", "天然", "天赋"]),
    ch("地", "dì", "大地、土地", WuXing::Tu, GenderAffinity::Neutral, 6, &["大地", "土地", "地位"]),
    ch("山", "shān", "山峰、高山", WuXing::Tu, GenderAffinity::Neutral, 3, &["山峰", "高山", "稳重"]),
    ch("水", "shuǐ", "水流、清水", WuXing::Shui, GenderAffinity::Neutral, 4, &["水流", "清水", "灵动"]),
    ch("木", "mù", "树木、木材", WuXing::Mu, GenderAffinity::Neutral, 4, &["树木", "木材", "生长"]),
    ch("金", "jīn", "黄金、金属", WuXing::Jin, GenderAffinity::Neutral, 8, &["黄金", "金属", "珍贵"]),
    ch("火", "huǒ", "火焰、火热", WuXing::Huo, GenderAffinity::Neutral, 4, &["火焰", "火热", "热情"]),
    ch("土", "tǔ", "土壤、大地", WuXing::Tu, GenderAffinity::Neutral, 3, &["土壤", "大地", "厚重"]),
    ch("日", "rì", "太阳、日子", WuXing::Huo, GenderAffinity::Neutral, 4, &["太阳", "日子", "光明"]),
    ch("月", "yuè", "月亮、月份", WuXing::Mu, GenderAffinity::Neutral, 4, &["月亮", "月份", "温柔"]),
    ch("星", "xīng", "星星、明星", WuXing::Huo, GenderAffinity::Neutral, 9, &["星星", "明星", "闪耀"]),
    ch("云", "yún", "云朵、云彩", WuXing::Shui, GenderAffinity::Neutral, 4, &["云朵", "云彩", "飘逸"]),
    ch("风", "fēng", "风儿、风格", WuXing::Shui, GenderAffinity::Neutral, 9, &["风儿", "风格", "自由"]),
    ch("雨", "yǔ", "雨水、下雨", WuXing::Shui, GenderAffinity::Neutral, 8, &["雨水", "下雨", "滋润"]),
    ch("雪", "xuě", "雪花、雪白", WuXing::Shui, GenderAffinity::Female, 11, &["雪花", "雪白", "纯洁"]),
    ch("花", "huā", "花朵、花卉", WuXing::Mu, GenderAffinity::Female, 8, &["花朵", "花卉", "美丽"]),
    ch("草", "cǎo", "草地、草木", WuXing::Mu, GenderAffinity::Neutral, 12, &["草地", "草木", "生机"]),
    ch("树", "shù", "树木、大树", WuXing::Mu, GenderAffinity::Neutral, 16, &["树木", "大树", "成长"]),
    ch("林", "lín", "森林、树林", WuXing::Mu, GenderAffinity::Neutral, 8, &["森林", "树林", "茂盛"]),
    ch("森", "sēn", "森林、茂密", WuXing::Mu, GenderAffinity::Neutral, 12, &["森林", "茂密", "繁茂"]),
];

/// 寓意分类目录
pub static MEANING_CATEGORIES: [MeaningCategory; 8] = [
    MeaningCategory {
        category: "品德修养",
        meanings: &["仁爱", "诚信", "谦逊", "勇敢", "正义", "善良", "忠诚", "孝顺"],
        characters: &["仁", "诚", "谦", "勇", "正", "善", "忠", "孝", "德", "义", "礼", "信"],
    },
    MeaningCategory {
        category: "才华智慧",
        meanings: &["聪慧", "博学", "文雅", "艺术", "创新", "才华", "智慧", "学识"],
        characters: &["智", "慧", "博", "文", "雅", "艺", "创", "才", "学", "书", "诗", "画"],
    },
    MeaningCategory {
        category: "事业成功",
        meanings: &["成功", "领导", "创业", "稳重", "进取", "奋斗", "成就", "辉煌"],
        characters: &["成", "功", "领", "创", "稳", "进", "奋", "就", "辉", "煌", "业", "达"],
    },
    MeaningCategory {
        category: "健康平安",
        meanings: &["长寿", "健康", "活力", "平安", "康宁", "福泽", "吉祥", "安康"],
        characters: &["寿", "康", "健", "活", "安", "平", "福", "祥", "吉", "泽", "宁", "和"],
    },
    MeaningCategory {
        category: "自然美景",
        meanings: &["山水", "花草", "日月", "四季", "清风", "明月", "青山", "绿水"],
        characters: &["山", "水", "花", "草", "日", "月", "春", "夏", "秋", "冬", "风", "雨"],
    },
    MeaningCategory {
        category: "美好品质",
        meanings: &["温柔", "优雅", "纯洁", "美丽", "善良", "贤淑", "端庄", "秀美"],
        characters: &["温", "柔", "雅", "纯", "洁", "美", "丽", "善", "贤", "淑", "端", "秀"],
    },
    MeaningCategory {
        category: "志向理想",
        meanings: &["远大", "理想", "抱负", "志向", "梦想", "追求", "目标", "愿望"],
        characters: &["远", "大", "理", "想", "抱", "负", "志", "向", "梦", "追", "求", "愿"],
    },
    MeaningCategory {
        category: "家庭和睦",
        meanings: &["和谐", "团结", "温馨", "幸福", "美满", "和睦", "亲情", "温暖"],
        characters: &["和", "谐", "团", "结", "温", "馨", "幸", "福", "满", "睦", "亲", "暖"],
    },
];

impl NamingTables {
    /// 内置字库与寓意目录
    pub fn standard() -> Self {
        Self { characters: &CHARACTERS, categories: &MEANING_CATEGORIES }
    }

    /// 按字形查字
    pub fn find(&self, glyph: &str) -> Option<&'static Character> {
        self.characters.iter().find(|c| c.glyph == glyph)
    }

    /// 所有寓意词（按分类顺序）
    pub fn all_meanings(&self) -> impl Iterator<Item = &'static str> {
        self.categories.iter().flat_map(|c| c.meanings.iter().copied())
    }
}
