//! English/Arabic strings for report headings and questionnaire labels.
//!
//! Rule output (steps, products, notes) stays in English.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ar")]
    Ar,
}

impl Language {
    pub fn t(self, en: &'static str, ar: &'static str) -> &'static str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }
}

/// Phrases used by the report and the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    Intro,
    Routine,
    RecommendedProducts,
    CatalogMapper,
    Notes,
    Cautions,
    Schedule,
    Daily,
    WashDay,
    Weekly,
    EveryTwoToFourWeeks,
    WhyThesePicks,
    WhyBody,
    HairType,
    Density,
    Porosity,
    Scalp,
    ChemicalHistory,
    Concerns,
    Climate,
    WashFrequency,
    StylingFrequency,
}

impl Text {
    pub fn in_lang(self, lang: Language) -> &'static str {
        match self {
            Text::Title => lang.t("Blondis NY Hair Routine Advisor", "موصى به لروتين العناية بالشعر"),
            Text::Intro => lang.t(
                "Fill in your hair/scalp details and get a personalized routine with products and timing.",
                "أدخل خصائص شعرك وفروة الرأس للحصول على روتين مخصص مع المنتجات وتوقيت الاستخدام.",
            ),
            Text::Routine => lang.t("Routine", "الروتين"),
            Text::RecommendedProducts => lang.t("Recommended Products", "المنتجات الموصى بها"),
            Text::CatalogMapper => lang.t(
                "Catalog Mapper (map to your brand items)",
                "ربط الفئات بمنتجات علامتك",
            ),
            Text::Notes => lang.t("Notes", "ملاحظات"),
            Text::Cautions => lang.t("Cautions", "تحذيرات"),
            Text::Schedule => lang.t("When to Use (Schedule)", "متى تستخدم (الجدول)"),
            Text::Daily => lang.t("Daily", "يوميًا"),
            Text::WashDay => lang.t("Wash Day", "يوم الغسل"),
            Text::Weekly => lang.t("Weekly", "أسبوعيًا"),
            Text::EveryTwoToFourWeeks => lang.t("Every 2–4 Weeks", "كل 2–4 أسابيع"),
            Text::WhyThesePicks => lang.t("Why these picks?", "لماذا هذه الاختيارات؟"),
            Text::WhyBody => lang.t(
                "The recommendations are rule-based using hair type, density, porosity, scalp state, chemical history, climate, and styling frequency. You can adapt the rules to your brand catalog (e.g., map ‘Bond-building mask’ to a specific product).",
                "التوصيات مبنية على قواعد تأخذ بعين الاعتبار نوع الشعر وكثافته ومسامية الشعر وحالة فروة الرأس والمعالجات الكيميائية والمناخ وتكرار التصفيف بالحرارة. يمكنك ربط الفئات بمنتجات علامتك.",
            ),
            Text::HairType => lang.t("Hair type", "نوع الشعر"),
            Text::Density => lang.t("Strand density", "كثافة الشعرة"),
            Text::Porosity => lang.t("Porosity", "المسامية"),
            Text::Scalp => lang.t("Scalp condition", "حالة فروة الرأس"),
            Text::ChemicalHistory => lang.t("Chemical history", "معالجات كيميائية"),
            Text::Concerns => lang.t("Top concerns", "أهم المشاكل"),
            Text::Climate => lang.t("Climate", "المناخ"),
            Text::WashFrequency => lang.t("Wash frequency (per week)", "عدد مرات الغسل أسبوعيًا"),
            Text::StylingFrequency => lang.t("Heat styling frequency", "تكرار استخدام الحرارة"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_switch() {
        assert_eq!(Text::Notes.in_lang(Language::En), "Notes");
        assert_eq!(Text::Notes.in_lang(Language::Ar), "ملاحظات");
    }

    #[test]
    fn test_language_serde_names() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    }
}
