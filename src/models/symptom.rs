use serde::Serialize;

/// Extra free-text input attached to a catalog option (e.g. a temperature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubValueSpec {
    /// Summary form of the option; `{value}` is replaced by the entered text.
    pub template: &'static str,
    /// Placeholder shown in the sub-value input.
    pub hint: &'static str,
}

/// A fixed checklist entry of the symptom selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomOption {
    pub key: &'static str,
    pub label: &'static str,
    pub sub_value: Option<SubValueSpec>,
}

impl SymptomOption {
    pub const fn plain(key: &'static str) -> Self {
        Self {
            key,
            label: key,
            sub_value: None,
        }
    }

    pub fn requires_sub_value(&self) -> bool {
        self.sub_value.is_some()
    }

    /// Text emitted for this option when the selection is confirmed.
    pub fn summary(&self, sub_value: &str) -> String {
        match self.sub_value {
            Some(spec) => {
                let value = if sub_value.is_empty() {
                    UNFILLED_PLACEHOLDER
                } else {
                    sub_value
                };
                spec.template.replace("{value}", value)
            }
            None => self.label.to_string(),
        }
    }
}

/// Stands in for a sub-value the user left empty.
pub const UNFILLED_PLACEHOLDER: &str = "未填写";

pub const FEVER_KEY: &str = "fever";

/// Checklist in display order. Confirmed summaries follow this order.
pub const SYMPTOM_CATALOG: &[SymptomOption] = &[
    SymptomOption {
        key: FEVER_KEY,
        label: "熱（最高体温　　℃）",
        sub_value: Some(SubValueSpec {
            template: "熱（最高体温 {value}℃）",
            hint: "请填写体温（例如 38.5）",
        }),
    },
    SymptomOption::plain("鼻水"),
    SymptomOption::plain("せき"),
    SymptomOption::plain("のどの痛み"),
    SymptomOption::plain("ゼイゼイする"),
    SymptomOption::plain("耳の痛み"),
    SymptomOption::plain("目やに"),
    SymptomOption::plain("頭痛"),
    SymptomOption::plain("腹痛"),
    SymptomOption::plain("吐き気・嘔吐"),
    SymptomOption::plain("便秘"),
    SymptomOption::plain("下痢"),
    SymptomOption::plain("発疹"),
];

pub fn find_option(key: &str) -> Option<&'static SymptomOption> {
    SYMPTOM_CATALOG.iter().find(|o| o.key == key)
}

/// Catalog entry as sent to the page.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomOptionInfo {
    pub key: String,
    pub label: String,
    pub requires_sub_value: bool,
    pub sub_value_hint: Option<String>,
}

pub fn get_symptom_catalog() -> Vec<SymptomOptionInfo> {
    SYMPTOM_CATALOG
        .iter()
        .map(|o| SymptomOptionInfo {
            key: o.key.to_string(),
            label: o.label.to_string(),
            requires_sub_value: o.requires_sub_value(),
            sub_value_hint: o.sub_value.map(|s| s.hint.to_string()),
        })
        .collect()
}
