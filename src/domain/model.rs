use serde::{Deserialize, Serialize};

/// 示範用的個人資料，欄位順序即為輸出順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "张三".to_string(),
            age: 25,
            city: "北京".to_string(),
        }
    }
}

impl Profile {
    /// 依插入順序回傳 (key, value)
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("age", self.age.to_string()),
            ("city", self.city.clone()),
        ]
    }

    pub fn introduce(&self) -> String {
        format!("I am {}, from {}", self.name, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutput {
    pub name: String,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub sections: Vec<SectionOutput>,
}

impl Report {
    pub fn section(&self, name: &str) -> Option<&SectionOutput> {
        self.sections.iter().find(|s| s.name == name)
    }
}
