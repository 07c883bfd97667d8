use crate::domain::model::Profile;
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn sequence_length(&self) -> i64;
    fn square_range(&self) -> (i64, i64);
    fn numbers(&self) -> &[i64];
    fn greeting_name(&self) -> &str;
    fn calculator_name(&self) -> &str;
    fn profile(&self) -> &Profile;
    fn extended(&self) -> bool;
}

/// 一個示範段落：標題加上若干行輸出
pub trait Section {
    /// 穩定的識別名稱，用於 JSON 報告
    fn name(&self) -> &str;
    /// 空字串代表沒有標題列
    fn title(&self) -> String;
    fn render(&self) -> Result<Vec<String>>;
}
