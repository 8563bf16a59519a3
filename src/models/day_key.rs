use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Weekday};
use phf::phf_map;

use crate::error::ConfigError;

/// 星期（既用于选择输入工作表，也用作输出工作表名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// 小写别名 → 星期
static DAY_ALIASES: phf::Map<&'static str, DayKey> = phf_map! {
    "monday" => DayKey::Monday,
    "mon" => DayKey::Monday,
    "周一" => DayKey::Monday,
    "星期一" => DayKey::Monday,
    "tuesday" => DayKey::Tuesday,
    "tue" => DayKey::Tuesday,
    "tues" => DayKey::Tuesday,
    "周二" => DayKey::Tuesday,
    "星期二" => DayKey::Tuesday,
    "wednesday" => DayKey::Wednesday,
    "wed" => DayKey::Wednesday,
    "周三" => DayKey::Wednesday,
    "星期三" => DayKey::Wednesday,
    "thursday" => DayKey::Thursday,
    "thu" => DayKey::Thursday,
    "thur" => DayKey::Thursday,
    "thurs" => DayKey::Thursday,
    "周四" => DayKey::Thursday,
    "星期四" => DayKey::Thursday,
    "friday" => DayKey::Friday,
    "fri" => DayKey::Friday,
    "周五" => DayKey::Friday,
    "星期五" => DayKey::Friday,
    "saturday" => DayKey::Saturday,
    "sat" => DayKey::Saturday,
    "周六" => DayKey::Saturday,
    "星期六" => DayKey::Saturday,
    "sunday" => DayKey::Sunday,
    "sun" => DayKey::Sunday,
    "周日" => DayKey::Sunday,
    "周天" => DayKey::Sunday,
    "星期日" => DayKey::Sunday,
    "星期天" => DayKey::Sunday,
};

impl DayKey {
    /// 一周七天，周一开始
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    /// 标准英文名称，同时也是工作表名
    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Monday => "Monday",
            DayKey::Tuesday => "Tuesday",
            DayKey::Wednesday => "Wednesday",
            DayKey::Thursday => "Thursday",
            DayKey::Friday => "Friday",
            DayKey::Saturday => "Saturday",
            DayKey::Sunday => "Sunday",
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayKey::Monday,
            Weekday::Tue => DayKey::Tuesday,
            Weekday::Wed => DayKey::Wednesday,
            Weekday::Thu => DayKey::Thursday,
            Weekday::Fri => DayKey::Friday,
            Weekday::Sat => DayKey::Saturday,
            Weekday::Sun => DayKey::Sunday,
        }
    }

    /// 本地时间的今天
    pub fn today() -> Self {
        Self::from_weekday(chrono::Local::now().weekday())
    }

    /// 解析星期名称（不区分大小写，支持缩写和中文）
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        DAY_ALIASES.get(key.as_str()).copied()
    }
}

impl FromStr for DayKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidDayKey(s.to_string()))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
