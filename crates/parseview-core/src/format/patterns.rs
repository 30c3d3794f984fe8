//! Regex patterns for date strings chrono cannot parse directly.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 2024/1/15 or 2024.01.15
    pub static ref DATE_YMD_SEPARATED: Regex = Regex::new(
        r"^(\d{4})[/.](\d{1,2})[/.](\d{1,2})$"
    ).unwrap();

    // 2024年1月15日
    pub static ref DATE_CHINESE_LONG: Regex = Regex::new(
        r"^(\d{4})\s*年\s*(\d{1,2})\s*月\s*(\d{1,2})\s*日$"
    ).unwrap();

    // Leading ISO date of a datetime with an unusual time part
    pub static ref DATE_ISO_PREFIX: Regex = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})[T ]\d{2}:\d{2}"
    ).unwrap();
}
