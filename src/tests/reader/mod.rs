//! Reader tests.


use serde::Deserialize;

use crate::{Reader, ReaderOptions, Timestamp};

/// One member of every supported kind.
#[derive(Debug, Deserialize, PartialEq)]
pub(super) struct ReadTo {
    pub f: f64,
    pub i: i32,
    pub b: bool,
    pub s: String,
    pub ip: Option<i32>,
    pub ia: Vec<i32>,
    pub sa: Vec<String>,
    pub tu: Timestamp,
    pub t: Timestamp,
}

pub(super) const READ_TO_COLUMNS: [&str; 9] = ["f", "i", "b", "s", "ip", "ia", "sa", "tu", "t"];

pub(super) const READ_TO_LINE: &str = r#"29.4,3,true,"hello ""you""",9,"8,4,3,5","this,is,not,a,test",1613235342,1991-04-05T11:11:11Z"#;

pub(super) fn read_to_options() -> ReaderOptions {
    ReaderOptions::new()
        .with_column_names(READ_TO_COLUMNS)
        .with_column_format("tu", crate::TIME_FORMAT_UNIX)
}

pub(super) fn reader(data: &str, options: ReaderOptions) -> Reader<&[u8]> {
    Reader::new(data.as_bytes(), options).expect("reader should build")
}
