use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf}
};

use chrono::{DateTime, TimeZone};
use reqwest::Url;

const REPORT_PREFIX: &str = "arxiv_search_results";

pub fn report_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.html", REPORT_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

// Utils to store report files on local device.
pub struct LocalSaver;

impl LocalSaver {
    // a second write within the same second replaces the first.
    pub fn save_report<Tz: TimeZone>(dir: &Path, html: &str, at: &DateTime<Tz>) -> io::Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = dir.join(report_file_name(at));
        let mut file = File::create(&path)?;
        file.write_all(html.as_bytes())?;
        file.flush()?;
        Ok(path)
    }
}

pub fn file_url(path: &Path) -> io::Result<String> {
    let absolute = path.canonicalize()?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot express {} as a file URL", absolute.display())
        ))
}
