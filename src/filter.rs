use crate::record::PatientStudyRecord;

/// Query string as ordered key/value pairs. Repeated keys are kept, so extracting it never
/// fails.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, like `URLSearchParams.get` in the browser.
pub(crate) fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Optional narrowing of the worklist, the same filtering the browser does client-side.
#[derive(Debug, Default)]
pub struct StudyFilter {
    /// Case-insensitive substring of the patient ID, name, study description or site.
    pub search: Option<String>,
    /// Keep only studies performed today.
    pub today: bool,
}

impl StudyFilter {
    /// Read `search` and `today` from a query string. Any `today` other than `true` is
    /// treated as absent.
    pub(crate) fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            search: first_value(pairs, "search").map(String::from),
            today: first_value(pairs, "today") == Some("true"),
        }
    }

    /// `today` is the current date already formatted as `DD/MM/YYYY`.
    pub fn apply(
        &self,
        records: Vec<PatientStudyRecord>,
        today: &str,
    ) -> Vec<PatientStudyRecord> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        records
            .into_iter()
            .filter(|r| !self.today || r.study_date == today)
            .filter(|r| needle.as_deref().is_none_or(|n| matches_search(r, n)))
            .collect()
    }
}

fn matches_search(record: &PatientStudyRecord, needle: &str) -> bool {
    [&record.id, &record.name, &record.study, &record.site]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
