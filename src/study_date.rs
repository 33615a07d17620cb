use time::Date;
use time::macros::format_description;

/// Shown in place of a study date which is missing or malformed.
pub const DATE_PLACEHOLDER: &str = "Fecha no disponible";

/// Reformat a DICOM `StudyDate` from `YYYYMMDD` to `DD/MM/YYYY`.
pub(crate) fn format_study_date(dicom_date: &str) -> String {
    if dicom_date.len() != 8 || !dicom_date.is_ascii() {
        return DATE_PLACEHOLDER.to_string();
    }
    let (year, rest) = dicom_date.split_at(4);
    let (month, day) = rest.split_at(2);
    format!("{day}/{month}/{year}")
}

/// Format a calendar date the same way [format_study_date] does, for comparing against
/// study dates.
pub(crate) fn display_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| DATE_PLACEHOLDER.to_string())
}
