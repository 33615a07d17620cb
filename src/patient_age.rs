use time::Date;

/// Compute a patient's age in whole years from a DICOM `PatientBirthDate` (`YYYYMMDD`).
///
/// Only the first 8 characters are considered. Returns 0 when the value is absent,
/// too short, not numeric, or lies in the future.
pub(crate) fn age_from_birth_date(birth_date: &str, today: Date) -> u32 {
    parse_ymd(birth_date)
        .map(|(year, month, day)| {
            let mut age = today.year() - year;
            let today_md = (u8::from(today.month()), today.day());
            if today_md < (month, day) {
                age -= 1;
            }
            u32::try_from(age).unwrap_or(0)
        })
        .unwrap_or(0)
}

/// Split the leading `YYYYMMDD` of a DICOM DA value into its numeric parts.
fn parse_ymd(value: &str) -> Option<(i32, u8, u8)> {
    let digits = value.get(..8)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = digits[..4].parse().ok()?;
    let month = digits[4..6].parse().ok()?;
    let day = digits[6..8].parse().ok()?;
    Some((year, month, day))
}
