use aliri_braid::braid;

/// Orthanc's internal identifier of a study resource, e.g.
/// `27f7126f-4f66c5c4-ca8dbd4e-f2d40a8d-0dbfe5e9`.
///
/// Not the same thing as the DICOM `StudyInstanceUID`.
#[braid(serde)]
pub struct OrthancStudyId;
