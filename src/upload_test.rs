use super::*;

const MB: f64 = 1024.0 * 1024.0;

#[test]
fn size_label_has_two_decimals() {
    assert_eq!(SelectedFile::new("report.pdf", 1.5 * MB).size_label(), "1.50 MB");
    assert_eq!(SelectedFile::new("tiny.txt", 1024.0).size_label(), "0.00 MB");
}

#[test]
fn exactly_five_megabytes_is_allowed() {
    assert!(!SelectedFile::new("limit.pdf", 5.0 * MB).is_oversized());
    assert!(SelectedFile::new("big.pdf", 5.0 * MB + 1.0).is_oversized());
}

#[test]
fn oversized_files_are_split_out() {
    let (accepted, rejected) = partition_by_size(vec![
        SelectedFile::new("birth-certificate.pdf", 0.8 * MB),
        SelectedFile::new("scan.tiff", 12.0 * MB),
        SelectedFile::new("photo.jpg", 2.0 * MB),
    ]);
    let names: Vec<&str> = accepted.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["birth-certificate.pdf", "photo.jpg"]);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].name, "scan.tiff");
}

#[test]
fn progress_clamps_at_one_hundred() {
    let mut progress = UploadProgress::default();
    assert!(!progress.tick(14.9));
    assert!(!progress.tick(80.0));
    assert!(progress.tick(14.0));
    assert_eq!(progress.percent(), 100.0);
    assert_eq!(progress.width_style(), "width: 100%;");
}

#[test]
fn progress_never_goes_backwards() {
    let mut progress = UploadProgress::default();
    progress.tick(10.0);
    progress.tick(-5.0);
    assert_eq!(progress.percent(), 10.0);
}

#[test]
fn random_steps_finish() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(5);
    let mut progress = UploadProgress::default();
    let mut ticks = 0;
    while !progress.tick(rng.gen_range(0.0..config::UPLOAD_MAX_STEP)) {
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert!(progress.is_complete());
}
