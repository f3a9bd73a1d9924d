use sgpa::{GradeBand, GradeLabel, GradeScale};

#[test]
fn canonical_scale_maps_every_label() {
    let scale = GradeScale::canonical();
    let expected = [
        (GradeLabel::O, 90.0, 10.0),
        (GradeLabel::APlus, 80.0, 9.0),
        (GradeLabel::A, 70.0, 8.0),
        (GradeLabel::BPlus, 60.0, 7.0),
        (GradeLabel::B, 55.0, 6.0),
        (GradeLabel::C, 50.0, 5.0),
        (GradeLabel::P, 40.0, 4.0),
        (GradeLabel::F, 0.0, 0.0),
    ];

    for (label, min_marks, points) in expected {
        let band = scale.band(label).expect("canonical label");
        assert_eq!(band.min_marks, min_marks, "threshold for {label}");
        assert_eq!(band.points, points, "points for {label}");
    }
}

#[test]
fn band_for_total_respects_boundaries() {
    let scale = GradeScale::canonical();
    let grade_at = |total: f64| scale.band_for_total(total).expect("non-empty scale").label;

    assert_eq!(grade_at(100.0), GradeLabel::O);
    assert_eq!(grade_at(90.0), GradeLabel::O);
    assert_eq!(grade_at(89.99), GradeLabel::APlus);
    assert_eq!(grade_at(80.0), GradeLabel::APlus);
    assert_eq!(grade_at(79.0), GradeLabel::A);
    assert_eq!(grade_at(70.0), GradeLabel::A);
    assert_eq!(grade_at(60.0), GradeLabel::BPlus);
    assert_eq!(grade_at(55.0), GradeLabel::B);
    assert_eq!(grade_at(50.0), GradeLabel::C);
    assert_eq!(grade_at(40.0), GradeLabel::P);
    assert_eq!(grade_at(39.99), GradeLabel::F);
    assert_eq!(grade_at(0.0), GradeLabel::F);
}

#[test]
fn band_for_total_clamps_wild_totals() {
    let scale = GradeScale::canonical();

    assert_eq!(scale.band_for_total(250.0).expect("scale").label, GradeLabel::O);
    assert_eq!(scale.band_for_total(-10.0).expect("scale").label, GradeLabel::F);
    assert_eq!(scale.band_for_total(f64::NAN).expect("scale").label, GradeLabel::F);
}

#[test]
fn from_bands_sorts_thresholds_descending() {
    let scale = GradeScale::from_bands(vec![
        GradeBand::new(GradeLabel::P, 40.0, 4.0),
        GradeBand::new(GradeLabel::O, 90.0, 10.0),
        GradeBand::new(GradeLabel::B, 55.0, 6.0),
    ]);

    let thresholds: Vec<f64> = scale.bands().iter().map(|band| band.min_marks).collect();
    assert_eq!(thresholds, vec![90.0, 55.0, 40.0]);

    // A total below every threshold still lands on the lowest band.
    assert_eq!(scale.band_for_total(10.0).expect("scale").label, GradeLabel::P);
}

#[test]
fn empty_scale_has_no_bands_to_offer() {
    let scale = GradeScale::from_bands(Vec::new());
    assert!(scale.band(GradeLabel::O).is_none());
    assert!(scale.band_for_total(50.0).is_none());
}

#[test]
fn labels_display_their_conventional_spellings() {
    assert_eq!(GradeLabel::O.to_string(), "O");
    assert_eq!(GradeLabel::APlus.to_string(), "A+");
    assert_eq!(GradeLabel::BPlus.to_string(), "B+");
    assert_eq!(GradeLabel::F.to_string(), "F");
    assert_eq!(GradeLabel::default(), GradeLabel::B);
}
