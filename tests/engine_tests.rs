use sgpa::{
    GradeLabel, GradeScale, Subject,
    grade::{internal_marks, required_external_marks, round2, total_credits, weighted_average},
};

fn theory_subject() -> Subject {
    Subject {
        lecture_credits: 3,
        tutorial_credits: 1,
        cie1: 32.0,
        cie2: 36.0,
        internal_assessment: 8.0,
        estimated_grade: GradeLabel::A,
        ..Subject::default()
    }
}

fn practical_subject() -> Subject {
    Subject {
        lecture_credits: 3,
        practical_credits: 2,
        cie1: 40.0,
        cie2: 40.0,
        lab_marks: 20.0,
        quiz_marks: 4.0,
        estimated_grade: GradeLabel::O,
        ..Subject::default()
    }
}

#[test]
fn theory_internal_marks_combine_cie_and_internal_assessment() {
    let subject = theory_subject();

    // 32/40*20 + 36/40*20 = 16 + 18 = 34, plus the internal assessment.
    assert_eq!(internal_marks(&subject), 42.0);
}

#[test]
fn theory_required_external_doubles_the_shortfall() {
    let subject = theory_subject();
    let scale = GradeScale::canonical();

    let internal = internal_marks(&subject);
    assert_eq!(required_external_marks(&subject, &scale, internal), 56.0);
}

#[test]
fn practical_internal_marks_halve_cie_and_add_lab_and_quiz() {
    let subject = practical_subject();

    // best CIE is 40, halved to 20, plus lab 20 and quiz 4.
    assert_eq!(internal_marks(&subject), 44.0);
}

#[test]
fn practical_required_external_for_outstanding() {
    let subject = practical_subject();
    let scale = GradeScale::canonical();

    let internal = internal_marks(&subject);
    assert_eq!(required_external_marks(&subject, &scale, internal), 92.0);
}

#[test]
fn required_external_clamps_to_hundred_when_out_of_reach() {
    let subject = Subject {
        lecture_credits: 3,
        practical_credits: 2,
        cie1: 20.0,
        cie2: 20.0,
        lab_marks: 5.0,
        quiz_marks: 2.0,
        estimated_grade: GradeLabel::O,
        ..Subject::default()
    };
    let scale = GradeScale::canonical();

    let internal = internal_marks(&subject);
    assert_eq!(internal, 17.0);
    // 2 * (90 - 17) = 146, clamped.
    assert_eq!(required_external_marks(&subject, &scale, internal), 100.0);
}

#[test]
fn required_external_clamps_to_zero_when_already_met() {
    let subject = Subject {
        estimated_grade: GradeLabel::P,
        ..theory_subject()
    };
    let scale = GradeScale::canonical();

    // Internal marks of 42 already clear the 40-mark threshold for P.
    assert_eq!(required_external_marks(&subject, &scale, 42.0), 0.0);
}

#[test]
fn required_external_stays_in_range_for_every_label() {
    let scale = GradeScale::canonical();
    let subject = theory_subject();

    for band in scale.bands() {
        let subject = Subject {
            estimated_grade: band.label,
            ..subject.clone()
        };
        for internal in [-100.0, 0.0, 17.0, 42.0, 50.0, 500.0] {
            let required = required_external_marks(&subject, &scale, internal);
            assert!((0.0..=100.0).contains(&required), "out of range for {}", band.label);
        }
    }
}

#[test]
fn low_credit_subject_passes_aggregate_score_through() {
    let subject = Subject {
        lecture_credits: 1,
        tutorial_credits: 1,
        total_internal_marks: 37.0,
        // CIE fields must not leak into the low-credit variant.
        cie1: 40.0,
        cie2: 40.0,
        internal_assessment: 10.0,
        ..Subject::default()
    };

    assert_eq!(total_credits(&subject), 2);
    assert_eq!(internal_marks(&subject), 37.0);
}

#[test]
fn internal_marks_defensively_clamp_out_of_range_inputs() {
    let subject = Subject {
        lecture_credits: 3,
        tutorial_credits: 1,
        cie1: 400.0,
        cie2: 400.0,
        internal_assessment: 50.0,
        ..Subject::default()
    };

    // Raw fields way past their ranges still cap at the 0-50 result range.
    assert_eq!(internal_marks(&subject), 50.0);

    let negative = Subject {
        lecture_credits: 3,
        tutorial_credits: 1,
        cie1: -10.0,
        cie2: -10.0,
        internal_assessment: -5.0,
        ..Subject::default()
    };
    assert_eq!(internal_marks(&negative), 0.0);
}

#[test]
fn weighted_average_is_credit_weighted() {
    let scale = GradeScale::canonical();
    let subjects = vec![
        Subject {
            lecture_credits: 4,
            estimated_grade: GradeLabel::O,
            ..Subject::default()
        },
        Subject {
            lecture_credits: 3,
            estimated_grade: GradeLabel::B,
            ..Subject::default()
        },
    ];

    // (4*10 + 3*6) / 7 = 58/7.
    let sgpa = weighted_average(&subjects, &scale);
    assert_eq!(round2(sgpa), 8.29);
}

#[test]
fn weighted_average_of_empty_list_is_zero() {
    let scale = GradeScale::canonical();
    assert_eq!(weighted_average(&[], &scale), 0.0);
}

#[test]
fn weighted_average_of_single_subject_equals_its_points() {
    let scale = GradeScale::canonical();
    for credits in 1..=4u8 {
        let subject = Subject {
            lecture_credits: credits,
            estimated_grade: GradeLabel::BPlus,
            ..Subject::default()
        };
        assert_eq!(weighted_average(std::slice::from_ref(&subject), &scale), 7.0);
    }
}

#[test]
fn weighted_average_is_zero_when_credits_sum_to_zero() {
    let scale = GradeScale::canonical();
    let subjects = vec![Subject::default()];
    assert_eq!(weighted_average(&subjects, &scale), 0.0);
}

#[test]
fn weighted_average_skips_labels_missing_from_the_scale() {
    // A scale with no F band: the failing subject contributes nothing.
    let scale = GradeScale::from_bands(
        GradeScale::canonical()
            .bands()
            .iter()
            .filter(|band| band.label != GradeLabel::F)
            .copied()
            .collect(),
    );
    let subjects = vec![
        Subject {
            lecture_credits: 3,
            estimated_grade: GradeLabel::A,
            ..Subject::default()
        },
        Subject {
            lecture_credits: 4,
            estimated_grade: GradeLabel::F,
            ..Subject::default()
        },
    ];

    assert_eq!(weighted_average(&subjects, &scale), 8.0);
}

#[test]
fn engine_functions_are_pure_and_idempotent() {
    let subject = practical_subject();
    let before = subject.clone();
    let scale = GradeScale::canonical();

    let first = internal_marks(&subject);
    let second = internal_marks(&subject);
    assert_eq!(first, second);

    let required_first = required_external_marks(&subject, &scale, first);
    let required_second = required_external_marks(&subject, &scale, second);
    assert_eq!(required_first, required_second);

    assert_eq!(subject, before);
}

#[test]
fn round2_rounds_for_display() {
    assert_eq!(round2(8.285714285714286), 8.29);
    assert_eq!(round2(8.284), 8.28);
    assert_eq!(round2(0.0), 0.0);
}
