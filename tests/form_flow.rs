//! Headless end-to-end checks of the form state machine: drag gestures,
//! skill submission, and dialog lifecycles, driven purely through
//! `FormState`.

use cvforge::form::{
    DialogKind, FormConfig, FormState, Placement, SectionContent, SectionKind,
};

fn placement(form: &FormState, kind: SectionKind) -> Placement {
    form.section(kind).read().unwrap().placement
}

fn skills(form: &FormState) -> Vec<String> {
    let s = form.section(SectionKind::Skills).read().unwrap();
    match &s.content {
        SectionContent::SkillList { entries, .. } => entries.clone(),
        _ => unreachable!(),
    }
}

#[test]
fn gesture_log_replays_to_the_expected_position() {
    // press on the header at absolute (50,60) while its origin is (10,10)
    let mut form = FormState::new(FormConfig::default());
    form.begin_drag(SectionKind::Header, 40, 50);

    form.drag_to(SectionKind::Header, 120, 90);
    assert_eq!(
        placement(&form, SectionKind::Header),
        Placement::Pinned { x: 80, y: 40 }
    );

    form.drag_to(SectionKind::Header, 130, 100);
    assert_eq!(
        placement(&form, SectionKind::Header),
        Placement::Pinned { x: 90, y: 50 }
    );

    form.end_drag(SectionKind::Header);
    assert_eq!(
        placement(&form, SectionKind::Header),
        Placement::Pinned { x: 90, y: 50 }
    );
}

#[test]
fn concurrent_gestures_on_different_sections_stay_independent() {
    let mut form = FormState::new(FormConfig::default());
    form.begin_drag(SectionKind::Header, 1, 1);
    form.begin_drag(SectionKind::Skills, 8, 2);

    // interleaved move samples
    form.drag_to(SectionKind::Header, 10, 10);
    form.drag_to(SectionKind::Skills, 40, 30);
    form.drag_to(SectionKind::Header, 12, 14);

    assert_eq!(
        placement(&form, SectionKind::Header),
        Placement::Pinned { x: 11, y: 13 }
    );
    assert_eq!(
        placement(&form, SectionKind::Skills),
        Placement::Pinned { x: 32, y: 28 }
    );
    assert_eq!(placement(&form, SectionKind::Experience), Placement::Flow);

    form.end_all_drags();
    assert_eq!(form.active_drag(), None);
}

#[test]
fn n_submissions_yield_n_entries_in_order() {
    let mut form = FormState::new(FormConfig::default());
    form.focus_main(SectionKind::Skills, 0);
    let expected: Vec<String> = (1..=5).map(|i| format!("skill-{i}")).collect();
    for skill in &expected {
        for ch in skill.chars() {
            form.insert_char(ch);
        }
        assert!(form.add_skill());
    }
    assert_eq!(skills(&form), expected);
}

#[test]
fn dialogs_capture_without_writing_back() {
    let mut form = FormState::new(FormConfig::default());

    // fill some visible state first
    form.focus_main(SectionKind::Header, 1);
    for ch in "a@b.c".chars() {
        form.insert_char(ch);
    }
    form.focus_main(SectionKind::Skills, 0);
    for ch in "Rust".chars() {
        form.insert_char(ch);
    }
    form.add_skill();

    let experience = form.open_dialog(DialogKind::Experience);
    let education = form.open_dialog(DialogKind::Education);
    assert_eq!(form.dialogs.len(), 2);

    for ch in "Example Corp".chars() {
        form.insert_char(ch); // lands in the education dialog, the topmost
    }
    form.focus_dialog(experience, 2);
    for ch in "3 years".chars() {
        form.insert_char(ch);
    }

    form.close_dialog(education);
    form.close_dialog(experience);
    assert!(form.dialogs.is_empty());

    // nothing leaked into the main sections
    let header = form.section(SectionKind::Header).read().unwrap();
    let SectionContent::Fields(fields) = &header.content else {
        unreachable!()
    };
    assert_eq!(fields[0].value(), "");
    assert_eq!(fields[1].value(), "a@b.c");
    assert_eq!(fields[2].value(), "");
    drop(header);
    assert_eq!(skills(&form), ["Rust"]);
}

#[test]
fn dragging_works_while_a_dialog_is_open() {
    let mut form = FormState::new(FormConfig::default());
    form.open_dialog(DialogKind::Education);

    form.begin_drag(SectionKind::Education, 2, 0);
    form.drag_to(SectionKind::Education, 22, 5);
    form.end_all_drags();

    assert_eq!(
        placement(&form, SectionKind::Education),
        Placement::Pinned { x: 20, y: 5 }
    );
    assert_eq!(form.dialogs.len(), 1);
}
