use free_food_bot::dialogue::{CallbackTag, Event, SubmissionState};
use free_food_bot::draft::{Draft, DraftField, PhotoRef};
use free_food_bot::renderer::render;
use free_food_bot::state_machine::{apply, Effect, NextState, Transition};

const ALL_STATES: [SubmissionState; 10] = [
    SubmissionState::AskLocation,
    SubmissionState::AskClearTime,
    SubmissionState::AskAdditionalInfo,
    SubmissionState::AskPhoto,
    SubmissionState::Confirmation,
    SubmissionState::EditChoice,
    SubmissionState::EditLocation,
    SubmissionState::EditClearTime,
    SubmissionState::EditAdditionalInfo,
    SubmissionState::EditPhoto,
];

fn complete_draft() -> Draft {
    Draft {
        location: "Arc B2".to_string(),
        clear_time: "2pm".to_string(),
        additional_info: "halal only".to_string(),
        photo: Some(PhotoRef::new("photo-1")),
    }
}

/// Drive a sequence of events from `AskLocation`, returning the final state
fn run(events: Vec<Event>, draft: &mut Draft) -> SubmissionState {
    let mut state = SubmissionState::AskLocation;
    for event in events {
        if let NextState::Go(next) = apply(state, event, draft).next {
            state = next;
        }
    }
    state
}

#[test]
fn test_main_flow_keeps_latest_texts() {
    let inputs = [
        ("Arc B2", "2pm", "halal only"),
        ("  SPMS foyer ", "Until 6pm", "bring a container"),
        ("North Spine", "asap", "vegetarian"),
    ];

    for (location, clear_time, info) in inputs {
        let mut draft = Draft::default();
        let state = run(
            vec![
                Event::Text(location.to_string()),
                Event::Text(clear_time.to_string()),
                Event::Text(info.to_string()),
                Event::Photo(PhotoRef::new("photo")),
            ],
            &mut draft,
        );

        assert_eq!(state, SubmissionState::Confirmation);
        assert_eq!(draft.location, location.trim());
        assert_eq!(draft.clear_time, clear_time.trim());
        assert_eq!(draft.additional_info, info.trim());
        assert!(draft.is_complete());
    }
}

#[test]
fn test_skip_sets_empty_additional_info() {
    let mut draft = Draft::default();
    let state = run(
        vec![
            Event::Text("Arc B2".to_string()),
            Event::Text("2pm".to_string()),
            Event::Button(CallbackTag::SkipAdditionalInfo),
        ],
        &mut draft,
    );
    assert_eq!(state, SubmissionState::AskPhoto);
    assert_eq!(draft.additional_info, "");
}

#[test]
fn test_wrong_kind_never_mutates_draft() {
    let wrong_inputs = [
        (SubmissionState::AskLocation, Event::Photo(PhotoRef::new("x"))),
        (SubmissionState::AskClearTime, Event::OtherMessage),
        (SubmissionState::AskAdditionalInfo, Event::Photo(PhotoRef::new("x"))),
        (SubmissionState::AskPhoto, Event::Text("photo".to_string())),
        (SubmissionState::Confirmation, Event::Text("yes".to_string())),
        (SubmissionState::EditChoice, Event::Photo(PhotoRef::new("x"))),
        (SubmissionState::EditLocation, Event::Button(CallbackTag::Submit)),
        (SubmissionState::EditPhoto, Event::OtherMessage),
    ];

    for (state, event) in wrong_inputs {
        let mut draft = complete_draft();
        let transition = apply(state, event, &mut draft);
        assert_eq!(transition, Transition::reprompt(state), "state {state:?}");
        assert_eq!(draft, complete_draft());
    }
}

#[test]
fn test_edit_choice_only_reachable_from_confirmation() {
    for state in ALL_STATES {
        let mut draft = complete_draft();
        let transition = apply(state, Event::Button(CallbackTag::Edit), &mut draft);
        if state == SubmissionState::Confirmation {
            assert_eq!(transition.next, NextState::Go(SubmissionState::EditChoice));
        } else {
            assert_ne!(
                transition.next,
                NextState::Go(SubmissionState::EditChoice),
                "state {state:?}"
            );
        }
    }
}

#[test]
fn test_publish_only_from_confirmation() {
    for state in ALL_STATES {
        let mut draft = complete_draft();
        let transition = apply(state, Event::Button(CallbackTag::Submit), &mut draft);
        assert_eq!(
            transition.effect == Effect::Publish,
            state == SubmissionState::Confirmation,
            "state {state:?}"
        );
    }
}

#[test]
fn test_submit_resets_from_every_state() {
    for state in ALL_STATES {
        let mut draft = complete_draft();
        let transition = apply(state, Event::Submit, &mut draft);
        assert_eq!(
            transition,
            Transition::go(
                SubmissionState::AskLocation,
                Effect::Ask(DraftField::Location)
            )
        );
        assert_eq!(draft, Draft::default());
    }
}

#[test]
fn test_each_edit_changes_only_its_field() {
    let edits = [
        (CallbackTag::EditLocation, Event::Text("Hall 2".to_string())),
        (CallbackTag::EditClearTime, Event::Text("3pm".to_string())),
        (CallbackTag::EditAdditionalInfo, Event::Text("no pork".to_string())),
        (CallbackTag::EditPhoto, Event::Photo(PhotoRef::new("photo-2"))),
    ];

    for (tag, replacement) in edits {
        let mut draft = complete_draft();
        let field = tag.edit_target().unwrap();

        let choose = apply(SubmissionState::EditChoice, Event::Button(tag), &mut draft);
        assert_eq!(choose.effect, Effect::AskReplacement(field));
        let NextState::Go(edit_state) = choose.next else {
            panic!("edit button should change state");
        };

        let done = apply(edit_state, replacement, &mut draft);
        assert_eq!(done, Transition::back_to_confirmation());

        let original = complete_draft();
        assert_eq!(draft.location != original.location, field == DraftField::Location);
        assert_eq!(draft.clear_time != original.clear_time, field == DraftField::ClearTime);
        assert_eq!(
            draft.additional_info != original.additional_info,
            field == DraftField::AdditionalInfo
        );
        assert_eq!(draft.photo != original.photo, field == DraftField::Photo);
    }
}

#[test]
fn test_preview_after_edit_matches_render() {
    let mut draft = complete_draft();
    apply(
        SubmissionState::EditClearTime,
        Event::Text("4pm".to_string()),
        &mut draft,
    );
    assert_eq!(
        render(&draft),
        "Location: Arc B2\nClear Time: 4pm\nAdditional Info: halal only\n"
    );
}

#[test]
fn test_blank_required_text_does_not_advance() {
    let blanks = ["   ", "\u{a0}", "\u{3000}\u{3000}", "\t\n"];
    let required_states = [
        SubmissionState::AskLocation,
        SubmissionState::AskClearTime,
        SubmissionState::EditLocation,
        SubmissionState::EditClearTime,
    ];

    for state in required_states {
        for blank in blanks {
            let mut draft = complete_draft();
            let transition = apply(state, Event::Text(blank.to_string()), &mut draft);
            assert_eq!(transition, Transition::reprompt(state), "state {state:?}");
            assert_eq!(draft, complete_draft());
        }
    }
}

#[test]
fn test_blank_additional_info_still_advances() {
    let mut draft = complete_draft();
    let transition = apply(
        SubmissionState::EditAdditionalInfo,
        Event::Text("  ".to_string()),
        &mut draft,
    );
    assert_eq!(transition, Transition::back_to_confirmation());
    assert_eq!(draft.additional_info, "");
    assert!(draft.is_complete());
}

#[test]
fn test_confirmation_only_reached_with_complete_draft() {
    let mut draft = Draft::default();
    let state = run(
        vec![
            Event::Text("   ".to_string()),
            Event::Text("2pm".to_string()),
            Event::Button(CallbackTag::SkipAdditionalInfo),
            Event::Photo(PhotoRef::new("p")),
        ],
        &mut draft,
    );

    assert_eq!(state, SubmissionState::AskClearTime);
    assert_eq!(draft.location, "2pm");
    assert!(!draft.is_complete());
}
