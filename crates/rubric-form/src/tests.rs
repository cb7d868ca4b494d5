//! Form Scenario Tests
//!
//! End-to-end behaviour of the editor as a page would drive it.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::{
        create_unique_name, format_option_label, Criterion, CriterionSelect, EditorConfig,
        EnglishCatalog, Feedback, HandlerEnv, IntField, Item, Notification, RecordingNotifier,
        RubricEditor, RubricOption, SiblingNames, TrainingExample,
    };

    fn recording_editor() -> (RubricEditor, Rc<RefCell<Vec<Notification>>>) {
        let editor = RubricEditor::new(EditorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        editor.subscribe(move |n| sink.borrow_mut().push(n.clone()));
        (editor, seen)
    }

    #[test]
    fn test_gap_and_full_sibling_sets() {
        let taken = ["0", "1", "3", "4"];
        assert_eq!(create_unique_name(&taken), "2");
        let taken = ["0", "1", "2"];
        assert_eq!(create_unique_name(&taken), "3");
    }

    #[test]
    fn test_points_boundaries() {
        let mut field = IntField::new(0, 999);
        field.set(0);
        assert!(field.validate());
        field.set(999);
        assert!(field.validate());
        field.set(-1);
        assert!(!field.validate());
        field.set(1000);
        assert!(!field.validate());
    }

    #[test]
    fn test_clear_twice_is_idempotent() {
        let notifier = RecordingNotifier::new();
        let env = HandlerEnv::new(&notifier, &EnglishCatalog);
        let mut criterion = Criterion::new(Feedback::Disabled, 0, 999);
        criterion.add_handler(&mut SiblingNames::new(), &env);
        criterion.add_option(&env).set_points(1000);
        criterion.validate();

        criterion.clear_validation_errors();
        assert!(criterion.validation_errors().is_empty());
        criterion.clear_validation_errors();
        assert!(criterion.validation_errors().is_empty());
    }

    #[test]
    fn test_criterion_round_trip() {
        let mut criterion = Criterion::new(Feedback::Disabled, 0, 999);
        criterion.set_label("Ideas");
        criterion.set_prompt("Is it original?");
        criterion.set_feedback(Feedback::Optional);

        let values = criterion.values();
        assert_eq!(values.label, "Ideas");
        assert_eq!(values.prompt, "Is it original?");
        assert_eq!(values.feedback, Feedback::Optional);
        assert!(values.options.is_empty());
    }

    #[test]
    fn test_empty_prompt_reported() {
        let mut criterion = Criterion::new(Feedback::Disabled, 0, 999);
        criterion.set_prompt("");
        assert!(!criterion.validate());
        assert!(criterion
            .validation_errors()
            .iter()
            .any(|e| e == "Criterion prompt is invalid."));
    }

    #[test]
    fn test_option_points_too_high() {
        let mut option = RubricOption::new(0, 999);
        option.set_points(1000);
        assert!(!option.validate());
        assert_eq!(option.validation_errors(), vec!["Option points are invalid".to_string()]);
    }

    #[test]
    fn test_option_names_reuse_gap() {
        let (mut editor, seen) = recording_editor();
        editor.add_criterion();
        assert_eq!(editor.add_option(0).expect("first"), "0");
        assert_eq!(editor.add_option(0).expect("second"), "1");

        editor.remove_option(0, 0).expect("remove 0");
        assert_eq!(editor.add_option(0).expect("third"), "0");

        let names: Vec<_> = seen.borrow().iter().map(Notification::event_name).collect();
        assert_eq!(names, vec!["optionAdd", "optionAdd", "optionRemove", "optionAdd"]);
        let options: Vec<_> = editor.criteria()[0]
            .options()
            .iter()
            .map(|o| o.name().map(str::to_string))
            .collect();
        assert_eq!(options, vec![Some("1".to_string()), Some("0".to_string())]);
    }

    #[test]
    fn test_unnamed_option_label() {
        assert_eq!(
            format_option_label(Some(5), "", "3", &EnglishCatalog),
            "Unnamed Option - 5 points"
        );
    }

    #[test]
    fn test_ai_label_updates_matching_menu_item() {
        let (mut editor, _) = recording_editor();
        for _ in 0..3 {
            editor.add_ai_pair().expect("pair");
        }
        editor
            .update_ai_example("2", |example| example.set_label("Foo"))
            .expect("example 2");
        editor.commit_ai_example("2").expect("commit");

        editor.ai_examples(|pairs| {
            for item in pairs.menu_items() {
                let expected = if item.name() == Some("2") { "Foo" } else { "" };
                assert_eq!(item.display(), expected);
            }
        });
    }

    #[test]
    fn test_unselected_dropdown() {
        let mut select = CriterionSelect::new("0", "Ideas");
        select.upsert_choice("0", "Poor", Some(0), &EnglishCatalog);
        let mut example = TrainingExample::new(vec![select]);

        assert!(!example.validate());
        assert!(example.selects()[0].is_marked());
        assert_eq!(example.validation_errors().len(), 1);
    }

    #[test]
    fn test_criterion_lifecycle_notifications() {
        let (mut editor, seen) = recording_editor();
        editor.add_criterion();
        editor.criterion_mut(0).expect("criterion").set_label("Form");
        editor.commit_criterion(0).expect("commit");
        editor.remove_criterion(0).expect("remove");

        assert_eq!(
            *seen.borrow(),
            vec![
                Notification::CriterionUpdated {
                    criterion_name: "0".to_string(),
                    criterion_label: "Form".to_string(),
                },
                Notification::CriterionRemove {
                    criterion_name: "0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_fields_written_before_notification() {
        let (mut editor, _) = recording_editor();
        editor.add_criterion();
        editor.add_option(0).expect("option");

        let observed = Rc::new(RefCell::new(None));
        let sink = observed.clone();
        editor.subscribe(move |n| {
            if let Notification::OptionUpdated { label, points, .. } = n {
                *sink.borrow_mut() = Some((label.clone(), *points));
            }
        });

        let option = editor
            .criterion_mut(0)
            .and_then(|c| c.option_mut(0))
            .expect("option");
        option.set_label("Excellent");
        option.set_points(7);
        editor.commit_option(0, 0).expect("commit");

        assert_eq!(*observed.borrow(), Some(("Excellent".to_string(), Some(7))));
    }
}
