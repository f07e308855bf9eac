use std::sync::{Arc, Mutex};

use super::*;
use crate::components::capabilities::ComponentSet;
use crate::state::address_review::{
    DEFAULT_WARNING_MESSAGE, DEFAULT_WARNING_TITLE, ENTERED_LABEL, SUGGESTED_LABEL,
};
use crate::state::selection::{SelectionOutcome, select_option};

fn entered() -> Address {
    Address::new().with_field("address1", "1 Main").with_field("city", "Springfield")
}

fn suggested() -> Address {
    Address::new().with_field("address1", "1 Main St").with_field("city", "Springfield")
}

fn recorder() -> (Arc<Mutex<Vec<Address>>>, Callback<Address>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, Callback::new(move |record: Address| sink.lock().unwrap().push(record)))
}

fn review(initial: AddressChoice) -> (Arc<Mutex<Vec<Address>>>, AddressReviewHandle) {
    let (calls, on_submit) = recorder();
    let handle = AddressReviewHandle::new(
        Signal::stored(entered()),
        Signal::stored(suggested()),
        initial,
        Some(on_submit),
    );
    (calls, handle)
}

// =============================================================
// Imperative submit
// =============================================================

#[test]
fn submit_with_default_choice_sends_suggested() {
    Owner::new().with(|| {
        let (calls, handle) = review(AddressChoice::default());
        handle.submit();
        assert_eq!(*calls.lock().unwrap(), vec![suggested()]);
    });
}

#[test]
fn submit_with_entered_choice_sends_entered_once() {
    Owner::new().with(|| {
        let (calls, handle) = review(AddressChoice::Entered);
        handle.submit();
        assert_eq!(*calls.lock().unwrap(), vec![entered()]);
    });
}

#[test]
fn selected_reports_form_choice() {
    Owner::new().with(|| {
        let (_, handle) = review(AddressChoice::Entered);
        assert_eq!(handle.selected(), Ok(AddressChoice::Entered));
    });
}

#[test]
fn submit_follows_user_selection() {
    Owner::new().with(|| {
        let (calls, handle) = review(AddressChoice::Suggested);
        let outcome = select_option(handle.form(), FIELD_NAME, "entered", false);
        assert_eq!(outcome, SelectionOutcome::Changed("entered".to_owned()));

        handle.submit();

        assert_eq!(*calls.lock().unwrap(), vec![entered()]);
    });
}

#[test]
fn submit_matches_native_form_submit() {
    Owner::new().with(|| {
        let (imperative_calls, imperative) = review(AddressChoice::Entered);
        let (native_calls, native) = review(AddressChoice::Entered);

        imperative.submit();
        assert!(native.form().submit());

        assert_eq!(*imperative_calls.lock().unwrap(), *native_calls.lock().unwrap());
    });
}

#[test]
fn submit_reads_current_records() {
    Owner::new().with(|| {
        let (calls, on_submit) = recorder();
        let entered_signal = RwSignal::new(entered());
        let handle = AddressReviewHandle::new(
            entered_signal.into(),
            Signal::stored(suggested()),
            AddressChoice::Entered,
            Some(on_submit),
        );
        let updated = entered().with_field("postal", "62701");
        entered_signal.set(updated.clone());

        handle.submit();

        assert_eq!(*calls.lock().unwrap(), vec![updated]);
    });
}

// =============================================================
// Saving and invalid tokens
// =============================================================

#[test]
fn selection_while_saving_neither_changes_nor_submits() {
    Owner::new().with(|| {
        let (calls, handle) = review(AddressChoice::Suggested);

        let outcome = select_option(handle.form(), FIELD_NAME, "entered", true);

        assert_eq!(outcome, SelectionOutcome::Rejected);
        assert_eq!(handle.selected(), Ok(AddressChoice::Suggested));
        assert!(calls.lock().unwrap().is_empty());
    });
}

#[test]
fn unrecognized_token_submits_nothing() {
    Owner::new().with(|| {
        let (calls, handle) = review(AddressChoice::Entered);
        handle.form().set_field(FIELD_NAME, "both");

        handle.submit();

        assert!(calls.lock().unwrap().is_empty());
        assert!(handle.selected().is_err());
    });
}

#[test]
fn submit_without_callback_is_harmless() {
    Owner::new().with(|| {
        let handle = AddressReviewHandle::new(
            Signal::stored(entered()),
            Signal::stored(suggested()),
            AddressChoice::Entered,
            None,
        );
        handle.submit();
        assert_eq!(handle.selected(), Ok(AddressChoice::Entered));
    });
}

// =============================================================
// Component wiring
// =============================================================

/// What the component handed to the list capability.
struct ListParts {
    form: FormHandle,
    is_read_only: Signal<bool>,
    on_change: Option<Callback<String>>,
    option_values: Vec<String>,
}

/// Records the props the component passes to its capabilities instead of
/// rendering them.
#[derive(Clone, Default)]
struct Recording {
    address_flags: Arc<Mutex<Vec<(Address, BTreeSet<String>)>>>,
    alert: Arc<Mutex<Option<(AlertType, String, String)>>>,
    list: Arc<Mutex<Option<ListParts>>>,
}

impl ComponentSet for Recording {
    fn address(&self, props: AddressProps) -> AnyView {
        let record = (props.address.get_untracked(), props.invalid_fields.get_untracked());
        self.address_flags.lock().unwrap().push(record);
        ().into_any()
    }

    fn inline_alert(&self, props: InlineAlertProps) -> AnyView {
        *self.alert.lock().unwrap() = Some((props.alert_type, props.title, props.message));
        ().into_any()
    }

    fn selectable_list(&self, props: SelectableListProps) -> AnyView {
        *self.list.lock().unwrap() = Some(ListParts {
            form: props.form,
            is_read_only: props.is_read_only,
            on_change: props.on_change,
            option_values: props.options.into_iter().map(|option| option.value).collect(),
        });
        ().into_any()
    }
}

fn mount_recorded(
    value: Signal<AddressChoice>,
    is_saving: Signal<bool>,
    on_change: Callback<AddressChoice>,
) -> Recording {
    let recording = Recording::default();
    let components = Components::new(recording.clone());
    let _view = view! {
        <AddressReview
            address_entered=entered()
            address_suggestion=suggested()
            value=value
            is_saving=is_saving
            on_change=on_change
            components=components
        />
    };
    recording
}

fn change_recorder() -> (Arc<Mutex<Vec<AddressChoice>>>, Callback<AddressChoice>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, Callback::new(move |choice: AddressChoice| sink.lock().unwrap().push(choice)))
}

#[test]
fn only_entered_address_carries_invalid_fields() {
    Owner::new().with(|| {
        let (_, on_change) = change_recorder();
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Suggested), Signal::stored(false), on_change);

        let flags = recording.address_flags.lock().unwrap();
        let expected = BTreeSet::from(["address1".to_owned()]);
        assert_eq!(*flags, vec![(entered(), expected), (suggested(), BTreeSet::new())]);
    });
}

#[test]
fn options_are_entered_then_suggested() {
    Owner::new().with(|| {
        let (_, on_change) = change_recorder();
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Suggested), Signal::stored(false), on_change);

        let list = recording.list.lock().unwrap();
        let values = &list.as_ref().unwrap().option_values;
        assert_eq!(*values, vec!["entered".to_owned(), "suggested".to_owned()]);
    });
}

#[test]
fn warning_alert_uses_default_copy() {
    Owner::new().with(|| {
        let (_, on_change) = change_recorder();
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Suggested), Signal::stored(false), on_change);

        assert_eq!(
            *recording.alert.lock().unwrap(),
            Some((
                AlertType::Warning,
                DEFAULT_WARNING_TITLE.to_owned(),
                DEFAULT_WARNING_MESSAGE.to_owned()
            ))
        );
    });
}

#[test]
fn host_value_seeds_the_form() {
    Owner::new().with(|| {
        let (_, on_change) = change_recorder();
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Entered), Signal::stored(false), on_change);

        let list = recording.list.lock().unwrap();
        let form = list.as_ref().unwrap().form;
        assert_eq!(form.field_untracked(FIELD_NAME).as_deref(), Some("entered"));
    });
}

#[test]
fn saving_flag_reaches_the_list() {
    Owner::new().with(|| {
        let (_, on_change) = change_recorder();
        let saving = RwSignal::new(false);
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Suggested), saving.into(), on_change);

        let list = recording.list.lock().unwrap();
        let is_read_only = list.as_ref().unwrap().is_read_only;
        assert!(!is_read_only.get_untracked());
        saving.set(true);
        assert!(is_read_only.get_untracked());
    });
}

#[test]
fn user_selection_reaches_host_on_change() {
    Owner::new().with(|| {
        let (changes, on_change) = change_recorder();
        let recording =
            mount_recorded(Signal::stored(AddressChoice::Suggested), Signal::stored(false), on_change);

        let list = recording.list.lock().unwrap();
        let parts = list.as_ref().unwrap();
        let outcome = select_option(parts.form, FIELD_NAME, "entered", false);
        if let SelectionOutcome::Changed(token) = outcome {
            parts.on_change.unwrap().run(token);
        }

        assert_eq!(*changes.lock().unwrap(), vec![AddressChoice::Entered]);
        assert_eq!(parts.form.field_untracked(FIELD_NAME).as_deref(), Some("entered"));
    });
}

#[test]
fn unknown_list_value_is_not_forwarded() {
    Owner::new().with(|| {
        let (changes, on_change) = change_recorder();
        forward_choice(Some(on_change)).run("both".to_owned());
        assert!(changes.lock().unwrap().is_empty());
    });
}

#[test]
fn host_choice_sync_writes_form_field() {
    Owner::new().with(|| {
        let (_, handle) = review(AddressChoice::Suggested);
        handle.sync_choice(AddressChoice::Entered);
        assert_eq!(handle.selected(), Ok(AddressChoice::Entered));
        handle.sync_choice(AddressChoice::Suggested);
        assert_eq!(handle.selected(), Ok(AddressChoice::Suggested));
    });
}

// =============================================================
// Rendered markup
// =============================================================

#[test]
fn rendered_review_flags_only_entered_fields() {
    Owner::new().with(|| {
        let html = view! {
            <AddressReview address_entered=entered() address_suggestion=suggested()/>
        }
        .to_html();

        assert_eq!(html.matches("address__field--invalid").count(), 1, "{html}");
        let flagged = html.find("address__field--invalid").unwrap();
        let suggested_label = html.find(SUGGESTED_LABEL).unwrap();
        assert!(flagged < suggested_label, "{html}");
    });
}

#[test]
fn rendered_review_always_shows_warning() {
    Owner::new().with(|| {
        let html = view! {
            <AddressReview address_entered=entered() address_suggestion=entered()/>
        }
        .to_html();

        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(html.contains(DEFAULT_WARNING_TITLE), "{html}");
        assert!(!html.contains("address__field--invalid"), "{html}");
    });
}

#[test]
fn rendered_review_uses_overridden_copy() {
    Owner::new().with(|| {
        let html = view! {
            <AddressReview
                address_entered=entered()
                address_suggestion=suggested()
                warning_title="Check your address"
                warning_message="We found a closer match"
            />
        }
        .to_html();

        assert!(html.contains("Check your address"), "{html}");
        assert!(html.contains("We found a closer match"), "{html}");
        assert!(!html.contains(DEFAULT_WARNING_TITLE), "{html}");
    });
}

#[test]
fn rendered_review_labels_precede_addresses() {
    Owner::new().with(|| {
        let html = view! {
            <AddressReview address_entered=entered() address_suggestion=suggested()/>
        }
        .to_html();

        let label = html.find(ENTERED_LABEL).unwrap();
        let street = html.find("1 Main").unwrap();
        assert!(label < street, "{html}");
    });
}
