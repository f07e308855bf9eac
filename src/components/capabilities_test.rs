use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Overrides only the expand icon and counts how often it is asked for.
#[derive(Default)]
struct CountingIcons {
    calls: Arc<AtomicUsize>,
}

impl ComponentSet for CountingIcons {
    fn icon_expand(&self) -> AnyView {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ().into_any()
    }
}

fn counting() -> (Arc<AtomicUsize>, Components) {
    let set = CountingIcons::default();
    let calls = Arc::clone(&set.calls);
    (calls, Components::new(set))
}

#[test]
fn explicit_set_wins_over_context() {
    Owner::new().with(|| {
        let (context_calls, context_set) = counting();
        let (explicit_calls, explicit_set) = counting();
        provide_components(context_set);

        use_components(Some(explicit_set)).icon_expand();

        assert_eq!(explicit_calls.load(Ordering::SeqCst), 1);
        assert_eq!(context_calls.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn context_set_is_used_without_explicit_one() {
    Owner::new().with(|| {
        let (calls, set) = counting();
        provide_components(set);

        use_components(None).icon_expand();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn context_reaches_child_owners() {
    Owner::new().with(|| {
        let (calls, set) = counting();
        provide_components(set);

        Owner::new().with(|| {
            use_components(None).icon_expand();
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn clones_share_one_set() {
    let (calls, set) = counting();
    let copy = set.clone();
    set.icon_expand();
    copy.icon_expand();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
