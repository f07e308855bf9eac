use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Panel(u32);

#[test]
fn empty_ref_has_no_handle() {
    Owner::new().with(|| {
        let handle = ComponentRef::<Panel>::new();
        assert!(!handle.is_loaded());
                assert_eq!(handle.with(|panel| panel.0), None);
    });
}

#[test]
fn loaded_ref_forwards_to_handle() {
    Owner::new().with(|| {
        let handle = ComponentRef::<Panel>::new();
        handle.load(Panel(7));
        assert!(handle.is_loaded());
        assert_eq!(handle.with(Clone::clone), Some(Panel(7)));
        assert_eq!(handle.with(|panel| panel.0 * 2), Some(14));
    });
}

#[test]
fn copies_share_the_same_slot() {
    Owner::new().with(|| {
        let handle = ComponentRef::<Panel>::new();
        let copy = handle;
        copy.load(Panel(1));
        assert_eq!(handle.with(Clone::clone), Some(Panel(1)));
    });
}

#[test]
fn reload_replaces_handle() {
    Owner::new().with(|| {
        let handle = ComponentRef::<Panel>::default();
        handle.load(Panel(1));
        handle.load(Panel(2));
        assert_eq!(handle.with(Clone::clone), Some(Panel(2)));
    });
}
