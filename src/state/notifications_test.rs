use super::*;

// =============================================================
// Push / dismiss
// =============================================================

#[test]
fn push_assigns_unique_ids_in_order() {
    let mut state = NotificationsState::default();
    let a = state.error("失敗", "one");
    let b = state.success("成功", "two");
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, a);
    assert_eq!(state.items[1].id, b);
}

#[test]
fn kinds_are_recorded() {
    let mut state = NotificationsState::default();
    state.success("成功", "ok");
    state.error("失敗", "no");
    assert_eq!(state.items[0].kind, NoticeKind::Success);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotificationsState::default();
    let a = state.error("失敗", "one");
    let b = state.error("失敗", "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismissing_unknown_id_is_a_noop() {
    let mut state = NotificationsState::default();
    state.error("失敗", "one");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotificationsState::default();
    let a = state.error("失敗", "one");
    state.dismiss(a);
    let b = state.error("失敗", "two");
    assert!(b > a);
}
