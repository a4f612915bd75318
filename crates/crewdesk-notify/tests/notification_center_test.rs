//! End-to-end scenarios for the notification center engine.

use chrono::Utc;

use crewdesk_core::config::notifications::NotificationsConfig;
use crewdesk_core::types::NotificationId;
use crewdesk_entity::{NotificationBuilder, NotificationKind, NotificationPriority};
use crewdesk_notify::sample::sample_notifications;
use crewdesk_notify::{MainTab, NotificationCenter, NotificationStore, SubTab};

fn unread_messages(count: usize) -> NotificationStore {
    let items = (0..count)
        .map(|i| {
            NotificationBuilder::new(NotificationKind::Message)
                .id(format!("ntf-{i}"))
                .title(format!("Message {i}"))
                .build()
        })
        .collect();
    NotificationStore::from_records(items)
}

#[test]
fn test_mark_read_twice_equals_once() {
    let mut center = NotificationCenter::with_rows_per_page(unread_messages(3), 10);
    let id = NotificationId::new("ntf-1");

    center.mark_read(&id);
    let once = center.unread_total();
    center.mark_read(&id);
    assert_eq!(center.unread_total(), once);
}

#[test]
fn test_mark_all_read_is_total() {
    let mut center = NotificationCenter::with_rows_per_page(unread_messages(7), 10);
    center.mark_all_read();
    assert_eq!(center.unread_total(), 0);
    assert!(center.store().as_slice().iter().all(|n| n.is_read));
}

#[test]
fn test_page_stays_in_bounds_for_all_filter_combinations() {
    let store = NotificationStore::from_records(sample_notifications(Utc::now()));
    let mut center = NotificationCenter::with_rows_per_page(store, 3);
    center.last_page();

    for main in [MainTab::All, MainTab::Unread] {
        for sub in [SubTab::All, SubTab::Updates, SubTab::Actions, SubTab::System] {
            for search in ["", "invoice", "zzz-no-match"] {
                center.set_main_tab(main);
                center.set_sub_tab(sub);
                center.set_search(search);
                center.last_page();
                let page = center.current_page();
                assert!(page >= 1 && page <= center.total_pages());
                assert!(center.total_pages() >= 1);
            }
        }
    }
}

#[test]
fn test_action_required_alert_counts_in_both_buckets() {
    let store = NotificationStore::from_records(vec![
        NotificationBuilder::new(NotificationKind::Alert)
            .id("only")
            .title("Overdue invoice")
            .priority(NotificationPriority::ActionRequired)
            .build(),
    ]);
    let center = NotificationCenter::with_rows_per_page(store, 10);

    // One record, counted by two tabs: buckets overlap rather than
    // partition, and that behavior is load-bearing.
    assert_eq!(center.sub_tab_count(SubTab::Actions), 1);
    assert_eq!(center.sub_tab_count(SubTab::System), 1);
    assert_eq!(center.sub_tab_count(SubTab::Updates), 0);
    assert_eq!(center.sub_tab_count(SubTab::All), 1);
}

#[test]
fn test_sub_tab_change_resets_to_page_one() {
    let mut center = NotificationCenter::with_rows_per_page(unread_messages(25), 10);
    center.next_page();
    center.next_page();
    assert_eq!(center.current_page(), 3);

    center.set_sub_tab(SubTab::Updates);
    assert_eq!(center.current_page(), 1);
}

#[test]
fn test_twelve_unread_pages_as_ten_plus_two() {
    let mut center = NotificationCenter::with_rows_per_page(unread_messages(12), 10);

    assert_eq!(center.total_pages(), 2);
    let page1 = center.visible_page();
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.items[0].id.as_str(), "ntf-0");
    assert_eq!(page1.items[9].id.as_str(), "ntf-9");
    assert!(page1.has_next);

    center.next_page();
    let page2 = center.visible_page();
    assert_eq!(center.current_page(), 2);
    assert_eq!(page2.items.len(), 2);
    assert_eq!(page2.items[0].id.as_str(), "ntf-10");
    assert_eq!(page2.items[1].id.as_str(), "ntf-11");

    center.next_page();
    assert_eq!(center.current_page(), 2);
}

#[test]
fn test_search_without_match_yields_empty_page() {
    let store = NotificationStore::from_records(vec![
        NotificationBuilder::new(NotificationKind::Message)
            .id("m1")
            .title("Gate code update")
            .description("Use the side entrance")
            .build(),
    ]);
    let mut center = NotificationCenter::with_rows_per_page(store, 10);
    center.set_search("Wheeler");

    let page = center.visible_page();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_delete_updates_every_count_immediately() {
    let store = NotificationStore::from_records(sample_notifications(Utc::now()));
    let mut center = NotificationCenter::with_rows_per_page(store, 10);

    let before = center.tab_counts();
    // ntf-004 is an unread action-required alert: system + actions.
    assert!(center.remove(&NotificationId::new("ntf-004")));
    let after = center.tab_counts();

    assert_eq!(after.all, before.all - 1);
    assert_eq!(after.system, before.system - 1);
    assert_eq!(after.actions, before.actions - 1);
    assert_eq!(after.updates, before.updates);
}

#[test]
fn test_unread_tab_hides_records_marked_read() {
    let store = NotificationStore::from_records(sample_notifications(Utc::now()));
    let mut center = NotificationCenter::with_rows_per_page(store, 10);
    center.set_main_tab(MainTab::Unread);

    let before = center.visible_page().total_items;
    center.mark_read(&NotificationId::new("ntf-002"));
    assert_eq!(center.visible_page().total_items, before - 1);
}

#[test]
fn test_config_drives_page_size() {
    let config = NotificationsConfig::default();
    let center = NotificationCenter::new(unread_messages(12), &config);
    assert_eq!(center.total_pages(), 2);
}

#[test]
fn test_click_marks_read_before_navigation() {
    let store = NotificationStore::from_records(sample_notifications(Utc::now()));
    let mut center = NotificationCenter::with_rows_per_page(store, 10);
    let id = NotificationId::new("ntf-001");

    let link = center.click(&id);
    let record = center.store().get(&id).expect("still present");
    assert!(record.is_read, "record must be read by the time the router runs");
    assert_eq!(link.expect("has action").url, "/jobs/2291");
}
