use super::*;

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(25, 10), 3);
    assert_eq!(page_count(30, 10), 3);
    assert_eq!(page_count(0, 10), 1);
}

#[test]
fn clamp_page_stays_in_range() {
    assert_eq!(clamp_page(0, 25, 10), 1);
    assert_eq!(clamp_page(2, 25, 10), 2);
    assert_eq!(clamp_page(9, 25, 10), 3);
}

#[test]
fn page_items_slices_the_requested_window() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(page_items(&items, 1, 10), (1..=10).collect::<Vec<_>>().as_slice());
    assert_eq!(page_items(&items, 3, 10), (21..=25).collect::<Vec<_>>().as_slice());
}

#[test]
fn page_items_clamps_out_of_range_pages() {
    let items: Vec<u32> = (1..=5).collect();
    assert_eq!(page_items(&items, 7, 10), items.as_slice());
}

#[test]
fn page_items_on_empty_list_is_empty() {
    let items: Vec<u32> = Vec::new();
    assert!(page_items(&items, 1, 10).is_empty());
}
