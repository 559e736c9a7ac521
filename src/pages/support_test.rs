use super::*;

fn ticket(id: &str, status: &str) -> Ticket {
    Ticket {
        id: id.to_owned(),
        customer_id: "c1".to_owned(),
        subject: "Cannot sign in".to_owned(),
        description: String::new(),
        status: status.to_owned(),
        priority: None,
        created_at: None,
        comments: Vec::new(),
    }
}

#[test]
fn closed_status_is_case_insensitive() {
    assert!(is_closed(&ticket("t1", "Closed")));
    assert!(is_closed(&ticket("t2", "CLOSED")));
    assert!(!is_closed(&ticket("t3", "Open")));
    assert!(!is_closed(&ticket("t4", "Pending")));
}

#[test]
fn replace_ticket_swaps_the_matching_row() {
    let mut list = vec![ticket("t1", "Open"), ticket("t2", "Open")];
    replace_ticket(&mut list, ticket("t1", "Closed"));
    assert_eq!(list[0].status, "Closed");
    assert_eq!(list[1].status, "Open");
}
