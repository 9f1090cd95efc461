use super::*;

#[test]
fn status_patch_carries_wire_value() {
    let patch = status_patch(OrderStatus::Shipped);
    assert_eq!(patch, serde_json::json!({ "status": "shipped" }));
}

#[test]
fn status_patch_pending_value() {
    let patch = status_patch(OrderStatus::Pending);
    assert_eq!(patch["status"], "pending");
}
