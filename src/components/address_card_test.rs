use super::*;

fn entry() -> AddressEntry {
    AddressEntry {
        id: "a1".to_owned(),
        label: "Home".to_owned(),
        recipient: "Avery Quinn".to_owned(),
        line1: "12 Market Lane".to_owned(),
        line2: None,
        city: "Portsmouth".to_owned(),
        postal_code: "PO1 2AB".to_owned(),
        phone: None,
    }
}

#[test]
fn format_address_line_without_second_line() {
    assert_eq!(
        format_address_line(&entry()),
        "Avery Quinn, 12 Market Lane, Portsmouth PO1 2AB"
    );
}

#[test]
fn format_address_line_includes_second_line_when_present() {
    let mut entry = entry();
    entry.line2 = Some("Flat 3".to_owned());
    assert_eq!(
        format_address_line(&entry),
        "Avery Quinn, 12 Market Lane, Flat 3, Portsmouth PO1 2AB"
    );
}
