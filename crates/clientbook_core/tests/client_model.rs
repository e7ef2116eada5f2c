use clientbook_core::Client;
use serde_json::json;

#[test]
fn client_serializes_with_lowercase_field_names() {
    let client = Client::new("Test", "Test", "19700101", "mail@mail.com").with_id(3);

    let value = serde_json::to_value(&client).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 3,
            "fio": "Test",
            "login": "Test",
            "birthday": "19700101",
            "email": "mail@mail.com"
        })
    );
}

#[test]
fn client_deserializes_from_external_shape() {
    let value = json!({
        "id": 0,
        "fio": "Petrov Petr",
        "login": "petrov",
        "birthday": "19851231",
        "email": "petrov@example.com"
    });

    let client: Client = serde_json::from_value(value).unwrap();
    assert!(!client.is_persisted());
    assert_eq!(client.login, "petrov");
}
