use super::*;

fn form() -> ContactForm {
    ContactForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        company_name: "Analytical Engines".to_string(),
        email: "ada@example.com".to_string(),
        message: String::new(),
    }
}

#[test]
fn options_carry_fixed_charge_and_prefill() {
    let options = CheckoutOptions::for_contact(&form());
    assert_eq!(options.amount, 50000);
    assert_eq!(options.currency, "INR");
    assert_eq!(options.prefill.name, "Ada Lovelace");
    assert_eq!(options.prefill.email, "ada@example.com");
    assert!(options.prefill.contact.is_empty());
}

#[test]
fn options_serialize_to_widget_shape() {
    let value = serde_json::to_value(CheckoutOptions::for_contact(&form())).unwrap();
    assert_eq!(value["name"], "Webforger");
    assert_eq!(value["description"], "Service Payment");
    assert_eq!(value["image"], "/Webforger.png");
    assert_eq!(value["theme"]["color"], "#8b5cf6");
    assert_eq!(value["prefill"]["name"], "Ada Lovelace");
    assert!(value["key"].as_str().is_some_and(|key| !key.is_empty()));
    assert!(value.get("handler").is_none());
}
