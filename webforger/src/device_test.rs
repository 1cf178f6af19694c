use super::*;

#[test]
fn widths_map_to_device_bands() {
    assert_eq!(DeviceType::from_width(0.0), DeviceType::Mobile);
    assert_eq!(DeviceType::from_width(767.9), DeviceType::Mobile);
    assert_eq!(DeviceType::from_width(768.0), DeviceType::Tablet);
    assert_eq!(DeviceType::from_width(1023.0), DeviceType::Tablet);
    assert_eq!(DeviceType::from_width(1024.0), DeviceType::Laptop);
}

#[test]
fn context_flags_match_device() {
    let phone = DeviceContext::from_width(390.0);
    assert_eq!(phone.device, DeviceType::Mobile);
    assert_eq!(phone.device.as_str(), "mobile");

    let laptop = DeviceContext::from_width(1440.0);
    assert_eq!(laptop.device, DeviceType::Laptop);
    assert_eq!(laptop.device.as_str(), "laptop");
}

#[test]
fn laptop_notice_includes_portrait_tablet_edge() {
    assert!(DeviceContext::from_width(390.0).wants_laptop_notice());
    assert!(DeviceContext::from_width(768.0).wants_laptop_notice());
    assert!(!DeviceContext::from_width(769.0).wants_laptop_notice());
    assert!(!DeviceContext::from_width(1440.0).wants_laptop_notice());
}
