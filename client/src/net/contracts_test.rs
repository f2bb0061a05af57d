use super::*;

#[test]
fn factory_constant_parses_as_an_address() {
    let addr = factory_address();
    assert_eq!(addr.as_str(), CROWDFUNDING_FACTORY);
}
