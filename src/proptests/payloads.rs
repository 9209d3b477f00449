// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use proptest::test_runner::Config;
use proptest::{prop_assert, prop_assert_eq, proptest};

use crate::property::{to_submission_payload, Property, PropertyKind, PropertyType, PropertyValue};
use crate::proptests::strategies::id_strategy;

proptest! {
    #![proptest_config(Config::with_cases(200))]
    #[test]
    /// Client generated ids and the "new" sentinel never reach the server.
    fn payload_never_carries_client_ids(id in id_strategy()) {
        let property_type = Arc::new(PropertyType::new("1".into(), "Name", PropertyKind::String));
        let property =
            Property::new(id.clone(), property_type, PropertyValue::String(None)).unwrap();

        let payload = to_submission_payload(&[property]);
        let json = serde_json::to_value(&payload[0]).unwrap();

        if id.is_temporary() || id.is_sentinel() {
            prop_assert!(json.get("id").is_none());
        } else {
            prop_assert_eq!(json["id"].as_str(), Some(id.as_str()));
        }
    }
}
