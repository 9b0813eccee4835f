#![cfg(test)]

use crate::flag::Flag;

pub fn flag_from_json(json: &str) -> Flag {
    serde_json::from_str(json).expect("fixture should parse")
}

/// Enabled flag with one rule: a string/equals condition on `country`.
pub fn country_flag() -> Flag {
    flag_from_json(
        r#"{
            "id": "9a8bd2c3-41c8-47a0-8d52-a0b6e9f7d3c1",
            "userId": "u-1",
            "name": "new-dashboard",
            "description": "dashboard rewrite rollout",
            "createdOn": "2024-05-01T10:00:00Z",
            "updatedOn": "2024-05-01T10:00:00Z",
            "status": true,
            "rules": [
                {
                    "segment": {
                        "key": "us-users",
                        "conditions": [{
                            "key": "cond-country",
                            "context": "country",
                            "conditionType": "string",
                            "operator": "equals",
                            "value": "US"
                        }]
                    }
                }
            ]
        }"#,
    )
}

/// Enabled flag with one rule: a datetime/before condition on `signupDate`
/// with a 2025-01-01 cutoff.
pub fn signup_window_flag() -> Flag {
    flag_from_json(
        r#"{
            "id": "5b27c9f1-3b8a-4e0f-b5d8-2f1f0c9f6e2d",
            "userId": "u-1",
            "name": "early-adopters",
            "createdOn": "2024-05-01T10:00:00Z",
            "updatedOn": "2024-05-01T10:00:00Z",
            "status": true,
            "rules": [
                {
                    "segment": {
                        "key": "signup-window",
                        "conditions": [{
                            "key": "cond-signup",
                            "context": "signupDate",
                            "conditionType": "datetime",
                            "operator": "before",
                            "value": "2025-01-01"
                        }]
                    }
                }
            ]
        }"#,
    )
}
