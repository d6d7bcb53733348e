use serde_json::Value;

/// Masks sensitive fields in JSON payloads before they are logged.
pub fn sanitize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sanitized = serde_json::Map::new();
            for (key, val) in map {
                let sanitized_val = if is_sensitive_field(key) {
                    mask_value(val)
                } else {
                    sanitize_json(val)
                };
                sanitized.insert(key.clone(), sanitized_val);
            }
            Value::Object(sanitized)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sanitize_json).collect()),
        _ => value.clone(),
    }
}

fn is_sensitive_field(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "account_number" | "iban" | "card_number" | "password" | "secret" | "token" | "api_key"
            | "authorization"
    )
}

fn mask_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s.chars().count() > 8 => {
            let chars: Vec<char> = s.chars().collect();
            let visible: String = chars[..4].iter().collect();
            let end: String = chars[chars.len() - 4..].iter().collect();
            Value::String(format!("{}****{}", visible, end))
        }
        _ => Value::String("****".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_account_number() {
        let input = json!({
            "transaction_id": "txn-1",
            "metadata": {"account_number": "DE89370400440532013000"},
            "amount": 100.0
        });

        let sanitized = sanitize_json(&input);
        let account = sanitized["metadata"]["account_number"].as_str().unwrap();

        assert_eq!(account, "DE89****3000");
        assert_eq!(sanitized["transaction_id"], "txn-1");
        assert_eq!(sanitized["amount"], 100.0);
    }

    #[test]
    fn test_sanitize_short_and_non_string_values() {
        let input = json!({"token": "abc", "api_key": 12345});

        let sanitized = sanitize_json(&input);
        assert_eq!(sanitized["token"], "****");
        assert_eq!(sanitized["api_key"], "****");
    }

    #[test]
    fn test_sanitize_arrays() {
        let input = json!([{"iban": "GB29NWBK60161331926819"}, {"name": "Acme"}]);

        let sanitized = sanitize_json(&input);
        assert!(sanitized[0]["iban"].as_str().unwrap().contains("****"));
        assert_eq!(sanitized[1]["name"], "Acme");
    }
}
