//! Ladle Core - Fundamental host types
//!
//! This crate provides the types shared by every host-facing crate:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `LadleError`: Structured errors with codes and suggestions

mod value;
mod error;

pub use value::Value;
pub use error::{LadleError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, LadleError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_accessors() {
            assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
            assert_eq!(Value::Text("ml".into()).as_text(), Some("ml"));
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert_eq!(Value::Null.as_number(), None);
            assert!(Value::Null.is_null());
        }

        #[test]
        fn test_from_optional_amount() {
            assert_eq!(Value::from(Some(2.0)), Value::Number(2.0));
            assert_eq!(Value::from(None::<f64>), Value::Null);
        }

        #[test]
        fn test_get_field() {
            let mut map = HashMap::new();
            map.insert("unit".to_string(), Value::from("gram"));
            let obj = Value::Object(map);

            assert_eq!(obj.get("unit").as_text(), Some("gram"));
            let missing = obj.get("amount");
            assert!(missing.is_error());
            if let Value::Error(e) = missing {
                assert_eq!(e.code, codes::UNDEFINED_FIELD);
            }

            let not_object = Value::Number(1.0).get("unit");
            assert!(not_object.is_error());
            assert!(Value::Number(1.0).as_object().is_none());
            assert_eq!(obj.as_object().map(|o| o.len()), Some(1));
        }

        #[test]
        fn test_display() {
            let mut map = HashMap::new();
            map.insert("label".to_string(), Value::from("1.2 l"));
            assert_eq!(Value::Object(map).to_string(), "1.2 l");
            assert_eq!(Value::Object(HashMap::new()).to_string(), "[Object]");
            assert_eq!(Value::List(vec![1.0.into(), 2.0.into()]).to_string(), "[1, 2]");
            let err = Value::Error(LadleError::unknown_unit("cubit"));
            assert_eq!(err.to_string(), "#ERROR: UNKNOWN_UNIT");
        }

        #[test]
        fn test_serde_tagged() {
            let json = serde_json::to_string(&Value::Number(3.4)).unwrap();
            assert_eq!(json, r#"{"type":"Number","value":3.4}"#);
            let back: Value = serde_json::from_str(r#"{"type":"Text","value":"dl"}"#).unwrap();
            assert_eq!(back, Value::from("dl"));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_builders() {
            let err = LadleError::arg_type("convert_unit", "amount", "Number", "Text");
            assert_eq!(err.code, codes::ARG_TYPE);
            let ctx = err.context.as_ref().unwrap();
            assert_eq!(ctx.function.as_deref(), Some("convert_unit"));
            assert_eq!(ctx.argument.as_deref(), Some("amount"));

            let err = LadleError::domain_error("negative portions").with_note("while scaling");
            assert_eq!(err.context.unwrap().notes, vec!["while scaling".to_string()]);
        }

        #[test]
        fn test_display_includes_suggestion() {
            let err = LadleError::unknown_system("cubits");
            let text = err.to_string();
            assert!(text.starts_with("[UNKNOWN_SYSTEM]"));
            assert!(text.contains("suggestion"));
        }

        #[test]
        fn test_severity() {
            assert_eq!(LadleError::internal("oops").severity, Severity::Fatal);
            assert_eq!(LadleError::incompatible_kind("gram", "liter").severity, Severity::Error);
            let json = serde_json::to_value(LadleError::not_found("x")).unwrap();
            assert_eq!(json["severity"], "error");
            assert!(json.get("suggestion").is_none());
        }
    }
}
