//! Unit conversion and quantity arithmetic

use ladle_core::{LadleError, Value};
use ladle_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};
use ladle_units::Quantity;

use crate::helpers::{
    conversion_error, extract_amount, extract_optional_system, extract_unit, quantity_to_value,
};

// ============ convert_unit ============

pub struct ConvertUnit;

static CONVERT_UNIT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("amount", "Number", "Amount to convert (null for no amount)"),
    ArgMeta::required("from", "Text", "Unit id of the amount, e.g. \"USCup\""),
    ArgMeta::required("to", "Text", "Unit id to convert into, same kind"),
];

static CONVERT_UNIT_EXAMPLES: [&str; 3] = [
    "convert_unit(1, \"liter\", \"milliliter\") -> 1000 ml",
    "convert_unit(2, \"USCup\", \"deciliter\") -> 4.8 dl",
    "convert_unit(1, \"gram\", \"liter\") -> #ERROR: INCOMPATIBLE_KIND",
];

static CONVERT_UNIT_RELATED: [&str; 2] = ["normalize_quantity", "quantity_alternatives"];

impl FunctionPlugin for ConvertUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_unit",
            description: "Convert an amount between two units of the same kind",
            usage: "convert_unit(amount, from, to)",
            args: &CONVERT_UNIT_ARGS,
            returns: "Object",
            examples: &CONVERT_UNIT_EXAMPLES,
            category: "kitchen",
            related: &CONVERT_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(LadleError::arg_count("convert_unit", 3, args.len()));
        }

        let amount = match extract_amount(&args[0], "convert_unit", "amount") {
            Ok(a) => a,
            Err(e) => return Value::Error(e),
        };
        let from = match extract_unit(&args[1], "convert_unit", "from") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };
        let to = match extract_unit(&args[2], "convert_unit", "to") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        match Quantity::from_parts(amount, from).convert_to(to) {
            Ok(q) => quantity_to_value(&q, ctx.abbreviate()),
            Err(e) => Value::Error(conversion_error(e, "convert_unit")),
        }
    }
}

// ============ add_quantities ============

pub struct AddQuantities;

static ADD_QUANTITIES_ARGS: [ArgMeta; 5] = [
    ArgMeta::required("a_amount", "Number", "First amount (null for no amount)"),
    ArgMeta::required("a_unit", "Text", "Unit id of the first amount"),
    ArgMeta::required("b_amount", "Number", "Second amount (null for no amount)"),
    ArgMeta::required("b_unit", "Text", "Unit id of the second amount"),
    ArgMeta::optional("system", "Text", "System to express the sum in", "preference"),
];

static ADD_QUANTITIES_EXAMPLES: [&str; 3] = [
    "add_quantities(1, \"USCup\", 100, \"milliliter\") -> 3.4 dl",
    "add_quantities(2, \"tablespoon\", 2, \"tablespoon\") -> 4 tbsp",
    "add_quantities(null, \"pinch\", 2, \"gram\") -> 2 g",
];

static ADD_QUANTITIES_RELATED: [&str; 2] = ["normalize_quantity", "convert_unit"];

impl FunctionPlugin for AddQuantities {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "add_quantities",
            description: "Add two quantities of the same kind and normalize the sum",
            usage: "add_quantities(a_amount, a_unit, b_amount, b_unit, [system])",
            args: &ADD_QUANTITIES_ARGS,
            returns: "Object",
            examples: &ADD_QUANTITIES_EXAMPLES,
            category: "kitchen",
            related: &ADD_QUANTITIES_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 4 {
            return Value::Error(LadleError::arg_count("add_quantities", 4, args.len()));
        }

        let lhs = match extract_quantity(args, 0, "a_amount", "a_unit") {
            Ok(q) => q,
            Err(e) => return Value::Error(e),
        };
        let rhs = match extract_quantity(args, 2, "b_amount", "b_unit") {
            Ok(q) => q,
            Err(e) => return Value::Error(e),
        };
        let system = match extract_optional_system(args, 4, ctx, "add_quantities", "system") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match lhs.add(&rhs, system) {
            Ok(sum) => quantity_to_value(&sum, ctx.abbreviate()),
            Err(e) => Value::Error(conversion_error(e, "add_quantities")),
        }
    }
}

fn extract_quantity(
    args: &[Value],
    index: usize,
    amount_arg: &str,
    unit_arg: &str,
) -> Result<Quantity, LadleError> {
    let amount = extract_amount(&args[index], "add_quantities", amount_arg)?;
    let unit = extract_unit(&args[index + 1], "add_quantities", unit_arg)?;
    Ok(Quantity::from_parts(amount, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_core::codes;
    use ladle_units::MeasurementSystem;

    fn close(value: &Value, expected: f64) -> bool {
        value.get("amount").as_number().map_or(false, |a| (a - expected).abs() < 1e-6)
    }

    #[test]
    fn test_convert_unit() {
        let ctx = EvalContext::new();
        let result = ConvertUnit.call(
            &[Value::Number(1.0), Value::from("liter"), Value::from("milliliter")],
            &ctx,
        );
        assert!(close(&result, 1000.0));
        assert_eq!(result.get("label").as_text(), Some("1000 ml"));
    }

    #[test]
    fn test_convert_unit_absent_amount() {
        let ctx = EvalContext::new();
        let result = ConvertUnit.call(
            &[Value::Null, Value::from("teaspoon"), Value::from("tablespoon")],
            &ctx,
        );
        assert!(result.get("amount").is_null());
        assert_eq!(result.get("unit").as_text(), Some("tablespoon"));
    }

    #[test]
    fn test_convert_unit_cross_kind() {
        let ctx = EvalContext::new();
        let result = ConvertUnit.call(
            &[Value::Number(1.0), Value::from("gram"), Value::from("liter")],
            &ctx,
        );
        match result {
            Value::Error(e) => assert_eq!(e.code, codes::INCOMPATIBLE_KIND),
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_unit_arg_errors() {
        let ctx = EvalContext::new();
        let result = ConvertUnit.call(&[Value::Number(1.0)], &ctx);
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::ARG_COUNT));

        let result = ConvertUnit.call(
            &[Value::Number(1.0), Value::from("cubit"), Value::from("liter")],
            &ctx,
        );
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::UNKNOWN_UNIT));
    }

    #[test]
    fn test_add_quantities() {
        let ctx = EvalContext::new();
        let result = AddQuantities.call(
            &[
                Value::Number(1.0), Value::from("USCup"),
                Value::Number(100.0), Value::from("milliliter"),
            ],
            &ctx,
        );
        assert_eq!(result.get("unit").as_text(), Some("deciliter"));
        assert!(close(&result, 3.4));
    }

    #[test]
    fn test_add_quantities_uses_context_system() {
        let ctx = EvalContext::new().with_system(MeasurementSystem::US);
        let result = AddQuantities.call(
            &[
                Value::Number(1.0), Value::from("deciliter"),
                Value::Number(140.0), Value::from("milliliter"),
            ],
            &ctx,
        );
        assert_eq!(result.get("unit").as_text(), Some("USCup"));
        assert!(close(&result, 1.0));
    }

    #[test]
    fn test_add_quantities_unmeasured_side() {
        let ctx = EvalContext::new();
        let result = AddQuantities.call(
            &[
                Value::Null, Value::from("pinch"),
                Value::Number(2.0), Value::from("gram"),
            ],
            &ctx,
        );
        assert_eq!(result.get("unit").as_text(), Some("gram"));
        assert!(close(&result, 2.0));
    }

    #[test]
    fn test_add_quantities_kind_mismatch() {
        let ctx = EvalContext::new();
        let result = AddQuantities.call(
            &[
                Value::Number(1.0), Value::from("gram"),
                Value::Number(1.0), Value::from("liter"),
            ],
            &ctx,
        );
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::INCOMPATIBLE_KIND));
    }
}
