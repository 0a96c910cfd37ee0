//! Normalization into a preferred measurement system

use ladle_core::{LadleError, Value};
use ladle_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};
use ladle_units::Quantity;

use crate::helpers::{
    extract_amount, extract_optional_system, extract_scale, extract_system, extract_unit,
    quantity_to_value,
};

// ============ normalize_quantity ============

pub struct NormalizeQuantity;

static NORMALIZE_QUANTITY_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("amount", "Number", "Amount (null for no amount)"),
    ArgMeta::required("unit", "Text", "Unit id of the amount"),
    ArgMeta::optional("system", "Text", "Target system: metric, us or imperial", "preference"),
    ArgMeta::optional("scale", "Number", "Multiplier applied before normalizing", "1"),
];

static NORMALIZE_QUANTITY_EXAMPLES: [&str; 4] = [
    "normalize_quantity(1200, \"milliliter\") -> 1.2 l",
    "normalize_quantity(0.5, \"gram\") -> 0.5 g",
    "normalize_quantity(1, \"kilo\", \"us\") -> 2.2 lb",
    "normalize_quantity(3, \"deciliter\", \"metric\", 4) -> 1.2 l",
];

static NORMALIZE_QUANTITY_RELATED: [&str; 2] = ["quantity_alternatives", "add_quantities"];

impl FunctionPlugin for NormalizeQuantity {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "normalize_quantity",
            description: "Express a quantity in the most legible unit of a measurement system",
            usage: "normalize_quantity(amount, unit, [system], [scale])",
            args: &NORMALIZE_QUANTITY_ARGS,
            returns: "Object",
            examples: &NORMALIZE_QUANTITY_EXAMPLES,
            category: "kitchen",
            related: &NORMALIZE_QUANTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(LadleError::arg_count("normalize_quantity", 2, args.len()));
        }

        let quantity = match extract_quantity(args, "normalize_quantity") {
            Ok(q) => q,
            Err(e) => return Value::Error(e),
        };
        let system = match extract_optional_system(args, 2, ctx, "normalize_quantity", "system") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let scale = match extract_scale(args, 3, "normalize_quantity") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        quantity_to_value(&quantity.normalized(system, scale), ctx.abbreviate())
    }
}

// ============ quantity_alternatives ============

pub struct QuantityAlternatives;

static QUANTITY_ALTERNATIVES_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("amount", "Number", "Amount (null for no amount)"),
    ArgMeta::required("unit", "Text", "Unit id of the amount"),
    ArgMeta::required("system", "Text", "System whose units to list: metric, us or imperial"),
    ArgMeta::optional("scale", "Number", "Multiplier applied before converting", "1"),
];

static QUANTITY_ALTERNATIVES_EXAMPLES: [&str; 2] = [
    "quantity_alternatives(1, \"liter\", \"metric\") -> [1000 ml, 200 tsp, ...]",
    "quantity_alternatives(2, \"USCup\", \"us\") -> [96 tsp, 48 dstspn, 32 tbsp, ...]",
];

static QUANTITY_ALTERNATIVES_RELATED: [&str; 2] = ["normalize_quantity", "family_members"];

impl FunctionPlugin for QuantityAlternatives {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "quantity_alternatives",
            description: "The quantity expressed in every other unit of its family in a system",
            usage: "quantity_alternatives(amount, unit, system, [scale])",
            args: &QUANTITY_ALTERNATIVES_ARGS,
            returns: "List",
            examples: &QUANTITY_ALTERNATIVES_EXAMPLES,
            category: "kitchen",
            related: &QUANTITY_ALTERNATIVES_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(LadleError::arg_count("quantity_alternatives", 3, args.len()));
        }

        let quantity = match extract_quantity(args, "quantity_alternatives") {
            Ok(q) => q,
            Err(e) => return Value::Error(e),
        };
        let system = match extract_system(&args[2], "quantity_alternatives", "system") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let scale = match extract_scale(args, 3, "quantity_alternatives") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        Value::List(
            quantity
                .alternatives(system, scale)
                .iter()
                .map(|q| quantity_to_value(q, ctx.abbreviate()))
                .collect(),
        )
    }
}

fn extract_quantity(args: &[Value], func: &str) -> Result<Quantity, LadleError> {
    let amount = extract_amount(&args[0], func, "amount")?;
    let unit = extract_unit(&args[1], func, "unit")?;
    Ok(Quantity::from_parts(amount, unit))
}
