//! Common argument extraction and result shaping

use ladle_core::{LadleError, Value};
use ladle_plugin::EvalContext;
use ladle_units::{ConversionError, MeasurementSystem, PhysicalKind, Quantity, Unit, UNITS};
use std::collections::HashMap;

/// Extract a Number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, LadleError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Null => Err(LadleError::arg_type(func, arg, "Number", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(LadleError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract an amount; `Null` means "no amount given"
pub fn extract_amount(value: &Value, func: &str, arg: &str) -> Result<Option<f64>, LadleError> {
    match value {
        Value::Null => Ok(None),
        other => extract_number(other, func, arg).map(Some),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, LadleError> {
    match value {
        Value::Text(s) => Ok(s.as_str()),
        Value::Null => Err(LadleError::arg_type(func, arg, "Text", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(LadleError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Resolve a unit identifier through the catalog
pub fn extract_unit(value: &Value, func: &str, arg: &str) -> Result<Unit, LadleError> {
    let id = extract_text(value, func, arg)?;
    UNITS.get(id).ok_or_else(|| {
        LadleError::unknown_unit(id).in_function(func).for_argument(arg)
    })
}

pub fn extract_kind(value: &Value, func: &str, arg: &str) -> Result<PhysicalKind, LadleError> {
    let id = extract_text(value, func, arg)?;
    id.parse::<PhysicalKind>()
        .map_err(|_| LadleError::unknown_kind(id).in_function(func).for_argument(arg))
}

pub fn extract_system(value: &Value, func: &str, arg: &str) -> Result<MeasurementSystem, LadleError> {
    let id = extract_text(value, func, arg)?;
    id.parse::<MeasurementSystem>()
        .map_err(|_| LadleError::unknown_system(id).in_function(func).for_argument(arg))
}

/// Optional system argument; missing or null falls back to the caller's preference
pub fn extract_optional_system(
    args: &[Value],
    index: usize,
    ctx: &EvalContext,
    func: &str,
    arg: &str,
) -> Result<MeasurementSystem, LadleError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(ctx.system()),
        Some(value) => extract_system(value, func, arg),
    }
}

/// Extract optional Number (may be missing or null)
pub fn extract_optional_number(
    args: &[Value],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<Option<f64>, LadleError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => extract_number(value, func, arg).map(Some),
    }
}

/// Extract optional Bool (may be missing or null)
pub fn extract_optional_bool(
    args: &[Value],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<Option<bool>, LadleError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(LadleError::arg_type(func, arg, "Bool", other.type_name())),
    }
}

/// Optional scale factor, 1 when missing; must be positive
pub fn extract_scale(args: &[Value], index: usize, func: &str) -> Result<f64, LadleError> {
    let scale = extract_optional_number(args, index, func, "scale")?.unwrap_or(1.0);
    validate_positive(scale, func, "scale")?;
    Ok(scale)
}

/// Validate positive number
pub fn validate_positive(value: f64, func: &str, arg: &str) -> Result<(), LadleError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(LadleError::domain_error(format!(
            "{}(): {} must be positive, got {}",
            func, arg, value
        )));
    }
    Ok(())
}

/// Quantity as a host object: `{amount, unit, label}`
pub fn quantity_to_value(quantity: &Quantity, abbreviated: bool) -> Value {
    let mut obj = HashMap::new();
    obj.insert("amount".to_string(), Value::from(quantity.amount));
    obj.insert("unit".to_string(), Value::from(quantity.unit.id()));
    obj.insert("label".to_string(), Value::Text(quantity.describe(abbreviated)));
    Value::Object(obj)
}

/// Unit as a host object: `{id, kind, system, label}`
pub fn unit_to_value(unit: Unit, preferred: MeasurementSystem, abbreviated: bool) -> Value {
    let mut obj = HashMap::new();
    obj.insert("id".to_string(), Value::from(unit.id()));
    obj.insert("kind".to_string(), Value::from(unit.kind().id()));
    obj.insert("system".to_string(), Value::from(unit.system_in(preferred).id()));
    obj.insert("label".to_string(), Value::from(unit.describe(abbreviated)));
    Value::Object(obj)
}

/// Map an engine error onto the host error shape
pub fn conversion_error(err: ConversionError, func: &str) -> LadleError {
    let mapped = match &err {
        ConversionError::IncompatibleKind { from, to, .. } => {
            LadleError::incompatible_kind(from.id(), to.id())
        }
        ConversionError::UnknownUnit(id) => LadleError::unknown_unit(id),
        ConversionError::UnknownSystem(id) => LadleError::unknown_system(id),
        ConversionError::UnknownKind(id) => LadleError::unknown_kind(id),
    };
    mapped.in_function(func).with_note(err.to_string())
}
